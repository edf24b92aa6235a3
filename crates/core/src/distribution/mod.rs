//! Distribution module - request/result models, the allocation engine and
//! the contributor view.

mod contributor_view;
mod distribution_calculator;
mod distribution_model;
mod distribution_service;
mod distribution_traits;

#[cfg(test)]
mod distribution_calculator_tests;

pub use contributor_view::{contributor_view, ContributorContribution, ContributorSummary};
pub use distribution_calculator::{compute, compute_batch};
pub use distribution_model::{
    ContributorGroup, DistributionDetail, DistributionRequest, DistributionResult,
    MatrixPayload, ReceiverGroup, ReceiverGroupMatrix, ReceiverMemberRow,
};
pub use distribution_service::DistributionService;
pub use distribution_traits::DistributionServiceTrait;
