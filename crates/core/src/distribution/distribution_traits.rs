use crate::errors::Result;

use super::contributor_view::ContributorSummary;
use super::distribution_model::{DistributionRequest, DistributionResult};

/// Trait for distribution service operations
pub trait DistributionServiceTrait: Send + Sync {
    /// Computes the distribution matrix for a single request.
    fn calculate(&self, request: &DistributionRequest) -> Result<DistributionResult>;

    /// Computes independent requests, returning results in request order.
    fn calculate_batch(
        &self,
        requests: &[DistributionRequest],
    ) -> Vec<Result<DistributionResult>>;

    /// Regroups an already computed result by contributor member.
    fn contributor_view(&self, result: &DistributionResult) -> Vec<ContributorSummary>;
}
