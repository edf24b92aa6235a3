use log::debug;

use crate::errors::Result;

use super::contributor_view::{contributor_view, ContributorSummary};
use super::distribution_calculator::{compute, compute_batch};
use super::distribution_model::{DistributionRequest, DistributionResult};
use super::distribution_traits::DistributionServiceTrait;

/// Stateless service wrapping the allocation engine.
///
/// Requests are normalized (names trimmed) before they reach the engine.
#[derive(Debug, Default, Clone)]
pub struct DistributionService;

impl DistributionService {
    pub fn new() -> Self {
        DistributionService
    }
}

impl DistributionServiceTrait for DistributionService {
    fn calculate(&self, request: &DistributionRequest) -> Result<DistributionResult> {
        debug!(
            "Calculating distribution of {} across {} contributor and {} receiver groups",
            request.total_amount,
            request.contributors.len(),
            request.receivers.len()
        );
        compute(&request.normalized())
    }

    fn calculate_batch(
        &self,
        requests: &[DistributionRequest],
    ) -> Vec<Result<DistributionResult>> {
        debug!("Calculating batch of {} distributions", requests.len());
        let normalized: Vec<DistributionRequest> =
            requests.iter().map(DistributionRequest::normalized).collect();
        compute_batch(&normalized)
    }

    fn contributor_view(&self, result: &DistributionResult) -> Vec<ContributorSummary> {
        contributor_view(result)
    }
}
