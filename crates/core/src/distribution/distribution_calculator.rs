//! Allocation engine.
//!
//! Every (contributor member, receiver member) pair receives
//!
//! ```text
//! total_amount * (c.percentage / 100) / |c.members| * (g.percentage / 100) * (1 / |g.members|)
//! ```
//!
//! The result keeps receiver groups, receiver members and contributor details
//! in input order; renderers rely on that order and never re-sort. Amounts are
//! never rounded here.

use log::{debug, warn};
use rayon::prelude::*;

use crate::constants::FULL_PERCENTAGE;
use crate::errors::{Result, ValidationError};

use super::distribution_model::{
    ContributorGroup, DistributionDetail, DistributionRequest, DistributionResult, ReceiverGroup,
    ReceiverGroupMatrix, ReceiverMemberRow,
};

/// Computes the full distribution matrix for a request.
///
/// Validation runs first; on failure nothing is built. Inputs whose amounts
/// overflow to a non-finite total are rejected as invalid input.
pub fn compute(request: &DistributionRequest) -> Result<DistributionResult> {
    request.validate()?;
    warn_on_partial_allocation(request);

    let matrix: Vec<ReceiverGroupMatrix> = request
        .receivers
        .iter()
        .map(|group| group_matrix(request.total_amount, &request.contributors, group))
        .collect();
    let result = DistributionResult::new(matrix);
    if !result.overall_total.is_finite() {
        return Err(ValidationError::InvalidInput(format!(
            "amounts overflow: overall total is {}",
            result.overall_total
        ))
        .into());
    }

    debug!(
        "Computed distribution: {} receiver groups, {} details, overall total {}",
        result.matrix.len(),
        result.detail_count(),
        result.overall_total
    );
    Ok(result)
}

/// Computes several independent requests in parallel.
///
/// Results come back in request order and a failing request does not affect
/// the others.
pub fn compute_batch(requests: &[DistributionRequest]) -> Vec<Result<DistributionResult>> {
    requests.par_iter().map(compute).collect()
}

/// Share of the total that a single receiver member of `group` gets, as a
/// fraction.
fn receiver_share(group: &ReceiverGroup) -> f64 {
    (group.percentage / FULL_PERCENTAGE) * (1.0 / group.members.len() as f64)
}

fn group_matrix(
    total_amount: f64,
    contributors: &[ContributorGroup],
    group: &ReceiverGroup,
) -> ReceiverGroupMatrix {
    let share = receiver_share(group);
    let rows = group
        .members
        .iter()
        .map(|receiver| {
            ReceiverMemberRow::new(receiver.as_str(), details(total_amount, contributors, share))
        })
        .collect();
    ReceiverGroupMatrix::new(group.name.as_str(), rows)
}

/// Details for one receiver member, one per contributor member.
fn details(
    total_amount: f64,
    contributors: &[ContributorGroup],
    receiver_share: f64,
) -> Vec<DistributionDetail> {
    contributors
        .iter()
        .flat_map(|contributor| {
            let group_contribution = (contributor.percentage / FULL_PERCENTAGE) * total_amount;
            let member_share = group_contribution / contributor.members.len() as f64;
            contributor.members.iter().map(move |member| DistributionDetail {
                contributor: member.clone(),
                amount: member_share * receiver_share,
            })
        })
        .collect()
}

fn warn_on_partial_allocation(request: &DistributionRequest) {
    if request.is_fully_allocated()
        || request.contributors.is_empty()
        || request.receivers.is_empty()
    {
        return;
    }
    warn!(
        "Percentages do not add up to 100 (contributors: {}, receivers: {}); amounts are scaled as given",
        request.contributor_percentage_total(),
        request.receiver_percentage_total()
    );
}
