//! Contributor-centric regrouping of a distribution result.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::distribution_model::DistributionResult;

/// One payment made by a contributor member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributorContribution {
    pub receiver_group: String,
    pub receiver_member: String,
    pub amount: f64,
}

impl ContributorContribution {
    /// Receiver label used by reports, e.g. `Family - Ravi`.
    pub fn receiver_label(&self) -> String {
        format!("{} - {}", self.receiver_group, self.receiver_member)
    }
}

/// Everything a single contributor member pays, across all receivers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributorSummary {
    pub contributor: String,
    pub contributions: Vec<ContributorContribution>,
    pub total: f64,
}

/// Regroups every detail of `result` by contributor member name.
///
/// Contributors appear in the order they are first met while walking the
/// matrix (groups, then rows, then details) and their contributions keep that
/// same traversal order. Details that share a contributor name are merged into
/// one summary even when the names came from different contributor groups.
pub fn contributor_view(result: &DistributionResult) -> Vec<ContributorSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<ContributorSummary> = Vec::new();

    for (group_name, receiver, detail) in result.entries() {
        let position = *index.entry(detail.contributor.as_str()).or_insert_with(|| {
            summaries.push(ContributorSummary {
                contributor: detail.contributor.clone(),
                contributions: Vec::new(),
                total: 0.0,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[position];
        summary.contributions.push(ContributorContribution {
            receiver_group: group_name.to_string(),
            receiver_member: receiver.to_string(),
            amount: detail.amount,
        });
        summary.total += detail.amount;
    }

    summaries
}
