//! Distribution domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_PERCENTAGE, PERCENTAGE_SUM_TOLERANCE};
use crate::errors::{GroupSide, Result, ValidationError};

/// A group of parties supplying funds. The group's percentage of the total is
/// split evenly between its members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContributorGroup {
    pub name: String,
    pub percentage: f64,
    pub members: Vec<String>,
}

/// A group of parties receiving funds. The group's percentage is split evenly
/// between its members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiverGroup {
    pub name: String,
    pub percentage: f64,
    pub members: Vec<String>,
}

/// Input to the allocation engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionRequest {
    pub total_amount: f64,
    pub contributors: Vec<ContributorGroup>,
    pub receivers: Vec<ReceiverGroup>,
}

impl DistributionRequest {
    /// Returns a copy with group and member names trimmed.
    ///
    /// Callers apply this before invoking the engine so that the same logical
    /// member never ends up as two entries because of stray whitespace.
    pub fn normalized(&self) -> Self {
        Self {
            total_amount: self.total_amount,
            contributors: self
                .contributors
                .iter()
                .map(|g| ContributorGroup {
                    name: g.name.trim().to_string(),
                    percentage: g.percentage,
                    members: trim_all(&g.members),
                })
                .collect(),
            receivers: self
                .receivers
                .iter()
                .map(|g| ReceiverGroup {
                    name: g.name.trim().to_string(),
                    percentage: g.percentage,
                    members: trim_all(&g.members),
                })
                .collect(),
        }
    }

    /// Sum of all contributor group percentages.
    pub fn contributor_percentage_total(&self) -> f64 {
        self.contributors.iter().fold(0.0, |acc, g| acc + g.percentage)
    }

    /// Sum of all receiver group percentages.
    pub fn receiver_percentage_total(&self) -> f64 {
        self.receivers.iter().fold(0.0, |acc, g| acc + g.percentage)
    }

    /// True when both sides add up to 100%, in which case the overall total
    /// of the result equals `total_amount`.
    pub fn is_fully_allocated(&self) -> bool {
        is_full(self.contributor_percentage_total()) && is_full(self.receiver_percentage_total())
    }

    /// Checks the request before any computation happens.
    ///
    /// Percentages are not range-checked or normalized; only non-finite
    /// values are rejected.
    pub fn validate(&self) -> Result<()> {
        if !self.total_amount.is_finite() {
            return Err(ValidationError::InvalidInput(format!(
                "total_amount must be a finite number, got {}",
                self.total_amount
            ))
            .into());
        }
        if self.total_amount <= 0.0 {
            return Err(ValidationError::NonPositiveTotal(self.total_amount).into());
        }

        for group in &self.contributors {
            validate_group(GroupSide::Contributor, &group.name, group.percentage, &group.members)?;
        }
        for group in &self.receivers {
            validate_group(GroupSide::Receiver, &group.name, group.percentage, &group.members)?;
        }
        Ok(())
    }
}

fn trim_all(members: &[String]) -> Vec<String> {
    members.iter().map(|m| m.trim().to_string()).collect()
}

fn is_full(total: f64) -> bool {
    (total - FULL_PERCENTAGE).abs() <= PERCENTAGE_SUM_TOLERANCE
}

fn validate_group(side: GroupSide, name: &str, percentage: f64, members: &[String]) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::MissingField(format!("{side} group name")).into());
    }
    if !percentage.is_finite() {
        return Err(ValidationError::InvalidInput(format!(
            "percentage of {side} group '{name}' must be a finite number"
        ))
        .into());
    }
    if members.is_empty() {
        return Err(ValidationError::EmptyGroup {
            side,
            group: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Amount one contributor member pays to one receiver member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionDetail {
    pub contributor: String,
    pub amount: f64,
}

/// Everything one receiver member gets, broken down per contributor member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiverMemberRow {
    pub receiver: String,
    pub details: Vec<DistributionDetail>,
    pub subtotal: f64,
}

impl ReceiverMemberRow {
    /// Builds a row, deriving the subtotal from the details in order.
    pub fn new(receiver: impl Into<String>, details: Vec<DistributionDetail>) -> Self {
        let subtotal = details.iter().fold(0.0, |acc, d| acc + d.amount);
        Self {
            receiver: receiver.into(),
            details,
            subtotal,
        }
    }
}

/// All rows of a single receiver group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiverGroupMatrix {
    pub group_name: String,
    #[serde(rename = "members")]
    pub rows: Vec<ReceiverMemberRow>,
    pub group_total: f64,
}

impl ReceiverGroupMatrix {
    /// Builds a group matrix, deriving the total from the row subtotals.
    pub fn new(group_name: impl Into<String>, rows: Vec<ReceiverMemberRow>) -> Self {
        let group_total = rows.iter().fold(0.0, |acc, r| acc + r.subtotal);
        Self {
            group_name: group_name.into(),
            rows,
            group_total,
        }
    }
}

/// Full cross-matrix produced by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DistributionResult {
    pub matrix: Vec<ReceiverGroupMatrix>,
    pub overall_total: f64,
}

impl DistributionResult {
    /// Builds a result, deriving the overall total from the group totals.
    pub fn new(matrix: Vec<ReceiverGroupMatrix>) -> Self {
        let overall_total = matrix.iter().fold(0.0, |acc, g| acc + g.group_total);
        Self {
            matrix,
            overall_total,
        }
    }

    /// Iterates every detail together with the receiver group and member it
    /// belongs to, in matrix order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &DistributionDetail)> + '_ {
        self.matrix.iter().flat_map(|group| {
            group.rows.iter().flat_map(move |row| {
                row.details
                    .iter()
                    .map(move |detail| (group.group_name.as_str(), row.receiver.as_str(), detail))
            })
        })
    }

    /// Number of (contributor member, receiver member) pairs.
    pub fn detail_count(&self) -> usize {
        self.matrix
            .iter()
            .flat_map(|g| g.rows.iter())
            .map(|r| r.details.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

/// Matrix-only payload accepted by the export and contributor view endpoints.
///
/// The overall total is optional on the wire; when absent it is recomputed
/// from the group totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixPayload {
    pub matrix: Vec<ReceiverGroupMatrix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_total: Option<f64>,
}

impl From<MatrixPayload> for DistributionResult {
    fn from(payload: MatrixPayload) -> Self {
        match payload.overall_total {
            Some(overall_total) => DistributionResult {
                matrix: payload.matrix,
                overall_total,
            },
            None => DistributionResult::new(payload.matrix),
        }
    }
}
