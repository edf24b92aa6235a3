//! CSV rendering of a distribution result.
//!
//! The report has two sections separated by a blank line: the receiver
//! perspective (one row per detail, in matrix order) and the contributor
//! perspective (one row per contribution, contributors in first-appearance
//! order).

use csv::{Terminator, WriterBuilder};

use crate::distribution::{contributor_view, DistributionResult};
use crate::errors::{Error, Result};

use super::report_model::ReportConfig;

/// Title of the contributor perspective section.
const CONTRIBUTOR_SECTION_TITLE: &str = "Contributor View";

/// Writes the full two-section report to a string.
pub fn write_csv_report(result: &DistributionResult, config: &ReportConfig) -> Result<String> {
    let mut out = write_receiver_section(result, config)?;
    out.push('\n');
    out.push_str(&write_contributor_section(result, config)?);
    Ok(out)
}

fn write_receiver_section(result: &DistributionResult, config: &ReportConfig) -> Result<String> {
    let mut rows: Vec<Vec<String>> = vec![
        vec![config.title.clone()],
        vec![
            "Receiver Group".to_string(),
            "Receiver Member".to_string(),
            "Contributor".to_string(),
            config.amount_header(),
        ],
    ];
    rows.extend(result.entries().map(|(group, receiver, detail)| {
        vec![
            group.to_string(),
            receiver.to_string(),
            detail.contributor.clone(),
            config.format_number(detail.amount),
        ]
    }));
    write_rows(&rows)
}

fn write_contributor_section(
    result: &DistributionResult,
    config: &ReportConfig,
) -> Result<String> {
    let mut rows: Vec<Vec<String>> = vec![
        vec![CONTRIBUTOR_SECTION_TITLE.to_string()],
        vec![
            "Contributor".to_string(),
            "Receiver Group / Member".to_string(),
            config.amount_header(),
        ],
    ];
    for summary in contributor_view(result) {
        rows.extend(summary.contributions.iter().map(|entry| {
            vec![
                summary.contributor.clone(),
                entry.receiver_label(),
                config.format_number(entry.amount),
            ]
        }));
    }
    write_rows(&rows)
}

fn write_rows(rows: &[Vec<String>]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Report(e.to_string()))
}
