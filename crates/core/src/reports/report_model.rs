//! Report configuration models.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CSV_FILE_NAME, DEFAULT_CURRENCY_SYMBOL, DEFAULT_PDF_FILE_NAME, DEFAULT_REPORT_TITLE,
    DISPLAY_DECIMAL_PRECISION, MAX_DISPLAY_DECIMAL_PRECISION,
};

/// Presentation settings owned by the renderer. None of these reach the
/// allocation engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Symbol shown in amount headers and formatted amounts
    pub currency_symbol: String,
    /// Fixed number of decimals used when rendering amounts
    pub decimal_places: u32,
    /// Title row written at the top of the report
    pub title: String,
    /// Attachment name for CSV downloads
    pub file_name: String,
    /// Attachment name for PDF downloads
    #[serde(default = "default_pdf_file_name")]
    pub pdf_file_name: String,
}

fn default_pdf_file_name() -> String {
    DEFAULT_PDF_FILE_NAME.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_places: DISPLAY_DECIMAL_PRECISION,
            title: DEFAULT_REPORT_TITLE.to_string(),
            file_name: DEFAULT_CSV_FILE_NAME.to_string(),
            pdf_file_name: default_pdf_file_name(),
        }
    }
}

impl ReportConfig {
    /// Header for amount columns, e.g. `Amount (₹)`.
    pub fn amount_header(&self) -> String {
        format!("Amount ({})", self.currency_symbol)
    }

    /// Decimals actually rendered, capped at `MAX_DISPLAY_DECIMAL_PRECISION`.
    pub fn effective_decimal_places(&self) -> usize {
        self.decimal_places.min(MAX_DISPLAY_DECIMAL_PRECISION) as usize
    }

    /// Renders an amount with the configured precision and no symbol.
    pub fn format_number(&self, amount: f64) -> String {
        format!("{:.*}", self.effective_decimal_places(), amount)
    }

    /// Renders an amount with symbol and precision, e.g. `₹300.00`.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, self.format_number(amount))
    }
}
