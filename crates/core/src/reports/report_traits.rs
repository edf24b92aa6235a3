use crate::distribution::DistributionResult;
use crate::errors::Result;

/// Trait for report rendering operations
pub trait ReportServiceTrait: Send + Sync {
    /// Renders the receiver and contributor perspectives as CSV text.
    fn render_csv(&self, result: &DistributionResult) -> Result<String>;

    /// Renders the receiver and contributor perspectives as a PDF document.
    fn render_pdf(&self, result: &DistributionResult) -> Result<Vec<u8>>;

    /// Attachment name for CSV downloads.
    fn csv_file_name(&self) -> &str;

    /// Attachment name for PDF downloads.
    fn pdf_file_name(&self) -> &str;
}
