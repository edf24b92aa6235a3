use log::debug;

use crate::distribution::DistributionResult;
use crate::errors::Result;

use super::csv_report::write_csv_report;
use super::pdf_report::write_pdf_report;
use super::report_model::ReportConfig;
use super::report_traits::ReportServiceTrait;

/// Renders distribution results using a fixed presentation config.
pub struct ReportService {
    config: ReportConfig,
}

impl ReportService {
    pub fn new(config: ReportConfig) -> Self {
        ReportService { config }
    }
}

impl ReportServiceTrait for ReportService {
    fn render_csv(&self, result: &DistributionResult) -> Result<String> {
        debug!(
            "Rendering CSV report for {} receiver groups",
            result.matrix.len()
        );
        write_csv_report(result, &self.config)
    }

    fn render_pdf(&self, result: &DistributionResult) -> Result<Vec<u8>> {
        debug!(
            "Rendering PDF report for {} receiver groups",
            result.matrix.len()
        );
        write_pdf_report(result, &self.config)
    }

    fn csv_file_name(&self) -> &str {
        &self.config.file_name
    }

    fn pdf_file_name(&self) -> &str {
        &self.config.pdf_file_name
    }
}
