//! Reports module - renders distribution results for download.

mod csv_report;
mod pdf_report;
mod report_model;
mod report_service;
mod report_traits;


pub use csv_report::write_csv_report;
pub use pdf_report::write_pdf_report;
pub use report_model::ReportConfig;
pub use report_service::ReportService;
pub use report_traits::ReportServiceTrait;
