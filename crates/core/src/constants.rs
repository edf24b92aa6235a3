/// Currency symbol used by reports when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Title row written at the top of every report
pub const DEFAULT_REPORT_TITLE: &str = "Amount Distribution Report";

/// Attachment name for CSV exports
pub const DEFAULT_CSV_FILE_NAME: &str = "amount_distribution.csv";

/// Percentage that a full set of groups is expected to add up to
pub const FULL_PERCENTAGE: f64 = 100.0;

/// Tolerance used when checking whether percentages add up to 100
pub const PERCENTAGE_SUM_TOLERANCE: f64 = 1e-9;

/// Attachment name for PDF exports
pub const DEFAULT_PDF_FILE_NAME: &str = "amount_distribution.pdf";

/// Upper bound on rendered decimals
pub const MAX_DISPLAY_DECIMAL_PRECISION: u32 = 10;
