use std::sync::Arc;

use fundshare_core::distribution::{DistributionService, DistributionServiceTrait};
use fundshare_core::reports::{ReportService, ReportServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub distribution_service: Arc<dyn DistributionServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let report_config = config.report_config();
    tracing::info!(
        "Reports use currency symbol '{}' with {} decimal places",
        report_config.currency_symbol,
        report_config.decimal_places
    );

    Ok(Arc::new(AppState {
        distribution_service: Arc::new(DistributionService::new()),
        report_service: Arc::new(ReportService::new(report_config)),
    }))
}
