use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use fundshare_core::{constants::MAX_DISPLAY_DECIMAL_PRECISION, reports::ReportConfig};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub currency_symbol: Option<String>,
    pub decimal_places: Option<u32>,
    pub report_title: Option<String>,
    pub report_file_name: Option<String>,
    pub report_pdf_file_name: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FS_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FS_LISTEN_ADDR")?;
        let cors_allow = std::env::var("FS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("FS_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("FS_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let decimal_places = match std::env::var("FS_DECIMAL_PLACES") {
            Ok(raw) => Some(parse_decimal_places(&raw)?),
            Err(_) => None,
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            currency_symbol: non_empty_var("FS_CURRENCY_SYMBOL"),
            decimal_places,
            report_title: non_empty_var("FS_REPORT_TITLE"),
            report_file_name: non_empty_var("FS_REPORT_FILE_NAME"),
            report_pdf_file_name: non_empty_var("FS_REPORT_PDF_FILE_NAME"),
        })
    }

    /// Report settings, falling back to the core defaults for anything unset.
    pub fn report_config(&self) -> ReportConfig {
        let defaults = ReportConfig::default();
        ReportConfig {
            currency_symbol: self
                .currency_symbol
                .clone()
                .unwrap_or(defaults.currency_symbol),
            decimal_places: self.decimal_places.unwrap_or(defaults.decimal_places),
            title: self.report_title.clone().unwrap_or(defaults.title),
            file_name: self.report_file_name.clone().unwrap_or(defaults.file_name),
            pdf_file_name: self
                .report_pdf_file_name
                .clone()
                .unwrap_or(defaults.pdf_file_name),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses `FS_DECIMAL_PLACES`, rejecting precisions above the display limit.
fn parse_decimal_places(raw: &str) -> anyhow::Result<u32> {
    let places: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid FS_DECIMAL_PLACES: {raw}"))?;
    if places > MAX_DISPLAY_DECIMAL_PRECISION {
        anyhow::bail!(
            "FS_DECIMAL_PLACES must be at most {MAX_DISPLAY_DECIMAL_PRECISION}, got {places}"
        );
    }
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_places_accepts_display_range() {
        assert_eq!(parse_decimal_places(" 3 ").unwrap(), 3);
        assert_eq!(parse_decimal_places("10").unwrap(), 10);
    }

    #[test]
    fn test_parse_decimal_places_rejects_out_of_range() {
        assert!(parse_decimal_places("11").is_err());
        assert!(parse_decimal_places("4294967295").is_err());
        assert!(parse_decimal_places("-1").is_err());
        assert!(parse_decimal_places("two").is_err());
    }
}
