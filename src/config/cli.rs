use crate::config::{
    DEFAULT_AIRPORT_SEARCH_ENDPOINT, DEFAULT_BUSINESS_ENDPOINT, DEFAULT_SERVICE_TYPES_ENDPOINT,
    DEFAULT_VENDOR_ENDPOINT, MAX_DEBOUNCE_MS,
};
use crate::domain::ports::DirectoryConfig;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "airport-directory")]
#[command(about = "Airport services directory: API proxy and search tooling")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_AIRPORT_SEARCH_ENDPOINT)]
    pub airport_search_endpoint: String,

    #[arg(long, default_value = DEFAULT_SERVICE_TYPES_ENDPOINT)]
    pub service_types_endpoint: String,

    #[arg(long, default_value = DEFAULT_BUSINESS_ENDPOINT)]
    pub business_endpoint: String,

    #[arg(long, default_value = DEFAULT_VENDOR_ENDPOINT)]
    pub vendor_endpoint: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "3000")]
    pub port: u16,

    #[arg(long, default_value = "500", help = "Airport input debounce delay in milliseconds")]
    pub debounce_ms: u64,

    #[arg(long, default_value = "3", help = "Minimum airport query length before searching")]
    pub min_query_len: usize,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Emit JSON formatted logs")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl DirectoryConfig for CliConfig {
    fn airport_search_endpoint(&self) -> &str {
        &self.airport_search_endpoint
    }

    fn service_types_endpoint(&self) -> &str {
        &self.service_types_endpoint
    }

    fn business_endpoint(&self) -> &str {
        &self.business_endpoint
    }

    fn vendor_endpoint(&self) -> &str {
        &self.vendor_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("airport_search_endpoint", &self.airport_search_endpoint)?;
        validate_url("service_types_endpoint", &self.service_types_endpoint)?;
        validate_url("business_endpoint", &self.business_endpoint)?;
        validate_url("vendor_endpoint", &self.vendor_endpoint)?;
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_range("debounce_ms", self.debounce_ms, 0, MAX_DEBOUNCE_MS)?;
        validate_positive_number("min_query_len", self.min_query_len, 1)?;
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        Ok(())
    }
}
