#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_AIRPORT_SEARCH_ENDPOINT: &str =
    "https://admin.airambulanceaviation.co.in/api/basesearch";
pub const DEFAULT_SERVICE_TYPES_ENDPOINT: &str =
    "https://ow91reoh80.execute-api.ap-south-1.amazonaws.com/air/service-types";
pub const DEFAULT_BUSINESS_ENDPOINT: &str =
    "https://s4ltdt9g72.execute-api.ap-south-1.amazonaws.com/aviation";
pub const DEFAULT_VENDOR_ENDPOINT: &str =
    "https://ow91reoh80.execute-api.ap-south-1.amazonaws.com/air/service-vendor";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MAX_DEBOUNCE_MS: u64 = 10_000;
