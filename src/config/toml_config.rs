use crate::config::{
    DEFAULT_AIRPORT_SEARCH_ENDPOINT, DEFAULT_BUSINESS_ENDPOINT, DEFAULT_DEBOUNCE_MS, DEFAULT_HOST,
    DEFAULT_MIN_QUERY_LEN, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVICE_TYPES_ENDPOINT, DEFAULT_VENDOR_ENDPOINT, MAX_DEBOUNCE_MS,
};
use crate::domain::ports::DirectoryConfig;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 目錄服務的 TOML 配置，所有區段皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoints: EndpointsSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub http: HttpSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsSection {
    pub airport_search: String,
    pub service_types: String,
    pub business: String,
    pub vendor: String,
}

impl Default for EndpointsSection {
    fn default() -> Self {
        Self {
            airport_search: DEFAULT_AIRPORT_SEARCH_ENDPOINT.to_string(),
            service_types: DEFAULT_SERVICE_TYPES_ENDPOINT.to_string(),
            business: DEFAULT_BUSINESS_ENDPOINT.to_string(),
            vendor: DEFAULT_VENDOR_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub debounce_ms: u64,
    pub min_query_len: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    pub request_timeout_seconds: u64,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BUSINESS_API})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_url("endpoints.airport_search", &self.endpoints.airport_search)?;
        validate_url("endpoints.service_types", &self.endpoints.service_types)?;
        validate_url("endpoints.business", &self.endpoints.business)?;
        validate_url("endpoints.vendor", &self.endpoints.vendor)?;

        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        validate_range("search.debounce_ms", self.search.debounce_ms, 0, MAX_DEBOUNCE_MS)?;
        validate_positive_number("search.min_query_len", self.search.min_query_len, 1)?;

        validate_range(
            "http.request_timeout_seconds",
            self.http.request_timeout_seconds,
            1,
            300,
        )?;
        Ok(())
    }
}

impl DirectoryConfig for TomlConfig {
    fn airport_search_endpoint(&self) -> &str {
        &self.endpoints.airport_search
    }

    fn service_types_endpoint(&self) -> &str {
        &self.endpoints.service_types
    }

    fn business_endpoint(&self) -> &str {
        &self.endpoints.business
    }

    fn vendor_endpoint(&self) -> &str {
        &self.endpoints.vendor
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_seconds)
    }

    fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    fn min_query_len(&self) -> usize {
        self.search.min_query_len
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
