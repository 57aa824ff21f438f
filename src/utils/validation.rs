use crate::utils::error::{DirectoryError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DirectoryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").expect("phone pattern is valid"))
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !email_pattern().is_match(value.trim()) {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid email address".to_string(),
        });
    }
    Ok(())
}

/// 允許 +91-1234567890 或 020 7946 0000 之類的格式
pub fn validate_phone(field_name: &str, value: &str) -> Result<()> {
    if !phone_pattern().is_match(value.trim()) {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Phone number may only contain digits, spaces, dashes and a leading +"
                .to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("vendor_endpoint", "https://example.com").is_ok());
        assert!(validate_url("vendor_endpoint", "http://example.com").is_ok());
        assert!(validate_url("vendor_endpoint", "").is_err());
        assert!(validate_url("vendor_endpoint", "invalid-url").is_err());
        assert!(validate_url("vendor_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("min_query_len", 3, 1).is_ok());
        assert!(validate_positive_number("min_query_len", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("debounce_ms", 500, 0, 10_000).is_ok());
        assert!(validate_range("debounce_ms", 20_000, 0, 10_000).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "kaustav@gmail.com").is_ok());
        assert!(validate_email("email", " kaustav@gmail.com ").is_ok());
        assert!(validate_email("email", "kaustav@gmail").is_err());
        assert!(validate_email("email", "not an email").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("phone", "+91-1234567890").is_ok());
        assert!(validate_phone("phone", "020 7946 0000").is_ok());
        assert!(validate_phone("phone", "12ab34").is_err());
        assert!(validate_phone("phone", "+1").is_err());
    }
}
