use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - catalog URL, when set, is non-empty and http(s)
/// - HTTP timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if let Some(url) = &config.catalog.url {
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.url cannot be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "catalog.url must be http(s): {}",
                url
            )));
        }
    }

    if config.catalog.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_valid_url() {
        let mut config = Config::default();
        config.catalog.url = Some("https://example.com/recipes.json".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_url_fails() {
        let mut config = Config::default();
        config.catalog.url = Some(String::new());
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_non_http_url_fails() {
        let mut config = Config::default();
        config.catalog.url = Some("ftp://example.com/recipes.json".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = Config::default();
        config.catalog.timeout_secs = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
