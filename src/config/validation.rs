use crate::config::types::{Config, HttpConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site section
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = parse_http_url("base_url", &config.base_url)?;
    let seed = parse_http_url("seed_url", &config.seed_url)?;

    if base.host_str() != seed.host_str() {
        return Err(ConfigError::Validation(format!(
            "seed_url host {:?} does not match base_url host {:?}",
            seed.host_str(),
            base.host_str()
        )));
    }

    if config.page_param.trim().is_empty() {
        return Err(ConfigError::Validation(
            "page_param cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the HTTP transport section
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results_path cannot be empty".to_string(),
        ));
    }

    if let Some(log_path) = &config.log_path {
        if log_path.trim().is_empty() || log_path.ends_with(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "log_path must name a file, got {:?}",
                log_path
            )));
        }
    }

    Ok(())
}

/// Parses a URL and requires an http(s) scheme
fn parse_http_url(field: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_seed_must_share_base_host() {
        let mut config = Config::default();
        config.site.seed_url = "https://other.example.com/search/?page=1".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let mut config = Config::default();
        config.site.base_url = "ftp://m.mashina.kg".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));

        config.site.base_url = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_blank_page_param() {
        let mut config = Config::default();
        config.site.page_param = "  ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = Config::default();
        config.http.timeout_secs = 301;
        assert!(validate(&config).is_err());

        config.http.timeout_secs = 300;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_results_path() {
        let mut config = Config::default();
        config.output.results_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_log_path_must_name_a_file() {
        let mut config = Config::default();
        config.output.log_path = Some("logs/app.log".to_string());
        assert!(validate(&config).is_ok());

        config.output.log_path = Some(" ".to_string());
        assert!(validate(&config).is_err());

        config.output.log_path = Some("logs/".to_string());
        assert!(validate(&config).is_err());
    }
}
