//! Process-wide configuration, read once at startup and never mutated.

use thiserror::Error;

/// Default listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Default upstream endpoint when `OPENAI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default directory served at the root path.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The provider credential is missing
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// The listening port is not a valid u16
    #[error("invalid PORT value {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Settings shared by every request.
///
/// Immutable after startup; safe to share across concurrent requests
/// without locking.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential for the completion provider
    pub api_key: String,
    /// Upstream base endpoint, overridable for proxies and compatible APIs
    pub base_url: String,
    /// TCP port the HTTP server listens on
    pub port: u16,
    /// Directory of static assets served at `/`
    pub static_dir: String,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is absent or `PORT` does not
    /// parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let port = parse_port(std::env::var("PORT").ok())?;

        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            api_key,
            base_url,
            port,
            static_dir,
        })
    }

    /// Credential safe for logging: `***` plus the last four characters.
    pub fn masked_api_key(&self) -> String {
        mask_key(&self.api_key)
    }
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) if raw.trim().is_empty() => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidPort {
                value: raw.clone(),
                reason: e.to_string(),
            }
        }),
    }
}

fn mask_key(key: &str) -> String {
    let tail: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("***{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some("".to_string())).unwrap(), DEFAULT_PORT);
        assert_eq!(parse_port(Some("  ".to_string())).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_port_explicit() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 3000 ".to_string())).unwrap(), 3000);
    }

    #[test]
    fn test_parse_port_invalid() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        match err {
            ConfigError::InvalidPort { value, .. } => assert_eq!(value, "not-a-port"),
            _ => panic!("Expected InvalidPort"),
        }

        assert!(parse_port(Some("70000".to_string())).is_err());
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("sk-abcdef1234"), "***1234");
        assert_eq!(mask_key("abc"), "***abc");
        assert_eq!(mask_key(""), "***");
    }
}
