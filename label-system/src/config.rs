//! Label system configuration

use crate::error::{LabelError, LabelResult};

/// Label system configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | INSTALL_TITLE | Part-DB | Title of this installation, visible to label templates |
/// | BASE_URL | http://localhost:8000 | Base of the scan URLs encoded in QR codes |
/// | SANDBOX_FUEL | 50000 | Execution budget of sandboxed templates (0 = unlimited) |
///
/// # Example
///
/// ```ignore
/// INSTALL_TITLE="Lab inventory" BASE_URL=https://parts.example.com label-render ...
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    /// Installation title (`install_title` in templates)
    pub install_title: String,
    /// Base URL for QR code scan links, without trailing slash
    pub base_url: String,
    /// Fuel limit for sandboxed templates, `None` = unlimited
    pub sandbox_fuel: Option<u64>,
}

pub const DEFAULT_INSTALL_TITLE: &str = "Part-DB";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SANDBOX_FUEL: u64 = 50_000;

impl LabelConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults, malformed ones are an error.
    pub fn from_env() -> LabelResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> LabelResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sandbox_fuel = match lookup("SANDBOX_FUEL") {
            Some(raw) => {
                let fuel: u64 = raw.trim().parse().map_err(|_| {
                    LabelError::Config(format!("SANDBOX_FUEL is not a number: {}", raw))
                })?;
                (fuel > 0).then_some(fuel)
            }
            None => Some(DEFAULT_SANDBOX_FUEL),
        };

        Ok(Self {
            install_title: lookup("INSTALL_TITLE").unwrap_or_else(|| DEFAULT_INSTALL_TITLE.into()),
            base_url: lookup("BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            sandbox_fuel,
        })
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            install_title: DEFAULT_INSTALL_TITLE.into(),
            base_url: DEFAULT_BASE_URL.into(),
            sandbox_fuel: Some(DEFAULT_SANDBOX_FUEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LabelConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LabelConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = LabelConfig::from_lookup(lookup(&[
            ("INSTALL_TITLE", "Lab"),
            ("BASE_URL", "https://parts.example.com/"),
            ("SANDBOX_FUEL", "0"),
        ]))
        .unwrap();

        assert_eq!(config.install_title, "Lab");
        assert_eq!(config.base_url, "https://parts.example.com");
        assert_eq!(config.sandbox_fuel, None);
    }

    #[test]
    fn test_invalid_fuel() {
        let err = LabelConfig::from_lookup(lookup(&[("SANDBOX_FUEL", "lots")])).unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }
}
