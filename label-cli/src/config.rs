use anyhow::Result;
use label_system::LabelConfig;

/// CLI configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | LABEL_USER | unset | Username exposed to label templates (anonymous when unset) |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | unset | Directory for daily rolling log files |
///
/// The label settings (`INSTALL_TITLE`, `BASE_URL`, `SANDBOX_FUEL`) are read
/// by [`LabelConfig::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub label_user: Option<String>,
    pub label: LabelConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            label_user: std::env::var("LABEL_USER").ok().filter(|u| !u.is_empty()),
            label: LabelConfig::from_env()?,
        })
    }
}
