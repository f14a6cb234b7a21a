use std::path::PathBuf;
use std::time::Duration;

/// Recipient of the generated order email
pub const DEFAULT_RECIPIENT: &str = "orders@yourkombucha.com";

/// Delay between handing the link to the mail client and resetting the shop
pub const DEFAULT_HANDOFF_DELAY_MS: u64 = 500;

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// honoured, see [`crate::setup_environment`]):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ORDER_RECIPIENT | orders@yourkombucha.com | mailto recipient |
/// | HANDOFF_DELAY_MS | 500 | delay before the completion notice and reset |
/// | CATALOG_PATH | - | JSON file replacing the built-in catalog |
/// | LOG_LEVEL | info | tracing filter |
/// | LOG_DIR | - | directory for daily log files |
///
/// # Example
///
/// ```ignore
/// ORDER_RECIPIENT=shop@example.com HANDOFF_DELAY_MS=800 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the order email is addressed to
    pub recipient: String,
    /// Delay before the completion notice and state reset (milliseconds)
    pub handoff_delay_ms: u64,
    /// Optional replacement catalog
    pub catalog_path: Option<PathBuf>,
    /// Tracing filter, e.g. `info` or `storefront=debug`
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            recipient: std::env::var("ORDER_RECIPIENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RECIPIENT.into()),
            handoff_delay_ms: std::env::var("HANDOFF_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HANDOFF_DELAY_MS),
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Override the parts tests usually care about
    pub fn with_overrides(recipient: impl Into<String>, handoff_delay_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.recipient = recipient.into();
        config.handoff_delay_ms = handoff_delay_ms;
        config
    }

    pub fn handoff_delay(&self) -> Duration {
        Duration::from_millis(self.handoff_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
