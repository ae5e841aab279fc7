//! Run configuration
//!
//! Loaded once from a TOML file (default `configs/config.toml`), optionally
//! overridden from the command line, then read-only for the whole run. Every
//! key has a default except `session.user_agent`, which must be set before a
//! browser session is launched.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Jurisdiction, OutputFormat};
use crate::core::ports::Wait;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.toml";

/// Errors in the run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file location
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file location
        path: PathBuf,
        /// Parser error
        source: toml::de::Error,
    },

    /// No checker is registered for the configured code
    #[error("unknown jurisdiction: {0}")]
    UnknownJurisdiction(String),

    /// A session parameter without a default is missing
    #[error("missing required session parameter: session.{0}")]
    MissingSessionParameter(&'static str),

    /// A value is out of range or malformed
    #[error("invalid config value for {key}: {reason}")]
    Invalid {
        /// Offending key
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Complete configuration for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Jurisdiction code, e.g. `NJ`
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    /// Column label for the jurisdiction verdict in reports
    #[serde(default = "default_jurisdiction_label")]
    pub jurisdiction_label: String,
    /// Domain extensions to check, in order (capped by `checks.domain_limit`)
    #[serde(default = "default_extensions")]
    pub domain_extensions: Vec<String>,
    /// Which checks run and how many
    #[serde(default)]
    pub checks: ChecksConfig,
    /// Company list location
    #[serde(default)]
    pub input: InputConfig,
    /// Report format and destination
    #[serde(default)]
    pub report: ReportConfig,
    /// Registrar lookup
    #[serde(default)]
    pub domain: DomainConfig,
    /// Browser session parameters
    #[serde(default)]
    pub session: SessionConfig,
    /// Wait bounds and pacing
    #[serde(default)]
    pub timing: TimingConfig,
}

fn default_jurisdiction() -> String {
    "NJ".to_string()
}

fn default_jurisdiction_label() -> String {
    "Jurisdiction".to_string()
}

fn default_extensions() -> Vec<String> {
    vec![".com".to_string(), ".net".to_string()]
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            jurisdiction: default_jurisdiction(),
            jurisdiction_label: default_jurisdiction_label(),
            domain_extensions: default_extensions(),
            checks: ChecksConfig::default(),
            input: InputConfig::default(),
            report: ReportConfig::default(),
            domain: DomainConfig::default(),
            session: SessionConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

/// Check toggles and limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Run the jurisdiction name search
    #[serde(default = "default_true")]
    pub company_name: bool,
    /// Run domain lookups
    #[serde(default = "default_true")]
    pub domain: bool,
    /// Maximum number of configured extensions to check
    #[serde(default = "default_domain_limit")]
    pub domain_limit: usize,
    /// Maximum number of companies to process (absent = all)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_limit: Option<usize>,
}

const fn default_true() -> bool {
    true
}

const fn default_domain_limit() -> usize {
    2
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            company_name: true,
            domain: true,
            domain_limit: default_domain_limit(),
            company_limit: None,
        }
    }
}

/// Where company names are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Text file with one company name per line
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/input/company.txt")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

/// Report format and naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Directory the artifact is written to
    #[serde(default = "default_report_dir")]
    pub directory: PathBuf,
    /// Artifact base name; the run date and extension are appended
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// `chrono` format string for the run date in the file name
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("data/reports")
}

fn default_base_name() -> String {
    "report".to_string()
}

fn default_date_format() -> String {
    "%d_%m_%Y".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            directory: default_report_dir(),
            base_name: default_base_name(),
            date_format: default_date_format(),
        }
    }
}

impl ReportConfig {
    /// `<directory>/<base_name>_<date>.<ext>`
    #[must_use]
    pub fn artifact_path(&self, date: NaiveDate) -> PathBuf {
        let stamp = date.format(&self.date_format);
        self.directory
            .join(format!("{}_{stamp}.{}", self.base_name, self.format.extension()))
    }
}

/// Registrar lookup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Search URL prefix; the domain is appended
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
}

fn default_lookup_url() -> String {
    "https://www.namecheap.com/domains/registration/results/?domain=".to_string()
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            lookup_url: default_lookup_url(),
        }
    }
}

/// Browser session parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// WebDriver endpoint (chromedriver, geckodriver, selenium)
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    /// Browser name requested from the driver
    #[serde(default = "default_browser")]
    pub browser: String,
    /// Run without a visible window
    #[serde(default)]
    pub headless: bool,
    /// User agent presented to every site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Driver-side implicit wait for element lookups
    #[serde(default)]
    pub implicit_wait_secs: u64,
    /// Page load timeout
    #[serde(default = "default_page_load_timeout")]
    pub page_load_timeout_secs: u64,
    /// HTTP timeout for each driver command
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Outbound proxy
    #[serde(default)]
    pub proxy: ProxyConfig,
}

fn default_webdriver_url() -> String {
    "http://localhost:9515".to_string()
}

fn default_browser() -> String {
    "chrome".to_string()
}

const fn default_page_load_timeout() -> u64 {
    30
}

const fn default_request_timeout() -> u64 {
    60
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            browser: default_browser(),
            headless: false,
            user_agent: None,
            implicit_wait_secs: 0,
            page_load_timeout_secs: default_page_load_timeout(),
            request_timeout_secs: default_request_timeout(),
            proxy: ProxyConfig::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Route traffic through the proxy
    #[serde(default)]
    pub enabled: bool,
    /// Proxy host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Proxy port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Proxy user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Proxy password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// `http://[user:pass@]host:port`, when enabled and complete
    #[must_use]
    pub fn server_url(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let (host, port) = (self.host.as_deref()?, self.port?);
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some(format!("http://{user}:{pass}@{host}:{port}")),
            _ => Some(format!("http://{host}:{port}")),
        }
    }
}

/// Wait bounds and pacing used by the checkers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Bound for ordinary element waits
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_secs: u64,
    /// Bound for slow result pages
    #[serde(default = "default_long_wait_timeout")]
    pub long_wait_timeout_secs: u64,
    /// Delay between polls inside a wait
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Settling pause after navigation or form input
    #[serde(default = "default_pause")]
    pub pause_ms: u64,
    /// Per-character delay for human-paced typing
    #[serde(default = "default_keystroke_delay")]
    pub keystroke_delay_ms: u64,
    /// Pause between closing and relaunching a recycled session
    #[serde(default = "default_recycle_pause")]
    pub recycle_pause_ms: u64,
}

const fn default_wait_timeout() -> u64 {
    4
}

const fn default_long_wait_timeout() -> u64 {
    10
}

const fn default_poll_interval() -> u64 {
    250
}

const fn default_pause() -> u64 {
    1000
}

const fn default_keystroke_delay() -> u64 {
    100
}

const fn default_recycle_pause() -> u64 {
    5000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wait_timeout_secs: default_wait_timeout(),
            long_wait_timeout_secs: default_long_wait_timeout(),
            poll_interval_ms: default_poll_interval(),
            pause_ms: default_pause(),
            keystroke_delay_ms: default_keystroke_delay(),
            recycle_pause_ms: default_recycle_pause(),
        }
    }
}

impl TimingConfig {
    /// No waiting at all; every wait polls once
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            wait_timeout_secs: 0,
            long_wait_timeout_secs: 0,
            poll_interval_ms: 0,
            pause_ms: 0,
            keystroke_delay_ms: 0,
            recycle_pause_ms: 0,
        }
    }

    /// Ordinary element wait
    #[must_use]
    pub const fn short_wait(&self) -> Wait {
        Wait::new(
            Duration::from_secs(self.wait_timeout_secs),
            Duration::from_millis(self.poll_interval_ms),
        )
    }

    /// Wait for slow result pages
    #[must_use]
    pub const fn long_wait(&self) -> Wait {
        Wait::new(
            Duration::from_secs(self.long_wait_timeout_secs),
            Duration::from_millis(self.poll_interval_ms),
        )
    }

    /// Settling pause
    #[must_use]
    pub const fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Per-character typing delay
    #[must_use]
    pub const fn keystroke_delay(&self) -> Duration {
        Duration::from_millis(self.keystroke_delay_ms)
    }

    /// Pause during session recycling
    #[must_use]
    pub const fn recycle_pause(&self) -> Duration {
        Duration::from_millis(self.recycle_pause_ms)
    }
}

impl RunConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the configured jurisdiction code
    pub fn jurisdiction(&self) -> Result<Jurisdiction, ConfigError> {
        self.jurisdiction
            .parse()
            .map_err(|_| ConfigError::UnknownJurisdiction(self.jurisdiction.clone()))
    }

    /// Configured extensions capped by `checks.domain_limit`
    #[must_use]
    pub fn effective_extensions(&self) -> Vec<String> {
        self.domain_extensions.iter().take(self.checks.domain_limit).cloned().collect()
    }

    /// Reject configurations that cannot start a run
    ///
    /// Runs before any session is opened, so a bad config never produces
    /// partial output.
    pub fn validate(&self) -> Result<Jurisdiction, ConfigError> {
        let jurisdiction = self.jurisdiction()?;

        if self.session.user_agent.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingSessionParameter("user_agent"));
        }
        if self.session.webdriver_url.trim().is_empty() {
            return Err(ConfigError::MissingSessionParameter("webdriver_url"));
        }
        if self.session.proxy.enabled && (self.session.proxy.host.is_none() || self.session.proxy.port.is_none()) {
            return Err(ConfigError::Invalid {
                key: "session.proxy",
                reason: "host and port are required when the proxy is enabled".to_string(),
            });
        }
        if let Some(bad) = self.domain_extensions.iter().find(|e| !is_valid_extension(e)) {
            return Err(ConfigError::Invalid {
                key: "domain_extensions",
                reason: format!("'{bad}' must look like '.com'"),
            });
        }
        let mut seen = HashSet::new();
        if let Some(repeated) = self.domain_extensions.iter().find(|e| !seen.insert(e.to_ascii_lowercase())) {
            return Err(ConfigError::Invalid {
                key: "domain_extensions",
                reason: format!("'{repeated}' is listed more than once"),
            });
        }
        if StrftimeItems::new(&self.report.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid {
                key: "report.date_format",
                reason: format!("'{}' is not a valid date format", self.report.date_format),
            });
        }
        // The stamp is part of the artifact file name.
        if NaiveDate::MIN
            .format(&self.report.date_format)
            .to_string()
            .contains(['/', '\\'])
        {
            return Err(ConfigError::Invalid {
                key: "report.date_format",
                reason: format!("'{}' renders a path separator", self.report.date_format),
            });
        }
        if self.report.base_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "report.base_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(jurisdiction)
    }
}

fn is_valid_extension(extension: &str) -> bool {
    extension.len() > 1
        && extension.starts_with('.')
        && extension[1..].split('.').all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
