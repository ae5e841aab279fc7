//! Logging handles
//!
//! Components do not log through a module-level global. Each one is handed a
//! [`Logger`] when it is constructed; the handle carries the log target so
//! records from a jurisdiction checker, the domain checker and the
//! orchestrator can be filtered independently (`RUST_LOG=company_scope::jurisdiction=debug`).
//!
//! The process-wide backend (`env_logger`) is installed once by the binary.

use std::fmt;

use log::Level;

/// Root target for every record emitted by this crate
pub const ROOT_TARGET: &str = "company_scope";

/// Scoped logging handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    target: String,
}

impl Default for Logger {
    fn default() -> Self {
        Self::root()
    }
}

impl Logger {
    /// Handle for the crate root target
    #[must_use]
    pub fn root() -> Self {
        Self {
            target: ROOT_TARGET.to_string(),
        }
    }

    /// Handle for a nested scope, e.g. `root().scoped("jurisdiction")`
    #[must_use]
    pub fn scoped(&self, scope: &str) -> Self {
        Self {
            target: format!("{}::{scope}", self.target),
        }
    }

    /// Log target of this handle
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Emit a record at `level`
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: self.target.as_str(), level, "{args}");
    }

    /// Emit a debug record
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Emit an info record
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Emit a warning record
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    /// Emit an error record
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

/// Install `env_logger` as the process-wide backend
///
/// `RUST_LOG` still overrides the default filter.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    // A second call (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}
