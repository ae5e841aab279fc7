//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `webdriver/` - W3C WebDriver client behind [`WebSession`](crate::core::ports::WebSession)
//! - `jurisdictions/` - One registry checker per supported state
//! - `namecheap` - Registrar lookup behind [`DomainChecker`](crate::core::ports::DomainChecker)
//! - `reports/` - One emitter per output format
//! - `file` - Company list read from a text file

pub mod file;
pub mod jurisdictions;
pub mod namecheap;
mod page;
pub mod reports;
pub mod webdriver;

#[cfg(test)]
mod testing;

use crate::config::{ConfigError, RunConfig};
use crate::logging::Logger;
use crate::orchestrator::RunComponents;

/// Wire the production adapters for `config`
///
/// Fails on configuration errors without touching the network, so an
/// unknown jurisdiction or missing user agent is reported before any
/// browser starts.
pub fn build_components(config: &RunConfig, log: &Logger) -> Result<RunComponents, ConfigError> {
    let jurisdiction = config.validate()?;
    Ok(RunComponents {
        launcher: Box::new(webdriver::WebDriverLauncher::from_config(&config.session, log.scoped("webdriver"))),
        source: Box::new(file::FileCompanySource::new(&config.input.path)),
        jurisdiction_checker: jurisdictions::checker_for(jurisdiction, &config.timing, log),
        domain_checker: Box::new(namecheap::NamecheapChecker::new(
            &config.domain,
            config.timing.clone(),
            log.scoped("domain"),
        )),
    })
}
