//! Test data builders

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use company_scope::adapters::file::FileCompanySource;
use company_scope::config::RunConfig;
use company_scope::core::models::OutputFormat;
use company_scope::core::ports::{DomainChecker, JurisdictionChecker, SessionLauncher};
use company_scope::logging::Logger;
use company_scope::orchestrator::{RunComponents, RunError, RunOutcome, VerificationOrchestrator};

/// Date stamped into every report name in tests
pub fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

/// A valid config reading `dir/companies.txt` and writing into `dir/reports`
pub fn config(dir: &Path, format: OutputFormat) -> RunConfig {
    let mut config = RunConfig::default();
    config.session.user_agent = Some("Mozilla/5.0 (test)".to_string());
    config.input.path = dir.join("companies.txt");
    config.report.directory = dir.join("reports");
    config.report.format = format;
    config.domain_extensions = vec![".com".to_string()];
    config
}

/// Write the company list the config points at
pub fn write_companies(config: &RunConfig, names: &[&str]) {
    fs::write(&config.input.path, names.join("\n")).unwrap();
}

/// Build and run an orchestrator from the given collaborators
pub fn run(
    config: RunConfig,
    launcher: impl SessionLauncher + 'static,
    jurisdiction_checker: impl JurisdictionChecker + 'static,
    domain_checker: impl DomainChecker + 'static,
) -> Result<RunOutcome, RunError> {
    let components = RunComponents {
        launcher: Box::new(launcher),
        source: Box::new(FileCompanySource::new(config.input.path.clone())),
        jurisdiction_checker: Box::new(jurisdiction_checker),
        domain_checker: Box::new(domain_checker),
    };
    VerificationOrchestrator::new(config, components, &Logger::root())?
        .with_run_date(run_date())
        .run()
}
