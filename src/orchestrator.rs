//! Verification run orchestration
//!
//! One [`VerificationOrchestrator`] drives one run through its phases:
//!
//! 1. **Init** - validate the config and acquire the web session
//! 2. **Loading** - read and truncate the company list
//! 3. **Processing** - jurisdiction check then each domain extension, per company
//! 4. **Reporting** - render the results with the configured format
//! 5. **Closing** - release the session, on every exit path
//!
//! Per-company failures never stop the loop. Input and report failures end
//! the run with an error, but the session is still released.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use thiserror::Error;

use crate::adapters::reports;
use crate::config::{ConfigError, RunConfig};
use crate::core::models::{
    CheckVerdict, CompanyRecord, CompanyResult, DomainCheckResult, Jurisdiction,
};
use crate::core::ports::{
    CompanySource, DomainChecker, JurisdictionChecker, ReportContext, ReportError, SessionError,
    SessionLauncher, SourceError,
};
use crate::core::services::SessionHandle;
use crate::logging::Logger;

/// Errors that end a run
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration cannot start a run
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The web session could not be acquired
    #[error("failed to start web session: {0}")]
    Session(#[from] SessionError),

    /// The company list does not exist
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    /// The company list could not be read
    #[error(transparent)]
    Input(SourceError),

    /// The report could not be produced
    #[error("report failed: {0}")]
    Report(#[from] ReportError),
}

impl From<SourceError> for RunError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(path) => Self::InputNotFound(path),
            other => Self::Input(other),
        }
    }
}

/// Phases of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Config validation and session acquisition
    Init,
    /// Reading the company list
    Loading,
    /// Running checks
    Processing,
    /// Writing the report
    Reporting,
    /// Releasing the session
    Closing,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Loading => "loading",
            Self::Processing => "processing",
            Self::Reporting => "reporting",
            Self::Closing => "closing",
        };
        f.write_str(name)
    }
}

/// Collaborators a run is built from
pub struct RunComponents {
    /// Starts the browser session
    pub launcher: Box<dyn SessionLauncher>,
    /// Supplies company names
    pub source: Box<dyn CompanySource>,
    /// Registry search for the configured jurisdiction
    pub jurisdiction_checker: Box<dyn JurisdictionChecker>,
    /// Registrar lookup
    pub domain_checker: Box<dyn DomainChecker>,
}

impl std::fmt::Debug for RunComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunComponents")
            .field("source", &self.source.describe())
            .field("jurisdiction", &self.jurisdiction_checker.jurisdiction())
            .finish_non_exhaustive()
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Jurisdiction that was searched
    pub jurisdiction: Jurisdiction,
    /// One result per processed company, in input order
    pub results: Vec<CompanyResult>,
    /// Where the report was written
    pub report_path: PathBuf,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Drives one verification run
pub struct VerificationOrchestrator {
    config: RunConfig,
    jurisdiction: Jurisdiction,
    components: RunComponents,
    run_date: NaiveDate,
    log: Logger,
}

impl std::fmt::Debug for VerificationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationOrchestrator")
            .field("jurisdiction", &self.jurisdiction)
            .field("components", &self.components)
            .field("run_date", &self.run_date)
            .finish_non_exhaustive()
    }
}

impl VerificationOrchestrator {
    /// Validate `config` and prepare a run
    ///
    /// Configuration errors surface here, before any session is launched or
    /// any company is read.
    pub fn new(config: RunConfig, components: RunComponents, log: &Logger) -> Result<Self, RunError> {
        let jurisdiction = config.validate()?;
        if components.jurisdiction_checker.jurisdiction() != jurisdiction {
            return Err(ConfigError::Invalid {
                key: "jurisdiction",
                reason: format!(
                    "checker for {} supplied for a {jurisdiction} run",
                    components.jurisdiction_checker.jurisdiction()
                ),
            }
            .into());
        }
        Ok(Self {
            config,
            jurisdiction,
            components,
            run_date: chrono::Local::now().date_naive(),
            log: log.scoped("run"),
        })
    }

    /// Override the date stamped into the report name
    #[must_use]
    pub const fn with_run_date(mut self, date: NaiveDate) -> Self {
        self.run_date = date;
        self
    }

    /// Execute the run
    pub fn run(self) -> Result<RunOutcome, RunError> {
        let started = Instant::now();
        let Self {
            config,
            jurisdiction,
            components,
            run_date,
            log,
        } = self;
        let RunComponents {
            launcher,
            source,
            jurisdiction_checker,
            domain_checker,
        } = components;

        log.debug(format_args!("Entering {} phase", RunPhase::Init));
        let mut session = SessionHandle::open(launcher, log.scoped("session")).map_err(|e| {
            log.error(format_args!("Could not start web session: {e}"));
            RunError::Session(e)
        })?;

        let mut run = Run {
            config: &config,
            jurisdiction,
            source: source.as_ref(),
            processor: Processor {
                jurisdiction_checker,
                domain_checker,
                check_names: config.checks.company_name,
                check_domains: config.checks.domain,
                extensions: config.effective_extensions(),
                log: log.scoped("company"),
            },
            run_date,
            log: &log,
        };
        let outcome = run.execute(&mut session);

        log.debug(format_args!("Entering {} phase", RunPhase::Closing));
        session.close();

        let elapsed = started.elapsed();
        log.info(format_args!("Total execution time: {}", format_elapsed(elapsed)));
        outcome.map(|(results, report_path)| RunOutcome {
            jurisdiction,
            results,
            report_path,
            elapsed,
        })
    }
}

/// Borrowed state for the phases between Init and Closing
struct Run<'a> {
    config: &'a RunConfig,
    jurisdiction: Jurisdiction,
    source: &'a dyn CompanySource,
    processor: Processor,
    run_date: NaiveDate,
    log: &'a Logger,
}

impl Run<'_> {
    fn execute(
        &mut self,
        session: &mut SessionHandle,
    ) -> Result<(Vec<CompanyResult>, PathBuf), RunError> {
        self.log.debug(format_args!("Entering {} phase", RunPhase::Loading));
        let companies = self.load()?;

        self.log.debug(format_args!("Entering {} phase", RunPhase::Processing));
        let results: Vec<CompanyResult> = companies
            .iter()
            .map(|name| self.processor.process(session, name))
            .collect();

        self.log.debug(format_args!("Entering {} phase", RunPhase::Reporting));
        let path = self.report(&results).map_err(|e| {
            self.log.error(format_args!("Error generating {} report: {e}", self.config.report.format));
            RunError::Report(e)
        })?;
        Ok((results, path))
    }

    fn load(&self) -> Result<Vec<String>, RunError> {
        let mut companies = self.source.load().map_err(|e| {
            self.log.error(format_args!("Cannot read company list {}: {e}", self.source.describe()));
            RunError::from(e)
        })?;
        if let Some(limit) = self.config.checks.company_limit {
            companies.truncate(limit);
        }
        self.log.info(format_args!(
            "The number of companies to be processed from {} is: {}",
            self.source.describe(),
            companies.len()
        ));
        Ok(companies)
    }

    fn report(&self, results: &[CompanyResult]) -> Result<PathBuf, ReportError> {
        let format = self.config.report.format;
        self.log.info(format_args!("Generating report in {format} format"));
        let emitter = reports::emitter_for(format);
        let context = ReportContext {
            jurisdiction: self.jurisdiction.code().to_string(),
            jurisdiction_label: self.config.jurisdiction_label.clone(),
            extensions: self.config.effective_extensions(),
        };
        let bytes = emitter.render(&context, results)?;
        let path = self.config.report.artifact_path(self.run_date);
        reports::write_artifact(&path, &bytes)?;
        self.log.info(format_args!("Report saved: {}", path.display()));
        Ok(path)
    }
}

/// Runs the checks for one company
struct Processor {
    jurisdiction_checker: Box<dyn JurisdictionChecker>,
    domain_checker: Box<dyn DomainChecker>,
    check_names: bool,
    check_domains: bool,
    extensions: Vec<String>,
    log: Logger,
}

impl Processor {
    fn process(&mut self, session: &mut SessionHandle, raw_name: &str) -> CompanyResult {
        let company = CompanyRecord::new(raw_name, self.jurisdiction_checker.remove_suffix());
        let name = company.raw_name().to_string();
        let jurisdiction = self.jurisdiction_checker.jurisdiction();
        self.log.info(format_args!("Starting processing for company: {name}"));

        let mut result = CompanyResult::new(company);
        let mut failure: Option<String> = None;

        if self.check_names {
            let token = result.company.formatted_jurisdiction_token().to_string();
            let checker = &mut self.jurisdiction_checker;
            let verdict = match guarded(|| checker.check_availability(session, &token)) {
                Ok(verdict) => verdict,
                Err(detail) => {
                    self.log.error(format_args!(
                        "Jurisdiction check failed for company '{name}' in {jurisdiction}: {detail}"
                    ));
                    failure = Some(detail.clone());
                    CheckVerdict::Error(detail)
                },
            };
            self.log.info(format_args!("{jurisdiction} verdict for '{name}': {verdict}"));
            result.jurisdiction_verdict = Some(verdict);
        }

        if self.check_domains {
            for extension in &self.extensions {
                let domain = result.company.domain_for(extension);
                let verdict = if let Some(reason) = &failure {
                    CheckVerdict::Error(format!("not checked after earlier failure: {reason}"))
                } else if result.company.formatted_domain_token().is_empty() {
                    self.log.warn(format_args!(
                        "Company '{name}' has no domain-safe characters; skipping {extension}"
                    ));
                    CheckVerdict::Error("name has no domain-safe characters".to_string())
                } else {
                    let checker = &mut self.domain_checker;
                    match guarded(|| checker.check_domain(session, &domain)) {
                        Ok(verdict) => verdict,
                        Err(detail) => {
                            self.log.error(format_args!(
                                "Domain check failed for company '{name}' ({domain}): {detail}"
                            ));
                            failure = Some(detail.clone());
                            CheckVerdict::Error(detail)
                        },
                    }
                };
                result.domain_results.push(DomainCheckResult {
                    extension: extension.clone(),
                    domain,
                    verdict,
                });
            }
        }

        self.log.info(format_args!("Finished processing for company: {name}"));
        result
    }
}

/// Run a check, turning a panic into an error detail
fn guarded<T>(check: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(check)).map_err(|payload| panic_detail(payload.as_ref()))
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "check aborted unexpectedly".to_string())
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
