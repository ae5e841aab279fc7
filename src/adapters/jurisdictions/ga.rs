//! Georgia eCorp business search
//!
//! Searches in exact-match mode. The portal either reports "No data found"
//! or renders a results table; an `Active` status in that table means the
//! name is registered.

use crate::adapters::page;
use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, Locator, SessionError, Wait, WebSession};
use crate::core::services::{SessionHandle, formatter};
use crate::logging::Logger;

const URL: &str = "https://ecorp.sos.ga.gov/BusinessSearch";
const EXACT_MATCH: &str = "input#rdExactMatch";
const SEARCH_INPUT: &str = "input#txtBusinessName";
const SUBMIT: &str = "input#btnSearch";
const ERROR_MESSAGE: &str = "li.error_message";
const CELLS: &str = "td";
const NO_DATA: &str = "No data found";

/// Exact-match checker for Georgia
#[derive(Debug, Clone)]
pub struct GeorgiaChecker {
    timing: TimingConfig,
    log: Logger,
}

impl GeorgiaChecker {
    /// Checker using `timing` for its waits
    #[must_use]
    pub const fn new(timing: TimingConfig, log: Logger) -> Self {
        Self { timing, log }
    }

    /// The results page is the slowest of the registries
    fn results_wait(&self) -> Wait {
        let long = self.timing.long_wait();
        Wait::new(long.timeout.saturating_mul(2), long.poll)
    }

    fn search(&self, session: &mut dyn WebSession, query: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(URL)?;
        self.log.debug(format_args!("Accessing GA eCorp: {URL}"));
        page::click(session, &Locator::css(EXACT_MATCH))?;
        page::fill(session, &Locator::css(SEARCH_INPUT), query, self.timing.short_wait())?;
        page::click(session, &Locator::css(SUBMIT))?;

        let outcomes = [Locator::css(ERROR_MESSAGE), Locator::css(CELLS)];
        session.wait_any(&outcomes, self.results_wait())?;

        let messages = page::texts(session, &Locator::css(ERROR_MESSAGE))?;
        if messages.iter().any(|m| m.contains(NO_DATA)) {
            return Ok(CheckVerdict::Available);
        }
        let cells = page::texts(session, &Locator::css(CELLS))?;
        if cells.iter().any(|cell| cell.contains("Active")) {
            Ok(CheckVerdict::NotAvailable)
        } else {
            self.log.info(format_args!("'{query}' not found as active in GA"));
            Ok(CheckVerdict::Available)
        }
    }
}

impl JurisdictionChecker for GeorgiaChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Ga
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        let query = formatter::with_llc_suffix(name);
        self.log.info(format_args!("Checking availability of '{query}' in GA"));
        let verdict = session
            .session()
            .and_then(|s| self.search(s, &query))
            .unwrap_or_else(|e| super::failed_search(&e, &query, Jurisdiction::Ga, &self.log));
        self.log.info(format_args!("GA verdict for '{query}': {verdict}"));
        verdict
    }
}
