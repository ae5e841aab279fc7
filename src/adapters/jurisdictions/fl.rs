//! Florida Sunbiz corporation search
//!
//! Sunbiz lists every entity whose name starts with the query. The name is
//! taken only when a row with exactly the queried name is active.

use crate::adapters::page;
use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, Locator, SessionError, WebSession};
use crate::core::services::{SessionHandle, formatter};
use crate::logging::Logger;

const URL: &str = "https://search.sunbiz.org/Inquiry/CorporationSearch/ByName";
const SEARCH_INPUT: &str = "input#SearchTerm";
const SUBMIT: &str = "input[type='submit']";
const ROW_NAMES: &str = "td.large-width a";
const ROW_STATUSES: &str = "td.small-width";

/// Result-table checker for Florida
#[derive(Debug, Clone)]
pub struct FloridaChecker {
    timing: TimingConfig,
    log: Logger,
}

impl FloridaChecker {
    /// Checker using `timing` for its waits
    #[must_use]
    pub const fn new(timing: TimingConfig, log: Logger) -> Self {
        Self { timing, log }
    }

    fn search(&self, session: &mut dyn WebSession, query: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(URL)?;
        self.log.debug(format_args!("Accessing FL Sunbiz: {URL}"));
        page::fill(session, &Locator::css(SEARCH_INPUT), query, self.timing.long_wait())?;
        page::click(session, &Locator::css(SUBMIT))?;
        session.wait_present(&Locator::css(ROW_NAMES), self.timing.long_wait())?;

        let names = page::texts(session, &Locator::css(ROW_NAMES))?;
        let statuses = page::texts(session, &Locator::css(ROW_STATUSES))?;
        let active_match = names.iter().zip(&statuses).any(|(name, status)| {
            name.trim().to_uppercase() == query && status.trim().eq_ignore_ascii_case("active")
        });
        Ok(if active_match {
            CheckVerdict::NotAvailable
        } else {
            CheckVerdict::Available
        })
    }
}

impl JurisdictionChecker for FloridaChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Fl
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        let query = formatter::with_llc_suffix(name);
        self.log.info(format_args!("Checking availability of '{query}' in FL"));
        let verdict = session
            .session()
            .and_then(|s| self.search(s, &query))
            .unwrap_or_else(|e| super::failed_search(&e, &query, Jurisdiction::Fl, &self.log));
        self.log.info(format_args!("FL verdict for '{query}': {verdict}"));
        verdict
    }
}
