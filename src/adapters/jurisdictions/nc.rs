//! North Carolina business registration search
//!
//! An exact-match corporation search; the results header carries a record
//! count, and a count of zero means the name is free.

use crate::adapters::page;
use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, Locator, SessionError, WebSession};
use crate::core::services::SessionHandle;
use crate::logging::Logger;

const URL: &str = "https://www.sosnc.gov/divisions/business_registration";
const CORPORATION_OPTION: &str = "select#CorpSearchType option[value='CORPORATION']";
const SEARCH_MODE: &str = "select#Words";
const SEARCH_INPUT: &str = "input#SearchCriteria";
const SUBMIT: &str = "button#SubmitButton";
const RESULTS: &str = "article#results-article span";
const NO_RECORDS: &str = "Records Found: 0";

/// Record-count checker for North Carolina
#[derive(Debug, Clone)]
pub struct NorthCarolinaChecker {
    timing: TimingConfig,
    log: Logger,
}

impl NorthCarolinaChecker {
    /// Checker using `timing` for its waits
    #[must_use]
    pub const fn new(timing: TimingConfig, log: Logger) -> Self {
        Self { timing, log }
    }

    fn search(&self, session: &mut dyn WebSession, name: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(URL)?;
        self.log.debug(format_args!("Accessing NC business search: {URL}"));

        let option = session.wait_present(&Locator::css(CORPORATION_OPTION), self.timing.short_wait())?;
        if let Some(option) = option.first() {
            session.click(option)?;
        }
        let mode = session.find(&Locator::css(SEARCH_MODE))?;
        session.send_keys(&mode, "Exact")?;
        page::fill(session, &Locator::css(SEARCH_INPUT), name, self.timing.short_wait())?;
        page::click(session, &Locator::css(SUBMIT))?;

        let results = session.wait_present(&Locator::css(RESULTS), self.timing.long_wait())?;
        let summary = results.first().map(|r| session.text(r)).transpose()?.unwrap_or_default();
        self.log.debug(format_args!("NC results summary: {summary}"));

        if summary.contains(NO_RECORDS) {
            Ok(CheckVerdict::Available)
        } else {
            Ok(CheckVerdict::NotAvailable)
        }
    }
}

impl JurisdictionChecker for NorthCarolinaChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Nc
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        self.log.info(format_args!("Checking availability of '{name}' in NC"));
        let verdict = session
            .session()
            .and_then(|s| self.search(s, name))
            .unwrap_or_else(|e| super::failed_search(&e, name, Jurisdiction::Nc, &self.log));
        self.log.info(format_args!("NC verdict for '{name}': {verdict}"));
        verdict
    }
}
