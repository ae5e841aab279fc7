//! New Jersey business name search
//!
//! The portal answers an availability query with a banner: an error banner
//! when the name is registered, a success banner when it is free.

use crate::adapters::page;
use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, Locator, SessionError, WebSession};
use crate::core::services::SessionHandle;
use crate::logging::Logger;

const URL: &str = "https://www.njportal.com/DOR/BusinessNameSearch/Search/Availability";
const SEARCH_INPUT: &str = "input#BusinessName";
const SUBMIT: &str = "input[type='submit'].btn.btn-warning";
const ANY_BANNER: &str = ".alert";
const TAKEN_BANNER: &str = ".alert.alert-error";
const FREE_BANNER: &str = ".alert.alert-success";

/// Banner-driven checker for New Jersey
#[derive(Debug, Clone)]
pub struct NewJerseyChecker {
    timing: TimingConfig,
    log: Logger,
}

impl NewJerseyChecker {
    /// Checker using `timing` for its waits
    #[must_use]
    pub const fn new(timing: TimingConfig, log: Logger) -> Self {
        Self { timing, log }
    }

    fn search(&self, session: &mut dyn WebSession, name: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(URL)?;
        self.log.debug(format_args!("Accessing NJ portal: {URL}"));
        page::fill(session, &Locator::css(SEARCH_INPUT), name, self.timing.short_wait())?;
        page::click(session, &Locator::css(SUBMIT))?;
        session.wait_present(&Locator::css(ANY_BANNER), self.timing.short_wait())?;

        if !session.find_all(&Locator::css(TAKEN_BANNER))?.is_empty() {
            Ok(CheckVerdict::NotAvailable)
        } else if !session.find_all(&Locator::css(FREE_BANNER))?.is_empty() {
            Ok(CheckVerdict::Available)
        } else {
            self.log.info(format_args!("Banner for '{name}' matched neither outcome"));
            Ok(CheckVerdict::StatusUnknown)
        }
    }
}

impl JurisdictionChecker for NewJerseyChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Nj
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        self.log.info(format_args!("Checking availability of '{name}' in NJ"));
        let verdict = session
            .session()
            .and_then(|s| self.search(s, name))
            .unwrap_or_else(|e| super::failed_search(&e, name, Jurisdiction::Nj, &self.log));
        self.log.info(format_args!("NJ verdict for '{name}': {verdict}"));
        verdict
    }
}
