//! South Carolina business filings search
//!
//! Reads the name-availability alert shown after an exact-match search. The
//! portal throttles automated sessions, so the browser is replaced after
//! every [`RECYCLE_EVERY`] checks.

use crate::adapters::page;
use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, Locator, SessionError, WebSession};
use crate::core::services::SessionHandle;
use crate::logging::Logger;

/// Checks performed on one browser session before it is replaced
pub const RECYCLE_EVERY: usize = 3;

const URL: &str = "https://businessfilings.sc.gov/BusinessFiling/Entity/Search";
const SEARCH_TYPE: &str = "select#EntitySearchTypeEnumId";
const SEARCH_INPUT: &str = "input#SearchTextBox";
const SUBMIT: &str = "button#EntitySearchButton";
const AVAILABILITY_ALERT: &str = "div#nameAvailabilityDiv p.alert";
const AVAILABLE_TEXT: &str = "this name is available";

/// Alert-text checker for South Carolina
#[derive(Debug, Clone)]
pub struct SouthCarolinaChecker {
    timing: TimingConfig,
    checks: usize,
    log: Logger,
}

impl SouthCarolinaChecker {
    /// Checker using `timing` for its waits and recycling pause
    #[must_use]
    pub const fn new(timing: TimingConfig, log: Logger) -> Self {
        Self { timing, checks: 0, log }
    }

    /// Checks performed so far
    #[must_use]
    pub const fn checks(&self) -> usize {
        self.checks
    }

    fn search(&self, session: &mut dyn WebSession, name: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(URL)?;
        self.log.debug(format_args!("Accessing SC business filings: {URL}"));
        page::settle(self.timing.pause());

        let search_type = session.wait_present(&Locator::css(SEARCH_TYPE), self.timing.long_wait())?;
        if let Some(search_type) = search_type.first() {
            session.send_keys(search_type, "Exact Match")?;
        }
        page::settle(self.timing.pause());

        page::fill(session, &Locator::css(SEARCH_INPUT), name, self.timing.short_wait())?;
        page::settle(self.timing.pause());
        page::click(session, &Locator::css(SUBMIT))?;

        let alert = session.wait_visible(&Locator::css(AVAILABILITY_ALERT), self.timing.long_wait())?;
        let message = session.text(&alert)?.to_lowercase();
        if message.contains(AVAILABLE_TEXT) {
            Ok(CheckVerdict::Available)
        } else {
            self.log.info(format_args!("'{name}' may not be available in SC: {message}"));
            Ok(CheckVerdict::NotAvailable)
        }
    }

    fn after_check(&mut self, session: &mut SessionHandle) {
        self.checks += 1;
        if self.checks % RECYCLE_EVERY == 0 {
            self.log.info(format_args!("Replacing browser session after {} SC checks", self.checks));
            if let Err(e) = session.recycle(self.timing.recycle_pause()) {
                self.log.error(format_args!("Could not restart web session: {e}"));
            }
        }
    }
}

impl JurisdictionChecker for SouthCarolinaChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Sc
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        self.log.info(format_args!("Checking availability of '{name}' in SC"));
        let verdict = session
            .session()
            .and_then(|s| self.search(s, name))
            .unwrap_or_else(|e| super::failed_search(&e, name, Jurisdiction::Sc, &self.log));
        self.log.info(format_args!("SC verdict for '{name}': {verdict}"));
        self.after_check(session);
        verdict
    }
}
