//! Maryland Business Express entity search
//!
//! The portal never confirms that a name is registered. It only shows a
//! "not found" notice when the search comes back empty, so the verdict is
//! driven by whether that notice appears within the wait: seen means free,
//! not seen means taken.

use crate::adapters::page;
use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, Locator, SessionError, WebSession};
use crate::core::services::{SessionHandle, formatter};
use crate::logging::Logger;

/// Neutral page visited first so the portal sees an ordinary referrer
const WARMUP_URL: &str = "https://www.google.com";
const URL: &str = "https://egov.maryland.gov/BusinessExpress/EntitySearch";
const DEPARTMENT_ID_RADIO: &str = "input[name='SearchType'][value='DepartmentId']";
const BUSINESS_NAME_RADIO: &str = "input[name='SearchType'][value='BusinessName']";
const SEARCH_INPUT: &str = "input#BusinessName";
const SUBMIT: &str = "button#searchBus1";
const NOT_FOUND_NOTICE: &str = "//div[contains(@class, 'textNotice') and contains(text(), \
                                'The business name you entered was not found. Try your search again.')]";

/// Negative-confirmation checker for Maryland
#[derive(Debug, Clone)]
pub struct MarylandChecker {
    timing: TimingConfig,
    log: Logger,
}

impl MarylandChecker {
    /// Checker using `timing` for its waits
    #[must_use]
    pub const fn new(timing: TimingConfig, log: Logger) -> Self {
        Self { timing, log }
    }

    fn search(&self, session: &mut dyn WebSession, query: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(WARMUP_URL)?;
        page::settle(self.timing.pause());
        session.navigate(URL)?;
        self.log.debug(format_args!("Accessing MD Business Express: {URL}"));

        // The name radio only takes effect after switching away from it.
        for radio in [DEPARTMENT_ID_RADIO, BUSINESS_NAME_RADIO] {
            let found = session.wait_present(&Locator::css(radio), self.timing.short_wait())?;
            if let Some(radio) = found.first() {
                session.click(radio)?;
            }
        }

        let field = session.wait_present(&Locator::css(SEARCH_INPUT), self.timing.short_wait())?;
        let field = field
            .into_iter()
            .next()
            .ok_or_else(|| SessionError::NoSuchElement(SEARCH_INPUT.to_string()))?;
        session.clear(&field)?;
        page::type_slowly(session, &field, query, self.timing.keystroke_delay())?;
        page::click(session, &Locator::css(SUBMIT))?;

        match session.wait_present(&Locator::xpath(NOT_FOUND_NOTICE), self.timing.short_wait()) {
            Ok(_) => Ok(CheckVerdict::Available),
            Err(e) if e.is_timeout() => {
                self.log.info(format_args!("No not-found notice for '{query}'; treating as registered"));
                Ok(CheckVerdict::NotAvailable)
            },
            Err(e) => Err(e),
        }
    }
}

impl JurisdictionChecker for MarylandChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Md
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        let query = formatter::with_llc_suffix(name);
        self.log.info(format_args!("Checking availability of '{query}' in MD"));
        let verdict = session
            .session()
            .and_then(|s| self.search(s, &query))
            .unwrap_or_else(|e| super::failed_search(&e, &query, Jurisdiction::Md, &self.log));
        self.log.info(format_args!("MD verdict for '{query}': {verdict}"));
        verdict
    }
}
