//! Namecheap domain availability lookup
//!
//! Loads the registrar's search results for one domain and waits for the
//! result card of that domain's extension. The card is marked either
//! `unavailable` or `available`; available cards carry the first-year price.
//! Only displayed cards count.

use crate::adapters::page;
use crate::config::{DomainConfig, TimingConfig};
use crate::core::models::{CheckKind, CheckVerdict};
use crate::core::ports::{DomainChecker, ENTER_KEY, Locator, SessionError, WebSession};
use crate::core::services::SessionHandle;
use crate::logging::Logger;

const SEARCH_INPUT: &str = "input#search-query";
const PRICE: &str = "div.price strong";

/// Result-card selectors for the extension of `domain`
///
/// Only the last label is used, so `acme.co.uk` is matched by `domain-uk`
/// cards and never by a `.com` card shown on the same page.
#[must_use]
pub fn indicator_selectors(domain: &str) -> (String, String) {
    let extension = domain.rsplit('.').next().unwrap_or(domain);
    (
        format!("article.domain-{extension}.unavailable"),
        format!("article.domain-{extension}.available"),
    )
}

/// Registrar lookup through the Namecheap search page
#[derive(Debug, Clone)]
pub struct NamecheapChecker {
    lookup_url: String,
    timing: TimingConfig,
    log: Logger,
}

impl NamecheapChecker {
    /// Checker querying `config.lookup_url`
    #[must_use]
    pub fn new(config: &DomainConfig, timing: TimingConfig, log: Logger) -> Self {
        Self {
            lookup_url: config.lookup_url.clone(),
            timing,
            log,
        }
    }

    fn lookup(&self, session: &mut dyn WebSession, domain: &str) -> Result<CheckVerdict, SessionError> {
        session.navigate(&format!("{}{domain}", self.lookup_url))?;
        self.log.debug(format_args!("Accessing Namecheap for domain: {domain}"));
        page::fill(
            session,
            &Locator::css(SEARCH_INPUT),
            &format!("{domain}{ENTER_KEY}"),
            self.timing.short_wait(),
        )?;
        page::settle(self.timing.pause() * 2);

        let (taken, free) = indicator_selectors(domain);
        let indicators = [Locator::css(taken), Locator::css(free)];
        let (index, card) = match session.wait_any_visible(&indicators, self.timing.short_wait()) {
            Ok(found) => found,
            Err(e) if e.is_timeout() => return Ok(CheckVerdict::StatusUnknown),
            Err(e) => return Err(e),
        };
        if index == 0 {
            return Ok(CheckVerdict::NotAvailable);
        }

        let Some(price) = session.find_within(&card, &Locator::css(PRICE))?.into_iter().next() else {
            self.log.warn(format_args!("Domain '{domain}' looks available but shows no price"));
            return Ok(CheckVerdict::StatusUnknown);
        };
        let price = session.text(&price)?.trim().to_string();
        if price.is_empty() {
            return Ok(CheckVerdict::StatusUnknown);
        }
        Ok(CheckVerdict::AvailableWithPrice(price))
    }
}

impl DomainChecker for NamecheapChecker {
    fn check_domain(&mut self, session: &mut SessionHandle, domain: &str) -> CheckVerdict {
        let verdict = session
            .session()
            .and_then(|s| self.lookup(s, domain))
            .unwrap_or_else(|e| {
                if e.is_absence() {
                    self.log.warn(format_args!("No usable answer for domain '{domain}': {e}"));
                    CheckVerdict::StatusUnknown
                } else {
                    self.log.error(format_args!("Lookup of domain '{domain}' failed: {e}"));
                    CheckVerdict::Error(e.to_string())
                }
            });
        self.log.info(format_args!("Domain '{domain}': {}", verdict.label(CheckKind::Domain)));
        verdict
    }
}
