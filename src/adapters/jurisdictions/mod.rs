//! State registry checkers
//!
//! One module per registry. The set is closed: [`checker_for`] matches on
//! every [`Jurisdiction`] variant, so adding a state without a checker does
//! not compile. Codes are resolved to a [`Jurisdiction`] during config
//! validation, before any session is opened.
//!
//! Each module owns its portal's selectors and the reading of its results
//! page; the form-driving helpers are shared through `adapters::page`.

mod fl;
mod ga;
mod md;
mod nc;
mod nj;
mod sc;

pub use fl::FloridaChecker;
pub use ga::GeorgiaChecker;
pub use md::MarylandChecker;
pub use nc::NorthCarolinaChecker;
pub use nj::NewJerseyChecker;
pub use sc::SouthCarolinaChecker;

use crate::config::TimingConfig;
use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::core::ports::{JurisdictionChecker, SessionError};
use crate::logging::Logger;

/// Build the checker for `jurisdiction`
#[must_use]
pub fn checker_for(jurisdiction: Jurisdiction, timing: &TimingConfig, log: &Logger) -> Box<dyn JurisdictionChecker> {
    let log = log.scoped("jurisdiction").scoped(&jurisdiction.code().to_lowercase());
    let timing = timing.clone();
    match jurisdiction {
        Jurisdiction::Fl => Box::new(FloridaChecker::new(timing, log)),
        Jurisdiction::Ga => Box::new(GeorgiaChecker::new(timing, log)),
        Jurisdiction::Md => Box::new(MarylandChecker::new(timing, log)),
        Jurisdiction::Nc => Box::new(NorthCarolinaChecker::new(timing, log)),
        Jurisdiction::Nj => Box::new(NewJerseyChecker::new(timing, log)),
        Jurisdiction::Sc => Box::new(SouthCarolinaChecker::new(timing, log)),
    }
}

/// Every jurisdiction with a registered checker
#[must_use]
pub fn registered() -> &'static [Jurisdiction] {
    &Jurisdiction::ALL
}

/// Map a failed search to a verdict
///
/// Absence of an expected element and expired waits mean the page did not
/// answer; anything else is a failure of the check itself.
pub(crate) fn failed_search(err: &SessionError, name: &str, jurisdiction: Jurisdiction, log: &Logger) -> CheckVerdict {
    if err.is_absence() {
        log.warn(format_args!("No usable answer for '{name}' in {jurisdiction}: {err}"));
        CheckVerdict::StatusUnknown
    } else {
        log.error(format_args!("Search for '{name}' in {jurisdiction} failed: {err}"));
        CheckVerdict::Error(err.to_string())
    }
}
