//! Jurisdiction checker port
//!
//! One implementation per registry. Each knows the registry's URL, the
//! sequence of form interactions, and how to read the resulting page.

use super::super::models::{CheckVerdict, Jurisdiction};
use super::super::services::SessionHandle;

/// Business-name availability search against one registry
///
/// Implementations must be total: every failure is turned into a
/// [`CheckVerdict`] before returning.
#[cfg_attr(test, mockall::automock)]
pub trait JurisdictionChecker {
    /// Registry this checker queries
    fn jurisdiction(&self) -> Jurisdiction;

    /// Whether legal-entity suffixes are stripped before the name reaches
    /// [`check_availability`](Self::check_availability)
    fn remove_suffix(&self) -> bool {
        true
    }

    /// Search the registry for `name` using the run's session
    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict;
}
