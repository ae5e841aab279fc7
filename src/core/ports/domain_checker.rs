//! Domain checker port
//!
//! Defines the interface for registrar availability lookups.

use super::super::models::CheckVerdict;
use super::super::services::SessionHandle;

/// Registrar lookup for a single domain
///
/// Returns exactly one of `NotAvailable`, `AvailableWithPrice`,
/// `StatusUnknown` or `Error` per call.
#[cfg_attr(test, mockall::automock)]
pub trait DomainChecker {
    /// Check `domain` (name plus extension, e.g. `acme.com`)
    fn check_domain(&mut self, session: &mut SessionHandle, domain: &str) -> CheckVerdict;
}
