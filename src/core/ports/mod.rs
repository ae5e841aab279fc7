//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the verification core and the
//! outside world: the browser, the registries and registrars behind it, the
//! company list, and report files.
//!
//! Implementations live in the `adapters` module.

mod company_source;
mod domain_checker;
mod jurisdiction_checker;
mod report_emitter;
mod web_session;

pub use company_source::{CompanySource, SourceError};
pub use domain_checker::DomainChecker;
pub use jurisdiction_checker::JurisdictionChecker;
pub use report_emitter::{ReportContext, ReportEmitter, ReportError};
pub use web_session::{ENTER_KEY, ElementId, Locator, SessionError, SessionLauncher, Wait, WebSession};

#[cfg(test)]
pub use company_source::MockCompanySource;
#[cfg(test)]
pub use domain_checker::MockDomainChecker;
#[cfg(test)]
pub use jurisdiction_checker::MockJurisdictionChecker;
