//! Domain models
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CompanyRecord`] - a company name and its derived search tokens
//! - [`CheckVerdict`] - the outcome of one availability check
//! - [`CompanyResult`] - all verdicts gathered for one company
//! - [`Jurisdiction`] - the closed set of supported registries
//! - [`OutputFormat`] - report formats

mod company;
mod format;
mod jurisdiction;
mod verdict;

pub use company::{CompanyRecord, CompanyResult, DomainCheckResult};
pub use format::OutputFormat;
pub use jurisdiction::Jurisdiction;
pub use verdict::{CheckKind, CheckVerdict};
