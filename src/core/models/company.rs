//! Company records and per-company results

use super::{CheckKind, CheckVerdict};
use crate::core::services::formatter;

/// One company name from the input list, with its derived search tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    raw_name: String,
    domain_token: String,
    jurisdiction_token: String,
}

impl CompanyRecord {
    /// Format both tokens for `raw_name`
    ///
    /// `remove_suffix` controls whether legal-entity suffixes are stripped from
    /// the jurisdiction token; the domain token always drops them.
    #[must_use]
    pub fn new(raw_name: &str, remove_suffix: bool) -> Self {
        let raw_name = raw_name.trim_end().to_string();
        Self {
            domain_token: formatter::to_domain_token(&raw_name),
            jurisdiction_token: formatter::to_jurisdiction_token(&raw_name, remove_suffix),
            raw_name,
        }
    }

    /// The name exactly as read from input (trailing whitespace removed)
    #[must_use]
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Lower-case alphanumeric token used to build domains
    #[must_use]
    pub fn formatted_domain_token(&self) -> &str {
        &self.domain_token
    }

    /// Token submitted to the jurisdiction search
    #[must_use]
    pub fn formatted_jurisdiction_token(&self) -> &str {
        &self.jurisdiction_token
    }

    /// Full domain for a configured extension (e.g. `.com`)
    #[must_use]
    pub fn domain_for(&self, extension: &str) -> String {
        format!("{}{extension}", self.domain_token)
    }
}

/// Verdict for one configured domain extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCheckResult {
    /// Extension as configured, e.g. `.com`
    pub extension: String,
    /// The full domain that was checked
    pub domain: String,
    /// Outcome of the lookup
    pub verdict: CheckVerdict,
}

impl DomainCheckResult {
    /// Label of the verdict in domain wording ("Taken", "Available at $x")
    #[must_use]
    pub fn label(&self) -> String {
        self.verdict.label(CheckKind::Domain)
    }
}

/// Everything learned about one company during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyResult {
    /// The company that was checked
    pub company: CompanyRecord,
    /// Registry verdict, `None` when name checking is disabled
    pub jurisdiction_verdict: Option<CheckVerdict>,
    /// One entry per checked extension, in configured order
    pub domain_results: Vec<DomainCheckResult>,
}

impl CompanyResult {
    /// Start an empty result for `company`
    #[must_use]
    pub const fn new(company: CompanyRecord) -> Self {
        Self {
            company,
            jurisdiction_verdict: None,
            domain_results: Vec::new(),
        }
    }

    /// Jurisdiction verdict label, empty when the check did not run
    #[must_use]
    pub fn jurisdiction_label(&self) -> String {
        self.jurisdiction_verdict
            .as_ref()
            .map(|v| v.label(CheckKind::Jurisdiction))
            .unwrap_or_default()
    }

    /// Domain result for an extension, if one was recorded
    #[must_use]
    pub fn domain_result(&self, extension: &str) -> Option<&DomainCheckResult> {
        self.domain_results.iter().find(|d| d.extension == extension)
    }

    /// All verdicts recorded for this company
    pub fn verdicts(&self) -> impl Iterator<Item = &CheckVerdict> {
        self.jurisdiction_verdict
            .iter()
            .chain(self.domain_results.iter().map(|d| &d.verdict))
    }
}
