//! Plain-text report

use std::fmt::Write as _;

use crate::core::models::{CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

/// One block per company, separated by blank lines
///
/// ```text
/// Company: Acme LLC
/// Jurisdiction: Available
/// acme.com: Taken
/// ```
///
/// The jurisdiction line is omitted when name checking did not run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEmitter;

impl ReportEmitter for TextEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Txt
    }

    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError> {
        let mut out = String::new();
        for result in results {
            let _ = writeln!(out, "Company: {}", result.company.raw_name());
            if result.jurisdiction_verdict.is_some() {
                let _ = writeln!(out, "{}: {}", context.jurisdiction_label, result.jurisdiction_label());
            }
            for domain in &result.domain_results {
                let _ = writeln!(out, "{}: {}", domain.domain, domain.label());
            }
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
