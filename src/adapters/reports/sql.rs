//! SQL insert statements

use std::fmt::Write as _;

use crate::core::models::{CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

/// Table the statements insert into
pub const TABLE: &str = "companies";

/// One `INSERT` per company into [`TABLE`]
///
/// Columns are `name, state`, the jurisdiction label and one column per
/// extension. Label and extension columns are double-quoted identifiers since
/// they contain spaces and dots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlEmitter;

/// Single-quoted SQL string literal with embedded quotes doubled
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl ReportEmitter for SqlEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Sql
    }

    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError> {
        let mut columns = vec!["name".to_string(), "state".to_string(), quote_identifier(&context.jurisdiction_label)];
        columns.extend(context.extensions.iter().map(|e| quote_identifier(e)));
        let columns = columns.join(", ");

        let mut out = String::new();
        for result in results {
            let values: Vec<String> = super::row(context, result).iter().map(|v| quote_literal(v)).collect();
            let _ = writeln!(out, "INSERT INTO {TABLE} ({columns}) VALUES ({});", values.join(", "));
        }
        Ok(out.into_bytes())
    }
}
