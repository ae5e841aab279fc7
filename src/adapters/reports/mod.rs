//! Report emitters
//!
//! One emitter per [`OutputFormat`]. Emitters only turn results into bytes;
//! [`write_artifact`] places them on disk. Tabular formats share the column
//! layout defined here: company, state, jurisdiction verdict, then one column
//! per configured extension.

mod csv;
mod json;
mod sql;
mod text;
mod xlsx;
mod xml;

use std::fs;
use std::path::Path;

pub use self::csv::CsvEmitter;
pub use self::json::JsonEmitter;
pub use self::sql::SqlEmitter;
pub use self::text::TextEmitter;
pub use self::xlsx::SpreadsheetEmitter;
pub use self::xml::XmlEmitter;

use crate::core::models::{CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

/// The emitter for `format`
#[must_use]
pub fn emitter_for(format: OutputFormat) -> Box<dyn ReportEmitter> {
    match format {
        OutputFormat::Txt => Box::new(TextEmitter),
        OutputFormat::Csv => Box::new(CsvEmitter),
        OutputFormat::Json => Box::new(JsonEmitter),
        OutputFormat::Xlsx => Box::new(SpreadsheetEmitter),
        OutputFormat::Sql => Box::new(SqlEmitter),
        OutputFormat::Xml => Box::new(XmlEmitter),
    }
}

/// Write `bytes` to `path`, creating the directory and replacing any
/// earlier artifact
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, bytes).map_err(io_error)
}

/// Header row shared by the tabular formats
pub(crate) fn header(context: &ReportContext) -> Vec<String> {
    let mut columns = vec![
        "Company".to_string(),
        "State".to_string(),
        context.jurisdiction_label.clone(),
    ];
    columns.extend(context.extensions.iter().cloned());
    columns
}

/// Domain verdict labels in configured extension order
///
/// Extensions without a recorded result yield an empty cell.
pub(crate) fn domain_cells(context: &ReportContext, result: &CompanyResult) -> Vec<String> {
    context
        .extensions
        .iter()
        .map(|extension| result.domain_result(extension).map(|d| d.label()).unwrap_or_default())
        .collect()
}

/// One data row shared by the tabular formats
pub(crate) fn row(context: &ReportContext, result: &CompanyResult) -> Vec<String> {
    let mut cells = vec![
        result.company.raw_name().to_string(),
        context.jurisdiction.clone(),
        result.jurisdiction_label(),
    ];
    cells.extend(domain_cells(context, result));
    cells
}
