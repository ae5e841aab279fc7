//! Report emitter port
//!
//! One implementation per output format. Emitters render the structured
//! result set into bytes; naming and writing the artifact is shared.

use std::path::PathBuf;

use thiserror::Error;

use super::super::models::{CompanyResult, OutputFormat};

/// Errors while producing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the artifact failed
    #[error("failed to write {path}: {source}")]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// CSV serialization failed
    #[error("csv error: {0}")]
    Csv(String),

    /// JSON serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Spreadsheet generation failed
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// XML generation failed
    #[error("xml error: {0}")]
    Xml(String),
}

/// Run-level facts every format needs alongside the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Jurisdiction code written in the State column
    pub jurisdiction: String,
    /// Column label for the jurisdiction verdict
    pub jurisdiction_label: String,
    /// Configured domain extensions, in order
    pub extensions: Vec<String>,
}

/// Serializer for one output format
pub trait ReportEmitter {
    /// Format produced by this emitter
    fn format(&self) -> OutputFormat;

    /// Render `results` to the artifact's bytes
    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError>;
}
