//! CSV report

use ::csv::{QuoteStyle, WriterBuilder};

use crate::core::models::{CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

/// Header row plus one row per company, standard CSV quoting
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEmitter;

impl ReportEmitter for CsvEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError> {
        let csv_error = |e: ::csv::Error| ReportError::Csv(e.to_string());
        let mut writer = WriterBuilder::new().quote_style(QuoteStyle::Necessary).from_writer(Vec::new());
        writer.write_record(super::header(context)).map_err(csv_error)?;
        for result in results {
            writer.write_record(super::row(context, result)).map_err(csv_error)?;
        }
        writer.into_inner().map_err(|e| ReportError::Csv(e.to_string()))
    }
}
