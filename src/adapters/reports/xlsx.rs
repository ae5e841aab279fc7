//! Spreadsheet report

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};

use crate::core::models::{CheckVerdict, CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

const FONT: &str = "Times New Roman";
const TAKEN_FILL: u32 = 0xFF_CC_CC;
const AVAILABLE_FILL: u32 = 0x9B_C2_80;
const PRICED_FILL: u32 = 0xFF_CF_A0;
const COLUMN_WIDTH: f64 = 24.0;

/// Workbook with one sheet: a header row and one row per company
///
/// A jurisdiction verdict of "Not Available" is shaded red and "Available"
/// green; a domain verdict that carries a price is shaded orange.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetEmitter;

struct Styles {
    header: Format,
    normal: Format,
    taken: Format,
    available: Format,
    priced: Format,
}

impl Styles {
    fn new() -> Self {
        let base = Format::new().set_font_name(FONT).set_font_size(12).set_border(FormatBorder::Thin);
        Self {
            header: base.clone().set_bold().set_font_size(13),
            taken: base.clone().set_background_color(Color::RGB(TAKEN_FILL)),
            available: base.clone().set_background_color(Color::RGB(AVAILABLE_FILL)),
            priced: base.clone().set_background_color(Color::RGB(PRICED_FILL)),
            normal: base,
        }
    }

    fn for_jurisdiction(&self, verdict: Option<&CheckVerdict>) -> &Format {
        match verdict {
            Some(CheckVerdict::NotAvailable) => &self.taken,
            Some(CheckVerdict::Available) => &self.available,
            _ => &self.normal,
        }
    }

    fn for_domain(&self, verdict: Option<&CheckVerdict>) -> &Format {
        if verdict.and_then(CheckVerdict::price).is_some() {
            &self.priced
        } else {
            &self.normal
        }
    }
}

fn build(context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, XlsxError> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Results")?;

    for (col, title) in (0_u16..).zip(super::header(context)) {
        sheet.write_string_with_format(0, col, title, &styles.header)?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (row, result) in (1_u32..).zip(results) {
        sheet.write_string_with_format(row, 0, result.company.raw_name(), &styles.normal)?;
        sheet.write_string_with_format(row, 1, &context.jurisdiction, &styles.normal)?;
        sheet.write_string_with_format(
            row,
            2,
            result.jurisdiction_label(),
            styles.for_jurisdiction(result.jurisdiction_verdict.as_ref()),
        )?;
        for (col, extension) in (3_u16..).zip(&context.extensions) {
            let domain = result.domain_result(extension);
            let label = domain.map(|d| d.label()).unwrap_or_default();
            let style = styles.for_domain(domain.map(|d| &d.verdict));
            sheet.write_string_with_format(row, col, label, style)?;
        }
    }

    workbook.save_to_buffer()
}

impl ReportEmitter for SpreadsheetEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xlsx
    }

    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError> {
        build(context, results).map_err(|e| ReportError::Spreadsheet(e.to_string()))
    }
}
