//! XML report

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::models::{CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

/// `<Companies>` document with one `<Company>` per result
///
/// ```xml
/// <Company>
///   <Name>Acme LLC</Name>
///   <State>NJ</State>
///   <Status label="Jurisdiction">Available</Status>
///   <Domain extension=".com" name="acme.com">Taken</Domain>
/// </Company>
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEmitter;

type XmlWriter = Writer<Vec<u8>>;

fn xml_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Xml(err.to_string())
}

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), ReportError> {
    writer.write_event(event).map_err(xml_error)
}

fn text_element(writer: &mut XmlWriter, start: BytesStart<'_>, text: &str) -> Result<(), ReportError> {
    let end = BytesEnd::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    write(writer, Event::Start(start))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(end))
}

fn company(writer: &mut XmlWriter, context: &ReportContext, result: &CompanyResult) -> Result<(), ReportError> {
    write(writer, Event::Start(BytesStart::new("Company")))?;
    text_element(writer, BytesStart::new("Name"), result.company.raw_name())?;
    text_element(writer, BytesStart::new("State"), &context.jurisdiction)?;
    if result.jurisdiction_verdict.is_some() {
        let status = BytesStart::new("Status").with_attributes([("label", context.jurisdiction_label.as_str())]);
        text_element(writer, status, &result.jurisdiction_label())?;
    }
    for domain in &result.domain_results {
        let element = BytesStart::new("Domain")
            .with_attributes([("extension", domain.extension.as_str()), ("name", domain.domain.as_str())]);
        text_element(writer, element, &domain.label())?;
    }
    write(writer, Event::End(BytesEnd::new("Company")))
}

impl ReportEmitter for XmlEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xml
    }

    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write(&mut writer, Event::Start(BytesStart::new("Companies")))?;
        for result in results {
            company(&mut writer, context, result)?;
        }
        write(&mut writer, Event::End(BytesEnd::new("Companies")))?;
        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }
}
