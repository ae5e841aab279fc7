//! JSON report

use serde_json::{Map, Value};

use crate::core::models::{CompanyResult, OutputFormat};
use crate::core::ports::{ReportContext, ReportEmitter, ReportError};

/// Array of `{Company, State, <label>, Domains: {extension: verdict}}`
///
/// Keys keep their insertion order. A jurisdiction check that did not run is
/// `null`; extensions that were not checked are absent from `Domains`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

fn company_object(context: &ReportContext, result: &CompanyResult) -> Value {
    let mut domains = Map::new();
    for extension in &context.extensions {
        if let Some(domain) = result.domain_result(extension) {
            domains.insert(extension.clone(), Value::String(domain.label()));
        }
    }

    let mut object = Map::new();
    object.insert("Company".to_string(), Value::String(result.company.raw_name().to_string()));
    object.insert("State".to_string(), Value::String(context.jurisdiction.clone()));
    object.insert(
        context.jurisdiction_label.clone(),
        result
            .jurisdiction_verdict
            .as_ref()
            .map_or(Value::Null, |_| Value::String(result.jurisdiction_label())),
    );
    object.insert("Domains".to_string(), Value::Object(domains));
    Value::Object(object)
}

impl ReportEmitter for JsonEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, context: &ReportContext, results: &[CompanyResult]) -> Result<Vec<u8>, ReportError> {
        let companies: Vec<Value> = results.iter().map(|r| company_object(context, r)).collect();
        let mut bytes = serde_json::to_vec_pretty(&companies)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
