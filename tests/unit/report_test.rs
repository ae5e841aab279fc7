//! Report emitters driven through the public API

use std::collections::HashSet;

use company_scope::adapters::reports::{self, CsvEmitter, JsonEmitter};
use company_scope::core::models::{CheckVerdict, CompanyRecord, CompanyResult, DomainCheckResult, OutputFormat};
use company_scope::core::ports::{ReportContext, ReportEmitter};
use proptest::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn context() -> ReportContext {
    ReportContext {
        jurisdiction: "FL".to_string(),
        jurisdiction_label: "Sunbiz".to_string(),
        extensions: vec![".com".to_string(), ".net".to_string()],
    }
}

fn verdict() -> impl Strategy<Value = CheckVerdict> {
    prop_oneof![
        Just(CheckVerdict::Available),
        Just(CheckVerdict::NotAvailable),
        Just(CheckVerdict::StatusUnknown),
        "\\$[0-9]{1,3}\\.[0-9]{2}".prop_map(CheckVerdict::AvailableWithPrice),
        "[a-z ]{1,12}".prop_map(CheckVerdict::Error),
    ]
}

fn company_result() -> impl Strategy<Value = CompanyResult> {
    (
        "[A-Za-z][A-Za-z ,'&.]{0,20}[A-Za-z]",
        proptest::option::of(verdict()),
        verdict(),
        verdict(),
    )
        .prop_map(|(name, jurisdiction, com, net)| {
            let mut result = CompanyResult::new(CompanyRecord::new(&name, true));
            result.jurisdiction_verdict = jurisdiction;
            for (extension, verdict) in [(".com", com), (".net", net)] {
                result.domain_results.push(DomainCheckResult {
                    extension: extension.to_string(),
                    domain: result.company.domain_for(extension),
                    verdict,
                });
            }
            result
        })
}

fn json_strings(value: &Value, out: &mut HashSet<String>) {
    match value {
        Value::String(s) => {
            out.insert(s.clone());
        },
        Value::Array(items) => items.iter().for_each(|v| json_strings(v, out)),
        Value::Object(map) => map.values().for_each(|v| json_strings(v, out)),
        _ => {},
    }
}

proptest! {
    /// Every non-empty CSV cell shows up as a JSON string for the same results
    #[test]
    fn csv_cells_appear_in_json(results in proptest::collection::vec(company_result(), 0..6)) {
        let csv = CsvEmitter.render(&context(), &results).unwrap();
        let json: Value = serde_json::from_slice(&JsonEmitter.render(&context(), &results).unwrap()).unwrap();

        let mut strings = HashSet::new();
        json_strings(&json, &mut strings);

        let mut reader = csv::Reader::from_reader(csv.as_slice());
        let mut rows = 0;
        for record in reader.records() {
            let record = record.unwrap();
            rows += 1;
            for cell in record.iter().filter(|c| !c.is_empty()) {
                prop_assert!(strings.contains(cell), "'{}' missing from JSON", cell);
            }
        }
        prop_assert_eq!(rows, results.len());
    }
}

#[test]
fn test_every_format_has_an_emitter() {
    for format in [
        OutputFormat::Txt,
        OutputFormat::Csv,
        OutputFormat::Json,
        OutputFormat::Xlsx,
        OutputFormat::Sql,
        OutputFormat::Xml,
    ] {
        assert_eq!(reports::emitter_for(format).format(), format);
    }
}

#[test]
fn test_write_artifact_creates_missing_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("reports").join("out.txt");

    reports::write_artifact(&path, b"first").unwrap();
    reports::write_artifact(&path, b"second").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"second");
}

#[test]
fn test_sql_and_xml_escape_company_names() {
    let mut result = CompanyResult::new(CompanyRecord::new("O'Brien & Sons <Holdings>", true));
    result.jurisdiction_verdict = Some(CheckVerdict::Available);
    let results = [result];

    let sql = reports::emitter_for(OutputFormat::Sql).render(&context(), &results).unwrap();
    let sql = String::from_utf8(sql).unwrap();
    assert!(sql.contains("'O''Brien & Sons <Holdings>'"));

    let xml = reports::emitter_for(OutputFormat::Xml).render(&context(), &results).unwrap();
    let xml = String::from_utf8(xml).unwrap();
    assert!(xml.contains("<Name>O&apos;Brien &amp; Sons &lt;Holdings&gt;</Name>"));
}
