//! Run-level behaviour of the verification orchestrator

use std::fs;

use company_scope::core::models::{CheckVerdict, Jurisdiction, OutputFormat};
use company_scope::orchestrator::RunError;
use tempfile::TempDir;
use test_case::test_case;

use crate::common::fixtures::{self, config, write_companies};
use crate::common::mocks::{
    CountingLauncher, FailingLauncher, ScriptedDomainChecker, ScriptedJurisdictionChecker,
};

fn acme_and_widgets() -> (ScriptedJurisdictionChecker, ScriptedDomainChecker) {
    let names = ScriptedJurisdictionChecker::new(Jurisdiction::Nj)
        .answer("Acme", CheckVerdict::Available)
        .answer("Widgets", CheckVerdict::NotAvailable);
    let domains = ScriptedDomainChecker::default()
        .answer("acme.com", CheckVerdict::NotAvailable)
        .answer("widgets.com", CheckVerdict::AvailableWithPrice("$9.99".to_string()));
    (names, domains)
}

#[test]
fn test_text_report_for_two_companies() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), OutputFormat::Txt);
    write_companies(&config, &["Acme LLC", "Widgets Inc"]);
    let (launcher, sessions) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();

    let outcome = fixtures::run(config, launcher, names, domains).unwrap();

    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.report_path, temp.path().join("reports").join("report_09_03_2024.txt"));
    let report = fs::read_to_string(&outcome.report_path).unwrap();
    assert_eq!(
        report,
        "Company: Acme LLC\n\
         Jurisdiction: Available\n\
         acme.com: Taken\n\
         \n\
         Company: Widgets Inc\n\
         Jurisdiction: Not Available\n\
         widgets.com: Available at $9.99\n\
         \n"
    );
    assert_eq!(sessions.launches.get(), 1);
    assert_eq!(sessions.open_sessions(), 0);
}

#[test]
fn test_checkers_receive_formatted_tokens() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), OutputFormat::Txt);
    write_companies(&config, &["Acme LLC", "Widgets Inc"]);
    let (launcher, _) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();
    let searched = names.seen.clone();
    let looked_up = domains.seen.clone();

    fixtures::run(config, launcher, names, domains).unwrap();

    assert_eq!(*searched.borrow(), ["Acme", "Widgets"]);
    assert_eq!(*looked_up.borrow(), ["acme.com", "widgets.com"]);
}

#[test]
fn test_missing_input_releases_session_without_report() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), OutputFormat::Txt);
    let (launcher, sessions) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();

    let err = fixtures::run(config, launcher, names, domains).unwrap_err();

    assert!(matches!(err, RunError::InputNotFound(path) if path.ends_with("companies.txt")));
    assert_eq!(sessions.launches.get(), 1);
    assert_eq!(sessions.open_sessions(), 0);
    assert!(!temp.path().join("reports").exists());
}

#[test]
fn test_report_failure_still_releases_session() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), OutputFormat::Csv);
    write_companies(&config, &["Acme LLC"]);
    fs::write(&config.report.directory, "not a directory").unwrap();
    let (launcher, sessions) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();
    let searched = names.seen.clone();

    let err = fixtures::run(config, launcher, names, domains).unwrap_err();

    assert!(matches!(err, RunError::Report(_)));
    assert_eq!(*searched.borrow(), ["Acme"]);
    assert_eq!(sessions.launches.get(), 1);
    assert_eq!(sessions.open_sessions(), 0);
}

#[test]
fn test_session_launch_failure_ends_run() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), OutputFormat::Txt);
    write_companies(&config, &["Acme LLC"]);
    let (names, domains) = acme_and_widgets();
    let searched = names.seen.clone();

    let err = fixtures::run(config, FailingLauncher, names, domains).unwrap_err();

    assert!(matches!(err, RunError::Session(_)));
    assert!(searched.borrow().is_empty());
    assert!(!temp.path().join("reports").exists());
}

#[test]
fn test_unknown_jurisdiction_fails_before_launch() {
    let temp = TempDir::new().unwrap();
    let mut config = config(temp.path(), OutputFormat::Txt);
    config.jurisdiction = "TX".to_string();
    write_companies(&config, &["Acme LLC"]);
    let (launcher, sessions) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();

    let err = fixtures::run(config, launcher, names, domains).unwrap_err();

    assert!(err.to_string().contains("unknown jurisdiction: TX"));
    assert_eq!(sessions.launches.get(), 0);
}

#[test]
fn test_panicking_check_does_not_stop_the_run() {
    let temp = TempDir::new().unwrap();
    let config = config(temp.path(), OutputFormat::Txt);
    write_companies(&config, &["Acme LLC", "Widgets Inc"]);
    let (launcher, sessions) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();
    let names = names.panic_on("Acme");
    let looked_up = domains.seen.clone();

    let outcome = fixtures::run(config, launcher, names, domains).unwrap();

    let acme = &outcome.results[0];
    assert_eq!(
        acme.jurisdiction_verdict,
        Some(CheckVerdict::Error("registry page changed layout".to_string()))
    );
    assert!(matches!(&acme.domain_results[0].verdict, CheckVerdict::Error(detail) if detail.starts_with("not checked")));

    let widgets = &outcome.results[1];
    assert_eq!(widgets.jurisdiction_verdict, Some(CheckVerdict::NotAvailable));
    assert_eq!(
        widgets.domain_results[0].verdict,
        CheckVerdict::AvailableWithPrice("$9.99".to_string())
    );
    assert_eq!(*looked_up.borrow(), ["widgets.com"]);
    assert_eq!(sessions.open_sessions(), 0);

    let report = fs::read_to_string(&outcome.report_path).unwrap();
    assert!(report.contains("Jurisdiction: Error: registry page changed layout"));
}

#[test_case(5, Some(2), 2 ; "limit below list length")]
#[test_case(2, Some(5), 2 ; "limit above list length")]
#[test_case(3, Some(0), 0 ; "zero limit")]
#[test_case(4, None, 4 ; "no limit")]
fn test_company_limit_truncates_in_order(listed: usize, limit: Option<usize>, expected: usize) {
    let temp = TempDir::new().unwrap();
    let mut config = config(temp.path(), OutputFormat::Csv);
    config.checks.company_limit = limit;
    let names: Vec<String> = (0..listed).map(|i| format!("Company {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    write_companies(&config, &refs);
    let (launcher, _) = CountingLauncher::new();

    let outcome = fixtures::run(
        config,
        launcher,
        ScriptedJurisdictionChecker::new(Jurisdiction::Nj),
        ScriptedDomainChecker::default(),
    )
    .unwrap();

    let processed: Vec<&str> = outcome.results.iter().map(|r| r.company.raw_name()).collect();
    assert_eq!(processed, refs[..expected]);
}

#[test]
fn test_domain_results_follow_configured_extensions() {
    let temp = TempDir::new().unwrap();
    let mut config = config(temp.path(), OutputFormat::Json);
    config.domain_extensions = vec![".net".to_string(), ".com".to_string(), ".org".to_string()];
    config.checks.domain_limit = 2;
    write_companies(&config, &["Acme LLC"]);
    let (launcher, _) = CountingLauncher::new();
    let domains = ScriptedDomainChecker::default().answer("acme.net", CheckVerdict::NotAvailable);

    let outcome = fixtures::run(
        config,
        launcher,
        ScriptedJurisdictionChecker::new(Jurisdiction::Nj),
        domains,
    )
    .unwrap();

    let checked: Vec<(&str, &CheckVerdict)> = outcome.results[0]
        .domain_results
        .iter()
        .map(|d| (d.extension.as_str(), &d.verdict))
        .collect();
    assert_eq!(
        checked,
        [(".net", &CheckVerdict::NotAvailable), (".com", &CheckVerdict::StatusUnknown)]
    );
}

#[test]
fn test_disabled_checks_leave_results_empty() {
    let temp = TempDir::new().unwrap();
    let mut config = config(temp.path(), OutputFormat::Txt);
    config.checks.company_name = false;
    config.checks.domain = false;
    write_companies(&config, &["Acme LLC"]);
    let (launcher, _) = CountingLauncher::new();
    let (names, domains) = acme_and_widgets();
    let searched = names.seen.clone();

    let outcome = fixtures::run(config, launcher, names, domains).unwrap();

    assert!(searched.borrow().is_empty());
    assert_eq!(outcome.results[0].jurisdiction_verdict, None);
    assert!(outcome.results[0].domain_results.is_empty());
    assert_eq!(fs::read_to_string(&outcome.report_path).unwrap(), "Company: Acme LLC\n\n");
}
