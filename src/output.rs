//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckVerdict, Jurisdiction};
use crate::orchestrator::RunOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Verdict counts for one kind of check
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerdictTally {
    /// Available, with or without a price
    pub available: usize,
    /// Registered or taken
    pub not_available: usize,
    /// No usable answer
    pub status_unknown: usize,
    /// Failed checks
    pub error: usize,
}

impl VerdictTally {
    fn record(&mut self, verdict: &CheckVerdict) {
        match verdict {
            CheckVerdict::Available | CheckVerdict::AvailableWithPrice(_) => self.available += 1,
            CheckVerdict::NotAvailable => self.not_available += 1,
            CheckVerdict::StatusUnknown => self.status_unknown += 1,
            CheckVerdict::Error(_) => self.error += 1,
        }
    }

    /// Total verdicts counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.available + self.not_available + self.status_unknown + self.error
    }
}

/// Result of a verification run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Jurisdiction code that was searched
    pub jurisdiction: String,
    /// Number of companies processed
    pub companies: usize,
    /// Jurisdiction verdict counts
    pub names: VerdictTally,
    /// Domain verdict counts per extension
    pub domains: BTreeMap<String, VerdictTally>,
    /// Report artifact location
    pub report: String,
    /// Run duration in seconds
    pub elapsed_secs: f64,
}

impl From<&RunOutcome> for RunSummary {
    fn from(outcome: &RunOutcome) -> Self {
        let mut names = VerdictTally::default();
        let mut domains: BTreeMap<String, VerdictTally> = BTreeMap::new();
        for result in &outcome.results {
            if let Some(verdict) = &result.jurisdiction_verdict {
                names.record(verdict);
            }
            for domain in &result.domain_results {
                domains.entry(domain.extension.clone()).or_default().record(&domain.verdict);
            }
        }
        Self {
            jurisdiction: outcome.jurisdiction.code().to_string(),
            companies: outcome.results.len(),
            names,
            domains,
            report: outcome.report_path.display().to_string(),
            elapsed_secs: outcome.elapsed.as_secs_f64(),
        }
    }
}

impl RunSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Processed {} companies against {}", self.companies, self.jurisdiction);
        if self.names.total() > 0 {
            println!("\nName availability:");
            print_tally(&self.names);
        }
        for (extension, tally) in &self.domains {
            println!("\nDomains {extension}:");
            print_tally(tally);
        }
        println!("\n{} {}", "Report saved:".green(), self.report);
        println!("Elapsed: {:.1}s", self.elapsed_secs);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn print_tally(tally: &VerdictTally) {
    println!("  {} {}", "available:".green(), tally.available);
    println!("  {} {}", "not available:".red(), tally.not_available);
    if tally.status_unknown > 0 {
        println!("  {} {}", "unknown:".yellow(), tally.status_unknown);
    }
    if tally.error > 0 {
        println!("  {} {}", "errors:".red().bold(), tally.error);
    }
}

/// Registered jurisdictions
#[derive(Debug, Serialize)]
pub struct JurisdictionList {
    /// One entry per registered code
    pub jurisdictions: Vec<JurisdictionInfo>,
}

/// A registered jurisdiction
#[derive(Debug, Serialize)]
pub struct JurisdictionInfo {
    /// Two-letter code accepted by `--jurisdiction`
    pub code: String,
    /// State name
    pub name: String,
}

impl JurisdictionList {
    /// List built from registered jurisdictions
    #[must_use]
    pub fn new(registered: &[Jurisdiction]) -> Self {
        Self {
            jurisdictions: registered
                .iter()
                .map(|j| JurisdictionInfo {
                    code: j.code().to_string(),
                    name: j.name().to_string(),
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for j in &self.jurisdictions {
                    println!("{}  {}", j.code.bold(), j.name);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
