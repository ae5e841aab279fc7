//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use company_scope::adapters::{self, jurisdictions};
use company_scope::config::{DEFAULT_CONFIG_PATH, RunConfig};
use company_scope::core::models::OutputFormat;
use company_scope::logging::{self, Logger};
use company_scope::orchestrator::VerificationOrchestrator;
use company_scope::output::{JurisdictionList, OutputMode, RunSummary};

/// company-scope - business name and domain availability checks
#[derive(Parser, Debug)]
#[command(
    name = "company-scope",
    version,
    about = "Check business name and domain availability",
    long_about = "Search a state business registry for each company name in a list,\n\
                  look up matching domains with a registrar, and write one report.\n\n\
                  A WebDriver server (chromedriver, geckodriver) must be running\n\
                  at session.webdriver_url."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every company in the input list and write the report
    Run(RunArgs),

    /// List the jurisdiction codes with a registered checker
    Jurisdictions,

    /// Show version
    Version,
}

/// Per-run overrides of the configuration file
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Company list, one name per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report format: txt, csv, json, xls, sql, xml
    #[arg(short = 'f', long)]
    pub report_format: Option<OutputFormat>,

    /// Directory the report is written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report base name (run date and extension are appended)
    #[arg(long)]
    pub report_name: Option<String>,

    /// Process at most this many companies
    #[arg(long)]
    pub company_limit: Option<usize>,

    /// Check at most this many domain extensions
    #[arg(long)]
    pub domain_limit: Option<usize>,

    /// Jurisdiction code, e.g. NJ
    #[arg(short, long)]
    pub jurisdiction: Option<String>,

    /// Check domain availability
    #[arg(long, overrides_with = "no_check_domains")]
    pub check_domains: bool,

    /// Skip domain availability
    #[arg(long, overrides_with = "check_domains")]
    pub no_check_domains: bool,

    /// Check name availability with the jurisdiction
    #[arg(long, overrides_with = "no_check_companies")]
    pub check_companies: bool,

    /// Skip the jurisdiction name search
    #[arg(long, overrides_with = "check_companies")]
    pub no_check_companies: bool,
}

const fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl RunArgs {
    /// Layer the command-line overrides onto `config`
    fn apply(self, config: &mut RunConfig) {
        if let Some(input) = self.input {
            config.input.path = input;
        }
        if let Some(format) = self.report_format {
            config.report.format = format;
        }
        if let Some(directory) = self.output {
            config.report.directory = directory;
        }
        if let Some(name) = self.report_name {
            config.report.base_name = name;
        }
        if let Some(limit) = self.company_limit {
            config.checks.company_limit = Some(limit);
        }
        if let Some(limit) = self.domain_limit {
            config.checks.domain_limit = limit;
        }
        if let Some(code) = self.jurisdiction {
            config.jurisdiction = code;
        }
        if let Some(enabled) = toggle(self.check_domains, self.no_check_domains) {
            config.checks.domain = enabled;
        }
        if let Some(enabled) = toggle(self.check_companies, self.no_check_companies) {
            config.checks.company_name = enabled;
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run(args)) => run_checks(&cli.config, args, output_mode),
        Some(Command::Jurisdictions) => {
            JurisdictionList::new(jurisdictions::registered()).render(output_mode);
            Ok(())
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": company_scope::VERSION
                    })
                );
            } else {
                println!("company-scope v{}", company_scope::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": company_scope::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("company-scope v{}", company_scope::VERSION);
                println!("\nRun 'company-scope --help' for usage");
                println!("Run 'company-scope run' to check the configured company list");
            }
            Ok(())
        },
    }
}

fn run_checks(config_path: &Path, args: RunArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let log = Logger::root();
    let mut config = RunConfig::load_or_default(config_path)?;
    args.apply(&mut config);

    let components = adapters::build_components(&config, &log)?;
    let outcome = VerificationOrchestrator::new(config, components, &log)?.run()?;
    RunSummary::from(&outcome).render(output_mode);
    Ok(())
}
