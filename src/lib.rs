//! company-scope - business name and domain availability checks
//!
//! Reads a list of company names, searches the configured state registry for
//! each name, looks up matching domains with a registrar, and writes one
//! report covering every company.
//!
//! The crate follows a ports and adapters layout:
//!
//! - [`core`] - domain models, port traits and pure services
//! - [`adapters`] - WebDriver sessions, registry checkers, registrar lookup,
//!   company list reader and report emitters
//! - [`orchestrator`] - drives one verification run
//! - [`config`], [`logging`], [`output`] - ambient concerns

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod logging;
pub mod orchestrator;
pub mod output;

pub use config::RunConfig;
pub use orchestrator::{RunError, RunOutcome, VerificationOrchestrator};
