//! Core domain logic for company-scope
//!
//! Name formatting, verdicts and session ownership, with no knowledge of any
//! particular registry, registrar or file format. All external interactions
//! are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (CompanyRecord, CheckVerdict, Jurisdiction, OutputFormat)
//! - `services/` - Name formatting and session ownership
//! - `ports/` - Trait definitions for the browser, checkers, input and reports

pub mod models;
pub mod ports;
pub mod services;
