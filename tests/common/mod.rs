//! Common test utilities shared across test types
//!
//! - `mocks.rs` - Scripted sessions and checkers standing in for browsers
//! - `fixtures.rs` - Config and input builders backed by temporary directories

pub mod fixtures;
pub mod mocks;
