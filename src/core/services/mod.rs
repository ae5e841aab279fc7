//! Business logic services
//!
//! - [`formatter`] - Turn raw company names into search tokens
//! - [`session`] - Own the run's web session and hand it to checkers

pub mod formatter;
pub mod session;

pub use session::SessionHandle;
