//! Check verdicts
//!
//! Every jurisdiction or domain check produces exactly one verdict. Failures
//! are ordinary data here, never control flow.

use serde::{Serialize, Serializer};

/// Which kind of check produced a verdict
///
/// Only affects how `NotAvailable` is worded: registries report a name as
/// "Not Available", registrars report a domain as "Taken".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Business-name search against a jurisdiction registry
    Jurisdiction,
    /// Registrar lookup for a domain
    Domain,
}

/// Normalized outcome of one availability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckVerdict {
    /// The name or domain can be registered
    Available,
    /// The name is registered / the domain is taken
    NotAvailable,
    /// The domain is available at the displayed price
    AvailableWithPrice(String),
    /// The source did not give a usable answer in time
    StatusUnknown,
    /// The check failed
    Error(String),
}

impl CheckVerdict {
    /// Human-readable label used by every report format
    #[must_use]
    pub fn label(&self, kind: CheckKind) -> String {
        match (self, kind) {
            (Self::Available, _) => "Available".to_string(),
            (Self::NotAvailable, CheckKind::Jurisdiction) => "Not Available".to_string(),
            (Self::NotAvailable, CheckKind::Domain) => "Taken".to_string(),
            (Self::AvailableWithPrice(price), _) => format!("Available at {price}"),
            (Self::StatusUnknown, _) => "Status Unknown".to_string(),
            (Self::Error(detail), _) => format!("Error: {detail}"),
        }
    }

    /// Whether the verdict says the name or domain can be taken
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available | Self::AvailableWithPrice(_))
    }

    /// The attached price, if any
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        match self {
            Self::AvailableWithPrice(price) => Some(price),
            _ => None,
        }
    }

    /// Short machine-friendly tag
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::NotAvailable => "not_available",
            Self::AvailableWithPrice(_) => "available_with_price",
            Self::StatusUnknown => "status_unknown",
            Self::Error(_) => "error",
        }
    }
}

impl std::fmt::Display for CheckVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label(CheckKind::Jurisdiction))
    }
}

impl Serialize for CheckVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
