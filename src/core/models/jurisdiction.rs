//! Supported jurisdictions
//!
//! The set of registries is closed: adding one means adding a variant here,
//! and the compiler then points at every place that needs a checker for it.

use serde::{Deserialize, Serialize};

/// A state registry with a name-availability search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    /// Florida (Sunbiz)
    Fl,
    /// Georgia (eCorp)
    Ga,
    /// Maryland (Business Express)
    Md,
    /// North Carolina (Secretary of State)
    Nc,
    /// New Jersey (DORES business name search)
    Nj,
    /// South Carolina (Business Filings)
    Sc,
}

impl Jurisdiction {
    /// Every registered jurisdiction, in code order
    pub const ALL: [Self; 6] = [Self::Fl, Self::Ga, Self::Md, Self::Nc, Self::Nj, Self::Sc];

    /// Two-letter upper-case code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fl => "FL",
            Self::Ga => "GA",
            Self::Md => "MD",
            Self::Nc => "NC",
            Self::Nj => "NJ",
            Self::Sc => "SC",
        }
    }

    /// Full state name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fl => "Florida",
            Self::Ga => "Georgia",
            Self::Md => "Maryland",
            Self::Nc => "North Carolina",
            Self::Nj => "New Jersey",
            Self::Sc => "South Carolina",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|j| j.code() == code)
            .ok_or_else(|| format!("no jurisdiction checker registered for '{s}'"))
    }
}
