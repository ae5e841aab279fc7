//! Report output formats

use serde::{Deserialize, Serialize};

/// Format of the report artifact written at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text blocks, one per company
    #[default]
    Txt,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of company objects
    Json,
    /// Spreadsheet with conditional shading
    #[serde(alias = "xls")]
    Xlsx,
    /// SQL `INSERT` statements
    Sql,
    /// XML document
    Xml,
}

impl OutputFormat {
    /// File extension of the artifact
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
            Self::Sql => "sql",
            Self::Xml => "xml",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xls" | "xlsx" => Ok(Self::Xlsx),
            "sql" => Ok(Self::Sql),
            "xml" => Ok(Self::Xml),
            _ => Err(format!("Invalid output format: {s}. Use: txt, csv, json, xls, sql, xml")),
        }
    }
}
