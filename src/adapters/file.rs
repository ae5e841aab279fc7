//! Text-file company source
//!
//! One company name per line. Trailing whitespace is stripped and blank
//! lines are skipped; everything else is passed through unchanged.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::ports::{CompanySource, SourceError};

/// Company list stored as a plain text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCompanySource {
    path: PathBuf,
}

impl FileCompanySource {
    /// Source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompanySource for FileCompanySource {
    fn load(&self) -> Result<Vec<String>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SourceError::NotFound(self.path.clone())
            } else {
                SourceError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        Ok(parse_lines(&content))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}
