//! Common types for format adapters

use serde::{Deserialize, Serialize};

/// Source grammar a version string was parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// PEP 440 (Python packaging)
    #[serde(rename = "pep440")]
    Pep440,
    /// Semantic Versioning 2.0.0
    #[serde(rename = "semver")]
    SemVer,
    /// Calendar versioning (2024.01.15, 24.04, 2024-01-15)
    #[serde(rename = "calver")]
    CalVer,
    /// The canonical Verple string form
    #[serde(rename = "canonical")]
    Canonical,
}

impl Format {
    /// Detection priority used when no format hint is given.
    pub const PRIORITY: [Format; 4] = [
        Format::Pep440,
        Format::SemVer,
        Format::CalVer,
        Format::Canonical,
    ];

    /// Returns the string representation of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Pep440 => "pep440",
            Format::SemVer => "semver",
            Format::CalVer => "calver",
            Format::Canonical => "canonical",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pep440" => Ok(Format::Pep440),
            "semver" => Ok(Format::SemVer),
            "calver" => Ok(Format::CalVer),
            "canonical" => Ok(Format::Canonical),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Returned when a format name is not one of the supported grammars
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown version format: {0}")]
pub struct UnknownFormat(pub String);
