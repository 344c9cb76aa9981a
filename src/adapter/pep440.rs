//! PEP 440 adapter backed by `pep440_rs`
//!
//! Field mapping:
//! - release segments are taken as-is (`1.2` stays two segments)
//! - prerelease kinds map to `a`, `b`, `rc`
//! - `post` / `dev` keep explicit zeros (`1.0.post0` is not `1.0`)
//! - the normalized local label (`+ubuntu.1`) becomes `local`
//!
//! Versions carrying a non-zero epoch (`1!2.0`) are rejected because the
//! model has no epoch field.

use std::str::FromStr;

use pep508_rs::pep440_rs::{PrereleaseKind, Version};

use crate::adapter::traits::{AdapterError, FormatAdapter, RawFields};
use crate::adapter::types::Format;

/// Adapter for PEP 440 version strings
pub struct Pep440Adapter;

impl Pep440Adapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Pep440Adapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for Pep440Adapter {
    fn format(&self) -> Format {
        Format::Pep440
    }

    fn parse(&self, input: &str) -> Result<RawFields, AdapterError> {
        let version =
            Version::from_str(input).map_err(|e| AdapterError::InvalidSyntax(e.to_string()))?;

        if version.epoch() != 0 {
            return Err(AdapterError::Unrepresentable(format!(
                "epoch {} has no counterpart",
                version.epoch()
            )));
        }

        let prerelease = version.pre().map(|pre| {
            let label = match pre.kind {
                PrereleaseKind::Alpha => "a",
                PrereleaseKind::Beta => "b",
                PrereleaseKind::Rc => "rc",
            };
            (label.to_string(), pre.number)
        });

        Ok(RawFields {
            release: version.release().to_vec(),
            prerelease,
            postrelease: version.post(),
            devrelease: version.dev(),
            local: local_label(&version),
        })
    }
}

/// Extract the normalized local label from the rendered version.
fn local_label(version: &Version) -> Option<String> {
    version
        .to_string()
        .split_once('+')
        .map(|(_, local)| local.to_string())
        .filter(|local| !local.is_empty())
}
