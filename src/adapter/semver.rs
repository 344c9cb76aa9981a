//! SemVer adapter backed by the `semver` crate
//!
//! Prerelease identifiers are accepted only when they fit `label [number]`:
//! - `alpha`, `beta`, `rc` map to `a`, `b`, `rc`; other alphabetic labels are lowercased
//! - `1.0.0-alpha` -> `("a", 0)`
//! - `1.0.0-beta.2` -> `("b", 2)`
//! - `1.0.0-rc3` -> `("rc", 3)`
//!
//! Anything else (`1.0.0-0.3.7`, `1.0.0-alpha.beta`, `1.0.0-x.7.z`) would lose
//! information and is rejected. Build metadata becomes `local`.

use semver::{BuildMetadata, Prerelease, Version};

use crate::adapter::traits::{AdapterError, FormatAdapter, RawFields};
use crate::adapter::types::Format;

/// Adapter for Semantic Versioning strings
pub struct SemVerAdapter;

impl SemVerAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemVerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for SemVerAdapter {
    fn format(&self) -> Format {
        Format::SemVer
    }

    fn parse(&self, input: &str) -> Result<RawFields, AdapterError> {
        let version =
            Version::parse(input).map_err(|e| AdapterError::InvalidSyntax(e.to_string()))?;

        Ok(RawFields {
            release: vec![version.major, version.minor, version.patch],
            prerelease: map_prerelease(&version.pre)?,
            postrelease: None,
            devrelease: None,
            local: map_build(&version.build),
        })
    }
}

fn map_prerelease(pre: &Prerelease) -> Result<Option<(String, u64)>, AdapterError> {
    if pre.is_empty() {
        return Ok(None);
    }

    let unrepresentable = || AdapterError::Unrepresentable(format!("prerelease '{}'", pre));

    let (label, number) = match pre.as_str().split('.').collect::<Vec<_>>().as_slice() {
        [single] => split_trailing_number(*single).ok_or_else(unrepresentable)?,
        [label, number] => {
            let number = number.parse::<u64>().map_err(|_| unrepresentable())?;
            (*label, Some(number))
        }
        _ => return Err(unrepresentable()),
    };

    if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(unrepresentable());
    }

    let label = label.to_ascii_lowercase();
    let label = match label.as_str() {
        "alpha" => "a".to_string(),
        "beta" => "b".to_string(),
        _ => label,
    };

    Ok(Some((label, number.unwrap_or(0))))
}

/// Split `rc3` into `("rc", Some(3))` and `alpha` into `("alpha", None)`.
fn split_trailing_number(identifier: &str) -> Option<(&str, Option<u64>)> {
    let digits_at = identifier
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(identifier.len());
    let (label, digits) = identifier.split_at(digits_at);

    if digits.is_empty() {
        return Some((label, None));
    }
    digits.parse::<u64>().ok().map(|n| (label, Some(n)))
}

fn map_build(build: &BuildMetadata) -> Option<String> {
    if build.is_empty() {
        None
    } else {
        Some(build.as_str().to_string())
    }
}
