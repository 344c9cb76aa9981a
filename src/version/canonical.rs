//! Canonical string codec
//!
//! Renders present fields only, in the fixed order
//! release -> prerelease -> post -> dev -> local:
//!
//! ```text
//! 1.2.3-a1.post2.dev3+build99
//! ```
//!
//! Parsing goes through the canonical adapter, so the round trip
//! `from_canonical_string(&to_canonical_string(v)) == v` holds for every
//! value. Provenance of the re-parsed value points at the canonical string.

use std::fmt;
use std::str::FromStr;

use crate::adapter::Format;
use crate::version::detector::default_detector;
use crate::version::error::ParseError;
use crate::version::value::Version;

/// Render the canonical string of `version`
pub fn to_canonical_string(version: &Version) -> String {
    let mut out = version
        .release()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");

    if let Some(pre) = version.prerelease() {
        out.push_str(&format!("-{}{}", pre.label(), pre.number()));
    }
    if let Some(post) = version.postrelease() {
        out.push_str(&format!(".post{}", post));
    }
    if let Some(dev) = version.devrelease() {
        out.push_str(&format!(".dev{}", dev));
    }
    if let Some(local) = version.local() {
        out.push('+');
        out.push_str(local);
    }
    out
}

/// Parse a canonical string, rejecting anything outside the grammar
pub fn from_canonical_string(input: &str) -> Result<Version, ParseError> {
    default_detector().parse(input, Some(Format::Canonical))
}

impl Version {
    /// Canonical string form, see [`to_canonical_string`]
    pub fn to_canonical_string(&self) -> String {
        to_canonical_string(self)
    }

    /// Parse `input` with the canonical grammar only
    pub fn from_canonical_string(input: &str) -> Result<Version, ParseError> {
        from_canonical_string(input)
    }

    /// Parse `input` trying every format in priority order
    pub fn parse(input: &str) -> Result<Version, ParseError> {
        default_detector().parse(input, None)
    }

    /// Parse `input` with one format only
    pub fn parse_as(input: &str, format: Format) -> Result<Version, ParseError> {
        default_detector().parse(input, Some(format))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_canonical_string(self))
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}
