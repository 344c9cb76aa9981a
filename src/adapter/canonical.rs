//! Canonical Verple string adapter
//!
//! ```text
//! version    = release [ "-" prerelease ] [ ".post" postnum ] [ ".dev" devnum ] [ "+" local ]
//! release    = integer *( "." integer )
//! prerelease = label [ number ]        ; "a1", "rc2", "b" (number defaults to 0)
//! ```
//!
//! Integers carry no leading zeros, matching what the canonical renderer emits.

use regex::Regex;

use crate::adapter::traits::{AdapterError, FormatAdapter, RawFields};
use crate::adapter::types::Format;

/// Adapter for the canonical string grammar
pub struct CanonicalAdapter {
    canonical_re: Regex,
}

impl CanonicalAdapter {
    pub fn new() -> Self {
        Self {
            canonical_re: Regex::new(
                r"(?x)
                ^
                (?P<release>(?:0|[1-9][0-9]*)(?:\.(?:0|[1-9][0-9]*))*)
                (?:-(?P<label>[a-z]+)(?P<prenum>0|[1-9][0-9]*)?)?
                (?:\.post(?P<post>0|[1-9][0-9]*))?
                (?:\.dev(?P<dev>0|[1-9][0-9]*))?
                (?:\+(?P<local>(?s:.+)))?
                $",
            )
            .unwrap(),
        }
    }
}

impl Default for CanonicalAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for CanonicalAdapter {
    fn format(&self) -> Format {
        Format::Canonical
    }

    fn parse(&self, input: &str) -> Result<RawFields, AdapterError> {
        let caps = self.canonical_re.captures(input).ok_or_else(|| {
            AdapterError::InvalidSyntax(format!("'{}' is not a canonical version", input))
        })?;

        let release = caps["release"]
            .split('.')
            .map(parse_number)
            .collect::<Result<Vec<_>, _>>()?;

        let prerelease = match caps.name("label") {
            Some(label) => {
                let number = caps
                    .name("prenum")
                    .map(|m| parse_number(m.as_str()))
                    .transpose()?
                    .unwrap_or(0);
                Some((label.as_str().to_string(), number))
            }
            None => None,
        };

        let optional_number = |name: &str| {
            caps.name(name)
                .map(|m| parse_number(m.as_str()))
                .transpose()
        };

        Ok(RawFields {
            release,
            prerelease,
            postrelease: optional_number("post")?,
            devrelease: optional_number("dev")?,
            local: caps.name("local").map(|m| m.as_str().to_string()),
        })
    }
}

fn parse_number(text: &str) -> Result<u64, AdapterError> {
    text.parse::<u64>()
        .map_err(|e| AdapterError::InvalidSyntax(format!("'{}': {}", text, e)))
}
