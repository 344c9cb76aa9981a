//! CalVer adapter
//!
//! Accepted shapes (`sep` is one of `.`, `-`, `_`):
//! - `YYYY sep MM` / `YY sep MM` (e.g. `24.04`, `2024-01`)
//! - `YYYY sep MM sep DD` with the same `sep` twice (e.g. `2024.01.15`, `2024-01-15`)
//! - either of the above followed by `.MICRO` (e.g. `2024.01.15.2`, `2024-01.7`)
//! - optional `+local` suffix
//!
//! The group after the month is a day only when it repeats the first
//! separator and names a real calendar date; otherwise a `.`-prefixed group
//! is the micro counter (`2024.02.30` is `[2024, 2, 30]` with micro 30).
//! Components keep the value that was written: `24.04` stays `[24, 4]`.

use chrono::NaiveDate;
use regex::Regex;

use crate::adapter::traits::{AdapterError, FormatAdapter, RawFields};
use crate::adapter::types::Format;

/// Adapter for calendar version strings
pub struct CalVerAdapter {
    calver_re: Regex,
    segment_re: Regex,
}

impl CalVerAdapter {
    pub fn new() -> Self {
        Self {
            // year, separator, month, trailing numeric segments, [+local]
            calver_re: Regex::new(
                r"^(\d{4}|\d{2})([.\-_])(\d{1,2})((?:[.\-_]\d+)*)(?:\+([0-9A-Za-z][0-9A-Za-z.\-_]*))?$",
            )
            .unwrap(),
            segment_re: Regex::new(r"([.\-_])(\d+)").unwrap(),
        }
    }
}

impl Default for CalVerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for CalVerAdapter {
    fn format(&self) -> Format {
        Format::CalVer
    }

    fn parse(&self, input: &str) -> Result<RawFields, AdapterError> {
        let caps = self
            .calver_re
            .captures(input)
            .ok_or_else(|| AdapterError::InvalidSyntax(format!("'{}' is not a CalVer", input)))?;

        let year_text = &caps[1];
        let separator = &caps[2];
        let year = parse_component(year_text)?;
        let month = parse_component(&caps[3])?;
        if !(1..=12).contains(&month) {
            return Err(AdapterError::InvalidSyntax(format!(
                "month {} out of range",
                month
            )));
        }

        let segments: Vec<(&str, &str)> = self
            .segment_re
            .captures_iter(&caps[4])
            .filter_map(|seg| Some((seg.get(1)?.as_str(), seg.get(2)?.as_str())))
            .collect();

        // two-digit years are read as 20YY for the calendar check only
        let calendar_year = if year_text.len() == 2 { 2000 + year } else { year };
        let is_day = |sep: &str, digits: &str| -> Result<bool, AdapterError> {
            if sep != separator || digits.len() > 2 {
                return Ok(false);
            }
            let day = parse_component(digits)?;
            Ok(is_calendar_date(calendar_year, month, day))
        };

        let mut release = vec![year, month];
        match segments.as_slice() {
            [] => {}
            [(sep, digits)] if is_day(sep, digits)? => release.push(parse_component(digits)?),
            [(".", micro)] => release.push(parse_component(micro)?),
            [(sep, day), (".", micro)] if is_day(sep, day)? => {
                release.push(parse_component(day)?);
                release.push(parse_component(micro)?);
            }
            _ => {
                return Err(AdapterError::InvalidSyntax(format!(
                    "'{}' has no valid day or micro after the month",
                    input
                )));
            }
        }

        Ok(RawFields {
            release,
            prerelease: None,
            postrelease: None,
            devrelease: None,
            local: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }
}

fn is_calendar_date(year: u64, month: u64, day: u64) -> bool {
    i32::try_from(year)
        .ok()
        .zip(u32::try_from(month).ok())
        .zip(u32::try_from(day).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .is_some()
}

fn parse_component(text: &str) -> Result<u64, AdapterError> {
    text.parse::<u64>()
        .map_err(|e| AdapterError::InvalidSyntax(format!("'{}': {}", text, e)))
}
