//! Format detection and dispatch
//!
//! Without a hint, adapters are tried in [`Format::PRIORITY`] order and the
//! first one that accepts the string wins. Ambiguous strings such as `1.2.3`
//! (valid in every grammar) therefore always come out as PEP 440. No attempt
//! is made to disambiguate further.
//!
//! With a hint, only that adapter runs and its failure is final.

use std::sync::LazyLock;

use tracing::debug;

use crate::adapter::{self, Format, FormatAdapter, RawFields};
use crate::config::FormatsConfig;
use crate::version::error::ParseError;
use crate::version::normalizer::normalize;
use crate::version::value::Version;

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::new);

/// Shared detector with every adapter enabled
pub fn default_detector() -> &'static Detector {
    &DEFAULT_DETECTOR
}

/// Ordered set of format adapters
pub struct Detector {
    adapters: Vec<Box<dyn FormatAdapter>>,
}

impl Detector {
    /// Detector with all formats in priority order
    pub fn new() -> Self {
        Self::with_adapters(Format::PRIORITY.into_iter().map(adapter::adapter_for).collect())
    }

    /// Detector over the given adapters; their order is the detection order
    pub fn with_adapters(adapters: Vec<Box<dyn FormatAdapter>>) -> Self {
        Self { adapters }
    }

    /// Detector with the formats enabled in `config`, keeping priority order
    pub fn from_config(config: &FormatsConfig) -> Self {
        Self::with_adapters(
            Format::PRIORITY
                .into_iter()
                .filter(|format| config.is_enabled(*format))
                .map(adapter::adapter_for)
                .collect(),
        )
    }

    /// Formats this detector will try, in order
    pub fn formats(&self) -> Vec<Format> {
        self.adapters.iter().map(|a| a.format()).collect()
    }

    /// Run the adapters and return the first accepted parse with its format
    pub fn detect_and_parse(
        &self,
        input: &str,
        hint: Option<Format>,
    ) -> Result<(RawFields, Format), ParseError> {
        if let Some(format) = hint {
            let adapter = self
                .adapters
                .iter()
                .find(|a| a.format() == format)
                .ok_or_else(|| ParseError::FormatDisabled {
                    input: input.to_string(),
                    format,
                })?;

            return adapter
                .parse(input)
                .map(|raw| (raw, format))
                .map_err(|source| {
                    debug!("{} adapter rejected '{}': {}", format, input, source);
                    ParseError::FormatFailed {
                        input: input.to_string(),
                        format,
                        source,
                    }
                });
        }

        let mut attempts = Vec::with_capacity(self.adapters.len());
        for adapter in &self.adapters {
            let format = adapter.format();
            match adapter.parse(input) {
                Ok(raw) => {
                    debug!("Detected '{}' as {}", input, format);
                    return Ok((raw, format));
                }
                Err(e) => {
                    debug!("{} adapter rejected '{}': {}", format, input, e);
                    attempts.push((format, e));
                }
            }
        }

        Err(ParseError::AllFormatsFailed {
            input: input.to_string(),
            attempts,
        })
    }

    /// Detect, parse and normalize `input` into a [`Version`]
    pub fn parse(&self, input: &str, hint: Option<Format>) -> Result<Version, ParseError> {
        let (raw, format) = self.detect_and_parse(input, hint)?;
        normalize(raw, format, input)
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}
