//! Format adapter trait definition

#[cfg(test)]
use mockall::automock;

use crate::adapter::types::Format;

/// Trait for turning a version string of one grammar into raw fields
///
/// Adapters are independent of each other; the detector only relies on
/// `format` and `parse`, never on adapter internals.
#[cfg_attr(test, automock)]
pub trait FormatAdapter: Send + Sync {
    /// Returns the grammar this adapter accepts
    fn format(&self) -> Format;

    /// Parse the input into raw fields, or explain why it is rejected
    fn parse(&self, input: &str) -> Result<RawFields, AdapterError>;
}

/// Field tuple produced by an adapter before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub release: Vec<u64>,
    /// Prerelease label and stage number (e.g. `("rc", 2)`)
    pub prerelease: Option<(String, u64)>,
    pub postrelease: Option<u64>,
    pub devrelease: Option<u64>,
    /// Build or local metadata, kept verbatim
    pub local: Option<String>,
}

/// Error type for adapter parse failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The input does not match the adapter's grammar
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    /// The input is valid for the grammar but cannot be expressed in the model without loss
    #[error("Unrepresentable: {0}")]
    Unrepresentable(String),
}
