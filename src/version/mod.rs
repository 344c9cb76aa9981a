//! Version normalization, comparison and serialization
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Adapters   │────▶│  Detector   │────▶│ Normalizer  │
//! │(pep440, ...)│     │  (dispatch) │     │  (mapping)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Canonical  │◀────│   Version   │────▶│  Document   │
//! │   (string)  │     │   (value)   │     │  (JSON-LD)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ Comparator  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`value`]: the immutable [`Version`] with semantic fields and provenance
//! - [`detector`]: picks the adapter for an input string
//! - [`normalizer`]: maps adapter output into a [`Version`]
//! - [`comparator`]: conservative, fallible ordering
//! - [`canonical`]: canonical string codec
//! - [`document`]: versioned JSON-LD document codec
//! - [`error`]: error types for parsing, ordering and decoding

pub mod canonical;
pub mod comparator;
pub mod detector;
pub mod document;
pub mod error;
pub mod normalizer;
pub mod value;

pub use detector::{Detector, default_detector};
pub use document::Protocol;
pub use error::{Error, OrderingError, ParseError, ProtocolError};
pub use value::{Prerelease, Provenance, SemanticFields, Version};
