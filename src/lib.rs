//! Strict, conservative universal version handling
//!
//! Version strings written in PEP 440, SemVer, CalVer or the canonical
//! Verple form are normalized into one [`Version`] model that offers:
//!
//! - exact equality and hashing over the semantic fields only
//! - ordering that refuses to compare differing local metadata
//! - a canonical string that round-trips losslessly
//! - a versioned JSON-LD document that also preserves provenance
//!
//! ```
//! use std::cmp::Ordering;
//! use verple::Version;
//!
//! let a = Version::parse("1.2.3a1.post2.dev3+build99").unwrap();
//! let b = Version::parse("1.2.4+build99").unwrap();
//!
//! assert_eq!(a.to_canonical_string(), "1.2.3-a1.post2.dev3+build99");
//! assert_eq!(a.compare(&b), Ok(Ordering::Less));
//! assert!(Version::parse("1.2.4").unwrap().compare(&b).is_err());
//! ```

pub mod adapter;
pub mod config;
pub mod version;

pub use adapter::Format;
pub use version::{
    Detector, Error, OrderingError, ParseError, Prerelease, Protocol, ProtocolError, Provenance,
    SemanticFields, Version,
};
