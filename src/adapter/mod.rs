//! Format adapters: one per source grammar
//!
//! Each adapter either rejects a string or returns a [`RawFields`] tuple.
//! The PEP 440 and SemVer grammars are delegated to `pep508_rs::pep440_rs`
//! and `semver`; CalVer and the canonical form are small regex grammars.

pub mod calver;
pub mod canonical;
pub mod pep440;
pub mod semver;
pub mod traits;
pub mod types;

pub use calver::CalVerAdapter;
pub use canonical::CanonicalAdapter;
pub use pep440::Pep440Adapter;
pub use self::semver::SemVerAdapter;
pub use traits::{AdapterError, FormatAdapter, RawFields};
pub use types::Format;

/// Build the adapter for a format
pub fn adapter_for(format: Format) -> Box<dyn FormatAdapter> {
    match format {
        Format::Pep440 => Box::new(Pep440Adapter::new()),
        Format::SemVer => Box::new(SemVerAdapter::new()),
        Format::CalVer => Box::new(CalVerAdapter::new()),
        Format::Canonical => Box::new(CanonicalAdapter::new()),
    }
}
