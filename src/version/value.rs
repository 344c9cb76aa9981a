//! The Version Value and its parts
//!
//! A [`Version`] is split into two records:
//! - [`SemanticFields`]: release, prerelease, postrelease, devrelease, local.
//!   This is the whole identity used by equality, hashing and ordering.
//! - [`Provenance`]: the original input and the format that produced it.
//!   Carried into the semantic document, never compared.
//!
//! Both records are immutable once built; accessors hand out borrows only.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::adapter::Format;

/// A field value violating the model invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidField(pub String);

/// Prerelease marker: lowercase alphabetic label plus stage number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease {
    label: String,
    number: u64,
}

impl Prerelease {
    pub fn new(label: impl Into<String>, number: u64) -> Result<Self, InvalidField> {
        let label = label.into();
        if label.is_empty() || !label.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(InvalidField(format!(
                "prerelease label '{}' must be lowercase letters",
                label
            )));
        }
        Ok(Self { label, number })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

/// The semantic identity of a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticFields {
    release: Vec<u64>,
    prerelease: Option<Prerelease>,
    postrelease: Option<u64>,
    devrelease: Option<u64>,
    local: Option<String>,
}

impl SemanticFields {
    pub fn new(
        release: Vec<u64>,
        prerelease: Option<Prerelease>,
        postrelease: Option<u64>,
        devrelease: Option<u64>,
        local: Option<String>,
    ) -> Result<Self, InvalidField> {
        if release.is_empty() {
            return Err(InvalidField("release must have at least one component".to_string()));
        }
        if local.as_deref() == Some("") {
            return Err(InvalidField("local metadata must not be empty".to_string()));
        }
        Ok(Self {
            release,
            prerelease,
            postrelease,
            devrelease,
            local,
        })
    }

    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.prerelease.as_ref()
    }

    pub fn postrelease(&self) -> Option<u64> {
        self.postrelease
    }

    pub fn devrelease(&self) -> Option<u64> {
        self.devrelease
    }

    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }
}

/// Where a version came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    source_input: String,
    source_format: Format,
}

impl Provenance {
    pub fn new(source_input: impl Into<String>, source_format: Format) -> Self {
        Self {
            source_input: source_input.into(),
            source_format,
        }
    }

    pub fn source_input(&self) -> &str {
        &self.source_input
    }

    pub fn source_format(&self) -> Format {
        self.source_format
    }
}

/// A normalized version with its provenance attached
///
/// Equality and hashing look at [`SemanticFields`] only. Ordering is
/// partial and fallible, see [`Version::compare`]; there is deliberately no
/// `PartialOrd` impl.
#[derive(Debug, Clone)]
pub struct Version {
    fields: SemanticFields,
    provenance: Provenance,
}

impl Version {
    pub fn new(fields: SemanticFields, provenance: Provenance) -> Self {
        Self { fields, provenance }
    }

    pub fn fields(&self) -> &SemanticFields {
        &self.fields
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn release(&self) -> &[u64] {
        self.fields.release()
    }

    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.fields.prerelease()
    }

    pub fn postrelease(&self) -> Option<u64> {
        self.fields.postrelease()
    }

    pub fn devrelease(&self) -> Option<u64> {
        self.fields.devrelease()
    }

    pub fn local(&self) -> Option<&str> {
        self.fields.local()
    }

    pub fn source_input(&self) -> &str {
        self.provenance.source_input()
    }

    pub fn source_format(&self) -> Format {
        self.provenance.source_format()
    }

    /// Hash of the semantic fields, stable for the lifetime of the process
    pub fn semantic_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}
