//! Raw adapter fields -> Version Value
//!
//! Purely structural: numbers, release order and absent fields pass through
//! untouched. The only work done here is enforcing the model invariants.

use crate::adapter::{Format, RawFields};
use crate::version::error::ParseError;
use crate::version::value::{InvalidField, Prerelease, Provenance, SemanticFields, Version};

/// Build a [`Version`] from the fields an adapter produced for `source_input`
pub fn normalize(
    raw: RawFields,
    format: Format,
    source_input: &str,
) -> Result<Version, ParseError> {
    let fields =
        semantic_fields(raw).map_err(|InvalidField(reason)| ParseError::InvalidFields {
            input: source_input.to_string(),
            format,
            reason,
        })?;

    Ok(Version::new(fields, Provenance::new(source_input, format)))
}

fn semantic_fields(raw: RawFields) -> Result<SemanticFields, InvalidField> {
    let prerelease = raw
        .prerelease
        .map(|(label, number)| Prerelease::new(label, number))
        .transpose()?;

    SemanticFields::new(
        raw.release,
        prerelease,
        raw.postrelease,
        raw.devrelease,
        raw.local,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_fields_and_records_provenance() {
        let raw = RawFields {
            release: vec![1, 2, 3],
            prerelease: Some(("a".to_string(), 1)),
            postrelease: Some(2),
            devrelease: Some(3),
            local: Some("build99".to_string()),
        };

        let version = normalize(raw, Format::Pep440, "1.2.3a1.post2.dev3+build99").unwrap();

        assert_eq!(version.release(), &[1, 2, 3]);
        assert_eq!(version.prerelease().map(|p| (p.label(), p.number())), Some(("a", 1)));
        assert_eq!(version.postrelease(), Some(2));
        assert_eq!(version.devrelease(), Some(3));
        assert_eq!(version.local(), Some("build99"));
        assert_eq!(version.source_input(), "1.2.3a1.post2.dev3+build99");
        assert_eq!(version.source_format(), Format::Pep440);
    }

    #[test]
    fn normalize_leaves_absent_fields_absent() {
        let raw = RawFields {
            release: vec![1, 0],
            ..RawFields::default()
        };

        let version = normalize(raw, Format::CalVer, "1.0").unwrap();

        assert_eq!(version.release(), &[1, 0]);
        assert_eq!(version.prerelease(), None);
        assert_eq!(version.postrelease(), None);
        assert_eq!(version.devrelease(), None);
        assert_eq!(version.local(), None);
    }

    #[test]
    fn normalize_does_not_reorder_release() {
        let raw = RawFields {
            release: vec![3, 1, 2],
            ..RawFields::default()
        };

        let version = normalize(raw, Format::Canonical, "3.1.2").unwrap();

        assert_eq!(version.release(), &[3, 1, 2]);
    }

    #[test]
    fn normalize_rejects_invariant_violations() {
        let raw = RawFields {
            release: vec![1],
            prerelease: Some(("RC".to_string(), 1)),
            ..RawFields::default()
        };

        let err = normalize(raw, Format::SemVer, "1-RC1").unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidFields {
                format: Format::SemVer,
                ..
            }
        ));
        assert_eq!(err.input(), "1-RC1");
    }
}
