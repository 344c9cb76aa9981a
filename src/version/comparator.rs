//! Conservative ordering
//!
//! Two versions are only ordered when their local metadata is identical
//! (both absent, or the same string). Otherwise the comparison is refused
//! with [`OrderingError::LocalMismatch`].
//!
//! When permitted, the key is compared in this order:
//! 1. release, element-wise, shorter side padded with zeros
//! 2. prerelease: any marker sorts before no marker; label (lexical) then number
//! 3. postrelease: absent sorts before any value
//! 4. devrelease: any value sorts before absent

use std::cmp::Ordering;

use crate::version::error::OrderingError;
use crate::version::value::{SemanticFields, Version};

/// Position on the prerelease axis
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Stage<'a> {
    Pre(&'a str, u64),
    Final,
}

/// Position on the devrelease axis
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Snapshot {
    Dev(u64),
    Finished,
}

/// Compare two versions, refusing when their local metadata differs
pub fn compare(a: &Version, b: &Version) -> Result<Ordering, OrderingError> {
    ensure_same_local(a, b)?;
    Ok(compare_fields(a.fields(), b.fields()))
}

/// Sort versions ascending; nothing is reordered if any pair is incomparable
pub fn sort(versions: &mut [Version]) -> Result<(), OrderingError> {
    if let Some((first, rest)) = versions.split_first() {
        for other in rest {
            ensure_same_local(first, other)?;
        }
    }
    versions.sort_by(|a, b| compare_fields(a.fields(), b.fields()));
    Ok(())
}

/// Greatest version of the slice, or `None` when it is empty
///
/// On ties the last equivalent version is returned.
pub fn max(versions: &[Version]) -> Result<Option<&Version>, OrderingError> {
    if let Some((first, rest)) = versions.split_first() {
        for other in rest {
            ensure_same_local(first, other)?;
        }
    }
    Ok(versions
        .iter()
        .max_by(|a, b| compare_fields(a.fields(), b.fields())))
}

fn ensure_same_local(a: &Version, b: &Version) -> Result<(), OrderingError> {
    if a.local() == b.local() {
        Ok(())
    } else {
        Err(OrderingError::LocalMismatch {
            left: a.to_string(),
            right: b.to_string(),
        })
    }
}

fn compare_fields(a: &SemanticFields, b: &SemanticFields) -> Ordering {
    compare_release(a.release(), b.release())
        .then_with(|| stage(a).cmp(&stage(b)))
        .then_with(|| a.postrelease().cmp(&b.postrelease()))
        .then_with(|| snapshot(a).cmp(&snapshot(b)))
}

fn compare_release(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn stage(fields: &SemanticFields) -> Stage<'_> {
    match fields.prerelease() {
        Some(pre) => Stage::Pre(pre.label(), pre.number()),
        None => Stage::Final,
    }
}

fn snapshot(fields: &SemanticFields) -> Snapshot {
    match fields.devrelease() {
        Some(dev) => Snapshot::Dev(dev),
        None => Snapshot::Finished,
    }
}

impl Version {
    /// Order `self` against `other`; see the [`comparator`](crate::version::comparator) rules
    pub fn compare(&self, other: &Version) -> Result<Ordering, OrderingError> {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Format;
    use crate::version::detector::default_detector;
    use rstest::rstest;

    fn v(input: &str) -> Version {
        default_detector().parse(input, None).unwrap()
    }

    fn canonical(input: &str) -> Version {
        default_detector()
            .parse(input, Some(Format::Canonical))
            .unwrap()
    }

    #[rstest]
    #[case("1.2.3", "1.2.4")]
    #[case("1.2.3", "1.3")]
    #[case("1.9", "1.10")]
    #[case("1.2.3a1", "1.2.3a2")]
    #[case("1.2.3a9", "1.2.3b1")]
    #[case("1.2.3b1", "1.2.3rc1")]
    #[case("1.2.3rc1", "1.2.3")]
    #[case("1.2.3a1.post1", "1.2.3a1.post2")]
    #[case("1.2.3a1.dev1", "1.2.3a1.dev2")]
    #[case("1.2.3.dev1", "1.2.3")]
    #[case("1.2.3", "1.2.3.post0")]
    #[case("1.2.3.post1.dev1", "1.2.3.post1")]
    #[case("1.2.3a1.post2.dev3+build99", "1.2.4+build99")]
    fn compare_orders_ascending(#[case] lower: &str, #[case] higher: &str) {
        let (lower, higher) = (v(lower), v(higher));
        assert_eq!(lower.compare(&higher), Ok(Ordering::Less));
        assert_eq!(higher.compare(&lower), Ok(Ordering::Greater));
    }

    #[rstest]
    #[case("1.2.4", "1.2.4+build1")]
    #[case("1.2.3+build1", "1.2.3+build2")]
    #[case("1.2.3a1+abc", "1.2.3a1+xyz")]
    fn compare_refuses_differing_local(#[case] a: &str, #[case] b: &str) {
        let (a, b) = (v(a), v(b));
        assert!(matches!(
            a.compare(&b),
            Err(OrderingError::LocalMismatch { .. })
        ));
        assert!(matches!(
            b.compare(&a),
            Err(OrderingError::LocalMismatch { .. })
        ));
    }

    #[test]
    fn padded_release_compares_equal_but_values_differ() {
        let short = v("1.2");
        let long = v("1.2.0");

        assert_eq!(short.compare(&long), Ok(Ordering::Equal));
        assert_ne!(short, long);
    }

    #[test]
    fn equal_values_compare_equal() {
        let a = v("1.2.3a1.post2.dev3+build99");
        let b = canonical("1.2.3-a1.post2.dev3+build99");

        assert_eq!(a, b);
        assert_eq!(a.compare(&b), Ok(Ordering::Equal));
    }

    #[test]
    fn prerelease_labels_compare_lexically() {
        let alpha = canonical("1.0.0-alpha1");
        let beta = canonical("1.0.0-b0");

        assert_eq!(alpha.compare(&beta), Ok(Ordering::Less));
    }

    #[test]
    fn sort_orders_all_values() {
        let mut versions = vec![v("1.2.3"), v("1.2.3.dev1"), v("1.2.3rc1"), v("1.0")];

        sort(&mut versions).unwrap();

        let rendered: Vec<String> = versions.iter().map(Version::to_string).collect();
        assert_eq!(rendered, vec!["1.0", "1.2.3-rc1", "1.2.3.dev1", "1.2.3"]);
    }

    #[test]
    fn sort_refuses_mixed_local_without_reordering() {
        let mut versions = vec![v("2.0"), v("1.0"), v("1.5+local")];

        let result = sort(&mut versions);

        assert!(result.is_err());
        assert_eq!(versions[0], v("2.0"));
        assert_eq!(versions[1], v("1.0"));
    }

    #[test]
    fn max_returns_greatest() {
        let versions = vec![v("1.0+x"), v("3.0+x"), v("2.0+x")];

        assert_eq!(max(&versions).unwrap(), Some(&v("3.0+x")));
        assert_eq!(max(&[]).unwrap(), None);
    }

    #[test]
    fn max_refuses_mixed_local() {
        let versions = vec![v("1.0"), v("3.0+x")];

        assert!(max(&versions).is_err());
    }
}
