//! The parsed version value: canonical rendering and precedence comparison.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::parser::{parse, ParseError};

/// A parsed semantic version.
///
/// `pre_release` and `build_data` distinguish "no section" (`None`) from a
/// present section, which is nonempty by construction. Identifiers keep their
/// literal text, so a numeric-looking identifier such as `"01"` round-trips
/// unchanged; only `major`/`minor`/`patch` are true integers whose leading
/// zeros collapse on parsing.
///
/// Equality and ordering follow SemVer precedence: build metadata is ignored
/// and numeric pre-release identifiers compare by value, so `==`, `cmp`, and
/// the named predicates always agree. `Hash` is deliberately not implemented
/// (`"01"` and `"1"` are equal identifiers but distinct strings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<Vec<String>>,
    pub build_data: Option<Vec<String>>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_data: None,
        }
    }

    /// Attach pre-release identifiers. An empty list means no section.
    pub fn with_pre_release(mut self, idents: Vec<String>) -> Self {
        self.pre_release = if idents.is_empty() { None } else { Some(idents) };
        self
    }

    /// Attach build metadata identifiers. An empty list means no section.
    pub fn with_build_data(mut self, idents: Vec<String>) -> Self {
        self.build_data = if idents.is_empty() { None } else { Some(idents) };
        self
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Total-order comparison per SemVer precedence.
    ///
    /// Major, minor, and patch compare numerically; on a tie the pre-release
    /// sections decide. Build metadata is never consulted.
    pub fn compare(&self, target: &Version) -> Ordering {
        match self.major.cmp(&target.major) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.minor.cmp(&target.minor) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.patch.cmp(&target.patch) {
            Ordering::Equal => {}
            ord => return ord,
        }
        self.compare_pre_release(target)
    }

    // A release outranks any pre-release of the same core version; otherwise
    // identifiers decide position by position, and a strict prefix is less.
    fn compare_pre_release(&self, target: &Version) -> Ordering {
        match (&self.pre_release, &target.pre_release) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(ours), Some(theirs)) => {
                for (a, b) in ours.iter().zip(theirs.iter()) {
                    match compare_idents(a, b) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                }
                ours.len().cmp(&theirs.len())
            }
        }
    }

    pub fn less_than(&self, target: &Version) -> bool {
        self.compare(target) == Ordering::Less
    }

    pub fn less_or_equal(&self, target: &Version) -> bool {
        self.compare(target) != Ordering::Greater
    }

    pub fn greater_than(&self, target: &Version) -> bool {
        self.compare(target) == Ordering::Greater
    }

    pub fn greater_or_equal(&self, target: &Version) -> bool {
        self.compare(target) != Ordering::Less
    }

    pub fn equals(&self, target: &Version) -> bool {
        self.compare(target) == Ordering::Equal
    }
}

/// Identifier precedence: numeric identifiers compare by integer value and
/// always rank below alphanumeric ones; alphanumerics compare byte-wise.
fn compare_idents(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_numeric(ident: &str) -> bool {
    !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_digit())
}

/// Integer comparison over raw digit strings, so identifiers of any length
/// compare correctly: leading zeros are insignificant, then a longer digit
/// string wins, then byte order decides.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl fmt::Display for Version {
    /// Canonical rendering: no `v` prefix, sections only when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = &self.build_data {
            write!(f, "+{}", build.join("."))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_core_only() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_display_with_sections() {
        let version = Version::new(1, 0, 0)
            .with_pre_release(vec!["rc".into(), "1".into()])
            .with_build_data(vec!["sha".into(), "5114f85".into()]);
        assert_eq!(version.to_string(), "1.0.0-rc.1+sha.5114f85");
    }

    #[test]
    fn test_empty_section_lists_mean_absent() {
        let version = Version::new(1, 0, 0)
            .with_pre_release(Vec::new())
            .with_build_data(Vec::new());
        assert_eq!(version.pre_release, None);
        assert_eq!(version.build_data, None);
        assert_eq!(version.to_string(), "1.0.0");
    }

    #[test]
    fn test_core_fields_decide_first() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 1, 0) > Version::new(1, 0, 9));
        assert!(Version::new(1, 0, 1) > Version::new(1, 0, 0));
    }

    #[test]
    fn test_release_outranks_pre_release() {
        let release = Version::new(1, 0, 0);
        let rc = Version::new(1, 0, 0).with_pre_release(vec!["rc".into(), "1".into()]);
        assert!(rc.less_than(&release));
        assert!(release.greater_than(&rc));
    }

    #[test]
    fn test_numeric_identifiers_compare_by_value() {
        let two = Version::new(1, 0, 0).with_pre_release(vec!["beta".into(), "2".into()]);
        let eleven = Version::new(1, 0, 0).with_pre_release(vec!["beta".into(), "11".into()]);
        assert!(two.less_than(&eleven));
    }

    #[test]
    fn test_numeric_below_alphanumeric() {
        let numeric = Version::new(1, 0, 0).with_pre_release(vec!["alpha".into(), "1".into()]);
        let alpha = Version::new(1, 0, 0).with_pre_release(vec!["alpha".into(), "beta".into()]);
        assert!(numeric.less_than(&alpha));
    }

    #[test]
    fn test_strict_prefix_is_less() {
        let short = Version::new(1, 0, 0).with_pre_release(vec!["alpha".into()]);
        let long = Version::new(1, 0, 0).with_pre_release(vec!["alpha".into(), "1".into()]);
        assert!(short.less_than(&long));
    }

    #[test]
    fn test_build_data_ignored_by_every_comparison() {
        let a = Version::new(0, 1, 1).with_build_data(vec!["a".into()]);
        let b = Version::new(0, 1, 1).with_build_data(vec!["b".into()]);
        assert!(a.equals(&b));
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(a, b);
        assert!(a.less_or_equal(&b) && a.greater_or_equal(&b));
    }

    #[test]
    fn test_numeric_identifier_leading_zeros_insignificant() {
        let padded = Version::new(1, 0, 0).with_pre_release(vec!["01".into()]);
        let plain = Version::new(1, 0, 0).with_pre_release(vec!["1".into()]);
        assert!(padded.equals(&plain));
        // The literal text still round-trips.
        assert_eq!(padded.to_string(), "1.0.0-01");
    }

    #[test]
    fn test_huge_numeric_identifiers_do_not_overflow() {
        let small = Version::new(1, 0, 0).with_pre_release(vec!["99999999999999999999998".into()]);
        let big = Version::new(1, 0, 0).with_pre_release(vec!["99999999999999999999999".into()]);
        assert!(small.less_than(&big));
    }

    #[test]
    fn test_hyphen_identifier_is_alphanumeric() {
        // "1-2" contains a hyphen, so it is not a numeric identifier.
        let hyphenated = Version::new(1, 0, 0).with_pre_release(vec!["1-2".into()]);
        let numeric = Version::new(1, 0, 0).with_pre_release(vec!["999".into()]);
        assert!(numeric.less_than(&hyphenated));
    }

    #[test]
    fn test_none_orders_below_any_version() {
        assert!(None < Some(Version::new(0, 0, 0)));
        assert!(Some(Version::new(0, 0, 1)) > None);
    }

    #[test]
    fn test_from_str_round_trip() {
        let version: Version = "1.2.3-rc.1+build.7".parse().unwrap();
        assert_eq!(version.to_string(), "1.2.3-rc.1+build.7");
    }

    #[test]
    fn test_serde_round_trip() {
        let version: Version = "1.2.3-rc.1+build.7".parse().unwrap();
        let json = serde_json::to_string(&version).unwrap();
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), version.to_string());
    }
}
