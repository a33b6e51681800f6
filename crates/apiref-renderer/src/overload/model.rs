//! Overload descriptors and the identifiers derived from them.

use std::collections::HashMap;
use std::fmt::{self, Write};

use serde::Deserialize;

/// Prefix of every overload anchor fragment.
pub const ANCHOR_PREFIX: &str = "overload";

/// Display label of one overload within its table (`1`, `2`, `3a`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OverloadNumber(String);

impl OverloadNumber {
    /// Create a number from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as written by the author.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverloadNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for OverloadNumber {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for OverloadNumber {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for OverloadNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Earliest language standard revision an overload is available in.
///
/// Never empty: construct through [`StandardVersion::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandardVersion(String);

impl StandardVersion {
    /// Create a version marker, or `None` for blank input.
    ///
    /// ```
    /// use apiref_renderer::overload::StandardVersion;
    ///
    /// assert_eq!(StandardVersion::new(" 17 ").unwrap().as_str(), "17");
    /// assert!(StandardVersion::new("").is_none());
    /// ```
    pub fn new(version: impl AsRef<str>) -> Option<Self> {
        let version = version.as_ref().trim();
        (!version.is_empty()).then(|| Self(version.to_owned()))
    }

    /// The version text (`"17"`, `"20"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StandardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One overload of an API entry: its label, its declaration and the
/// standard it appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverloadDescriptor {
    /// Label shown in the first column and used for the anchor.
    pub number: OverloadNumber,
    /// The declaration, displayed verbatim.
    pub signature: String,
    /// Standard revision badge, if any.
    pub standard: Option<StandardVersion>,
}

impl OverloadDescriptor {
    /// Create a descriptor without a standard badge.
    pub fn new(number: impl Into<OverloadNumber>, signature: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            signature: signature.into(),
            standard: None,
        }
    }

    /// Set the standard badge. Blank input leaves the badge off.
    #[must_use]
    pub fn with_standard(mut self, standard: impl AsRef<str>) -> Self {
        self.standard = StandardVersion::new(standard);
        self
    }

    /// Anchor fragment of this overload.
    #[must_use]
    pub fn anchor(&self) -> String {
        anchor_for(&self.number)
    }
}

/// Anchor fragment for an overload number: `"overload"` followed by the number.
///
/// External links target these fragments, so the rule never changes. Integer
/// labels map bit-for-bit (`4` gives `overload4`). Whitespace and `%` in
/// free-form labels are percent-encoded byte by byte, which keeps the id
/// valid and keeps distinct labels on distinct anchors.
///
/// ```
/// use apiref_renderer::overload::{OverloadNumber, anchor_for};
///
/// assert_eq!(anchor_for(&OverloadNumber::from(4u32)), "overload4");
/// assert_eq!(anchor_for(&OverloadNumber::from("2 b")), "overload2%20b");
/// assert_eq!(anchor_for(&OverloadNumber::from("2-b")), "overload2-b");
/// ```
pub fn anchor_for(number: &OverloadNumber) -> String {
    let mut anchor = String::with_capacity(ANCHOR_PREFIX.len() + number.as_str().len());
    anchor.push_str(ANCHOR_PREFIX);
    for c in number.as_str().chars() {
        if c.is_whitespace() || c == '%' {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                write!(anchor, "%{byte:02X}").unwrap();
            }
        } else {
            anchor.push(c);
        }
    }
    anchor
}

/// Badge text for a standard revision: `since C++17`.
pub fn badge_text(standard: &StandardVersion) -> String {
    format!("since C++{standard}")
}

/// Numbers that appear more than once, in order of first repetition.
///
/// The renderer never checks uniqueness; table assemblers use this to warn
/// about colliding anchors.
pub fn duplicate_numbers(descriptors: &[OverloadDescriptor]) -> Vec<OverloadNumber> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for descriptor in descriptors {
        let count = seen.entry(descriptor.anchor()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(descriptor.number.clone());
        }
    }

    duplicates
}

/// A scalar that authors may write as a TOML integer or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Label {
    Int(u64),
    Text(String),
}

impl Label {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// One `[[overload]]` entry of an overload list file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct OverloadEntry {
    pub(crate) num: Option<Label>,
    #[serde(default)]
    pub(crate) code: String,
    pub(crate) standard: Option<Label>,
}

/// An overload list file: `[[overload]]` tables in display order.
#[derive(Debug, Deserialize)]
pub(crate) struct OverloadFile {
    #[serde(default)]
    pub(crate) overload: Vec<OverloadEntry>,
}

impl OverloadFile {
    /// Convert entries to descriptors. A missing `num` gives an empty label.
    pub(crate) fn into_descriptors(self) -> Vec<OverloadDescriptor> {
        self.overload
            .into_iter()
            .map(|entry| OverloadDescriptor {
                number: entry
                    .num
                    .map(|n| OverloadNumber::new(n.into_string()))
                    .unwrap_or_default(),
                signature: entry.code,
                standard: entry
                    .standard
                    .and_then(|s| StandardVersion::new(s.into_string())),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_anchor_is_prefix_plus_number() {
        assert_eq!(anchor_for(&OverloadNumber::from(1u32)), "overload1");
        assert_eq!(anchor_for(&OverloadNumber::from("12")), "overload12");
    }

    #[test]
    fn test_anchor_is_deterministic() {
        let number = OverloadNumber::from(7u32);
        assert_eq!(anchor_for(&number), anchor_for(&number.clone()));
    }

    #[test]
    fn test_distinct_numbers_give_distinct_anchors() {
        let anchors: Vec<String> = (1..=20u32)
            .map(|n| anchor_for(&OverloadNumber::from(n)))
            .collect();
        let mut unique = anchors.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn test_free_form_labels_keep_distinct_anchors() {
        let labels = ["2 b", "2-b", "2%20b", "2\tb", "2b"];
        let anchors: Vec<String> = labels
            .iter()
            .map(|&label| anchor_for(&OverloadNumber::from(label)))
            .collect();

        assert_eq!(
            anchors,
            vec![
                "overload2%20b",
                "overload2-b",
                "overload2%2520b",
                "overload2%09b",
                "overload2b",
            ]
        );
    }

    #[test]
    fn test_empty_number_anchor() {
        assert_eq!(anchor_for(&OverloadNumber::default()), "overload");
    }

    #[test]
    fn test_badge_text() {
        let standard = StandardVersion::new("17").unwrap();
        assert_eq!(badge_text(&standard), "since C++17");
    }

    #[test]
    fn test_blank_standard_is_absent() {
        assert!(StandardVersion::new("   ").is_none());
        let descriptor = OverloadDescriptor::new(1u32, "f();").with_standard("");
        assert_eq!(descriptor.standard, None);
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor =
            OverloadDescriptor::new(4u32, "basic_fixed_string(const basic_fixed_string&) = default;")
                .with_standard("17");
        assert_eq!(descriptor.number.as_str(), "4");
        assert_eq!(descriptor.anchor(), "overload4");
        assert_eq!(descriptor.standard, StandardVersion::new("17"));
    }

    #[test]
    fn test_duplicate_numbers() {
        let descriptors = vec![
            OverloadDescriptor::new(1u32, "a"),
            OverloadDescriptor::new(2u32, "b"),
            OverloadDescriptor::new(1u32, "c"),
            OverloadDescriptor::new(1u32, "d"),
            OverloadDescriptor::new(2u32, "e"),
        ];
        assert_eq!(
            duplicate_numbers(&descriptors),
            vec![OverloadNumber::from(1u32), OverloadNumber::from(2u32)]
        );
        assert!(duplicate_numbers(&descriptors[..2]).is_empty());
    }

    #[test]
    fn test_overload_file_entries() {
        let file: OverloadFile = toml::from_str(
            r#"
[[overload]]
num = 1
code = "constexpr basic_fixed_string() noexcept;"

[[overload]]
code = """
template <size_t M>
constexpr basic_fixed_string(const value_type (&array)[M]) noexcept;"""
standard = 17

[[overload]]
num = "3a"
code = "basic_fixed_string(const basic_fixed_string&) = default;"
standard = "20"
"#,
        )
        .unwrap();

        let descriptors = file.into_descriptors();
        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].number.as_str(), "1");
        assert_eq!(descriptors[0].standard, None);
        assert_eq!(descriptors[1].number.as_str(), "");
        assert!(descriptors[1].signature.contains('\n'));
        assert_eq!(descriptors[1].standard, StandardVersion::new("17"));
        assert_eq!(descriptors[2].number.as_str(), "3a");
        assert_eq!(descriptors[2].standard, StandardVersion::new("20"));
    }

    #[test]
    fn test_overload_file_rejects_unknown_keys() {
        let result: Result<OverloadFile, _> = toml::from_str("[[overload]]\nnumber = 1\n");
        assert!(result.is_err());
    }
}
