//! Job-title inflection table.
//!
//! Maps a canonical title root (a title with its trailing feminine marker
//! stripped) to its six number/gender forms. Built once at startup and shared
//! by reference; nothing mutates it afterwards.

use crate::domain::DomainError;
use serde::Deserialize;
use std::collections::HashMap;

/// Singular, dual and plural of one gender.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Forms {
    pub singular: String,
    pub dual: String,
    pub plural: String,
}

impl Forms {
    pub fn new(singular: &str, dual: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_string(),
            dual: dual.to_string(),
            plural: plural.to_string(),
        }
    }
}

/// The six agreeing forms of a word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormSet {
    pub masculine: Forms,
    pub feminine: Forms,
}

impl FormSet {
    pub fn new(masculine: Forms, feminine: Forms) -> Self {
        Self {
            masculine,
            feminine,
        }
    }

    /// "The person(s) concerned", used for the `computedVar` field.
    pub fn concerned_party() -> Self {
        Self::new(
            Forms::new("المعني", "المعنيان", "المعنيون"),
            Forms::new("المعنية", "المعنيتان", "المعنيات"),
        )
    }
}

const FEMININE_MARKER: char = 'ة';

/// Trims a job title and drops one trailing feminine marker.
///
/// Purely orthographic: a masculine title that happens to end in the marker
/// is stripped too. The table keys are curated against exactly this rule.
pub fn strip_feminine_marker(title: &str) -> &str {
    let t = title.trim();
    t.strip_suffix(FEMININE_MARKER).unwrap_or(t)
}

#[derive(Debug, Clone)]
pub struct InflectionTable {
    entries: HashMap<String, FormSet>,
}

impl InflectionTable {
    /// Hand-curated judicial titles.
    pub fn standard() -> Self {
        let rows: [(&str, [&str; 6]); 9] = [
            (
                "وكيل",
                ["وكيل", "وكيلان", "وكلاء", "وكيلة", "وكيلتان", "وكيلات"],
            ),
            (
                "قاض",
                ["قاض", "قاضيان", "قضاة", "قاضية", "قاضيتان", "قاضيات"],
            ),
            (
                "قاضي",
                ["قاضي", "قاضيان", "قضاة", "قاضية", "قاضيتان", "قاضيات"],
            ),
            (
                "مستشار",
                [
                    "مستشار",
                    "مستشاران",
                    "مستشارون",
                    "مستشارة",
                    "مستشارتان",
                    "مستشارات",
                ],
            ),
            (
                "وكيل عام",
                [
                    "وكيل عام",
                    "وكيلا عام",
                    "وكلاء عامون",
                    "وكيلة عامة",
                    "وكيلتان عامتان",
                    "وكيلات عامات",
                ],
            ),
            (
                "محام عام",
                [
                    "محام عام",
                    "محاميان عامان",
                    "محامون عامون",
                    "محامية عامة",
                    "محاميتان عامتان",
                    "محاميات عامات",
                ],
            ),
            (
                "نائب الوكيل العام للملك",
                [
                    "نائب الوكيل العام للملك",
                    "نائبا الوكيل العام للملك",
                    "نواب الوكيل العام للملك",
                    "نائبة الوكيل العام للملك",
                    "نائبتا الوكيل العام للملك",
                    "نائبات الوكيل العام للملك",
                ],
            ),
            (
                "وكيل الملك",
                [
                    "وكيل الملك",
                    "وكيلا الملك",
                    "وكلاء الملك",
                    "وكيلة الملك",
                    "وكيلتا الملك",
                    "وكيلات الملك",
                ],
            ),
            (
                "نائب وكيل الملك",
                [
                    "نائب وكيل الملك",
                    "نائبا وكيل الملك",
                    "نواب وكيل الملك",
                    "نائبة وكيل الملك",
                    "نائبتا وكيل الملك",
                    "نائبات وكيل الملك",
                ],
            ),
        ];

        let entries = rows
            .into_iter()
            .map(|(root, [ms, md, mp, fs, fd, fp])| {
                (
                    root.to_string(),
                    FormSet::new(Forms::new(ms, md, mp), Forms::new(fs, fd, fp)),
                )
            })
            .collect();
        Self { entries }
    }

    /// Parses a replacement table: `{ "<root>": { "masculine": {...}, "feminine": {...} } }`.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let entries: HashMap<String, FormSet> = serde_json::from_str(json)
            .map_err(|e| DomainError::invalid(format!("inflection table: {}", e)))?;
        Ok(Self { entries })
    }

    /// A miss is normal; callers fall back to the root itself.
    pub fn lookup(&self, root: &str) -> Option<&FormSet> {
        self.entries.get(root)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_feminine_marker() {
        assert_eq!(strip_feminine_marker("  وكيلة "), "وكيل");
        assert_eq!(strip_feminine_marker("مستشار"), "مستشار");
        assert_eq!(strip_feminine_marker("باحثة"), "باحث");
        // Only the final letter is considered.
        assert_eq!(strip_feminine_marker("وكيلة عامة"), "وكيلة عام");
        assert_eq!(strip_feminine_marker(""), "");
    }

    #[test]
    fn test_standard_lookup() {
        let table = InflectionTable::standard();
        assert_eq!(table.len(), 9);
        let forms = table.lookup("قاض").unwrap();
        assert_eq!(forms.masculine.plural, "قضاة");
        assert_eq!(forms.feminine.dual, "قاضيتان");
        assert!(table.lookup("باحث").is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "كاتب": {
                "masculine": {"singular": "كاتب", "dual": "كاتبان", "plural": "كتاب"},
                "feminine": {"singular": "كاتبة", "dual": "كاتبتان", "plural": "كاتبات"}
            }
        }"#;
        let table = InflectionTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("كاتب").unwrap().masculine.plural, "كتاب");
    }

    #[test]
    fn test_from_json_rejects_incomplete_entry() {
        let json = r#"{"كاتب": {"masculine": {"singular": "كاتب"}}}"#;
        assert!(matches!(
            InflectionTable::from_json(json),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
