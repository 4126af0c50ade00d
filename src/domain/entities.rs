//! Domain entities. Pure data structures for the core business.
//!
//! No file or UI types here; adapters deserialize straight into these and
//! rejected records surface as serde errors at the adapter boundary.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Scalar shapes a roster cell may arrive in (JSON exports mix them freely).
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Employee identifier. Rosters carry it as a number or a string; both
/// normalize to an integer so `"042"` and `42` name the same person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Leading-integer parse: optional whitespace and sign, then digits.
    /// Anything after the digits is ignored (`"42abc"` → 42). Ids outside
    /// the `i64` range are rejected rather than clamped, since clamping would
    /// merge distinct people into one id.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim_start();
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'-') => (-1, &s[1..]),
            Some(b'+') => (1, &s[1..]),
            _ => (1, s),
        };
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return None;
        }
        rest[..digits_end].parse::<i64>().ok().map(|n| Self(sign * n))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match Loose::deserialize(d)? {
            Loose::Int(n) => Ok(Self(n)),
            // `i64::MAX as f64` is 2^63, one past the largest id.
            Loose::Float(x) if x.is_finite() && x.trunc().abs() < i64::MAX as f64 => {
                Ok(Self(x.trunc() as i64))
            }
            Loose::Float(x) => Err(serde::de::Error::custom(format!(
                "invalid employeeId {}: out of range",
                x
            ))),
            Loose::Text(s) => Self::parse(&s).ok_or_else(|| {
                let digits = s
                    .trim_start()
                    .trim_start_matches(['+', '-'])
                    .starts_with(|c: char| c.is_ascii_digit());
                let reason = if digits { "out of range" } else { "not a number" };
                serde::de::Error::custom(format!("invalid employeeId {:?}: {}", s, reason))
            }),
        }
    }
}

/// Grammatical gender of an employee.
///
/// Rosters encode it with the honorific itself ("السيد" / "السيدة"); that tag
/// is accepted on input and written back on output, but the honorific words
/// used in letters come from [`Gender::honorific`], not from the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const MALE_TAG: &'static str = "السيد";
    pub const FEMALE_TAG: &'static str = "السيدة";

    pub fn tag(self) -> &'static str {
        match self {
            Gender::Male => Self::MALE_TAG,
            Gender::Female => Self::FEMALE_TAG,
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let t = raw.trim();
        if t == Self::MALE_TAG {
            return Ok(Gender::Male);
        }
        if t == Self::FEMALE_TAG {
            return Ok(Gender::Female);
        }
        match t.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("unknown gender tag: {:?}", raw)),
        }
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.tag().to_string()
    }
}

/// Arabic grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountForm {
    Singular,
    Dual,
    Plural,
}

impl CountForm {
    /// 1 → singular, 2 → dual, more → plural. Zero has no form.
    pub fn for_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(CountForm::Singular),
            2 => Some(CountForm::Dual),
            _ => Some(CountForm::Plural),
        }
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    #[serde(deserialize_with = "text_or_empty")]
    pub full_name: String,
    pub gender: Gender,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub work_location: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub division: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub job_title: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub post_responsibility: String,
}

impl Employee {
    pub fn new(id: i64, full_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            employee_id: EmployeeId(id),
            full_name: full_name.into(),
            gender,
            city: String::new(),
            work_location: String::new(),
            division: String::new(),
            job_title: String::new(),
            post_responsibility: String::new(),
        }
    }

    pub fn with_place(
        mut self,
        city: impl Into<String>,
        work_location: impl Into<String>,
        division: impl Into<String>,
    ) -> Self {
        self.city = city.into();
        self.work_location = work_location.into();
        self.division = division.into();
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    pub fn with_post_responsibility(mut self, post: impl Into<String>) -> Self {
        self.post_responsibility = post.into();
        self
    }
}

/// Accepts a string, a number or null; null becomes the empty string.
fn text_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(d)? {
        None => String::new(),
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(n)) => n.to_string(),
        Some(Loose::Float(x)) => x.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_parse() {
        assert_eq!(EmployeeId::parse("42"), Some(EmployeeId(42)));
        assert_eq!(EmployeeId::parse("  042"), Some(EmployeeId(42)));
        assert_eq!(EmployeeId::parse("17abc"), Some(EmployeeId(17)));
        assert_eq!(EmployeeId::parse("-3"), Some(EmployeeId(-3)));
        assert_eq!(EmployeeId::parse("abc"), None);
        assert_eq!(EmployeeId::parse(""), None);
        assert_eq!(
            EmployeeId::parse("9223372036854775807"),
            Some(EmployeeId(i64::MAX))
        );
        assert_eq!(EmployeeId::parse("12345678901234567890"), None);
    }

    #[test]
    fn test_oversized_id_rejected_with_reason() {
        let err = serde_json::from_str::<Employee>(
            r#"{"employeeId": "12345678901234567890", "fullName": "x", "gender": "السيد"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of range"), "{}", err);

        let err = serde_json::from_str::<Employee>(
            r#"{"employeeId": 12345678901234567890, "fullName": "x", "gender": "السيد"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("out of range"), "{}", err);

        let err = serde_json::from_str::<Employee>(
            r#"{"employeeId": "n/a", "fullName": "x", "gender": "السيد"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a number"), "{}", err);
    }

    #[test]
    fn test_employee_from_mixed_json() {
        let json = r#"{
            "employeeId": "0105",
            "fullName": "أحمد بناني",
            "gender": "السيد",
            "city": "الرباط",
            "workLocation": "المحكمة الابتدائية",
            "division": 3,
            "jobTitle": null
        }"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.employee_id, EmployeeId(105));
        assert_eq!(e.gender, Gender::Male);
        assert_eq!(e.division, "3");
        assert_eq!(e.job_title, "");
        assert_eq!(e.post_responsibility, "");
    }

    #[test]
    fn test_numeric_id_matches_string_id() {
        let a: Employee =
            serde_json::from_str(r#"{"employeeId": 7, "fullName": "x", "gender": "السيدة"}"#)
                .unwrap();
        let b: Employee =
            serde_json::from_str(r#"{"employeeId": "7", "fullName": "y", "gender": "female"}"#)
                .unwrap();
        assert_eq!(a.employee_id, b.employee_id);
        assert_eq!(a.gender, Gender::Female);
        assert_eq!(b.gender, Gender::Female);
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let res: Result<Employee, _> =
            serde_json::from_str(r#"{"employeeId": 1, "fullName": "x", "gender": "الأستاذ"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_gender_serializes_as_tag() {
        let e = Employee::new(1, "سعاد", Gender::Female);
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["gender"], "السيدة");
        assert_eq!(v["employeeId"], 1);
    }

    #[test]
    fn test_count_form() {
        assert_eq!(CountForm::for_count(0), None);
        assert_eq!(CountForm::for_count(1), Some(CountForm::Singular));
        assert_eq!(CountForm::for_count(2), Some(CountForm::Dual));
        assert_eq!(CountForm::for_count(7), Some(CountForm::Plural));
    }
}
