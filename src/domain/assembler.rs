//! Letter field sets: group metadata merged with the group's phrases.

use crate::domain::partition::{AddresseeGroup, GroupKey, partition_groups};
use crate::domain::phrases::{PhraseSet, build_phrases};
use crate::domain::{DomainError, Employee, InflectionTable};
use serde::Serialize;
use serde_json::{Map, Value};

/// Everything a template needs for one letter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterFields {
    pub work_location: String,
    pub division: String,
    pub employees: Vec<Employee>,
    pub responsibility_line: String,
    #[serde(flatten)]
    pub phrases: PhraseSet,
}

impl LetterFields {
    pub fn new(group: AddresseeGroup, phrases: PhraseSet) -> Self {
        let responsibility_line = group.responsibility_line().to_string();
        Self {
            work_location: group.key.work_location,
            division: group.key.division,
            employees: group.members,
            responsibility_line,
            phrases,
        }
    }

    /// Flat name → value mapping. Phrase values are written last and win
    /// over metadata of the same name.
    pub fn to_field_map(&self) -> Result<Map<String, Value>, DomainError> {
        let mut map = Map::new();
        map.insert("workLocation".into(), Value::String(self.work_location.clone()));
        map.insert("division".into(), Value::String(self.division.clone()));
        map.insert(
            "employees".into(),
            serde_json::to_value(&self.employees).map_err(|e| DomainError::Render(e.to_string()))?,
        );
        map.insert(
            "responsibilityLine".into(),
            Value::String(self.responsibility_line.clone()),
        );
        let phrases = match serde_json::to_value(&self.phrases) {
            Ok(Value::Object(m)) => m,
            Ok(other) => {
                return Err(DomainError::Render(format!(
                    "phrase set serialized to {}",
                    other
                )));
            }
            Err(e) => return Err(DomainError::Render(e.to_string())),
        };
        map.extend(phrases);
        Ok(map)
    }
}

/// Output of one run over a (roster, invited list) snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterBatch {
    pub letters: Vec<LetterFields>,
    /// Groups whose only invited member was their responsible person.
    pub skipped: Vec<GroupKey>,
}

/// Partitions `invited`, builds phrases per group and assembles the field
/// sets. Fails as a whole: on error no letter of the batch is returned.
pub fn assemble_batch(
    roster: &[Employee],
    invited: &[Employee],
    table: &InflectionTable,
) -> Result<LetterBatch, DomainError> {
    let mut batch = LetterBatch::default();
    for group in partition_groups(invited, roster)? {
        if group.members.is_empty() {
            batch.skipped.push(group.key);
            continue;
        }
        let phrases = build_phrases(&group.members, table)?;
        batch.letters.push(LetterFields::new(group, phrases));
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    const COURT: &str = "المحكمة الابتدائية";
    const PARQUET: &str = "النيابة العامة";

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new(1, "كريم", Gender::Male)
                .with_place("طنجة", COURT, PARQUET)
                .with_job_title("نائب وكيل الملك"),
            Employee::new(2, "سلمى", Gender::Female)
                .with_place("طنجة", COURT, PARQUET)
                .with_job_title("نائبة وكيل الملك"),
            Employee::new(3, "إدريس", Gender::Male)
                .with_place("طنجة", COURT, PARQUET)
                .with_job_title("وكيل الملك")
                .with_post_responsibility("وكيل الملك"),
            Employee::new(4, "حسن", Gender::Male)
                .with_place("طنجة", COURT, "الرئاسة")
                .with_job_title("قاض")
                .with_post_responsibility("رئيس المحكمة"),
        ]
    }

    #[test]
    fn test_batch_end_to_end() {
        let roster = roster();
        let invited = vec![roster[0].clone(), roster[2].clone(), roster[1].clone()];
        let batch = assemble_batch(&roster, &invited, &InflectionTable::standard()).unwrap();
        assert_eq!(batch.letters.len(), 1);
        assert!(batch.skipped.is_empty());

        let l = &batch.letters[0];
        assert_eq!(l.work_location, COURT);
        assert_eq!(l.division, PARQUET);
        assert_eq!(l.responsibility_line, format!("{} السيد وكيل الملك", COURT));
        let ids: Vec<i64> = l.employees.iter().map(|e| e.employee_id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(l.phrases.male_collective_title, "السيد كريم");
        assert_eq!(l.phrases.female_collective_title, "و السيدة سلمى");
        assert_eq!(l.phrases.computed_var, "المعنيان");
        // "نائبة وكيل الملك" keeps its marker (it is not the last letter), so
        // the two titles tie and the first-seen one is used in the singular.
        assert_eq!(l.phrases.combined_job_title, "نائب وكيل الملك");
        assert_eq!(l.phrases.city, "طنجة");
    }

    #[test]
    fn test_group_of_only_responsible_is_skipped() {
        let roster = roster();
        let invited = vec![roster[3].clone(), roster[0].clone()];
        let batch = assemble_batch(&roster, &invited, &InflectionTable::standard()).unwrap();
        assert_eq!(batch.letters.len(), 1);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].division, "الرئاسة");
        assert!(
            batch
                .letters
                .iter()
                .all(|l| l.employees.iter().all(|e| e.employee_id.0 != 4))
        );
    }

    #[test]
    fn test_field_map_keys() {
        let roster = roster();
        let batch =
            assemble_batch(&roster, &roster[..2], &InflectionTable::standard()).unwrap();
        let map = batch.letters[0].to_field_map().unwrap();
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "city",
                "combinedJobTitle",
                "computedVar",
                "division",
                "employees",
                "femaleCollectiveTitle",
                "maleCollectiveTitle",
                "responsibilityLine",
                "workLocation",
            ]
        );
        assert_eq!(map["employees"].as_array().unwrap().len(), 2);
        assert_eq!(map["employees"][0]["gender"], "السيد");
    }

    #[test]
    fn test_batch_is_idempotent() {
        let roster = roster();
        let table = InflectionTable::standard();
        let first = assemble_batch(&roster, &roster, &table).unwrap();
        let second = assemble_batch(&roster, &roster, &table).unwrap();
        assert_eq!(first, second);
        let a = serde_json::to_string(&first.letters[0].to_field_map().unwrap()).unwrap();
        let b = serde_json::to_string(&second.letters[0].to_field_map().unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_invited_yields_no_letters() {
        let mut roster = roster();
        roster.push(Employee::new(5, "بدون مكان", Gender::Male));
        let res = assemble_batch(&roster, &roster, &InflectionTable::standard());
        assert!(matches!(res, Err(DomainError::InvalidInput(_))));
    }
}
