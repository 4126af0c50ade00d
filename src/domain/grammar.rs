//! Number/gender agreement.
//!
//! One branch structure serves every agreeing word in a letter: the
//! concerned-party referent, job titles, and (through [`Gender::honorific`])
//! the honorific that leads a list of names.

use crate::domain::inflection::FormSet;
use crate::domain::{CountForm, DomainError, Gender};

/// Picks the form agreeing with `count` people of whom `male_count` are men
/// and `female_count` are women.
///
/// - one person: masculine singular if that person is a man, else feminine
/// - two people: masculine dual unless both are women; a mixed pair takes
///   the masculine
/// - more: masculine plural if any man is present, else feminine plural
///
/// A count of zero has no agreeing form and is rejected.
pub fn resolve_count_form<'a>(
    count: usize,
    male_count: usize,
    female_count: usize,
    forms: &'a FormSet,
) -> Result<&'a str, DomainError> {
    let form = match count {
        0 => {
            return Err(DomainError::invalid(
                "cannot inflect for an empty group",
            ));
        }
        1 => {
            if male_count == 1 {
                &forms.masculine.singular
            } else {
                &forms.feminine.singular
            }
        }
        2 => {
            if male_count == 2 {
                &forms.masculine.dual
            } else if female_count == 2 {
                &forms.feminine.dual
            } else {
                &forms.masculine.dual
            }
        }
        _ => {
            if male_count > 0 {
                &forms.masculine.plural
            } else {
                &forms.feminine.plural
            }
        }
    };
    Ok(form.as_str())
}

impl Gender {
    /// Honorific preceding the names of `form`-many people of this gender.
    pub fn honorific(self, form: CountForm) -> &'static str {
        match (self, form) {
            (Gender::Male, CountForm::Singular) => "السيد",
            (Gender::Male, CountForm::Dual) => "السيدان",
            (Gender::Male, CountForm::Plural) => "السادة",
            (Gender::Female, CountForm::Singular) => "السيدة",
            (Gender::Female, CountForm::Dual) => "السيدتان",
            (Gender::Female, CountForm::Plural) => "السيدات",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(count: usize, males: usize, females: usize) -> String {
        resolve_count_form(count, males, females, &FormSet::concerned_party())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_singular() {
        assert_eq!(resolve(1, 1, 0), "المعني");
        assert_eq!(resolve(1, 0, 1), "المعنية");
    }

    #[test]
    fn test_dual() {
        assert_eq!(resolve(2, 2, 0), "المعنيان");
        assert_eq!(resolve(2, 0, 2), "المعنيتان");
        assert_eq!(resolve(2, 1, 1), "المعنيان");
    }

    #[test]
    fn test_plural() {
        assert_eq!(resolve(3, 3, 0), "المعنيون");
        assert_eq!(resolve(3, 1, 2), "المعنيون");
        assert_eq!(resolve(3, 0, 3), "المعنيات");
        assert_eq!(resolve(5, 0, 5), "المعنيات");
        assert_eq!(resolve(5, 4, 1), "المعنيون");
    }

    #[test]
    fn test_zero_is_invalid() {
        let forms = FormSet::concerned_party();
        assert!(matches!(
            resolve_count_form(0, 0, 0, &forms),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_job_title_forms() {
        let table = crate::domain::InflectionTable::standard();
        let forms = table.lookup("وكيل الملك").unwrap();
        assert_eq!(resolve_count_form(2, 0, 2, forms).unwrap(), "وكيلتا الملك");
        assert_eq!(resolve_count_form(4, 1, 3, forms).unwrap(), "وكلاء الملك");
    }

    #[test]
    fn test_honorifics() {
        assert_eq!(Gender::Male.honorific(CountForm::Plural), "السادة");
        assert_eq!(Gender::Female.honorific(CountForm::Dual), "السيدتان");
        assert_eq!(Gender::Female.honorific(CountForm::Singular), Gender::FEMALE_TAG);
    }
}
