//! Collective phrases for one addressee group.
//!
//! Builds the honorific-led name lists, the concerned-party referent and the
//! shared job title for the members of a group (responsible person already
//! removed).

use crate::domain::grammar::resolve_count_form;
use crate::domain::inflection::{FormSet, InflectionTable, strip_feminine_marker};
use crate::domain::{CountForm, DomainError, Employee, Gender};
use serde::Serialize;

/// Conjunction joining the two gender lists.
const AND: &str = "و";
const NAME_SEPARATOR: &str = " و ";

/// Phrases computed for one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseSet {
    pub city: String,
    pub male_collective_title: String,
    pub female_collective_title: String,
    pub computed_var: String,
    pub combined_job_title: String,
}

/// Computes the phrase set for `members`. An empty member list has no
/// agreeing forms and is rejected.
pub fn build_phrases(
    members: &[Employee],
    table: &InflectionTable,
) -> Result<PhraseSet, DomainError> {
    if members.is_empty() {
        return Err(DomainError::invalid(
            "phrase building needs at least one member",
        ));
    }

    let males: Vec<&Employee> = members.iter().filter(|e| e.gender == Gender::Male).collect();
    let females: Vec<&Employee> = members
        .iter()
        .filter(|e| e.gender == Gender::Female)
        .collect();

    let male_collective_title = collective_title(Gender::Male, &males);
    let mut female_collective_title = collective_title(Gender::Female, &females);
    if !males.is_empty() && !females.is_empty() {
        female_collective_title = format!("{} {}", AND, female_collective_title);
    }

    let computed_var = resolve_count_form(
        members.len(),
        males.len(),
        females.len(),
        &FormSet::concerned_party(),
    )?
    .to_string();

    Ok(PhraseSet {
        city: members[0].city.clone(),
        male_collective_title,
        female_collective_title,
        computed_var,
        combined_job_title: combined_job_title(members, table)?,
    })
}

/// `"<honorific> <name> و <name> ..."`, or empty when nobody is listed.
fn collective_title(gender: Gender, people: &[&Employee]) -> String {
    let Some(form) = CountForm::for_count(people.len()) else {
        return String::new();
    };
    let names: Vec<&str> = people.iter().map(|e| e.full_name.as_str()).collect();
    format!(
        "{} {}",
        gender.honorific(form),
        names.join(NAME_SEPARATOR)
    )
}

/// Most frequent job-title root among `members`. Ties go to the root seen
/// first in member order. `None` when no member has a job title.
pub fn dominant_root(members: &[Employee]) -> Option<&str> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for e in members {
        let root = strip_feminine_marker(&e.job_title);
        if root.is_empty() {
            continue;
        }
        match tally.iter_mut().find(|(r, _)| *r == root) {
            Some(entry) => entry.1 += 1,
            None => tally.push((root, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (root, n) in tally {
        // Strict comparison keeps the earlier root on a tie.
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((root, n));
        }
    }
    best.map(|(root, _)| root)
}

/// The dominant root, inflected for the members holding it when the table
/// knows it, verbatim otherwise.
fn combined_job_title(
    members: &[Employee],
    table: &InflectionTable,
) -> Result<String, DomainError> {
    let Some(root) = dominant_root(members) else {
        return Ok(String::new());
    };
    let Some(forms) = table.lookup(root) else {
        return Ok(root.to_string());
    };

    let holders: Vec<&Employee> = members
        .iter()
        .filter(|e| strip_feminine_marker(&e.job_title) == root)
        .collect();
    let male_count = holders.iter().filter(|e| e.gender == Gender::Male).count();
    let female_count = holders.len() - male_count;
    Ok(resolve_count_form(holders.len(), male_count, female_count, forms)?.to_string())
}
