//! Splits an invited list into addressee groups and picks each group's
//! responsible person from the full roster.

use crate::domain::{CountForm, DomainError, Employee};

/// Words marking a head or deputy post (masculine and feminine).
pub const RESPONSIBILITY_MARKERS: [&str; 4] = ["رئيس", "رئيسة", "وكيل", "وكيلة"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub work_location: String,
    pub division: String,
}

impl GroupKey {
    fn of(e: &Employee) -> Self {
        Self {
            work_location: e.work_location.clone(),
            division: e.division.clone(),
        }
    }
}

/// Organizational lead of a group, cited on its own line of the letter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiblePerson {
    pub employee: Employee,
    /// `"<workLocation> <honorific> <postResponsibility>"`.
    pub line: String,
}

/// Invited employees sharing a work location and division.
#[derive(Debug, Clone, PartialEq)]
pub struct AddresseeGroup {
    pub key: GroupKey,
    pub responsible: Option<ResponsiblePerson>,
    /// Invited members in invitation order, responsible person removed.
    pub members: Vec<Employee>,
}

impl AddresseeGroup {
    pub fn responsibility_line(&self) -> &str {
        self.responsible.as_ref().map_or("", |r| r.line.as_str())
    }
}

/// Groups `invited` by (work location, division) in first-seen order and
/// resolves each group's responsible person against `roster`.
///
/// Every invited employee must carry a work location and a division;
/// otherwise nothing is grouped and `InvalidInput` is returned.
pub fn partition_groups(
    invited: &[Employee],
    roster: &[Employee],
) -> Result<Vec<AddresseeGroup>, DomainError> {
    if let Some(e) = invited
        .iter()
        .find(|e| e.work_location.trim().is_empty() || e.division.trim().is_empty())
    {
        return Err(DomainError::invalid(format!(
            "employee {} has no work location or division",
            e.employee_id
        )));
    }

    let mut buckets: Vec<(GroupKey, Vec<Employee>)> = Vec::new();
    for e in invited {
        let key = GroupKey::of(e);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(e.clone()),
            None => buckets.push((key, vec![e.clone()])),
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(key, mut members)| {
            let responsible = find_responsible(&key, &members[0].city, roster);
            if let Some(r) = &responsible {
                members.retain(|m| m.employee_id != r.employee.employee_id);
            }
            AddresseeGroup {
                key,
                responsible,
                members,
            }
        })
        .collect())
}

/// First roster entry (roster order) at the group's place and city whose
/// post names a head or deputy.
fn find_responsible(key: &GroupKey, city: &str, roster: &[Employee]) -> Option<ResponsiblePerson> {
    roster
        .iter()
        .find(|e| {
            e.work_location == key.work_location
                && e.division == key.division
                && e.city == city
                && holds_lead_post(&e.post_responsibility)
        })
        .map(|e| ResponsiblePerson {
            line: format!(
                "{} {} {}",
                e.work_location,
                e.gender.honorific(CountForm::Singular),
                e.post_responsibility
            ),
            employee: e.clone(),
        })
}

fn holds_lead_post(post: &str) -> bool {
    let post = post.trim();
    !post.is_empty() && RESPONSIBILITY_MARKERS.iter().any(|m| post.contains(m))
}
