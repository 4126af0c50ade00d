//! Roster and invited-list management: import, search, invite, uninvite.
//!
//! Every change to the invited list is saved immediately; letters are always
//! computed from scratch from the saved snapshot.

use crate::adapters::import::{read_invite_sheet, read_roster_document};
use crate::domain::{DomainError, Employee, EmployeeId};
use crate::ports::{InvitedListPort, RosterPort};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Roster filter. Each non-empty term must match (case-insensitive substring).
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Matched against the full name or the employee id. A numeric term also
    /// matches the id it denotes, so `"0105"` finds employee 105.
    pub name_or_id: String,
    pub city: String,
    pub work_location: String,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.name_or_id.trim().is_empty()
            && self.city.trim().is_empty()
            && self.work_location.trim().is_empty()
    }

    pub fn matches(&self, e: &Employee) -> bool {
        let name_or_id = self.name_or_id.trim().to_lowercase();
        let city = self.city.trim().to_lowercase();
        let work_location = self.work_location.trim().to_lowercase();

        let name_hit = name_or_id.is_empty()
            || e.full_name.to_lowercase().contains(&name_or_id)
            || e.employee_id.to_string().contains(&name_or_id)
            || name_or_id.parse::<i64>().is_ok_and(|n| n == e.employee_id.0);
        let city_hit = city.is_empty() || e.city.to_lowercase().contains(&city);
        let place_hit =
            work_location.is_empty() || e.work_location.to_lowercase().contains(&work_location);
        name_hit && city_hit && place_hit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Employee),
    AlreadyInvited,
    NotFound,
}

pub struct RosterService {
    roster: Arc<dyn RosterPort>,
    invited: Arc<dyn InvitedListPort>,
}

impl RosterService {
    pub fn new(roster: Arc<dyn RosterPort>, invited: Arc<dyn InvitedListPort>) -> Self {
        Self { roster, invited }
    }

    /// Replace the roster with the records of a `{"employees": [...]}` file.
    /// The invited list is left untouched.
    pub async fn import_roster(&self, path: &Path) -> Result<usize, DomainError> {
        let employees = read_roster_document(path).await?;
        self.roster.save_roster(&employees).await?;
        info!(path = %path.display(), count = employees.len(), "roster imported");
        Ok(employees.len())
    }

    /// Roster entries matching `query`, in roster order. An empty query
    /// matches nothing.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Employee>, DomainError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let roster = self.roster.load_roster().await?;
        let hits: Vec<Employee> = roster.into_iter().filter(|e| query.matches(e)).collect();
        debug!(hits = hits.len(), "roster search");
        Ok(hits)
    }

    pub async fn invited(&self) -> Result<Vec<Employee>, DomainError> {
        self.invited.load_invited().await
    }

    pub async fn add_invited(&self, id: EmployeeId) -> Result<AddOutcome, DomainError> {
        let roster = self.roster.load_roster().await?;
        let mut invited = self.invited.load_invited().await?;
        let outcome = invite(&roster, &mut invited, id);
        if let AddOutcome::Added(e) = &outcome {
            self.invited.save_invited(&invited).await?;
            info!(employee_id = %e.employee_id, name = %e.full_name, "employee invited");
        }
        Ok(outcome)
    }

    /// Returns false when `id` was not on the list.
    pub async fn remove_invited(&self, id: EmployeeId) -> Result<bool, DomainError> {
        let mut invited = self.invited.load_invited().await?;
        let before = invited.len();
        invited.retain(|e| e.employee_id != id);
        if invited.len() == before {
            return Ok(false);
        }
        self.invited.save_invited(&invited).await?;
        info!(employee_id = %id, "employee removed from invited list");
        Ok(true)
    }

    /// Invite every roster employee listed in the sheet at `path`. Unknown
    /// and already-invited ids are skipped. Returns how many were added.
    pub async fn import_invite_sheet(&self, path: &Path) -> Result<usize, DomainError> {
        let ids = read_invite_sheet(path).await?;
        let roster = self.roster.load_roster().await?;
        let mut invited = self.invited.load_invited().await?;

        let added = ids
            .into_iter()
            .filter(|id| matches!(invite(&roster, &mut invited, *id), AddOutcome::Added(_)))
            .count();
        if added > 0 {
            self.invited.save_invited(&invited).await?;
        }
        info!(path = %path.display(), added, "invite sheet imported");
        Ok(added)
    }
}

fn invite(roster: &[Employee], invited: &mut Vec<Employee>, id: EmployeeId) -> AddOutcome {
    let Some(employee) = roster.iter().find(|e| e.employee_id == id) else {
        return AddOutcome::NotFound;
    };
    if invited.iter().any(|e| e.employee_id == id) {
        return AddOutcome::AlreadyInvited;
    }
    invited.push(employee.clone());
    AddOutcome::Added(employee.clone())
}
