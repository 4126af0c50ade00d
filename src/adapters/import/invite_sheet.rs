//! Invite sheet import. Uses the `csv` crate to read a sheet exported from a
//! spreadsheet; only the `employeeId` column is read.

use crate::domain::{DomainError, EmployeeId};
use std::path::Path;
use tokio::fs;

const ID_COLUMN: &str = "employeeId";

/// Read the employee ids listed in the sheet at `path`, in row order.
pub async fn read_invite_sheet(path: &Path) -> Result<Vec<EmployeeId>, DomainError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Import(format!("{}: {}", path.display(), e)))?;
    parse_invite_sheet(&raw)
}

/// Parse sheet text. The delimiter is `;` when the header row uses it and
/// has no comma, `,` otherwise. Rows with an empty or non-numeric id are skipped.
pub fn parse_invite_sheet(raw: &str) -> Result<Vec<EmployeeId>, DomainError> {
    let raw = raw.trim_start_matches('\u{feff}');
    let header = raw.lines().next().unwrap_or_default();
    let delimiter = if header.contains(';') && !header.contains(',') {
        b';'
    } else {
        b','
    };

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| DomainError::Import(e.to_string()))?
        .clone();
    let column = headers
        .iter()
        .position(|h| h.trim() == ID_COLUMN)
        .ok_or_else(|| DomainError::invalid(format!("sheet has no \"{}\" column", ID_COLUMN)))?;

    let mut ids = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| DomainError::Import(e.to_string()))?;
        if let Some(id) = record.get(column).and_then(EmployeeId::parse) {
            ids.push(id);
        }
    }
    Ok(ids)
}
