//! Implements LetterRenderer by writing each letter's field map as a JSON
//! document, ready for an external templating step.
//!
//! One file per group: `{out_dir}/دعوة-{city}-{workLocation}-{division}.json`.
//! When a part had to be cleaned up to fit in a path, a digest of the raw
//! values is appended so that distinct groups never share a file.

use crate::domain::{DomainError, LetterFields};
use crate::ports::LetterRenderer;
use chrono::Utc;
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

const FILE_PREFIX: &str = "دعوة";
/// Stands in for an empty name part ("N/A" with its slash made path-safe).
const UNKNOWN_PART: &str = "N_A";

pub struct JsonLetterWriter {
    out_dir: PathBuf,
}

impl JsonLetterWriter {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// File name derived from city, work location and division.
    pub fn file_name(fields: &LetterFields) -> String {
        let raw = [
            fields.phrases.city.as_str(),
            fields.work_location.as_str(),
            fields.division.as_str(),
        ];
        let parts = raw.map(name_part);
        let stem = format!("{}-{}-{}-{}", FILE_PREFIX, parts[0], parts[1], parts[2]);
        if parts.iter().zip(raw).all(|(clean, raw)| clean == raw) {
            format!("{}.json", stem)
        } else {
            format!("{}-{:08x}.json", stem, digest(&raw))
        }
    }
}

/// FNV-1a over the parts, folded to 32 bits. Stable across runs so a
/// regenerated letter lands on the same file.
fn digest(parts: &[&str]) -> u32 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for part in parts {
        for b in part.bytes().chain(std::iter::once(0x1f)) {
            h ^= u64::from(b);
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
    (h ^ (h >> 32)) as u32
}

/// Refuses to replace a letter written for another group.
async fn check_owner(path: &Path, fields: &LetterFields) -> Result<(), DomainError> {
    let existing = match fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(DomainError::Render(format!("read {}: {}", path.display(), e))),
    };
    let doc: serde_json::Value = serde_json::from_str(&existing).unwrap_or_default();
    let same_group = doc["fields"]["workLocation"].as_str() == Some(fields.work_location.as_str())
        && doc["fields"]["division"].as_str() == Some(fields.division.as_str());
    if same_group {
        Ok(())
    } else {
        Err(DomainError::Render(format!(
            "{} already holds another group's letter",
            path.display()
        )))
    }
}

/// Field text made safe for a single path component.
fn name_part(s: &str) -> String {
    let cleaned: String = s
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        UNKNOWN_PART.to_string()
    } else {
        cleaned
    }
}

#[async_trait::async_trait]
impl LetterRenderer for JsonLetterWriter {
    async fn render(&self, fields: &LetterFields) -> Result<PathBuf, DomainError> {
        let field_map = fields.to_field_map()?;
        let doc = json!({
            "generatedAt": Utc::now().to_rfc3339(),
            "fields": field_map,
        });
        let body =
            serde_json::to_vec_pretty(&doc).map_err(|e| DomainError::Render(e.to_string()))?;

        fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|e| DomainError::Render(format!("create output dir: {}", e)))?;
        let path = self.out_dir.join(Self::file_name(fields));
        check_owner(&path, fields).await?;
        let temp_path = path.with_extension("json.tmp");

        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Render(format!("create temp file: {}", e)))?;
        f.write_all(&body)
            .await
            .map_err(|e| DomainError::Render(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Render(format!("sync temp file: {}", e)))?;
        drop(f);
        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::Render(format!("atomic rename failed: {}", e)))?;

        info!(
            path = %path.display(),
            employees = fields.employees.len(),
            "letter written"
        );
        Ok(path)
    }
}
