//! Implements RosterPort and InvitedListPort using one JSON file.
//!
//! The file is a key-value document with two fixed keys: `employeeData`
//! (the roster) and `invitedListData` (the invited list).

use crate::domain::{DomainError, Employee};
use crate::ports::{InvitedListPort, RosterPort};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(rename = "employeeData", default)]
    employee_data: Vec<Employee>,
    #[serde(rename = "invitedListData", default)]
    invited_list_data: Vec<Employee>,
}

/// JSON file-backed store for the roster and the invited list.
pub struct JsonKvStore {
    path: PathBuf,
    cache: RwLock<StoreData>,
}

impl JsonKvStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: RwLock::new(StoreData::default()),
        }
    }

    /// Load the store from disk. A missing file is an empty store; an
    /// unreadable one is an error (never silently wiped).
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s).map_err(|e| {
                DomainError::Store(format!("{}: {}", self.path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file yet, starting empty");
                StoreData::default()
            }
            Err(e) => return Err(DomainError::Store(e.to_string())),
        };
        info!(
            path = %self.path.display(),
            roster = data.employee_data.len(),
            invited = data.invited_list_data.len(),
            "store loaded"
        );
        *self.cache.write().await = data;
        Ok(())
    }

    /// Applies `change` to a copy of the cache, persists the copy and only
    /// then publishes it. The write lock is held throughout, so saves never
    /// interleave and a failed save leaves the cache as it was on disk.
    async fn update<F>(&self, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut StoreData) + Send,
    {
        let mut cache = self.cache.write().await;
        let mut next = cache.clone();
        change(&mut next);
        self.save(&next).await?;
        *cache = next;
        Ok(())
    }

    /// Atomic save: write temp file, sync, rename over the target.
    async fn save(&self, data: &StoreData) -> Result<(), DomainError> {
        let json =
            serde_json::to_string_pretty(data).map_err(|e| DomainError::Store(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Store(format!("create store dir: {}", e)))?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Store(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Store(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Store(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Store(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RosterPort for JsonKvStore {
    async fn load_roster(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self.cache.read().await.employee_data.clone())
    }

    async fn save_roster(&self, employees: &[Employee]) -> Result<(), DomainError> {
        let employees = employees.to_vec();
        self.update(move |d| d.employee_data = employees).await
    }
}

#[async_trait::async_trait]
impl InvitedListPort for JsonKvStore {
    async fn load_invited(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self.cache.read().await.invited_list_data.clone())
    }

    async fn save_invited(&self, invited: &[Employee]) -> Result<(), DomainError> {
        let invited = invited.to_vec();
        self.update(move |d| d.invited_list_data = invited).await
    }
}
