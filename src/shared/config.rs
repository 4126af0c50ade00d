//! Application configuration. Paths for the store, output and inflection table.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_OUTPUT_DIR: &str = "./letters";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base directory for persisted state. Read from INVITES_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Roster/invited-list store file. Defaults to `{data_dir}/store.json`. Read from INVITES_STORE_PATH.
    #[serde(default)]
    pub store_path: Option<String>,

    /// Directory receiving generated letters. Read from INVITES_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Optional JSON file replacing the built-in job-title table. Read from INVITES_INFLECTION_TABLE_PATH.
    #[serde(default)]
    pub inflection_table_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("INVITES"));
        if let Ok(path) = std::env::var("INVITES_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    pub fn store_path_or_default(&self) -> PathBuf {
        self.store_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join(STORE_FILE))
    }

    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    pub fn inflection_table_path(&self) -> Option<PathBuf> {
        self.inflection_table_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}
