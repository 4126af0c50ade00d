//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use invitation_letters::adapters::persistence::JsonKvStore;
use invitation_letters::adapters::render::JsonLetterWriter;
use invitation_letters::adapters::ui::tui::TuiInputPort;
use invitation_letters::domain::InflectionTable;
use invitation_letters::ports::{InputPort, InvitedListPort, LetterRenderer, RosterPort};
use invitation_letters::shared::config::AppConfig;
use invitation_letters::usecases::{LetterService, RosterService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    invitation_letters::adapters::ui::init_ui();

    let cfg = AppConfig::load()?;

    // --- Inflection table: built once, shared read-only ---
    let table = match cfg.inflection_table_path() {
        Some(path) => {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| anyhow::anyhow!("read {}: {}", path.display(), e))?;
            let table = InflectionTable::from_json(&raw)?;
            info!(path = %path.display(), entries = table.len(), "custom inflection table");
            table
        }
        None => InflectionTable::standard(),
    };
    let table = Arc::new(table);

    // --- Store: roster + invited list in one JSON file ---
    let store_path = cfg.store_path_or_default();
    let store = Arc::new(JsonKvStore::new(&store_path));
    store.load().await?;
    let roster_port: Arc<dyn RosterPort> = Arc::clone(&store) as Arc<dyn RosterPort>;
    let invited_port: Arc<dyn InvitedListPort> = store as Arc<dyn InvitedListPort>;

    // --- Renderer ---
    let output_dir = cfg.output_dir_or_default();
    info!(path = %output_dir.display(), "letters output directory");
    let renderer: Arc<dyn LetterRenderer> = Arc::new(JsonLetterWriter::new(&output_dir));

    // --- Services ---
    let roster_service = Arc::new(RosterService::new(
        Arc::clone(&roster_port),
        Arc::clone(&invited_port),
    ));
    let letter_service = Arc::new(LetterService::new(
        roster_port,
        invited_port,
        renderer,
        table,
    ));

    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(roster_service, letter_service));
    input_port.run().await?;

    Ok(())
}
