//! Implements InputPort. Inquire-based interactive menu.
//!
//! Import a roster, search it, build the invited list, generate letters.

use crate::adapters::ui::progress::letters_bar;
use crate::domain::{DomainError, Employee};
use crate::ports::InputPort;
use crate::usecases::{AddOutcome, LetterService, RosterService, SearchQuery};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{MultiSelect, Select, Text};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

const IMPORT_ROSTER: &str = "Import roster (JSON)";
const SEARCH: &str = "Search roster and invite";
const IMPORT_SHEET: &str = "Import invited list (CSV sheet)";
const SHOW_INVITED: &str = "Show / remove invited";
const GENERATE: &str = "Generate letters";
const EXIT: &str = "Exit";

const MENU: [&str; 6] = [
    IMPORT_ROSTER,
    SEARCH,
    IMPORT_SHEET,
    SHOW_INVITED,
    GENERATE,
    EXIT,
];

/// Prompt prefix and highlight colors for every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightYellow));
    inquire::set_global_render_config(config);
}

fn employee_line(e: &Employee) -> String {
    format!(
        "{} (#{}) | {} | {} | {}",
        e.full_name, e.employee_id, e.work_location, e.division, e.city
    )
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// `None` when the user backed out of the prompt (Esc / Ctrl-C).
fn cancelled<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(ui_err(e)),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    roster: Arc<RosterService>,
    letters: Arc<LetterService>,
}

impl TuiInputPort {
    pub fn new(roster: Arc<RosterService>, letters: Arc<LetterService>) -> Self {
        Self { roster, letters }
    }

    async fn import_roster(&self) -> Result<(), DomainError> {
        let Some(path) = cancelled(Text::new("Roster JSON file:").prompt())? else {
            return Ok(());
        };
        let count = self.roster.import_roster(&PathBuf::from(path.trim())).await?;
        println!("Roster loaded: {} employees.", count);
        Ok(())
    }

    async fn search_and_invite(&self) -> Result<(), DomainError> {
        let Some(name_or_id) = cancelled(Text::new("Name or id:").prompt())? else {
            return Ok(());
        };
        let Some(city) = cancelled(Text::new("City:").prompt())? else {
            return Ok(());
        };
        let Some(work_location) = cancelled(Text::new("Work location:").prompt())? else {
            return Ok(());
        };
        let query = SearchQuery {
            name_or_id,
            city,
            work_location,
        };
        let hits = self.roster.search(&query).await?;
        if hits.is_empty() {
            println!("No matching employees.");
            return Ok(());
        }

        let options: Vec<String> = hits.iter().map(employee_line).collect();
        let Some(selected) =
            cancelled(MultiSelect::new("Select employees to invite", options).raw_prompt())?
        else {
            return Ok(());
        };
        for choice in selected {
            let e = &hits[choice.index];
            match self.roster.add_invited(e.employee_id).await? {
                AddOutcome::Added(e) => println!("Invited: {}", e.full_name),
                AddOutcome::AlreadyInvited => println!("Already invited: {}", e.full_name),
                AddOutcome::NotFound => println!("Not found: #{}", e.employee_id),
            }
        }
        Ok(())
    }

    async fn import_sheet(&self) -> Result<(), DomainError> {
        let Some(path) = cancelled(Text::new("Invite sheet (CSV with employeeId column):").prompt())?
        else {
            return Ok(());
        };
        let added = self
            .roster
            .import_invite_sheet(&PathBuf::from(path.trim()))
            .await?;
        if added > 0 {
            println!("Imported and invited {} employees.", added);
        } else {
            println!("No new employees found in the sheet.");
        }
        Ok(())
    }

    async fn show_invited(&self) -> Result<(), DomainError> {
        let invited = self.roster.invited().await?;
        if invited.is_empty() {
            println!("Invited list is empty.");
            return Ok(());
        }
        let options: Vec<String> = invited.iter().map(employee_line).collect();
        let Some(selected) = cancelled(
            MultiSelect::new("Invited (select to remove, Enter to keep all)", options)
                .raw_prompt(),
        )?
        else {
            return Ok(());
        };
        for choice in selected {
            let e = &invited[choice.index];
            if self.roster.remove_invited(e.employee_id).await? {
                println!("Removed: {}", e.full_name);
            }
        }
        Ok(())
    }

    async fn generate(&self) -> Result<(), DomainError> {
        let batch = self.letters.prepare().await?;
        for key in &batch.skipped {
            println!(
                "Skipped {} / {}: only its responsible person is invited.",
                key.work_location, key.division
            );
        }

        let bar = letters_bar(batch.letters.len());
        for fields in &batch.letters {
            bar.set_message(format!("{} / {}", fields.work_location, fields.division));
            match self.letters.render(fields).await {
                Ok(_) => bar.inc(1),
                Err(e) => {
                    bar.abandon_with_message("failed");
                    return Err(e);
                }
            }
        }
        bar.finish_with_message("done");
        println!("{} letters generated.", batch.letters.len());
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let Some(choice) = cancelled(Select::new("Main menu", MENU.to_vec()).prompt())? else {
                return Ok(());
            };
            let res = match choice {
                IMPORT_ROSTER => self.import_roster().await,
                SEARCH => self.search_and_invite().await,
                IMPORT_SHEET => self.import_sheet().await,
                SHOW_INVITED => self.show_invited().await,
                GENERATE => self.generate().await,
                _ => return Ok(()),
            };
            match res {
                Err(e @ DomainError::Ui(_)) => return Err(e),
                Err(e) => {
                    error!(error = %e, action = choice, "action failed");
                    println!("Error: {}", e);
                }
                Ok(()) => {}
            }
        }
    }
}
