use clap::{Args, Subcommand};

use super::print_toasts;
use crate::api::NutritionApi;
use crate::state::{AppContainer, SyncOutcome};

/// Manage the food diary
#[derive(Args)]
pub struct DiaryCommand {
    #[command(subcommand)]
    command: DiarySubcommand,
}

#[derive(Subcommand)]
enum DiarySubcommand {
    /// Save the in-progress draft text without adding an entry
    Draft {
        /// Draft text
        text: String,
    },

    /// Add an entry (uses the saved draft when no text is given)
    Add {
        /// Entry text
        text: Option<String>,
    },

    /// Remove an entry by position (starting at 0)
    Remove {
        /// Entry index
        index: usize,
    },

    /// List buffered entries
    List,

    /// Send buffered entries to the server and refresh the dashboard
    Sync,
}

impl DiaryCommand {
    pub async fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            DiarySubcommand::Draft { text } => {
                container.update_diary_draft(text.clone());
                println!("Draft saved.");
            }
            DiarySubcommand::Add { text } => {
                let entry = match text {
                    Some(text) => text.clone(),
                    None => container.state().diary.draft_text.clone(),
                };
                if container.add_diary_entry(&entry) {
                    println!(
                        "Entry added ({} buffered).",
                        container.state().diary.entries.len()
                    );
                } else {
                    println!("Nothing to add: entry text is empty.");
                }
            }
            DiarySubcommand::Remove { index } => {
                if container.remove_diary_entry(*index) {
                    println!("Entry {} removed.", index);
                } else {
                    println!("No entry at index {}.", index);
                }
            }
            DiarySubcommand::List => {
                let diary = &container.state().diary;
                if diary.entries.is_empty() {
                    println!("No buffered entries.");
                } else {
                    for (i, entry) in diary.entries.iter().enumerate() {
                        println!("  [{}] {}", i, entry);
                    }
                    println!("\nTotal: {} entry(ies)", diary.entries.len());
                }
                if !diary.draft_text.is_empty() {
                    println!("Draft: {}", diary.draft_text);
                }
            }
            DiarySubcommand::Sync => {
                let outcome = container.sync_diary().await;
                if let SyncOutcome::Synced { entries_sent, .. } = &outcome {
                    tracing::info!("Synced {} diary entry(ies)", entries_sent);
                }
            }
        }
        print_toasts(container);
        Ok(())
    }
}
