use clap::{Args, Subcommand};

use crate::api::NutritionApi;
use crate::state::AppContainer;
use crate::theme::ThemeMode;

/// Manage the theme preference
#[derive(Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Subcommand)]
enum ThemeSubcommand {
    /// Set the theme mode (light, dark, auto)
    Set {
        /// Theme mode
        mode: String,
    },

    /// Cycle light -> dark -> auto
    Cycle,

    /// Show the stored mode and the resolved scheme
    Status,
}

impl ThemeCommand {
    pub fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ThemeSubcommand::Set { mode } => {
                let mode: ThemeMode = mode.parse()?;
                let tokens = container.set_theme(mode);
                println!("Theme set to {} (resolved: {})", mode, tokens.scheme);
            }
            ThemeSubcommand::Cycle => {
                let mode = container.cycle_theme();
                println!(
                    "Theme set to {} (resolved: {})",
                    mode,
                    container.theme().resolved()
                );
            }
            ThemeSubcommand::Status => {
                let engine = container.theme();
                let tokens = engine.active_tokens();
                println!("Mode: {}", engine.mode());
                println!("Resolved: {}", engine.resolved());
                println!("Background: {}", tokens.background_primary);
                println!("Text: {}", tokens.text_primary);
                println!("Accent: {}", tokens.accent);
            }
        }
        Ok(())
    }
}
