use clap::{Args, Subcommand};

use crate::api::NutritionApi;
use crate::state::AppContainer;

/// Manage the stored API session token
#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand)]
enum AuthSubcommand {
    /// Store a bearer token for API calls
    Login {
        /// Bearer token issued by the server
        token: String,
    },

    /// Remove the stored token
    Logout,

    /// Show whether a token is stored
    Status,
}

impl AuthCommand {
    pub fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            AuthSubcommand::Login { token } => {
                container.set_auth_token(token);
                println!("Token stored. New API calls will use it.");
            }
            AuthSubcommand::Logout => {
                container.clear_auth_token();
                println!("Token removed.");
            }
            AuthSubcommand::Status => match container.auth_token() {
                Some(token) => {
                    // Mask the token for display
                    let masked = if token.len() > 8 {
                        format!("{}...{}", &token[..4], &token[token.len() - 4..])
                    } else {
                        "****".to_string()
                    };
                    println!("Logged in (token: {})", masked);
                }
                None => {
                    println!("Not logged in. Run 'nica auth login <token>' first.");
                }
            },
        }
        Ok(())
    }
}
