use clap::{Args, Subcommand};

use super::print_toasts;
use crate::api::NutritionApi;
use crate::models::profile::{ActivityLevel, Goal, ProfilePatch, Sex};
use crate::state::AppContainer;

/// Manage the nutrition profile
#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand)]
enum ProfileSubcommand {
    /// Show the current profile
    Show,

    /// Update profile fields (unset fields are kept)
    Set {
        /// User name (session key for the dashboard)
        #[arg(long)]
        name: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<u32>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// Sex (female, male, other)
        #[arg(long)]
        sex: Option<String>,

        /// Activity level (sedentary, light, moderate, intense)
        #[arg(long)]
        activity: Option<String>,

        /// Goal (cut, maintain, bulk)
        #[arg(long)]
        goal: Option<String>,
    },
}

impl ProfileCommand {
    pub fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProfileSubcommand::Show => {
                println!("{}", container.state().profile);
            }
            ProfileSubcommand::Set {
                name,
                age,
                weight,
                height,
                sex,
                activity,
                goal,
            } => {
                let patch = ProfilePatch {
                    name: name.clone(),
                    age: *age,
                    weight_kg: *weight,
                    height_cm: *height,
                    sex: parse_opt::<Sex>(sex)?,
                    activity_level: parse_opt::<ActivityLevel>(activity)?,
                    goal: parse_opt::<Goal>(goal)?,
                };

                if patch.is_empty() {
                    println!("Nothing to update. Pass at least one field flag.");
                    return Ok(());
                }

                container.update_profile(patch);
                println!("Profile updated:");
                println!("{}", container.state().profile);
            }
        }
        print_toasts(container);
        Ok(())
    }
}

fn parse_opt<T: std::str::FromStr<Err = String>>(
    value: &Option<String>,
) -> Result<Option<T>, String> {
    value.as_deref().map(str::parse).transpose()
}
