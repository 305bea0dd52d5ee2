pub mod auth;
pub mod config_cmd;
pub mod dashboard;
pub mod diary;
pub mod meal;
pub mod onboard;
pub mod profile;
pub mod theme_cmd;

pub use auth::AuthCommand;
pub use config_cmd::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use diary::DiaryCommand;
pub use meal::MealCommand;
pub use onboard::OnboardCommand;
pub use profile::ProfileCommand;
pub use theme_cmd::ThemeCommand;

use crate::api::NutritionApi;
use crate::state::AppContainer;

/// Prints and drains the toasts a command produced, one line each.
pub fn print_toasts<A: NutritionApi>(container: &mut AppContainer<A>) {
    for toast in container.drain_toasts() {
        match toast.description {
            Some(description) => println!("[{}] {} - {}", toast.tone, toast.title, description),
            None => println!("[{}] {}", toast.tone, toast.title),
        }
    }
}
