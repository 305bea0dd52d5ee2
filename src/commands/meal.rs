use clap::Args;

use crate::api::{MealPayload, NutritionApi};
use crate::state::AppContainer;

/// Log a single meal in free text
#[derive(Args)]
pub struct MealCommand {
    /// What you ate, in plain words
    text: String,

    /// Meal time (RFC 3339); defaults to now
    #[arg(long)]
    time: Option<String>,

    /// Meal type (breakfast, lunch, dinner, snack)
    #[arg(long = "type")]
    meal_type: Option<String>,

    /// How you felt while eating
    #[arg(long)]
    emotion: Option<String>,

    /// Plan this meal belongs to
    #[arg(long)]
    plan_id: Option<String>,
}

impl MealCommand {
    pub async fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let meal_time = match &self.time {
            Some(time) => time.clone(),
            None => chrono::Local::now().to_rfc3339(),
        };

        let payload = MealPayload {
            meal_time,
            text: self.text.clone(),
            meal_type: self.meal_type.clone(),
            emotion: self.emotion.clone(),
            plan_id: self.plan_id.clone(),
        };

        let response = container.api().log_meal(&payload).await?;
        match response.message {
            Some(message) => println!("{}", message),
            None => println!("Refeição registrada."),
        }
        Ok(())
    }
}
