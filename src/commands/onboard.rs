use clap::Args;

use crate::api::{GoalsPayload, NewUser, NutritionApi};
use crate::onboarding::{validate_form, OnboardingForm};
use crate::state::AppContainer;

/// Register an account and set calorie/protein goals
#[derive(Args)]
pub struct OnboardCommand {
    /// Full name
    #[arg(long)]
    name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Age in years
    #[arg(long)]
    age: String,

    /// Gender (female, male, other)
    #[arg(long, default_value = "")]
    gender: String,

    /// Weight in kilograms
    #[arg(long)]
    weight: String,

    /// Height in centimeters
    #[arg(long)]
    height: String,

    /// Goal (lose, maintain, gain)
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Activity level (sedentary, light, moderate, intense)
    #[arg(long, default_value = "moderate")]
    activity: String,

    /// Daily calorie target
    #[arg(long, default_value = "2000")]
    calories: String,

    /// Daily protein target in grams
    #[arg(long, default_value = "120")]
    protein: String,
}

impl OnboardCommand {
    pub async fn run<A: NutritionApi>(
        &self,
        container: &mut AppContainer<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let form = OnboardingForm {
            full_name: self.name.clone(),
            email: self.email.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
            weight: self.weight.clone(),
            height: self.height.clone(),
            goal: self.goal.clone(),
            activity_level: self.activity.clone(),
            calories_target: self.calories.clone(),
            protein_target: self.protein.clone(),
        };

        let data = match validate_form(&form) {
            Ok(data) => data,
            Err(errors) => {
                eprintln!("Corrija os campos abaixo:");
                eprintln!("{}", errors);
                return Err("onboarding validation failed".into());
            }
        };

        let user = NewUser {
            email: data.email.clone(),
            full_name: data.full_name.clone(),
            metadata: serde_json::json!({
                "age": data.age,
                "gender": data.gender,
                "weight": data.weight,
                "height": data.height,
                "goal": data.goal,
                "activity_level": data.activity_level,
            }),
        };
        container.api().create_user(&user).await?;

        let goals = GoalsPayload {
            calories_target: data.calories_target,
            protein_target: data.protein_target,
            effective_from: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        container.api().upsert_goals(&goals).await?;

        tracing::info!("Registered user {}", data.email);
        println!("Perfil salvo com sucesso!");
        Ok(())
    }
}
