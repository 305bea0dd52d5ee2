use serde::{Deserialize, Serialize};

/// Nutrition plan calculated by the server from a profile.
///
/// The plan is a server-derived snapshot: it is replaced wholesale on
/// every recalculation and is never edited locally, so it is excluded
/// from the persisted state blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub user: String,
    pub disclaimers: Vec<String>,
    pub caloric_profile: CaloricProfile,
    pub days: Vec<PlanDay>,
    pub macro_targets: MacroSummary,
    pub micro_targets: MicroTargets,
    pub hydration: HydrationPlan,
    pub shopping_list: Vec<ShoppingCategory>,
    pub meal_prep: Vec<String>,
    pub substitutions: Vec<Substitution>,
    pub free_meal: String,
    pub adherence_tips: Vec<String>,
    pub follow_up_questions: Vec<String>,
}

/// Energy expenditure figures behind the calorie target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaloricProfile {
    /// Basal metabolic rate (kcal).
    pub tmb: f64,
    /// Total daily energy expenditure (kcal).
    pub get: f64,
    pub adjustment_kcal: f64,
    pub target_calories: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub hydration_ml: f64,
    pub summary: MacroSummary,
    pub meals: Vec<PlannedMeal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub label: String,
    pub time: String,
    pub items: Vec<String>,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub micros: Vec<String>,
    pub justification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSummary {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroTargets {
    pub fiber_g: f64,
    pub omega3_mg: f64,
    pub iron_mg: f64,
    pub calcium_mg: f64,
    pub sodium_mg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HydrationPlan {
    pub total_liters: f64,
    pub reminders: Vec<String>,
}

/// One section of the shopping list (e.g. produce, proteins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub item: String,
    pub substitution_1: String,
    pub substitution_2: String,
    pub equivalence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_deserializes_from_api_shape() {
        let json = r#"{
            "user": "julia",
            "disclaimers": ["Consulte um nutricionista"],
            "caloric_profile": {
                "tmb": 1400.0,
                "get": 2100.0,
                "adjustment_kcal": 300.0,
                "target_calories": 2400.0
            },
            "days": [{
                "day": "segunda",
                "hydration_ml": 2500,
                "summary": {"calories": 2400, "protein_g": 130, "carbs_g": 280, "fats_g": 80},
                "meals": [{
                    "label": "Café da manhã",
                    "time": "07:30",
                    "items": ["aveia", "banana"],
                    "calories": 450,
                    "protein_g": 20,
                    "carbs_g": 60,
                    "fats_g": 12,
                    "micros": ["fibra"],
                    "justification": "Energia para o início do dia"
                }]
            }],
            "macro_targets": {"calories": 2400, "protein_g": 130, "carbs_g": 280, "fats_g": 80},
            "micro_targets": {"fiber_g": 30, "omega3_mg": 1000, "iron_mg": 18, "calcium_mg": 1000, "sodium_mg": 2300},
            "hydration": {"total_liters": 2.5, "reminders": ["Beba água ao acordar"]},
            "shopping_list": [{"name": "Hortifruti", "items": ["banana", "espinafre"]}],
            "meal_prep": ["Cozinhe grãos no domingo"],
            "substitutions": [{
                "item": "arroz",
                "substitution_1": "quinoa",
                "substitution_2": "batata doce",
                "equivalence": "1 xícara"
            }],
            "free_meal": "Sábado à noite",
            "adherence_tips": ["Prepare marmitas"],
            "follow_up_questions": ["Como foi a semana?"]
        }"#;

        let plan: NutritionPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.user, "julia");
        assert_eq!(plan.caloric_profile.target_calories, 2400.0);
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].meals[0].items, vec!["aveia", "banana"]);
        assert_eq!(plan.shopping_list[0].name, "Hortifruti");
        assert_eq!(plan.substitutions[0].substitution_1, "quinoa");
    }
}
