//! Onboarding and profile form validation.
//!
//! Form fields arrive as raw strings (CLI flags, like form inputs) and
//! are coerced to typed values with per-field error messages. Messages
//! stay in the product's pt-BR voice.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::models::profile::{ActivityLevel, Goal, Profile, Sex};

/// Goal vocabulary used by onboarding; the plan API uses
/// [`Goal`](crate::models::Goal) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingGoal {
    Lose,
    Maintain,
    Gain,
}

impl fmt::Display for OnboardingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnboardingGoal::Lose => write!(f, "lose"),
            OnboardingGoal::Maintain => write!(f, "maintain"),
            OnboardingGoal::Gain => write!(f, "gain"),
        }
    }
}

impl FromStr for OnboardingGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(OnboardingGoal::Lose),
            "maintain" => Ok(OnboardingGoal::Maintain),
            "gain" => Ok(OnboardingGoal::Gain),
            _ => Err(format!(
                "Invalid goal '{}'. Valid options: lose, maintain, gain",
                s
            )),
        }
    }
}

/// Per-field validation errors keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Raw onboarding form, all fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub full_name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub goal: String,
    pub activity_level: String,
    pub calories_target: String,
    pub protein_target: String,
}

/// Validated onboarding payload with numbers coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingData {
    pub full_name: String,
    pub email: String,
    pub age: u32,
    pub gender: Sex,
    pub weight: f64,
    pub height: f64,
    pub goal: OnboardingGoal,
    pub activity_level: ActivityLevel,
    pub calories_target: u32,
    pub protein_target: u32,
}

fn numeric(value: &str, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            errors.insert(field, "Use apenas números");
            None
        }
    }
}

/// Matches the permissive `.+@.+\..+` address check: something before
/// the `@`, and a dot with neighbors somewhere after it.
fn email_is_valid(email: &str) -> bool {
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let rest = &email[at + 1..];
    rest.char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < rest.len())
}

/// Validates the full onboarding form.
///
/// Blank gender, goal, and activity selections fall back to their
/// defaults (`other`, `maintain`, `moderate`) without erroring; an
/// explicit but unrecognized selection is an error.
pub fn validate_form(form: &OnboardingForm) -> Result<OnboardingData, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let full_name = form.full_name.trim().to_string();
    if full_name.chars().count() < 3 {
        errors.insert("full_name", "Informe seu nome completo");
    }

    if !email_is_valid(&form.email) {
        errors.insert("email", "E-mail inválido");
    }

    let age = numeric(&form.age, "age", &mut errors);
    if let Some(age) = age {
        if !(10.0..=120.0).contains(&age) {
            errors.insert("age", "Idade entre 10 e 120");
        }
    }

    let gender = if form.gender.is_empty() {
        Sex::Other
    } else {
        match form.gender.parse() {
            Ok(sex) => sex,
            Err(_) => {
                errors.insert("gender", "Selecione seu gênero");
                Sex::Other
            }
        }
    };

    let weight = numeric(&form.weight, "weight", &mut errors);
    if let Some(weight) = weight {
        if !(20.0..=500.0).contains(&weight) {
            errors.insert("weight", "Peso deve ficar entre 20kg e 500kg");
        }
    }

    let height = numeric(&form.height, "height", &mut errors);
    if let Some(height) = height {
        if !(50.0..=250.0).contains(&height) {
            errors.insert("height", "Altura deve ficar entre 50cm e 250cm");
        }
    }

    let goal = if form.goal.is_empty() {
        OnboardingGoal::Maintain
    } else {
        match form.goal.parse() {
            Ok(goal) => goal,
            Err(_) => {
                errors.insert("goal", "Selecione um objetivo válido");
                OnboardingGoal::Maintain
            }
        }
    };

    let activity_level = if form.activity_level.is_empty() {
        ActivityLevel::Moderate
    } else {
        match form.activity_level.parse() {
            Ok(level) => level,
            Err(_) => {
                errors.insert("activity_level", "Selecione um nível de atividade válido");
                ActivityLevel::Moderate
            }
        }
    };

    let calories = numeric(&form.calories_target, "calories_target", &mut errors);
    if let Some(calories) = calories {
        if !(800.0..=6000.0).contains(&calories) {
            errors.insert("calories_target", "Calorias entre 800 e 6000");
        }
    }

    let protein = numeric(&form.protein_target, "protein_target", &mut errors);
    if let Some(protein) = protein {
        if !(20.0..=400.0).contains(&protein) {
            errors.insert("protein_target", "Proteína entre 20g e 400g");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OnboardingData {
        full_name,
        email: form.email.clone(),
        age: age.unwrap_or(0.0) as u32,
        gender,
        weight: weight.unwrap_or(0.0),
        height: height.unwrap_or(0.0),
        goal,
        activity_level,
        calories_target: calories.unwrap_or(0.0) as u32,
        protein_target: protein.unwrap_or(0.0) as u32,
    })
}

/// Raw profile form for the plan flow (no email or targets).
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub sex: String,
    pub activity_level: String,
    pub goal: String,
}

/// Validates the plan profile form into a [`Profile`]. Shares the
/// numeric bounds with onboarding; goal accepts both vocabularies
/// (`cut`/`bulk` and `lose`/`gain`).
pub fn validate_profile(form: &ProfileForm) -> Result<Profile, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = form.name.trim().to_string();
    if name.is_empty() {
        errors.insert("name", "Informe um nome de usuário");
    }

    let age = numeric(&form.age, "age", &mut errors);
    if let Some(age) = age {
        if !(10.0..=120.0).contains(&age) {
            errors.insert("age", "Idade entre 10 e 120");
        }
    }

    let weight = numeric(&form.weight, "weight", &mut errors);
    if let Some(weight) = weight {
        if !(20.0..=500.0).contains(&weight) {
            errors.insert("weight", "Peso deve ficar entre 20kg e 500kg");
        }
    }

    let height = numeric(&form.height, "height", &mut errors);
    if let Some(height) = height {
        if !(50.0..=250.0).contains(&height) {
            errors.insert("height", "Altura deve ficar entre 50cm e 250cm");
        }
    }

    let sex = if form.sex.is_empty() {
        Sex::Female
    } else {
        match form.sex.parse() {
            Ok(sex) => sex,
            Err(_) => {
                errors.insert("sex", "Selecione seu gênero");
                Sex::Female
            }
        }
    };

    let activity_level = if form.activity_level.is_empty() {
        ActivityLevel::Moderate
    } else {
        match form.activity_level.parse() {
            Ok(level) => level,
            Err(_) => {
                errors.insert("activity_level", "Selecione um nível de atividade válido");
                ActivityLevel::Moderate
            }
        }
    };

    let goal = if form.goal.is_empty() {
        Goal::Maintain
    } else {
        match form.goal.parse() {
            Ok(goal) => goal,
            Err(_) => {
                errors.insert("goal", "Selecione um objetivo válido");
                Goal::Maintain
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Profile {
        name,
        age: age.unwrap_or(0.0) as u32,
        weight_kg: weight.unwrap_or(0.0),
        height_cm: height.unwrap_or(0.0),
        sex,
        activity_level,
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_email_and_short_name() {
        let form = OnboardingForm {
            full_name: "Jo".to_string(),
            email: "invalid".to_string(),
            age: "9".to_string(),
            gender: String::new(),
            weight: "10".to_string(),
            height: "40".to_string(),
            goal: "maintain".to_string(),
            activity_level: "moderate".to_string(),
            calories_target: "50".to_string(),
            protein_target: "5".to_string(),
        };

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("full_name"), Some("Informe seu nome completo"));
        assert_eq!(errors.get("email"), Some("E-mail inválido"));
        assert_eq!(errors.get("age"), Some("Idade entre 10 e 120"));
        assert_eq!(
            errors.get("weight"),
            Some("Peso deve ficar entre 20kg e 500kg")
        );
        assert_eq!(
            errors.get("height"),
            Some("Altura deve ficar entre 50cm e 250cm")
        );
        assert_eq!(
            errors.get("calories_target"),
            Some("Calorias entre 800 e 6000")
        );
        assert_eq!(errors.get("protein_target"), Some("Proteína entre 20g e 400g"));
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_returns_parsed_payload_when_valid() {
        let form = OnboardingForm {
            full_name: "Julia Souza".to_string(),
            email: "julia@example.com".to_string(),
            age: "28".to_string(),
            gender: "female".to_string(),
            weight: "62".to_string(),
            height: "170".to_string(),
            goal: "gain".to_string(),
            activity_level: "light".to_string(),
            calories_target: "2200".to_string(),
            protein_target: "130".to_string(),
        };

        let data = validate_form(&form).unwrap();
        assert_eq!(
            data,
            OnboardingData {
                full_name: "Julia Souza".to_string(),
                email: "julia@example.com".to_string(),
                age: 28,
                gender: Sex::Female,
                weight: 62.0,
                height: 170.0,
                goal: OnboardingGoal::Gain,
                activity_level: ActivityLevel::Light,
                calories_target: 2200,
                protein_target: 130,
            }
        );
    }

    #[test]
    fn test_non_numeric_fields() {
        let form = OnboardingForm {
            full_name: "Julia Souza".to_string(),
            email: "julia@example.com".to_string(),
            age: "abc".to_string(),
            gender: "female".to_string(),
            weight: "62".to_string(),
            height: "170".to_string(),
            goal: "maintain".to_string(),
            activity_level: "moderate".to_string(),
            calories_target: "2000".to_string(),
            protein_target: "120".to_string(),
        };

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("age"), Some("Use apenas números"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_pattern() {
        assert!(email_is_valid("julia@example.com"));
        assert!(email_is_valid("a@b.c"));
        assert!(!email_is_valid("invalid"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("julia@example"));
        assert!(!email_is_valid("julia@.com"));
        assert!(!email_is_valid("julia@example."));
    }

    #[test]
    fn test_profile_form_coerces_numbers() {
        let form = ProfileForm {
            name: "julia".to_string(),
            age: "28".to_string(),
            sex: "female".to_string(),
            activity_level: "light".to_string(),
            goal: "gain".to_string(),
            weight: "62".to_string(),
            height: "170".to_string(),
        };

        let profile = validate_profile(&form).unwrap();
        assert_eq!(profile.name, "julia");
        assert_eq!(profile.age, 28);
        assert_eq!(profile.weight_kg, 62.0);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Light);
        assert_eq!(profile.goal, Goal::Bulk);
    }

    #[test]
    fn test_profile_form_requires_name() {
        let form = ProfileForm {
            name: "   ".to_string(),
            age: "28".to_string(),
            weight: "62".to_string(),
            height: "170".to_string(),
            ..ProfileForm::default()
        };

        let errors = validate_profile(&form).unwrap_err();
        assert!(errors.contains("name"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::default();
        errors.insert("email", "E-mail inválido");
        errors.insert("age", "Idade entre 10 e 120");
        let rendered = errors.to_string();
        assert!(rendered.contains("email: E-mail inválido"));
        assert!(rendered.contains("age: Idade entre 10 e 120"));
    }
}
