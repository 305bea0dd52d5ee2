use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
            Sex::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            "other" => Ok(Sex::Other),
            _ => Err(format!(
                "Invalid sex '{}'. Valid options: female, male, other",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Intense => write!(f, "intense"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "intense" => Ok(ActivityLevel::Intense),
            _ => Err(format!(
                "Invalid activity level '{}'. Valid options: sedentary, light, moderate, intense",
                s
            )),
        }
    }
}

/// Nutrition goal used by the plan API.
///
/// The onboarding flow speaks in weight terms (`lose`/`gain`), the plan
/// API in diet terms (`cut`/`bulk`). The aliases accept both on input;
/// serialization always uses the plan vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[serde(alias = "lose")]
    Cut,
    Maintain,
    #[serde(alias = "gain")]
    Bulk,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Cut => write!(f, "cut"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Bulk => write!(f, "bulk"),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cut" | "lose" => Ok(Goal::Cut),
            "maintain" => Ok(Goal::Maintain),
            "bulk" | "gain" => Ok(Goal::Bulk),
            _ => Err(format!(
                "Invalid goal '{}'. Valid options: cut, maintain, bulk",
                s
            )),
        }
    }
}

/// The user profile the nutrition plan is calculated from.
///
/// The profile is created with defaults and only ever overwritten by
/// partial merges; it is never deleted. `name` doubles as the session
/// key for the dashboard endpoint and must be non-empty before any
/// sync operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 30,
            weight_kg: 70.0,
            height_cm: 170.0,
            sex: Sex::Female,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }
}

impl Profile {
    /// Returns true if the profile can be used for sync operations.
    pub fn has_user(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Shallow-merge: fields absent from the patch keep their value.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(weight_kg) = patch.weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(height_cm) = patch.height_cm {
            self.height_cm = height_cm;
        }
        if let Some(sex) = patch.sex {
            self.sex = sex;
        }
        if let Some(activity_level) = patch.activity_level {
            self.activity_level = activity_level;
        }
        if let Some(goal) = patch.goal {
            self.goal = goal;
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Name: {}",
            if self.name.is_empty() {
                "(not set)"
            } else {
                &self.name
            }
        )?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Weight: {} kg", self.weight_kg)?;
        writeln!(f, "Height: {} cm", self.height_cm)?;
        writeln!(f, "Sex: {}", self.sex)?;
        writeln!(f, "Activity: {}", self.activity_level)?;
        write!(f, "Goal: {}", self.goal)
    }
}

/// Partial profile update applied by [`Profile::apply`].
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub sex: Option<Sex>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.sex.is_none()
            && self.activity_level.is_none()
            && self.goal.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.name, "");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Maintain);
        assert!(!profile.has_user());
    }

    #[test]
    fn test_apply_keeps_unnamed_fields() {
        let mut profile = Profile::default();
        profile.apply(ProfilePatch {
            name: Some("julia".to_string()),
            age: Some(28),
            ..ProfilePatch::default()
        });

        assert_eq!(profile.name, "julia");
        assert_eq!(profile.age, 28);
        // Fields not named in the patch are unchanged.
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Maintain);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut profile = Profile::default();
        profile.apply(ProfilePatch::default());
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_has_user_rejects_whitespace() {
        let mut profile = Profile::default();
        profile.name = "   ".to_string();
        assert!(!profile.has_user());

        profile.name = "julia".to_string();
        assert!(profile.has_user());
    }

    #[test]
    fn test_goal_aliases() {
        assert_eq!("lose".parse::<Goal>().unwrap(), Goal::Cut);
        assert_eq!("gain".parse::<Goal>().unwrap(), Goal::Bulk);
        assert_eq!("bulk".parse::<Goal>().unwrap(), Goal::Bulk);
        assert!("shred".parse::<Goal>().is_err());

        let parsed: Goal = serde_json::from_str("\"gain\"").unwrap();
        assert_eq!(parsed, Goal::Bulk);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"bulk\"");
    }

    #[test]
    fn test_profile_json_roundtrip() {
        let profile = Profile {
            name: "julia".to_string(),
            age: 28,
            weight_kg: 62.0,
            height_cm: 170.0,
            sex: Sex::Female,
            activity_level: ActivityLevel::Light,
            goal: Goal::Bulk,
        };

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
