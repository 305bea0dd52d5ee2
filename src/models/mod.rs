pub mod dashboard;
pub mod diary;
pub mod plan;
pub mod profile;

pub use dashboard::Dashboard;
pub use diary::DiaryDraft;
pub use plan::NutritionPlan;
pub use profile::{ActivityLevel, Goal, Profile, ProfilePatch, Sex};
