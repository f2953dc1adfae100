pub mod chat;
pub mod meal;
pub mod plan;
pub mod profile;

pub use chat::ChatMessage;
pub use meal::{Meal, MealType};
pub use plan::{GeneratedPlan, PlanEntry, SavedPlan};
pub use profile::Profile;
