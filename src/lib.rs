pub mod assistant;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod mealdb;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{GeneratedPlan, Meal, MealType, Profile, SavedPlan};
