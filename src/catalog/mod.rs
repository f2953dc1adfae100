pub mod data;

pub use data::MEAL_CATALOG;

use crate::models::{Meal, MealType};

/// All catalog entries matching a meal type and, when given, a vegetarian
/// flag.
pub fn meals_by_type(meal_type: MealType, vegetarian: Option<bool>) -> Vec<&'static Meal> {
    MEAL_CATALOG
        .iter()
        .filter(|m| m.meal_type == meal_type)
        .filter(|m| vegetarian.is_none_or(|v| m.vegetarian == v))
        .collect()
}

/// Look up a meal by name (case-insensitive).
pub fn meal_by_name(name: &str) -> Option<&'static Meal> {
    MEAL_CATALOG
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}
