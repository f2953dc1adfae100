pub mod calories;
pub mod constants;
pub mod generator;
pub mod selection;

pub use calories::{calorie_modifier, estimate_calories};
pub use constants::*;
pub use generator::{generate_plan, SectionCounts};
pub use selection::random_meals;
