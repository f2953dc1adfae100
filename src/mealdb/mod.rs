pub mod client;
pub mod model;

pub use client::MealDbClient;
pub use model::{Ingredient, Recipe};
