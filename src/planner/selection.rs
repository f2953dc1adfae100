use rand::seq::SliceRandom;

use crate::catalog;
use crate::models::{Meal, MealType};

/// Draw up to `count` random meals of the given type, without replacement.
///
/// If fewer meals match than requested, all matching meals are returned.
pub fn random_meals(
    count: usize,
    meal_type: MealType,
    vegetarian: Option<bool>,
) -> Vec<&'static Meal> {
    let mut pool = catalog::meals_by_type(meal_type, vegetarian);
    pool.shuffle(&mut rand::thread_rng());
    pool.truncate(count);
    pool
}
