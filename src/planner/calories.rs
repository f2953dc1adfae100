use rand::Rng;

use crate::planner::constants::{
    CALORIE_BASE_MIN, CALORIE_BASE_SPAN, CALORIE_MODIFIERS, DEFAULT_CALORIES,
};

/// Estimate calories for a meal from keywords in its name.
///
/// The estimate is a random draw biased by the first matching keyword rule,
/// so repeated calls for the same name return different values.
pub fn estimate_calories(meal_name: &str) -> u32 {
    if meal_name.is_empty() {
        return DEFAULT_CALORIES;
    }

    let base = CALORIE_BASE_MIN + rand::thread_rng().gen_range(0..CALORIE_BASE_SPAN);
    (base as f64 * calorie_modifier(meal_name)).round() as u32
}

/// Multiplier for the first keyword rule matching the meal name, 1.0 when
/// none match.
pub fn calorie_modifier(meal_name: &str) -> f64 {
    let lower = meal_name.to_lowercase();

    for (keywords, modifier) in CALORIE_MODIFIERS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *modifier;
        }
    }

    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_default() {
        assert_eq!(estimate_calories(""), DEFAULT_CALORIES);
    }

    #[test]
    fn test_modifier_lookup() {
        assert_eq!(calorie_modifier("Garden Salad"), 0.7);
        assert_eq!(calorie_modifier("Brown Stew Chicken"), 1.0);
        assert_eq!(calorie_modifier("Beef Wellington"), 1.2);
        assert_eq!(calorie_modifier("Fried Rice"), 1.3);
        assert_eq!(calorie_modifier("Chocolate Cake"), 1.5);
        assert_eq!(calorie_modifier("Shakshuka"), 1.0);
    }

    #[test]
    fn test_modifier_priority_order() {
        // "vegetable" outranks "beef", "beef" outranks "pie".
        assert_eq!(calorie_modifier("Vegetable Beef Stew"), 0.7);
        assert_eq!(calorie_modifier("Beef and Oyster pie"), 1.2);
    }

    #[test]
    fn test_modifier_case_insensitive() {
        assert_eq!(calorie_modifier("BEEF RENDANG"), 1.2);
    }

    #[test]
    fn test_estimate_within_modifier_range() {
        // Unmodified names draw from 250..=749.
        for _ in 0..200 {
            let cal = estimate_calories("Shakshuka");
            assert!((250..=749).contains(&cal), "out of range: {}", cal);
        }
    }
}
