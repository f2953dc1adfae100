use crate::models::{GeneratedPlan, MealType};
use crate::planner::selection::random_meals;

/// Per-section meal counts for a health goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub breakfast: usize,
    pub lunch: usize,
    pub dinner: usize,
    pub snacks: usize,
}

impl SectionCounts {
    /// Counts for a health-goal key. Unrecognized or absent goals fall back
    /// to the no-snack default.
    pub fn for_goal(health_goal: Option<&str>) -> Self {
        let snacks = match health_goal {
            Some("weight_loss") | Some("maintenance") => 1,
            Some("muscle_gain") => 2,
            _ => 0,
        };

        SectionCounts {
            breakfast: 1,
            lunch: 1,
            dinner: 1,
            snacks,
        }
    }
}

/// Generate a meal plan for the given health goal and dietary preference.
///
/// Dinner and snack sections draw from the Lunch pool; the catalog has no
/// entries of those types. Always succeeds; sections may come back short
/// when the filtered pool is smaller than requested.
pub fn generate_plan(health_goal: Option<&str>, vegetarian: Option<bool>) -> GeneratedPlan {
    let counts = SectionCounts::for_goal(health_goal);

    GeneratedPlan {
        breakfast: random_meals(counts.breakfast, MealType::Breakfast, vegetarian),
        lunch: random_meals(counts.lunch, MealType::Lunch, vegetarian),
        dinner: random_meals(counts.dinner, MealType::Lunch, vegetarian),
        snacks: random_meals(counts.snacks, MealType::Lunch, vegetarian),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_goal() {
        assert_eq!(SectionCounts::for_goal(Some("weight_loss")).snacks, 1);
        assert_eq!(SectionCounts::for_goal(Some("maintenance")).snacks, 1);
        assert_eq!(SectionCounts::for_goal(Some("muscle_gain")).snacks, 2);
        assert_eq!(SectionCounts::for_goal(Some("general_health")).snacks, 0);
        assert_eq!(SectionCounts::for_goal(None).snacks, 0);

        let counts = SectionCounts::for_goal(Some("weight_loss"));
        assert_eq!((counts.breakfast, counts.lunch, counts.dinner), (1, 1, 1));
    }

    #[test]
    fn test_default_goal_has_no_snacks() {
        let plan = generate_plan(None, None);
        assert_eq!(plan.breakfast.len(), 1);
        assert_eq!(plan.lunch.len(), 1);
        assert_eq!(plan.dinner.len(), 1);
        assert!(plan.snacks.is_empty());
    }

    #[test]
    fn test_dinner_and_snacks_drawn_from_lunch_pool() {
        for _ in 0..20 {
            let plan = generate_plan(Some("muscle_gain"), None);
            for meal in plan.dinner.iter().chain(plan.snacks.iter()) {
                assert_eq!(meal.meal_type, MealType::Lunch);
            }
        }
    }

    #[test]
    fn test_vegetarian_plan_is_vegetarian() {
        for _ in 0..20 {
            let plan = generate_plan(Some("weight_loss"), Some(true));
            for (_, meals) in plan.sections() {
                assert!(meals.iter().all(|m| m.vegetarian));
            }
        }
    }
}
