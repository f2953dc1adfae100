use std::collections::HashSet;

use nutritrack_rs::catalog;
use nutritrack_rs::models::MealType;
use nutritrack_rs::planner::{generate_plan, random_meals};

#[test]
fn test_selection_honors_filters() {
    for vegetarian in [Some(true), Some(false), None] {
        for meal_type in [MealType::Breakfast, MealType::Lunch] {
            for _ in 0..20 {
                let meals = random_meals(4, meal_type, vegetarian);
                for meal in meals {
                    assert_eq!(meal.meal_type, meal_type);
                    if let Some(v) = vegetarian {
                        assert_eq!(meal.vegetarian, v);
                    }
                }
            }
        }
    }
}

#[test]
fn test_selection_count_and_distinctness() {
    let pool = catalog::meals_by_type(MealType::Lunch, None);
    assert!(pool.len() > 6);

    for _ in 0..50 {
        let meals = random_meals(6, MealType::Lunch, None);
        assert_eq!(meals.len(), 6);

        let names: HashSet<_> = meals.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), 6);
    }
}

#[test]
fn test_selection_caps_at_pool_size() {
    let pool = catalog::meals_by_type(MealType::Breakfast, Some(true));
    let meals = random_meals(pool.len() + 5, MealType::Breakfast, Some(true));
    assert_eq!(meals.len(), pool.len());
}

#[test]
fn test_weight_loss_vegetarian_plan_shape() {
    for _ in 0..20 {
        let plan = generate_plan(Some("weight_loss"), Some(true));

        assert_eq!(plan.breakfast.len(), 1);
        assert_eq!(plan.lunch.len(), 1);
        assert_eq!(plan.dinner.len(), 1);
        assert_eq!(plan.snacks.len(), 1);

        for (_, meals) in plan.sections() {
            assert!(meals.iter().all(|m| m.vegetarian));
        }
    }
}

#[test]
fn test_muscle_gain_plan_has_two_snacks() {
    for _ in 0..20 {
        let plan = generate_plan(Some("muscle_gain"), None);

        assert_eq!(plan.breakfast.len(), 1);
        assert_eq!(plan.lunch.len(), 1);
        assert_eq!(plan.dinner.len(), 1);
        assert_eq!(plan.snacks.len(), 2);
    }
}

#[test]
fn test_unknown_goal_falls_back_to_default() {
    for goal in [None, Some("keto"), Some("muscle_building")] {
        let plan = generate_plan(goal, None);

        assert_eq!(plan.breakfast.len(), 1);
        assert_eq!(plan.lunch.len(), 1);
        assert_eq!(plan.dinner.len(), 1);
        assert!(plan.snacks.is_empty());
    }
}

#[test]
fn test_snack_entries_come_from_lunch_pool() {
    let lunch_names: HashSet<_> = catalog::meals_by_type(MealType::Lunch, None)
        .iter()
        .map(|m| m.name)
        .collect();

    for _ in 0..20 {
        let plan = generate_plan(Some("muscle_gain"), None);
        for meal in plan.dinner.iter().chain(plan.snacks.iter()) {
            assert!(lunch_names.contains(meal.name));
        }
    }
}
