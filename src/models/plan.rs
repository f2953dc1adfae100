use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::meal::{Meal, MealType};

/// Result of one plan-generation request, keyed by plan section.
///
/// Transient: the state layer converts it into a [`SavedPlan`] when the
/// user chooses to keep it.
#[derive(Debug, Default)]
pub struct GeneratedPlan {
    pub breakfast: Vec<&'static Meal>,
    pub lunch: Vec<&'static Meal>,
    pub dinner: Vec<&'static Meal>,
    pub snacks: Vec<&'static Meal>,
}

impl GeneratedPlan {
    /// The four sections in display order, paired with their entry type.
    pub fn sections(&self) -> [(MealType, &[&'static Meal]); 4] {
        [
            (MealType::Breakfast, self.breakfast.as_slice()),
            (MealType::Lunch, self.lunch.as_slice()),
            (MealType::Dinner, self.dinner.as_slice()),
            (MealType::Snack, self.snacks.as_slice()),
        ]
    }

    /// Total number of meals across all sections.
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One meal within a saved plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub meal_type: MealType,
    pub meal_name: String,
    pub calories: u32,
}

/// A persisted meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: String,
    pub plan_date: NaiveDate,
    pub plan_name: String,
    pub created_at: DateTime<Utc>,
    pub entries: Vec<PlanEntry>,
}

impl SavedPlan {
    /// Sum of estimated calories across all entries.
    pub fn total_calories(&self) -> u32 {
        self.entries.iter().map(|e| e.calories).sum()
    }

    /// Entries belonging to one section.
    pub fn entries_of(&self, meal_type: MealType) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(move |e| e.meal_type == meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SavedPlan {
        SavedPlan {
            id: "plan-1".to_string(),
            plan_date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            plan_name: "Test Plan".to_string(),
            created_at: Utc::now(),
            entries: vec![
                PlanEntry {
                    meal_type: MealType::Breakfast,
                    meal_name: "Pancakes".to_string(),
                    calories: 400,
                },
                PlanEntry {
                    meal_type: MealType::Snack,
                    meal_name: "Dal fry".to_string(),
                    calories: 300,
                },
            ],
        }
    }

    #[test]
    fn test_total_calories() {
        assert_eq!(sample_plan().total_calories(), 700);
    }

    #[test]
    fn test_entries_of_section() {
        let plan = sample_plan();
        let snacks: Vec<_> = plan.entries_of(MealType::Snack).collect();
        assert_eq!(snacks.len(), 1);
        assert_eq!(snacks[0].meal_name, "Dal fry");
        assert_eq!(plan.entries_of(MealType::Dinner).count(), 0);
    }

    #[test]
    fn test_generated_plan_sections_order() {
        let plan = GeneratedPlan::default();
        let keys: Vec<_> = plan.sections().iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(keys, vec!["breakfast", "lunch", "dinner", "snack"]);
        assert!(plan.is_empty());
    }
}
