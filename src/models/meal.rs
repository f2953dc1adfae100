use serde::{Deserialize, Serialize};

/// Meal-type category.
///
/// Used both to filter the catalog and to key the sections of a generated
/// plan. The catalog sample data only contains Breakfast and Lunch entries;
/// Dinner and Snack exist as section keys and persisted entry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Lowercase key as persisted in plan entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog meal: a named dish tagged with its category and a vegetarian
/// flag. The catalog is compiled in, so entries borrow static names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub name: &'static str,
    pub meal_type: MealType,
    pub vegetarian: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_keys() {
        assert_eq!(MealType::Breakfast.as_str(), "breakfast");
        assert_eq!(MealType::Snack.as_str(), "snack");
        assert_eq!(MealType::Dinner.label(), "Dinner");
    }

    #[test]
    fn test_meal_type_serde_lowercase() {
        let json = serde_json::to_string(&MealType::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");

        let parsed: MealType = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(parsed, MealType::Snack);
    }
}
