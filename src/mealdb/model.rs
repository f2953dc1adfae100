use std::collections::HashMap;

use serde::Deserialize;

use crate::planner::calories::estimate_calories;

/// Envelope used by every TheMealDB endpoint; `meals` is null when nothing
/// matches.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    pub meals: Option<Vec<RawMeal>>,
}

/// One meal as returned by the API.
///
/// Ingredients arrive as twenty numbered `strIngredientN`/`strMeasureN`
/// column pairs; those land in `extra` and are collapsed by
/// [`Recipe::from_raw`].
#[derive(Debug, Deserialize)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal")]
    pub name: String,

    #[serde(rename = "strCategory")]
    pub category: Option<String>,

    #[serde(rename = "strArea")]
    pub area: Option<String>,

    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,

    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,

    #[serde(rename = "strTags")]
    pub tags: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Option<String>>,
}

/// An ingredient with its measure, e.g. ("Plain Flour", "200g").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A processed recipe ready for display.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub estimated_calories: u32,
}

impl Recipe {
    /// Collapse a raw API meal into a recipe: pair up the numbered
    /// ingredient columns (skipping blanks), split the tag string, and
    /// attach a calorie estimate.
    pub fn from_raw(raw: RawMeal) -> Self {
        let ingredients: Vec<Ingredient> = (1..=20)
            .filter_map(|i| {
                let name = raw
                    .extra
                    .get(&format!("strIngredient{}", i))
                    .and_then(|v| v.as_deref())?
                    .trim();
                if name.is_empty() {
                    return None;
                }

                let measure = raw
                    .extra
                    .get(&format!("strMeasure{}", i))
                    .and_then(|v| v.as_deref())
                    .unwrap_or("")
                    .trim();

                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect();

        let RawMeal {
            id,
            name,
            category,
            area,
            instructions,
            thumbnail,
            tags,
            ..
        } = raw;

        let tags = tags
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let estimated_calories = estimate_calories(&name);

        Recipe {
            id,
            name,
            category,
            area,
            instructions,
            thumbnail,
            tags,
            ingredients,
            estimated_calories,
        }
    }
}
