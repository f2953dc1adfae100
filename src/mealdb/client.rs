use reqwest::blocking::Client;

use crate::error::Result;
use crate::mealdb::model::{MealsResponse, RawMeal, Recipe};

/// Base URL of TheMealDB's free-tier JSON API.
pub const API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Thin blocking client for TheMealDB.
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    fn fetch(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<RawMeal>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response: MealsResponse = self
            .http
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.meals.unwrap_or_default())
    }

    /// Search recipes by name.
    pub fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>> {
        Ok(self
            .fetch("search.php", &[("s", name)])?
            .into_iter()
            .map(Recipe::from_raw)
            .collect())
    }

    /// Look up a recipe by its numeric id.
    ///
    /// Non-numeric ids cannot exist upstream and resolve to `None` without
    /// a network call.
    pub fn lookup_by_id(&self, id: &str) -> Result<Option<Recipe>> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return Ok(None);
        }

        Ok(self
            .fetch("lookup.php", &[("i", id)])?
            .into_iter()
            .next()
            .map(Recipe::from_raw))
    }

    /// Fetch one random recipe.
    pub fn random_meal(&self) -> Result<Option<Recipe>> {
        Ok(self
            .fetch("random.php", &[])?
            .into_iter()
            .next()
            .map(Recipe::from_raw))
    }

    /// List recipes in a category. Filter results carry only name and
    /// thumbnail; use [`Self::lookup_by_id`] for full details.
    pub fn by_category(&self, category: &str) -> Result<Vec<Recipe>> {
        Ok(self
            .fetch("filter.php", &[("c", category)])?
            .into_iter()
            .map(Recipe::from_raw)
            .collect())
    }
}
