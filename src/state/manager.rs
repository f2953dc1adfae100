use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{NutriError, Result};
use crate::models::{ChatMessage, GeneratedPlan, PlanEntry, Profile, SavedPlan};
use crate::planner::calories::estimate_calories;
use crate::planner::constants::VEGETARIAN_MARKERS;
use crate::state::persistence::AppState;

/// Manages the user's profile, dietary preferences, saved plans, and chat
/// history on top of the loaded state.
pub struct StateManager {
    state: AppState,
}

impl StateManager {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn profile(&self) -> &Profile {
        &self.state.profile
    }

    /// Replace the profile, stamping its update time.
    pub fn update_profile(&mut self, mut profile: Profile) {
        profile.updated_at = Some(Utc::now());
        self.state.profile = profile;
    }

    pub fn restrictions(&self) -> &[String] {
        &self.state.restrictions
    }

    /// Add a dietary restriction. Returns false for duplicates
    /// (case-insensitive).
    pub fn add_restriction(&mut self, restriction: &str) -> bool {
        Self::add_list_item(&mut self.state.restrictions, restriction)
    }

    /// Remove a dietary restriction by exact name (case-insensitive).
    pub fn remove_restriction(&mut self, restriction: &str) -> bool {
        Self::remove_list_item(&mut self.state.restrictions, restriction)
    }

    pub fn disliked_ingredients(&self) -> &[String] {
        &self.state.disliked_ingredients
    }

    pub fn add_disliked_ingredient(&mut self, ingredient: &str) -> bool {
        Self::add_list_item(&mut self.state.disliked_ingredients, ingredient)
    }

    pub fn remove_disliked_ingredient(&mut self, ingredient: &str) -> bool {
        Self::remove_list_item(&mut self.state.disliked_ingredients, ingredient)
    }

    /// True when any stored restriction mentions a vegetarian or vegan diet.
    pub fn prefers_vegetarian(&self) -> bool {
        self.state.restrictions.iter().any(|r| {
            let lower = r.to_lowercase();
            VEGETARIAN_MARKERS.iter().any(|m| lower.contains(m))
        })
    }

    /// Saved plans, most recent plan date first.
    pub fn plans(&self) -> Vec<&SavedPlan> {
        let mut plans: Vec<&SavedPlan> = self.state.plans.iter().collect();
        plans.sort_by(|a, b| b.plan_date.cmp(&a.plan_date));
        plans
    }

    pub fn plan(&self, id: &str) -> Option<&SavedPlan> {
        self.state.plans.iter().find(|p| p.id == id)
    }

    /// Persist a generated plan, estimating calories for each entry.
    ///
    /// Returns the id of the stored plan.
    pub fn create_plan(
        &mut self,
        plan_date: NaiveDate,
        plan_name: Option<String>,
        generated: &GeneratedPlan,
    ) -> String {
        let plan_name = plan_name.unwrap_or_else(|| {
            format!("Meal Plan for {}", plan_date.format("%B %-d, %Y"))
        });

        let entries = generated
            .sections()
            .into_iter()
            .flat_map(|(meal_type, meals)| {
                meals.iter().map(move |meal| PlanEntry {
                    meal_type,
                    meal_name: meal.name.to_string(),
                    calories: estimate_calories(meal.name),
                })
            })
            .collect();

        let plan = SavedPlan {
            id: Uuid::new_v4().to_string(),
            plan_date,
            plan_name,
            created_at: Utc::now(),
            entries,
        };

        let id = plan.id.clone();
        self.state.plans.push(plan);
        id
    }

    /// Delete a plan and its entries.
    pub fn delete_plan(&mut self, id: &str) -> Result<()> {
        let before = self.state.plans.len();
        self.state.plans.retain(|p| p.id != id);

        if self.state.plans.len() == before {
            return Err(NutriError::PlanNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.state.chat_history
    }

    /// Record one assistant exchange.
    pub fn append_chat(&mut self, user_message: &str, assistant_response: &str) {
        self.state.chat_history.push(ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_message: user_message.to_string(),
            assistant_response: assistant_response.to_string(),
            created_at: Utc::now(),
        });
    }

    /// Borrow the full state for saving.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn add_list_item(list: &mut Vec<String>, item: &str) -> bool {
        let item = item.trim();
        if item.is_empty() || list.iter().any(|i| i.eq_ignore_ascii_case(item)) {
            return false;
        }
        list.push(item.to_string());
        true
    }

    fn remove_list_item(list: &mut Vec<String>, item: &str) -> bool {
        let before = list.len();
        list.retain(|i| !i.eq_ignore_ascii_case(item));
        list.len() != before
    }
}
