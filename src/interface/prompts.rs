use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::profile::health_goal_label;
use crate::models::Profile;

/// Health-goal keys offered on the profile screen.
const HEALTH_GOAL_CHOICES: &[&str] = &[
    "weight_loss",
    "weight_gain",
    "muscle_building",
    "maintenance",
    "general_health",
];

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a line of text; empty input yields None.
pub fn prompt_optional_text(prompt: &str, current: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.unwrap_or("").to_string())
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.to_string()))
    }
}

fn prompt_optional_u32(prompt: &str, current: Option<u32>) -> Result<Option<u32>> {
    match prompt_optional_text(prompt, current.map(|v| v.to_string()).as_deref())? {
        None => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| NutriError::InvalidInput("Invalid number".to_string())),
    }
}

fn prompt_optional_f64(prompt: &str, current: Option<f64>) -> Result<Option<f64>> {
    match prompt_optional_text(prompt, current.map(|v| v.to_string()).as_deref())? {
        None => Ok(None),
        Some(text) => text
            .parse()
            .map(Some)
            .map_err(|_| NutriError::InvalidInput("Invalid number".to_string())),
    }
}

/// Interactively edit a profile, offering the current values as defaults.
pub fn prompt_profile(current: &Profile) -> Result<Profile> {
    let full_name = prompt_optional_text("Full name", current.full_name.as_deref())?;
    let age = prompt_optional_u32("Age", current.age)?;

    let genders = ["male", "female", "other"];
    let mut gender_options: Vec<String> = genders.iter().map(|g| g.to_string()).collect();
    gender_options.push("(leave unset)".to_string());

    let gender_default = current
        .gender
        .as_deref()
        .and_then(|g| genders.iter().position(|o| *o == g))
        .unwrap_or(genders.len());

    let gender_selection = Select::new()
        .with_prompt("Gender")
        .items(&gender_options)
        .default(gender_default)
        .interact()?;

    let gender = genders.get(gender_selection).map(|g| g.to_string());

    let height = prompt_optional_f64("Height (cm)", current.height)?;
    let weight = prompt_optional_f64("Weight (kg)", current.weight)?;

    let mut goal_options: Vec<String> = HEALTH_GOAL_CHOICES
        .iter()
        .map(|g| health_goal_label(g).unwrap_or(g).to_string())
        .collect();
    goal_options.push("(leave unset)".to_string());

    let goal_default = current
        .health_goal
        .as_deref()
        .and_then(|g| HEALTH_GOAL_CHOICES.iter().position(|o| *o == g))
        .unwrap_or(HEALTH_GOAL_CHOICES.len());

    let goal_selection = Select::new()
        .with_prompt("Health goal")
        .items(&goal_options)
        .default(goal_default)
        .interact()?;

    let health_goal = HEALTH_GOAL_CHOICES
        .get(goal_selection)
        .map(|g| g.to_string());

    Ok(Profile {
        full_name,
        age,
        gender,
        height,
        weight,
        health_goal,
        updated_at: current.updated_at,
    })
}

/// Parse a YYYY-MM-DD plan date.
pub fn parse_plan_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| NutriError::InvalidInput(format!("Invalid date: {}", input)))
}

/// Collect list entries (restrictions, disliked ingredients) until the
/// user submits an empty line.
pub fn prompt_list_additions(what: &str) -> Result<Vec<String>> {
    let mut items = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!("Add a {} (or press Enter to finish)", what))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        items.push(input.to_string());
    }

    Ok(items)
}

/// Resolve user input against an existing list with fuzzy matching.
///
/// Exact matches win; otherwise close candidates are confirmed or offered
/// in a selection list. Returns None when nothing matches or the user
/// declines every candidate.
pub fn fuzzy_find_item(items: &[String], input: &str) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Try exact match first (case-insensitive)
    if let Some(item) = items.iter().find(|i| i.eq_ignore_ascii_case(input)) {
        return Ok(Some(item.clone()));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&String, f64)> = items
        .iter()
        .map(|i| (i, jaro_winkler(&i.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching entry found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| item.clone()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(i, _)| (*i).clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

/// Read one chat message; empty input ends the conversation.
pub fn prompt_chat_message() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("You (press Enter to quit)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.to_string()))
    }
}
