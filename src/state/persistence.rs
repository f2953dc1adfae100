use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ChatMessage, Profile, SavedPlan};

/// On-disk application state: profile, dietary preferences, saved meal
/// plans, and chat history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub restrictions: Vec<String>,

    #[serde(default)]
    pub disliked_ingredients: Vec<String>,

    #[serde(default)]
    pub plans: Vec<SavedPlan>,

    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

/// Load application state from a JSON file.
///
/// A missing file yields the default (empty) state so first runs need no
/// setup step.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<AppState> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(AppState::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save application state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &AppState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_default() {
        let state = load_state("no_such_state_file.json").unwrap();
        assert!(state.plans.is_empty());
        assert!(state.profile.full_name.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut state = AppState::default();
        state.profile.full_name = Some("Alex".to_string());
        state.profile.health_goal = Some("weight_loss".to_string());
        state.restrictions.push("Vegetarian".to_string());

        let file = NamedTempFile::new().unwrap();
        save_state(file.path(), &state).unwrap();

        let reloaded = load_state(file.path()).unwrap();
        assert_eq!(reloaded.profile.full_name.as_deref(), Some("Alex"));
        assert_eq!(reloaded.restrictions, vec!["Vegetarian".to_string()]);
    }

    #[test]
    fn test_partial_state_file_fills_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"profile": {"full_name": "Sam"}}"#).unwrap();

        let state = load_state(file.path()).unwrap();
        assert_eq!(state.profile.full_name.as_deref(), Some("Sam"));
        assert!(state.chat_history.is_empty());
        assert!(state.disliked_ingredients.is_empty());
    }
}
