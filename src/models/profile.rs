use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile: body metrics and health goal. Every field is optional;
/// a fresh state file starts with an empty profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub gender: Option<String>,

    /// Height in centimeters.
    #[serde(default)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,

    /// Health goal key, e.g. "weight_loss" or "maintenance".
    #[serde(default)]
    pub health_goal: Option<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("there")
    }

    /// True once any profile field has been filled in.
    pub fn is_filled(&self) -> bool {
        self.full_name.is_some()
            || self.age.is_some()
            || self.gender.is_some()
            || self.height.is_some()
            || self.weight.is_some()
            || self.health_goal.is_some()
    }
}

/// Short display label for a health-goal key, as shown on the profile
/// screen. Unknown keys are echoed back as-is by callers.
pub fn health_goal_label(goal: &str) -> Option<&'static str> {
    match goal {
        "weight_loss" => Some("Weight Loss"),
        "weight_gain" => Some("Weight Gain"),
        "muscle_building" => Some("Muscle Building"),
        "maintenance" => Some("Maintenance"),
        "general_health" => Some("General Health"),
        _ => None,
    }
}

/// Human-readable phrase for a stored health-goal key, used in assistant
/// messages. Unknown keys are echoed back as-is by callers.
pub fn health_goal_phrase(goal: &str) -> Option<&'static str> {
    match goal {
        "weight_loss" => Some("weight loss"),
        "weight_gain" => Some("weight gain"),
        "muscle_building" => Some("muscle building"),
        "maintenance" => Some("maintaining your current weight"),
        "general_health" => Some("improving your general health"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let profile = Profile::default();
        assert_eq!(profile.display_name(), "there");

        let named = Profile {
            full_name: Some("Alex".to_string()),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Alex");
    }

    #[test]
    fn test_is_filled() {
        assert!(!Profile::default().is_filled());

        let partial = Profile {
            health_goal: Some("maintenance".to_string()),
            ..Default::default()
        };
        assert!(partial.is_filled());
    }

    #[test]
    fn test_health_goal_phrase() {
        assert_eq!(health_goal_phrase("weight_loss"), Some("weight loss"));
        assert_eq!(
            health_goal_phrase("general_health"),
            Some("improving your general health")
        );
        assert_eq!(health_goal_phrase("keto"), None);
    }
}
