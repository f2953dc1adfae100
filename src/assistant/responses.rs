use crate::models::profile::health_goal_phrase;
use crate::models::{Meal, MealType, Profile};
use crate::planner::selection::random_meals;

/// Profile context the assistant personalizes its replies with.
#[derive(Debug, Clone, Copy)]
pub struct AssistantContext<'a> {
    pub profile: &'a Profile,
    pub disliked_ingredients: &'a [String],
    /// Derived from the stored dietary restrictions.
    pub vegetarian: bool,
}

/// Greeting shown when the chat has no history yet.
pub fn welcome_message(ctx: &AssistantContext) -> String {
    if !ctx.profile.is_filled() {
        return "Hello! I'm your nutrition assistant. To get personalized \
                recommendations, consider completing your profile with your \
                health goals and preferences."
            .to_string();
    }

    let mut message = format!(
        "Hello {}! I'm your nutrition assistant.",
        ctx.profile.display_name()
    );

    if let Some(goal) = ctx.profile.health_goal.as_deref() {
        let phrase = health_goal_phrase(goal).unwrap_or(goal);
        message.push_str(&format!(" I see your health goal is {}.", phrase));
    }

    message.push_str(" How can I help you with your nutrition needs today?");
    message
}

/// Build the scripted reply for one user message.
///
/// Dispatches on the first keyword group found in the lowercased input;
/// unmatched input gets a generic capabilities reply.
pub fn generate_response(input: &str, ctx: &AssistantContext) -> String {
    let lower = input.to_lowercase();

    if contains_any(&lower, &["breakfast"]) {
        return suggestion_reply("breakfast", MealType::Breakfast, ctx);
    }

    if contains_any(&lower, &["lunch", "dinner"]) {
        return suggestion_reply("main meal", MealType::Lunch, ctx);
    }

    if contains_any(&lower, &["snack"]) {
        return snack_reply(ctx);
    }

    if contains_any(&lower, &["weight loss", "lose weight"]) {
        return "For weight loss, aim for a moderate calorie deficit: fill half \
                your plate with vegetables, choose lean proteins, and watch \
                portion sizes. Regular meals help avoid cravings later in the \
                day."
            .to_string();
    }

    if contains_any(&lower, &["muscle", "protein"]) {
        return "To support muscle building, spread protein across your meals: \
                eggs, chicken, fish, beans, and dairy are all good sources. \
                Pair them with complex carbs to fuel your training."
            .to_string();
    }

    if contains_any(&lower, &["vegetarian", "vegan"]) {
        let meals = suggest_meals(MealType::Lunch, 2, Some(true), ctx);
        let mut reply = "A balanced vegetarian diet combines legumes, whole \
                         grains, nuts, and plenty of vegetables to cover protein \
                         and iron needs."
            .to_string();
        if !meals.is_empty() {
            reply.push_str(&format!(
                " From our catalog you could try: {}.",
                meal_names(&meals)
            ));
        }
        return reply;
    }

    if contains_any(&lower, &["water", "hydrat"]) {
        return "Aim for at least 8 glasses of water a day. Thirst is easy to \
                mistake for hunger, so a glass of water before meals can also \
                help with portion control."
            .to_string();
    }

    if contains_any(&lower, &["calorie"]) {
        return "Calorie needs vary with age, size, and activity. The estimates \
                shown next to meals here are rough keyword-based guesses, so \
                treat them as a starting point rather than a measurement."
            .to_string();
    }

    if contains_any(&lower, &["meal plan", "plan"]) {
        let goal_note = match ctx.profile.health_goal.as_deref() {
            Some(goal) => {
                let phrase = health_goal_phrase(goal).unwrap_or(goal);
                format!(" tuned for {}", phrase)
            }
            None => String::new(),
        };
        return format!(
            "Run `nutritrack plan` and I'll put together a daily meal plan{} \
             from your saved preferences.",
            goal_note
        );
    }

    "I can help with meal suggestions, nutrition advice, and recipe ideas. \
     Try asking for a high-protein breakfast, healthy snacks for weight \
     loss, or what to eat as a vegetarian."
        .to_string()
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Random catalog meals honoring the vegetarian preference and skipping
/// anything whose name mentions a disliked ingredient.
fn suggest_meals(
    meal_type: MealType,
    count: usize,
    vegetarian: Option<bool>,
    ctx: &AssistantContext,
) -> Vec<&'static Meal> {
    // Oversample so disliked meals can be dropped without running short.
    let mut meals = random_meals(count + ctx.disliked_ingredients.len(), meal_type, vegetarian);
    meals.retain(|m| {
        let name = m.name.to_lowercase();
        !ctx.disliked_ingredients
            .iter()
            .any(|d| name.contains(&d.to_lowercase()))
    });
    meals.truncate(count);
    meals
}

fn suggestion_reply(label: &str, meal_type: MealType, ctx: &AssistantContext) -> String {
    let vegetarian = if ctx.vegetarian { Some(true) } else { None };
    let meals = suggest_meals(meal_type, 2, vegetarian, ctx);

    if meals.is_empty() {
        return format!(
            "I don't have a {} suggestion matching your preferences right now.",
            label
        );
    }

    format!("How about one of these for {}: {}?", label, meal_names(&meals))
}

fn snack_reply(ctx: &AssistantContext) -> String {
    let advice = match ctx.profile.health_goal.as_deref() {
        Some("weight_loss") => {
            "For weight loss, keep snacks light: fruit, vegetable sticks, or a \
             small handful of nuts."
        }
        Some("muscle_building") => {
            "For muscle building, pick protein-rich snacks: Greek yogurt, \
             cottage cheese, or a boiled egg."
        }
        _ => {
            "Good snacks combine protein and fiber: fruit with nut butter, \
             yogurt, or wholegrain crackers with cheese."
        }
    };
    advice.to_string()
}

fn meal_names(meals: &[&'static Meal]) -> String {
    meals
        .iter()
        .map(|m| m.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_goal(goal: &str) -> Profile {
        Profile {
            full_name: Some("Alex".to_string()),
            health_goal: Some(goal.to_string()),
            ..Default::default()
        }
    }

    fn ctx<'a>(profile: &'a Profile, disliked: &'a [String]) -> AssistantContext<'a> {
        AssistantContext {
            profile,
            disliked_ingredients: disliked,
            vegetarian: false,
        }
    }

    #[test]
    fn test_welcome_for_empty_profile() {
        let profile = Profile::default();
        let message = welcome_message(&ctx(&profile, &[]));
        assert!(message.contains("completing your profile"));
    }

    #[test]
    fn test_welcome_mentions_goal_phrase() {
        let profile = profile_with_goal("general_health");
        let message = welcome_message(&ctx(&profile, &[]));
        assert!(message.contains("Hello Alex"));
        assert!(message.contains("improving your general health"));
    }

    #[test]
    fn test_breakfast_reply_suggests_catalog_meals() {
        let profile = Profile::default();
        let reply = generate_response("Suggest a breakfast for me", &ctx(&profile, &[]));
        assert!(reply.contains("breakfast"));
        assert!(reply.contains("How about"));
    }

    #[test]
    fn test_snack_reply_follows_goal() {
        let profile = profile_with_goal("weight_loss");
        let reply = generate_response("any snack ideas?", &ctx(&profile, &[]));
        assert!(reply.contains("weight loss"));
    }

    #[test]
    fn test_fallback_reply() {
        let profile = Profile::default();
        let reply = generate_response("what is the meaning of life", &ctx(&profile, &[]));
        assert!(reply.contains("meal suggestions"));
    }

    #[test]
    fn test_disliked_ingredients_filtered_from_suggestions() {
        let profile = Profile::default();
        let disliked = vec!["beef".to_string()];
        let context = ctx(&profile, &disliked);

        for _ in 0..30 {
            let reply = generate_response("dinner ideas?", &context);
            assert!(
                !reply.to_lowercase().contains("beef"),
                "suggested a disliked ingredient: {}",
                reply
            );
        }
    }

    #[test]
    fn test_vegetarian_keyword_suggests_vegetarian_meals() {
        let profile = Profile::default();
        let reply = generate_response("what should I eat as a vegetarian?", &ctx(&profile, &[]));
        assert!(reply.contains("vegetarian diet"));
    }
}
