use crate::mealdb::Recipe;
use crate::models::profile::health_goal_label;
use crate::models::{ChatMessage, GeneratedPlan, Profile, SavedPlan};

/// Display a freshly generated plan, section by section.
pub fn display_generated_plan(plan: &GeneratedPlan) {
    if plan.is_empty() {
        println!("No meals matched your preferences; nothing to plan.");
        return;
    }

    println!();
    println!("=== Generated Meal Plan ===");
    println!();

    for (meal_type, meals) in plan.sections() {
        if meals.is_empty() {
            continue;
        }

        println!("{}:", meal_type.label());
        for meal in meals {
            let marker = if meal.vegetarian { " (vegetarian)" } else { "" };
            println!("  - {}{}", meal.name, marker);
        }
    }

    println!();
}

/// Display a saved plan with per-entry calorie estimates.
pub fn display_saved_plan(plan: &SavedPlan) {
    println!();
    println!("=== {} ===", plan.plan_name);
    println!("Id: {}", plan.id);
    println!("Date: {}", plan.plan_date);
    println!();

    let max_name_len = plan
        .entries
        .iter()
        .map(|e| e.meal_name.len())
        .max()
        .unwrap_or(10);

    for entry in &plan.entries {
        println!(
            "  {:<10} {:<width$} ~{:>4} cal",
            entry.meal_type.label(),
            entry.meal_name,
            entry.calories,
            width = max_name_len
        );
    }

    println!();
    println!("Total estimated calories: {}", plan.total_calories());
    println!();
}

/// Display saved plans as a one-line-per-plan list.
pub fn display_plan_list(plans: &[&SavedPlan]) {
    if plans.is_empty() {
        println!("No saved meal plans. Run 'plan' to create one.");
        return;
    }

    println!();
    println!("=== Meal Plans ({}) ===", plans.len());
    println!();

    for plan in plans {
        println!(
            "  {}  {}  ({} meals, ~{} cal)  [{}]",
            plan.plan_date,
            plan.plan_name,
            plan.entries.len(),
            plan.total_calories(),
            plan.id
        );
    }

    println!();
}

/// Display the profile with dietary preferences.
pub fn display_profile(profile: &Profile, restrictions: &[String], disliked: &[String]) {
    println!();
    println!("=== Profile ===");
    println!();

    let show = |label: &str, value: Option<String>| {
        println!(
            "  {:<14} {}",
            label,
            value.unwrap_or_else(|| "not specified".to_string())
        );
    };

    show("Name:", profile.full_name.clone());
    show("Age:", profile.age.map(|v| v.to_string()));
    show("Gender:", profile.gender.clone());
    show("Height:", profile.height.map(|v| format!("{} cm", v)));
    show("Weight:", profile.weight.map(|v| format!("{} kg", v)));
    show(
        "Health goal:",
        profile
            .health_goal
            .as_deref()
            .map(|g| health_goal_label(g).unwrap_or(g).to_string()),
    );

    println!();
    if restrictions.is_empty() {
        println!("  Dietary restrictions: (none)");
    } else {
        println!("  Dietary restrictions: {}", restrictions.join(", "));
    }

    if disliked.is_empty() {
        println!("  Disliked ingredients: (none)");
    } else {
        println!("  Disliked ingredients: {}", disliked.join(", "));
    }

    println!();
}

/// Display one recipe in full.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== {} ===", recipe.name);

    if let Some(category) = &recipe.category {
        println!("Category: {}", category);
    }
    if let Some(area) = &recipe.area {
        println!("Cuisine: {}", area);
    }
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags.join(", "));
    }
    println!("Estimated calories: ~{}", recipe.estimated_calories);

    if !recipe.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &recipe.ingredients {
            if ingredient.measure.is_empty() {
                println!("  - {}", ingredient.name);
            } else {
                println!("  - {} ({})", ingredient.name, ingredient.measure);
            }
        }
    }

    if let Some(instructions) = &recipe.instructions {
        println!();
        println!("{}", instructions);
    }

    println!();
}

/// Display search results as a compact list.
pub fn display_recipe_list(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    println!();
    println!("=== Recipes ({}) ===", recipes.len());
    println!();

    for recipe in recipes {
        let category = recipe.category.as_deref().unwrap_or("-");
        println!(
            "  {:>6}  {:<10} ~{:>4} cal  {}",
            recipe.id, category, recipe.estimated_calories, recipe.name
        );
    }

    println!();
    println!("Use 'recipes --id <ID>' for details.");
    println!();
}

/// Display the stored chat transcript.
pub fn display_chat_history(history: &[ChatMessage]) {
    if history.is_empty() {
        println!("No chat history yet. Run 'chat' to start a conversation.");
        return;
    }

    println!();
    for message in history {
        println!("You: {}", message.user_message);
        println!("Assistant: {}", message.assistant_response);
        println!();
    }
}
