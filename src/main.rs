use clap::Parser;
use std::path::Path;

use nutritrack_rs::assistant::{self, AssistantContext};
use nutritrack_rs::cli::{Cli, Command};
use nutritrack_rs::error::Result;
use nutritrack_rs::interface::{
    display_chat_history, display_generated_plan, display_plan_list, display_profile,
    display_recipe, display_recipe_list, display_saved_plan, fuzzy_find_item, parse_plan_date,
    prompt_chat_message, prompt_list_additions, prompt_optional_text, prompt_profile,
    prompt_yes_no,
};
use nutritrack_rs::mealdb::MealDbClient;
use nutritrack_rs::planner::generate_plan;
use nutritrack_rs::state::{load_state, save_state, StateManager};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Dashboard => cmd_dashboard(&cli.file),
        Command::Plan {
            goal,
            vegetarian,
            date,
            name,
        } => cmd_plan(&cli.file, goal, vegetarian, date, name),
        Command::Plans { show, delete } => cmd_plans(&cli.file, show, delete),
        Command::Profile { edit, dietary } => cmd_profile(&cli.file, edit, dietary),
        Command::Chat { history } => cmd_chat(&cli.file, history),
        Command::Recipes {
            search,
            id,
            category,
            random,
        } => cmd_recipes(search, id, category, random),
        Command::Tip => {
            println!("{}", assistant::random_tip());
            Ok(())
        }
    }
}

fn load_manager(file_path: &str) -> Result<StateManager> {
    let state = load_state(Path::new(file_path))?;
    Ok(StateManager::new(state))
}

/// Show a summary of the stored profile, plans, and a daily tip.
fn cmd_dashboard(file_path: &str) -> Result<()> {
    let manager = load_manager(file_path)?;
    let profile = manager.profile();

    println!("Welcome, {}!", profile.display_name());
    println!();
    println!("Daily tip: {}", assistant::random_tip());
    println!();

    if !profile.is_filled() {
        println!("Your profile is empty. Run 'profile --edit' to get personalized plans.");
    }

    println!("Saved meal plans: {}", manager.plans().len());
    println!("Chat messages: {}", manager.chat_history().len());
    println!();
    println!("Try 'plan' to generate a meal plan, or 'chat' for nutrition advice.");

    Ok(())
}

/// Generate a meal plan from the stored profile and optionally save it.
fn cmd_plan(
    file_path: &str,
    goal: Option<String>,
    vegetarian_flag: bool,
    date: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    let health_goal = goal.or_else(|| manager.profile().health_goal.clone());
    let vegetarian = vegetarian_flag || manager.prefers_vegetarian();

    let plan_date = match date {
        Some(text) => parse_plan_date(&text)?,
        None => chrono::Local::now().date_naive(),
    };

    if let Some(goal) = &health_goal {
        println!("Planning for goal: {}", goal);
    }
    if vegetarian {
        println!("Restricting to vegetarian meals.");
    }

    let generated = generate_plan(health_goal.as_deref(), Some(vegetarian));
    display_generated_plan(&generated);

    if generated.is_empty() {
        return Ok(());
    }

    let save = prompt_yes_no("Save this plan?", true)?;
    if save {
        let id = manager.create_plan(plan_date, name, &generated);
        save_state(Path::new(file_path), manager.state())?;

        if let Some(plan) = manager.plan(&id) {
            display_saved_plan(plan);
        }
        println!("Plan saved.");
    }

    Ok(())
}

/// List, show, or delete saved meal plans.
fn cmd_plans(file_path: &str, show: Option<String>, delete: Option<String>) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if let Some(id) = show {
        match manager.plan(&id) {
            Some(plan) => display_saved_plan(plan),
            None => println!("No plan found with id {}", id),
        }
        return Ok(());
    }

    if let Some(id) = delete {
        manager.delete_plan(&id)?;
        save_state(Path::new(file_path), manager.state())?;
        println!("Plan {} deleted.", id);
        return Ok(());
    }

    display_plan_list(&manager.plans());
    Ok(())
}

/// View or edit the profile and dietary preferences.
fn cmd_profile(file_path: &str, edit: bool, dietary: bool) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if edit {
        let updated = prompt_profile(manager.profile())?;
        manager.update_profile(updated);
        save_state(Path::new(file_path), manager.state())?;
        println!("Profile saved.");
        println!();
    }

    if dietary {
        manage_dietary_preferences(&mut manager)?;
        save_state(Path::new(file_path), manager.state())?;
        println!("Dietary preferences saved.");
        println!();
    }

    display_profile(
        manager.profile(),
        manager.restrictions(),
        manager.disliked_ingredients(),
    );

    Ok(())
}

/// Add and remove dietary restrictions and disliked ingredients.
fn manage_dietary_preferences(manager: &mut StateManager) -> Result<()> {
    if !manager.restrictions().is_empty() {
        println!("Current restrictions: {}", manager.restrictions().join(", "));
    }

    for item in prompt_list_additions("dietary restriction")? {
        if manager.add_restriction(&item) {
            println!("Added: {}", item);
        } else {
            println!("Already listed: {}", item);
        }
    }

    while !manager.restrictions().is_empty() {
        let input =
            prompt_optional_text("Remove a restriction (or press Enter to skip)", None)?;
        let Some(input) = input else { break };

        if let Some(found) = fuzzy_find_item(manager.restrictions(), &input)? {
            manager.remove_restriction(&found);
            println!("Removed: {}", found);
        }
    }

    if !manager.disliked_ingredients().is_empty() {
        println!(
            "Current disliked ingredients: {}",
            manager.disliked_ingredients().join(", ")
        );
    }

    for item in prompt_list_additions("disliked ingredient")? {
        if manager.add_disliked_ingredient(&item) {
            println!("Added: {}", item);
        } else {
            println!("Already listed: {}", item);
        }
    }

    while !manager.disliked_ingredients().is_empty() {
        let input =
            prompt_optional_text("Remove a disliked ingredient (or press Enter to skip)", None)?;
        let Some(input) = input else { break };

        if let Some(found) = fuzzy_find_item(manager.disliked_ingredients(), &input)? {
            manager.remove_disliked_ingredient(&found);
            println!("Removed: {}", found);
        }
    }

    Ok(())
}

/// Chat with the scripted nutrition assistant.
fn cmd_chat(file_path: &str, history: bool) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if history {
        display_chat_history(manager.chat_history());
        return Ok(());
    }

    let profile = manager.profile().clone();
    let disliked = manager.disliked_ingredients().to_vec();
    let context = AssistantContext {
        profile: &profile,
        disliked_ingredients: &disliked,
        vegetarian: manager.prefers_vegetarian(),
    };

    if manager.chat_history().is_empty() {
        println!("{}", assistant::welcome_message(&context));
    } else {
        println!("Welcome back! Ask about meal suggestions or nutrition advice.");
    }
    println!();

    while let Some(message) = prompt_chat_message()? {
        let response = assistant::generate_response(&message, &context);
        println!("Assistant: {}", response);
        println!();

        manager.append_chat(&message, &response);
        save_state(Path::new(file_path), manager.state())?;
    }

    Ok(())
}

/// Query TheMealDB for recipes.
fn cmd_recipes(
    search: Option<String>,
    id: Option<String>,
    category: Option<String>,
    random: bool,
) -> Result<()> {
    let client = MealDbClient::new();

    if let Some(name) = search {
        let recipes = client.search_by_name(&name)?;
        display_recipe_list(&recipes);
        return Ok(());
    }

    if let Some(id) = id {
        match client.lookup_by_id(&id)? {
            Some(recipe) => display_recipe(&recipe),
            None => println!("No recipe found with id {}", id),
        }
        return Ok(());
    }

    if let Some(category) = category {
        let recipes = client.by_category(&category)?;
        display_recipe_list(&recipes);
        return Ok(());
    }

    if random {
        match client.random_meal()? {
            Some(recipe) => display_recipe(&recipe),
            None => println!("No recipe returned."),
        }
        return Ok(());
    }

    println!("Please specify a query:");
    println!("  --search <NAME>      Search recipes by name");
    println!("  --id <ID>            Look up a recipe by id");
    println!("  --category <NAME>    List recipes in a category");
    println!("  --random             Fetch a random recipe");

    Ok(())
}
