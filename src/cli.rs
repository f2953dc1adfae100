use clap::{Parser, Subcommand};

/// NutriTrack, a diet tracking CLI for meal planning, recipe lookup, and
/// nutrition advice.
#[derive(Parser, Debug)]
#[command(name = "nutritrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the application state JSON file.
    #[arg(short, long, default_value = "diet_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a summary of your profile, plans, and a daily tip.
    Dashboard,

    /// Generate a meal plan from your profile and save it.
    Plan {
        /// Override the health goal stored in your profile.
        #[arg(long)]
        goal: Option<String>,

        /// Restrict selection to vegetarian meals.
        #[arg(long)]
        vegetarian: bool,

        /// Date the plan is for (YYYY-MM-DD, defaults to today).
        #[arg(long)]
        date: Option<String>,

        /// Name for the saved plan.
        #[arg(long)]
        name: Option<String>,
    },

    /// List saved meal plans, or show or delete one by id.
    Plans {
        /// Show a single plan in detail.
        #[arg(long, value_name = "ID")]
        show: Option<String>,

        /// Delete a plan.
        #[arg(long, value_name = "ID")]
        delete: Option<String>,
    },

    /// View or edit your profile and dietary preferences.
    Profile {
        /// Edit profile fields interactively.
        #[arg(long)]
        edit: bool,

        /// Manage dietary restrictions and disliked ingredients.
        #[arg(long)]
        dietary: bool,
    },

    /// Chat with the nutrition assistant.
    Chat {
        /// Print the stored chat history and exit.
        #[arg(long)]
        history: bool,
    },

    /// Search TheMealDB for recipes.
    Recipes {
        /// Search recipes by name.
        #[arg(long, value_name = "NAME")]
        search: Option<String>,

        /// Look up a recipe by its numeric id.
        #[arg(long, value_name = "ID")]
        id: Option<String>,

        /// List recipes in a category.
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Fetch a random recipe.
        #[arg(long)]
        random: bool,
    },

    /// Print a daily nutrition tip.
    Tip,
}

impl Default for Command {
    fn default() -> Self {
        Command::Dashboard
    }
}
