pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_find_item, parse_plan_date, prompt_chat_message, prompt_list_additions,
    prompt_optional_text, prompt_profile, prompt_yes_no,
};
pub use render::{
    display_chat_history, display_generated_plan, display_plan_list, display_profile,
    display_recipe, display_recipe_list, display_saved_plan,
};
