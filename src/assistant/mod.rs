pub mod responses;
pub mod tips;

pub use responses::{generate_response, welcome_message, AssistantContext};
pub use tips::{random_tip, DAILY_TIPS};
