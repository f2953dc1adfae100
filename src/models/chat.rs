use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One exchange with the nutrition assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub user_message: String,
    pub assistant_response: String,
    pub created_at: DateTime<Utc>,
}
