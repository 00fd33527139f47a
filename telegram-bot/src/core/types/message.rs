//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// An incoming message with user, chat, content, and optional reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
    pub reply_to_message_id: Option<String>,
}

impl Message {
    /// True for `/command` style messages.
    pub fn is_command(&self) -> bool {
        self.content.trim_start().starts_with('/')
    }

    /// Milliseconds between the message being sent and `now`; never negative.
    pub fn delivery_lag_ms(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_milliseconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn message_at(created_at: DateTime<Utc>) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat::private(1),
            content: "/help".to_string(),
            message_type: "text".to_string(),
            created_at,
            reply_to_message_id: None,
        }
    }

    #[test]
    fn test_delivery_lag() {
        let now = Utc::now();
        assert_eq!(message_at(now - Duration::seconds(2)).delivery_lag_ms(now), 2000);
        assert_eq!(message_at(now + Duration::seconds(5)).delivery_lag_ms(now), 0);
        assert!(message_at(now).is_command());
    }
}
