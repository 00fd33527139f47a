//! Recording [`Bot`] for tests: keeps every message sent instead of calling Telegram.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use telegram_bot::{Bot, Chat, Message, Result, User};

#[derive(Debug, Clone, Default)]
pub struct MockBot {
    sent: Arc<Mutex<Vec<(i64, String)>>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// (chat id, text) pairs in send order.
    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, text)| text.clone())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }
}

/// Private-chat text message from user 123.
pub fn text_message(content: &str) -> Message {
    message_from(123, content)
}

pub fn message_from(user_id: i64, content: &str) -> Message {
    Message {
        id: format!("msg_{}", user_id),
        user: User {
            id: user_id,
            username: Some("bettor".to_string()),
            first_name: Some("Sam".to_string()),
            last_name: None,
        },
        chat: Chat::private(456),
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}
