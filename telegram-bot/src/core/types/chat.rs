//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat the message arrived in. `chat_type` is the transport's kind label (e.g. `private`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
        }
    }
}
