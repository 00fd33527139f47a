//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// Sender identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First name, else `@username`, else `there` (as in "Hi there").
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.username) {
            (Some(first), _) if !first.is_empty() => first.clone(),
            (_, Some(username)) => format!("@{}", username),
            _ => "there".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = User {
            id: 1,
            username: Some("slugger".to_string()),
            first_name: Some("Mike".to_string()),
            last_name: None,
        };
        assert_eq!(user.display_name(), "Mike");
        user.first_name = None;
        assert_eq!(user.display_name(), "@slugger");
        user.username = None;
        assert_eq!(user.display_name(), "there");
    }
}
