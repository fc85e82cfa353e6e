//! Chat turns.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One `{role, content}` turn of a chat request.
///
/// # Examples
///
/// ```
/// use scribe_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Hello!");
/// assert_eq!(message.role, Role::User);
///
/// let json = serde_json::to_value(&message).unwrap();
/// assert_eq!(json["role"], "user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
}

impl ChatMessage {
    /// Create a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
