//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a chat turn.
///
/// # Examples
///
/// ```
/// use scribe_core::Role;
///
/// assert_eq!(Role::System.to_string(), "system");
/// assert_eq!("user".parse::<Role>().unwrap(), Role::User);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the whole exchange
    System,
    /// Turns written by the caller
    User,
    /// Turns produced by the model
    Assistant,
}
