//! Bounded text - the validated string type behind room names, clues and
//! suspect names.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::{ManorError, ManorResult};

/// Which kind of text a bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextField {
    RoomName,
    Clue,
    Suspect,
    Accusation,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextField::RoomName => "room name",
            TextField::Clue => "clue",
            TextField::Suspect => "suspect",
            TextField::Accusation => "accusation",
        };
        f.write_str(name)
    }
}

/// What to do with text longer than its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the first `max` characters.
    #[default]
    Truncate,
    /// Fail with [`ManorError::TextTooLong`].
    Reject,
}

/// Character limits per text field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLimits {
    #[serde(default = "default_room_name_limit")]
    pub room_name: usize,

    #[serde(default = "default_clue_limit")]
    pub clue: usize,

    #[serde(default = "default_suspect_limit")]
    pub suspect: usize,

    #[serde(default = "default_accusation_limit")]
    pub accusation: usize,

    #[serde(default)]
    pub overflow: OverflowPolicy,
}

fn default_room_name_limit() -> usize {
    49
}

fn default_clue_limit() -> usize {
    99
}

fn default_suspect_limit() -> usize {
    49
}

fn default_accusation_limit() -> usize {
    49
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            room_name: default_room_name_limit(),
            clue: default_clue_limit(),
            suspect: default_suspect_limit(),
            accusation: default_accusation_limit(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl TextLimits {
    /// Get the character limit for a field.
    pub fn max_for(&self, field: TextField) -> usize {
        match field {
            TextField::RoomName => self.room_name,
            TextField::Clue => self.clue,
            TextField::Suspect => self.suspect,
            TextField::Accusation => self.accusation,
        }
    }

    /// Validate `raw` as text for `field`, applying the overflow policy.
    pub fn bound(&self, field: TextField, raw: &str) -> ManorResult<BoundedText> {
        BoundedText::new(raw, field, self.max_for(field), self.overflow)
    }
}

/// A non-empty string of at most a configured number of characters.
///
/// Limits count `char`s, so truncation never splits a code point. Text read
/// back through serde is checked for emptiness only, since the limit belongs
/// to the config that produced it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BoundedText(String);

impl BoundedText {
    /// Build bounded text, truncating or rejecting input over `max` characters.
    pub fn new(
        raw: &str,
        field: TextField,
        max: usize,
        overflow: OverflowPolicy,
    ) -> ManorResult<Self> {
        if raw.is_empty() {
            return Err(ManorError::EmptyText { field });
        }

        let len = raw.chars().count();
        if len <= max {
            return Ok(Self(raw.to_string()));
        }

        match overflow {
            OverflowPolicy::Reject => Err(ManorError::TextTooLong { field, len, max }),
            OverflowPolicy::Truncate => {
                if max == 0 {
                    return Err(ManorError::EmptyText { field });
                }
                warn!(%field, len, max, "truncating oversized text");
                Ok(Self(raw.chars().take(max).collect()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BoundedText {
    type Error = ManorError;

    fn try_from(raw: String) -> ManorResult<Self> {
        if raw.is_empty() {
            return Err(ManorError::BlankText);
        }
        Ok(Self(raw))
    }
}

impl From<BoundedText> for String {
    fn from(text: BoundedText) -> Self {
        text.0
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BoundedText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BoundedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
