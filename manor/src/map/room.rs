//! Room definitions.

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::error::ManorResult;
use crate::text::{BoundedText, TextField, TextLimits};

/// A room in the manor. Each room owns its (at most two) child rooms.
///
/// Children can only be attached while the room is being assembled
/// (`with_left` / `with_right` consume the room), so once a tree is handed to
/// [`ManorMap`](super::ManorMap) its shape no longer changes. Only the clue
/// is mutable after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    name: BoundedText,
    clue: Option<BoundedText>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a leaf room, validating the name and clue against `limits`.
    pub fn new(name: &str, clue: Option<&str>, limits: &TextLimits) -> ManorResult<Self> {
        let name = limits.bound(TextField::RoomName, name)?;
        let clue = clue
            .map(|c| limits.bound(TextField::Clue, c))
            .transpose()?;

        Ok(Self {
            name,
            clue,
            left: None,
            right: None,
        })
    }

    /// Attach the left child.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach the right child.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn name(&self) -> &BoundedText {
        &self.name
    }

    /// Peek at the clue without collecting it.
    pub fn clue(&self) -> Option<&BoundedText> {
        self.clue.as_ref()
    }

    /// Check if the room still holds an uncollected clue.
    pub fn has_clue(&self) -> bool {
        self.clue.is_some()
    }

    /// Collect the clue, leaving the room empty.
    pub fn take_clue(&mut self) -> Option<BoundedText> {
        self.clue.take()
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// Get the child in a direction.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    /// A room with no way onward.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
