//! The manor map - a fixed binary tree of rooms.

mod tree;
mod room;

pub use tree::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A branch out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// One player decision at a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Left,
    Right,
    Exit,
    /// Unrecognized input.
    Invalid,
}

impl Choice {
    /// The direction this choice moves in, if it is a move.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Choice::Left => Some(Direction::Left),
            Choice::Right => Some(Direction::Right),
            Choice::Exit | Choice::Invalid => None,
        }
    }
}

/// Address of a room: the branches taken from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoomPath(Vec<Direction>);

impl RoomPath {
    /// The path of the root room.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path by one branch.
    pub fn child(&self, direction: Direction) -> Self {
        let mut steps = self.0.clone();
        steps.push(direction);
        Self(steps)
    }

    pub fn steps(&self) -> &[Direction] {
        &self.0
    }

    /// Number of branches taken; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Direction>> for RoomPath {
    fn from(steps: Vec<Direction>) -> Self {
        Self(steps)
    }
}

impl fmt::Display for RoomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for step in &self.0 {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}
