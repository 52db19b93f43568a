//! Exploration states.

use manor::RoomPath;
use serde::{Deserialize, Serialize};

/// Where the detective is in the walk through the manor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorationState {
    /// In a room with at least one way onward.
    Browsing(RoomPath),
    /// In a dead end; only exit is possible.
    Leaf(RoomPath),
    Exited,
}

impl ExplorationState {
    /// State for standing in a room.
    pub fn at(path: RoomPath, dead_end: bool) -> Self {
        if dead_end {
            ExplorationState::Leaf(path)
        } else {
            ExplorationState::Browsing(path)
        }
    }

    /// Path of the current room, if still inside.
    pub fn path(&self) -> Option<&RoomPath> {
        match self {
            ExplorationState::Browsing(path) | ExplorationState::Leaf(path) => Some(path),
            ExplorationState::Exited => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ExplorationState::Leaf(_))
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, ExplorationState::Exited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manor::Direction;

    #[test]
    fn test_state_at() {
        let path = RoomPath::root().child(Direction::Left);

        let browsing = ExplorationState::at(path.clone(), false);
        assert_eq!(browsing, ExplorationState::Browsing(path.clone()));
        assert!(!browsing.is_leaf());

        let leaf = ExplorationState::at(path.clone(), true);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.path(), Some(&path));
    }

    #[test]
    fn test_exited_has_no_path() {
        let state = ExplorationState::Exited;
        assert!(state.is_exited());
        assert!(state.path().is_none());
    }
}
