//! The sealed manor tree and path-based access to its rooms.

use serde::{Deserialize, Serialize};

use super::{Direction, Room, RoomPath};
use crate::error::{ManorError, ManorResult};
use crate::text::BoundedText;

/// The whole manor, rooted at the entrance.
///
/// The map hands out shared references to any room, but the only mutation
/// it allows is collecting a clue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManorMap {
    root: Room,
}

impl ManorMap {
    /// Seal an assembled room tree into a map.
    pub fn new(root: Room) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Get the room at a path.
    pub fn room_at(&self, path: &RoomPath) -> Option<&Room> {
        path.steps()
            .iter()
            .try_fold(&self.root, |room, step| room.child(*step))
    }

    fn room_at_mut(&mut self, path: &RoomPath) -> Option<&mut Room> {
        let mut room = &mut self.root;
        for step in path.steps() {
            room = room.child_mut(*step)?;
        }
        Some(room)
    }

    /// Collect the clue in the room at `path`.
    ///
    /// Returns `Ok(None)` when the room holds no clue (or it was already
    /// collected).
    pub fn take_clue_at(&mut self, path: &RoomPath) -> ManorResult<Option<BoundedText>> {
        self.room_at_mut(path)
            .map(Room::take_clue)
            .ok_or_else(|| ManorError::InvalidPath(path.to_string()))
    }

    /// Number of branches on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        fn depth_of(room: &Room) -> usize {
            let left = room.left().map(|r| 1 + depth_of(r)).unwrap_or(0);
            let right = room.right().map(|r| 1 + depth_of(r)).unwrap_or(0);
            left.max(right)
        }
        depth_of(&self.root)
    }

    /// Total number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    /// Walk every room in pre-order (room, then left, then right).
    pub fn rooms(&self) -> impl Iterator<Item = (RoomPath, &Room)> {
        let mut stack = vec![(RoomPath::root(), &self.root)];
        std::iter::from_fn(move || {
            let (path, room) = stack.pop()?;
            if let Some(right) = room.right() {
                stack.push((path.child(Direction::Right), right));
            }
            if let Some(left) = room.left() {
                stack.push((path.child(Direction::Left), left));
            }
            Some((path, room))
        })
    }

    /// Clues still lying in rooms, in pre-order.
    pub fn remaining_clues(&self) -> Vec<&BoundedText> {
        self.rooms().filter_map(|(_, room)| room.clue()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TextLimits;

    fn room(name: &str, clue: Option<&str>) -> Room {
        Room::new(name, clue, &TextLimits::default()).unwrap()
    }

    fn small_map() -> ManorMap {
        let root = room("Hall", None)
            .with_left(room("Estar", Some("pista A")).with_left(room("Cozinha", Some("pista B"))))
            .with_right(room("Jantar", None));
        ManorMap::new(root)
    }

    #[test]
    fn test_room_at() {
        let map = small_map();

        assert_eq!(map.room_at(&RoomPath::root()).unwrap().name(), "Hall");

        let kitchen = RoomPath::from(vec![Direction::Left, Direction::Left]);
        assert_eq!(map.room_at(&kitchen).unwrap().name(), "Cozinha");

        let missing = RoomPath::from(vec![Direction::Right, Direction::Left]);
        assert!(map.room_at(&missing).is_none());
    }

    #[test]
    fn test_take_clue_at() {
        let mut map = small_map();
        let path = RoomPath::root().child(Direction::Left);

        let clue = map.take_clue_at(&path).unwrap();
        assert_eq!(clue.unwrap(), "pista A");
        assert!(!map.room_at(&path).unwrap().has_clue());
        assert!(map.take_clue_at(&path).unwrap().is_none());
    }

    #[test]
    fn test_take_clue_at_invalid_path() {
        let mut map = small_map();
        let path = RoomPath::root().child(Direction::Right).child(Direction::Right);

        assert!(matches!(map.take_clue_at(&path), Err(ManorError::InvalidPath(_))));
    }

    #[test]
    fn test_depth_and_count() {
        let map = small_map();
        assert_eq!(map.depth(), 2);
        assert_eq!(map.room_count(), 4);

        let single = ManorMap::new(room("Hall", None));
        assert_eq!(single.depth(), 0);
        assert_eq!(single.room_count(), 1);
    }

    #[test]
    fn test_rooms_pre_order() {
        let map = small_map();
        let names: Vec<_> = map.rooms().map(|(_, r)| r.name().as_str()).collect();
        assert_eq!(names, vec!["Hall", "Estar", "Cozinha", "Jantar"]);
    }

    #[test]
    fn test_remaining_clues() {
        let mut map = small_map();
        assert_eq!(map.remaining_clues().len(), 2);

        map.take_clue_at(&RoomPath::root().child(Direction::Left)).unwrap();
        let remaining = map.remaining_clues();
        assert_eq!(remaining.len(), 1);
        assert_eq!(*remaining[0], "pista B");
    }
}
