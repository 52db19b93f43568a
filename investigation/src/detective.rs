//! The player's side of the table.

use manor::{Choice, Room};

use crate::error::InvestigationResult;
use crate::events::CaseEvent;

/// The collaborator that makes decisions and receives reports.
///
/// The core never touches the console; it blocks on these calls instead.
pub trait Detective {
    /// Ask which way to go from `room`.
    fn prompt_direction(&mut self, room: &Room) -> InvestigationResult<Choice>;

    /// Ask who the culprit is.
    fn prompt_accused_name(&mut self) -> InvestigationResult<String>;

    /// Deliver an event to the player.
    fn report(&mut self, event: &CaseEvent) -> InvestigationResult<()>;
}
