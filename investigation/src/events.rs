//! Case events - everything the core reports to the player's side.

use manor::{BoundedText, Direction, RoomPath};
use serde::{Deserialize, Serialize};

use crate::accusation::Verdict;

/// Why a move was refused. The detective stays where they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRejection {
    /// The room has no path in that direction.
    NoPath(Direction),
    /// The room is a dead end; only exit is possible.
    DeadEnd,
    /// The input was not a recognized choice.
    Unrecognized,
}

/// Structured notifications emitted during a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CaseEvent {
    RoomEntered {
        room: BoundedText,
        path: RoomPath,
        dead_end: bool,
    },

    ClueCollected {
        room: BoundedText,
        clue: BoundedText,
        /// The ledger already held this text.
        duplicate: bool,
    },

    /// Immediate feedback from the suspect index for a collected clue.
    SuspectHint {
        clue: BoundedText,
        suspect: Option<BoundedText>,
    },

    InvalidMove {
        room: BoundedText,
        reason: MoveRejection,
    },

    /// The collected log was full; the clue is in the ledger but will not
    /// count toward an accusation.
    LogFull { clue: BoundedText, capacity: usize },

    ExplorationEnded {
        room: BoundedText,
        clues_collected: usize,
    },

    /// Every distinct clue, sorted.
    FinalReport { clues: Vec<BoundedText> },

    /// Nothing was collected, so no accusation can be judged.
    NoEvidence,

    /// The accusation text was unusable; the player is asked again.
    AccusationRejected { reason: String },

    Verdict(Verdict),
}

impl CaseEvent {
    /// Short name of the event kind, matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            CaseEvent::RoomEntered { .. } => "room_entered",
            CaseEvent::ClueCollected { .. } => "clue_collected",
            CaseEvent::SuspectHint { .. } => "suspect_hint",
            CaseEvent::InvalidMove { .. } => "invalid_move",
            CaseEvent::LogFull { .. } => "log_full",
            CaseEvent::ExplorationEnded { .. } => "exploration_ended",
            CaseEvent::FinalReport { .. } => "final_report",
            CaseEvent::NoEvidence => "no_evidence",
            CaseEvent::AccusationRejected { .. } => "accusation_rejected",
            CaseEvent::Verdict(_) => "verdict",
        }
    }
}
