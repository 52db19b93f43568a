//! Exploration - walking the manor and collecting clues.
//!
//! The explorer is a small state machine:
//! 1. **Start**: enter the root room (`Browsing`, or `Leaf` for a one-room manor)
//! 2. **Enter**: report the room, collect its clue if it still has one
//! 3. **Choose**: ask the detective for left, right or exit
//! 4. **Move**: go to the chosen child, or report an invalid move and stay
//! 5. **Exit**: the only way out, from any room
//!
//! Every successful move goes one level deeper into a finite tree, so a walk
//! makes at most `depth` moves.

mod state;

pub use state::*;

use manor::{BoundedText, Choice, Direction, ManorError, Room, RoomPath};
use tracing::{debug, info};

use crate::detective::Detective;
use crate::error::InvestigationResult;
use crate::events::{CaseEvent, MoveRejection};
use crate::evidence::InsertOutcome;
use crate::session::CaseSession;

/// Drives one walk through the manor of a session.
pub struct Explorer<'s> {
    session: &'s mut CaseSession,
    state: ExplorationState,
    started: bool,
    moves: usize,
    clues_collected: usize,
}

impl<'s> Explorer<'s> {
    /// Create an explorer standing at the manor entrance.
    pub fn new(session: &'s mut CaseSession) -> Self {
        let dead_end = session.manor.root().is_leaf();
        Self {
            session,
            state: ExplorationState::at(RoomPath::root(), dead_end),
            started: false,
            moves: 0,
            clues_collected: 0,
        }
    }

    pub fn state(&self) -> &ExplorationState {
        &self.state
    }

    /// Successful moves made so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Clues picked up during this walk.
    pub fn clues_collected(&self) -> usize {
        self.clues_collected
    }

    /// Enter the root room. Does nothing after the first call.
    pub fn start<D: Detective>(&mut self, detective: &mut D) -> InvestigationResult<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.enter(RoomPath::root(), detective)
    }

    /// Walk until the detective exits. Returns the number of moves made.
    pub fn run<D: Detective>(mut self, detective: &mut D) -> InvestigationResult<usize> {
        self.start(detective)?;

        while let Some(path) = self.state.path().cloned() {
            let room = self.room(&path)?;
            let choice = detective.prompt_direction(room)?;
            self.step(choice, detective)?;
        }

        Ok(self.moves)
    }

    /// Apply one choice. Invalid choices leave the state unchanged.
    pub fn step<D: Detective>(
        &mut self,
        choice: Choice,
        detective: &mut D,
    ) -> InvestigationResult<&ExplorationState> {
        self.start(detective)?;

        let Some(path) = self.state.path().cloned() else {
            return Ok(&self.state);
        };

        let name = self.room(&path)?.name().clone();

        match choice {
            Choice::Exit => {
                self.state = ExplorationState::Exited;
                info!(room = %name, moves = self.moves, clues = self.clues_collected, "exploration ended");
                detective.report(&CaseEvent::ExplorationEnded {
                    room: name,
                    clues_collected: self.clues_collected,
                })?;
            }
            Choice::Invalid => self.reject(name, MoveRejection::Unrecognized, detective)?,
            Choice::Left => self.advance(path, name, Direction::Left, detective)?,
            Choice::Right => self.advance(path, name, Direction::Right, detective)?,
        }

        Ok(&self.state)
    }

    fn advance<D: Detective>(
        &mut self,
        path: RoomPath,
        name: BoundedText,
        direction: Direction,
        detective: &mut D,
    ) -> InvestigationResult<()> {
        if self.state.is_leaf() {
            self.reject(name, MoveRejection::DeadEnd, detective)?;
        } else if self.room(&path)?.child(direction).is_none() {
            self.reject(name, MoveRejection::NoPath(direction), detective)?;
        } else {
            self.moves += 1;
            self.enter(path.child(direction), detective)?;
        }
        Ok(())
    }

    fn room(&self, path: &RoomPath) -> InvestigationResult<&Room> {
        self.session
            .manor
            .room_at(path)
            .ok_or_else(|| ManorError::InvalidPath(path.to_string()).into())
    }

    fn enter<D: Detective>(&mut self, path: RoomPath, detective: &mut D) -> InvestigationResult<()> {
        let room = self.room(&path)?;
        let name = room.name().clone();
        let dead_end = room.is_leaf();

        debug!(room = %name, %path, dead_end, "entered room");
        detective.report(&CaseEvent::RoomEntered {
            room: name.clone(),
            path: path.clone(),
            dead_end,
        })?;

        if let Some(clue) = self.session.manor.take_clue_at(&path)? {
            self.collect(name, clue, detective)?;
        }

        self.state = ExplorationState::at(path, dead_end);
        Ok(())
    }

    fn collect<D: Detective>(
        &mut self,
        room: BoundedText,
        clue: BoundedText,
        detective: &mut D,
    ) -> InvestigationResult<()> {
        let recorded = self.session.record_clue(clue.clone());
        self.clues_collected += 1;

        info!(
            room = %room,
            clue = %clue,
            suspect = recorded.suspect.as_ref().map(|s| s.as_str()).unwrap_or("-"),
            "clue collected"
        );

        detective.report(&CaseEvent::ClueCollected {
            room,
            clue: clue.clone(),
            duplicate: recorded.outcome == InsertOutcome::Duplicate,
        })?;
        detective.report(&CaseEvent::SuspectHint {
            clue: clue.clone(),
            suspect: recorded.suspect,
        })?;

        if !recorded.logged {
            detective.report(&CaseEvent::LogFull {
                clue,
                capacity: self.session.log.capacity(),
            })?;
        }
        Ok(())
    }

    fn reject<D: Detective>(
        &mut self,
        room: BoundedText,
        reason: MoveRejection,
        detective: &mut D,
    ) -> InvestigationResult<()> {
        debug!(room = %room, ?reason, "invalid move");
        detective.report(&CaseEvent::InvalidMove { room, reason })
    }
}
