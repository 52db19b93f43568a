//! Testing utilities.
//!
//! `ScriptedDetective` plays a case from fixed lists of choices and
//! accusations and records every event it is sent, for deterministic tests
//! without a console.

use manor::{Choice, Room};

use crate::error::{InvestigationError, InvestigationResult};
use crate::events::CaseEvent;
use crate::detective::Detective;

/// A detective that follows a script.
#[derive(Debug, Default)]
pub struct ScriptedDetective {
    /// Choices to make, in order. When they run out the detective exits.
    choices: Vec<Choice>,
    next_choice: usize,
    /// Accusations to make, in order.
    accusations: Vec<String>,
    next_accusation: usize,
    /// Names of the rooms the detective was prompted in.
    prompted_rooms: Vec<String>,
    events: Vec<CaseEvent>,
}

impl ScriptedDetective {
    /// Create a detective with scripted choices and accusations.
    pub fn new(choices: Vec<Choice>, accusations: Vec<String>) -> Self {
        Self {
            choices,
            accusations,
            ..Default::default()
        }
    }

    /// Every event reported so far.
    pub fn events(&self) -> &[CaseEvent] {
        &self.events
    }

    /// Events of one kind, by [`CaseEvent::kind`].
    pub fn events_of(&self, kind: &str) -> Vec<&CaseEvent> {
        self.events.iter().filter(|e| e.kind() == kind).collect()
    }

    /// Rooms in which a direction was asked for.
    pub fn prompted_rooms(&self) -> &[String] {
        &self.prompted_rooms
    }

    /// How many times an accusation was asked for.
    pub fn accusations_asked(&self) -> usize {
        self.next_accusation
    }
}

impl Detective for ScriptedDetective {
    fn prompt_direction(&mut self, room: &Room) -> InvestigationResult<Choice> {
        self.prompted_rooms.push(room.name().to_string());
        let choice = self.choices.get(self.next_choice).copied().unwrap_or(Choice::Exit);
        self.next_choice += 1;
        Ok(choice)
    }

    fn prompt_accused_name(&mut self) -> InvestigationResult<String> {
        let name = self
            .accusations
            .get(self.next_accusation)
            .cloned()
            .ok_or(InvestigationError::InputClosed);
        self.next_accusation += 1;
        name
    }

    fn report(&mut self, event: &CaseEvent) -> InvestigationResult<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
