//! The case file - the seeded manor and the clue-to-suspect leads.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ManorResult;
use crate::map::{ManorMap, Room};
use crate::text::{BoundedText, TextField, TextLimits};

/// A seeded pairing of clue text with the suspect it implicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectLead {
    pub clue: BoundedText,
    pub suspect: BoundedText,
}

impl SuspectLead {
    /// Create a lead, validating both texts against `limits`.
    pub fn new(clue: &str, suspect: &str, limits: &TextLimits) -> ManorResult<Self> {
        Ok(Self {
            clue: limits.bound(TextField::Clue, clue)?,
            suspect: limits.bound(TextField::Suspect, suspect)?,
        })
    }
}

/// Clue texts shared by the manor and the leads.
///
/// Both sides must use the exact same text: suspect lookups compare keys
/// byte for byte.
pub mod clues {
    pub const STOPPED_CLOCK: &str = "O relógio parou às 3:15";
    pub const DUSTY_FLOOR: &str = "Havia poeira no piso";
    pub const BOAT_NOTE: &str = "O bilhete fala sobre um barco";
    pub const TORN_LETTER: &str = "A carta estava rasgada";
    pub const CYANIDE_VIAL: &str = "O frasco continha veneno cianídrico";
    pub const MUDDY_FOOTPRINTS: &str = "Pegadas de lama perto do portão";
}

/// Suspect names used by the seeded leads.
pub mod suspects {
    pub const SMITH: &str = "Sr. Smith";
    pub const BROWN: &str = "Sra. Brown";
}

/// The manor together with every lead the suspect index is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub manor: ManorMap,
    pub leads: Vec<SuspectLead>,
}

impl CaseFile {
    /// Create a case file from an assembled manor and its leads.
    pub fn new(manor: ManorMap, leads: Vec<SuspectLead>) -> Self {
        Self { manor, leads }
    }

    /// Build the standard Detective Quest case.
    ///
    /// ```text
    /// Hall de Entrada
    /// ├── Sala de Estar            (relógio)
    /// │   └── Cozinha              (poeira)
    /// │       └── Jardim dos Fundos (pegadas)
    /// └── Sala de Jantar           (carta)
    ///     ├── Biblioteca           (bilhete)
    ///     │   └── Quarto de Hospedes
    ///     └── Patio Central        (frasco)
    /// ```
    pub fn seeded(limits: &TextLimits) -> ManorResult<Self> {
        use self::clues::*;
        use self::suspects::*;

        let room = |name: &str, clue: Option<&str>| Room::new(name, clue, limits);

        let kitchen = room("Cozinha", Some(DUSTY_FLOOR))?
            .with_left(room("Jardim dos Fundos", Some(MUDDY_FOOTPRINTS))?);
        let living_room = room("Sala de Estar", Some(STOPPED_CLOCK))?.with_left(kitchen);

        let library = room("Biblioteca", Some(BOAT_NOTE))?
            .with_left(room("Quarto de Hospedes", None)?);
        let dining_room = room("Sala de Jantar", Some(TORN_LETTER))?
            .with_left(library)
            .with_right(room("Patio Central", Some(CYANIDE_VIAL))?);

        let hall = room("Hall de Entrada", None)?
            .with_left(living_room)
            .with_right(dining_room);

        let leads = [
            (STOPPED_CLOCK, SMITH),
            (DUSTY_FLOOR, SMITH),
            (BOAT_NOTE, BROWN),
            (TORN_LETTER, BROWN),
            (CYANIDE_VIAL, BROWN),
        ]
        .into_iter()
        .map(|(clue, suspect)| SuspectLead::new(clue, suspect, limits))
        .collect::<ManorResult<Vec<_>>>()?;

        let case = Self::new(ManorMap::new(hall), leads);
        debug!(
            rooms = case.manor.room_count(),
            leads = case.leads.len(),
            "seeded case file"
        );
        Ok(case)
    }

    /// Room clues that no lead mentions, so they can never implicate anyone.
    ///
    /// A clue and a lead that differ only by punctuation (a trailing period,
    /// say) show up here: matching is exact.
    pub fn unmatched_clues(&self) -> Vec<&BoundedText> {
        self.manor
            .remaining_clues()
            .into_iter()
            .filter(|clue| !self.leads.iter().any(|lead| &lead.clue == *clue))
            .collect()
    }

    /// Log a warning for each clue without a lead.
    pub fn warn_unmatched(&self) {
        for clue in self.unmatched_clues() {
            warn!(%clue, "clue has no suspect lead");
        }
    }
}
