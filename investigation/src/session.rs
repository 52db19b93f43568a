//! Case session - the context object that owns one playthrough.

use manor::{BoundedText, CaseConfig, CaseFile, ManorMap, TextField};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::accusation::{self, Judgment};
use crate::detective::Detective;
use crate::error::InvestigationResult;
use crate::events::CaseEvent;
use crate::evidence::{ClueLedger, CollectedLog, InsertOutcome, SuspectIndex};
use crate::exploration::Explorer;

/// Unique identifier for a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened when a clue was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueRecorded {
    pub outcome: InsertOutcome,
    /// `false` when the collected log was full.
    pub logged: bool,
    pub suspect: Option<BoundedText>,
}

/// Everything one playthrough owns: the map, the evidence and the config.
#[derive(Debug, Clone)]
pub struct CaseSession {
    pub id: SessionId,
    pub config: CaseConfig,
    pub manor: ManorMap,
    pub ledger: ClueLedger,
    pub log: CollectedLog,
    pub index: SuspectIndex,
}

impl CaseSession {
    /// Start a session for a case file. The suspect index is built from the
    /// file's leads.
    pub fn new(case: CaseFile, config: CaseConfig) -> Self {
        case.warn_unmatched();

        let id = SessionId::new();
        let index = SuspectIndex::from_leads(&case.leads);
        let log = CollectedLog::with_capacity(config.judgment.log_capacity);
        info!(session = %id, rooms = case.manor.room_count(), leads = index.len(), "case session opened");

        Self {
            id,
            manor: case.manor,
            ledger: ClueLedger::new(),
            log,
            index,
            config,
        }
    }

    /// Start a session on the standard seeded case.
    pub fn seeded(config: CaseConfig) -> InvestigationResult<Self> {
        let case = CaseFile::seeded(&config.limits)?;
        Ok(Self::new(case, config))
    }

    /// Add a collected clue to the ledger and the log, and look up its suspect.
    pub fn record_clue(&mut self, clue: BoundedText) -> ClueRecorded {
        let outcome = self.ledger.insert(clue.clone());
        let suspect = self.index.lookup(clue.as_str()).cloned();
        let logged = self.log.push(clue);
        ClueRecorded {
            outcome,
            logged,
            suspect,
        }
    }

    /// Judge an accusation against the evidence gathered so far.
    pub fn judge(&self, accused: &str) -> Judgment {
        accusation::judge(
            accused,
            &self.ledger,
            &self.log,
            &self.index,
            self.config.judgment.support_threshold,
        )
    }

    /// Play the whole case: explore, report the sorted clues, then take and
    /// judge the accusation.
    pub fn run<D: Detective>(&mut self, detective: &mut D) -> InvestigationResult<Judgment> {
        let span = info_span!("case", session = %self.id);
        let _guard = span.enter();

        Explorer::new(self).run(detective)?;

        let clues = self.ledger.in_order().cloned().collect();
        detective.report(&CaseEvent::FinalReport { clues })?;

        if self.ledger.is_empty() {
            detective.report(&CaseEvent::NoEvidence)?;
            return Ok(Judgment::NoEvidence);
        }

        let accused = self.take_accusation(detective)?;
        let judgment = self.judge(accused.as_str());
        if let Judgment::Verdict(verdict) = &judgment {
            detective.report(&CaseEvent::Verdict(verdict.clone()))?;
        }
        Ok(judgment)
    }

    /// Ask for the accused name until it is usable.
    fn take_accusation<D: Detective>(&self, detective: &mut D) -> InvestigationResult<BoundedText> {
        loop {
            let raw = detective.prompt_accused_name()?;
            match self.config.limits.bound(TextField::Accusation, raw.trim()) {
                Ok(name) => return Ok(name),
                Err(err) => {
                    warn!(error = %err, "accusation rejected");
                    detective.report(&CaseEvent::AccusationRejected {
                        reason: err.to_string(),
                    })?;
                }
            }
        }
    }
}
