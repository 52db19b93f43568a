//! Accusation judgment - tallying collected clues against the accused.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::evidence::{ClueLedger, CollectedLog, SuspectIndex};

/// Whether the accusation holds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

/// The result of weighing an accusation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub accused: String,
    /// Collected clues whose suspect matches the accused.
    pub support_count: usize,
    pub threshold: usize,
    pub outcome: Outcome,
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// How a case closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "judgment", rename_all = "snake_case")]
pub enum Judgment {
    /// The ledger was empty; nothing was judged.
    NoEvidence,
    Verdict(Verdict),
}

/// Compare suspect names ignoring case and surrounding whitespace.
pub fn same_suspect(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Count the logged clues that implicate `accused` and decide the outcome.
///
/// Clues with no suspect in the index support nobody. Support at or above
/// `threshold` is a success.
pub fn evaluate(
    accused: &str,
    log: &CollectedLog,
    index: &SuspectIndex,
    threshold: usize,
) -> Verdict {
    let support_count = log
        .iter()
        .filter_map(|clue| index.lookup(clue.as_str()))
        .filter(|suspect| same_suspect(suspect.as_str(), accused))
        .count();

    let outcome = if support_count >= threshold {
        Outcome::Success
    } else {
        Outcome::Failure
    };

    Verdict {
        accused: accused.trim().to_string(),
        support_count,
        threshold,
        outcome,
    }
}

/// Judge an accusation, skipping the tally entirely when the ledger is empty.
pub fn judge(
    accused: &str,
    ledger: &ClueLedger,
    log: &CollectedLog,
    index: &SuspectIndex,
    threshold: usize,
) -> Judgment {
    if ledger.is_empty() {
        info!("no evidence collected, accusation not judged");
        return Judgment::NoEvidence;
    }

    let verdict = evaluate(accused, log, index, threshold);
    info!(
        accused = %verdict.accused,
        support = verdict.support_count,
        outcome = ?verdict.outcome,
        "accusation judged"
    );
    Judgment::Verdict(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use manor::{BoundedText, OverflowPolicy, TextField};

    const CLOCK: &str = "O relógio parou às 3:15";
    const DUST: &str = "Havia poeira no piso";
    const NOTE: &str = "O bilhete fala sobre um barco";
    const LETTER: &str = "A carta estava rasgada";
    const VIAL: &str = "O frasco continha veneno cianídrico";

    fn text(s: &str) -> BoundedText {
        BoundedText::new(s, TextField::Clue, 99, OverflowPolicy::Reject).unwrap()
    }

    fn seeded_index() -> SuspectIndex {
        let mut index = SuspectIndex::new();
        for (clue, suspect) in [
            (CLOCK, "Sr. Smith"),
            (DUST, "Sr. Smith"),
            (NOTE, "Sra. Brown"),
            (LETTER, "Sra. Brown"),
            (VIAL, "Sra. Brown"),
        ] {
            index.insert(text(clue), text(suspect));
        }
        index
    }

    fn log_of(clues: &[&str]) -> CollectedLog {
        let mut log = CollectedLog::with_capacity(16);
        for clue in clues {
            log.push(text(clue));
        }
        log
    }

    fn ledger_of(clues: &[&str]) -> ClueLedger {
        let mut ledger = ClueLedger::new();
        for clue in clues {
            ledger.insert(text(clue));
        }
        ledger
    }

    #[test]
    fn test_three_supporting_clues() {
        let verdict = evaluate("Sra. Brown", &log_of(&[NOTE, LETTER, VIAL]), &seeded_index(), 2);
        assert_eq!(verdict.support_count, 3);
        assert_eq!(verdict.outcome, Outcome::Success);
    }

    #[test]
    fn test_threshold_boundary_is_success() {
        let verdict = evaluate("Sr. Smith", &log_of(&[CLOCK, DUST]), &seeded_index(), 2);
        assert_eq!(verdict.support_count, 2);
        assert!(verdict.is_success());
    }

    #[test]
    fn test_single_clue_fails() {
        let verdict = evaluate("Sr. Smith", &log_of(&[CLOCK, NOTE, LETTER]), &seeded_index(), 2);
        assert_eq!(verdict.support_count, 1);
        assert_eq!(verdict.outcome, Outcome::Failure);
    }

    #[test]
    fn test_name_match_ignores_case() {
        let verdict = evaluate("  sra. BROWN ", &log_of(&[NOTE, VIAL]), &seeded_index(), 2);
        assert_eq!(verdict.support_count, 2);
        assert_eq!(verdict.accused, "sra. BROWN");
        assert!(verdict.is_success());
    }

    #[test]
    fn test_unknown_suspect_and_unmapped_clues() {
        let log = log_of(&[NOTE, "Pegadas de lama perto do portão"]);
        let verdict = evaluate("Mordomo", &log, &seeded_index(), 2);
        assert_eq!(verdict.support_count, 0);
        assert_eq!(verdict.outcome, Outcome::Failure);
    }

    #[test]
    fn test_custom_threshold() {
        let verdict = evaluate("Sra. Brown", &log_of(&[NOTE, LETTER]), &seeded_index(), 3);
        assert_eq!(verdict.outcome, Outcome::Failure);
    }

    #[test]
    fn test_empty_ledger_is_no_evidence() {
        let judgment = judge("Sra. Brown", &ClueLedger::new(), &log_of(&[]), &seeded_index(), 2);
        assert_eq!(judgment, Judgment::NoEvidence);
    }

    #[test]
    fn test_judge_with_evidence() {
        let clues = [NOTE, LETTER, VIAL];
        let judgment = judge("Sra. Brown", &ledger_of(&clues), &log_of(&clues), &seeded_index(), 2);

        match judgment {
            Judgment::Verdict(verdict) => assert_eq!(verdict.support_count, 3),
            Judgment::NoEvidence => panic!("expected a verdict"),
        }
    }
}
