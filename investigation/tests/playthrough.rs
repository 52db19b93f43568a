//! Full playthroughs of the seeded case, driven through the public API.

use investigation::console::{ConsoleDetective, OutputFormat};
use investigation::testing::ScriptedDetective;
use investigation::{CaseEvent, CaseSession, Judgment, Outcome};
use manor::{clues, CaseConfig, Choice, OverflowPolicy};
use std::io::Cursor;

fn play(input: &str) -> (Judgment, String) {
    let mut session = CaseSession::seeded(CaseConfig::default()).unwrap();
    let mut detective = ConsoleDetective::new(Cursor::new(input.to_string()), Vec::new(), OutputFormat::Text);
    let judgment = session.run(&mut detective).unwrap();
    let output = String::from_utf8(detective.into_output()).unwrap();
    (judgment, output)
}

#[test]
fn test_left_wing_convicts_smith() {
    // Hall -> Sala de Estar -> Cozinha -> Jardim dos Fundos, then exit.
    let (judgment, output) = play("e\ne\ne\ns\nSr. Smith\n");

    match judgment {
        Judgment::Verdict(verdict) => {
            assert_eq!(verdict.support_count, 2);
            assert_eq!(verdict.outcome, Outcome::Success);
        }
        Judgment::NoEvidence => panic!("expected a verdict"),
    }

    assert!(output.contains("Você está em: **Jardim dos Fundos**"));
    assert!(output.contains("Nenhum suspeito ligado a essa pista."));
    assert!(output.contains("Acusação confirmada! Sr. Smith"));
}

#[test]
fn test_wrong_suspect_fails() {
    let (judgment, output) = play("e\ne\ns\nSra. Brown\n");

    assert!(matches!(
        judgment,
        Judgment::Verdict(ref v) if v.support_count == 0 && v.outcome == Outcome::Failure
    ));
    assert!(output.contains("Evidências insuficientes contra Sra. Brown"));
}

#[test]
fn test_invalid_input_reprompts() {
    // "x" is unrecognized and Sala de Estar has no right-hand path.
    let (judgment, output) = play("x\ne\nd\ns\nsr. smith\n");

    assert!(output.contains("Opção inválida"));
    assert!(output.contains("Não há caminho para a direita"));
    assert!(matches!(judgment, Judgment::Verdict(ref v) if v.support_count == 1));
}

#[test]
fn test_immediate_exit_has_no_evidence() {
    let (judgment, output) = play("s\n");

    assert_eq!(judgment, Judgment::NoEvidence);
    assert!(output.contains("(nenhuma)"));
    assert!(output.contains("Sem pistas, não é possível acusar ninguém."));
}

#[test]
fn test_final_report_is_sorted() {
    let mut session = CaseSession::seeded(CaseConfig::default()).unwrap();
    let mut detective = ScriptedDetective::new(
        vec![Choice::Right, Choice::Left, Choice::Left, Choice::Exit],
        vec!["Sra. Brown".to_string()],
    );

    session.run(&mut detective).unwrap();

    let reports = detective.events_of("final_report");
    assert_eq!(reports.len(), 1);
    match reports[0] {
        CaseEvent::FinalReport { clues: found } => {
            let found: Vec<_> = found.iter().map(|c| c.as_str()).collect();
            assert_eq!(found, vec![clues::TORN_LETTER, clues::BOAT_NOTE]);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_oversized_accusation_rejected_under_reject_policy() {
    let mut config = CaseConfig::default();
    config.limits.accusation = 10;
    config.limits.overflow = OverflowPolicy::Reject;

    let mut session = CaseSession::seeded(config).unwrap();
    let mut detective = ScriptedDetective::new(
        vec![Choice::Right, Choice::Right, Choice::Exit],
        vec!["Senhora Brown da Silva".to_string(), "Sra. Brown".to_string()],
    );

    let judgment = session.run(&mut detective).unwrap();

    assert_eq!(detective.events_of("accusation_rejected").len(), 1);
    assert!(matches!(judgment, Judgment::Verdict(ref v) if v.is_success()));
}

#[test]
fn test_json_lines_playthrough() {
    let mut session = CaseSession::seeded(CaseConfig::default()).unwrap();
    let mut detective = ConsoleDetective::new(Cursor::new("d\nd\ns\nSra. Brown\n"), Vec::new(), OutputFormat::JsonLines);

    session.run(&mut detective).unwrap();

    let output = String::from_utf8(detective.into_output()).unwrap();
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.first().unwrap()["event"], "room_entered");
    let verdict = events.last().unwrap();
    assert_eq!(verdict["event"], "verdict");
    assert_eq!(verdict["support_count"], 2);
    assert_eq!(verdict["outcome"], "success");
}
