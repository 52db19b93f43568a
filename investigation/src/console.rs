//! Console detective - reads decisions from a line-based input and writes
//! events as Portuguese text or JSON lines.

use manor::{Choice, Direction, Room};
use std::io::{BufRead, Write};

use crate::accusation::Outcome;
use crate::detective::Detective;
use crate::error::{InvestigationError, InvestigationResult};
use crate::events::{CaseEvent, MoveRejection};

/// How events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per event; prompts are not printed.
    JsonLines,
}

/// Parse one line of input into a choice.
///
/// Only the first non-blank character counts: `e` (esquerda), `d` (direita)
/// or `s` (sair), in either case.
pub fn parse_choice(line: &str) -> Choice {
    match line.trim_start().chars().next() {
        Some('e' | 'E') => Choice::Left,
        Some('d' | 'D') => Choice::Right,
        Some('s' | 'S') => Choice::Exit,
        _ => Choice::Invalid,
    }
}

/// Render an event as player-facing text.
pub fn render_text(event: &CaseEvent) -> String {
    match event {
        CaseEvent::RoomEntered { room, dead_end, .. } => {
            if *dead_end {
                format!("Você está em: **{}**\nVocê chegou a um beco sem saída. Só resta sair.", room)
            } else {
                format!("Você está em: **{}**", room)
            }
        }
        CaseEvent::ClueCollected { clue, duplicate, .. } => {
            if *duplicate {
                format!("🔎 Pista encontrada: \"{}\" (já anotada)", clue)
            } else {
                format!("🔎 Pista encontrada: \"{}\"", clue)
            }
        }
        CaseEvent::SuspectHint { suspect, .. } => match suspect {
            Some(name) => format!("   Essa pista aponta para: {}", name),
            None => "   Nenhum suspeito ligado a essa pista.".to_string(),
        },
        CaseEvent::InvalidMove { reason, .. } => match reason {
            MoveRejection::NoPath(Direction::Left) => {
                "❌ Não há caminho para a esquerda a partir daqui.".to_string()
            }
            MoveRejection::NoPath(Direction::Right) => {
                "❌ Não há caminho para a direita a partir daqui.".to_string()
            }
            MoveRejection::DeadEnd => "❌ Beco sem saída: só é possível sair.".to_string(),
            MoveRejection::Unrecognized => "⁉️ Opção inválida. Tente novamente.".to_string(),
        },
        CaseEvent::LogFull { clue, capacity } => format!(
            "⚠️ Caderno cheio ({} pistas): \"{}\" não conta para a acusação.",
            capacity, clue
        ),
        CaseEvent::ExplorationEnded { clues_collected, .. } => {
            format!("👋 Você saiu da mansão com {} pista(s).", clues_collected)
        }
        CaseEvent::FinalReport { clues } => {
            let mut report = String::from("Pistas coletadas (em ordem alfabética):");
            if clues.is_empty() {
                report.push_str("\n  (nenhuma)");
            }
            for clue in clues {
                report.push_str(&format!("\n  - {}", clue));
            }
            report
        }
        CaseEvent::NoEvidence => "Sem pistas, não é possível acusar ninguém.".to_string(),
        CaseEvent::AccusationRejected { reason } => {
            format!("Acusação inválida ({}). Tente novamente.", reason)
        }
        CaseEvent::Verdict(verdict) => {
            let headline = match verdict.outcome {
                Outcome::Success => format!("✅ Acusação confirmada! {} é o culpado.", verdict.accused),
                Outcome::Failure => format!("❌ Evidências insuficientes contra {}.", verdict.accused),
            };
            format!(
                "Acusado: {} | Pistas que o incriminam: {} (mínimo {})\n{}",
                verdict.accused, verdict.support_count, verdict.threshold, headline
            )
        }
    }
}

/// A detective at a terminal.
pub struct ConsoleDetective<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> ConsoleDetective<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// Give back the output, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> InvestigationResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> InvestigationResult<()> {
        if self.format == OutputFormat::Text {
            write!(self.output, "{}", text)?;
        }
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Detective for ConsoleDetective<R, W> {
    fn prompt_direction(&mut self, room: &Room) -> InvestigationResult<Choice> {
        let mut menu = String::from("Escolha o próximo caminho:\n");
        if let Some(left) = room.left() {
            menu.push_str(&format!("  [e] Esquerda (-> {})\n", left.name()));
        }
        if let Some(right) = room.right() {
            menu.push_str(&format!("  [d] Direita (-> {})\n", right.name()));
        }
        menu.push_str("  [s] Sair da mansão\n> Sua escolha: ");
        self.prompt(&menu)?;

        Ok(match self.read_line()? {
            Some(line) => parse_choice(&line),
            None => Choice::Exit,
        })
    }

    fn prompt_accused_name(&mut self) -> InvestigationResult<String> {
        loop {
            self.prompt("Quem você acusa? ")?;
            let line = self.read_line()?.ok_or(InvestigationError::InputClosed)?;
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }

    fn report(&mut self, event: &CaseEvent) -> InvestigationResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.output, "{}", render_text(event))?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.output, event)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }
}
