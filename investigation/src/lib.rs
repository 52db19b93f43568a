//! # Investigation
//!
//! The moving half of Detective Quest. This crate walks the manor from the
//! `manor` crate, gathers clues and judges the final accusation.
//!
//! ## Core Components
//!
//! - **evidence**: the clue ledger (BST), the collected-clue log and the suspect index (chained hash table)
//! - **exploration**: the explorer state machine that moves through rooms and collects clues
//! - **accusation**: tallies supporting clues and renders the verdict
//! - **session**: the context object owning one playthrough
//! - **events**: structured reports sent to the player's side
//!
//! ## Design Philosophy
//!
//! - **No console in the core**: decisions come in and events go out through the `Detective` trait
//! - **Single owner**: every structure belongs to one `CaseSession`

pub mod accusation;
pub mod console;
pub mod detective;
pub mod error;
pub mod events;
pub mod evidence;
pub mod exploration;
pub mod session;
pub mod testing;

pub use accusation::*;
pub use detective::*;
pub use error::*;
pub use events::*;
pub use evidence::*;
pub use exploration::*;
pub use session::*;
