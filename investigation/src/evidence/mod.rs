//! Evidence module - the structures that hold what the detective has found.
//!
//! - **ClueLedger**: sorted, duplicate-free binary search tree of clues
//! - **CollectedLog**: clues in the order they were picked up
//! - **SuspectIndex**: chained hash table from clue text to suspect

mod collected_log;
mod ledger;
mod suspect_index;

pub use collected_log::*;
pub use ledger::*;
pub use suspect_index::*;
