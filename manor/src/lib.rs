//! # Manor
//!
//! The static half of Detective Quest: the bounded text type, the manor map
//! (a fixed binary tree of rooms), the seeded case file and the case
//! configuration. This crate holds no exploration or judgment logic.

pub mod case_file;
pub mod config;
pub mod error;
pub mod map;
pub mod text;

pub use case_file::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use text::*;
