//! Shared models for the commission calculator.
//!
//! Everything here is plain data plus validation and display helpers, so both
//! the engine and the terminal front end can depend on it without pulling in
//! any I/O.

pub mod config;
pub mod error;
pub mod format;
pub mod input;
