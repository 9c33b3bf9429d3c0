//! # Commission Engine
//!
//! * [`tiers`]: the two rate tables and their lookups.
//! * [`engine`]: turns a validated input into a [`engine::Commission`].
//! * [`report`]: the single summary row shown to the user and written to files.
//! * [`export`]: CSV and XLSX writers for that row.

pub mod engine;
pub mod export;
pub mod report;
pub mod tiers;

pub use engine::{Commission, compute};
pub use report::SummaryRow;
pub use tiers::{count_commission_rate, margin_commission_rate};
