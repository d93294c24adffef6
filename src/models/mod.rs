//! Core data models
//!
//! Contains the entry record, the money type, and the report period.

pub mod entry;
pub mod money;
pub mod period;

pub use entry::{Entry, EntryKind};
pub use money::{Money, MoneyParseError};
pub use period::Period;
