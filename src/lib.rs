//! tally-cli - Command-line personal ledger
//!
//! This library provides the core functionality for the tally ledger tool:
//! recording dated income and expense entries, persisting them to a single
//! JSON data file, and answering aggregate queries over a filterable view
//! of the ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, report periods)
//! - `storage`: The ledger and its JSON file persistence
//! - `query`: Pure filter and aggregation functions
//! - `report`: Period report construction and rendering
//! - `display`: Terminal output formatting
//! - `cli`: Command definitions and handlers

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod report;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
