//! Shared types for card sort extraction.
//!
//! Holds the [`Sort`] and [`Group`] records, the error taxonomy, timestamp
//! parsing, report formatting helpers and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, SortError};
pub use models::{CardId, CardMapping, Group, Sort};
