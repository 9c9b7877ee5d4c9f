//! Board export ingestion for card sort studies.
//!
//! Discovers exported board JSON files, decodes them and extracts one
//! [`Sort`](cardsort_core::models::Sort) per export.

pub mod batch;
pub mod board;
pub mod extractor;
pub mod reader;

pub use cardsort_core as core;
