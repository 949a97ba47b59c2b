//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `data`: Shared data types (occurrences, locations, locale messages)
//! - `scan`: Unlocalized-text detection (lexer, classifier, post-processor)
//! - `key_usage`: Translation-key reference extraction
//! - `file_scanner`: Source file discovery
//! - `parsers`: Locale resource parsing
//! - `spelling`: Dictionary spell-checking of locale values
//! - `context`: `ScanContext`, lazily running the analyses over a project

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod key_usage;
pub mod parsers;
pub mod scan;
pub mod spelling;

pub use data::*;
