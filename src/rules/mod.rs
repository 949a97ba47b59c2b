//! Turns analysis results from a `ScanContext` into reportable issues.
//!
//! ## Module Structure
//!
//! - `unlocalized`: Unlocalized text detection
//! - `unused`: Declared but unused translation keys
//! - `typos`: Misspelled words in locale values

pub mod typos;
pub mod unlocalized;
pub mod unused;
