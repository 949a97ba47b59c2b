//! Locale resource file parsing.

pub mod json;
