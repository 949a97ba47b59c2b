//! i18nscan - unlocalized text detection for web front-ends
//!
//! i18nscan is a CLI tool and library that finds hardcoded natural-language
//! text in JS/JSX/TS/TSX/HTML/Vue/Handlebars sources, moves it into JSON
//! locale files behind a translation call, and reports locale keys that no
//! source file uses as well as misspelled locale values. Detection is a
//! heuristic pass over raw source text; an optional AI review confirms its
//! findings.
//!
//! ## Module Structure
//!
//! - `ai`: Optional AI review and key suggestion (OpenAI-compatible API)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, key-usage extractor, file walking, locale parsing and spelling
//! - `issues`: Issue type definitions and reporting
//! - `locale`: Locale file editing and source rewriting for `extract`
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Turning scan results into issues
//! - `utils`: Shared utility functions

pub mod ai;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod locale;
pub mod mcp;
pub mod rules;
pub mod utils;
