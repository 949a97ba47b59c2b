//! AI review of scanner results and key suggestion.
//!
//! The heuristic scanner over-reports on purpose. An optional review sends
//! the occurrence lines to an OpenAI-compatible chat-completions endpoint and
//! marks the texts the model also considers user-facing as AI-confirmed. The
//! review never removes heuristic results, and any failure leaves them
//! unconfirmed.
//!
//! ## Module Structure
//!
//! - `batch`: Request size budgeting and code trimming
//! - `parse`: Answer cleanup, JSON repair and false-positive filtering
//! - `prompt`: Default prompts and `{{text}}` templating
//! - `client`: `OpenAiClient`, the HTTP implementation of both traits
//! - `review`: Batching occurrences through a `Disambiguator`

pub mod batch;
pub mod client;
pub mod parse;
pub mod prompt;
pub mod review;

use anyhow::Result;

pub use client::OpenAiClient;
pub use review::review_occurrences;

/// Asks a model which texts in a piece of code need translation.
pub trait Disambiguator {
    /// Raw model answer for one batch of code.
    fn find_unlocalized(&self, code: &str) -> Result<String>;
}

/// Asks a model for a translation key for a text.
pub trait KeySuggester {
    fn suggest_key(&self, text: &str) -> Result<String>;
}
