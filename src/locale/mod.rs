//! Translation resource editing and source rewriting for `extract`.
//!
//! ## Module Structure
//!
//! - `writer`: Nested JSON locale file editing (insert with conflict detection)
//! - `reuse`: Finding an existing key for a text, and the reuse decision
//! - `replace`: Replacement call construction and in-line source rewriting
//! - `extract`: The end-to-end extract operation

pub mod extract;
pub mod replace;
pub mod reuse;
pub mod writer;

pub use extract::{ExtractOutcome, ExtractRequest, Extractor};
pub use replace::{build_replacement, replace_in_line, sentence_at, slug_key};
pub use reuse::{AlwaysReuse, NeverReuse, ReuseStrategy, find_reusable_key};
pub use writer::{InsertOutcome, LocaleWriter};
