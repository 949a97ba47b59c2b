//! Core data types shared by the scanner, the rules and the reporters.
//!
//! ## Module Structure
//!
//! - `message`: Locale resource types (LocaleMessages, MessageContext)
//! - `occurrence`: Scanner output (Occurrence, FileType, DetectionSource)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod message;
pub mod occurrence;
pub mod source;

pub use message::{AllLocaleMessages, LocaleMessages, MessageContext, MessageLocation};
pub use occurrence::{DetectionSource, FileType, Occurrence};
pub use source::{SourceContext, SourceLocation};
