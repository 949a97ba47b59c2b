//! Reusing an existing translation for a text.

use crate::core::{LocaleMessages, MessageContext};

/// Decides whether an existing key holding the same text should be reused
/// instead of adding a new one.
pub trait ReuseStrategy {
    fn reuse(&self, text: &str, existing: &MessageContext) -> bool;
}

/// Always reuse a matching key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysReuse;

impl ReuseStrategy for AlwaysReuse {
    fn reuse(&self, _text: &str, _existing: &MessageContext) -> bool {
        true
    }
}

/// Never reuse; every extraction adds its own key.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverReuse;

impl ReuseStrategy for NeverReuse {
    fn reuse(&self, _text: &str, _existing: &MessageContext) -> bool {
        false
    }
}

/// Key of the first entry whose value is exactly `text`, if the strategy
/// accepts it.
pub fn find_reusable_key<'a>(
    messages: &'a LocaleMessages,
    text: &str,
    strategy: &dyn ReuseStrategy,
) -> Option<&'a MessageContext> {
    messages
        .find_by_value(text)
        .filter(|existing| strategy.reuse(text, existing))
}
