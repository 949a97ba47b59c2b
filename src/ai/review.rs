use std::collections::BTreeSet;

use colored::Colorize;

use super::{
    Disambiguator,
    batch::{MAX_TOTAL_SIZE, build_batches, max_batch_size, total_size, trim_code},
    parse::{filter_ai_texts, parse_ai_texts},
};
use crate::core::context::AllOccurrences;

pub struct ReviewOptions<'a> {
    /// Request budget in bytes (`maxRequestSize`).
    pub max_request_size: usize,
    /// Translation call names, for dropping texts the model got wrong.
    pub function_names: &'a [String],
    pub verbose: bool,
}

/// Send the occurrence lines for review and return the occurrence texts the
/// model confirmed.
///
/// A failed batch prints a warning and confirms nothing; the other batches
/// still count.
pub fn review_occurrences(
    occurrences: &AllOccurrences,
    ai: &dyn Disambiguator,
    options: &ReviewOptions,
) -> BTreeSet<String> {
    let lines: Vec<&str> = occurrences
        .values()
        .flatten()
        .map(|o| o.current_line_text.as_str())
        .collect();
    if lines.is_empty() {
        return BTreeSet::new();
    }

    let total = total_size(&lines);
    if total > MAX_TOTAL_SIZE {
        eprintln!(
            "{} {} bytes of text to review (over {}); this may take a while",
            "warning:".bold().yellow(),
            total,
            MAX_TOTAL_SIZE
        );
    }

    let batches = build_batches(&lines, max_batch_size(options.max_request_size));
    let mut answered: BTreeSet<String> = BTreeSet::new();

    for (i, batch) in batches.iter().enumerate() {
        if options.verbose {
            eprintln!(
                "{} AI review batch {}/{}",
                "note:".bold().cyan(),
                i + 1,
                batches.len()
            );
        }

        let code = trim_code(batch, options.max_request_size);
        if code.len() >= options.max_request_size {
            eprintln!(
                "{} skipping a review batch over {} bytes",
                "warning:".bold().yellow(),
                options.max_request_size
            );
            continue;
        }

        match ai
            .find_unlocalized(&code)
            .and_then(|raw| parse_ai_texts(&raw))
        {
            Ok(texts) => answered.extend(filter_ai_texts(texts, batch, options.function_names)),
            Err(e) => eprintln!("{} AI review failed: {:#}", "warning:".bold().yellow(), e),
        }
    }

    occurrences
        .values()
        .flatten()
        .filter(|o| answered.contains(&o.text))
        .map(|o| o.text.clone())
        .collect()
}
