//! Request size budgeting.

/// Above this many bytes of occurrence lines a review prints a warning.
pub const MAX_TOTAL_SIZE: usize = 200_000;

/// Joins occurrence lines inside one batch.
const BATCH_SEPARATOR: &str = "\n...\n...\n...\n";

/// Lines longer than this are cut when trimming code.
const MAX_LINE_LEN: usize = 100;

/// Largest batch for a request budget: half of it, leaving room for the prompt.
pub fn max_batch_size(max_request_size: usize) -> usize {
    max_request_size / 2
}

/// Group lines into batches of at most `max_batch` bytes.
///
/// Lines are joined with a visible separator. A single line larger than the
/// budget still gets a batch of its own.
pub fn build_batches<S: AsRef<str>>(lines: &[S], max_batch: usize) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current = String::new();

    for line in lines {
        let line = line.as_ref();
        if !current.is_empty() && current.len() + line.len() > max_batch {
            batches.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(BATCH_SEPARATOR);
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        batches.push(current);
    }

    batches
}

/// Total size of the lines as they would be sent, newline-joined.
pub fn total_size<S: AsRef<str>>(lines: &[S]) -> usize {
    let content: usize = lines.iter().map(|l| l.as_ref().len()).sum();
    content + lines.len().saturating_sub(1)
}

/// Shrink code for a prompt.
///
/// Drops `//` comments and blank lines, trims every line, cuts lines longer
/// than 100 characters, and stops with a `// ... (truncated)` marker once
/// `max_size` bytes would be exceeded.
pub fn trim_code(code: &str, max_size: usize) -> String {
    let mut kept: Vec<String> = Vec::new();
    let mut size = 0;

    for line in code.lines() {
        let without_comment = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let trimmed = without_comment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line = if trimmed.chars().count() > MAX_LINE_LEN {
            let cut: String = trimmed.chars().take(MAX_LINE_LEN - 3).collect();
            format!("{}...", cut)
        } else {
            trimmed.to_string()
        };

        if size + line.len() + 1 > max_size {
            kept.push("// ... (truncated)".to_string());
            break;
        }
        size += line.len() + 1;
        kept.push(line);
    }

    kept.join("\n")
}
