// SPDX-License-Identifier: MIT
//! Status line formatting.

/// Combines a status text with an optional file size.
///
/// The size is written as ` [x.y KB]`. When the text ends with a position
/// counter such as `(3/10)` the size goes in front of the counter, so the
/// counter stays at the end of the line.
#[must_use]
pub fn format_status(text: &str, size_kb: Option<f64>) -> String {
    let Some(size) = size_kb else {
        return text.to_string();
    };
    let size = format!("[{size:.1} KB]");

    match split_counter(text) {
        Some((head, counter)) => {
            let head = head.trim_end();
            if head.is_empty() {
                format!("{size} {counter}")
            } else {
                format!("{head} {size} {counter}")
            }
        }
        None if text.is_empty() => size,
        None => format!("{text} {size}"),
    }
}

/// Splits `"name (3/10)"` into `("name ", "(3/10)")`.
fn split_counter(text: &str) -> Option<(&str, &str)> {
    let trimmed = text.trim_end();
    let inner = trimmed.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let (current, total) = inner[open + 1..].split_once('/')?;
    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if is_number(current) && is_number(total) {
        Some((&trimmed[..open], &trimmed[open..]))
    } else {
        None
    }
}
