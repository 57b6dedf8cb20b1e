//! Modifier text genericization
//!
//! Display templates carry their rolled values in parenthesized spans, e.g.
//! `Adds (5-10) to (15-20) Life`. Replacing each span with a placeholder gives
//! a text that is identical across every tier of the same modifier.

/// Character that replaces each parenthesized span
pub const PLACEHOLDER: char = '#';

/// Replace every `(...)` span, parentheses included, with [`PLACEHOLDER`].
///
/// A span closes at the first `)` after its `(` and never crosses a line
/// break. An `(` with no closing paren on its line is kept as-is.
pub fn genericize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        match closing_paren(after) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push(PLACEHOLDER);
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn closing_paren(s: &str) -> Option<usize> {
    for (i, c) in s.char_indices() {
        match c {
            ')' => return Some(i),
            '\n' => return None,
            _ => {}
        }
    }
    None
}
