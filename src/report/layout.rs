//! Column layout for report sections
//!
//! Entries are packed row-major into uniform columns. The cell width is the
//! longest visible entry across ALL sections of the run plus a 4-character
//! gutter, so every printed section aligns the same way. Styling escape
//! sequences never count toward alignment.

use console::Term;

use super::style::StyledEntry;

/// Gutter between columns, in visible characters
const GUTTER: usize = 4;

/// Width used when stdout is not a terminal
const FALLBACK_WIDTH: usize = 80;

/// Printable length of a string, ignoring ANSI escape sequences
/// (`ESC [ ... m` and friends)
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip ANSI escape sequence
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Current terminal width, falling back to 80 columns when piped
pub fn output_width() -> usize {
    Term::stdout()
        .size_checked()
        .map_or(FALLBACK_WIDTH, |(_, cols)| cols as usize)
}

/// Lay out entries into rows of uniform columns.
///
/// `global_max` is the longest visible entry across all sections of the run.
/// Every entry except the last in its row is padded to the cell width; the
/// last one is not, so rows carry no trailing whitespace. The column count
/// never drops below 1, even on very narrow terminals.
pub fn layout_rows(entries: &[StyledEntry], global_max: usize, output_width: usize) -> String {
    let column_width = global_max + GUTTER;
    let columns = (output_width / column_width).max(1);

    let mut out = String::new();
    for row in entries.chunks(columns) {
        for (i, entry) in row.iter().enumerate() {
            out.push_str(&entry.display);
            if i + 1 < row.len() {
                for _ in entry.visible_len..column_width {
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    }
    out
}
