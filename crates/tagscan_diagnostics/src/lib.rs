//! tagscan_diagnostics: offset mapping and error rendering for tagged
//! template literals.
//!
//! A template literal reaches the scanner as an ordered sequence of static
//! fragments with substitution slots between them, so a scanner cursor is a
//! (fragment, position) pair. For display, the literal is flattened into a
//! single string in which each slot is rendered as a `${0}`, `${1}`, ...
//! placeholder. [`calc_offset`] maps a fragment-relative cursor onto that
//! flattened text, and [`format_error`] renders a pointer-style message at
//! the resulting offset.
//!
//! Everything here is stateless: these functions read the fragment slice and
//! an offset, never a live scanner.

use thiserror::Error;

/// Render the fragments as one display string, with `${i}` placeholders
/// standing in for the substitution slots.
pub fn render_template(statics: &[&str]) -> String {
    let mut out = String::new();
    for (i, text) in statics.iter().enumerate() {
        if i > 0 {
            out.push_str("${");
            out.push_str(&(i - 1).to_string());
            out.push('}');
        }
        out.push_str(text);
    }
    out
}

/// Length in bytes of the `${i}` placeholder rendered for slot `i`.
#[inline]
fn placeholder_len(slot: usize) -> usize {
    // `$`, `{` and `}` plus the decimal digits of the slot index.
    4 + slot.checked_ilog10().unwrap_or(0) as usize
}

/// Map a fragment-relative position onto the flattened display text.
///
/// Returns the byte offset, in the text produced by [`render_template`], of
/// position `pos` within fragment `fragment`: the lengths of all prior
/// fragments, the lengths of all prior slot placeholders, plus `pos`.
pub fn calc_offset(statics: &[&str], fragment: usize, pos: usize) -> usize {
    let mut offset = pos;
    for (slot, text) in statics.iter().take(fragment).enumerate() {
        offset += text.len() + placeholder_len(slot);
    }
    offset
}

/// Render a pointer-style error message for a template literal.
///
/// The flattened display text is emitted line by line; under the line
/// containing `offset` a caret marks the offending column, followed by
/// `Error: <message>`. Each line consumes `line.len() + 1` offset units, the
/// extra unit for the newline.
///
/// Out-of-range offsets never fail: a negative offset suppresses the caret
/// entirely, and an offset past the final line places the caret after the
/// rendered text.
pub fn format_error(statics: &[&str], message: &str, offset: isize) -> String {
    let display = render_template(statics);
    let mut remaining = offset;
    let mut out = String::from("\n");
    for line in display.split('\n') {
        out.push_str(line);
        out.push('\n');
        if remaining >= 0 && (remaining as usize) < line.len() {
            push_caret(&mut out, message, char_column(line, remaining as usize));
        }
        remaining -= line.len() as isize + 1;
    }
    if remaining >= 0 {
        push_caret(&mut out, message, remaining as usize);
    }
    out
}

/// Character column for a byte offset into `line`, for caret placement.
fn char_column(line: &str, byte_offset: usize) -> usize {
    line.char_indices().take_while(|(i, _)| *i < byte_offset).count()
}

fn push_caret(out: &mut String, message: &str, column: usize) {
    for _ in 0..column {
        out.push(' ');
    }
    out.push_str("^\nError: ");
    out.push_str(message);
    out.push('\n');
}

/// A lexical error paired with the flat display offset it was raised at.
///
/// The scanner itself reports mismatches through its return values; it is
/// the grammar-level caller that decides a mismatch is fatal, computes the
/// offset of the scanner's cursor via [`calc_offset`], and packages both
/// into a `Diagnostic`. An offset of `-1` marks an error with no usable
/// position; [`format_error`] omits the caret for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    /// Human-readable description of the error.
    pub message: String,
    /// Byte offset into the flattened display text, or `-1`.
    pub offset: isize,
}

impl Diagnostic {
    /// Create a diagnostic at a flat display offset.
    pub fn new(message: impl Into<String>, offset: isize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    /// Render this diagnostic against the literal it was raised for.
    pub fn render(&self, statics: &[&str]) -> String {
        format_error(statics, &self.message, self.offset)
    }
}
