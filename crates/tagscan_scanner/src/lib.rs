//! tagscan_scanner: cursor primitives over tagged template literals.
//!
//! A template literal arrives as an ordered sequence of static text
//! fragments with substitution slots between them. The scanner walks the
//! static text character by character and crosses a slot only through an
//! explicit [`TemplateScanner::consume_expr`] call, so a grammar-level
//! parser built on these primitives can treat each slot as an opaque token.
//!
//! The scanner produces no tokens and knows no grammar; it only answers
//! "does this text appear at the cursor" and moves the cursor forward.

pub mod char_codes;
mod scanner;

pub use char_codes::is_whitespace;
pub use scanner::{ScannerState, TemplateScanner};
