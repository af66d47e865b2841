//! Character constants used when scanning template text.
//!
//! Grammar-level consumers branch on these rather than on bare character
//! literals.

// Whitespace
pub const TAB: char = '\t';
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const SPACE: char = ' ';

// Punctuation
pub const EXCLAMATION: char = '!';
pub const DOUBLE_QUOTE: char = '"';
pub const HASH: char = '#';
pub const DOLLAR_SIGN: char = '$';
pub const AMPERSAND: char = '&';
pub const SINGLE_QUOTE: char = '\'';
pub const ASTERISK: char = '*';
pub const PLUS: char = '+';
pub const COMMA: char = ',';
pub const MINUS: char = '-';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const SEMICOLON: char = ';';
pub const LESS_THAN: char = '<';
pub const EQUALS: char = '=';
pub const GREATER_THAN: char = '>';
pub const QUESTION: char = '?';
pub const AT: char = '@';
pub const OPEN_BRACKET: char = '[';
pub const BACKSLASH: char = '\\';
pub const CLOSE_BRACKET: char = ']';
pub const UNDERSCORE: char = '_';
pub const OPEN_BRACE: char = '{';
pub const BAR: char = '|';
pub const CLOSE_BRACE: char = '}';

/// Whether `ch` is scanner whitespace: space, tab, carriage return or line
/// feed. No other characters qualify.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
