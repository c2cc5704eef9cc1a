/*
 * Character Codes
 *
 * Character classes shared by the handler expression scanners.
 */

//! Character constants and predicates used by the lexical scanners

pub const NBSP: char = '\u{00A0}';
pub const BOM: char = '\u{FEFF}';
pub const NEL: char = '\u{0085}';
pub const LF: char = '\n';
pub const CR: char = '\r';

pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const DOLLAR: char = '$';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const PERIOD: char = '.';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const LBRACKET: char = '[';
pub const RBRACKET: char = ']';
pub const UNDERSCORE: char = '_';

/// Check if character is whitespace in the JavaScript sense (`\s`):
/// Unicode `White_Space` plus BOM, minus NEL (U+0085)
pub fn is_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != NEL) || ch == BOM
}

/// Check if character is a decimal digit
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if character is a line terminator
pub fn is_new_line(ch: char) -> bool {
    matches!(ch, LF | CR | '\u{2028}' | '\u{2029}')
}

/// Check if character is a quote accepted inside bracket access
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ
}

/// Check if character can start an identifier
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE || ch == DOLLAR
}

/// Check if character can be part of an identifier
pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || is_digit(ch)
}

/// Check if the whole string is a single identifier
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}
