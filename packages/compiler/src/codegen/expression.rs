//! Expression Classifier
//!
//! Decides from the raw handler text alone whether it already denotes a
//! callable (an inline function or a reference to one) or is a statement body
//! that has to be wrapped. Both checks are small hand-written scanners; no
//! identifier is ever resolved.

use crate::chars;

/// Lexical shape of a handler value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// `(a, b) => ...`, `e => ...` or `function (...) {...}`
    FunctionExpression,
    /// `handler`, `a.b`, `a['b']`, `a[0]`, `a[key]`
    SimplePath,
    /// Anything else; emitted inside a wrapping function
    Statement,
}

impl ExpressionKind {
    /// Whether the text can stand on its own as a handler value
    pub fn is_callable(self) -> bool {
        !matches!(self, ExpressionKind::Statement)
    }
}

pub fn classify_expression(text: &str) -> ExpressionKind {
    if is_function_expression(text) {
        ExpressionKind::FunctionExpression
    } else if is_simple_path(text) {
        ExpressionKind::SimplePath
    } else {
        ExpressionKind::Statement
    }
}

/// Arrow function with a bare or parenthesized parameter list, or a text
/// starting with the `function` keyword followed by `(`.
///
/// Only the head is inspected: everything after `=>` or `(` is accepted
/// as-is.
pub fn is_function_expression(text: &str) -> bool {
    is_arrow_function_head(text) || is_anonymous_function_head(text)
}

fn is_arrow_function_head(text: &str) -> bool {
    let mut scanner = Scanner::new(text);
    scanner.skip_whitespace();
    if scanner.eat(chars::LPAREN) {
        if !scanner.skip_past(chars::RPAREN) {
            return false;
        }
    } else if scanner.eat_while(chars::is_identifier_part) == 0 {
        return false;
    }
    scanner.skip_whitespace();
    scanner.eat(chars::EQ) && scanner.eat(chars::GT)
}

fn is_anonymous_function_head(text: &str) -> bool {
    match text.strip_prefix("function") {
        Some(rest) => {
            let mut scanner = Scanner::new(rest);
            scanner.skip_whitespace();
            scanner.eat(chars::LPAREN)
        }
        None => false,
    }
}

/// Property-access chain rooted at an identifier and nothing else, optionally
/// surrounded by whitespace.
pub fn is_simple_path(text: &str) -> bool {
    let mut scanner = Scanner::new(text);
    scanner.skip_whitespace();
    if !scanner.eat_identifier() {
        return false;
    }
    loop {
        if scanner.eat(chars::PERIOD) {
            if !scanner.eat_identifier() {
                return false;
            }
        } else if scanner.eat(chars::LBRACKET) {
            if !scanner.eat_bracket_key() {
                return false;
            }
        } else {
            break;
        }
    }
    scanner.skip_whitespace();
    scanner.is_at_end()
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { rest: input }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.rest = &self.rest[ch.len_utf8()..];
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes while `pred` holds, returning the number of chars consumed
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.bump();
            count += 1;
        }
        count
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(chars::is_whitespace);
    }

    /// Consumes up to and including the first `end`
    fn skip_past(&mut self, end: char) -> bool {
        while let Some(ch) = self.bump() {
            if ch == end {
                return true;
            }
        }
        false
    }

    fn eat_identifier(&mut self) -> bool {
        match self.peek() {
            Some(ch) if chars::is_identifier_start(ch) => {
                self.eat_while(chars::is_identifier_part);
                true
            }
            _ => false,
        }
    }

    /// Body of a bracket access after `[`: a quoted key, an integer index or
    /// an identifier, followed by `]`. A quoted key ends at the first closing
    /// quote that is directly followed by `]` and never spans lines.
    fn eat_bracket_key(&mut self) -> bool {
        match self.peek() {
            Some(quote) if chars::is_quote(quote) => {
                self.bump();
                loop {
                    match self.bump() {
                        Some(ch) if ch == quote => {
                            if self.eat(chars::RBRACKET) {
                                return true;
                            }
                        }
                        Some(ch) if chars::is_new_line(ch) => return false,
                        Some(_) => {}
                        None => return false,
                    }
                }
            }
            Some(ch) if chars::is_digit(ch) => {
                self.eat_while(chars::is_digit);
                self.eat(chars::RBRACKET)
            }
            _ => self.eat_identifier() && self.eat(chars::RBRACKET),
        }
    }
}
