//! Key Filter Resolver
//!
//! Turns residual modifier names (`enter`, `13`, `delete`, `custom-key`) into
//! a leading guard that returns unless the event's `keyCode` matches.

use crate::config::CodegenOptions;
use once_cell::sync::Lazy;
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;
use std::fmt::Write;

/// Key codes a symbolic alias stands for; some keys are sent by two
/// physical keys.
pub type KeyCodes = SmallVec<[KeyCodeExpr; 2]>;

/// Built-in key aliases
pub static KEY_CODES: Lazy<HashMap<&'static str, &'static [u32]>> = Lazy::new(|| {
    let entries: [(&'static str, &'static [u32]); 9] = [
        ("esc", &[27]),
        ("tab", &[9]),
        ("enter", &[13]),
        ("space", &[32]),
        ("up", &[38]),
        ("left", &[37]),
        ("right", &[39]),
        ("down", &[40]),
        ("delete", &[8, 46]),
    ];
    entries.into_iter().collect()
});

/// One code the incoming `keyCode` is compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCodeExpr {
    /// Integer literal, kept as its decimal text
    Literal(String),
    /// Built-in alias code
    Code(u32),
    /// Resolved at runtime by the registered key resolver
    Custom(String),
}

impl KeyCodeExpr {
    pub fn write_to(&self, out: &mut String, options: &CodegenOptions) {
        match self {
            KeyCodeExpr::Literal(digits) => out.push_str(digits),
            KeyCodeExpr::Code(code) => {
                let _ = write!(out, "{}", code);
            }
            KeyCodeExpr::Custom(name) => {
                out.push_str(&options.key_resolver);
                out.push('(');
                out.push_str(&js_string_literal(name));
                out.push(')');
            }
        }
    }
}

/// Resolves one key name: integer literal, then built-in alias, then a
/// runtime call to the custom alias resolver.
pub fn normalize_key_code(key: &str) -> KeyCodes {
    if let Some(literal) = parse_int_prefix(key) {
        return smallvec![KeyCodeExpr::Literal(literal)];
    }
    if let Some(codes) = KEY_CODES.get(key) {
        return codes.iter().copied().map(KeyCodeExpr::Code).collect();
    }
    tracing::debug!(key, "deferring custom key alias to runtime resolver");
    smallvec![KeyCodeExpr::Custom(key.to_string())]
}

/// Guard statement for a non-empty list of key names
pub fn gen_key_filter<S: AsRef<str>>(keys: &[S], options: &CodegenOptions) -> String {
    let codes: Vec<KeyCodeExpr> = keys
        .iter()
        .flat_map(|key| normalize_key_code(key.as_ref()))
        .collect();

    let param = options.event_param.as_str();
    let mut out = String::from("if(");
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push_str("&&");
        }
        out.push_str(param);
        out.push_str(".keyCode!==");
        code.write_to(&mut out, options);
    }
    out.push_str(")return;");
    out
}

/// Integer-prefix parse with `parseInt(s, 10)` semantics: leading whitespace,
/// an optional sign, then at least one digit; trailing text is ignored. Zero
/// counts as no match. Returns the normalized decimal text.
fn parse_int_prefix(key: &str) -> Option<String> {
    let trimmed = key.trim_start_matches(crate::chars::is_whitespace);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let significant = unsigned[..digit_len].trim_start_matches('0');
    if significant.is_empty() {
        return None;
    }
    Some(if negative {
        format!("-{}", significant)
    } else {
        significant.to_string()
    })
}

/// Double-quoted JavaScript string literal
fn js_string_literal(value: &str) -> String {
    // serializing a &str into JSON cannot fail
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
