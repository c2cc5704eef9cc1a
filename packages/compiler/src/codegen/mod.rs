//! Event handler code generation
//!
//! Classifies handler expressions, resolves modifiers into guard statements
//! and synthesizes the listener functions of a render function.

pub mod expression;
pub mod key_filter;
pub mod modifiers;
pub mod synthesizer;

pub use expression::{classify_expression, is_function_expression, is_simple_path, ExpressionKind};
pub use key_filter::{gen_key_filter, normalize_key_code, KeyCodeExpr, KeyCodes, KEY_CODES};
pub use modifiers::{
    classify_modifier, is_mouse_event, Guard, ModifierPlan, ModifierRoute, MOUSE_MODIFIERS,
    STRUCTURAL_MODIFIERS,
};
pub use synthesizer::{gen_handlers, HandlerGenerator, NOOP_HANDLER};
