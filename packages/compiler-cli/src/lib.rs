#![deny(clippy::all)]

/**
 * Template Compiler CLI
 *
 * Command-line wrapper around the event handler code generator
 */
pub use template_compiler as compiler;

pub mod gen_handlers;
pub mod logging;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
