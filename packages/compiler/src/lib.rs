#![deny(clippy::all)]

/**
 * Template Compiler - Event Handler Code Generation
 *
 * Turns the event bindings of a parsed template into the handler functions
 * of a render function, with optional Node.js bindings
 */

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod chars;
pub mod codegen;
mod config;
mod error;
pub mod handlers;

// Re-exports
pub use codegen::{gen_handlers, HandlerGenerator};
pub use config::{CodegenOptions, DEFAULT_EVENT_PARAM, DEFAULT_KEY_RESOLVER};
pub use error::{CodegenError, Result};
pub use handlers::{EventBindingTable, EventHandler, HandlerDescriptor, ModifierSet};

/// Generate the listeners block from a JSON event binding table
pub fn gen_handlers_from_json(
    table_json: &str,
    native: bool,
    options: &CodegenOptions,
) -> Result<String> {
    let table = EventBindingTable::from_json_str(table_json)?;
    Ok(HandlerGenerator::new(options.clone()).gen_handlers(&table, native))
}

/// Generate the listeners block of a render function
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn generate_handlers(table_json: String, native: Option<bool>) -> napi::Result<String> {
    gen_handlers_from_json(
        &table_json,
        native.unwrap_or(false),
        &CodegenOptions::default(),
    )
    .map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Get compiler version
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
