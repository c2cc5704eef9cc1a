//! Handler Code Synthesizer
//!
//! Emits the `on:{...}` / `nativeOn:{...}` block of a render function from an
//! event binding table. Output is a pure function of the table and the
//! options; nothing is cached between calls.

use super::expression::{classify_expression, is_simple_path};
use super::modifiers::ModifierPlan;
use crate::config::CodegenOptions;
use crate::handlers::{EventBindingTable, EventHandler, HandlerDescriptor};
use once_cell::sync::Lazy;

/// Handler emitted for a declared event without a binding
pub const NOOP_HANDLER: &str = "function(){}";

/// Block label for listeners attached to a component's emitted events
pub const COMPONENT_LISTENERS_LABEL: &str = "on";
/// Block label for listeners attached to the native root element
pub const NATIVE_LISTENERS_LABEL: &str = "nativeOn";

static DEFAULT_GENERATOR: Lazy<HandlerGenerator> = Lazy::new(HandlerGenerator::default);

/// Generates the listeners block with the default options
pub fn gen_handlers(events: &EventBindingTable, native: bool) -> String {
    DEFAULT_GENERATOR.gen_handlers(events, native)
}

#[derive(Debug, Clone, Default)]
pub struct HandlerGenerator {
    options: CodegenOptions,
}

impl HandlerGenerator {
    pub fn new(options: CodegenOptions) -> Self {
        HandlerGenerator { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// `on:{"event":handler,...}`, or `nativeOn:{...}` when `native`
    pub fn gen_handlers(&self, events: &EventBindingTable, native: bool) -> String {
        let label = if native {
            NATIVE_LISTENERS_LABEL
        } else {
            COMPONENT_LISTENERS_LABEL
        };
        let _span = tracing::trace_span!("gen_handlers", label, events = events.len()).entered();

        let mut res = String::from(label);
        res.push_str(":{");
        for (i, (event, handler)) in events.iter().enumerate() {
            if i > 0 {
                res.push(',');
            }
            res.push_str(&quote_event_name(event));
            res.push(':');
            res.push_str(&self.gen_handler(event, handler));
        }
        res.push('}');
        res
    }

    /// Handler text for everything bound to one event
    pub fn gen_handler(&self, event: &str, handler: Option<&EventHandler>) -> String {
        match handler {
            None => self.gen_descriptor(event, None),
            Some(EventHandler::Single(descriptor)) => self.gen_descriptor(event, Some(descriptor)),
            Some(EventHandler::Multiple(descriptors)) => {
                let handlers: Vec<String> = descriptors
                    .iter()
                    .map(|descriptor| self.gen_descriptor(event, descriptor.as_ref()))
                    .collect();
                format!("[{}]", handlers.join(","))
            }
        }
    }

    /// Function text for a single binding of `event`
    pub fn gen_descriptor(&self, event: &str, descriptor: Option<&HandlerDescriptor>) -> String {
        let descriptor = match descriptor {
            Some(descriptor) => descriptor,
            None => {
                tracing::trace!(event, "no binding, emitting no-op handler");
                return NOOP_HANDLER.to_string();
            }
        };
        let param = self.options.event_param.as_str();
        let value = descriptor.value.as_str();

        if !descriptor.has_modifiers() {
            let kind = classify_expression(value);
            tracing::trace!(event, ?kind, "handler without modifiers");
            return if kind.is_callable() {
                value.to_string()
            } else {
                format!("function({}){{{}}}", param, value)
            };
        }

        let plan = ModifierPlan::build(event, descriptor.modifier_names());
        tracing::trace!(event, guards = plan.guards.len(), keys = ?plan.keys, "handler with modifiers");

        let mut code = format!("function({}){{", param);
        code.push_str(&plan.render(&self.options));
        // guards run first, so a reference has to be invoked explicitly
        if is_simple_path(value) {
            code.push_str(value);
            code.push('(');
            code.push_str(param);
            code.push(')');
        } else {
            code.push_str(value);
        }
        code.push('}');
        code
    }
}

fn quote_event_name(event: &str) -> String {
    // serializing a &str into JSON cannot fail
    serde_json::to_string(event).unwrap_or_else(|_| format!("\"{}\"", event))
}
