//! Modifier Classifier
//!
//! Routes every modifier name of a binding to exactly one destination, with a
//! fixed precedence:
//!
//! 1. structural modifiers (`stop`, `prevent`, `self`) on any event,
//! 2. mouse modifiers (`ctrl`, `shift`, `alt`, `meta`) on mouse-like events,
//! 3. everything else is a key name for the key filter.
//!
//! Guards keep the modifier order; the key filter always goes first.

use super::key_filter::gen_key_filter;
use crate::config::CodegenOptions;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A guard statement emitted at the top of a generated handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    StopPropagation,
    PreventDefault,
    /// Only fire when the listener's own element is the target
    SelfTarget,
    /// Require a held modifier key; holds the event flag, e.g. `ctrlKey`
    ModifierKey(&'static str),
}

impl Guard {
    pub fn write_to(self, out: &mut String, event_param: &str) {
        match self {
            Guard::StopPropagation => {
                out.push_str(event_param);
                out.push_str(".stopPropagation();");
            }
            Guard::PreventDefault => {
                out.push_str(event_param);
                out.push_str(".preventDefault();");
            }
            Guard::SelfTarget => {
                out.push_str("if(");
                out.push_str(event_param);
                out.push_str(".target!==");
                out.push_str(event_param);
                out.push_str(".currentTarget)return;");
            }
            Guard::ModifierKey(flag) => {
                out.push_str("if(!");
                out.push_str(event_param);
                out.push('.');
                out.push_str(flag);
                out.push_str(")return;");
            }
        }
    }

    pub fn render(self, event_param: &str) -> String {
        let mut out = String::new();
        self.write_to(&mut out, event_param);
        out
    }
}

/// Modifiers meaningful for every event
pub static STRUCTURAL_MODIFIERS: Lazy<HashMap<&'static str, Guard>> = Lazy::new(|| {
    HashMap::from([
        ("stop", Guard::StopPropagation),
        ("prevent", Guard::PreventDefault),
        ("self", Guard::SelfTarget),
    ])
});

/// Modifiers only honoured on mouse-like events
pub static MOUSE_MODIFIERS: Lazy<HashMap<&'static str, Guard>> = Lazy::new(|| {
    HashMap::from([
        ("ctrl", Guard::ModifierKey("ctrlKey")),
        ("shift", Guard::ModifierKey("shiftKey")),
        ("alt", Guard::ModifierKey("altKey")),
        ("meta", Guard::ModifierKey("metaKey")),
    ])
});

const MOUSE_EVENT_PREFIXES: [&str; 2] = ["mouse", "pointer"];
const MOUSE_EVENT_NAMES: [&str; 4] = ["click", "dblclick", "contextmenu", "wheel"];

/// `mouse*`, `pointer*`, `click`, `dblclick`, `contextmenu` or `wheel`
pub fn is_mouse_event(event: &str) -> bool {
    MOUSE_EVENT_PREFIXES
        .iter()
        .any(|prefix| event.starts_with(prefix))
        || MOUSE_EVENT_NAMES.contains(&event)
}

/// Where a single modifier name ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierRoute<'a> {
    Structural(Guard),
    Mouse(Guard),
    Key(&'a str),
}

pub fn classify_modifier(name: &str, mouse_event: bool) -> ModifierRoute<'_> {
    if let Some(guard) = STRUCTURAL_MODIFIERS.get(name) {
        return ModifierRoute::Structural(*guard);
    }
    if mouse_event {
        if let Some(guard) = MOUSE_MODIFIERS.get(name) {
            return ModifierRoute::Mouse(*guard);
        }
    }
    ModifierRoute::Key(name)
}

/// Partitioned modifiers of one binding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierPlan<'a> {
    /// Structural and mouse guards in encounter order
    pub guards: Vec<Guard>,
    /// Residual key names in encounter order
    pub keys: Vec<&'a str>,
}

impl<'a> ModifierPlan<'a> {
    pub fn build<I>(event: &str, modifiers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mouse_event = is_mouse_event(event);
        let mut plan = ModifierPlan::default();
        for name in modifiers {
            match classify_modifier(name, mouse_event) {
                ModifierRoute::Structural(guard) | ModifierRoute::Mouse(guard) => {
                    plan.guards.push(guard)
                }
                ModifierRoute::Key(key) => plan.keys.push(key),
            }
        }
        plan
    }

    /// Guard prologue: key filter, then the remaining guards
    pub fn render(&self, options: &CodegenOptions) -> String {
        let mut code = if self.keys.is_empty() {
            String::new()
        } else {
            gen_key_filter(self.keys.as_slice(), options)
        };
        for guard in &self.guards {
            guard.write_to(&mut code, &options.event_param);
        }
        code
    }
}
