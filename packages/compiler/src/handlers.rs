//! Handler Descriptor Model
//!
//! The structured event bindings handed over by the template parser: one
//! `HandlerDescriptor` per `@event`/`v-on` attribute, grouped by event name.

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Requested modifier names in attribute order. Only the keys matter.
pub type ModifierSet = IndexMap<String, bool>;

/// One event binding: handler text plus its modifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerDescriptor {
    /// Reference expression or statement body, verbatim from the template
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<ModifierSet>,
}

impl HandlerDescriptor {
    pub fn new(value: impl Into<String>) -> Self {
        HandlerDescriptor {
            value: value.into(),
            modifiers: None,
        }
    }

    pub fn with_modifier(mut self, name: impl Into<String>) -> Self {
        self.modifiers
            .get_or_insert_with(ModifierSet::new)
            .insert(name.into(), true);
        self
    }

    pub fn with_modifiers<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |descriptor, name| descriptor.with_modifier(name))
    }

    /// Modifier names in insertion order; empty when none were requested
    pub fn modifier_names(&self) -> impl Iterator<Item = &str> {
        self.modifiers
            .iter()
            .flat_map(|modifiers| modifiers.keys().map(String::as_str))
    }

    /// An empty set counts as no modifiers at all
    pub fn has_modifiers(&self) -> bool {
        self.modifiers
            .as_ref()
            .is_some_and(|modifiers| !modifiers.is_empty())
    }
}

/// Everything bound to one event name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventHandler {
    Single(HandlerDescriptor),
    /// Several directive passes bound the same event; order is significant.
    /// A `None` element is a pass that produced no binding.
    Multiple(Vec<Option<HandlerDescriptor>>),
}

impl From<HandlerDescriptor> for EventHandler {
    fn from(descriptor: HandlerDescriptor) -> Self {
        EventHandler::Single(descriptor)
    }
}

impl From<Vec<HandlerDescriptor>> for EventHandler {
    fn from(descriptors: Vec<HandlerDescriptor>) -> Self {
        EventHandler::Multiple(descriptors.into_iter().map(Some).collect())
    }
}

/// Event name to handler(s), in declaration order. A `None` entry is a
/// declared event without a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventBindingTable {
    events: IndexMap<String, Option<EventHandler>>,
}

impl EventBindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Bind `handler` to `event`, replacing any earlier entry in place
    pub fn insert(&mut self, event: impl Into<String>, handler: impl Into<EventHandler>) {
        self.events.insert(event.into(), Some(handler.into()));
    }

    pub fn insert_absent(&mut self, event: impl Into<String>) {
        self.events.insert(event.into(), None);
    }

    pub fn get(&self, event: &str) -> Option<Option<&EventHandler>> {
        self.events.get(event).map(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&EventHandler>)> {
        self.events
            .iter()
            .map(|(event, handler)| (event.as_str(), handler.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<K, H> FromIterator<(K, H)> for EventBindingTable
where
    K: Into<String>,
    H: Into<EventHandler>,
{
    fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
        let mut table = EventBindingTable::new();
        for (event, handler) in iter {
            table.insert(event, handler);
        }
        table
    }
}
