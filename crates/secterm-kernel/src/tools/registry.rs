//! Command registry: name → handler, looked up once per dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use secterm_types::ToolSchema;

use super::traits::Tool;

/// Registry of available commands.
///
/// Lookup is case-insensitive. Registration order is remembered so `help`
/// lists commands the way they were registered.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A later tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_lowercase();
        if self.tools.insert(name.clone(), Arc::new(tool)).is_some() {
            tracing::debug!(command = %name, "replacing registered command");
        } else {
            self.order.push(name);
        }
    }

    /// Look up a tool by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(&name.to_lowercase()).cloned()
    }

    /// True if a tool with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(&name.to_lowercase())
    }

    /// Command names in registration order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Schemas of every tool, in registration order.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.schema())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.order)
            .finish()
    }
}
