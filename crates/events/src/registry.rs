//! Handler registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::EventHandler;

/// Maps event names to the handlers registered for them.
///
/// Handlers for a name are kept in registration order. Registering the same
/// handler twice keeps both entries, so it runs twice per dispatch.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list for `event_name`.
    pub fn register(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(event_name.into()).or_default().push(handler);
    }

    /// Returns the handlers registered for `event_name`, in registration
    /// order. Unknown names yield an empty slice.
    pub fn handlers_for(&self, event_name: &str) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(event_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if at least one handler is registered for `event_name`.
    pub fn has(&self, event_name: &str) -> bool {
        !self.handlers_for(event_name).is_empty()
    }

    /// Returns the names that have at least one handler, sorted.
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the total number of registrations across all names.
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for name in self.event_names() {
            let handlers: Vec<&str> = self.handlers_for(name).iter().map(|h| h.name()).collect();
            map.entry(&name, &handlers);
        }
        map.finish()
    }
}
