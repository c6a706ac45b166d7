//! System event dispatch
//!
//! Host platforms deliver appearance changes and memory pressure
//! asynchronously; the app layer forwards them here and they are handled
//! synchronously on the UI thread.

use rustc_hash::FxHashMap;

/// Platform light/dark appearance flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Events raised by the host platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemEvent {
    /// The system switched between light and dark appearance
    AppearanceChanged(Appearance),
    /// The system asked the app to release memory
    LowMemory,
}

/// Event kind used as the registration key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemEventKind {
    AppearanceChanged,
    LowMemory,
}

impl SystemEvent {
    pub fn kind(&self) -> SystemEventKind {
        match self {
            SystemEvent::AppearanceChanged(_) => SystemEventKind::AppearanceChanged,
            SystemEvent::LowMemory => SystemEventKind::LowMemory,
        }
    }
}

/// Event handler function type
pub type SystemEventHandler = Box<dyn FnMut(&SystemEvent)>;

/// Dispatches system events to registered handlers in registration order
pub struct SystemEventDispatcher {
    handlers: FxHashMap<SystemEventKind, Vec<SystemEventHandler>>,
}

impl SystemEventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register a handler for one kind of system event
    pub fn register<F>(&mut self, kind: SystemEventKind, handler: F)
    where
        F: FnMut(&SystemEvent) + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Dispatch an event to all handlers registered for its kind.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&mut self, event: &SystemEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event.kind()) else {
            tracing::trace!("no handlers for {:?}", event);
            return 0;
        };
        tracing::debug!("dispatching {:?} to {} handler(s)", event, handlers.len());
        for handler in handlers.iter_mut() {
            handler(event);
        }
        handlers.len()
    }

    pub fn handler_count(&self, kind: SystemEventKind) -> usize {
        self.handlers.get(&kind).map(Vec::len).unwrap_or(0)
    }
}

impl Default for SystemEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
