//! Multicast notification channel
//!
//! The per-entity emission primitive: each emitting entity holds one `Signal`
//! per kind it supports, and the registry routes listeners into them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A no-argument notification callback, shareable across emitters
pub type Listener = Rc<dyn Fn()>;

/// An append-only listener list with insertion-order invocation
///
/// Clones share the same listener list (handle semantics). `emit` runs over a
/// snapshot, so a handler may connect further listeners or re-enter the
/// emitting entity; a listener connected mid-emission first fires on the next
/// emission.
#[derive(Clone, Default)]
pub struct Signal {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener; it stays connected for the signal's lifetime
    pub fn connect(&self, listener: Listener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Invoke every connected listener in insertion order
    pub fn emit(&self) {
        let snapshot: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener();
        }
    }

    /// Number of connected listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
