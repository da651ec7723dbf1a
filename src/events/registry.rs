//! Kind-keyed wiring between emitters and listeners
//!
//! The registry is the level session's context object: entities receive it at
//! spawn time and declare what they emit and what they listen to. Both tables
//! reconcile at registration, so wiring never depends on construction order.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::kind::{EVENT_KIND_COUNT, EventKind};
use super::signal::Listener;

/// Emitter capability: route a listener into the signal for `kind`
///
/// Implemented by each entity variant that emits events. Kinds a variant does
/// not emit are ignored with a debug log; kind dispatch stays inside the
/// variant.
pub trait Invoker {
    fn wire(&mut self, kind: EventKind, listener: Listener);
}

/// Shared handle to a registered emitter
pub type EmitterHandle = Rc<RefCell<dyn Invoker>>;

/// Dual-table event registry: kind -> listeners and kind -> emitters
///
/// A listener registered before its emitters exist is wired retroactively
/// when each emitter arrives, and vice versa. There is no unregistration; the
/// registry's lifetime bounds the level session.
#[derive(Default)]
pub struct EventRegistry {
    listeners: [Vec<Listener>; EVENT_KIND_COUNT],
    emitters: [Vec<EmitterHandle>; EVENT_KIND_COUNT],
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an emitter for `kind` and wire every known listener into it
    ///
    /// Re-registering the same emitter for the same kind is a no-op, so no
    /// (emitter, listener) pair is ever wired twice.
    pub fn register_emitter(&mut self, kind: EventKind, emitter: EmitterHandle) {
        let slot = kind.index();
        if self.emitters[slot].iter().any(|e| Rc::ptr_eq(e, &emitter)) {
            log::debug!("emitter already registered for {kind:?}");
            return;
        }
        {
            let mut target = emitter.borrow_mut();
            for listener in &self.listeners[slot] {
                target.wire(kind, Rc::clone(listener));
            }
        }
        self.emitters[slot].push(emitter);
    }

    /// Register a listener for `kind` and wire it into every known emitter
    ///
    /// Duplicates are allowed; each registration wires once into every
    /// current and future emitter of the kind.
    pub fn register_listener(&mut self, kind: EventKind, listener: Listener) {
        let slot = kind.index();
        for emitter in &self.emitters[slot] {
            emitter.borrow_mut().wire(kind, Rc::clone(&listener));
        }
        self.listeners[slot].push(listener);
    }

    /// Number of registered emitters for `kind`
    pub fn emitter_count(&self, kind: EventKind) -> usize {
        self.emitters[kind.index()].len()
    }

    /// Number of registered listeners for `kind`
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners[kind.index()].len()
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: Vec<usize> = self.listeners.iter().map(Vec::len).collect();
        let emitters: Vec<usize> = self.emitters.iter().map(Vec::len).collect();
        f.debug_struct("EventRegistry")
            .field("listeners", &listeners)
            .field("emitters", &emitters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Signal;
    use proptest::prelude::*;
    use std::cell::Cell;

    /// Minimal emitter: one supported kind, one signal
    struct Probe {
        kind: EventKind,
        fired: Signal,
    }

    impl Probe {
        fn new(kind: EventKind) -> Self {
            Self {
                kind,
                fired: Signal::new(),
            }
        }
    }

    impl Invoker for Probe {
        fn wire(&mut self, kind: EventKind, listener: Listener) {
            if kind == self.kind {
                self.fired.connect(listener);
            }
        }
    }

    fn counting_listener(hits: &Rc<Cell<usize>>) -> Listener {
        let hits = Rc::clone(hits);
        Rc::new(move || hits.set(hits.get() + 1))
    }

    #[test]
    fn test_listener_before_emitter_is_wired_retroactively() {
        let mut registry = EventRegistry::new();
        let hits = Rc::new(Cell::new(0));

        registry.register_listener(EventKind::LifeGained, counting_listener(&hits));
        let probe = Rc::new(RefCell::new(Probe::new(EventKind::LifeGained)));
        registry.register_emitter(EventKind::LifeGained, probe.clone());

        probe.borrow().fired.emit();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_emitter_before_listener_is_wired_immediately() {
        let mut registry = EventRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let probe = Rc::new(RefCell::new(Probe::new(EventKind::LifeGained)));
        registry.register_emitter(EventKind::LifeGained, probe.clone());
        registry.register_listener(EventKind::LifeGained, counting_listener(&hits));

        probe.borrow().fired.emit();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_kinds_do_not_cross_wire() {
        let mut registry = EventRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let probe = Rc::new(RefCell::new(Probe::new(EventKind::PaceBoost)));
        registry.register_emitter(EventKind::PaceBoost, probe.clone());
        registry.register_listener(EventKind::LifeGained, counting_listener(&hits));

        probe.borrow().fired.emit();
        assert_eq!(hits.get(), 0);
        assert_eq!(registry.emitter_count(EventKind::PaceBoost), 1);
        assert_eq!(registry.listener_count(EventKind::PaceBoost), 0);
    }

    #[test]
    fn test_emitter_reregistration_is_a_noop() {
        let mut registry = EventRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let probe = Rc::new(RefCell::new(Probe::new(EventKind::PaceBoost)));
        registry.register_emitter(EventKind::PaceBoost, probe.clone());
        registry.register_listener(EventKind::PaceBoost, counting_listener(&hits));
        registry.register_emitter(EventKind::PaceBoost, probe.clone());

        probe.borrow().fired.emit();
        assert_eq!(hits.get(), 1);
        assert_eq!(registry.emitter_count(EventKind::PaceBoost), 1);
    }

    #[test]
    fn test_duplicate_listener_fires_per_registration() {
        let mut registry = EventRegistry::new();
        let hits = Rc::new(Cell::new(0));

        let probe = Rc::new(RefCell::new(Probe::new(EventKind::ActorDestroyed)));
        registry.register_emitter(EventKind::ActorDestroyed, probe.clone());
        let listener = counting_listener(&hits);
        registry.register_listener(EventKind::ActorDestroyed, Rc::clone(&listener));
        registry.register_listener(EventKind::ActorDestroyed, listener);

        probe.borrow().fired.emit();
        assert_eq!(hits.get(), 2);
    }

    proptest! {
        /// Any interleaving of registrations wires every pair exactly once
        #[test]
        fn test_wiring_is_order_independent(
            order in proptest::collection::vec(any::<bool>(), 1..14)
        ) {
            let mut registry = EventRegistry::new();
            let hits = Rc::new(Cell::new(0usize));
            let mut probes = Vec::new();
            let mut listeners = 0usize;

            for register_listener in order {
                if register_listener {
                    registry.register_listener(
                        EventKind::RespawnRequest,
                        counting_listener(&hits),
                    );
                    listeners += 1;
                } else {
                    let probe = Rc::new(RefCell::new(Probe::new(EventKind::RespawnRequest)));
                    registry.register_emitter(EventKind::RespawnRequest, probe.clone());
                    probes.push(probe);
                }
            }

            for probe in &probes {
                probe.borrow().fired.emit();
            }
            prop_assert_eq!(hits.get(), probes.len() * listeners);
        }
    }
}
