//! Remaining-life accounting
//!
//! Turns actor destruction into a respawn demand while lives remain, and
//! into level failure when they run out.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{EventKind, EventRegistry, Invoker, Listener, Signal};

/// Owns the life count for one level session
#[derive(Debug)]
pub struct LifeTracker {
    lives: u32,
    respawn: Signal,
    failed: Signal,
}

impl LifeTracker {
    /// Create the tracker and wire it into the registry
    ///
    /// Emits RespawnRequest and LevelFailed; listens for ActorDestroyed and
    /// LifeGained. Listener closures hold the tracker weakly so dropping the
    /// session tears everything down.
    pub fn spawn(starting_lives: u32, registry: &mut EventRegistry) -> Rc<RefCell<Self>> {
        let tracker = Rc::new(RefCell::new(Self {
            lives: starting_lives,
            respawn: Signal::new(),
            failed: Signal::new(),
        }));

        registry.register_emitter(EventKind::RespawnRequest, tracker.clone());
        registry.register_emitter(EventKind::LevelFailed, tracker.clone());

        let weak = Rc::downgrade(&tracker);
        registry.register_listener(
            EventKind::ActorDestroyed,
            Rc::new(move || {
                if let Some(tracker) = weak.upgrade() {
                    Self::lose_life(&tracker);
                }
            }),
        );

        let weak = Rc::downgrade(&tracker);
        registry.register_listener(
            EventKind::LifeGained,
            Rc::new(move || {
                if let Some(tracker) = weak.upgrade() {
                    tracker.borrow_mut().lives += 1;
                }
            }),
        );

        tracker
    }

    /// Spend one life; demand a respawn while any remain, else fail the level
    fn lose_life(handle: &Rc<RefCell<Self>>) {
        // release the borrow before firing so handlers may read the tracker
        let outcome = {
            let mut tracker = handle.borrow_mut();
            tracker.lives = tracker.lives.saturating_sub(1);
            log::debug!("lives remaining: {}", tracker.lives);
            if tracker.lives > 0 {
                tracker.respawn.clone()
            } else {
                tracker.failed.clone()
            }
        };
        outcome.emit();
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }
}

impl Invoker for LifeTracker {
    fn wire(&mut self, kind: EventKind, listener: Listener) {
        match kind {
            EventKind::RespawnRequest => self.respawn.connect(listener),
            EventKind::LevelFailed => self.failed.connect(listener),
            other => log::debug!("life tracker does not emit {other:?}"),
        }
    }
}
