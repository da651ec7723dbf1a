//! Collectible power-ups

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::events::{EventKind, EventRegistry, Invoker, Listener, Signal};

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// An extra life
    LifePack,
    /// Temporary hazard immunity
    Immunity,
    /// Temporary speed cap boost
    PaceBoost,
}

impl PickupKind {
    /// The event this pickup emits when collected
    pub fn event_kind(self) -> EventKind {
        match self {
            PickupKind::LifePack => EventKind::LifeGained,
            PickupKind::Immunity => EventKind::ImmunityGranted,
            PickupKind::PaceBoost => EventKind::PaceBoost,
        }
    }
}

/// A collectible floating above a plain segment
#[derive(Debug)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Vec2,
    collected: Signal,
    consumed: bool,
}

impl Pickup {
    /// Place a pickup and register it as the emitter of its kind
    pub fn spawn(kind: PickupKind, pos: Vec2, registry: &mut EventRegistry) -> Rc<RefCell<Self>> {
        let pickup = Rc::new(RefCell::new(Self {
            kind,
            pos,
            collected: Signal::new(),
            consumed: false,
        }));
        registry.register_emitter(kind.event_kind(), pickup.clone());
        pickup
    }

    /// Collision report: the player touched the pickup
    ///
    /// Emits on first contact only; the pickup is spent afterwards.
    pub fn notify_player_entered(&mut self) {
        if self.consumed {
            return;
        }
        self.consumed = true;
        self.collected.emit();
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl Invoker for Pickup {
    fn wire(&mut self, kind: EventKind, listener: Listener) {
        if kind == self.kind.event_kind() {
            self.collected.connect(listener);
        } else {
            log::debug!("{:?} pickup does not emit {kind:?}", self.kind);
        }
    }
}
