//! The level exit

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::events::{EventKind, EventRegistry, Invoker, Listener, Signal};

/// The door closing out a level; reaching it completes the run
#[derive(Debug)]
pub struct ExitDoor {
    pub pos: Vec2,
    reached: Signal,
}

impl ExitDoor {
    /// Place the door and register it as the LevelComplete emitter
    pub fn spawn(pos: Vec2, registry: &mut EventRegistry) -> Rc<RefCell<Self>> {
        let door = Rc::new(RefCell::new(Self {
            pos,
            reached: Signal::new(),
        }));
        registry.register_emitter(EventKind::LevelComplete, door.clone());
        door
    }

    /// Collision report: the player stepped into the door
    pub fn notify_player_entered(&self) {
        log::info!("exit reached");
        self.reached.emit();
    }
}

impl Invoker for ExitDoor {
    fn wire(&mut self, kind: EventKind, listener: Listener) {
        match kind {
            EventKind::LevelComplete => self.reached.connect(listener),
            other => log::debug!("exit door does not emit {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_door_emits_level_complete() {
        let mut registry = EventRegistry::new();
        let door = ExitDoor::spawn(Vec2::new(9.5, 0.51), &mut registry);
        assert_eq!(registry.emitter_count(EventKind::LevelComplete), 1);

        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        registry.register_listener(EventKind::LevelComplete, Rc::new(move || h.set(h.get() + 1)));

        door.borrow().notify_player_entered();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unsupported_kind_is_ignored() {
        let mut registry = EventRegistry::new();
        let door = ExitDoor::spawn(Vec2::ZERO, &mut registry);

        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        door.borrow_mut()
            .wire(EventKind::LifeGained, Rc::new(move || h.set(h.get() + 1)));

        door.borrow().notify_player_entered();
        assert_eq!(hits.get(), 0);
    }
}
