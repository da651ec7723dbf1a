//! The player actor
//!
//! Movement and physics live in the embedding; what belongs here is the
//! event-visible core: death and respawn, and the timed power-up effects
//! with their stack-by-extension semantics.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::events::{EventKind, EventRegistry, Invoker, Listener, Signal};
use crate::timer::Countdown;
use crate::tuning::Tuning;

/// The player-controlled actor
#[derive(Debug)]
pub struct PlayerActor {
    pub pos: Vec2,
    /// Latest safe platform position; respawns land here
    checkpoint: Vec2,
    base_speed: f32,
    speed_cap: f32,
    boost_factor: f32,
    effect_secs: f32,
    immune: bool,
    alive: bool,
    destroyed: Signal,
    boost_timer: Countdown,
    immunity_timer: Countdown,
}

impl PlayerActor {
    /// Spawn the actor at `pos` and wire it into the registry
    ///
    /// Emits ActorDestroyed; listens for RespawnRequest, LevelComplete,
    /// LevelFailed and both power-up grants. Handler closures hold the actor
    /// weakly so the session owns its lifetime.
    pub fn spawn(pos: Vec2, tuning: &Tuning, registry: &mut EventRegistry) -> Rc<RefCell<Self>> {
        let player = Rc::new(RefCell::new(Self {
            pos,
            checkpoint: pos,
            base_speed: tuning.base_speed,
            speed_cap: tuning.base_speed,
            boost_factor: tuning.boost_factor,
            effect_secs: tuning.effect_secs,
            immune: false,
            alive: true,
            destroyed: Signal::new(),
            boost_timer: Countdown::new(),
            immunity_timer: Countdown::new(),
        }));

        registry.register_emitter(EventKind::ActorDestroyed, player.clone());

        // effect timers revert their own effect on completion
        {
            let actor = player.borrow();
            let weak = Rc::downgrade(&player);
            actor.boost_timer.on_finished(Rc::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.borrow_mut().end_boost();
                }
            }));
            let weak = Rc::downgrade(&player);
            actor.immunity_timer.on_finished(Rc::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.borrow_mut().immune = false;
                }
            }));
        }

        let weak = Rc::downgrade(&player);
        registry.register_listener(
            EventKind::RespawnRequest,
            Rc::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.borrow_mut().respawn();
                }
            }),
        );
        let weak = Rc::downgrade(&player);
        registry.register_listener(
            EventKind::PaceBoost,
            Rc::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.borrow_mut().apply_boost();
                }
            }),
        );
        let weak = Rc::downgrade(&player);
        registry.register_listener(
            EventKind::ImmunityGranted,
            Rc::new(move || {
                if let Some(player) = weak.upgrade() {
                    player.borrow_mut().apply_immunity();
                }
            }),
        );
        for kind in [EventKind::LevelComplete, EventKind::LevelFailed] {
            let weak = Rc::downgrade(&player);
            registry.register_listener(
                kind,
                Rc::new(move || {
                    if let Some(player) = weak.upgrade() {
                        player.borrow_mut().deactivate();
                    }
                }),
            );
        }

        player
    }

    /// Collision report: a hazard touched the actor; immunity shrugs it off
    pub fn hit_hazard(handle: &Rc<RefCell<Self>>) {
        let destroyed = {
            let actor = handle.borrow();
            if !actor.alive || actor.immune {
                return;
            }
            actor.destroyed.clone()
        };
        destroyed.emit();
    }

    /// The actor left the world bounds; immunity does not apply
    pub fn fell_out(handle: &Rc<RefCell<Self>>) {
        let destroyed = {
            let actor = handle.borrow();
            if !actor.alive {
                return;
            }
            actor.destroyed.clone()
        };
        destroyed.emit();
    }

    /// Advance the effect timers
    pub fn tick(handle: &Rc<RefCell<Self>>, dt: f32) {
        // timers tick outside the borrow: completions re-enter the actor
        let (boost, immunity) = {
            let actor = handle.borrow();
            (actor.boost_timer.clone(), actor.immunity_timer.clone())
        };
        boost.tick(dt);
        immunity.tick(dt);
    }

    /// Feed of the latest grounded position; this is the respawn point
    pub fn notify_grounded(&mut self, pos: Vec2) {
        self.checkpoint = pos;
    }

    fn apply_boost(&mut self) {
        if self.boost_timer.is_running() {
            self.boost_timer.extend(self.effect_secs);
        } else {
            self.speed_cap = self.base_speed * self.boost_factor;
            self.boost_timer.set_duration(self.effect_secs);
            self.boost_timer.start();
        }
    }

    fn end_boost(&mut self) {
        self.speed_cap = self.base_speed;
    }

    fn apply_immunity(&mut self) {
        if self.immunity_timer.is_running() {
            self.immunity_timer.extend(self.effect_secs);
        } else {
            self.immune = true;
            self.immunity_timer.set_duration(self.effect_secs);
            self.immunity_timer.start();
        }
    }

    /// Halt any running effects and revert them
    fn clear_effects(&mut self) {
        if self.boost_timer.is_running() {
            self.boost_timer.stop();
            self.end_boost();
        }
        if self.immunity_timer.is_running() {
            self.immunity_timer.stop();
            self.immune = false;
        }
    }

    /// Back to the checkpoint with a fresh mercy window
    fn respawn(&mut self) {
        self.clear_effects();
        self.pos = self.checkpoint;
        self.apply_immunity();
    }

    /// Level over: effects off, actor inert
    fn deactivate(&mut self) {
        self.clear_effects();
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_immune(&self) -> bool {
        self.immune
    }

    pub fn speed_cap(&self) -> f32 {
        self.speed_cap
    }

    pub fn checkpoint(&self) -> Vec2 {
        self.checkpoint
    }

    pub fn boost_remaining(&self) -> f32 {
        self.boost_timer.time_remaining()
    }

    pub fn immunity_remaining(&self) -> f32 {
        self.immunity_timer.time_remaining()
    }
}

impl Invoker for PlayerActor {
    fn wire(&mut self, kind: EventKind, listener: Listener) {
        match kind {
            EventKind::ActorDestroyed => self.destroyed.connect(listener),
            other => log::debug!("player does not emit {other:?}"),
        }
    }
}
