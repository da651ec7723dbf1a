//! One level from start to outcome
//!
//! The session is the explicit context a level runs in: it owns the event
//! registry, the committed strip, and the long-lived entity handles, and it
//! drives every per-frame timer in a fixed order. Nothing here is global;
//! dropping the session tears the whole object graph down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;

use crate::consts::TILE_SIZE;
use crate::entities::{CrusherHazard, LifeTracker, PlayerActor};
use crate::events::{EventKind, EventRegistry};
use crate::profile::{DifficultyProfile, ProfileError};
use crate::rng::UnitSource;
use crate::segment_center;
use crate::tuning::Tuning;
use crate::worldgen::{CommittedStrip, LevelGenerator};

/// How a level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// The player reached the exit door
    Completed,
    /// The last life was spent
    Failed,
}

/// A running level: registry, strip, and entities under one owner
pub struct LevelSession {
    registry: EventRegistry,
    strip: CommittedStrip,
    player: Rc<RefCell<PlayerActor>>,
    lives: Rc<RefCell<LifeTracker>>,
    outcome: Rc<Cell<Option<LevelOutcome>>>,
}

impl LevelSession {
    /// Validate the profile, generate the strip, and wire every entity
    ///
    /// The outcome listeners are registered before any emitter exists;
    /// retroactive wiring attaches them to the door and the life tracker as
    /// those come up during generation.
    pub fn start(
        profile: DifficultyProfile,
        tuning: Tuning,
        rng: &mut impl UnitSource,
    ) -> Result<Self, ProfileError> {
        let generator = LevelGenerator::new(profile, tuning)?;
        let mut registry = EventRegistry::new();

        let outcome: Rc<Cell<Option<LevelOutcome>>> = Rc::new(Cell::new(None));
        let seen = Rc::clone(&outcome);
        registry.register_listener(
            EventKind::LevelComplete,
            Rc::new(move || {
                // first outcome wins
                if seen.get().is_none() {
                    seen.set(Some(LevelOutcome::Completed));
                }
            }),
        );
        let seen = Rc::clone(&outcome);
        registry.register_listener(
            EventKind::LevelFailed,
            Rc::new(move || {
                if seen.get().is_none() {
                    seen.set(Some(LevelOutcome::Failed));
                }
            }),
        );

        let lives = LifeTracker::spawn(tuning.starting_lives, &mut registry);
        let player = PlayerActor::spawn(
            segment_center(0) + Vec2::new(0.0, TILE_SIZE),
            &tuning,
            &mut registry,
        );
        let strip = generator.generate(rng, &mut registry);

        log::info!(
            "session started: {} segments, {} lives",
            strip.len(),
            lives.borrow().lives(),
        );

        Ok(Self {
            registry,
            strip,
            player,
            lives,
            outcome,
        })
    }

    /// Advance every owned timer by one frame, in a fixed order
    pub fn tick(&mut self, dt: f32) {
        PlayerActor::tick(&self.player, dt);
        for crusher in &self.strip.crushers {
            CrusherHazard::tick(crusher, dt);
        }
        for patrol in &mut self.strip.patrols {
            patrol.tick(dt);
        }
    }

    /// None while the level is still running
    pub fn outcome(&self) -> Option<LevelOutcome> {
        self.outcome.get()
    }

    pub fn strip(&self) -> &CommittedStrip {
        &self.strip
    }

    /// Mutable strip access for the physics layer (patrol contacts, crusher
    /// occupancy reports)
    pub fn strip_mut(&mut self) -> &mut CommittedStrip {
        &mut self.strip
    }

    pub fn player(&self) -> &Rc<RefCell<PlayerActor>> {
        &self.player
    }

    pub fn life_tracker(&self) -> &Rc<RefCell<LifeTracker>> {
        &self.lives
    }

    /// Registry access so embeddings can hang their own listeners on
    pub fn registry(&mut self) -> &mut EventRegistry {
        &mut self.registry
    }
}
