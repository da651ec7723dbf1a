//! Strip hazards
//!
//! Neither hazard emits events; lethal contact is routed into the player by
//! the embedding's collision layer. The crusher's re-check loop is the
//! timer's re-arm-from-callback case in the wild.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::consts::{CRUSHER_RECHECK_SECS, PATROL_BODY_RADIUS};
use crate::timer::Countdown;

/// How a player contact with a patrol hazard resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The player came down on top: the hazard dies
    HazardSquashed,
    /// Any other contact kills the player
    LethalToPlayer,
}

/// A walker pacing the strip, turning around at obstacles
#[derive(Debug, Clone)]
pub struct PatrolHazard {
    pub pos: Vec2,
    speed: f32,
    dir: f32,
    alive: bool,
}

impl PatrolHazard {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            dir: 1.0,
            alive: true,
        }
    }

    /// Advance along the strip
    pub fn tick(&mut self, dt: f32) {
        if self.alive {
            self.pos.x += self.speed * self.dir * dt;
        }
    }

    /// Obstacle report: reverse walking direction
    pub fn turn_around(&mut self) {
        self.dir = -self.dir;
    }

    /// Resolve a player contact
    ///
    /// A falling player above the body squashes the hazard; any other
    /// contact is lethal to the player and the embedding routes it into
    /// `PlayerActor::hit_hazard`.
    pub fn resolve_player_contact(
        &mut self,
        player_y: f32,
        player_falling: bool,
    ) -> ContactOutcome {
        if player_falling && player_y > self.pos.y + PATROL_BODY_RADIUS {
            self.alive = false;
            ContactOutcome::HazardSquashed
        } else {
            ContactOutcome::LethalToPlayer
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn direction(&self) -> f32 {
        self.dir
    }
}

/// A slam hazard bouncing between floor and ceiling over one segment
///
/// At the strip boundary it waits out a short countdown and re-checks: if
/// the landing column is still blocked by another hazard it re-arms and
/// waits again, otherwise it flips its slam direction.
#[derive(Debug)]
pub struct CrusherHazard {
    pub pos: Vec2,
    slam_dir: f32,
    blocked: bool,
    recheck: Countdown,
}

impl CrusherHazard {
    /// Place a crusher with its re-check countdown pre-wired
    pub fn spawn(pos: Vec2) -> Rc<RefCell<Self>> {
        let crusher = Rc::new(RefCell::new(Self {
            pos,
            slam_dir: -1.0,
            blocked: false,
            recheck: Countdown::new(),
        }));

        {
            let hazard = crusher.borrow();
            hazard.recheck.set_duration(CRUSHER_RECHECK_SECS);
            let weak = Rc::downgrade(&crusher);
            hazard.recheck.on_finished(Rc::new(move || {
                if let Some(crusher) = weak.upgrade() {
                    Self::recheck_now(&crusher);
                }
            }));
        }

        crusher
    }

    /// Occupancy report for the landing column
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Surface report: bounce off floor or ceiling
    pub fn notify_surface_contact(&mut self) {
        self.slam_dir = -self.slam_dir;
    }

    /// Boundary report: decide right now whether flipping is safe
    pub fn notify_boundary_contact(handle: &Rc<RefCell<Self>>) {
        Self::recheck_now(handle);
    }

    /// Flip the slam if the column is clear; otherwise wait and re-check
    fn recheck_now(handle: &Rc<RefCell<Self>>) {
        let timer = {
            let mut crusher = handle.borrow_mut();
            if crusher.blocked {
                crusher.recheck.clone()
            } else {
                crusher.slam_dir = -crusher.slam_dir;
                return;
            }
        };
        timer.start();
    }

    /// Advance the re-check countdown
    pub fn tick(handle: &Rc<RefCell<Self>>, dt: f32) {
        let timer = handle.borrow().recheck.clone();
        timer.tick(dt);
    }

    pub fn slam_dir(&self) -> f32 {
        self.slam_dir
    }

    /// True while the crusher sits out a re-check delay
    pub fn is_waiting(&self) -> bool {
        self.recheck.is_running()
    }
}
