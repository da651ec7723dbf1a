//! Single-pass strip generator
//!
//! Classifies one uniform draw per step against the profile's bands, in a
//! fixed order: water from the low end of the range (suppressed right after
//! a water run), then patrol, then crusher from the high end, else plain
//! terrain with an independent pickup draw. Commits are append-only and
//! clamped so the exit cap always lands exactly on the target length.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::consts::{
    DOOR_LIFT, END_CAP_SEGMENTS, PATROL_BODY_RADIUS, PATROL_CLEARANCE, PATROL_PLATFORM_SEGMENTS,
    TILE_SIZE, WATER_RUN_SCALE,
};
use crate::entities::{CrusherHazard, ExitDoor, PatrolHazard, Pickup, PickupKind};
use crate::events::EventRegistry;
use crate::profile::{DifficultyProfile, ProfileError};
use crate::rng::UnitSource;
use crate::segment_center;
use crate::tuning::Tuning;

use super::strip::{BoundaryTrigger, CommittedStrip, Feature, SegmentKind, SpawnRequest};

/// Water run length for the draw that selected the water band
#[inline]
fn water_run_len(draw: f32) -> usize {
    ((draw * WATER_RUN_SCALE) as usize).max(1)
}

/// Builds one strip, then commits it
///
/// Consuming `generate` is the whole lifecycle: a generator is constructed
/// against a validated profile, runs a single forward pass, and hands over
/// an immutable [`CommittedStrip`]. There is no partial or resumable state.
#[derive(Debug)]
pub struct LevelGenerator {
    profile: DifficultyProfile,
    tuning: Tuning,
    segments: Vec<SegmentKind>,
    triggers: Vec<BoundaryTrigger>,
    spawns: Vec<SpawnRequest>,
    patrols: Vec<PatrolHazard>,
    crushers: Vec<Rc<RefCell<CrusherHazard>>>,
    pickups: Vec<Rc<RefCell<Pickup>>>,
    water_behind: bool,
}

impl LevelGenerator {
    /// Reject malformed profiles before any segment is committed
    pub fn new(profile: DifficultyProfile, tuning: Tuning) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            profile,
            tuning,
            segments: Vec::with_capacity(profile.target_len),
            triggers: Vec::new(),
            spawns: Vec::new(),
            patrols: Vec::new(),
            crushers: Vec::new(),
            pickups: Vec::new(),
            water_behind: false,
        })
    }

    /// Run the forward pass and commit the strip
    ///
    /// Spawned pickups and the exit door register their emitters with the
    /// given registry as they are created. Given the same profile and the
    /// same sample sequence the committed strip is identical.
    pub fn generate(
        mut self,
        rng: &mut impl UnitSource,
        registry: &mut EventRegistry,
    ) -> CommittedStrip {
        let body_end = self.profile.body_end();

        self.commit(END_CAP_SEGMENTS, SegmentKind::Ground);

        while self.segments.len() < body_end {
            let draw = rng.next_unit();
            if draw < self.profile.water && !self.water_behind {
                self.commit_water_run(draw, body_end);
            } else {
                self.water_behind = false;
                if draw >= self.profile.water && draw < self.profile.water + self.profile.patrol {
                    self.commit_patrol_platform(body_end);
                } else if draw >= 1.0 - self.profile.crusher {
                    self.commit_crusher_segment();
                } else {
                    self.commit(1, SegmentKind::Ground);
                    self.roll_pickup(rng, registry);
                }
            }
        }

        self.commit(END_CAP_SEGMENTS, SegmentKind::Ground);
        let exit = self.spawn_exit(registry);

        log::info!(
            "strip committed: {} segments, {} water runs, {} patrols, {} crushers, {} pickups",
            self.segments.len(),
            self.triggers.len() / 2,
            self.patrols.len(),
            self.crushers.len(),
            self.pickups.len(),
        );

        CommittedStrip {
            segments: self.segments,
            triggers: self.triggers,
            spawns: self.spawns,
            patrols: self.patrols,
            crushers: self.crushers,
            pickups: self.pickups,
            exit,
        }
    }

    fn commit(&mut self, count: usize, kind: SegmentKind) {
        for _ in 0..count {
            self.segments.push(kind);
        }
    }

    /// Index of the most recently committed segment
    ///
    /// The entry cap is committed before any call, so the strip is never
    /// empty here.
    fn last_index(&self) -> usize {
        self.segments.len() - 1
    }

    /// Water run with a boundary trigger on each side
    fn commit_water_run(&mut self, draw: f32, body_end: usize) {
        let run = water_run_len(draw).min(body_end - self.segments.len());
        self.triggers.push(BoundaryTrigger::at_segment(self.last_index()));
        self.commit(run, SegmentKind::Water);
        self.triggers.push(BoundaryTrigger::at_segment(self.last_index()));
        self.water_behind = true;
    }

    /// Two plain segments with a patrol hazard centered above the last
    fn commit_patrol_platform(&mut self, body_end: usize) {
        let count = PATROL_PLATFORM_SEGMENTS.min(body_end - self.segments.len());
        self.commit(count, SegmentKind::Ground);
        let lift = PATROL_CLEARANCE * PATROL_BODY_RADIUS + TILE_SIZE / 2.0;
        let pos = segment_center(self.last_index()) + Vec2::new(0.0, lift);
        self.spawns.push(SpawnRequest {
            feature: Feature::Patrol,
            pos,
        });
        self.patrols.push(PatrolHazard::new(pos, self.tuning.patrol_speed));
    }

    /// One plain segment with a crusher hanging a tile above it
    fn commit_crusher_segment(&mut self) {
        self.commit(1, SegmentKind::Ground);
        let pos = segment_center(self.last_index()) + Vec2::new(0.0, TILE_SIZE);
        self.spawns.push(SpawnRequest {
            feature: Feature::Crusher,
            pos,
        });
        self.crushers.push(CrusherHazard::spawn(pos));
    }

    /// Independent pickup draw above a freshly committed plain segment
    fn roll_pickup(&mut self, rng: &mut impl UnitSource, registry: &mut EventRegistry) {
        if rng.next_unit() >= self.profile.power_up {
            return;
        }
        let kind = self.pick_variant(rng.next_unit());
        let pos = segment_center(self.last_index()) + Vec2::new(0.0, TILE_SIZE / 2.0);
        self.spawns.push(SpawnRequest {
            feature: Feature::Pickup(kind),
            pos,
        });
        self.pickups.push(Pickup::spawn(kind, pos, registry));
    }

    /// Variant bands: life pack from the high end, immunity from the low
    fn pick_variant(&self, draw: f32) -> PickupKind {
        let odds = self.profile.pickup_odds;
        if draw >= 1.0 - odds.life_pack {
            PickupKind::LifePack
        } else if draw < odds.immunity {
            PickupKind::Immunity
        } else {
            PickupKind::PaceBoost
        }
    }

    fn spawn_exit(&mut self, registry: &mut EventRegistry) -> Rc<RefCell<ExitDoor>> {
        let pos = segment_center(self.last_index()) + Vec2::new(0.0, DOOR_LIFT + TILE_SIZE / 2.0);
        self.spawns.push(SpawnRequest {
            feature: Feature::Exit,
            pos,
        });
        ExitDoor::spawn(pos, registry)
    }
}
