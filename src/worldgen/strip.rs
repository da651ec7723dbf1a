//! Committed strip data
//!
//! The generator's output: an ordered segment list plus the triggers and
//! spawned entities that accompany it. Physics and rendering consume the
//! segment and spawn lists; the session owns the live entities.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{TILE_SIZE, TRIGGER_HEIGHT_TILES};
use crate::entities::{CrusherHazard, ExitDoor, PatrolHazard, Pickup, PickupKind};
use crate::segment_right_edge;

/// Terrain classification of one committed segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Walkable terrain
    Ground,
    /// Lethal water
    Water,
}

/// A vertical trigger line at a segment boundary
///
/// Attached on both sides of every water run so physics can detect entities
/// crossing into or out of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryTrigger {
    pub x: f32,
    pub from_y: f32,
    pub to_y: f32,
}

impl BoundaryTrigger {
    /// Trigger line standing on the right edge of the given segment
    pub fn at_segment(index: usize) -> Self {
        Self {
            x: segment_right_edge(index),
            from_y: 0.0,
            to_y: TILE_SIZE * TRIGGER_HEIGHT_TILES,
        }
    }
}

/// What a spawn request asks the placement layer to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feature {
    Patrol,
    Crusher,
    Pickup(PickupKind),
    Exit,
}

/// One entity placement produced during generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub feature: Feature,
    pub pos: Vec2,
}

/// The generator's immutable result
#[derive(Debug)]
pub struct CommittedStrip {
    /// Ordered terrain segments, entry cap through exit cap
    pub segments: Vec<SegmentKind>,
    /// Water-run boundary triggers in commit order
    pub triggers: Vec<BoundaryTrigger>,
    /// Placement list in commit order, exit last
    pub spawns: Vec<SpawnRequest>,
    pub patrols: Vec<PatrolHazard>,
    pub crushers: Vec<Rc<RefCell<CrusherHazard>>>,
    pub pickups: Vec<Rc<RefCell<Pickup>>>,
    pub exit: Rc<RefCell<ExitDoor>>,
}

impl CommittedStrip {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Contiguous water runs as `(start_index, run_length)` pairs
    pub fn water_runs(&self) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut current: Option<(usize, usize)> = None;
        for (index, kind) in self.segments.iter().enumerate() {
            match (kind, current) {
                (SegmentKind::Water, Some((start, len))) => current = Some((start, len + 1)),
                (SegmentKind::Water, None) => current = Some((index, 1)),
                (SegmentKind::Ground, Some(run)) => {
                    runs.push(run);
                    current = None;
                }
                (SegmentKind::Ground, None) => {}
            }
        }
        if let Some(run) = current {
            runs.push(run);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_stands_on_the_segment_right_edge() {
        let trigger = BoundaryTrigger::at_segment(1);
        assert_eq!(trigger.x, 2.0);
        assert_eq!(trigger.from_y, 0.0);
        assert_eq!(trigger.to_y, 1.5);
    }
}
