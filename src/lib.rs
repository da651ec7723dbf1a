//! Ledge Runner - deterministic core for a side-scrolling platform game
//!
//! Core modules:
//! - `events`: Kind-keyed signal wiring between entities
//! - `timer`: Re-armable countdown driven by explicit ticks
//! - `profile`: Difficulty profiles and fail-fast validation
//! - `tuning`: Data-driven game balance
//! - `rng`: Injected uniform sample sources
//! - `worldgen`: One-pass procedural strip generation
//! - `entities`: Player, hazards, pickups and the exit door
//! - `session`: Level session glue and outcome tracking
//!
//! Rendering, input, physics and audio live in the embedding; this crate
//! exposes data and callbacks, and the embedding feeds collision reports and
//! frame deltas back in.

pub mod entities;
pub mod events;
pub mod profile;
pub mod rng;
pub mod session;
pub mod timer;
pub mod tuning;
pub mod worldgen;

pub use events::{EventKind, EventRegistry, Invoker, Listener, Signal};
pub use profile::{Difficulty, DifficultyProfile, ProfileError};
pub use session::{LevelOutcome, LevelSession};
pub use timer::Countdown;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canonical simulation timestep (embeddings may pass any dt)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Side length of one terrain segment in world units
    pub const TILE_SIZE: f32 = 1.0;
    /// Fixed plain runs committed at the strip's entry and exit
    pub const END_CAP_SEGMENTS: usize = 2;
    /// Water run length scale: run = max(1, floor(draw * WATER_RUN_SCALE))
    pub const WATER_RUN_SCALE: f32 = 10.0;
    /// Water boundary sensor height above the terrain row, in tiles
    pub const TRIGGER_HEIGHT_TILES: f32 = 1.5;

    /// Plain segments committed under a patrol hazard
    pub const PATROL_PLATFORM_SEGMENTS: usize = 2;
    /// Patrol hazard body radius
    pub const PATROL_BODY_RADIUS: f32 = 0.5;
    /// Clearance multiplier for patrol placement above its platform
    pub const PATROL_CLEARANCE: f32 = 1.05;

    /// Delay before a crusher re-checks its landing column
    pub const CRUSHER_RECHECK_SECS: f32 = 1.0;

    /// The exit door rests this far above the final segment's surface
    pub const DOOR_LIFT: f32 = 0.01;
}

/// World-space center of segment `index` on the terrain row
#[inline]
pub fn segment_center(index: usize) -> Vec2 {
    Vec2::new((index as f32 + 0.5) * consts::TILE_SIZE, 0.0)
}

/// World-space x of the right edge of segment `index`
#[inline]
pub fn segment_right_edge(index: usize) -> f32 {
    (index as f32 + 1.0) * consts::TILE_SIZE
}
