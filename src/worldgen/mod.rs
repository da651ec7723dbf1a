//! Deterministic strip generation
//!
//! One generator instance produces one immutable strip. This module must be
//! pure and deterministic:
//! - Seeded or scripted sample source only
//! - Single forward pass, append-only commits
//! - No rendering or physics dependencies

pub mod generator;
pub mod strip;

pub use generator::LevelGenerator;
pub use strip::{BoundaryTrigger, CommittedStrip, Feature, SegmentKind, SpawnRequest};
