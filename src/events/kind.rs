//! Event kinds
//!
//! The closed set of gameplay notifications. Events carry no payload; the
//! kind firing is the whole message.

use serde::{Deserialize, Serialize};

/// Gameplay notification kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The exit door was reached
    LevelComplete,
    /// All lives are spent
    LevelFailed,
    /// The player actor was destroyed
    ActorDestroyed,
    /// A respawn of the player actor is demanded
    RespawnRequest,
    /// A life pack was collected
    LifeGained,
    /// A hazard-immunity power-up was collected
    ImmunityGranted,
    /// A pace-boost power-up was collected
    PaceBoost,
}

/// Number of event kinds; registry tables are indexed by kind
pub const EVENT_KIND_COUNT: usize = 7;

impl EventKind {
    /// All kinds, in table order
    pub const ALL: [EventKind; EVENT_KIND_COUNT] = [
        EventKind::LevelComplete,
        EventKind::LevelFailed,
        EventKind::ActorDestroyed,
        EventKind::RespawnRequest,
        EventKind::LifeGained,
        EventKind::ImmunityGranted,
        EventKind::PaceBoost,
    ];

    /// Table index for this kind
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_indexes_cover_tables() {
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(EventKind::ALL.len(), EVENT_KIND_COUNT);
    }
}
