//! Data-driven game balance
//!
//! Knobs that shape moment-to-moment play rather than generation. Embeddings
//! may deserialize these from config; the defaults are the shipped balance.

use serde::{Deserialize, Serialize};

/// Balance constants for the player and power-up effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Lives at level start
    pub starting_lives: u32,
    /// Player speed cap without a pace boost
    pub base_speed: f32,
    /// Seconds a power-up effect lasts; each stacked collect adds this much
    pub effect_secs: f32,
    /// Speed cap multiplier while a pace boost runs
    pub boost_factor: f32,
    /// Patrol hazard walk speed
    pub patrol_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            base_speed: 6.1,
            effect_secs: 7.0,
            boost_factor: 1.7,
            patrol_speed: 2.0,
        }
    }
}
