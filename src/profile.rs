//! Difficulty profiles
//!
//! The value object driving generation: a target strip length plus the
//! probability bands for each draw. Validated before generation; the pass
//! itself never fails at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::END_CAP_SEGMENTS;

/// Why a profile was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("target length {got} cannot hold the entry and exit caps (minimum {min})")]
    TargetTooShort { got: usize, min: usize },
    #[error("{name} probability {value} is outside [0, 1)")]
    ProbabilityRange { name: &'static str, value: f32 },
}

/// Built-in difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// The generation profile shipped with this preset
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                target_len: 48,
                water: 0.2,
                patrol: 0.1,
                crusher: 0.1,
                power_up: 0.3,
                pickup_odds: PickupOdds::default(),
            },
            Difficulty::Medium => DifficultyProfile {
                target_len: 80,
                water: 0.28,
                patrol: 0.2,
                crusher: 0.2,
                power_up: 0.2,
                pickup_odds: PickupOdds::default(),
            },
            Difficulty::Hard => DifficultyProfile {
                target_len: 112,
                water: 0.34,
                patrol: 0.26,
                crusher: 0.3,
                power_up: 0.1,
                pickup_odds: PickupOdds::default(),
            },
        }
    }
}

/// Variant bands for the pickup draw
///
/// The high end of the draw range belongs to life packs and the low end to
/// immunity; whatever lies between selects the pace boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupOdds {
    pub life_pack: f32,
    pub immunity: f32,
}

impl Default for PickupOdds {
    fn default() -> Self {
        Self {
            life_pack: 0.3,
            immunity: 0.35,
        }
    }
}

/// Generation parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Committed strip length in segments
    pub target_len: usize,
    /// Band for water runs, claimed from the low end of the draw range
    pub water: f32,
    /// Band for patrolling hazards, directly above the water band
    pub patrol: f32,
    /// Band for crushers, claimed from the high end of the draw range
    pub crusher: f32,
    /// Chance of a pickup above any plain segment (independent draw)
    pub power_up: f32,
    /// Variant bands for the pickup draw
    pub pickup_odds: PickupOdds,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::Easy.profile()
    }
}

impl DifficultyProfile {
    /// Shortest strip that still holds the entry and exit caps
    pub const MIN_TARGET_LEN: usize = 2 * END_CAP_SEGMENTS;

    /// Check every band is in [0, 1) and the target holds both end caps
    ///
    /// Bands need not sum below 1: the draw classifies in a fixed order
    /// (water, patrol, crusher from the high end, plain), so oversized bands
    /// skew the split instead of breaking it. Out-of-range values are refused
    /// outright, never clamped.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.target_len < Self::MIN_TARGET_LEN {
            return Err(ProfileError::TargetTooShort {
                got: self.target_len,
                min: Self::MIN_TARGET_LEN,
            });
        }
        for (name, value) in [
            ("water", self.water),
            ("patrol", self.patrol),
            ("crusher", self.crusher),
            ("power_up", self.power_up),
            ("life_pack", self.pickup_odds.life_pack),
            ("immunity", self.pickup_odds.immunity),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(ProfileError::ProbabilityRange { name, value });
            }
        }
        Ok(())
    }

    /// The cursor position where the body ends and the exit cap begins
    pub(crate) fn body_end(&self) -> usize {
        self.target_len - END_CAP_SEGMENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.profile().validate(), Ok(()));
        }
    }

    #[test]
    fn test_negative_probability_is_rejected() {
        let profile = DifficultyProfile {
            patrol: -0.1,
            ..DifficultyProfile::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::ProbabilityRange {
                name: "patrol",
                value: -0.1,
            })
        );
    }

    #[test]
    fn test_full_probability_is_rejected() {
        let profile = DifficultyProfile {
            water: 1.0,
            ..DifficultyProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::ProbabilityRange { name: "water", .. })
        ));
    }

    #[test]
    fn test_nan_probability_is_rejected() {
        let profile = DifficultyProfile {
            power_up: f32::NAN,
            ..DifficultyProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::ProbabilityRange {
                name: "power_up",
                ..
            })
        ));
    }

    #[test]
    fn test_pickup_odds_are_validated_too() {
        let profile = DifficultyProfile {
            pickup_odds: PickupOdds {
                life_pack: 1.5,
                immunity: 0.35,
            },
            ..DifficultyProfile::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::ProbabilityRange {
                name: "life_pack",
                ..
            })
        ));
    }

    #[test]
    fn test_target_shorter_than_the_caps_is_rejected() {
        let profile = DifficultyProfile {
            target_len: 3,
            ..DifficultyProfile::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::TargetTooShort { got: 3, min: 4 })
        );
    }

    #[test]
    fn test_minimal_target_is_accepted() {
        let profile = DifficultyProfile {
            target_len: DifficultyProfile::MIN_TARGET_LEN,
            ..DifficultyProfile::default()
        };
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_bands_need_not_sum_below_one() {
        let profile = DifficultyProfile {
            water: 0.6,
            patrol: 0.6,
            crusher: 0.6,
            ..DifficultyProfile::default()
        };
        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = Difficulty::Hard.profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: DifficultyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
