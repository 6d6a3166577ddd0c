//! Built-in reward components for the takeoff task.
//!
//! Each component is a small `Copy` struct implementing [`RewardComponent`].
//! Penalties return non-positive values; bonuses return their configured
//! reward.

use serde::{Deserialize, Serialize};

use super::RewardComponent;
use crate::constants::{FAR_REWARD, NEAR_REWARD, PROXIMITY_RADIUS};
use crate::types::{Pose, Vec3};

// ============================================================================
// Proximity Bonus
// ============================================================================

/// Coarse bonus: `inside` when strictly closer than `radius` to the target,
/// `outside` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProximityBonus {
    /// Euclidean distance threshold (exclusive)
    pub radius: f64,
    /// Reward inside the radius
    pub inside: f64,
    /// Reward at or beyond the radius
    pub outside: f64,
}

impl Default for ProximityBonus {
    fn default() -> Self {
        Self {
            radius: PROXIMITY_RADIUS,
            inside: NEAR_REWARD,
            outside: FAR_REWARD,
        }
    }
}

impl RewardComponent for ProximityBonus {
    const NAME: &'static str = "ProximityBonus";

    #[inline]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        if pose.distance_to(target) < self.radius {
            self.inside
        } else {
            self.outside
        }
    }
}

// ============================================================================
// Attitude Penalty
// ============================================================================

/// Penalizes absolute roll, pitch and yaw.
///
/// `reward -= weight * (|roll| + |pitch| + |yaw|)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttitudePenalty {
    pub weight: f64,
}

impl RewardComponent for AttitudePenalty {
    const NAME: &'static str = "AttitudePenalty";

    #[inline]
    fn compute(&self, pose: &Pose, _target: &Vec3) -> f64 {
        if self.weight == 0.0 {
            return 0.0;
        }
        -self.weight * pose.euler.abs_sum()
    }
}

// ============================================================================
// Lateral Drift Penalty
// ============================================================================

/// Penalizes horizontal drift from the target.
///
/// `reward -= weight * (|x - tx| + |y - ty|)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LateralDriftPenalty {
    pub weight: f64,
}

impl RewardComponent for LateralDriftPenalty {
    const NAME: &'static str = "LateralDriftPenalty";

    #[inline]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        if self.weight == 0.0 {
            return 0.0;
        }
        let offset = pose.offset_from(target);
        -self.weight * (offset.x.abs() + offset.y.abs())
    }
}

// ============================================================================
// Altitude Penalty
// ============================================================================

/// Penalizes vertical distance from the target.
///
/// `reward -= weight * |z - tz|`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AltitudePenalty {
    pub weight: f64,
}

impl RewardComponent for AltitudePenalty {
    const NAME: &'static str = "AltitudePenalty";

    #[inline]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        if self.weight == 0.0 {
            return 0.0;
        }
        -self.weight * (pose.position.z - target.z).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Vec3 {
        Vec3::new(0.0, 0.0, 10.0)
    }

    #[test]
    fn test_proximity_inside_and_outside() {
        let bonus = ProximityBonus::default();
        assert_eq!(bonus.compute(&Pose::at(0.0, 0.0, 9.0), &target()), 100.0);
        assert_eq!(bonus.compute(&Pose::at(0.0, 0.0, 5.0), &target()), 10.0);
    }

    #[test]
    fn test_proximity_radius_is_exclusive() {
        let bonus = ProximityBonus::default();
        assert_eq!(bonus.compute(&Pose::at(0.0, 0.0, 8.0), &target()), 10.0);
    }

    #[test]
    fn test_attitude_penalty_uses_absolute_angles() {
        let pose = Pose::from_array([0.0, 0.0, 10.0, -0.5, 0.25, -1.0]);
        let reward = AttitudePenalty { weight: 1.0 }.compute(&pose, &target());
        assert!((reward - (-1.75)).abs() < 1e-12, "got {}", reward);
    }

    #[test]
    fn test_lateral_drift_ignores_altitude() {
        let pose = Pose::at(-3.0, 4.0, 0.0);
        let reward = LateralDriftPenalty { weight: 1.0 }.compute(&pose, &target());
        assert!((reward - (-7.0)).abs() < 1e-12, "got {}", reward);
    }

    #[test]
    fn test_altitude_penalty_symmetric() {
        let penalty = AltitudePenalty { weight: 2.0 };
        let below = penalty.compute(&Pose::at(0.0, 0.0, 7.0), &target());
        let above = penalty.compute(&Pose::at(0.0, 0.0, 13.0), &target());
        assert_eq!(below, above);
        assert!((below - (-6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_returns_zero() {
        let pose = Pose::from_array([5.0, 5.0, 5.0, 1.0, 1.0, 1.0]);
        assert_eq!(AttitudePenalty { weight: 0.0 }.compute(&pose, &target()), 0.0);
        assert_eq!(LateralDriftPenalty { weight: 0.0 }.compute(&pose, &target()), 0.0);
        assert_eq!(AltitudePenalty { weight: 0.0 }.compute(&pose, &target()), 0.0);
    }
}
