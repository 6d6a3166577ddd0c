//! Preset reward configurations.

use serde::{Deserialize, Serialize};

use super::components::*;
use super::RewardComponent;
use crate::constants::{FAR_REWARD, NEAR_REWARD, PENALTY_SCALE, PROXIMITY_RADIUS};
use crate::types::{Pose, Vec3};

/// Component tuple equivalent to [`TakeoffReward`].
pub type TakeoffComponents = (
    ProximityBonus,
    AttitudePenalty,
    LateralDriftPenalty,
    AltitudePenalty,
);

/// Every intermediate term of the takeoff reward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardBreakdown {
    /// |roll| + |pitch| + |yaw| + |x - tx| + |y - ty|
    pub stability_penalty: f64,
    /// |z - tz|
    pub distance_penalty: f64,
    /// stability_penalty + distance_penalty
    pub penalty: f64,
    /// Euclidean distance over all three axes
    pub distance: f64,
    /// Near or far base reward
    pub base: f64,
    /// base - penalty_scale * penalty
    pub reward: f64,
}

/// Dense takeoff reward: a binary proximity bonus minus a scaled penalty.
///
/// Horizontal drift is charged as part of the stability penalty, while only
/// the vertical gap counts as distance penalty.
///
/// ```text
/// stability = |roll| + |pitch| + |yaw| + |x - tx| + |y - ty|
/// distance  = |z - tz|
/// base      = near_reward if ||p - t|| < proximity_radius else far_reward
/// reward    = base - penalty_scale * (stability + distance)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeoffReward {
    /// Euclidean distance threshold for the near reward (exclusive)
    pub proximity_radius: f64,
    /// Base reward inside the radius
    pub near_reward: f64,
    /// Base reward outside the radius
    pub far_reward: f64,
    /// Multiplier on the summed penalty
    pub penalty_scale: f64,
}

impl Default for TakeoffReward {
    fn default() -> Self {
        Self {
            proximity_radius: PROXIMITY_RADIUS,
            near_reward: NEAR_REWARD,
            far_reward: FAR_REWARD,
            penalty_scale: PENALTY_SCALE,
        }
    }
}

impl TakeoffReward {
    /// Evaluate the reward and return every intermediate term.
    pub fn breakdown(&self, pose: &Pose, target: &Vec3) -> RewardBreakdown {
        let offset = pose.offset_from(target);

        let stability_penalty = pose.euler.abs_sum() + offset.x.abs() + offset.y.abs();
        let distance_penalty = offset.z.abs();
        let penalty = stability_penalty + distance_penalty;

        let distance = offset.norm();
        let base = if distance < self.proximity_radius {
            self.near_reward
        } else {
            self.far_reward
        };

        RewardBreakdown {
            stability_penalty,
            distance_penalty,
            penalty,
            distance,
            base,
            reward: base - penalty * self.penalty_scale,
        }
    }

    /// Split into independently weighted components.
    pub fn to_components(&self) -> TakeoffComponents {
        (
            ProximityBonus {
                radius: self.proximity_radius,
                inside: self.near_reward,
                outside: self.far_reward,
            },
            AttitudePenalty {
                weight: self.penalty_scale,
            },
            LateralDriftPenalty {
                weight: self.penalty_scale,
            },
            AltitudePenalty {
                weight: self.penalty_scale,
            },
        )
    }
}

impl RewardComponent for TakeoffReward {
    const NAME: &'static str = "TakeoffReward";

    #[inline]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        self.breakdown(pose, target).reward
    }
}

/// Standard takeoff reward.
pub fn takeoff() -> TakeoffReward {
    TakeoffReward::default()
}

/// Standard takeoff reward as a component tuple, for reweighting terms.
pub fn takeoff_components() -> TakeoffComponents {
    takeoff().to_components()
}

/// Proximity bonus only, no shaping penalty.
pub fn sparse() -> TakeoffReward {
    TakeoffReward {
        penalty_scale: 0.0,
        ..TakeoffReward::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_at_target() {
        let b = takeoff().breakdown(&Pose::at(0.0, 0.0, 10.0), &Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(b.stability_penalty, 0.0);
        assert_eq!(b.distance_penalty, 0.0);
        assert_eq!(b.penalty, 0.0);
        assert_eq!(b.distance, 0.0);
        assert_eq!(b.reward, 100.0);
    }

    #[test]
    fn test_breakdown_on_ground() {
        let b = takeoff().breakdown(&Pose::at(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(b.distance, 10.0);
        assert_eq!(b.distance_penalty, 10.0);
        assert_eq!(b.stability_penalty, 0.0);
        assert_eq!(b.base, 10.0);
        assert!((b.reward - 9.95).abs() < 1e-12, "got {}", b.reward);
    }

    #[test]
    fn test_sparse_has_no_penalty() {
        let pose = Pose::from_array([1.0, 1.0, 5.0, 0.5, 0.5, 0.5]);
        let reward = sparse().compute(&pose, &Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(reward, 10.0);
    }

    #[test]
    fn test_components_match_preset_at_sample() {
        let pose = Pose::from_array([0.5, -0.3, 8.7, 0.1, -0.2, 0.05]);
        let target = Vec3::new(0.0, 0.0, 10.0);
        let exact = takeoff().compute(&pose, &target);
        let composed = takeoff_components().compute(&pose, &target);
        assert!((exact - composed).abs() < 1e-9, "{} vs {}", exact, composed);
    }
}
