//! Reward shaping with compile-time composition.
//!
//! A reward is anything implementing [`RewardComponent`]: a pure function of
//! the current pose and the fixed target. Components compose by tupling,
//! and the tuple's reward is the sum of its members:
//!
//! ```ignore
//! use takeoff_env::reward::*;
//!
//! let reward = (
//!     ProximityBonus::default(),
//!     AttitudePenalty { weight: 0.005 },
//!     AltitudePenalty { weight: 0.005 },
//! );
//! ```
//!
//! # Built-in Components
//!
//! - [`ProximityBonus`] - Step bonus depending on distance to target
//! - [`AttitudePenalty`] - Penalizes |roll| + |pitch| + |yaw|
//! - [`LateralDriftPenalty`] - Penalizes horizontal drift |dx| + |dy|
//! - [`AltitudePenalty`] - Penalizes vertical distance |dz|
//!
//! The default task reward is [`presets::TakeoffReward`].

pub mod components;
pub mod presets;

pub use components::*;
pub use presets::*;

use crate::types::{Pose, Vec3};

/// Trait for reward terms that can be composed at compile-time.
///
/// Implementations must be pure: identical `(pose, target)` inputs always
/// yield identical output.
pub trait RewardComponent: Clone + Send + Sync {
    /// Human-readable name for logging/debugging.
    const NAME: &'static str;

    /// Reward contribution for `pose` relative to `target`.
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64;
}

// ============================================================================
// Tuple Implementations
// ============================================================================

impl RewardComponent for () {
    const NAME: &'static str = "Empty";

    #[inline(always)]
    fn compute(&self, _pose: &Pose, _target: &Vec3) -> f64 {
        0.0
    }
}

impl<A: RewardComponent, B: RewardComponent> RewardComponent for (A, B) {
    const NAME: &'static str = "Composed2";

    #[inline(always)]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        self.0.compute(pose, target) + self.1.compute(pose, target)
    }
}

impl<A: RewardComponent, B: RewardComponent, C: RewardComponent> RewardComponent for (A, B, C) {
    const NAME: &'static str = "Composed3";

    #[inline(always)]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        self.0.compute(pose, target) + self.1.compute(pose, target) + self.2.compute(pose, target)
    }
}

impl<A: RewardComponent, B: RewardComponent, C: RewardComponent, D: RewardComponent>
    RewardComponent for (A, B, C, D)
{
    const NAME: &'static str = "Composed4";

    #[inline(always)]
    fn compute(&self, pose: &Pose, target: &Vec3) -> f64 {
        self.0.compute(pose, target)
            + self.1.compute(pose, target)
            + self.2.compute(pose, target)
            + self.3.compute(pose, target)
    }
}

/// Compute the reward for a single pose using any [`RewardComponent`].
#[inline]
pub fn compute_reward<R: RewardComponent>(reward_fn: &R, pose: &Pose, target: &Vec3) -> f64 {
    reward_fn.compute(pose, target)
}
