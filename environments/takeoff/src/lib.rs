//! Quadcopter Takeoff Task Environment
//!
//! A reinforcement-learning task layered over a pluggable rigid-body
//! simulator. The task owns the episode contract (reset, step, reward,
//! termination); the physics stays behind the [`Simulator`] trait.
//!
//! # Features
//!
//! - **Action Repeat**: each agent action drives `action_repeat` simulator sub-steps
//! - **Pose-Window Observations**: the sub-step poses are concatenated, oldest first
//! - **Shaped Rewards**: proximity bonus minus a scaled stability/distance penalty
//! - **Composable Rewards**: tuple composition of [`RewardComponent`]s
//! - **Batched Stepping**: [`TaskPool`] steps independent tasks in parallel
//!
//! # Example
//!
//! ```rust,ignore
//! use takeoff_env::{TaskConfig, Vec3};
//!
//! let mut task = TaskConfig::new()
//!     .with_target(Vec3::new(0.0, 0.0, 10.0))
//!     .build(|init| MySimulator::new(init))?;
//!
//! let obs = task.reset();
//! assert_eq!(obs.len(), task.state_size()); // 6 * action_repeat
//!
//! let transition = task.step(&[400.0, 400.0, 400.0, 400.0])?;
//! println!("reward={} done={}", transition.reward, transition.done);
//! ```

// Core modules
pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Simulator boundary
pub mod sim;

// Environment components
pub mod env;
pub mod episode;
pub mod observation;
pub mod reward;

// Batched execution
pub mod pool;

// Comprehensive test suite
#[cfg(test)]
pub mod tests;

// Re-exports for convenience
pub use config::{ActionBounds, ActionPolicy, SimulatorInit, TaskConfig};
pub use constants::{
    state_size, ACTION_HIGH, ACTION_LOW, ACTION_REPEAT, ACTION_SIZE, DEFAULT_RUNTIME,
    DEFAULT_TARGET, POSE_SIZE,
};
pub use env::{rotor_speeds_from_slice, Task, Transition};
pub use episode::EpisodeStats;
pub use error::{Result, TaskError};
pub use observation::Observation;
pub use pool::{BatchTransition, TaskPool};
pub use sim::Simulator;
pub use types::{Pose, RotorSpeeds, Vec3};

pub use reward::components::{AltitudePenalty, AttitudePenalty, LateralDriftPenalty, ProximityBonus};
pub use reward::{presets, RewardComponent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
