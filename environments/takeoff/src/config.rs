//! Configuration types and builders for the takeoff task.
//!
//! Provides builder-style configuration for:
//! - Simulator initial conditions and episode time limit
//! - Goal position
//! - Action repeat and declared action bounds
//! - Out-of-bounds action policy
//! - Reward function (compile-time generic)

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::env::Task;
use crate::error::{Result, TaskError};
use crate::reward::{presets, RewardComponent};
use crate::sim::Simulator;
use crate::types::{Pose, RotorSpeeds, Vec3};

// ============================================================================
// Simulator Initialization
// ============================================================================

/// Initial conditions handed to the simulator factory.
///
/// The task does not interpret these; `None` means "simulator default".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorInit {
    /// Initial pose [x, y, z, roll, pitch, yaw]
    pub init_pose: Option<Pose>,
    /// Initial linear velocity [vx, vy, vz]
    pub init_velocities: Option<Vec3>,
    /// Initial Euler angle rates (rad/s)
    pub init_angle_velocities: Option<Vec3>,
    /// Per-episode time limit, enforced by the simulator
    pub runtime: f64,
}

impl Default for SimulatorInit {
    fn default() -> Self {
        Self {
            init_pose: None,
            init_velocities: None,
            init_angle_velocities: None,
            runtime: DEFAULT_RUNTIME,
        }
    }
}

impl SimulatorInit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_init_pose(mut self, pose: Pose) -> Self {
        self.init_pose = Some(pose);
        self
    }

    pub fn with_init_velocities(mut self, velocities: Vec3) -> Self {
        self.init_velocities = Some(velocities);
        self
    }

    pub fn with_init_angle_velocities(mut self, angle_velocities: Vec3) -> Self {
        self.init_angle_velocities = Some(angle_velocities);
        self
    }

    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.runtime = runtime;
        self
    }
}

// ============================================================================
// Action Space
// ============================================================================

/// Declared inclusive range of each rotor speed command.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionBounds {
    pub low: f64,
    pub high: f64,
}

impl Default for ActionBounds {
    fn default() -> Self {
        Self {
            low: ACTION_LOW,
            high: ACTION_HIGH,
        }
    }
}

impl ActionBounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// True if `value` lies in `[low, high]`. NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Clamp `value` into `[low, high]`. NaN maps to `low`.
    ///
    /// Never panics; with inverted bounds every value maps to `high`.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.low
        } else {
            value.max(self.low).min(self.high)
        }
    }
}

/// How `step` treats rotor commands outside [`ActionBounds`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPolicy {
    /// Forward commands unchanged; the agent owns the bounds.
    #[default]
    Passthrough,
    /// Clamp each command into the bounds before stepping.
    Clamp,
    /// Refuse the step with [`TaskError::ActionOutOfBounds`].
    Reject,
}

impl ActionPolicy {
    /// Apply the policy to a rotor command.
    pub fn apply(&self, action: RotorSpeeds, bounds: &ActionBounds) -> Result<RotorSpeeds> {
        match self {
            Self::Passthrough => Ok(action),
            Self::Clamp => Ok(action.map(|v| bounds.clamp(v))),
            Self::Reject => {
                for (index, &value) in action.iter().enumerate() {
                    if !bounds.contains(value) {
                        return Err(TaskError::ActionOutOfBounds {
                            index,
                            value,
                            low: bounds.low,
                            high: bounds.high,
                        });
                    }
                }
                Ok(action)
            }
        }
    }
}

// ============================================================================
// Main Task Configuration
// ============================================================================

/// Main configuration for the takeoff task.
///
/// Generic over reward type `R`; defaults to [`presets::TakeoffReward`].
///
/// # Example
///
/// ```ignore
/// use takeoff_env::{TaskConfig, Vec3};
///
/// let task = TaskConfig::new()
///     .with_target(Vec3::new(0.0, 0.0, 15.0))
///     .with_runtime(10.0)
///     .build(|init| MySimulator::new(init))?;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "R: Deserialize<'de> + Default"))]
pub struct TaskConfig<R: RewardComponent = presets::TakeoffReward> {
    /// Simulator initial conditions
    pub sim: SimulatorInit,
    /// Goal position [x, y, z]
    pub target_pos: Vec3,
    /// Simulator sub-steps per agent step
    pub action_repeat: usize,
    /// Declared rotor speed bounds
    pub action_bounds: ActionBounds,
    /// Out-of-bounds handling
    pub action_policy: ActionPolicy,
    /// Reward function
    pub reward: R,
}

impl<R: RewardComponent + Default> Default for TaskConfig<R> {
    fn default() -> Self {
        Self {
            sim: SimulatorInit::default(),
            target_pos: Vec3::from_array(DEFAULT_TARGET),
            action_repeat: ACTION_REPEAT,
            action_bounds: ActionBounds::default(),
            action_policy: ActionPolicy::default(),
            reward: R::default(),
        }
    }
}

impl TaskConfig<presets::TakeoffReward> {
    /// Default configuration with the takeoff reward.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: RewardComponent> TaskConfig<R> {
    /// Replace the reward function, changing the reward type.
    pub fn with_reward_fn<R2: RewardComponent>(self, reward: R2) -> TaskConfig<R2> {
        TaskConfig {
            sim: self.sim,
            target_pos: self.target_pos,
            action_repeat: self.action_repeat,
            action_bounds: self.action_bounds,
            action_policy: self.action_policy,
            reward,
        }
    }

    /// Set simulator initial conditions.
    pub fn with_sim(mut self, sim: SimulatorInit) -> Self {
        self.sim = sim;
        self
    }

    pub fn with_init_pose(mut self, pose: Pose) -> Self {
        self.sim.init_pose = Some(pose);
        self
    }

    pub fn with_init_velocities(mut self, velocities: Vec3) -> Self {
        self.sim.init_velocities = Some(velocities);
        self
    }

    pub fn with_init_angle_velocities(mut self, angle_velocities: Vec3) -> Self {
        self.sim.init_angle_velocities = Some(angle_velocities);
        self
    }

    pub fn with_runtime(mut self, runtime: f64) -> Self {
        self.sim.runtime = runtime;
        self
    }

    /// Set goal position.
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target_pos = target;
        self
    }

    /// Set simulator sub-steps per agent step.
    pub fn with_action_repeat(mut self, action_repeat: usize) -> Self {
        self.action_repeat = action_repeat;
        self
    }

    /// Set declared action bounds.
    pub fn with_action_bounds(mut self, low: f64, high: f64) -> Self {
        self.action_bounds = ActionBounds::new(low, high);
        self
    }

    /// Set the out-of-bounds action policy.
    pub fn with_action_policy(mut self, policy: ActionPolicy) -> Self {
        self.action_policy = policy;
        self
    }

    /// Observation length: `POSE_SIZE * action_repeat`.
    pub fn state_size(&self) -> usize {
        state_size(self.action_repeat)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.action_repeat == 0 {
            return Err(TaskError::invalid_config(
                "action_repeat",
                "must be at least 1",
            ));
        }

        let ActionBounds { low, high } = self.action_bounds;
        if !low.is_finite() || !high.is_finite() {
            return Err(TaskError::invalid_config(
                "action_bounds",
                format!("bounds must be finite, got [{}, {}]", low, high),
            ));
        }
        if low > high {
            return Err(TaskError::invalid_config(
                "action_bounds",
                format!("low ({}) must not exceed high ({})", low, high),
            ));
        }

        if !self.sim.runtime.is_finite() || self.sim.runtime <= 0.0 {
            return Err(TaskError::invalid_config(
                "runtime",
                format!("must be positive and finite, got {}", self.sim.runtime),
            ));
        }

        if !self.target_pos.is_finite() {
            return Err(TaskError::invalid_config(
                "target_pos",
                format!("components must be finite, got {:?}", self.target_pos),
            ));
        }

        Ok(())
    }

    /// Build a task, constructing the simulator from [`SimulatorInit`].
    pub fn build<S, F>(self, make_sim: F) -> Result<Task<S, R>>
    where
        S: Simulator,
        F: FnOnce(&SimulatorInit) -> S,
    {
        self.validate()?;
        let sim = make_sim(&self.sim);
        Task::from_config(self, sim)
    }

    /// Build a task around an already constructed simulator.
    pub fn build_with_simulator<S: Simulator>(self, sim: S) -> Result<Task<S, R>> {
        Task::from_config(self, sim)
    }
}
