//! Main takeoff task environment.
//!
//! Wraps one [`Simulator`] and turns its raw pose into the agent-facing
//! contract: pose-window observations, action repeat and a shaped reward.

use crate::config::{ActionBounds, TaskConfig};
use crate::constants::ACTION_SIZE;
use crate::episode::EpisodeStats;
use crate::error::{Result, TaskError};
use crate::observation::Observation;
use crate::reward::{presets, RewardComponent};
use crate::sim::Simulator;
use crate::types::{RotorSpeeds, Vec3};

/// Outcome of one agent step.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Pose snapshots of every sub-step, oldest first
    pub observation: Observation,
    /// Sum of the sub-step rewards
    pub reward: f64,
    /// Termination flag of the final sub-step
    pub done: bool,
    /// True if any earlier sub-step signalled termination
    pub done_before_last: bool,
}

impl Transition {
    /// Split into the classic `(observation, reward, done)` triple.
    pub fn into_parts(self) -> (Observation, f64, bool) {
        (self.observation, self.reward, self.done)
    }
}

/// Convert a flat action slice into a rotor command.
pub fn rotor_speeds_from_slice(action: &[f64]) -> Result<RotorSpeeds> {
    RotorSpeeds::try_from(action).map_err(|_| TaskError::ActionDimensionMismatch {
        expected: ACTION_SIZE,
        actual: action.len(),
    })
}

/// Takeoff task over a simulator `S`.
///
/// Generic over reward type `R` for compile-time reward composition.
/// Defaults to [`presets::TakeoffReward`].
///
/// Each call to [`step`](Task::step) advances the simulator exactly
/// `action_repeat` times under the same command and never stops early,
/// even if an intermediate sub-step reports termination.
pub struct Task<S: Simulator, R: RewardComponent = presets::TakeoffReward> {
    /// Task configuration
    config: TaskConfig<R>,

    /// Exclusively owned simulator
    sim: S,

    /// Bookkeeping since last reset
    episode: EpisodeStats,
}

impl<S: Simulator, R: RewardComponent> Task<S, R> {
    /// Create a task from configuration and a simulator.
    pub fn from_config(config: TaskConfig<R>, sim: S) -> Result<Self> {
        config.validate()?;

        log::debug!(
            "takeoff task: target={:?} action_repeat={} bounds=[{}, {}] policy={:?} reward={}",
            config.target_pos,
            config.action_repeat,
            config.action_bounds.low,
            config.action_bounds.high,
            config.action_policy,
            R::NAME,
        );

        Ok(Self {
            config,
            sim,
            episode: EpisodeStats::new(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TaskConfig<R> {
        &self.config
    }

    /// Get read access to the simulator.
    pub fn simulator(&self) -> &S {
        &self.sim
    }

    /// Get mutable access to the simulator.
    pub fn simulator_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    /// Consume the task, returning its simulator.
    pub fn into_simulator(self) -> S {
        self.sim
    }

    /// Statistics for the current episode.
    pub fn episode(&self) -> &EpisodeStats {
        &self.episode
    }

    /// Action dimension (one command per rotor).
    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    /// Declared lower bound of a rotor command.
    pub fn action_low(&self) -> f64 {
        self.config.action_bounds.low
    }

    /// Declared upper bound of a rotor command.
    pub fn action_high(&self) -> f64 {
        self.config.action_bounds.high
    }

    pub fn action_bounds(&self) -> ActionBounds {
        self.config.action_bounds
    }

    /// Simulator sub-steps per agent step.
    pub fn action_repeat(&self) -> usize {
        self.config.action_repeat
    }

    /// Observation length.
    pub fn state_size(&self) -> usize {
        self.config.state_size()
    }

    /// Goal position.
    pub fn target_pos(&self) -> Vec3 {
        self.config.target_pos
    }

    /// Reward for the simulator's current pose.
    pub fn reward(&self) -> f64 {
        self.config.reward.compute(&self.sim.pose(), &self.config.target_pos)
    }

    /// Reset the simulator and start a new episode.
    ///
    /// No sub-step has happened yet, so the observation is the initial pose
    /// repeated `action_repeat` times.
    pub fn reset(&mut self) -> Observation {
        if self.episode.steps > 0 {
            log::debug!(
                "episode ended: steps={} sub_steps={} total_reward={:.4} done={}",
                self.episode.steps,
                self.episode.sub_steps,
                self.episode.total_reward,
                self.episode.done,
            );
        }

        self.sim.reset();
        self.episode.clear();

        let pose = self.sim.pose();
        log::trace!("reset: initial pose {:?}", pose);

        Observation::repeated(&pose, self.config.action_repeat)
    }

    /// Advance the task by one agent step.
    ///
    /// `action` must hold exactly four rotor commands. Out-of-range commands
    /// are handled by the configured [`ActionPolicy`](crate::config::ActionPolicy);
    /// under the default policy they reach the simulator unchanged.
    pub fn step(&mut self, action: &[f64]) -> Result<Transition> {
        let rotor_speeds = rotor_speeds_from_slice(action)?;
        self.step_rotors(rotor_speeds)
    }

    /// Advance the task by one agent step with a fixed-size rotor command.
    pub fn step_rotors(&mut self, rotor_speeds: RotorSpeeds) -> Result<Transition> {
        let rotor_speeds = self.admit_action(rotor_speeds)?;
        Ok(self.advance(rotor_speeds))
    }

    /// Run a rotor command through the configured action policy without
    /// touching the simulator.
    pub fn admit_action(&self, rotor_speeds: RotorSpeeds) -> Result<RotorSpeeds> {
        self.config
            .action_policy
            .apply(rotor_speeds, &self.config.action_bounds)
    }

    /// Sub-step loop for a command that already passed [`admit_action`](Task::admit_action).
    pub(crate) fn advance(&mut self, rotor_speeds: RotorSpeeds) -> Transition {
        let repeat = self.config.action_repeat;
        let target = self.config.target_pos;

        let mut observation = Observation::with_window(repeat);
        let mut reward = 0.0;
        let mut done = false;
        let mut done_before_last = false;

        for sub_step in 0..repeat {
            if done {
                done_before_last = true;
            }
            done = self.sim.next_timestep(&rotor_speeds);

            let pose = self.sim.pose();
            let sub_reward = self.config.reward.compute(&pose, &target);
            reward += sub_reward;
            observation.push(&pose);

            log::trace!(
                "sub-step {}/{}: pose={:?} reward={:.4} done={}",
                sub_step + 1,
                repeat,
                pose.to_array(),
                sub_reward,
                done,
            );
        }

        if done_before_last && !done {
            log::debug!(
                "step {}: termination on an earlier sub-step was overwritten by the final sub-step",
                self.episode.steps + 1,
            );
        }

        self.episode.record_step(repeat, reward, done, done_before_last);

        if done {
            log::debug!(
                "episode done after {} steps: total_reward={:.4}",
                self.episode.steps,
                self.episode.total_reward,
            );
        }

        Transition {
            observation,
            reward,
            done,
            done_before_last,
        }
    }
}

impl<S: Simulator, R: RewardComponent> std::fmt::Debug for Task<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("reward", &R::NAME)
            .field("target_pos", &self.config.target_pos)
            .field("action_repeat", &self.config.action_repeat)
            .field("action_bounds", &self.config.action_bounds)
            .field("action_policy", &self.config.action_policy)
            .field("episode", &self.episode)
            .finish()
    }
}
