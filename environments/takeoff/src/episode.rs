//! Per-episode bookkeeping.
//!
//! Tracks what happened since the last reset without influencing the
//! values returned to the agent.

use serde::{Deserialize, Serialize};

/// Running statistics for the current episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Agent steps since reset
    pub steps: u64,
    /// Simulator sub-steps since reset
    pub sub_steps: u64,
    /// Sum of all step rewards since reset
    pub total_reward: f64,
    /// Reward returned by the most recent step
    pub last_reward: f64,
    /// True once a step has returned `done`
    pub done: bool,
    /// Steps whose non-final sub-steps raised `done` that the final sub-step
    /// then overwrote
    pub overwritten_dones: u64,
}

impl EpisodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record one agent step.
    pub fn record_step(&mut self, sub_steps: usize, reward: f64, done: bool, done_before_last: bool) {
        self.steps += 1;
        self.sub_steps += sub_steps as u64;
        self.total_reward += reward;
        self.last_reward = reward;
        self.done = done;
        if done_before_last && !done {
            self.overwritten_dones += 1;
        }
    }

    /// Mean reward per agent step, or zero before the first step.
    pub fn mean_step_reward(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.total_reward / self.steps as f64
        }
    }
}
