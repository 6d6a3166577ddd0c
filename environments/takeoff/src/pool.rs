//! Batched stepping over independent tasks.
//!
//! Each task in a [`TaskPool`] owns its own simulator; nothing is shared
//! between them, so a batch step fans out across the rayon thread pool and
//! gathers results in task order. Finished tasks are NOT reset
//! automatically: inspect [`BatchTransition::reset_indices`] and call
//! [`TaskPool::reset`] for the ones you want to restart.

use rayon::prelude::*;

use crate::env::{Task, Transition};
use crate::error::{Result, TaskError};
use crate::observation::Observation;
use crate::reward::{presets, RewardComponent};
use crate::sim::Simulator;
use crate::types::RotorSpeeds;

/// Results of one batch step, flattened in task order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTransition {
    /// Flat observations [task0_obs, task1_obs, ...]
    pub observations: Vec<f64>,
    /// Summed sub-step reward per task
    pub rewards: Vec<f64>,
    /// Final sub-step termination flag per task
    pub dones: Vec<bool>,
    /// Observation size per task
    pub obs_size: usize,
}

impl BatchTransition {
    fn gather(transitions: Vec<Transition>, obs_size: usize) -> Self {
        let mut observations = Vec::with_capacity(transitions.len() * obs_size);
        let mut rewards = Vec::with_capacity(transitions.len());
        let mut dones = Vec::with_capacity(transitions.len());

        for transition in transitions {
            observations.extend_from_slice(transition.observation.as_slice());
            rewards.push(transition.reward);
            dones.push(transition.done);
        }

        Self {
            observations,
            rewards,
            dones,
            obs_size,
        }
    }

    /// Number of tasks in the batch.
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Observation for task `idx`, or `None` past the end of the batch.
    #[inline]
    pub fn obs(&self, idx: usize) -> Option<&[f64]> {
        let start = idx.checked_mul(self.obs_size)?;
        self.observations.get(start..start.checked_add(self.obs_size)?)
    }

    /// Indices of tasks whose episode has ended.
    pub fn reset_indices(&self) -> Vec<usize> {
        self.dones
            .iter()
            .enumerate()
            .filter_map(|(idx, &done)| done.then_some(idx))
            .collect()
    }
}

/// A fixed set of independent tasks stepped together.
pub struct TaskPool<S: Simulator, R: RewardComponent = presets::TakeoffReward> {
    tasks: Vec<Task<S, R>>,
    obs_size: usize,
}

impl<S, R> TaskPool<S, R>
where
    S: Simulator + Send,
    R: RewardComponent,
{
    /// Create a pool from existing tasks.
    ///
    /// All tasks must share the same observation size.
    pub fn new(tasks: Vec<Task<S, R>>) -> Result<Self> {
        let obs_size = match tasks.first() {
            Some(task) => task.state_size(),
            None => {
                return Err(TaskError::InvalidConfig {
                    param: "tasks".to_string(),
                    message: "pool must contain at least one task".to_string(),
                })
            }
        };

        if let Some(task) = tasks.iter().find(|t| t.state_size() != obs_size) {
            return Err(TaskError::InvalidConfig {
                param: "action_repeat".to_string(),
                message: format!(
                    "all tasks must share an observation size: {} vs {}",
                    obs_size,
                    task.state_size()
                ),
            });
        }

        log::debug!("task pool: {} tasks, obs_size={}", tasks.len(), obs_size);
        Ok(Self { tasks, obs_size })
    }

    /// Create `n` tasks from a factory called with each task index.
    pub fn from_factory<F>(n: usize, mut make_task: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<Task<S, R>>,
    {
        let tasks = (0..n).map(&mut make_task).collect::<Result<Vec<_>>>()?;
        Self::new(tasks)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Observation size per task.
    pub fn obs_size(&self) -> usize {
        self.obs_size
    }

    pub fn tasks(&self) -> &[Task<S, R>] {
        &self.tasks
    }

    pub fn task(&self, idx: usize) -> Result<&Task<S, R>> {
        let len = self.tasks.len();
        self.tasks
            .get(idx)
            .ok_or(TaskError::IndexOutOfRange { index: idx, len })
    }

    pub fn task_mut(&mut self, idx: usize) -> Result<&mut Task<S, R>> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(idx)
            .ok_or(TaskError::IndexOutOfRange { index: idx, len })
    }

    /// Reset every task, returning observations in task order.
    pub fn reset_all(&mut self) -> Vec<Observation> {
        self.tasks.par_iter_mut().map(|task| task.reset()).collect()
    }

    /// Reset a single task.
    pub fn reset(&mut self, idx: usize) -> Result<Observation> {
        Ok(self.task_mut(idx)?.reset())
    }

    /// Step every task with its own rotor command.
    ///
    /// `actions` must hold one command per task. Every command is checked
    /// against its task's action policy before any simulator advances: if one
    /// is rejected, the first error in task order is returned and the whole
    /// pool is left untouched.
    pub fn step_all(&mut self, actions: &[RotorSpeeds]) -> Result<BatchTransition> {
        if actions.len() != self.tasks.len() {
            return Err(TaskError::ActionDimensionMismatch {
                expected: self.tasks.len(),
                actual: actions.len(),
            });
        }

        let commands = self
            .tasks
            .iter()
            .zip(actions)
            .map(|(task, action)| task.admit_action(*action))
            .collect::<Result<Vec<_>>>()?;

        let transitions: Vec<Transition> = self
            .tasks
            .par_iter_mut()
            .zip(commands.par_iter())
            .map(|(task, command)| task.advance(*command))
            .collect();

        Ok(BatchTransition::gather(transitions, self.obs_size))
    }

    /// Step every task from a flat action buffer `[task0_rotors, task1_rotors, ...]`.
    pub fn step_flat(&mut self, actions: &[f64]) -> Result<BatchTransition> {
        let expected = self.tasks.len() * crate::constants::ACTION_SIZE;
        if actions.len() != expected {
            return Err(TaskError::ActionDimensionMismatch {
                expected,
                actual: actions.len(),
            });
        }

        let commands = actions
            .chunks_exact(crate::constants::ACTION_SIZE)
            .map(crate::env::rotor_speeds_from_slice)
            .collect::<Result<Vec<_>>>()?;
        self.step_all(&commands)
    }
}
