//! Termination tests defining how sub-step `done` signals surface.
//!
//! These tests define:
//! - The sub-step loop always runs `action_repeat` times
//! - `done` comes from the final sub-step only
//! - Earlier signals are reported through `done_before_last` and episode stats
//! - Runtime and ground-contact termination through a kinematic simulator

use crate::config::TaskConfig;
use crate::env::Task;
use crate::observation::Observation;
use crate::sim::Simulator;
use crate::tests::stubs::{KinematicStub, ScriptedSimulator};
use crate::types::Pose;

fn scripted_task(sim: ScriptedSimulator) -> Task<ScriptedSimulator> {
    TaskConfig::new().build_with_simulator(sim).unwrap()
}

fn zs(obs: &Observation) -> Vec<f64> {
    obs.snapshots().map(|p| p.position.z).collect()
}

// ============================================================================
// Sub-Step Loop Tests
// ============================================================================

#[test]
fn should_not_short_circuit_on_early_done() {
    let mut task = scripted_task(ScriptedSimulator::climb_with_dones(10, &[0]));
    task.reset();

    let transition = task.step(&[400.0; 4]).unwrap();

    assert_eq!(task.simulator().timesteps(), 3);
    assert_eq!(zs(&transition.observation), vec![1.0, 2.0, 3.0]);
}

#[test]
fn should_overwrite_early_done_with_final_sub_step() {
    let mut task = scripted_task(ScriptedSimulator::climb_with_dones(10, &[0]));
    task.reset();

    let transition = task.step(&[400.0; 4]).unwrap();

    assert!(!transition.done, "Only the final sub-step decides done");
    assert!(transition.done_before_last);
    assert_eq!(task.episode().overwritten_dones, 1);
    assert!(!task.episode().done);
}

#[test]
fn should_keep_reward_of_sub_steps_after_early_done() {
    let mut flagged = scripted_task(ScriptedSimulator::climb_with_dones(10, &[0, 1]));
    let mut plain = scripted_task(ScriptedSimulator::climb(10));
    flagged.reset();
    plain.reset();

    let a = flagged.step(&[400.0; 4]).unwrap();
    let b = plain.step(&[400.0; 4]).unwrap();

    assert_eq!(a.reward, b.reward);
    assert_eq!(a.observation, b.observation);
}

// ============================================================================
// Final Sub-Step Tests
// ============================================================================

#[test]
fn should_report_done_from_final_sub_step() {
    let mut task = scripted_task(ScriptedSimulator::climb_with_dones(10, &[2]));
    task.reset();

    let transition = task.step(&[400.0; 4]).unwrap();

    assert!(transition.done);
    assert!(!transition.done_before_last);
    assert!(task.episode().done);
    assert_eq!(task.episode().overwritten_dones, 0);
}

#[test]
fn should_not_count_overwrite_when_final_sub_step_is_done() {
    let mut task = scripted_task(ScriptedSimulator::climb_with_dones(10, &[1, 2]));
    task.reset();

    let transition = task.step(&[400.0; 4]).unwrap();

    assert!(transition.done);
    assert!(transition.done_before_last);
    assert_eq!(task.episode().overwritten_dones, 0);
}

#[test]
fn should_report_done_in_later_step() {
    let mut task = scripted_task(ScriptedSimulator::climb_with_dones(10, &[5]));
    task.reset();

    assert!(!task.step(&[400.0; 4]).unwrap().done);
    let transition = task.step(&[400.0; 4]).unwrap();

    assert!(transition.done);
    assert_eq!(zs(&transition.observation), vec![4.0, 5.0, 6.0]);
    assert_eq!(task.episode().steps, 2);
}

// ============================================================================
// Exhausted Simulator Tests
// ============================================================================

#[test]
fn should_keep_stepping_after_simulator_reports_done() {
    let mut task = scripted_task(ScriptedSimulator::climb(2));
    task.reset();

    let first = task.step(&[400.0; 4]).unwrap();
    assert!(first.done);
    assert_eq!(zs(&first.observation), vec![1.0, 2.0, 2.0]);

    let second = task.step(&[400.0; 4]).unwrap();
    assert!(second.done);
    assert!(second.done_before_last);
    assert_eq!(zs(&second.observation), vec![2.0, 2.0, 2.0]);
    assert_eq!(task.simulator().timesteps(), 6);
}

#[test]
fn should_restart_cleanly_after_done() {
    let mut task = scripted_task(ScriptedSimulator::climb(2));
    task.reset();
    assert!(task.step(&[400.0; 4]).unwrap().done);

    task.reset();
    assert!(!task.episode().done);

    let transition = task.step(&[400.0; 4]).unwrap();
    assert_eq!(zs(&transition.observation), vec![1.0, 2.0, 2.0]);
}

// ============================================================================
// Kinematic Termination Tests
// ============================================================================

#[test]
fn should_terminate_when_runtime_elapses() {
    // Hover at the default init pose: 5s at 50Hz is 250 timesteps, which
    // lands in the 84th agent step.
    let mut task = TaskConfig::new().build(KinematicStub::new).unwrap();
    task.reset();

    let mut first_done = None;
    for step in 1..=100 {
        if task.step(&[400.0; 4]).unwrap().done {
            first_done = Some(step);
            break;
        }
    }

    assert_eq!(first_done, Some(84));
    assert!(task.simulator().time() >= 5.0 - 1e-9);
    assert_eq!(task.simulator().pose().position.z, 10.0);
}

#[test]
fn should_scale_episode_length_with_runtime() {
    let mut task = TaskConfig::new()
        .with_runtime(0.3)
        .build(KinematicStub::new)
        .unwrap();
    task.reset();

    // Fifteen 0.02s ticks accumulate to exactly 0.3, so the runtime is
    // reached on the final sub-step of the fifth agent step.
    let dones: Vec<bool> = (0..6)
        .map(|_| task.step(&[400.0; 4]).unwrap().done)
        .collect();

    assert_eq!(dones, vec![false, false, false, false, true, true]);
}

#[test]
fn should_terminate_on_ground_contact() {
    let mut task = TaskConfig::new()
        .with_init_pose(Pose::at(0.0, 0.0, 0.05))
        .build(KinematicStub::new)
        .unwrap();
    task.reset();

    // Minimum thrust sinks 0.04 per timestep: below ground on the second sub-step.
    let transition = task.step(&[200.0; 4]).unwrap();

    assert!(transition.done);
    assert!(transition.done_before_last);
    assert!(transition.observation.latest().unwrap().position.z < 0.0);
}
