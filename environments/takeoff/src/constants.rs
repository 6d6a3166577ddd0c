//! Default task parameters.
//!
//! The reward constants are tuned values; changing any of them changes the
//! training signal the agent sees.

// ============================================================================
// Action Space
// ============================================================================

/// Number of rotors, i.e. the action dimension.
pub const ACTION_SIZE: usize = 4;

/// Default lower bound of a rotor speed command.
pub const ACTION_LOW: f64 = 200.0;

/// Default upper bound of a rotor speed command.
pub const ACTION_HIGH: f64 = 600.0;

// ============================================================================
// Observation Space
// ============================================================================

/// Scalars per pose snapshot: [x, y, z, roll, pitch, yaw].
pub const POSE_SIZE: usize = 6;

/// Default number of simulator sub-steps per agent step.
pub const ACTION_REPEAT: usize = 3;

// ============================================================================
// Episode
// ============================================================================

/// Default per-episode time limit, enforced by the simulator.
pub const DEFAULT_RUNTIME: f64 = 5.0;

/// Default goal: hover 10 units above the origin.
pub const DEFAULT_TARGET: [f64; 3] = [0.0, 0.0, 10.0];

// ============================================================================
// Reward Shaping
// ============================================================================

/// Euclidean distance below which the proximity bonus applies (strict).
pub const PROXIMITY_RADIUS: f64 = 2.0;

/// Base reward inside the proximity radius.
pub const NEAR_REWARD: f64 = 100.0;

/// Base reward outside the proximity radius.
pub const FAR_REWARD: f64 = 10.0;

/// Scale applied to the summed stability and distance penalties.
pub const PENALTY_SCALE: f64 = 0.005;

/// Observation length for a given action repeat.
#[inline]
pub const fn state_size(action_repeat: usize) -> usize {
    POSE_SIZE * action_repeat
}
