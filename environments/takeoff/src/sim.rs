//! Capability contract for the underlying physics simulator.
//!
//! The task never looks inside the simulator. It only needs to reset it,
//! advance it one timestep under a rotor command, and read the resulting
//! pose. Initial conditions and the episode time limit are handed to the
//! simulator's constructor through [`SimulatorInit`](crate::config::SimulatorInit).

use crate::types::{Pose, RotorSpeeds};

/// A resettable, steppable, pose-readable rigid-body simulator.
///
/// # Example
///
/// ```rust,ignore
/// struct Frozen(Pose);
///
/// impl Simulator for Frozen {
///     fn reset(&mut self) {}
///     fn next_timestep(&mut self, _rotor_speeds: &RotorSpeeds) -> bool { false }
///     fn pose(&self) -> Pose { self.0 }
/// }
/// ```
pub trait Simulator {
    /// Restore the initial configured state.
    fn reset(&mut self);

    /// Advance one timestep under `rotor_speeds`.
    ///
    /// Returns `true` when the simulator considers the episode over.
    /// Must tolerate being called again after returning `true`.
    fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool;

    /// Current pose `[x, y, z, roll, pitch, yaw]`.
    fn pose(&self) -> Pose;
}

impl<S: Simulator + ?Sized> Simulator for Box<S> {
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool {
        (**self).next_timestep(rotor_speeds)
    }

    #[inline]
    fn pose(&self) -> Pose {
        (**self).pose()
    }
}

impl<S: Simulator + ?Sized> Simulator for &mut S {
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool {
        (**self).next_timestep(rotor_speeds)
    }

    #[inline]
    fn pose(&self) -> Pose {
        (**self).pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        steps: usize,
    }

    impl Simulator for Counter {
        fn reset(&mut self) {
            self.steps = 0;
        }

        fn next_timestep(&mut self, rotor_speeds: &RotorSpeeds) -> bool {
            self.steps += 1;
            rotor_speeds[0] < 0.0
        }

        fn pose(&self) -> Pose {
            Pose::at(0.0, 0.0, self.steps as f64)
        }
    }

    #[test]
    fn test_boxed_simulator_forwards() {
        let mut sim: Box<dyn Simulator> = Box::new(Counter { steps: 0 });
        assert!(!sim.next_timestep(&[1.0; 4]));
        assert!(sim.next_timestep(&[-1.0; 4]));
        assert_eq!(sim.pose().position.z, 2.0);
        sim.reset();
        assert_eq!(sim.pose().position.z, 0.0);
    }

    #[test]
    fn test_borrowed_simulator_forwards() {
        fn drive<S: Simulator>(mut sim: S) {
            sim.next_timestep(&[1.0; 4]);
        }

        let mut inner = Counter { steps: 0 };
        drive(&mut inner);
        assert_eq!(inner.steps, 1);
    }
}
