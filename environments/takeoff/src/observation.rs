//! Pose-window observations.
//!
//! An observation is the flat concatenation of consecutive pose snapshots,
//! oldest first, one per simulator sub-step:
//!
//! ```text
//! [x0, y0, z0, roll0, pitch0, yaw0, x1, y1, ..., yawN]
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::POSE_SIZE;
use crate::types::Pose;

/// Flat window of `POSE_SIZE * window` scalars.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    data: Vec<f64>,
}

impl Observation {
    /// Empty observation with room for `window` snapshots.
    pub fn with_window(window: usize) -> Self {
        Self {
            data: Vec::with_capacity(window * POSE_SIZE),
        }
    }

    /// `pose` repeated `window` times, as returned right after a reset.
    pub fn repeated(pose: &Pose, window: usize) -> Self {
        let snapshot = pose.to_array();
        let mut obs = Self::with_window(window);
        for _ in 0..window {
            obs.data.extend_from_slice(&snapshot);
        }
        obs
    }

    /// Concatenate snapshots in the given order.
    pub fn from_snapshots(poses: &[Pose]) -> Self {
        let mut obs = Self::with_window(poses.len());
        for pose in poses {
            obs.push(pose);
        }
        obs
    }

    /// Append one snapshot at the end of the window.
    #[inline]
    pub fn push(&mut self, pose: &Pose) {
        self.data.extend_from_slice(&pose.to_array());
    }

    /// Number of snapshots in the window.
    #[inline]
    pub fn window(&self) -> usize {
        self.data.len() / POSE_SIZE
    }

    /// Number of scalars.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Snapshot `idx`, counting from the oldest.
    pub fn snapshot(&self, idx: usize) -> Option<Pose> {
        let start = idx.checked_mul(POSE_SIZE)?;
        let chunk = self.data.get(start..start + POSE_SIZE)?;
        let mut arr = [0.0; POSE_SIZE];
        arr.copy_from_slice(chunk);
        Some(Pose::from_array(arr))
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> Option<Pose> {
        self.window().checked_sub(1).and_then(|idx| self.snapshot(idx))
    }

    /// Iterate snapshots oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = Pose> + '_ {
        self.data.chunks_exact(POSE_SIZE).map(|chunk| {
            let mut arr = [0.0; POSE_SIZE];
            arr.copy_from_slice(chunk);
            Pose::from_array(arr)
        })
    }

    /// Copy into a caller-provided buffer of exactly `len()` scalars.
    ///
    /// # Panics
    ///
    /// Panics if `buffer.len() != self.len()`.
    pub fn write_to(&self, buffer: &mut [f64]) {
        buffer.copy_from_slice(&self.data);
    }
}

impl AsRef<[f64]> for Observation {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl From<Observation> for Vec<f64> {
    fn from(obs: Observation) -> Self {
        obs.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_window() {
        let pose = Pose::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let obs = Observation::repeated(&pose, 3);
        assert_eq!(obs.len(), 18);
        assert_eq!(obs.window(), 3);
        for snapshot in obs.snapshots() {
            assert_eq!(snapshot, pose);
        }
    }

    #[test]
    fn test_snapshots_oldest_first() {
        let poses = [Pose::at(0.0, 0.0, 1.0), Pose::at(0.0, 0.0, 2.0)];
        let obs = Observation::from_snapshots(&poses);
        assert_eq!(obs.snapshot(0), Some(poses[0]));
        assert_eq!(obs.latest(), Some(poses[1]));
        assert_eq!(obs.snapshot(2), None);
        assert_eq!(&obs.as_slice()[6..9], &[0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_empty_observation_has_no_latest() {
        let obs = Observation::with_window(3);
        assert!(obs.is_empty());
        assert_eq!(obs.latest(), None);
    }

    #[test]
    fn test_write_to_buffer() {
        let obs = Observation::repeated(&Pose::at(1.0, 1.0, 1.0), 2);
        let mut buffer = vec![0.0; 12];
        obs.write_to(&mut buffer);
        assert_eq!(buffer, obs.into_vec());
    }

    #[test]
    #[should_panic]
    fn test_write_to_rejects_short_buffer() {
        let obs = Observation::repeated(&Pose::default(), 3);
        let mut buffer = vec![0.0; 6];
        obs.write_to(&mut buffer);
    }
}
