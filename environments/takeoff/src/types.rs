//! Fixed-size numeric types for the task boundary.
//!
//! Every shape the environment handles is known at compile time:
//! - `Vec3`: a 3D position, velocity or set of Euler angles
//! - `Pose`: position plus Euler angles, 6 scalars
//! - `RotorSpeeds`: one command per rotor, 4 scalars

use serde::{Deserialize, Serialize};

use crate::constants::{ACTION_SIZE, POSE_SIZE};

/// Rotor speed command, one entry per rotor.
pub type RotorSpeeds = [f64; ACTION_SIZE];

// ============================================================================
// Vec3
// ============================================================================

/// A 3D vector of `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline(always)]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Zero vector.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Squared magnitude.
    #[inline(always)]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean magnitude.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Sum of absolute components (L1 norm).
    #[inline(always)]
    pub fn abs_sum(&self) -> f64 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Componentwise absolute value.
    #[inline(always)]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// True if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn mul(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    #[inline(always)]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

// ============================================================================
// Pose
// ============================================================================

/// Rigid-body pose: world position and Euler angles (roll, pitch, yaw).
///
/// Flattened order is `[x, y, z, roll, pitch, yaw]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position [x, y, z]
    pub position: Vec3,
    /// Euler angles [roll, pitch, yaw] in radians
    pub euler: Vec3,
}

impl Pose {
    #[inline]
    pub const fn new(position: Vec3, euler: Vec3) -> Self {
        Self { position, euler }
    }

    /// Level pose at the given position.
    #[inline]
    pub const fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(Vec3::new(x, y, z), Vec3::zero())
    }

    #[inline]
    pub const fn from_array(arr: [f64; POSE_SIZE]) -> Self {
        Self::new(
            Vec3::new(arr[0], arr[1], arr[2]),
            Vec3::new(arr[3], arr[4], arr[5]),
        )
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; POSE_SIZE] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.euler.x,
            self.euler.y,
            self.euler.z,
        ]
    }

    #[inline(always)]
    pub fn roll(&self) -> f64 {
        self.euler.x
    }

    #[inline(always)]
    pub fn pitch(&self) -> f64 {
        self.euler.y
    }

    #[inline(always)]
    pub fn yaw(&self) -> f64 {
        self.euler.z
    }

    /// Offset of this pose's position from `target`.
    #[inline]
    pub fn offset_from(&self, target: &Vec3) -> Vec3 {
        self.position - *target
    }

    /// Euclidean distance between this pose's position and `target`.
    #[inline]
    pub fn distance_to(&self, target: &Vec3) -> f64 {
        self.offset_from(target).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.euler.is_finite()
    }
}

impl From<[f64; POSE_SIZE]> for Pose {
    fn from(arr: [f64; POSE_SIZE]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Pose> for [f64; POSE_SIZE] {
    fn from(pose: Pose) -> Self {
        pose.to_array()
    }
}
