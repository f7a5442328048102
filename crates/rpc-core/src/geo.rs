//! Local and global 3-D points, and the rotation relating the two frames.
//!
//! All coordinates are single-precision centimetres, which is ample for a
//! detector a few tens of metres across.  Local frames are attached to a roll:
//! `x` runs across the strips, `y` along them and `z` is the plane normal.

use std::ops::{Add, Sub};

/// A point in a roll's local frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LocalPoint {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point in the roll plane (`z = 0`).
    #[inline]
    pub fn in_plane(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl std::fmt::Display for LocalPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// A point in the global detector frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl GlobalPoint {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Azimuthal angle in radians, in (−π, π].
    #[inline]
    pub fn phi(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Transverse distance from the beam line.
    #[inline]
    pub fn perp(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: GlobalPoint) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}

impl Add for GlobalPoint {
    type Output = GlobalPoint;
    #[inline]
    fn add(self, rhs: GlobalPoint) -> GlobalPoint {
        GlobalPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GlobalPoint {
    type Output = GlobalPoint;
    #[inline]
    fn sub(self, rhs: GlobalPoint) -> GlobalPoint {
        GlobalPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::fmt::Display for GlobalPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

// ── Rotation ──────────────────────────────────────────────────────────────────

/// Orthonormal rotation.  Row `i` is local axis `i` expressed in the global
/// frame, so `local → global` multiplies by the transpose.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    rows: [[f32; 3]; 3],
}

impl Rotation {
    pub fn identity() -> Self {
        Self { rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] }
    }

    /// Rotation of the local frame by `phi` radians about the global `z` axis.
    pub fn about_z(phi: f32) -> Self {
        let (s, c) = phi.sin_cos();
        Self { rows: [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]] }
    }

    /// Build from the three local axes expressed in global coordinates.
    /// The caller guarantees they are orthonormal.
    pub fn from_axes(x: [f32; 3], y: [f32; 3], z: [f32; 3]) -> Self {
        Self { rows: [x, y, z] }
    }

    /// `Rᵀ · v`: local components to global components.
    pub fn multiply_inverse(&self, v: [f32; 3]) -> [f32; 3] {
        let r = &self.rows;
        [
            r[0][0] * v[0] + r[1][0] * v[1] + r[2][0] * v[2],
            r[0][1] * v[0] + r[1][1] * v[1] + r[2][1] * v[2],
            r[0][2] * v[0] + r[1][2] * v[1] + r[2][2] * v[2],
        ]
    }

    /// `R · v`: global components to local components.
    pub fn multiply(&self, v: [f32; 3]) -> [f32; 3] {
        let r = &self.rows;
        [
            r[0][0] * v[0] + r[0][1] * v[1] + r[0][2] * v[2],
            r[1][0] * v[0] + r[1][1] * v[1] + r[1][2] * v[2],
            r[2][0] * v[0] + r[2][1] * v[1] + r[2][2] * v[2],
        ]
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}
