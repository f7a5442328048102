//! Strip topologies: the map between strip numbers and local positions.
//!
//! Both shapes lay `nstrips` strips of constant pitch symmetrically about the
//! local `y` axis.  Strip numbers are real-valued: strip `n` (1-based) spans
//! `[n−1, n)`, so its centre sits at `n − 0.5`.
//!
//! | Shape          | Strips            | Pitch at height `y`        |
//! |----------------|-------------------|----------------------------|
//! | Rectangular    | parallel          | `pitch`                    |
//! | Trapezoidal    | converge at `r0`  | `pitch · (y + r0) / r0`    |

use rpc_core::LocalPoint;

// ── Rectangular ───────────────────────────────────────────────────────────────

/// Parallel strips of uniform pitch (barrel rolls).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangularStripTopology {
    nstrips:      i32,
    pitch:        f32,
    strip_length: f32,
    offset:       f32,
}

impl RectangularStripTopology {
    pub fn new(nstrips: i32, pitch: f32, strip_length: f32) -> Self {
        Self {
            nstrips,
            pitch,
            strip_length,
            offset: -0.5 * nstrips as f32 * pitch,
        }
    }

    /// Position of real-valued strip coordinate `strip` on the `y = 0` line.
    #[inline]
    pub fn local_position(&self, strip: f32) -> LocalPoint {
        LocalPoint::in_plane(strip * self.pitch + self.offset, 0.0)
    }

    /// Position at real strip coordinate `strip` and fractional height
    /// `y_frac` (−0.5..0.5 spans the strip length).
    pub fn local_position_at(&self, strip: f32, y_frac: f32) -> LocalPoint {
        LocalPoint::in_plane(strip * self.pitch + self.offset, y_frac * self.strip_length)
    }

    /// Real strip coordinate of `lp`, clamped to `[0, nstrips]`.
    pub fn strip(&self, lp: LocalPoint) -> f32 {
        let s = (lp.x - self.offset) / self.pitch;
        s.clamp(0.0, self.nstrips as f32)
    }

    #[inline] pub fn nstrips(&self) -> i32 { self.nstrips }
    #[inline] pub fn pitch(&self) -> f32 { self.pitch }
    #[inline] pub fn strip_length(&self) -> f32 { self.strip_length }
    #[inline] pub fn local_pitch(&self, _lp: LocalPoint) -> f32 { self.pitch }
    #[inline] pub fn strip_angle(&self, _strip: f32) -> f32 { 0.0 }
}

// ── Trapezoidal ───────────────────────────────────────────────────────────────

/// Radially projective strips converging at distance `r0` below the roll
/// centre (endcap rolls).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapezoidalStripTopology {
    nstrips:      i32,
    pitch:        f32,
    strip_length: f32,
    r0:           f32,
    offset:       f32,
}

impl TrapezoidalStripTopology {
    /// `pitch` is the pitch at the roll centre (`y = 0`).
    pub fn new(nstrips: i32, pitch: f32, strip_length: f32, r0: f32) -> Self {
        Self {
            nstrips,
            pitch,
            strip_length,
            r0,
            offset: -0.5 * nstrips as f32 * pitch,
        }
    }

    /// Position of real strip coordinate `strip` on the `y = 0` line.
    #[inline]
    pub fn local_position(&self, strip: f32) -> LocalPoint {
        LocalPoint::in_plane(strip * self.pitch + self.offset, 0.0)
    }

    /// Position at real strip coordinate `strip` and fractional height
    /// `y_frac`.  The `x` coordinate follows the strip as it fans out.
    pub fn local_position_at(&self, strip: f32, y_frac: f32) -> LocalPoint {
        let y = y_frac * self.strip_length;
        let x = (strip * self.pitch + self.offset) * (y + self.r0) / self.r0;
        LocalPoint::in_plane(x, y)
    }

    /// Real strip coordinate of `lp`, clamped to `[0, nstrips]`.
    pub fn strip(&self, lp: LocalPoint) -> f32 {
        let x_at_centre = lp.x * self.r0 / (lp.y + self.r0);
        let s = (x_at_centre - self.offset) / self.pitch;
        s.clamp(0.0, self.nstrips as f32)
    }

    /// Pitch at the height of `lp`.
    #[inline]
    pub fn local_pitch(&self, lp: LocalPoint) -> f32 {
        self.pitch * (lp.y + self.r0) / self.r0
    }

    /// Angle between strip `strip` and the local `y` axis.
    #[inline]
    pub fn strip_angle(&self, strip: f32) -> f32 {
        (-(strip * self.pitch + self.offset) / self.r0).atan()
    }

    #[inline] pub fn nstrips(&self) -> i32 { self.nstrips }
    #[inline] pub fn pitch(&self) -> f32 { self.pitch }
    #[inline] pub fn strip_length(&self) -> f32 { self.strip_length }
    #[inline] pub fn r0(&self) -> f32 { self.r0 }
}

// ── Sum type ──────────────────────────────────────────────────────────────────

/// Strip topology of one roll type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StripTopology {
    Rectangular(RectangularStripTopology),
    Trapezoidal(TrapezoidalStripTopology),
}

impl StripTopology {
    pub fn nstrips(&self) -> i32 {
        match self {
            StripTopology::Rectangular(t) => t.nstrips(),
            StripTopology::Trapezoidal(t) => t.nstrips(),
        }
    }

    pub fn pitch(&self) -> f32 {
        match self {
            StripTopology::Rectangular(t) => t.pitch(),
            StripTopology::Trapezoidal(t) => t.pitch(),
        }
    }

    pub fn strip_length(&self) -> f32 {
        match self {
            StripTopology::Rectangular(t) => t.strip_length(),
            StripTopology::Trapezoidal(t) => t.strip_length(),
        }
    }

    /// Apex distance; `None` for rectangular strips.
    pub fn r0(&self) -> Option<f32> {
        match self {
            StripTopology::Rectangular(_) => None,
            StripTopology::Trapezoidal(t) => Some(t.r0()),
        }
    }

    pub fn local_position(&self, strip: f32) -> LocalPoint {
        match self {
            StripTopology::Rectangular(t) => t.local_position(strip),
            StripTopology::Trapezoidal(t) => t.local_position(strip),
        }
    }

    pub fn local_position_at(&self, strip: f32, y_frac: f32) -> LocalPoint {
        match self {
            StripTopology::Rectangular(t) => t.local_position_at(strip, y_frac),
            StripTopology::Trapezoidal(t) => t.local_position_at(strip, y_frac),
        }
    }

    pub fn strip(&self, lp: LocalPoint) -> f32 {
        match self {
            StripTopology::Rectangular(t) => t.strip(lp),
            StripTopology::Trapezoidal(t) => t.strip(lp),
        }
    }

    pub fn local_pitch(&self, lp: LocalPoint) -> f32 {
        match self {
            StripTopology::Rectangular(t) => t.local_pitch(lp),
            StripTopology::Trapezoidal(t) => t.local_pitch(lp),
        }
    }

    pub fn strip_angle(&self, strip: f32) -> f32 {
        match self {
            StripTopology::Rectangular(t) => t.strip_angle(strip),
            StripTopology::Trapezoidal(t) => t.strip_angle(strip),
        }
    }
}

impl From<RectangularStripTopology> for StripTopology {
    fn from(t: RectangularStripTopology) -> Self {
        StripTopology::Rectangular(t)
    }
}

impl From<TrapezoidalStripTopology> for StripTopology {
    fn from(t: TrapezoidalStripTopology) -> Self {
        StripTopology::Trapezoidal(t)
    }
}
