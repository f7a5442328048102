//! Roll type description: sub-detector discriminator, raw shape parameters
//! and the strip topology derived from them.
//!
//! # Parameter vectors
//!
//! | Sub-detector | `params[0]`   | `params[1]`   | `params[2]`  | `params[3]` |
//! |--------------|---------------|---------------|--------------|-------------|
//! | barrel       | half width    | half length   | strip count  | —           |
//! | endcap       | `b` (inner ½w)| `B` (outer ½w)| `h` (½ height)| strip count |
//!
//! Strip counts arrive as floats and are truncated.  Extra trailing values are
//! kept but ignored.

use log::debug;

use rpc_core::SubDetector;

use crate::topology::{RectangularStripTopology, StripTopology, TrapezoidalStripTopology};
use crate::{GeometryError, GeometryResult};

/// Detector-type name shared by every RPC roll type.
pub const RPC_TYPE_NAME: &str = "RPC";

/// One roll type.  Owns its topology by value; rolls share a `RollSpecs`
/// through `Arc`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollSpecs {
    sub_detector: SubDetector,
    params:       Vec<f32>,
    topology:     Option<StripTopology>,
}

impl RollSpecs {
    /// Build the specs and derive the topology for `sub_detector`.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::MissingParameters`] if `params` is too short.
    /// - [`GeometryError::Configuration`] if the strip count is below 1, the
    ///   endcap widths are equal (`b == B`), or any derived pitch, strip
    ///   length or apex distance is not finite and strictly positive.
    pub fn new(sub_detector: SubDetector, params: Vec<f32>) -> GeometryResult<Self> {
        let topology = match sub_detector {
            SubDetector::RpcBarrel => Some(barrel_topology(&params)?),
            SubDetector::RpcEndcap => Some(endcap_topology(&params)?),
            SubDetector::Other => None,
        };

        if let Some(top) = &topology {
            debug!(
                "{sub_detector} roll type: {} strips, pitch {}, length {}",
                top.nstrips(),
                top.pitch(),
                top.strip_length(),
            );
        }

        Ok(Self { sub_detector, params, topology })
    }

    #[inline]
    pub fn sub_detector(&self) -> SubDetector {
        self.sub_detector
    }

    /// Raw shape parameters as supplied.
    #[inline]
    pub fn parameters(&self) -> &[f32] {
        &self.params
    }

    /// Strip topology; `None` for [`SubDetector::Other`].
    #[inline]
    pub fn topology(&self) -> Option<&StripTopology> {
        self.topology.as_ref()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        RPC_TYPE_NAME
    }
}

// ── Topology derivation ───────────────────────────────────────────────────────

fn require(params: &[f32], expected: usize, sub_detector: SubDetector) -> GeometryResult<()> {
    if params.len() < expected {
        return Err(GeometryError::MissingParameters {
            sub_detector,
            expected,
            got: params.len(),
        });
    }
    Ok(())
}

fn positive_strips(strips: f32) -> GeometryResult<i32> {
    if !(strips.is_finite() && strips >= 1.0) {
        return Err(GeometryError::Configuration(format!(
            "strip count must be at least 1, got {strips}"
        )));
    }
    Ok(strips as i32)
}

/// Derived lengths must be finite and strictly positive.
fn positive(what: &str, v: f32) -> GeometryResult<f32> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(GeometryError::Configuration(format!("{what} must be positive and finite, got {v}")))
    }
}

fn barrel_topology(p: &[f32]) -> GeometryResult<StripTopology> {
    require(p, 3, SubDetector::RpcBarrel)?;
    let nstrips = positive_strips(p[2])?;
    let pitch = positive("pitch", p[0] * 2.0 / p[2])?;
    let strip_length = positive("strip length", p[1] * 2.0)?;
    Ok(RectangularStripTopology::new(nstrips, pitch, strip_length).into())
}

fn endcap_topology(p: &[f32]) -> GeometryResult<StripTopology> {
    require(p, 4, SubDetector::RpcEndcap)?;
    let (b, big_b, h) = (p[0], p[1], p[2]);
    if big_b == b {
        return Err(GeometryError::Configuration(format!(
            "endcap roll has equal inner and outer half widths ({b}); apex distance is undefined"
        )));
    }
    let nstrips = positive_strips(p[3])?;
    let r0 = positive("apex distance", h * (big_b + b) / (big_b - b))?;
    let strip_length = positive("strip length", h * 2.0)?;
    let pitch = positive("pitch", (b + big_b) / p[3])?;
    Ok(TrapezoidalStripTopology::new(nstrips, pitch, strip_length, r0).into())
}
