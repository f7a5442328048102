//! Placement of a roll in the global frame.

use rpc_core::{GlobalPoint, LocalPoint, Rotation};

/// A positioned plane: origin of the local frame in global coordinates plus
/// the rotation taking global directions to local ones.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundPlane {
    position: GlobalPoint,
    rotation: Rotation,
}

impl BoundPlane {
    pub fn new(position: GlobalPoint, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    #[inline]
    pub fn position(&self) -> GlobalPoint {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn to_global(&self, lp: LocalPoint) -> GlobalPoint {
        let [x, y, z] = self.rotation.multiply_inverse([lp.x, lp.y, lp.z]);
        self.position + GlobalPoint::new(x, y, z)
    }

    pub fn to_local(&self, gp: GlobalPoint) -> LocalPoint {
        let d = gp - self.position;
        let [x, y, z] = self.rotation.multiply([d.x, d.y, d.z]);
        LocalPoint::new(x, y, z)
    }
}
