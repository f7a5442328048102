//! A single positioned RPC roll.
//!
//! Strip numbers passed to and returned from the `i32` methods are 1-based
//! channel numbers; the `f32` methods take real strip coordinates where strip
//! `n` covers `[n−1, n)`.

use std::sync::Arc;

use rpc_core::{GlobalPoint, LocalPoint, RpcDetId};

use crate::geom_serv::RpcGeomServ;
use crate::specs::RollSpecs;
use crate::surface::BoundPlane;
use crate::topology::StripTopology;
use crate::{GeometryError, GeometryResult};

/// A roll: identifier, shared roll type and placement.
#[derive(Clone, Debug)]
pub struct RpcRoll {
    id:       RpcDetId,
    specs:    Arc<RollSpecs>,
    topology: StripTopology,
    surface:  BoundPlane,
}

impl RpcRoll {
    /// # Errors
    ///
    /// [`GeometryError::Configuration`] if `specs` carries no strip topology
    /// or its sub-detector disagrees with the id's region.
    pub fn new(id: RpcDetId, specs: Arc<RollSpecs>, surface: BoundPlane) -> GeometryResult<Self> {
        let Some(topology) = specs.topology().copied() else {
            return Err(GeometryError::Configuration(format!(
                "roll {id} has a {} type without strip topology",
                specs.sub_detector(),
            )));
        };
        if specs.sub_detector() != id.sub_detector() {
            return Err(GeometryError::Configuration(format!(
                "roll {id} is in the {} but its type is {}",
                id.sub_detector(),
                specs.sub_detector(),
            )));
        }
        Ok(Self { id, specs, topology, surface })
    }

    #[inline] pub fn id(&self) -> RpcDetId { self.id }
    #[inline] pub fn specs(&self) -> &Arc<RollSpecs> { &self.specs }
    #[inline] pub fn topology(&self) -> &StripTopology { &self.topology }
    #[inline] pub fn surface(&self) -> &BoundPlane { &self.surface }

    #[inline]
    pub fn is_barrel(&self) -> bool {
        self.id.region() == 0
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        self.id.region() != 0
    }

    /// Display name, e.g. `W+2/RB1in/S03_Middle`.
    pub fn name(&self) -> String {
        RpcGeomServ::new(self.id).name().to_owned()
    }

    // ── Strip queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn nstrips(&self) -> i32 {
        self.topology.nstrips()
    }

    /// Local centre of 1-based channel `strip`.
    pub fn centre_of_strip(&self, strip: i32) -> LocalPoint {
        self.topology.local_position(strip as f32 - 0.5)
    }

    /// Local position of real strip coordinate `strip`.
    pub fn centre_of_strip_at(&self, strip: f32) -> LocalPoint {
        self.topology.local_position(strip)
    }

    /// 1-based channel containing `lp`.  Points beyond the last strip map to
    /// `nstrips()`.
    pub fn strip(&self, lp: LocalPoint) -> i32 {
        (self.topology.strip(lp) as i32 + 1).min(self.nstrips())
    }

    pub fn local_pitch(&self, lp: LocalPoint) -> f32 {
        self.topology.local_pitch(lp)
    }

    // ── Frame transforms ──────────────────────────────────────────────────

    pub fn local_to_global(&self, lp: LocalPoint) -> GlobalPoint {
        self.surface.to_global(lp)
    }

    pub fn global_to_local(&self, gp: GlobalPoint) -> LocalPoint {
        self.surface.to_local(gp)
    }
}
