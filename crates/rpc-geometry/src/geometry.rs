//! The RPC geometry: every roll plus the distinct roll types they share.
//!
//! Rolls are kept in insertion order so a walk over [`RpcGeometry::dets`]
//! reproduces the order of the geometry description.  A hash index gives
//! O(1) lookup by id.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use rpc_core::{RpcDetId, SubDetector};

use crate::roll::RpcRoll;
use crate::specs::RollSpecs;
use crate::surface::BoundPlane;
use crate::GeometryResult;

// ── RpcGeometry ───────────────────────────────────────────────────────────────

/// Immutable collection of positioned rolls.  Do not construct directly; use
/// [`RpcGeometryBuilder`].
#[derive(Debug, Default)]
pub struct RpcGeometry {
    rolls:      Vec<RpcRoll>,
    types:      Vec<Arc<RollSpecs>>,
    index:      HashMap<RpcDetId, usize>,
    duplicates: Vec<RpcDetId>,
}

impl RpcGeometry {
    /// All rolls in description order, duplicates included.
    pub fn dets(&self) -> &[RpcRoll] {
        &self.rolls
    }

    /// Distinct roll types.
    pub fn det_types(&self) -> &[Arc<RollSpecs>] {
        &self.types
    }

    /// The first roll registered under `id`.
    pub fn roll(&self, id: RpcDetId) -> Option<&RpcRoll> {
        self.index.get(&id).map(|&i| &self.rolls[i])
    }

    /// Rolls of one sub-detector, in description order.
    pub fn rolls_in(&self, sub_detector: SubDetector) -> impl Iterator<Item = &RpcRoll> + '_ {
        self.rolls
            .iter()
            .filter(move |r| r.id().sub_detector() == sub_detector)
    }

    /// Ids that were registered more than once, in the order the repeats
    /// were seen.
    pub fn duplicate_ids(&self) -> &[RpcDetId] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

// ── RpcGeometryBuilder ────────────────────────────────────────────────────────

/// Construct an [`RpcGeometry`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rpc_core::{GlobalPoint, RpcDetId, Rotation, SubDetector};
/// use rpc_geometry::{BoundPlane, RollSpecs, RpcGeometryBuilder};
///
/// let mut b = RpcGeometryBuilder::new();
/// let specs = b.add_specs(RollSpecs::new(SubDetector::RpcBarrel, vec![60.0, 120.0, 48.0]).unwrap());
/// let id = RpcDetId::new(0, 1, 1, 3, 1, 1, 2).unwrap();
/// let surface = BoundPlane::new(GlobalPoint::new(0.0, 430.0, 300.0), Rotation::identity());
/// b.add_roll(id, specs, surface).unwrap();
/// let geom = b.build();
/// assert_eq!(geom.len(), 1);
/// assert_eq!(geom.det_types().len(), 1);
/// ```
#[derive(Default)]
pub struct RpcGeometryBuilder {
    rolls: Vec<RpcRoll>,
    types: Vec<Arc<RollSpecs>>,
}

impl RpcGeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a roll type and return the shared handle.  An identical type
    /// registered earlier is reused.
    pub fn add_specs(&mut self, specs: RollSpecs) -> Arc<RollSpecs> {
        if let Some(existing) = self.types.iter().find(|t| ***t == specs) {
            return Arc::clone(existing);
        }
        let specs = Arc::new(specs);
        self.types.push(Arc::clone(&specs));
        specs
    }

    /// Add a positioned roll.  `specs` is registered as a type if it was not
    /// obtained from [`add_specs`](Self::add_specs).
    pub fn add_roll(
        &mut self,
        id:      RpcDetId,
        specs:   Arc<RollSpecs>,
        surface: BoundPlane,
    ) -> GeometryResult<()> {
        if !self.types.iter().any(|t| Arc::ptr_eq(t, &specs)) {
            self.types.push(Arc::clone(&specs));
        }
        self.rolls.push(RpcRoll::new(id, specs, surface)?);
        Ok(())
    }

    pub fn roll_count(&self) -> usize { self.rolls.len() }
    pub fn type_count(&self) -> usize { self.types.len() }

    /// Consume the builder and produce the geometry.
    pub fn build(self) -> RpcGeometry {
        let mut index = HashMap::with_capacity(self.rolls.len());
        let mut duplicates = Vec::new();

        for (i, roll) in self.rolls.iter().enumerate() {
            if index.contains_key(&roll.id()) {
                warn!("duplicate roll id {} (raw {:#010x})", roll.id(), roll.id().raw_id());
                duplicates.push(roll.id());
            } else {
                index.insert(roll.id(), i);
            }
        }

        debug!(
            "built RPC geometry: {} rolls, {} types, {} duplicates",
            self.rolls.len(),
            self.types.len(),
            duplicates.len(),
        );

        RpcGeometry {
            rolls: self.rolls,
            types: self.types,
            index,
            duplicates,
        }
    }
}
