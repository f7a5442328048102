//! Naming and eta-partition service for a single roll.
//!
//! [`RpcGeomServ`] turns an [`RpcDetId`] into:
//!
//! - a display name such as `W+2/RB1in/S03_Middle` (barrel) or `D-2/RE2/3`
//!   (endcap),
//! - an integer eta partition,
//! - the `zpositive` / `aclockwise` orientation flags and `inverted`.
//!
//! Every value is computed on first access and cached.  The caches live in
//! `Cell`/`OnceCell`, so a service is `!Sync`: resolve it on one thread, then
//! share the plain values if needed.
//!
//! # Evaluation order
//!
//! The orientation flags are only derived while the eta partition has not yet
//! been cached.  [`eta_partition`](RpcGeomServ::eta_partition) evaluates
//! `zpositive` on its way, so z-positivity is always settled correctly, but a
//! first call to [`aclockwise`](RpcGeomServ::aclockwise) made *after*
//! `eta_partition` returns the default `true`.  Call `aclockwise` first when
//! the real value is needed.

use std::cell::{Cell, OnceCell};
use std::fmt::Write;

use rpc_core::RpcDetId;

/// Barrel sectors whose rolls face −z in wheel 0.
const WHEEL0_NEGATIVE_SECTORS: [i32; 6] = [1, 4, 5, 8, 9, 12];

/// Barrel sectors of wheel 0 that face +z.
const WHEEL0_POSITIVE_SECTORS: [i32; 6] = [2, 3, 6, 7, 10, 11];

/// Lazily-evaluated naming service bound to one identifier.
#[derive(Debug, Clone)]
pub struct RpcGeomServ {
    id:         RpcDetId,
    name:       OnceCell<String>,
    eta:        Cell<Option<i32>>,
    zpositive:  Cell<bool>,
    aclockwise: Cell<bool>,
}

impl RpcGeomServ {
    pub fn new(id: RpcDetId) -> Self {
        Self {
            id,
            name:       OnceCell::new(),
            eta:        Cell::new(None),
            zpositive:  Cell::new(true),
            aclockwise: Cell::new(true),
        }
    }

    /// The identifier this service describes.
    #[inline]
    pub fn id(&self) -> RpcDetId {
        self.id
    }

    /// Canonical display name.
    pub fn name(&self) -> &str {
        self.name.get_or_init(|| {
            if self.id.region() == 0 {
                barrel_name(&self.id)
            } else {
                endcap_name(&self.id)
            }
        })
    }

    /// Eta-partition index of the roll.
    ///
    /// Barrel: `3·ring + roll − 2`, or `3·ring + (3 − roll) − 1` when the roll
    /// is inverted.  Endcap: `region · (3·(3 − ring) + roll + 7)`.
    pub fn eta_partition(&self) -> i32 {
        if let Some(eta) = self.eta.get() {
            return eta;
        }

        let id = &self.id;
        let eta = if id.region() == 0 {
            if self.inverted() {
                3 * id.ring() + (3 - id.roll()) - 1
            } else {
                3 * id.ring() + id.roll() - 2
            }
        } else {
            id.region() * (3 * (3 - id.ring()) + id.roll() + 7)
        };

        self.eta.set(Some(eta));
        eta
    }

    /// `true` when the roll's local frame is flipped along the beam axis.
    /// Depends on `zpositive` only.
    pub fn inverted(&self) -> bool {
        !self.zpositive()
    }

    /// `true` when the roll's local `y` points towards +z.  Always `true` in
    /// the endcaps.
    pub fn zpositive(&self) -> bool {
        let id = &self.id;
        if id.region() == 0 && self.eta.get().is_none() {
            if id.ring() < 0 {
                self.zpositive.set(false);
            }
            if id.ring() == 0 && WHEEL0_NEGATIVE_SECTORS.contains(&id.sector()) {
                self.zpositive.set(false);
            }
        }
        self.zpositive.get()
    }

    /// `true` when strip numbering runs anticlockwise in φ.  Always `true` in
    /// the endcaps.
    pub fn aclockwise(&self) -> bool {
        let id = &self.id;
        if id.region() == 0 && self.eta.get().is_none() {
            let clockwise = match id.ring() {
                r if r > 0 => id.layer() == 2,
                r if r < 0 => id.layer() == 1,
                _ => {
                    (WHEEL0_NEGATIVE_SECTORS.contains(&id.sector()) && id.layer() == 1)
                        || (WHEEL0_POSITIVE_SECTORS.contains(&id.sector()) && id.layer() == 2)
                }
            };
            if clockwise {
                self.aclockwise.set(false);
            }
        }
        self.aclockwise.get()
    }
}

impl From<RpcDetId> for RpcGeomServ {
    fn from(id: RpcDetId) -> Self {
        RpcGeomServ::new(id)
    }
}

// ── Name grammar ──────────────────────────────────────────────────────────────

// `write!` into a `String` cannot fail; the results below are discarded.

fn barrel_name(id: &RpcDetId) -> String {
    let mut buf = String::with_capacity(24);

    // Wheel, right-aligned with '+' fill: +1, -2, +0.
    let _ = write!(buf, "W{:+>2}/", id.ring());

    let _ = write!(buf, "RB{}", id.station());
    if id.station() <= 2 {
        buf.push_str(if id.layer() == 1 { "in" } else { "out" });
    }
    buf.push('/');

    let _ = write!(buf, "S{:02}", id.sector());
    if id.station() > 2 {
        if id.sector() == 4 && id.station() == 4 {
            buf.push_str(match id.subsector() {
                1 => "--",
                2 => "-+",
                3 => "+-",
                4 => "++",
                _ => "",
            });
        } else {
            buf.push(if id.subsector() == 1 { '-' } else { '+' });
        }
    }
    buf.push('_');

    buf.push_str(match id.roll() {
        1 => "Backward",
        2 => "Middle",
        3 => "Forward",
        _ => "",
    });

    buf
}

fn endcap_name(id: &RpcDetId) -> String {
    format!(
        "D{:+>2}/RE{}/{}",
        id.station() * id.region(),
        id.station(),
        id.ring(),
    )
}
