//! The RPC detector identifier and its packed 32-bit form.
//!
//! An [`RpcDetId`] is a small `Copy` record of seven signed fields.  Fields are
//! validated once at construction and never mutated afterwards, so every
//! downstream derivation (names, eta partitions, orientation flags) is a pure
//! function of the id.
//!
//! # Raw id layout
//!
//! ```text
//!  31..28  27..25  24..18  17..15  14..12    11     10..7    6..5   4..2   1..0
//!  det=2   sub=3   unused  roll    subsec-1  lay-1  sector   st-1   ring   region+1
//! ```
//!
//! Barrel rings are stored with an offset of 2 so wheels −2..=2 fit in 3 bits.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult, SubDetector};

// ── Bit layout ────────────────────────────────────────────────────────────────

const DET_MUON:          u32 = 2;
const SUBDET_RPC:        u32 = 3;
const DET_START_BIT:     u32 = 28;
const SUBDET_START_BIT:  u32 = 25;

const REGION_START_BIT:    u32 = 0;
const REGION_BITS:         u32 = 2;
const RING_START_BIT:      u32 = REGION_START_BIT + REGION_BITS;
const RING_BITS:           u32 = 3;
const STATION_START_BIT:   u32 = RING_START_BIT + RING_BITS;
const STATION_BITS:        u32 = 2;
const SECTOR_START_BIT:    u32 = STATION_START_BIT + STATION_BITS;
const SECTOR_BITS:         u32 = 4;
const LAYER_START_BIT:     u32 = SECTOR_START_BIT + SECTOR_BITS;
const LAYER_BITS:          u32 = 1;
const SUBSECTOR_START_BIT: u32 = LAYER_START_BIT + LAYER_BITS;
const SUBSECTOR_BITS:      u32 = 3;
const ROLL_START_BIT:      u32 = SUBSECTOR_START_BIT + SUBSECTOR_BITS;
const ROLL_BITS:           u32 = 3;

const RING_BARREL_OFFSET: i32 = 2;

#[inline]
fn pack(value: i32, start: u32, bits: u32) -> u32 {
    ((value as u32) & ((1 << bits) - 1)) << start
}

#[inline]
fn unpack(raw: u32, start: u32, bits: u32) -> i32 {
    ((raw >> start) & ((1 << bits) - 1)) as i32
}

fn check(field: &'static str, value: i32, lo: i32, hi: i32) -> CoreResult<()> {
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidField { field, value })
    }
}

// ── RpcDetId ──────────────────────────────────────────────────────────────────

/// Structured identifier of one RPC roll.
///
/// Ordering follows [`raw_id`](Self::raw_id), so sorted collections of ids
/// enumerate in the same order as their packed form.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpcDetId {
    region:    i32,
    ring:      i32,
    station:   i32,
    sector:    i32,
    layer:     i32,
    subsector: i32,
    roll:      i32,
}

impl RpcDetId {
    /// Build a validated identifier.
    ///
    /// | Field       | Barrel (`region == 0`) | Endcap (`region == ±1`) |
    /// |-------------|------------------------|-------------------------|
    /// | `ring`      | −2..=2                 | 1..=3                   |
    /// | `station`   | 1..=4                  | 1..=4                   |
    /// | `sector`    | 1..=12                 | 1..=6                   |
    /// | `layer`     | 1..=2                  | 1..=2                   |
    /// | `subsector` | 1..=4                  | 1..=6                   |
    /// | `roll`      | 0..=4                  | 0..=4                   |
    pub fn new(
        region:    i32,
        ring:      i32,
        station:   i32,
        sector:    i32,
        layer:     i32,
        subsector: i32,
        roll:      i32,
    ) -> CoreResult<Self> {
        check("region", region, -1, 1)?;
        if region == 0 {
            check("ring", ring, -2, 2)?;
            check("sector", sector, 1, 12)?;
            check("subsector", subsector, 1, 4)?;
        } else {
            check("ring", ring, 1, 3)?;
            check("sector", sector, 1, 6)?;
            check("subsector", subsector, 1, 6)?;
        }
        check("station", station, 1, 4)?;
        check("layer", layer, 1, 2)?;
        check("roll", roll, 0, 4)?;

        Ok(Self { region, ring, station, sector, layer, subsector, roll })
    }

    /// Decode a packed identifier produced by [`raw_id`](Self::raw_id).
    pub fn from_raw(raw: u32) -> CoreResult<Self> {
        let det = raw >> DET_START_BIT;
        let subdet = (raw >> SUBDET_START_BIT) & 0x7;
        if det != DET_MUON || subdet != SUBDET_RPC {
            return Err(CoreError::InvalidRawId(raw));
        }

        let region = unpack(raw, REGION_START_BIT, REGION_BITS) - 1;
        let mut ring = unpack(raw, RING_START_BIT, RING_BITS);
        if region == 0 {
            ring -= RING_BARREL_OFFSET;
        }

        Self::new(
            region,
            ring,
            unpack(raw, STATION_START_BIT, STATION_BITS) + 1,
            unpack(raw, SECTOR_START_BIT, SECTOR_BITS),
            unpack(raw, LAYER_START_BIT, LAYER_BITS) + 1,
            unpack(raw, SUBSECTOR_START_BIT, SUBSECTOR_BITS) + 1,
            unpack(raw, ROLL_START_BIT, ROLL_BITS),
        )
        .map_err(|_| CoreError::InvalidRawId(raw))
    }

    /// Pack the identifier into its 32-bit raw form.
    pub fn raw_id(&self) -> u32 {
        let ring = if self.region == 0 {
            self.ring + RING_BARREL_OFFSET
        } else {
            self.ring
        };

        (DET_MUON << DET_START_BIT)
            | (SUBDET_RPC << SUBDET_START_BIT)
            | pack(self.region + 1, REGION_START_BIT, REGION_BITS)
            | pack(ring, RING_START_BIT, RING_BITS)
            | pack(self.station - 1, STATION_START_BIT, STATION_BITS)
            | pack(self.sector, SECTOR_START_BIT, SECTOR_BITS)
            | pack(self.layer - 1, LAYER_START_BIT, LAYER_BITS)
            | pack(self.subsector - 1, SUBSECTOR_START_BIT, SUBSECTOR_BITS)
            | pack(self.roll, ROLL_START_BIT, ROLL_BITS)
    }

    // ── Field accessors ───────────────────────────────────────────────────

    #[inline] pub fn region(&self) -> i32 { self.region }
    #[inline] pub fn ring(&self) -> i32 { self.ring }
    #[inline] pub fn station(&self) -> i32 { self.station }
    #[inline] pub fn sector(&self) -> i32 { self.sector }
    #[inline] pub fn layer(&self) -> i32 { self.layer }
    #[inline] pub fn subsector(&self) -> i32 { self.subsector }
    #[inline] pub fn roll(&self) -> i32 { self.roll }

    /// Sub-detector implied by the region.
    #[inline]
    pub fn sub_detector(&self) -> SubDetector {
        SubDetector::from_region(self.region)
    }

    /// The same chamber with the roll field cleared.
    pub fn chamber_id(&self) -> RpcDetId {
        RpcDetId { roll: 0, ..*self }
    }
}

impl PartialOrd for RpcDetId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RpcDetId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw_id().cmp(&other.raw_id())
    }
}

impl fmt::Display for RpcDetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Re {} Ri {} St {} Se {} La {} Su {} Ro {}",
            self.region, self.ring, self.station, self.sector, self.layer, self.subsector, self.roll,
        )
    }
}

impl TryFrom<u32> for RpcDetId {
    type Error = CoreError;
    fn try_from(raw: u32) -> CoreResult<RpcDetId> {
        RpcDetId::from_raw(raw)
    }
}

impl From<RpcDetId> for u32 {
    #[inline]
    fn from(id: RpcDetId) -> u32 {
        id.raw_id()
    }
}
