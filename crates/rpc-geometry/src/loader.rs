//! CSV geometry loader.
//!
//! # CSV format
//!
//! One row per roll.  Rolls sharing the same `shape` and `p0..p3` share one
//! [`RollSpecs`].
//!
//! ```csv
//! region,ring,station,sector,layer,subsector,roll,shape,p0,p1,p2,p3,x,y,z,phi
//! 0,2,1,3,1,1,2,barrel,60,125,48,0,-215.9,373.9,541.5,2.094
//! -1,3,2,1,1,1,1,endcap,40,60,45,32,0,600,-800,1.571
//! ```
//!
//! | Column           | Meaning                                              |
//! |------------------|------------------------------------------------------|
//! | `region..roll`   | [`RpcDetId`] fields                                  |
//! | `shape`          | `barrel` or `endcap`                                 |
//! | `p0..p3`         | shape parameters, see [`crate::specs`]               |
//! | `x,y,z`          | global position of the roll centre                   |
//! | `phi`            | rotation of the local frame about global `z`, rad    |
//!
//! Endcap rolls are placed with their local `z` along the beam and their
//! local `y` pointing radially outwards at azimuth `phi`.  Barrel rolls lie
//! parallel to the beam with local `y` along global `z` and their normal
//! pointing radially outwards at azimuth `phi`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rpc_core::{GlobalPoint, Rotation, RpcDetId, SubDetector};

use crate::geometry::{RpcGeometry, RpcGeometryBuilder};
use crate::specs::RollSpecs;
use crate::surface::BoundPlane;
use crate::{GeometryError, GeometryResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RollRecord {
    region:    i32,
    ring:      i32,
    station:   i32,
    sector:    i32,
    layer:     i32,
    subsector: i32,
    roll:      i32,
    shape:     String,
    p0:        f32,
    p1:        f32,
    p2:        f32,
    p3:        f32,
    x:         f32,
    y:         f32,
    z:         f32,
    phi:       f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a geometry from a CSV file.
pub fn load_geometry_csv(path: &Path) -> GeometryResult<RpcGeometry> {
    let file = std::fs::File::open(path)?;
    load_geometry_reader(file)
}

/// Like [`load_geometry_csv`] but accepts any `Read` source.
pub fn load_geometry_reader<R: Read>(reader: R) -> GeometryResult<RpcGeometry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = RpcGeometryBuilder::new();

    for (index, result) in csv_reader.deserialize::<RollRecord>().enumerate() {
        // File line of this record; the header occupies line 1.
        let line = index + 2;
        let row = result.map_err(|e| GeometryError::Parse(e.to_string()))?;

        let shape: SubDetector = row
            .shape
            .parse()
            .map_err(|e| GeometryError::Parse(format!("line {line}: {e}")))?;
        if !shape.is_rpc() {
            return Err(GeometryError::Parse(format!(
                "line {line}: shape \"{shape}\" has no strip topology and cannot be loaded as a roll"
            )));
        }

        let id = RpcDetId::new(
            row.region, row.ring, row.station, row.sector, row.layer, row.subsector, row.roll,
        )?;

        let params = match shape {
            SubDetector::RpcBarrel => vec![row.p0, row.p1, row.p2],
            _ => vec![row.p0, row.p1, row.p2, row.p3],
        };
        let specs = builder.add_specs(RollSpecs::new(shape, params)?);

        let surface = BoundPlane::new(
            GlobalPoint::new(row.x, row.y, row.z),
            placement_rotation(shape, row.phi),
        );
        builder.add_roll(id, specs, surface)?;
    }

    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Local axes of a roll at azimuth `phi`.
fn placement_rotation(shape: SubDetector, phi: f32) -> Rotation {
    let (s, c) = phi.sin_cos();
    match shape {
        // x along +φ̂, y along +z, normal along r̂.
        SubDetector::RpcBarrel => Rotation::from_axes([-s, c, 0.0], [0.0, 0.0, 1.0], [c, s, 0.0]),
        // x along −φ̂, y along r̂, normal along +z.
        _ => Rotation::from_axes([s, -c, 0.0], [c, s, 0.0], [0.0, 0.0, 1.0]),
    }
}
