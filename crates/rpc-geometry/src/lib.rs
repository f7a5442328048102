//! `rpc-geometry` — naming, strip topologies and positioned rolls of the RPC
//! muon detector.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`geom_serv`] | `RpcGeomServ`: display names, eta partitions, orientation  |
//! | [`topology`]  | `RectangularStripTopology`, `TrapezoidalStripTopology`, `StripTopology` |
//! | [`specs`]     | `RollSpecs`: roll type and its derived topology            |
//! | [`surface`]   | `BoundPlane`: local ↔ global transform                     |
//! | [`roll`]      | `RpcRoll`                                                  |
//! | [`geometry`]  | `RpcGeometry`, `RpcGeometryBuilder`                        |
//! | [`loader`]    | `load_geometry_csv`, `load_geometry_reader`                |
//! | [`error`]     | `GeometryError`, `GeometryResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on topologies, specs and surfaces. |

pub mod error;
pub mod geom_serv;
pub mod geometry;
pub mod loader;
pub mod roll;
pub mod specs;
pub mod surface;
pub mod topology;


pub use error::{GeometryError, GeometryResult};
pub use geom_serv::RpcGeomServ;
pub use geometry::{RpcGeometry, RpcGeometryBuilder};
pub use loader::{load_geometry_csv, load_geometry_reader};
pub use roll::RpcRoll;
pub use specs::RollSpecs;
pub use surface::BoundPlane;
pub use topology::{RectangularStripTopology, StripTopology, TrapezoidalStripTopology};
