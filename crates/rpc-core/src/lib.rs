//! `rpc-core` — foundational types for the RPC muon geometry.
//!
//! This crate is a dependency of every other `rpc-*` crate.  It has no
//! `rpc-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RpcDetId`, raw-id packing                            |
//! | [`subdet`]      | `SubDetector` (barrel / endcap / other)               |
//! | [`geo`]         | `LocalPoint`, `GlobalPoint`, `Rotation`               |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod subdet;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GlobalPoint, LocalPoint, Rotation};
pub use ids::RpcDetId;
pub use subdet::SubDetector;
