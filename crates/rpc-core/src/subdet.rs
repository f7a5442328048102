//! Sub-detector discriminator shared by the specs and geometry layers.
//!
//! The discriminator decides which strip topology a roll gets: barrel rolls
//! are rectangular, endcap rolls are trapezoidal, anything else carries no
//! strip topology at all.

/// Which part of the muon system a roll type belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubDetector {
    /// Cylindrical barrel (`region == 0`).
    RpcBarrel,
    /// Disk-shaped endcaps (`region == ±1`).
    RpcEndcap,
    /// Any other detector type.  Has no strip topology.
    #[default]
    Other,
}

impl SubDetector {
    /// Discriminator implied by an identifier's `region` field.
    #[inline]
    pub fn from_region(region: i32) -> Self {
        if region == 0 {
            SubDetector::RpcBarrel
        } else {
            SubDetector::RpcEndcap
        }
    }

    /// `true` for the two RPC variants.
    #[inline]
    pub fn is_rpc(self) -> bool {
        !matches!(self, SubDetector::Other)
    }

    /// Human-readable label, used as the `shape` column of geometry CSVs.
    pub fn as_str(self) -> &'static str {
        match self {
            SubDetector::RpcBarrel => "barrel",
            SubDetector::RpcEndcap => "endcap",
            SubDetector::Other     => "other",
        }
    }
}

impl std::fmt::Display for SubDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubDetector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "barrel" => Ok(SubDetector::RpcBarrel),
            "endcap" => Ok(SubDetector::RpcEndcap),
            "other"  => Ok(SubDetector::Other),
            other    => Err(format!(
                "invalid sub-detector {other:?}: expected \"barrel\", \"endcap\" or \"other\""
            )),
        }
    }
}
