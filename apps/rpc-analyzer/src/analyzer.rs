//! The geometry walk and its report format.

use std::collections::BTreeSet;
use std::io::{self, Write};

use rpc_core::{GlobalPoint, LocalPoint, RpcDetId};
use rpc_geometry::{RpcGeometry, RpcRoll};

const NAME: &str = "RPCGeometryAnalyzer";

/// Values closer to zero than this are printed as 0.
const ZERO_CUT: f32 = 1.0e-6;

pub struct AnalyzerConfig {
    pub dashed_line_width: usize,
    /// Every `strip_stride`-th strip also gets its global position printed.
    pub strip_stride:      i32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { dashed_line_width: 104, strip_stride: 5 }
    }
}

/// Counts gathered during one walk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rolls:      usize,
    pub duplicates: usize,
}

pub struct GeometryAnalyzer {
    config:      AnalyzerConfig,
    dashed_line: String,
}

impl GeometryAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let dashed_line = "-".repeat(config.dashed_line_width);
        Self { config, dashed_line }
    }

    /// Write the full report for `geometry` to `out`.
    pub fn analyze<W: Write>(&self, geometry: &RpcGeometry, out: &mut W) -> io::Result<Summary> {
        writeln!(out, "{NAME}: Analyzer...")?;
        writeln!(out, "start {}", self.dashed_line)?;
        writeln!(out, " I have {} detectors", geometry.len())?;
        writeln!(out, " I have {} types\n", geometry.det_types().len())?;

        writeln!(out, "{NAME}: Begin iteration over geometry...")?;
        writeln!(out, "iter {}", self.dashed_line)?;
        writeln!(
            out,
            "\n  #     id(hex)      id(dec)   g(x=0)   g(y=0)   g(z=0)  g(z=-1)  g(z=+1)   phi(0)  Ns"
        )?;

        let mut seen: BTreeSet<RpcDetId> = BTreeSet::new();
        let mut summary = Summary::default();

        for roll in geometry.dets() {
            summary.rolls += 1;
            if !seen.insert(roll.id()) {
                summary.duplicates += 1;
                write!(out, "VERYBAD ")?;
            }
            self.write_roll(out, summary.rolls, roll)?;
        }

        writeln!(out, "{} end", self.dashed_line)?;
        Ok(summary)
    }

    fn write_roll<W: Write>(&self, out: &mut W, count: usize, roll: &RpcRoll) -> io::Result<()> {
        let id = roll.id();
        let raw = id.raw_id();
        writeln!(out, "Parameters of roll# {count:>4}  {}", roll.name())?;
        writeln!(out, "{raw:>#12x}{raw:>12} {id}")?;

        // Centre of the roll and where its local z axis points.
        let centre = roll.local_to_global(LocalPoint::new(0.0, 0.0, 0.0));
        let below = roll.local_to_global(LocalPoint::new(0.0, 0.0, -1.0));
        let above = roll.local_to_global(LocalPoint::new(0.0, 0.0, 1.0));
        writeln!(
            out,
            "{:>9.3}{:>9.3}{:>9.3}{:>9.3}{:>9.3}{:>9.3}",
            clean(centre.x),
            clean(centre.y),
            clean(centre.z),
            clean(below.z),
            clean(above.z),
            phi_degrees(centre),
        )?;

        let nstrips = roll.nstrips();
        writeln!(out, "\nStrips = {nstrips:>4}")?;
        for strip in 1..=nstrips {
            write!(out, "s={strip:>3} pos={}", roll.centre_of_strip(strip))?;
            if strip % self.config.strip_stride == 0 {
                let s = (strip - 1) as f32;
                let lp = roll.centre_of_strip_at(s);
                write!(out, " s={s:>6} pos={lp} gpos={}", roll.local_to_global(lp))?;
                writeln!(out)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

fn clean(v: f32) -> f32 {
    if v.abs() < ZERO_CUT { 0.0 } else { v }
}

/// Azimuth of `p` in degrees, folded into [0, 360).
pub fn phi_degrees(p: GlobalPoint) -> f32 {
    // A tiny negative angle rounds up to exactly 360.0 in f32.
    let deg = clean(p.phi().to_degrees().rem_euclid(360.0));
    if deg >= 360.0 { 0.0 } else { deg }
}
