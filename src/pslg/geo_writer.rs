use std::fmt;
use std::io;

use crate::error::Result;

use super::Pslg;

/// Writes a [`Pslg`] as a gmsh geometry (`.geo`) script.
///
/// Points, lines and loops are numbered from 1. The single plane surface
/// lists the outer loop first and every other loop as a hole. Each input
/// segment becomes a physical line numbered `id + 1`, so boundary conditions
/// can be attached per segment.
#[derive(Debug, Clone, Copy)]
pub struct GeoWriter {
    resolution: f64,
}

impl Default for GeoWriter {
    fn default() -> Self {
        Self { resolution: 1e12 }
    }
}

impl GeoWriter {
    /// Creates a writer with the given characteristic element length.
    #[must_use]
    pub fn new(resolution: f64) -> Self {
        Self { resolution }
    }

    /// Returns a displayable view of the script for `pslg`.
    #[must_use]
    pub fn document<'a>(&self, pslg: &'a Pslg) -> GeoDocument<'a> {
        GeoDocument {
            pslg,
            resolution: self.resolution,
        }
    }

    /// Writes the script for `pslg` to `out`.
    ///
    /// # Errors
    ///
    /// Returns `GeomeshError::Io` if writing fails.
    pub fn write<W: io::Write>(&self, pslg: &Pslg, out: &mut W) -> Result<()> {
        write!(out, "{}", self.document(pslg))?;
        out.flush()?;
        Ok(())
    }
}

/// The gmsh script of one [`Pslg`]; render it with `Display`.
#[derive(Debug, Clone, Copy)]
pub struct GeoDocument<'a> {
    pslg: &'a Pslg,
    resolution: f64,
}

impl fmt::Display for GeoDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pslg = self.pslg;
        writeln!(f, "cl = {};", self.resolution)?;
        writeln!(f)?;

        for (n, p) in pslg.points.iter().enumerate() {
            writeln!(f, "Point({}) = {{{}, {}, 0.0, cl}};", n + 1, p.x, p.y)?;
        }
        writeln!(f)?;

        for (n, [i, j]) in pslg.edges.iter().enumerate() {
            writeln!(f, "Line({}) = {{{}, {}}};", n + 1, i + 1, j + 1)?;
        }
        writeln!(f)?;

        for l in 0..pslg.loops.len() {
            let edges = pslg.loop_edges(l);
            writeln!(f, "Line Loop({}) = {{{}}};", l + 1, join_one_based(&edges))?;
        }
        writeln!(f)?;

        let loop_ids: Vec<usize> = (0..pslg.loops.len()).collect();
        writeln!(f, "Plane Surface(1) = {{{}}};", join_one_based(&loop_ids))?;
        writeln!(f)?;

        for (id, edges) in pslg.physical_lines() {
            writeln!(f, "Physical Line({}) = {{{}}};", id + 1, join_one_based(&edges))?;
        }
        writeln!(f)?;

        writeln!(f, "Physical Surface(1) = {{1}};")
    }
}

/// Joins 0-based indices as a comma-separated list of 1-based ids.
fn join_one_based(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::fixtures::{segments, square_sides};
    use crate::pslg::BuildPslg;
    use crate::topology::Loop;

    fn nested_pslg() -> Pslg {
        let mut lines = square_sides(0.0, 4.0);
        lines.extend(square_sides(1.0, 2.0));
        let refs: Vec<&[(f64, f64)]> = lines.iter().map(Vec::as_slice).collect();
        BuildPslg::new()
            .execute(
                &segments(&refs),
                &[Loop::new(vec![0, 1, 2, 3]), Loop::new(vec![4, 5, 6, 7])],
            )
            .unwrap()
    }

    #[test]
    fn writes_all_records() {
        let text = GeoWriter::new(0.5).document(&nested_pslg()).to_string();
        assert!(text.starts_with("cl = 0.5;\n"));
        assert!(text.contains("Point(1) = {0, 0, 0.0, cl};"));
        assert!(text.contains("Point(6) = {2, 1, 0.0, cl};"));
        assert!(text.contains("Line(4) = {4, 1};"));
        assert!(text.contains("Line(8) = {8, 5};"));
        assert!(text.contains("Line Loop(1) = {1, 2, 3, 4};"));
        assert!(text.contains("Line Loop(2) = {5, 6, 7, 8};"));
        assert!(text.contains("Plane Surface(1) = {1, 2};"));
        assert!(text.contains("Physical Line(1) = {1};"));
        assert!(text.contains("Physical Line(8) = {8};"));
        assert!(text.trim_end().ends_with("Physical Surface(1) = {1};"));
    }

    #[test]
    fn record_counts() {
        let text = GeoWriter::default().document(&nested_pslg()).to_string();
        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("Point("), 8);
        assert_eq!(count("Line("), 8);
        assert_eq!(count("Line Loop("), 2);
        assert_eq!(count("Physical Line("), 8);
        assert_eq!(count("Physical Surface("), 1);
    }

    #[test]
    fn write_matches_display() {
        let pslg = nested_pslg();
        let writer = GeoWriter::new(250.0);
        let mut buf = Vec::new();
        writer.write(&pslg, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), writer.document(&pslg).to_string());
    }
}
