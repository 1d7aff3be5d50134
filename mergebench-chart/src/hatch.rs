//! Hatch Pattern Geometry
//!
//! The three series share one chart, so each gets a distinct fill pattern:
//! plain, diagonal, cross-hatch. Patterns are generated as line segments in
//! the unit square and scaled onto each bar by the renderer.

/// Fill pattern of one histogram series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HatchPattern {
    /// Plain fill, no overlay.
    Solid,
    /// Rising diagonal lines.
    Diagonal,
    /// Diagonals in both directions.
    CrossHatch,
}

/// Pattern per tool, in column order.
pub(crate) const TOOL_HATCHES: [HatchPattern; 3] = [
    HatchPattern::Solid,
    HatchPattern::Diagonal,
    HatchPattern::CrossHatch,
];

/// Hatch segments covering the unit square, `spacing` apart.
pub(crate) fn unit_segments(
    pattern: HatchPattern,
    spacing: f64,
) -> Vec<((f64, f64), (f64, f64))> {
    match pattern {
        HatchPattern::Solid => Vec::new(),
        HatchPattern::Diagonal => falling_diagonals(spacing),
        HatchPattern::CrossHatch => {
            let mut segments = falling_diagonals(spacing);
            segments.extend(rising_diagonals(spacing));
            segments
        }
    }
}

/// Lines of constant x + y = u, for u in (0, 2).
fn falling_diagonals(spacing: f64) -> Vec<((f64, f64), (f64, f64))> {
    let mut segments = Vec::new();
    let mut u = spacing;
    while u < 2.0 {
        let segment = if u <= 1.0 {
            ((u, 0.0), (0.0, u))
        } else {
            ((1.0, u - 1.0), (u - 1.0, 1.0))
        };
        segments.push(segment);
        u += spacing;
    }
    segments
}

/// Lines of constant x − y = v, for v in (−1, 1).
fn rising_diagonals(spacing: f64) -> Vec<((f64, f64), (f64, f64))> {
    let mut segments = Vec::new();
    let mut v = -1.0 + spacing;
    while v < 1.0 {
        let segment = if v >= 0.0 {
            ((v, 0.0), (1.0, 1.0 - v))
        } else {
            ((0.0, -v), (1.0 + v, 1.0))
        };
        segments.push(segment);
        v += spacing;
    }
    segments
}
