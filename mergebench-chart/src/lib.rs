#![warn(missing_docs)]
//! Mergebench Chart - Binned Histogram Rendering
//!
//! Draws one grouped histogram per analysis: three series over shared bin
//! edges, one per tool, distinguished by hatch pattern so the chart stays
//! legible without color. Values are clipped into the bin range before
//! bucketing (no data point is ever discarded) and the boundary tick labels
//! signal when clipping occurred.
//!
//! Rendering also runs the significance tests over the aligned columns and
//! returns them in the artifact; the caller decides how to report them.

mod bins;
mod hatch;
mod histogram;

pub use bins::{BinSpec, ChartError};
pub use histogram::{HistogramArtifact, HistogramConfig, render_histogram};
