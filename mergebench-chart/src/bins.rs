//! Bin Specification
//!
//! Strictly increasing edges defining half-open intervals [e_i, e_{i+1}),
//! with the last interval closed on the right. Values are clipped into the
//! edge range before bucketing, which moves out-of-range values into the end
//! bins instead of discarding them; the boundary tick labels then show the
//! true floor/ceiling so the clipping is visible on the axis.

use thiserror::Error;

/// Errors from bin validation and chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Fewer than two edges were supplied.
    #[error("bin specification needs at least 2 edges, got {0}")]
    TooFewEdges(usize),
    /// Edges are not strictly increasing.
    #[error("bin edges must be strictly increasing (violated at index {0})")]
    NonIncreasingEdges(usize),
    /// The drawing backend failed.
    #[error("chart rendering failed: {0}")]
    Backend(String),
}

/// An ordered set of histogram bin edges with optional label overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct BinSpec {
    edges: Vec<f64>,
    overrides: Vec<(f64, String)>,
}

impl BinSpec {
    /// Validate `edges` into a bin specification.
    pub fn new(edges: Vec<f64>) -> Result<Self, ChartError> {
        if edges.len() < 2 {
            return Err(ChartError::TooFewEdges(edges.len()));
        }
        for i in 1..edges.len() {
            if edges[i] <= edges[i - 1] {
                return Err(ChartError::NonIncreasingEdges(i));
            }
        }
        Ok(Self {
            edges,
            overrides: Vec::new(),
        })
    }

    /// Force the tick label of `edge` to `label`, overriding the computed
    /// boundary rule. Used when an edge is an artificial bound kept only for
    /// equal-width binning and must display as something else.
    pub fn with_label(mut self, edge: f64, label: impl Into<String>) -> Self {
        self.overrides.push((edge, label.into()));
        self
    }

    /// The edges, in increasing order.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// The lowest edge.
    pub fn first(&self) -> f64 {
        self.edges[0]
    }

    /// The highest edge.
    pub fn last(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Number of bins (one less than the number of edges).
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// Clamp `value` into the edge range.
    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.first(), self.last())
    }

    /// Bin index of `value` after clipping.
    pub fn bucket_of(&self, value: f64) -> usize {
        let value = self.clip(value);
        let last_bin = self.bin_count() - 1;
        for i in 0..last_bin {
            if value < self.edges[i + 1] {
                return i;
            }
        }
        last_bin
    }

    /// Tick labels for every edge, given the data's true extent.
    ///
    /// The minimum is capped at zero before the bound check, so metrics that
    /// cannot go negative never produce a spurious lower-bound label. When
    /// the data extends below the first edge the left-most label becomes
    /// floor(min); when it reaches the last edge the right-most label
    /// becomes ceil(max + 1), one past the largest value because bins are
    /// exclusive on the right. Explicit overrides win over both.
    pub fn tick_labels(&self, data_min: f64, data_max: f64) -> Vec<String> {
        let smallest = data_min.min(0.0);
        let has_lower_bound = smallest >= self.first();
        let has_upper_bound = data_max < self.last();

        self.edges
            .iter()
            .enumerate()
            .map(|(i, &edge)| {
                if let Some((_, label)) = self.overrides.iter().find(|(e, _)| *e == edge) {
                    return label.clone();
                }
                if i == 0 && !has_lower_bound {
                    return format!("{}", smallest.floor() as i64);
                }
                if i == self.edges.len() - 1 && !has_upper_bound {
                    return format!("{}", (data_max + 1.0).ceil() as i64);
                }
                format_edge(edge)
            })
            .collect()
    }
}

/// Render an edge value without a trailing ".0" for whole numbers.
fn format_edge(edge: f64) -> String {
    if edge.fract() == 0.0 {
        format!("{}", edge as i64)
    } else {
        format!("{}", edge)
    }
}
