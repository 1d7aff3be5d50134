#![warn(missing_docs)]
//! Mergebench Statistical Routines
//!
//! Pure statistical functions for the analysis pipeline:
//! - Percentile computation and describe-style series summaries
//! - Friedman chi-squared test for matched repeated measures
//! - Wilcoxon signed-rank test (two-sided, normal approximation)
//!
//! The significance tests are reported, never acted upon: no threshold is
//! enforced anywhere in this crate.

mod describe;
mod distribution;
mod ranks;
mod significance;

pub use describe::{SeriesSummary, compute_percentile, describe, median};
pub use significance::{SignificanceTest, StatsError, friedman_test, wilcoxon_signed_rank};
