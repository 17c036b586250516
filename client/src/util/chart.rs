//! Severity doughnut geometry.
//!
//! The chart is a plain SVG: each slice is a circle stroke with a dash
//! pattern. With radius `100 / 2π` the circumference is exactly 100, so a
//! slice's dash length is its percentage.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use crate::net::types::{Severity, SeverityCounts};

/// Radius giving a circumference of 100 user units.
pub const RING_RADIUS: f64 = 15.915_494_309_189_533;
/// Dash offset that starts the first slice at 12 o'clock.
const START_OFFSET: f64 = 25.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub severity: Severity,
    pub count: u32,
    pub percent: f64,
    /// `stroke-dashoffset` for this slice.
    pub offset: f64,
}

impl ChartSlice {
    /// `stroke-dasharray` value.
    pub fn dash_array(&self) -> String {
        format!("{:.3} {:.3}", self.percent, 100.0 - self.percent)
    }
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "#ff6b6b",
        Severity::Medium => "#ffd166",
        Severity::Low => "#06d6a0",
    }
}

/// Slices in high, medium, low order. Empty when there are no risks.
pub fn severity_slices(counts: &SeverityCounts) -> Vec<ChartSlice> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;
    let mut consumed = 0.0;
    Severity::ALL
        .iter()
        .map(|&severity| {
            let count = counts.get(severity);
            let percent = f64::from(count) * 100.0 / total;
            let slice = ChartSlice { severity, count, percent, offset: START_OFFSET - consumed };
            consumed += percent;
            slice
        })
        .collect()
}
