//! Discretization of continuous measurements into chart bands.

use crate::error::ScoreError;
use crate::matrix::{AGE_BANDS, BP_BANDS, CHOLESTEROL_BANDS};

/// Contiguous half-open bands `[lower[i], lower[i + 1])`, the last one
/// closed off by `upper`. A value sitting on a shared boundary belongs to
/// the band that starts there.
#[derive(Debug, Clone, Copy)]
pub struct Bands<const N: usize> {
    pub name: &'static str,
    pub lower: [f64; N],
    pub upper: f64,
}

impl<const N: usize> Bands<N> {
    /// Zero-based index of the band containing `value`, or `None` when the
    /// value falls outside every band (or is NaN).
    pub fn classify(&self, value: f64) -> Option<usize> {
        (0..N).find(|&i| {
            let low = self.lower[i];
            let high = self.lower.get(i + 1).copied().unwrap_or(self.upper);
            value >= low && value < high
        })
    }

    pub fn index(&self, value: f64) -> Result<usize, ScoreError> {
        self.classify(value).ok_or(ScoreError::LookupOutOfRange {
            band: self.name,
            value,
        })
    }
}

/// 40–44 … 70–74. Ages from 75 have no band.
pub const AGE: Bands<AGE_BANDS> = Bands {
    name: "age",
    lower: [40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0],
    upper: 75.0,
};

/// <120, 120–139, 140–159, 160–179, ≥180 mmHg.
pub const SYSTOLIC: Bands<BP_BANDS> = Bands {
    name: "systolic",
    lower: [f64::NEG_INFINITY, 120.0, 140.0, 160.0, 180.0],
    upper: f64::INFINITY,
};

/// <4, 4–4.9, 5–5.9, 6–6.9, ≥7 mmol/L.
pub const CHOLESTEROL_MMOL: Bands<CHOLESTEROL_BANDS> = Bands {
    name: "cholesterol",
    lower: [f64::NEG_INFINITY, 4.0, 5.0, 6.0, 7.0],
    upper: f64::INFINITY,
};
