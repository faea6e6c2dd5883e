//! Regional HEARTS risk charts.
//!
//! One chart per WHO sub-region, each split by sex. The tables are frozen
//! and only ever read. Their cell values are provisional; see the regional
//! modules.

mod andean;
mod central;
mod southern;

use cardiorisk_core::codes::{Region, Sex};

use crate::error::ScoreError;

pub const AGE_BANDS: usize = 7;
pub const SMOKING_STATES: usize = 2;
pub const BP_BANDS: usize = 5;
pub const CHOLESTEROL_BANDS: usize = 5;

/// `[age band][smoker][systolic band][cholesterol band]` → percent.
pub type SexChart = [[[[u8; CHOLESTEROL_BANDS]; BP_BANDS]; SMOKING_STATES]; AGE_BANDS];

pub struct RegionChart {
    pub female: &'static SexChart,
    pub male: &'static SexChart,
}

static SOUTHERN: RegionChart = RegionChart {
    female: &southern::FEMALE,
    male: &southern::MALE,
};

static ANDEAN: RegionChart = RegionChart {
    female: &andean::FEMALE,
    male: &andean::MALE,
};

static CENTRAL: RegionChart = RegionChart {
    female: &central::FEMALE,
    male: &central::MALE,
};

/// Coordinates of one chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartCell {
    pub age_band: usize,
    pub smoker: bool,
    pub bp_band: usize,
    pub cholesterol_band: usize,
}

pub fn chart(region: Region) -> &'static RegionChart {
    match region {
        Region::Southern => &SOUTHERN,
        Region::Andean => &ANDEAN,
        Region::Central => &CENTRAL,
    }
}

impl RegionChart {
    pub fn for_sex(&self, sex: Sex) -> &'static SexChart {
        match sex {
            Sex::Female => self.female,
            Sex::Male => self.male,
        }
    }

    /// Read one cell. Indices come from the band classifiers, so an
    /// out-of-bounds index is reported rather than trusted.
    pub fn lookup(&self, sex: Sex, cell: ChartCell) -> Result<u8, ScoreError> {
        let by_age = self
            .for_sex(sex)
            .get(cell.age_band)
            .ok_or(ScoreError::LookupOutOfRange {
                band: "age",
                value: cell.age_band as f64,
            })?;
        let by_bp = &by_age[usize::from(cell.smoker)];
        let by_cholesterol = by_bp.get(cell.bp_band).ok_or(ScoreError::LookupOutOfRange {
            band: "systolic",
            value: cell.bp_band as f64,
        })?;
        by_cholesterol
            .get(cell.cholesterol_band)
            .copied()
            .ok_or(ScoreError::LookupOutOfRange {
                band: "cholesterol",
                value: cell.cholesterol_band as f64,
            })
    }
}
