//! Aggregates over stored patient scores for the dashboard widget.

use cardiorisk_core::models::summary::{AverageScores, RiskSummary, StoredScores};

/// Round half up, the way the dashboard has always rounded.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

fn average(total: i64, count: usize) -> i32 {
    if count == 0 {
        0
    } else {
        round_half_up(total as f64 / count as f64)
    }
}

/// Share of `part` in `count` as a whole percentage. The fraction is scaled
/// after dividing, so 23 of 40 gives 57.49999999999999 and rounds to 57.
fn percentage(part: usize, count: usize) -> i32 {
    if count == 0 {
        0
    } else {
        round_half_up(part as f64 / count as f64 * 100.0)
    }
}

/// Average each score over `records` (missing scores count as 0) and the
/// share of patients whose HEARTS score exceeds `high_risk_threshold`.
pub fn summarize(
    records: &[StoredScores],
    high_risk_threshold: i32,
    last_update: jiff::Timestamp,
) -> RiskSummary {
    let count = records.len();
    let total = |pick: fn(&StoredScores) -> Option<i32>| -> i64 {
        records
            .iter()
            .map(|r| i64::from(pick(r).unwrap_or(0)))
            .sum()
    };

    let high_risk = records
        .iter()
        .filter(|r| r.hearts_score.is_some_and(|s| s > high_risk_threshold))
        .count();

    RiskSummary {
        average_scores: AverageScores {
            harms2af: average(total(|r| r.harms2af_score), count),
            mtaiwan: average(total(|r| r.mtaiwan_score), count),
            hearts: average(total(|r| r.hearts_score), count),
        },
        high_risk_percentage: percentage(high_risk, count),
        total_patients: u32::try_from(count).unwrap_or(u32::MAX),
        last_update,
    }
}
