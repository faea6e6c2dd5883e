use cardiorisk_core::codes::{Region, Sex};
use cardiorisk_scores::error::ScoreError;
use cardiorisk_scores::matrix::{AGE_BANDS, BP_BANDS, CHOLESTEROL_BANDS, ChartCell, chart};

const REGIONS: [Region; 3] = [Region::Southern, Region::Andean, Region::Central];
const SEXES: [Sex; 2] = [Sex::Female, Sex::Male];

fn cell(age_band: usize, smoker: bool, bp_band: usize, cholesterol_band: usize) -> ChartCell {
    ChartCell {
        age_band,
        smoker,
        bp_band,
        cholesterol_band,
    }
}

#[test]
fn southern_female_youngest_reference_cell() {
    let risk = chart(Region::Southern)
        .lookup(Sex::Female, cell(0, false, 0, 1))
        .unwrap();
    assert_eq!(risk, 1);
}

// Provisional values; update together with the tables when the published
// charts are transcribed.
#[test]
fn one_cell_per_region_is_pinned() {
    let cases = [
        (Region::Southern, Sex::Male, cell(3, true, 2, 2), 16),
        (Region::Andean, Sex::Male, cell(4, false, 2, 2), 10),
        (Region::Central, Sex::Female, cell(2, false, 1, 2), 2),
    ];
    for (region, sex, at, expected) in cases {
        assert_eq!(chart(region).lookup(sex, at).unwrap(), expected, "{region:?} {sex:?}");
    }
}

#[test]
fn every_cell_is_a_percentage_up_to_30() {
    for region in REGIONS {
        for sex in SEXES {
            let table = chart(region).for_sex(sex);
            for by_age in table {
                for by_smoking in by_age {
                    for by_bp in by_smoking {
                        for &risk in by_bp {
                            assert!((1..=30).contains(&risk), "{region:?} {sex:?} {risk}");
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn risk_never_decreases_along_any_axis() {
    for region in REGIONS {
        for sex in SEXES {
            let t = chart(region).for_sex(sex);
            for a in 0..AGE_BANDS {
                for k in 0..2 {
                    for b in 0..BP_BANDS {
                        for c in 0..CHOLESTEROL_BANDS {
                            let here = t[a][k][b][c];
                            if a + 1 < AGE_BANDS {
                                assert!(t[a + 1][k][b][c] >= here);
                            }
                            if k == 0 {
                                assert!(t[a][1][b][c] >= here);
                            }
                            if b + 1 < BP_BANDS {
                                assert!(t[a][k][b + 1][c] >= here);
                            }
                            if c + 1 < CHOLESTEROL_BANDS {
                                assert!(t[a][k][b][c + 1] >= here);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn out_of_bounds_index_is_reported() {
    let err = chart(Region::Central)
        .lookup(Sex::Male, cell(AGE_BANDS, false, 0, 0))
        .unwrap_err();
    assert!(matches!(err, ScoreError::LookupOutOfRange { band: "age", .. }));

    let err = chart(Region::Central)
        .lookup(Sex::Male, cell(0, false, 0, CHOLESTEROL_BANDS))
        .unwrap_err();
    assert!(matches!(
        err,
        ScoreError::LookupOutOfRange {
            band: "cholesterol",
            ..
        }
    ));
}
