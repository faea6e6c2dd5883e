//! Provisional HEARTS chart without diabetes: Central Latin America (Colombia, Mexico).
//!
//! Placeholder values pending transcription of the published WHO/PAHO
//! lab-based charts. They rise monotonically along every axis and are capped
//! at 30, but only the southern female 40-44 non-smoker cell is a known value.
//! Do not use these tables for clinical decisions.
//!
//! Indexed `[age band][smoker][systolic band][cholesterol band]`; cells are
//! 10-year fatal and non-fatal cardiovascular event risk in percent.

use super::SexChart;

#[rustfmt::skip]
pub(super) const FEMALE: SexChart = [
    // 40-44
    [
        // non-smoker
        [
            [ 1,  1,  1,  1,  1], // <120
            [ 1,  1,  1,  1,  1], // 120-139
            [ 1,  1,  1,  2,  2], // 140-159
            [ 1,  2,  2,  2,  2], // 160-179
            [ 2,  2,  2,  2,  3], // >=180
        ],
        // smoker
        [
            [ 1,  1,  2,  2,  2], // <120
            [ 2,  2,  2,  2,  2], // 120-139
            [ 2,  2,  2,  3,  3], // 140-159
            [ 2,  3,  3,  3,  4], // 160-179
            [ 3,  3,  4,  4,  5], // >=180
        ],
    ],
    // 45-49
    [
        // non-smoker
        [
            [ 1,  1,  1,  1,  2], // <120
            [ 1,  1,  2,  2,  2], // 120-139
            [ 2,  2,  2,  2,  2], // 140-159
            [ 2,  2,  2,  3,  3], // 160-179
            [ 2,  3,  3,  3,  4], // >=180
        ],
        // smoker
        [
            [ 2,  2,  2,  3,  3], // <120
            [ 2,  3,  3,  3,  4], // 120-139
            [ 3,  3,  4,  4,  4], // 140-159
            [ 4,  4,  4,  5,  6], // 160-179
            [ 4,  5,  6,  6,  7], // >=180
        ],
    ],
    // 50-54
    [
        // non-smoker
        [
            [ 1,  2,  2,  2,  2], // <120
            [ 2,  2,  2,  3,  3], // 120-139
            [ 2,  3,  3,  3,  4], // 140-159
            [ 3,  3,  4,  4,  5], // 160-179
            [ 4,  4,  5,  5,  6], // >=180
        ],
        // smoker
        [
            [ 3,  3,  3,  4,  4], // <120
            [ 3,  4,  4,  5,  5], // 120-139
            [ 4,  5,  5,  6,  7], // 140-159
            [ 5,  6,  6,  7,  8], // 160-179
            [ 6,  7,  8,  9, 10], // >=180
        ],
    ],
    // 55-59
    [
        // non-smoker
        [
            [ 2,  2,  3,  3,  3], // <120
            [ 3,  3,  3,  4,  4], // 120-139
            [ 3,  4,  4,  5,  5], // 140-159
            [ 4,  5,  5,  6,  7], // 160-179
            [ 5,  6,  7,  7,  8], // >=180
        ],
        // smoker
        [
            [ 4,  4,  5,  5,  6], // <120
            [ 5,  5,  6,  7,  8], // 120-139
            [ 6,  7,  8,  8,  9], // 140-159
            [ 8,  8,  9, 11, 12], // 160-179
            [ 9, 11, 12, 13, 15], // >=180
        ],
    ],
    // 60-64
    [
        // non-smoker
        [
            [ 3,  3,  4,  4,  5], // <120
            [ 4,  4,  5,  5,  6], // 120-139
            [ 5,  5,  6,  7,  8], // 140-159
            [ 6,  7,  8,  8, 10], // 160-179
            [ 8,  8,  9, 11, 12], // >=180
        ],
        // smoker
        [
            [ 6,  6,  7,  8,  9], // <120
            [ 7,  8,  9, 10, 11], // 120-139
            [ 9, 10, 11, 12, 14], // 140-159
            [11, 12, 14, 15, 17], // 160-179
            [14, 15, 17, 19, 21], // >=180
        ],
    ],
    // 65-69
    [
        // non-smoker
        [
            [ 4,  5,  6,  6,  7], // <120
            [ 6,  6,  7,  8,  9], // 120-139
            [ 7,  8,  9, 10, 11], // 140-159
            [ 9, 10, 11, 12, 14], // 160-179
            [11, 12, 14, 15, 17], // >=180
        ],
        // smoker
        [
            [ 8,  9, 10, 11, 13], // <120
            [10, 11, 13, 14, 16], // 120-139
            [13, 14, 16, 18, 20], // 140-159
            [16, 18, 20, 22, 25], // 160-179
            [20, 22, 25, 28, 30], // >=180
        ],
    ],
    // 70-74
    [
        // non-smoker
        [
            [ 7,  7,  8,  9, 10], // <120
            [ 8,  9, 10, 11, 13], // 120-139
            [10, 11, 13, 14, 16], // 140-159
            [13, 14, 16, 18, 20], // 160-179
            [16, 18, 20, 22, 25], // >=180
        ],
        // smoker
        [
            [12, 13, 15, 16, 18], // <120
            [15, 16, 18, 21, 23], // 120-139
            [18, 20, 23, 26, 29], // 140-159
            [23, 26, 29, 30, 30], // 160-179
            [29, 30, 30, 30, 30], // >=180
        ],
    ],
];

#[rustfmt::skip]
pub(super) const MALE: SexChart = [
    // 40-44
    [
        // non-smoker
        [
            [ 1,  2,  2,  2,  3], // <120
            [ 2,  2,  2,  3,  3], // 120-139
            [ 2,  2,  3,  3,  4], // 140-159
            [ 3,  3,  4,  4,  5], // 160-179
            [ 3,  4,  4,  5,  6], // >=180
        ],
        // smoker
        [
            [ 2,  3,  3,  4,  5], // <120
            [ 3,  3,  4,  5,  6], // 120-139
            [ 4,  4,  5,  6,  7], // 140-159
            [ 4,  5,  6,  7,  8], // 160-179
            [ 5,  6,  7,  9, 10], // >=180
        ],
    ],
    // 45-49
    [
        // non-smoker
        [
            [ 2,  2,  3,  3,  4], // <120
            [ 2,  3,  3,  4,  5], // 120-139
            [ 3,  3,  4,  5,  6], // 140-159
            [ 4,  4,  5,  6,  7], // 160-179
            [ 4,  5,  6,  7,  9], // >=180
        ],
        // smoker
        [
            [ 3,  4,  5,  6,  7], // <120
            [ 4,  5,  6,  7,  8], // 120-139
            [ 5,  6,  7,  8, 10], // 140-159
            [ 6,  7,  9, 10, 12], // 160-179
            [ 7,  9, 10, 12, 15], // >=180
        ],
    ],
    // 50-54
    [
        // non-smoker
        [
            [ 3,  3,  4,  5,  5], // <120
            [ 3,  4,  5,  6,  7], // 120-139
            [ 4,  5,  6,  7,  8], // 140-159
            [ 5,  6,  7,  8, 10], // 160-179
            [ 6,  7,  9, 10, 12], // >=180
        ],
        // smoker
        [
            [ 5,  6,  7,  8,  9], // <120
            [ 6,  7,  8, 10, 11], // 120-139
            [ 7,  8, 10, 12, 14], // 140-159
            [ 9, 10, 12, 14, 17], // 160-179
            [11, 13, 15, 17, 21], // >=180
        ],
    ],
    // 55-59
    [
        // non-smoker
        [
            [ 4,  5,  6,  7,  8], // <120
            [ 5,  6,  7,  8,  9], // 120-139
            [ 6,  7,  8, 10, 12], // 140-159
            [ 7,  9, 10, 12, 14], // 160-179
            [ 9, 10, 12, 15, 17], // >=180
        ],
        // smoker
        [
            [ 7,  8,  9, 11, 13], // <120
            [ 8, 10, 12, 14, 16], // 120-139
            [10, 12, 14, 17, 20], // 140-159
            [12, 15, 17, 20, 24], // 160-179
            [15, 18, 21, 25, 29], // >=180
        ],
    ],
    // 60-64
    [
        // non-smoker
        [
            [ 6,  7,  8,  9, 11], // <120
            [ 7,  8, 10, 11, 13], // 120-139
            [ 8, 10, 12, 14, 16], // 140-159
            [10, 12, 14, 17, 20], // 160-179
            [13, 15, 18, 21, 24], // >=180
        ],
        // smoker
        [
            [10, 11, 13, 16, 19], // <120
            [12, 14, 16, 19, 23], // 120-139
            [14, 17, 20, 24, 28], // 140-159
            [18, 21, 24, 29, 30], // 160-179
            [21, 25, 30, 30, 30], // >=180
        ],
    ],
    // 65-69
    [
        // non-smoker
        [
            [ 8, 10, 11, 13, 16], // <120
            [10, 12, 14, 16, 19], // 120-139
            [12, 14, 17, 20, 23], // 140-159
            [15, 17, 20, 24, 28], // 160-179
            [18, 21, 25, 29, 30], // >=180
        ],
        // smoker
        [
            [14, 16, 19, 23, 27], // <120
            [17, 20, 23, 28, 30], // 120-139
            [20, 24, 28, 30, 30], // 140-159
            [25, 29, 30, 30, 30], // 160-179
            [30, 30, 30, 30, 30], // >=180
        ],
    ],
    // 70-74
    [
        // non-smoker
        [
            [11, 14, 16, 19, 22], // <120
            [14, 17, 19, 23, 27], // 120-139
            [17, 20, 24, 28, 30], // 140-159
            [21, 25, 29, 30, 30], // 160-179
            [25, 30, 30, 30, 30], // >=180
        ],
        // smoker
        [
            [20, 23, 27, 30, 30], // <120
            [24, 28, 30, 30, 30], // 120-139
            [29, 30, 30, 30, 30], // 140-159
            [30, 30, 30, 30, 30], // 160-179
            [30, 30, 30, 30, 30], // >=180
        ],
    ],
];
