//! Provisional HEARTS chart without diabetes: Southern Latin America (Argentina, Chile).
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
            [ 1,  1,  1,  1,  2], // 120-139
            [ 1,  1,  2,  2,  2], // 140-159
            [ 2,  2,  2,  2,  2], // 160-179
            [ 2,  2,  2,  3,  3], // >=180
        ],
        // smoker
        [
            [ 1,  2,  2,  2,  2], // <120
            [ 2,  2,  2,  3,  3], // 120-139
            [ 2,  3,  3,  3,  4], // 140-159
            [ 3,  3,  4,  4,  4], // 160-179
            [ 4,  4,  4,  5,  6], // >=180
        ],
    ],
    // 45-49
    [
        // non-smoker
        [
            [ 1,  1,  1,  2,  2], // <120
            [ 1,  2,  2,  2,  2], // 120-139
            [ 2,  2,  2,  3,  3], // 140-159
            [ 2,  3,  3,  3,  4], // 160-179
            [ 3,  3,  4,  4,  4], // >=180
        ],
        // smoker
        [
            [ 2,  2,  3,  3,  3], // <120
            [ 3,  3,  3,  4,  4], // 120-139
            [ 3,  4,  4,  5,  5], // 140-159
            [ 4,  5,  5,  6,  6], // 160-179
            [ 5,  6,  6,  7,  8], // >=180
        ],
    ],
    // 50-54
    [
        // non-smoker
        [
            [ 2,  2,  2,  2,  3], // <120
            [ 2,  2,  3,  3,  3], // 120-139
            [ 3,  3,  3,  4,  4], // 140-159
            [ 3,  4,  4,  5,  5], // 160-179
            [ 4,  5,  5,  6,  6], // >=180
        ],
        // smoker
        [
            [ 3,  3,  4,  4,  5], // <120
            [ 4,  4,  5,  5,  6], // 120-139
            [ 5,  5,  6,  7,  7], // 140-159
            [ 6,  7,  7,  8,  9], // 160-179
            [ 7,  8,  9, 10, 12], // >=180
        ],
    ],
    // 55-59
    [
        // non-smoker
        [
            [ 2,  3,  3,  3,  4], // <120
            [ 3,  3,  4,  4,  5], // 120-139
            [ 4,  4,  5,  5,  6], // 140-159
            [ 5,  5,  6,  7,  7], // 160-179
            [ 6,  7,  7,  8,  9], // >=180
        ],
        // smoker
        [
            [ 4,  5,  6,  6,  7], // <120
            [ 5,  6,  7,  8,  9], // 120-139
            [ 7,  8,  9, 10, 11], // 140-159
            [ 9, 10, 11, 12, 13], // 160-179
            [11, 12, 13, 15, 17], // >=180
        ],
    ],
    // 60-64
    [
        // non-smoker
        [
            [ 4,  4,  4,  5,  6], // <120
            [ 4,  5,  6,  6,  7], // 120-139
            [ 6,  6,  7,  8,  9], // 140-159
            [ 7,  8,  9, 10, 11], // 160-179
            [ 9, 10, 11, 12, 14], // >=180
        ],
        // smoker
        [
            [ 6,  7,  8,  9, 10], // <120
            [ 8,  9, 10, 11, 13], // 120-139
            [10, 11, 12, 14, 16], // 140-159
            [12, 14, 16, 17, 20], // 160-179
            [16, 17, 19, 22, 24], // >=180
        ],
    ],
    // 65-69
    [
        // non-smoker
        [
            [ 5,  6,  6,  7,  8], // <120
            [ 6,  7,  8,  9, 10], // 120-139
            [ 8,  9, 10, 11, 13], // 140-159
            [10, 11, 13, 14, 16], // 160-179
            [13, 14, 16, 18, 20], // >=180
        ],
        // smoker
        [
            [ 9, 10, 12, 13, 15], // <120
            [12, 13, 14, 16, 18], // 120-139
            [14, 16, 18, 20, 23], // 140-159
            [18, 20, 23, 25, 28], // 160-179
            [23, 25, 28, 30, 30], // >=180
        ],
    ],
    // 70-74
    [
        // non-smoker
        [
            [ 7,  8,  9, 10, 12], // <120
            [ 9, 10, 12, 13, 15], // 120-139
            [12, 13, 15, 16, 18], // 140-159
            [15, 16, 18, 20, 23], // 160-179
            [18, 20, 23, 26, 29], // >=180
        ],
        // smoker
        [
            [13, 15, 17, 19, 21], // <120
            [17, 19, 21, 24, 26], // 120-139
            [21, 23, 26, 29, 30], // 140-159
            [26, 29, 30, 30, 30], // 160-179
            [30, 30, 30, 30, 30], // >=180
        ],
    ],
];

#[rustfmt::skip]
pub(super) const MALE: SexChart = [
    // 40-44
    [
        // non-smoker
        [
            [ 2,  2,  2,  3,  3], // <120
            [ 2,  2,  3,  3,  4], // 120-139
            [ 2,  3,  3,  4,  5], // 140-159
            [ 3,  3,  4,  5,  6], // 160-179
            [ 4,  4,  5,  6,  7], // >=180
        ],
        // smoker
        [
            [ 3,  3,  4,  4,  5], // <120
            [ 3,  4,  5,  5,  6], // 120-139
            [ 4,  5,  6,  7,  8], // 140-159
            [ 5,  6,  7,  8, 10], // 160-179
            [ 6,  7,  8, 10, 12], // >=180
        ],
    ],
    // 45-49
    [
        // non-smoker
        [
            [ 2,  3,  3,  4,  4], // <120
            [ 3,  3,  4,  5,  5], // 120-139
            [ 3,  4,  5,  6,  7], // 140-159
            [ 4,  5,  6,  7,  8], // 160-179
            [ 5,  6,  7,  8, 10], // >=180
        ],
        // smoker
        [
            [ 4,  5,  5,  6,  7], // <120
            [ 5,  6,  7,  8,  9], // 120-139
            [ 6,  7,  8,  9, 11], // 140-159
            [ 7,  8, 10, 12, 14], // 160-179
            [ 9, 10, 12, 14, 17], // >=180
        ],
    ],
    // 50-54
    [
        // non-smoker
        [
            [ 3,  4,  4,  5,  6], // <120
            [ 4,  5,  5,  6,  8], // 120-139
            [ 5,  6,  7,  8,  9], // 140-159
            [ 6,  7,  8, 10, 11], // 160-179
            [ 7,  8, 10, 12, 14], // >=180
        ],
        // smoker
        [
            [ 5,  6,  8,  9, 11], // <120
            [ 7,  8,  9, 11, 13], // 120-139
            [ 8, 10, 11, 13, 16], // 140-159
            [10, 12, 14, 16, 19], // 160-179
            [12, 14, 17, 20, 24], // >=180
        ],
    ],
    // 55-59
    [
        // non-smoker
        [
            [ 5,  5,  6,  8,  9], // <120
            [ 6,  7,  8,  9, 11], // 120-139
            [ 7,  8,  9, 11, 13], // 140-159
            [ 8, 10, 12, 14, 16], // 160-179
            [10, 12, 14, 17, 20], // >=180
        ],
        // smoker
        [
            [ 8,  9, 11, 13, 15], // <120
            [10, 11, 13, 16, 18], // 120-139
            [12, 14, 16, 19, 22], // 140-159
            [14, 17, 20, 23, 27], // 160-179
            [17, 20, 24, 28, 30], // >=180
        ],
    ],
    // 60-64
    [
        // non-smoker
        [
            [ 7,  8,  9, 11, 13], // <120
            [ 8,  9, 11, 13, 15], // 120-139
            [10, 11, 13, 16, 19], // 140-159
            [12, 14, 16, 19, 23], // 160-179
            [14, 17, 20, 24, 28], // >=180
        ],
        // smoker
        [
            [11, 13, 15, 18, 21], // <120
            [13, 16, 19, 22, 26], // 120-139
            [16, 19, 23, 27, 30], // 140-159
            [20, 24, 28, 30, 30], // 160-179
            [24, 29, 30, 30, 30], // >=180
        ],
    ],
    // 65-69
    [
        // non-smoker
        [
            [ 9, 11, 13, 15, 18], // <120
            [11, 13, 16, 19, 22], // 120-139
            [14, 16, 19, 23, 27], // 140-159
            [17, 20, 23, 28, 30], // 160-179
            [20, 24, 28, 30, 30], // >=180
        ],
        // smoker
        [
            [16, 19, 22, 26, 30], // <120
            [19, 23, 27, 30, 30], // 120-139
            [23, 28, 30, 30, 30], // 140-159
            [29, 30, 30, 30, 30], // 160-179
            [30, 30, 30, 30, 30], // >=180
        ],
    ],
    // 70-74
    [
        // non-smoker
        [
            [13, 15, 18, 22, 25], // <120
            [16, 19, 22, 26, 30], // 120-139
            [20, 23, 27, 30, 30], // 140-159
            [24, 28, 30, 30, 30], // 160-179
            [29, 30, 30, 30, 30], // >=180
        ],
        // smoker
        [
            [22, 26, 30, 30, 30], // <120
            [27, 30, 30, 30, 30], // 120-139
            [30, 30, 30, 30, 30], // 140-159
            [30, 30, 30, 30, 30], // 160-179
            [30, 30, 30, 30, 30], // >=180
        ],
    ],
];
