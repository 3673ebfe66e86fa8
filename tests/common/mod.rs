//! Common test utilities and data generators.

#![allow(dead_code)]

use anofox_icc::RatingTable;

/// Deterministic uniform generator on [-1, 1) for reproducible draws.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 11) as f64) / ((1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Table whose cells are independent uniform draws.
pub fn generate_independent_table(n_targets: usize, n_judges: usize, seed: u64) -> RatingTable {
    let mut rng = Lcg::new(seed);
    let mut rows = vec![vec![0.0; n_judges]; n_targets];
    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            *cell = rng.next_f64();
        }
    }
    RatingTable::from_rows(&rows).expect("generated table is valid")
}

/// Table with a strong target effect, a judge offset and small noise.
pub fn generate_reliable_table(n_targets: usize, n_judges: usize, seed: u64) -> RatingTable {
    let mut rng = Lcg::new(seed);
    let mut rows = vec![vec![0.0; n_judges]; n_targets];
    for row in rows.iter_mut() {
        let true_score = 10.0 * rng.next_f64();
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = true_score + 0.5 * j as f64 + 0.5 * rng.next_f64();
        }
    }
    RatingTable::from_rows(&rows).expect("generated table is valid")
}

/// 10 targets rated by 2 judges.
pub fn reference_table() -> RatingTable {
    RatingTable::from_rows(&[
        [103.0, 119.0],
        [82.0, 65.0],
        [116.0, 106.0],
        [102.0, 102.0],
        [99.0, 105.0],
        [98.0, 100.0],
        [104.0, 107.0],
        [62.0, 85.0],
        [97.0, 101.0],
        [107.0, 110.0],
    ])
    .expect("reference table is valid")
}

/// Shrout & Fleiss (1979), Table 2: 6 targets rated by 4 judges.
pub fn shrout_fleiss_table() -> RatingTable {
    RatingTable::from_rows(&[
        [9.0, 2.0, 5.0, 8.0],
        [6.0, 1.0, 3.0, 2.0],
        [8.0, 4.0, 6.0, 8.0],
        [7.0, 1.0, 2.0, 6.0],
        [10.0, 5.0, 6.0, 9.0],
        [6.0, 2.0, 4.0, 7.0],
    ])
    .expect("Shrout & Fleiss table is valid")
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
