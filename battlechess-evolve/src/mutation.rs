//! Mutation operators for agent evaluation configs

use battlechess_core::{ScoreConfig, NUM_SCORE_FUNCS};
use rand::Rng;

/// Largest single-step weight perturbation
const WEIGHT_STEP: i32 = 10;

/// Weights are kept inside the range random configs draw from
const WEIGHT_MIN: i32 = 1;
const WEIGHT_MAX: i32 = 100;

/// Perturb a config.
///
/// Each weight has `rate` chance of a nudge within +-WEIGHT_STEP, clamped
/// to the valid range; each enabled flag flips with a quarter of that
/// chance, keeping the heuristic mix mostly stable across generations.
///
/// # Arguments
/// * `config` - Config to mutate (left untouched)
/// * `rate` - Per-weight mutation probability (0.0 to 1.0)
/// * `rng` - Random number generator
pub fn mutate_config<R: Rng>(config: &ScoreConfig, rate: f64, rng: &mut R) -> ScoreConfig {
    let mut out = config.clone();

    for i in 0..NUM_SCORE_FUNCS {
        if rng.gen_bool(rate) {
            let nudge = rng.gen_range(-WEIGHT_STEP..=WEIGHT_STEP);
            out.weights[i] = (out.weights[i] + nudge).clamp(WEIGHT_MIN, WEIGHT_MAX);
        }
        if rng.gen_bool(rate / 4.0) {
            out.enabled[i] = !out.enabled[i];
        }
    }

    out
}
