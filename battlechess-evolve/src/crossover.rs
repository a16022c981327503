//! Crossover operators for agent evaluation configs
//!
//! Combines two parent configurations to produce offspring that inherit
//! heuristic choices from both parents.

use battlechess_core::{Agent, ScoreConfig, NUM_SCORE_FUNCS};
use rand::Rng;

/// Crossover two evaluation configs.
///
/// Enabled flags the parents agree on are kept; disagreements inherit
/// randomly from either parent. Each weight starts at parent A's value and
/// moves a random number (0 to 4) of quarter-steps of the parents' delta,
/// so children cluster around A but can land past B.
///
/// # Arguments
/// * `a` - First parent config
/// * `b` - Second parent config
/// * `rng` - Random number generator
///
/// # Returns
/// New config combining traits from both parents
pub fn crossover_configs<R: Rng>(a: &ScoreConfig, b: &ScoreConfig, rng: &mut R) -> ScoreConfig {
    let mut enabled = [false; NUM_SCORE_FUNCS];
    let mut weights = [0; NUM_SCORE_FUNCS];

    for i in 0..NUM_SCORE_FUNCS {
        enabled[i] = if a.enabled[i] == b.enabled[i] {
            a.enabled[i]
        } else if rng.gen_bool(0.5) {
            a.enabled[i]
        } else {
            b.enabled[i]
        };

        let delta = a.weights[i] - b.weights[i];
        weights[i] = a.weights[i] + (delta / 4) * rng.gen_range(0..5);
    }

    ScoreConfig { enabled, weights }
}

/// Crossover two agents; the child keeps the first parent's color and
/// depth, with no time budget set.
pub fn crossover_agents<R: Rng>(a: &Agent, b: &Agent, rng: &mut R) -> Agent {
    Agent::new(a.color, a.depth, crossover_configs(&a.config, &b.config, rng))
}
