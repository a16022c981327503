//! Tournament selection

use battlechess_core::ScoreConfig;
use rand::Rng;

/// Pick the fittest of `size` randomly drawn population members.
///
/// # Panics
/// Panics if the population is empty or fitness lengths mismatch.
pub fn tournament_select<'a, R: Rng>(
    population: &'a [ScoreConfig],
    fitness: &[f64],
    size: usize,
    rng: &mut R,
) -> &'a ScoreConfig {
    assert_eq!(population.len(), fitness.len());

    let mut best = rng.gen_range(0..population.len());
    for _ in 1..size {
        let challenger = rng.gen_range(0..population.len());
        if fitness[challenger] > fitness[best] {
            best = challenger;
        }
    }
    &population[best]
}
