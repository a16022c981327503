//! BattleChess Evolution - Genetic tuning for agent evaluation configs
//!
//! This crate provides the offline self-play tuning loop:
//! - Crossover operators (agree-keep flags, quarter-delta weight blend)
//! - Weight mutation
//! - Tournament selection
//! - A generational loop with elitism

pub mod crossover;
pub mod mutation;
pub mod selection;

pub use crossover::{crossover_agents, crossover_configs};
pub use mutation::mutate_config;
pub use selection::tournament_select;

use battlechess_core::ScoreConfig;
use rand::Rng;

/// Evolution configuration
#[derive(Clone, Debug)]
pub struct EvolveConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub tournament_size: usize,
    pub elitism: usize,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: 16,
            generations: 10,
            mutation_rate: 0.2,
            tournament_size: 3,
            elitism: 2,
        }
    }
}

/// Final population with its fitness, both sorted fittest-first
#[derive(Clone, Debug)]
pub struct EvolveOutcome {
    pub population: Vec<ScoreConfig>,
    pub fitness: Vec<f64>,
}

impl EvolveOutcome {
    /// The champion config
    pub fn best(&self) -> &ScoreConfig {
        &self.population[0]
    }
}

/// Evolve a population of evaluation configs.
///
/// Each generation scores every member with `fitness_fn`, carries the top
/// `elitism` members over unchanged, and fills the rest of the next
/// generation with mutated crossover children of tournament winners.
///
/// The caller owns the fitness definition; the CLI drives it with
/// self-play match results.
pub fn evolve<F, R>(
    initial: Vec<ScoreConfig>,
    config: &EvolveConfig,
    mut fitness_fn: F,
    rng: &mut R,
) -> EvolveOutcome
where
    F: FnMut(&ScoreConfig) -> f64,
    R: Rng,
{
    assert!(!initial.is_empty(), "initial population must not be empty");

    let mut population = initial;
    let mut fitness: Vec<f64> = population.iter().map(&mut fitness_fn).collect();
    sort_by_fitness(&mut population, &mut fitness);

    for _ in 0..config.generations {
        let mut next: Vec<ScoreConfig> =
            population.iter().take(config.elitism).cloned().collect();

        while next.len() < config.population_size {
            let a = tournament_select(&population, &fitness, config.tournament_size, rng);
            let b = tournament_select(&population, &fitness, config.tournament_size, rng);
            let child = crossover_configs(a, b, rng);
            next.push(mutate_config(&child, config.mutation_rate, rng));
        }

        population = next;
        fitness = population.iter().map(&mut fitness_fn).collect();
        sort_by_fitness(&mut population, &mut fitness);
    }

    EvolveOutcome { population, fitness }
}

fn sort_by_fitness(population: &mut Vec<ScoreConfig>, fitness: &mut Vec<f64>) {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&i, &j| fitness[j].total_cmp(&fitness[i]));

    *population = order.iter().map(|&i| population[i].clone()).collect();
    *fitness = order.iter().map(|&i| fitness[i]).collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Cheap stand-in fitness: sum of enabled weights
    fn toy_fitness(config: &ScoreConfig) -> f64 {
        config
            .weights
            .iter()
            .zip(config.enabled.iter())
            .filter(|(_, &on)| on)
            .map(|(&w, _)| w as f64)
            .sum()
    }

    #[test]
    fn test_evolution_never_regresses_with_elitism() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let initial: Vec<ScoreConfig> =
            (0..10).map(|_| ScoreConfig::random(&mut rng)).collect();
        let initial_best = initial.iter().map(toy_fitness).fold(f64::NEG_INFINITY, f64::max);

        let config = EvolveConfig {
            population_size: 10,
            generations: 5,
            mutation_rate: 0.3,
            tournament_size: 3,
            elitism: 2,
        };
        let outcome = evolve(initial, &config, toy_fitness, &mut rng);

        assert!(
            outcome.fitness[0] >= initial_best,
            "final {} should be >= initial {}",
            outcome.fitness[0],
            initial_best
        );
        assert_eq!(outcome.population.len(), 10);
    }

    #[test]
    fn test_outcome_is_sorted_fittest_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let initial: Vec<ScoreConfig> =
            (0..6).map(|_| ScoreConfig::random(&mut rng)).collect();
        let outcome = evolve(initial, &EvolveConfig::default(), toy_fitness, &mut rng);

        for pair in outcome.fitness.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(toy_fitness(outcome.best()), outcome.fitness[0]);
    }
}
