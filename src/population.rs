//! Population management for the genetic algorithm.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::fitness;
use crate::genetic::{self, Genetic};
use crate::individual::{Chromosome, Scored};
use crate::problem::Problem;

/// Owns the current generation of chromosomes and the single random stream
/// every stochastic draw of the run is served from.
pub struct Population {
    /// Chromosomes of the current generation, in a stable order. The order
    /// matters: elitism tie-breaks follow it.
    pub individuals: Vec<Chromosome>,
    rng: ChaCha8Rng,
    genetic: Genetic,
}

impl Population {
    /// Create an empty population. The RNG is seeded from the config, or
    /// from entropy when no seed is given.
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Population {
            individuals: Vec::with_capacity(config.population_size),
            rng,
            genetic: Genetic,
        }
    }

    /// Build generation zero: `population_size` chromosomes, each picking
    /// an independent uniformly random selectable section per subject.
    pub fn initialize(&mut self, problem: &Problem, config: &Config) {
        self.individuals.clear();

        for _ in 0..config.population_size {
            let genes = problem
                .subjects
                .iter()
                .map(|subject| genetic::random_section(subject, &mut self.rng))
                .collect();
            self.individuals.push(Chromosome::new(genes));
        }
    }

    /// Evaluate every chromosome, preserving population order.
    pub fn evaluate_all(&self, problem: &Problem) -> Vec<Scored> {
        self.individuals
            .iter()
            .map(|chromosome| Scored::new(chromosome.clone(), fitness::evaluate(chromosome, problem)))
            .collect()
    }

    /// Copy the `elitism_count` fittest chromosomes, ordered by fitness
    /// descending. The sort is stable, so equal-fitness chromosomes keep
    /// their population order and seeded runs reproduce exactly.
    pub fn select_elite(scored: &[Scored], elitism_count: usize) -> Vec<Chromosome> {
        let mut ranked: Vec<&Scored> = scored.iter().collect();
        ranked.sort_by(|a, b| b.fitness.cmp(&a.fitness));

        ranked
            .into_iter()
            .take(elitism_count)
            .map(|scored| scored.chromosome.clone())
            .collect()
    }

    /// Tournament selection: draw `tournament_size` chromosomes uniformly
    /// with replacement and keep the fittest; ties go to the earliest draw.
    pub fn tournament_select<'a>(
        &mut self,
        scored: &'a [Scored],
        tournament_size: usize,
    ) -> &'a Chromosome {
        let mut best = &scored[self.rng.gen_range(0..scored.len())];

        for _ in 1..tournament_size {
            let contender = &scored[self.rng.gen_range(0..scored.len())];
            if contender.fitness > best.fitness {
                best = contender;
            }
        }

        &best.chromosome
    }

    /// Replace the current generation: elites first, then offspring bred by
    /// tournament selection, crossover, and mutation until the population
    /// is back at full size.
    pub fn advance_generation(&mut self, scored: &[Scored], problem: &Problem, config: &Config) {
        let mut next = Self::select_elite(scored, config.elitism_count);

        while next.len() < config.population_size {
            let parent1 = self.tournament_select(scored, config.tournament_size).clone();
            let parent2 = self.tournament_select(scored, config.tournament_size).clone();

            let mut child = self.genetic.crossover(&parent1, &parent2, &mut self.rng);
            self.genetic
                .mutate(&mut child, problem, config.mutation_rate, &mut self.rng);

            next.push(child);
        }

        self.individuals = next;
    }

    /// The fittest scored chromosome; ties resolve to the first in
    /// population order.
    pub fn best_of(scored: &[Scored]) -> Option<&Scored> {
        scored
            .iter()
            .reduce(|best, contender| if contender.fitness > best.fitness { contender } else { best })
    }

    /// Current population size.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}
