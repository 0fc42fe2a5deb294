//! Configuration parameters for the genetic timetable search.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Algorithm settings, independent of any particular problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of chromosomes in every generation
    pub population_size: usize,
    /// Number of generations to evolve before emitting the best timetable
    pub generations: u32,
    /// Per-chromosome probability of a single-gene mutation, in [0, 1]
    pub mutation_rate: f64,
    /// Number of top chromosomes carried unchanged into the next generation
    pub elitism_count: usize,
    /// Number of chromosomes sampled per tournament draw
    pub tournament_size: usize,
    /// Optional RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elitism_count: 2,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of generations.
    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    /// Set the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the number of elite chromosomes.
    pub fn with_elitism_count(mut self, count: usize) -> Self {
        self.elitism_count = count;
        self
    }

    /// Set the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the parameter invariants. A failure aborts the run before
    /// generation zero is built.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.population_size < self.elitism_count {
            return Err(ScheduleError::ConfigurationError(format!(
                "elitism count {} exceeds population size {}",
                self.elitism_count, self.population_size
            )));
        }
        if self.tournament_size < 1 {
            return Err(ScheduleError::ConfigurationError(
                "tournament size must be at least 1".to_string(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(ScheduleError::ConfigurationError(format!(
                "tournament size {} exceeds population size {}",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ScheduleError::ConfigurationError(format!(
                "mutation rate {} must lie in [0, 1]",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
