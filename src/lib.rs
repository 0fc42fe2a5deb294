//! # ga_timetable
//!
//! A genetic algorithm engine for generating weekly class timetables.
//!
//! Given a set of subjects with interchangeable class sections, fixed
//! commitments (activities and already-enrolled classes), and a stated
//! time-of-day preference, the engine searches for a section assignment
//! with no time conflicts and a bounded daily load. The search is
//! heuristic: it returns the best timetable found within the configured
//! generation budget, not a guaranteed global optimum.

pub mod config;
pub mod error;
pub mod fitness;
pub mod genetic;
pub mod individual;
pub mod population;
pub mod problem;
pub mod schedule;
pub mod time;
pub mod utils;

use crate::config::Config;
use crate::error::ScheduleError;
use crate::population::Population;
use crate::problem::Problem;
use crate::schedule::Schedule;

use std::time::{Duration, Instant};

/// The main algorithm structure that orchestrates the generational loop.
///
/// The population is rebuilt every generation; the problem and config are
/// fixed for the run's duration and shared read-only by every component.
pub struct ScheduleAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub population: Population,
    /// Number of completed generations.
    pub generation: u32,
    pub run_time: Duration,
    start_time: Instant,
}

impl ScheduleAlgorithm {
    /// Create a new search for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        ScheduleAlgorithm {
            population: Population::new(&config),
            problem,
            config,
            generation: 0,
            run_time: Duration::from_secs(0),
            start_time: Instant::now(),
        }
    }

    /// Validate the inputs and build generation zero.
    pub fn initialize(&mut self) -> Result<(), ScheduleError> {
        self.config.validate()?;
        self.problem.validate()?;

        self.population.initialize(&self.problem, &self.config);
        self.generation = 0;

        Ok(())
    }

    /// Run the search for the configured number of generations and return
    /// the best timetable of the final population.
    pub fn run(&mut self) -> Result<Schedule, ScheduleError> {
        self.run_with_cancel(|| false)
    }

    /// Like [`run`](Self::run), but checks `cancelled` at every generation
    /// boundary. A cancelled run stops evolving and still returns the best
    /// timetable of the population it had at that point.
    pub fn run_with_cancel<F>(&mut self, mut cancelled: F) -> Result<Schedule, ScheduleError>
    where
        F: FnMut() -> bool,
    {
        self.start_time = Instant::now();

        self.initialize()?;

        for _ in 0..self.config.generations {
            if cancelled() {
                break;
            }

            let scored = self.population.evaluate_all(&self.problem);
            self.population
                .advance_generation(&scored, &self.problem, &self.config);
            self.generation += 1;
        }

        // Final evaluation pass over the last population; ties resolve to
        // the first chromosome in population order.
        let scored = self.population.evaluate_all(&self.problem);
        let best = Population::best_of(&scored).ok_or_else(|| {
            ScheduleError::ConfigurationError("population size must be at least 1".to_string())
        })?;

        self.run_time = self.start_time.elapsed();

        Ok(Schedule::from_scored(best, &self.problem))
    }
}
