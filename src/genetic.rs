//! Genetic operators for the timetable search.

use rand::Rng;

use crate::individual::Chromosome;
use crate::problem::{Problem, Subject};

/// Implements the genetic operators (crossover, mutation).
///
/// All randomness comes from the caller-supplied generator, so a seeded
/// run replays identically.
pub struct Genetic;

impl Genetic {
    /// Single-point crossover between two parents of equal length.
    ///
    /// The crossover point is drawn uniformly from `[0, len)`: genes before
    /// the point come from `parent1`, the rest from `parent2`.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        debug_assert_eq!(parent1.len(), parent2.len());

        if parent1.is_empty() {
            return Chromosome::new(Vec::new());
        }

        let point = rng.gen_range(0..parent1.len());

        let mut genes = Vec::with_capacity(parent1.len());
        genes.extend_from_slice(&parent1.genes[..point]);
        genes.extend_from_slice(&parent2.genes[point..]);

        Chromosome::new(genes)
    }

    /// With probability `mutation_rate`, replace one uniformly chosen gene
    /// with a fresh uniformly random section for that subject. The draw may
    /// land on the current section; that still counts as the mutation.
    pub fn mutate<R: Rng>(
        &self,
        chromosome: &mut Chromosome,
        problem: &Problem,
        mutation_rate: f64,
        rng: &mut R,
    ) {
        if chromosome.is_empty() {
            return;
        }

        if rng.gen::<f64>() >= mutation_rate {
            return;
        }

        let position = rng.gen_range(0..chromosome.len());
        chromosome.genes[position] = random_section(&problem.subjects[position], rng);
    }
}

/// Draw a uniformly random selectable section index for a subject.
///
/// The selectable pool is non-empty for any validated problem.
pub(crate) fn random_section<R: Rng>(subject: &Subject, rng: &mut R) -> usize {
    let pool = subject.selectable_sections();
    pool[rng.gen_range(0..pool.len())]
}
