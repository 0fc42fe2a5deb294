//! Chromosome representation for the genetic algorithm population.

/// One candidate timetable: for each subject, the index of the chosen
/// class section within that subject's section list.
///
/// Chromosomes are plain values; crossover and mutation always operate on
/// copies, so an offspring never aliases its parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    /// Chosen section index per subject, in subject order.
    pub genes: Vec<usize>,
}

impl Chromosome {
    pub fn new(genes: Vec<usize>) -> Self {
        Chromosome { genes }
    }

    /// Number of genes, equal to the number of subjects.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A chromosome paired with the fitness the evaluator assigned to it.
///
/// Fitness lives here rather than on the chromosome itself, so the
/// evaluator stays a pure function and stale scores cannot leak across
/// generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub chromosome: Chromosome,
    /// Higher is better; zero means no penalty was applied.
    pub fitness: i64,
}

impl Scored {
    pub fn new(chromosome: Chromosome, fitness: i64) -> Self {
        Scored {
            chromosome,
            fitness,
        }
    }
}
