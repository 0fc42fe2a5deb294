//! Final timetable emitted by the search.

use serde::{Deserialize, Serialize};

use crate::individual::Scored;
use crate::problem::{Activity, ClassSection, EnrolledClass, Problem};

/// A subject together with the single section the search settled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSubject {
    pub title: String,
    pub section: ClassSection,
}

/// The timetable returned at termination: one chosen section per subject,
/// plus the fixed commitments carried through from the problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub subjects: Vec<ScheduledSubject>,
    pub enrolled_classes: Vec<EnrolledClass>,
    pub activities: Vec<Activity>,
    /// Fitness of the winning chromosome; zero means no penalty applied.
    pub fitness: i64,
}

impl Schedule {
    /// Materialize the winning chromosome into its timetable.
    pub fn from_scored(scored: &Scored, problem: &Problem) -> Self {
        let subjects = scored
            .chromosome
            .genes
            .iter()
            .zip(problem.subjects.iter())
            .map(|(&gene, subject)| ScheduledSubject {
                title: subject.title.clone(),
                section: subject.sections[gene].clone(),
            })
            .collect();

        Schedule {
            subjects,
            enrolled_classes: problem.enrolled_classes.clone(),
            activities: problem.activities.clone(),
            fitness: scored.fitness,
        }
    }
}
