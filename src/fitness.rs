//! Fitness evaluation for candidate timetables.
//!
//! The evaluator is a pure function: the score of a chromosome depends only
//! on the chromosome and the problem instance, never on prior calls.
//! Higher scores are better; every violation subtracts its penalty weight,
//! so a fully satisfying timetable scores exactly zero.

use itertools::Itertools;

use crate::individual::Chromosome;
use crate::problem::{Alignment, Period, Problem};
use crate::time;

/// Score one candidate timetable against the problem's constraints.
pub fn evaluate(chromosome: &Chromosome, problem: &Problem) -> i64 {
    let penalties = &problem.penalties;
    let mut fitness: i64 = 0;

    let chosen = chosen_periods(chromosome, problem);

    // Hard constraint: no two scheduled periods may overlap. The pool
    // includes the fixed commitments, so a chosen section colliding with
    // gym hours or an already-enrolled class is penalized the same way as
    // two chosen sections colliding.
    let mut pool: Vec<&Period> = chosen.clone();
    pool.extend(problem.fixed_periods());

    for (a, b) in pool.iter().tuple_combinations() {
        if time::periods_overlap(a, b) {
            fitness -= penalties.constraints;
        }
    }

    // Hard constraint: every chosen period must fall entirely within at
    // least one configured time slot.
    for period in &chosen {
        let fits = problem
            .time_slots
            .iter()
            .any(|slot| period.start >= slot.start && period.end <= slot.end);
        if !fits {
            fitness -= penalties.constraints;
        }
    }

    // Daily load: sum chosen minutes per weekday, charge once per weekday
    // over the limit.
    let mut minutes_per_day = [0u32; 7];
    for period in &chosen {
        minutes_per_day[period.day.index()] += u32::from(period.duration_minutes());
    }
    let limit_minutes = problem.daily_hour_limit * 60;
    for &total in &minutes_per_day {
        if total > limit_minutes {
            fitness -= penalties.daily;
        }
    }

    // Soft preference: cluster chosen periods toward one edge of the day.
    match problem.alignment {
        Alignment::Start => {
            if let Some(day_start) = problem.day_start() {
                for period in &chosen {
                    if period.start > day_start {
                        fitness -= penalties.cultural;
                    }
                }
            }
        }
        Alignment::End => {
            if let Some(day_end) = problem.day_end() {
                for period in &chosen {
                    if period.end < day_end {
                        fitness -= penalties.cultural;
                    }
                }
            }
        }
    }

    fitness
}

/// Periods of the sections this chromosome selects, in subject order.
fn chosen_periods<'a>(chromosome: &Chromosome, problem: &'a Problem) -> Vec<&'a Period> {
    chromosome
        .genes
        .iter()
        .zip(problem.subjects.iter())
        .flat_map(|(&gene, subject)| subject.sections[gene].periods.iter())
        .collect()
}
