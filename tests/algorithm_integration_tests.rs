//! Integration tests for the full timetable search algorithm.

use ga_timetable::config::Config;
use ga_timetable::error::ScheduleError;
use ga_timetable::problem::{
    Alignment, ClassSection, Penalties, Period, Problem, Subject, TimeSlot,
};
use ga_timetable::time::DayOfWeek;
use ga_timetable::ScheduleAlgorithm;

/// Two subjects where one section pairing conflicts on Monday morning and
/// at least one pairing is conflict free.
fn create_two_subject_problem() -> Problem {
    let subject_a = Subject::new(
        "A",
        vec![
            ClassSection::new(
                "1",
                vec![Period::new(DayOfWeek::Monday, "07:15", "08:45").unwrap()],
            ),
            ClassSection::new(
                "2",
                vec![Period::new(DayOfWeek::Monday, "08:45", "10:30").unwrap()],
            ),
        ],
    );
    let subject_b = Subject::new(
        "B",
        vec![
            ClassSection::new(
                "1",
                vec![Period::new(DayOfWeek::Monday, "07:15", "08:45").unwrap()],
            ),
            ClassSection::new(
                "2",
                vec![Period::new(DayOfWeek::Tuesday, "07:15", "08:45").unwrap()],
            ),
        ],
    );

    Problem {
        subjects: vec![subject_a, subject_b],
        activities: Vec::new(),
        enrolled_classes: Vec::new(),
        time_slots: vec![TimeSlot {
            start: 7 * 60,
            end: 23 * 60,
        }],
        daily_hour_limit: 8,
        alignment: Alignment::Start,
        penalties: Penalties {
            cultural: 0,
            constraints: 10,
            daily: 5,
        },
    }
}

fn create_config() -> Config {
    Config::new()
        .with_population_size(20)
        .with_generations(30)
        .with_mutation_rate(0.1)
        .with_elitism_count(2)
        .with_tournament_size(3)
        .with_seed(42)
}

#[test]
fn test_finds_conflict_free_timetable() {
    let mut algorithm = ScheduleAlgorithm::new(create_two_subject_problem(), create_config());
    let schedule = algorithm.run().unwrap();

    // A conflict-free pairing exists, so a 30-generation search over a
    // population of 20 must reach fitness 0.
    assert_eq!(schedule.fitness, 0);
    assert_eq!(schedule.subjects.len(), 2);

    // The chosen pairing must avoid the Monday overlap: either A's second
    // section, or B's Tuesday section.
    let a = &schedule.subjects[0].section;
    let b = &schedule.subjects[1].section;
    assert!(a.id == "2" || b.id == "2");
}

#[test]
fn test_runs_all_configured_generations() {
    let mut algorithm = ScheduleAlgorithm::new(create_two_subject_problem(), create_config());
    algorithm.run().unwrap();
    assert_eq!(algorithm.generation, 30);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let problem = create_two_subject_problem();
    let config = create_config();

    let mut first = ScheduleAlgorithm::new(problem.clone(), config.clone());
    let mut second = ScheduleAlgorithm::new(problem, config);

    assert_eq!(first.run().unwrap(), second.run().unwrap());
}

#[test]
fn test_schedule_carries_fixed_commitments_through() {
    let mut problem = create_two_subject_problem();
    problem.activities = vec![ga_timetable::problem::Activity {
        label: Some("Gym".to_string()),
        periods: vec![Period::new(DayOfWeek::Friday, "18:00", "19:30").unwrap()],
    }];
    problem.enrolled_classes = vec![ga_timetable::problem::EnrolledClass {
        title: "Programming".to_string(),
        section: ClassSection::new(
            "301",
            vec![Period::new(DayOfWeek::Thursday, "14:00", "17:00").unwrap()],
        ),
    }];

    let mut algorithm = ScheduleAlgorithm::new(problem.clone(), create_config());
    let schedule = algorithm.run().unwrap();

    assert_eq!(schedule.activities, problem.activities);
    assert_eq!(schedule.enrolled_classes, problem.enrolled_classes);
}

#[test]
fn test_rejects_subject_without_sections() {
    let mut problem = create_two_subject_problem();
    problem.subjects.push(Subject::new("Empty", Vec::new()));

    let mut algorithm = ScheduleAlgorithm::new(problem, create_config());
    match algorithm.run() {
        Err(ScheduleError::ConfigurationError(_)) => {}
        other => panic!("expected ConfigurationError, got {:?}", other),
    }
}

#[test]
fn test_rejects_subject_with_only_hidden_sections() {
    let mut problem = create_two_subject_problem();
    for section in &mut problem.subjects[0].sections {
        section.shown = false;
    }

    let mut algorithm = ScheduleAlgorithm::new(problem, create_config());
    assert!(matches!(
        algorithm.run(),
        Err(ScheduleError::ConfigurationError(_))
    ));
}

#[test]
fn test_rejects_invalid_algorithm_parameters() {
    let problem = create_two_subject_problem();

    // Elitism larger than the population.
    let config = create_config().with_population_size(2).with_elitism_count(5);
    assert!(matches!(
        ScheduleAlgorithm::new(problem.clone(), config).run(),
        Err(ScheduleError::ConfigurationError(_))
    ));

    // Tournament of zero.
    let config = create_config().with_tournament_size(0);
    assert!(matches!(
        ScheduleAlgorithm::new(problem.clone(), config).run(),
        Err(ScheduleError::ConfigurationError(_))
    ));

    // Tournament larger than the population.
    let config = create_config().with_population_size(5).with_tournament_size(9);
    assert!(matches!(
        ScheduleAlgorithm::new(problem.clone(), config).run(),
        Err(ScheduleError::ConfigurationError(_))
    ));

    // Mutation rate outside [0, 1].
    let config = create_config().with_mutation_rate(1.5);
    assert!(matches!(
        ScheduleAlgorithm::new(problem, config).run(),
        Err(ScheduleError::ConfigurationError(_))
    ));
}

#[test]
fn test_rejects_empty_time_slots() {
    let mut problem = create_two_subject_problem();
    problem.time_slots.clear();

    let mut algorithm = ScheduleAlgorithm::new(problem, create_config());
    assert!(matches!(
        algorithm.run(),
        Err(ScheduleError::ConfigurationError(_))
    ));
}

#[test]
fn test_cancellation_stops_at_generation_boundary() {
    let mut algorithm = ScheduleAlgorithm::new(create_two_subject_problem(), create_config());

    // Cancel immediately: no generation is evolved, but the initial
    // population is still evaluated and its best timetable returned.
    let schedule = algorithm.run_with_cancel(|| true).unwrap();
    assert_eq!(algorithm.generation, 0);
    assert_eq!(schedule.subjects.len(), 2);
}

#[test]
fn test_cancellation_after_some_generations() {
    let mut algorithm = ScheduleAlgorithm::new(create_two_subject_problem(), create_config());

    let mut checks = 0;
    let schedule = algorithm
        .run_with_cancel(|| {
            checks += 1;
            checks > 5
        })
        .unwrap();

    assert_eq!(algorithm.generation, 5);
    assert_eq!(schedule.subjects.len(), 2);
}

#[test]
fn test_problem_round_trips_through_json() {
    let problem = create_two_subject_problem();

    let json = serde_json::to_string(&problem).unwrap();
    let parsed: Problem = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, problem);

    // Times serialize in the human-readable form.
    assert!(json.contains("\"07:15\""));
}
