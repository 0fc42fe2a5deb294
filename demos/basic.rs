//! Basic example of using the ga_timetable library.

use clap::Parser;
use ga_timetable::config::Config;
use ga_timetable::problem::{
    Activity, Alignment, ClassSection, EnrolledClass, Penalties, Period, Problem, Subject, TimeSlot,
};
use ga_timetable::time::{parse_time_to_minutes, DayOfWeek};
use ga_timetable::utils::{format_duration, format_period, save_schedule};
use ga_timetable::ScheduleAlgorithm;
use log::info;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Search for a weekly class timetable with a genetic algorithm")]
struct Args {
    /// Path to a JSON problem description; a built-in preset is used when omitted
    problem: Option<PathBuf>,
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Number of generations to evolve
    #[arg(long, default_value_t = 100)]
    generations: u32,
    /// Write the resulting timetable to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let problem: Problem = match &args.problem {
        Some(path) => {
            info!("loading problem from {}", path.display());
            serde_json::from_reader(File::open(path)?)?
        }
        None => preset_problem()?,
    };

    let mut config = Config::new()
        .with_population_size(50)
        .with_generations(args.generations)
        .with_mutation_rate(0.1)
        .with_elitism_count(2)
        .with_tournament_size(3);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    info!(
        "searching: {} subjects, {} generations, population {}",
        problem.subject_count(),
        config.generations,
        config.population_size
    );

    let mut algorithm = ScheduleAlgorithm::new(problem, config);
    let schedule = algorithm.run()?;

    println!(
        "Search completed in {} ({} generations)",
        format_duration(algorithm.run_time),
        algorithm.generation
    );
    println!("Best fitness: {}", schedule.fitness);
    println!();

    for subject in &schedule.subjects {
        println!("{} (section {})", subject.title, subject.section.id);
        for period in &subject.section.periods {
            println!("  {}", format_period(period));
        }
    }

    if let Some(path) = &args.output {
        println!();
        println!("Saving timetable to {}", path.display());
        save_schedule(&schedule, path)?;
    }

    Ok(())
}

/// A small university-style preset: two electives with morning and
/// afternoon sections, gym hours, and one class already enrolled in.
fn preset_problem() -> Result<Problem, Box<dyn std::error::Error>> {
    let subjects = vec![
        Subject::new(
            "Algebra",
            vec![
                ClassSection::new(
                    "101",
                    vec![
                        Period::new(DayOfWeek::Monday, "08:00", "10:00")?,
                        Period::new(DayOfWeek::Wednesday, "08:00", "10:00")?,
                    ],
                ),
                ClassSection::new(
                    "102",
                    vec![
                        Period::new(DayOfWeek::Monday, "18:00", "20:00")?,
                        Period::new(DayOfWeek::Wednesday, "18:00", "20:00")?,
                    ],
                ),
            ],
        ),
        Subject::new(
            "Physics",
            vec![
                ClassSection::new(
                    "201",
                    vec![
                        Period::new(DayOfWeek::Tuesday, "08:00", "11:00")?,
                        Period::new(DayOfWeek::Thursday, "08:00", "10:00")?,
                    ],
                ),
                ClassSection::new(
                    "202",
                    vec![
                        Period::new(DayOfWeek::Monday, "09:00", "12:00")?,
                        Period::new(DayOfWeek::Thursday, "14:00", "16:00")?,
                    ],
                ),
            ],
        ),
    ];

    let activities = vec![Activity {
        label: Some("Gym".to_string()),
        periods: vec![Period::new(DayOfWeek::Friday, "18:00", "19:30")?],
    }];

    let enrolled_classes = vec![EnrolledClass {
        title: "Programming".to_string(),
        section: ClassSection::new(
            "301",
            vec![Period::new(DayOfWeek::Tuesday, "14:00", "17:00")?],
        ),
    }];

    Ok(Problem {
        subjects,
        activities,
        enrolled_classes,
        time_slots: vec![
            TimeSlot {
                start: parse_time_to_minutes("07:00")?,
                end: parse_time_to_minutes("13:00")?,
            },
            TimeSlot {
                start: parse_time_to_minutes("13:00")?,
                end: parse_time_to_minutes("23:00")?,
            },
        ],
        daily_hour_limit: 8,
        alignment: Alignment::Start,
        penalties: Penalties {
            cultural: 1,
            constraints: 10,
            daily: 5,
        },
    })
}
