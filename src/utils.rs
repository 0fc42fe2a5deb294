//! Helpers for presenting and saving generated timetables.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::problem::Period;
use crate::schedule::Schedule;
use crate::time::format_minutes;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Format a period as `Day HH:MM-HH:MM`.
pub fn format_period(period: &Period) -> String {
    format!(
        "{} {}-{}",
        period.day,
        format_minutes(period.start),
        format_minutes(period.end)
    )
}

/// Save a generated timetable to a plain-text file.
pub fn save_schedule<P: AsRef<Path>>(schedule: &Schedule, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Generated timetable")?;
    writeln!(file, "Fitness: {}", schedule.fitness)?;
    writeln!(file)?;

    for subject in &schedule.subjects {
        writeln!(file, "{} (section {})", subject.title, subject.section.id)?;
        for period in &subject.section.periods {
            writeln!(file, "  {}", format_period(period))?;
        }
    }

    if !schedule.enrolled_classes.is_empty() {
        writeln!(file)?;
        writeln!(file, "Already enrolled:")?;
        for enrolled in &schedule.enrolled_classes {
            writeln!(file, "{} (section {})", enrolled.title, enrolled.section.id)?;
            for period in &enrolled.section.periods {
                writeln!(file, "  {}", format_period(period))?;
            }
        }
    }

    if !schedule.activities.is_empty() {
        writeln!(file)?;
        writeln!(file, "Activities:")?;
        for activity in &schedule.activities {
            writeln!(
                file,
                "{}",
                activity.label.as_deref().unwrap_or("(unnamed)")
            )?;
            for period in &activity.periods {
                writeln!(file, "  {}", format_period(period))?;
            }
        }
    }

    Ok(())
}
