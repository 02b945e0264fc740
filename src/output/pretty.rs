use colored::Colorize;

use crate::features::timer::{format_duration, format_seconds_short};
use crate::output::theme::{exercise_badge, exercise_rgb, section_rgb};
use crate::workout::{Exercise, Workout, WorkoutLibrary};

fn estimate_label(workout: &Workout) -> String {
    let seconds = i64::try_from(workout.estimated_seconds()).unwrap_or(i64::MAX);
    format!("~{}", format_duration(chrono::Duration::seconds(seconds)))
}

fn plural(n: usize, word: &str) -> String {
    format!("{n} {word}{}", if n == 1 { "" } else { "s" })
}

/// Format the workout library as a list
pub fn format_workouts_pretty(library: &WorkoutLibrary) -> String {
    let title = format!("Workouts ({})", library.workouts.len());
    if library.is_empty() {
        return format!("{title}\n  No workouts");
    }

    let mut output = format!("{}\n", title.bold());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for workout in &library.workouts {
        let summary = format!(
            "{} · {} · {}",
            plural(workout.sections.len(), "section"),
            plural(workout.exercise_count(), "exercise"),
            estimate_label(workout)
        );
        output.push_str(&format!(
            "{:<16} {}  {}\n",
            workout.id.cyan(),
            workout.name.bold(),
            summary.dimmed()
        ));

        if let Some(description) = &workout.description {
            output.push_str(&format!("{:<16} {}\n", "", description.dimmed()));
        }
    }

    output
}

/// Format one exercise line of a plan
fn format_exercise_line(exercise: &Exercise) -> String {
    let (r, g, b) = exercise_rgb(exercise);
    let badge = format!("{:<5}", exercise_badge(exercise)).truecolor(r, g, b);
    let work = format!("{} × {}", exercise.sets(), exercise.target_label());
    let rest = match exercise.rest_after_set() {
        0 => "no rest".to_string(),
        n => format!("rest {}", format_seconds_short(n)),
    };

    format!(
        "  {} {:<28} {:<16} {}",
        badge,
        exercise.name(),
        work,
        rest.dimmed()
    )
}

/// Format a workout plan
pub fn format_plan_pretty(workout: &Workout) -> String {
    let mut output = format!("{}\n", workout.name.bold());

    if let Some(description) = &workout.description {
        output.push_str(description);
        output.push('\n');
    }

    output.push_str(&format!(
        "{}\n",
        format!(
            "{} in {} · {} of timed work and rest",
            plural(workout.exercise_count(), "exercise"),
            plural(workout.sections.len(), "section"),
            estimate_label(workout)
        )
        .dimmed()
    ));
    output.push_str(&"═".repeat(60));
    output.push('\n');

    for (index, section) in workout.sections.iter().enumerate() {
        let (r, g, b) = section_rgb(index);
        output.push_str(&format!(
            "\n{}\n",
            format!("{}. {}", index + 1, section.name)
                .truecolor(r, g, b)
                .bold()
        ));

        for exercise in &section.exercises {
            output.push_str(&format_exercise_line(exercise));
            output.push('\n');

            let info = exercise.info();
            if let Some(description) = &info.description {
                output.push_str(&format!("        {}\n", description.dimmed()));
            }
            if let Some(tip) = &info.tip {
                output.push_str(&format!("        {} {}\n", "Tip:".yellow(), tip));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::types::fixtures::{reps, section, timed, workout};
    use crate::workout::Amount;

    fn sample() -> Workout {
        workout(vec![
            section("Warm-up", vec![timed("Jacks", 1, Amount::Fixed(60), 15)]),
            section(
                "Strength",
                vec![reps("Squats", 3, Amount::Range { min: 8, max: 12 }, 90)],
            ),
        ])
    }

    #[test]
    fn test_format_plan_pretty() {
        colored::control::set_override(false);
        let output = format_plan_pretty(&sample());

        assert!(output.contains("Test Workout"));
        assert!(output.contains("1. Warm-up"));
        assert!(output.contains("2. Strength"));
        assert!(output.contains("1 × 60s"));
        assert!(output.contains("3 × 8-12 reps"));
        assert!(output.contains("rest 1m 30s"));
        assert!(output.contains("TIMED"));
        assert!(output.contains("REPS"));
    }

    #[test]
    fn test_format_workouts_pretty() {
        colored::control::set_override(false);
        let library = WorkoutLibrary {
            workouts: vec![sample()],
        };
        let output = format_workouts_pretty(&library);

        assert!(output.contains("Workouts (1)"));
        assert!(output.contains("test"));
        assert!(output.contains("2 sections · 2 exercises"));
    }

    #[test]
    fn test_format_empty_library() {
        let output = format_workouts_pretty(&WorkoutLibrary::default());
        assert!(output.contains("No workouts"));
    }
}
