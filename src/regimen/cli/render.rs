//! # Rendering Module
//!
//! Turns exercises and `CmdResult` values into the text the menu prints.
//! Exercise output is plain text; only messages and the menu banner carry colour.

use colored::{ColoredString, Colorize};
use regimen::api::{CmdMessage, MessageLevel};
use regimen::model::Exercise;

pub const EMPTY_REGIMEN: &str = "The regimen is currently empty.";
pub const REGIMEN_HEADER: &str = "Here is the current regimen:";
pub const NO_MATCHES: &str = "No matches found.";

/// One `Label: value` line per field, in field order.
pub fn format_exercise(exercise: &Exercise) -> String {
    exercise
        .fields()
        .map(|(field, value)| format!("{}: {}\n", field.label(), value))
        .collect()
}

/// The whole regimen, each exercise preceded by a blank line.
pub fn format_regimen(exercises: &[Exercise]) -> String {
    if exercises.is_empty() {
        return format!("{}\n", EMPTY_REGIMEN);
    }

    let mut out = format!("{}\n", REGIMEN_HEADER);
    for exercise in exercises {
        out.push('\n');
        out.push_str(&format_exercise(exercise));
    }
    out
}

/// Count line followed by every match, each preceded by a blank line.
pub fn format_search_results(term: &str, matches: &[Exercise]) -> String {
    let mut out = match matches.len() {
        0 => format!("{}\n", NO_MATCHES),
        1 => format!("Found 1 result for \"{}\"\n", term),
        n => format!("Found {} results for \"{}\"\n", n, term),
    };
    for exercise in matches {
        out.push('\n');
        out.push_str(&format_exercise(exercise));
    }
    out
}

/// Renders command messages, one per line, coloured by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    messages
        .iter()
        .map(|message| match use_color {
            Some(false) => format!("{}\n", message.content),
            _ => format!("{}\n", style_message(message)),
        })
        .collect()
}

fn style_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> Exercise {
        Exercise::new("Squat", "Legs", "3", "10", "135")
    }

    fn curl() -> Exercise {
        Exercise::new("Curl", "Arms", "3", "12", "30")
    }

    #[test]
    fn test_format_exercise() {
        assert_eq!(
            format_exercise(&squat()),
            "Name: Squat\n\
             Muscle group(s): Legs\n\
             # of sets: 3\n\
             # of reps: 10\n\
             Weight (lbs): 135\n"
        );
    }

    #[test]
    fn test_format_exercise_keeps_raw_values() {
        let out = format_exercise(&Exercise::new("Plank", "Core", "", "1", "N/A"));
        assert!(out.contains("# of sets: \n"));
        assert!(out.contains("Weight (lbs): N/A\n"));
    }

    #[test]
    fn test_format_empty_regimen() {
        assert_eq!(format_regimen(&[]), "The regimen is currently empty.\n");
    }

    #[test]
    fn test_format_regimen_separates_with_blank_lines() {
        let out = format_regimen(&[squat(), curl()]);
        assert!(out.starts_with("Here is the current regimen:\n\nName: Squat\n"));
        assert!(out.contains("Weight (lbs): 135\n\nName: Curl\n"));
        assert!(out.ends_with("Weight (lbs): 30\n"));
    }

    #[test]
    fn test_search_results_pluralization() {
        let one = format_search_results("arms", &[curl()]);
        assert!(one.starts_with("Found 1 result for \"arms\"\n\nName: Curl\n"));

        let two = format_search_results("3", &[squat(), curl()]);
        assert!(two.starts_with("Found 2 results for \"3\"\n"));
    }

    #[test]
    fn test_search_results_none() {
        assert_eq!(format_search_results("deadlift", &[]), "No matches found.\n");
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Saved"),
            CmdMessage::warning("Careful"),
        ];
        assert_eq!(
            render_messages_internal(&messages, Some(false)),
            "Saved\nCareful\n"
        );
    }

    #[test]
    fn test_render_no_messages() {
        assert_eq!(render_messages(&[]), "");
    }
}
