//! The interactive menu loop.
//!
//! ```text
//! MENU ──1──▶ ADD ────┐
//!   │  ──2──▶ LIST ───┤ (press ENTER)
//!   │  ──3──▶ SEARCH ─┤
//!   │  ──?──▶ INVALID ┘──▶ MENU
//!   └──4──▶ EXIT
//! ```
//!
//! End of input at any prompt ends the session as if EXIT had been chosen.

use super::menu::{self, MenuChoice};
use super::render::{format_regimen, format_search_results, render_messages};
use colored::Colorize;
use console::Term;
use regimen::api::RegimenApi;
use regimen::error::Result;
use regimen::model::{Exercise, Field};
use regimen::store::DataStore;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

pub struct Session<R, W, S: DataStore> {
    input: R,
    output: W,
    api: RegimenApi<S>,
    screen: Option<Term>,
}

impl<R: BufRead, W: Write, S: DataStore> Session<R, W, S> {
    pub fn new(input: R, output: W, api: RegimenApi<S>) -> Self {
        Self {
            input,
            output,
            api,
            screen: None,
        }
    }

    /// Clear this terminal before every screen.
    pub fn with_screen(mut self, screen: Option<Term>) -> Self {
        self.screen = screen;
        self
    }

    #[cfg(test)]
    pub fn api(&self) -> &RegimenApi<S> {
        &self.api
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Step::Continue {}
        Ok(())
    }

    fn step(&mut self) -> Result<Step> {
        self.clear()?;
        writeln!(self.output, "{}\n", menu::WELCOME.green().bold())?;
        writeln!(self.output, "{}", menu::MENU.green())?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(Step::Exit);
        };

        let choice = MenuChoice::parse(&line);
        tracing::debug!("Menu choice {:?}", choice);
        self.clear()?;
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::List => self.list(),
            MenuChoice::Search => self.search(),
            MenuChoice::Invalid => {
                writeln!(self.output, "{}", menu::INVALID_COMMAND.red())?;
                self.acknowledge()
            }
            MenuChoice::Exit => {
                writeln!(self.output, "{}", menu::GOODBYE)?;
                self.output.flush()?;
                Ok(Step::Exit)
            }
        }
    }

    fn add(&mut self) -> Result<Step> {
        writeln!(self.output, "{}\n", menu::ADD_INTRO)?;

        let mut exercise = Exercise::default();
        for field in Field::ALL {
            writeln!(self.output, "{}", field.prompt())?;
            self.output.flush()?;
            let Some(value) = self.read_line()? else {
                return Ok(Step::Exit);
            };
            exercise.set(field, value);
        }

        let result = self.api.add_exercise(exercise);
        write!(self.output, "\n{}", render_messages(&result.messages))?;
        self.acknowledge()
    }

    fn list(&mut self) -> Result<Step> {
        let result = self.api.list_exercises();
        write!(self.output, "{}", format_regimen(&result.listed_exercises))?;
        self.acknowledge()
    }

    fn search(&mut self) -> Result<Step> {
        writeln!(self.output, "{}\n", menu::SEARCH_INTRO)?;
        writeln!(self.output, "{}", menu::SEARCH_PROMPT)?;
        self.output.flush()?;
        let Some(term) = self.read_line()? else {
            return Ok(Step::Exit);
        };

        let result = self.api.search_exercises(&term);
        let term = result.search_term.as_deref().unwrap_or_default();
        write!(
            self.output,
            "{}",
            format_search_results(term, &result.listed_exercises)
        )?;
        self.acknowledge()
    }

    /// Blocks until the user presses ENTER; whatever they typed is discarded.
    fn acknowledge(&mut self) -> Result<Step> {
        writeln!(self.output, "\n{}", menu::RETURN_PROMPT)?;
        self.output.flush()?;
        match self.read_line()? {
            Some(_) => Ok(Step::Continue),
            None => Ok(Step::Exit),
        }
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn clear(&mut self) -> Result<()> {
        if let Some(term) = &self.screen {
            self.output.flush()?;
            term.clear_screen()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regimen::model::Regimen;
    use regimen::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, InMemoryStore>;

    fn session(store: InMemoryStore, script: &str) -> TestSession {
        colored::control::set_override(false);
        Session::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            RegimenApi::open(store),
        )
    }

    fn squat_and_curl() -> InMemoryStore {
        InMemoryStore::with_regimen(Regimen::from_exercises(vec![
            Exercise::new("Squat", "Legs", "3", "10", "135"),
            Exercise::new("Curl", "Arms", "3", "12", "30"),
        ]))
    }

    fn run(store: InMemoryStore, script: &str) -> (TestSession, String) {
        let mut s = session(store, script);
        s.run().unwrap();
        let out = String::from_utf8(s.output().clone()).unwrap();
        (s, out)
    }

    #[test]
    fn test_exit_says_goodbye() {
        let (_, out) = run(InMemoryStore::new(), "4\n");
        assert!(out.contains("1 Add an exercise"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out) = run(InMemoryStore::new(), "");
        assert!(out.contains("4 Exit"));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_list_empty_regimen() {
        let (_, out) = run(InMemoryStore::new(), "2\n\n4\n");
        assert!(out.contains(
            "The regimen is currently empty.\n\nPress ENTER to return to the menu"
        ));
    }

    #[test]
    fn test_add_then_list() {
        let script = "1\nSquat\nLegs\n3\n10\n135\n\n2\n\n4\n";
        let (s, out) = run(InMemoryStore::new(), script);

        assert!(out.contains("Name of exercise: "));
        assert!(out.contains("Weight in lbs (N/A if body weight exercise): "));
        assert!(out.contains("Successfully added exercise to regimen!"));
        assert!(out.contains(
            "Here is the current regimen:\n\n\
             Name: Squat\n\
             Muscle group(s): Legs\n\
             # of sets: 3\n\
             # of reps: 10\n\
             Weight (lbs): 135\n"
        ));

        let saved = s.api().store().saved().unwrap();
        assert_eq!(
            saved,
            &Regimen::from_exercises(vec![Exercise::new("Squat", "Legs", "3", "10", "135")])
        );
    }

    #[test]
    fn test_add_accepts_empty_values() {
        let (s, _) = run(InMemoryStore::new(), "1\n\n\n\n\n\n\n4\n");
        assert_eq!(s.api().regimen().exercises(), &[Exercise::default()]);
    }

    #[test]
    fn test_add_keeps_spaces_in_values() {
        let script = "1\n Bench Press \nChest\n3\n8\nN/A\r\n\n4\n";
        let (s, _) = run(InMemoryStore::new(), script);
        let ex = &s.api().regimen().exercises()[0];
        assert_eq!(ex.name, " Bench Press ");
        assert_eq!(ex.weight, "N/A");
    }

    #[test]
    fn test_add_cut_short_does_not_add() {
        let (s, _) = run(InMemoryStore::new(), "1\nSquat\nLegs\n");
        assert!(s.api().regimen().is_empty());
        assert_eq!(s.api().store().save_count(), 0);
    }

    #[test]
    fn test_failed_save_is_reported_and_loop_continues() {
        let script = "1\nSquat\nLegs\n3\n10\n135\n\n2\n\n4\n";
        let (s, out) = run(InMemoryStore::failing(), script);
        assert!(out.contains("could not be saved"));
        assert!(!out.contains("Successfully added"));
        assert!(out.contains("Name: Squat"));
        assert_eq!(s.api().regimen().len(), 1);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_search_single_match() {
        let store = squat_and_curl();
        let (_, out) = run(store, "3\narms\n\n4\n");
        assert!(out.contains("Please enter search term: "));
        assert!(out.contains("Found 1 result for \"arms\"\n\nName: Curl\n"));
        assert!(!out.contains("Name: Squat"));
    }

    #[test]
    fn test_search_normalizes_term() {
        let store = squat_and_curl();
        let (_, out) = run(store, "3\n  LEGS  \n\n4\n");
        assert!(out.contains("Found 1 result for \"legs\""));
        assert!(out.contains("Name: Squat"));
    }

    #[test]
    fn test_search_no_matches() {
        let store = squat_and_curl();
        let (_, out) = run(store, "3\ndeadlift\n\n4\n");
        assert!(out.contains("No matches found.\n\nPress ENTER"));
        assert!(!out.contains("Name:"));
    }

    #[test]
    fn test_invalid_choices_return_to_menu() {
        let (_, out) = run(InMemoryStore::new(), "7\n\nabc\n\n4\n");
        assert_eq!(out.matches("Invalid command.").count(), 2);
        assert_eq!(out.matches("4 Exit").count(), 3);
        assert!(out.ends_with("Goodbye!\n"));
    }
}
