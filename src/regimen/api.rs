//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every operation, whatever UI drives it.
//!
//! `RegimenApi` owns two things for the length of a session:
//! - the storage backend, and
//! - the in-memory [`Regimen`], loaded once when the API is opened.
//!
//! Commands receive both explicitly; nothing is kept in module-level state.
//!
//! ## Generic Over DataStore
//!
//! - Production: `RegimenApi<FileStore>`
//! - Testing: `RegimenApi<InMemoryStore>`

use crate::commands;
use crate::model::{Exercise, Regimen};
use crate::store::{DataStore, LoadOutcome};

pub struct RegimenApi<S: DataStore> {
    store: S,
    regimen: Regimen,
}

impl<S: DataStore> RegimenApi<S> {
    /// Loads the regimen from `store`, starting empty when nothing usable is there.
    pub fn open(store: S) -> Self {
        let regimen = match store.load() {
            LoadOutcome::Loaded(regimen) => regimen,
            LoadOutcome::Fresh(reason) => {
                tracing::info!("Starting with an empty regimen ({})", reason);
                Regimen::new()
            }
        };
        Self { store, regimen }
    }

    pub fn add_exercise(&mut self, exercise: Exercise) -> commands::CmdResult {
        commands::add::run(&mut self.store, &mut self.regimen, exercise)
    }

    pub fn list_exercises(&self) -> commands::CmdResult {
        commands::list::run(&self.regimen)
    }

    pub fn search_exercises(&self, term: &str) -> commands::CmdResult {
        commands::search::run(&self.regimen, term)
    }

    pub fn regimen(&self) -> &Regimen {
        &self.regimen
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn open_on_empty_store_starts_empty() {
        let api = RegimenApi::open(InMemoryStore::new());
        assert!(api.regimen().is_empty());
        assert!(api.list_exercises().listed_exercises.is_empty());
    }

    #[test]
    fn open_loads_existing_regimen() {
        let api = RegimenApi::open(StoreFixture::new().with_squat_and_curl().store);
        assert_eq!(api.regimen().len(), 2);
    }

    #[test]
    fn add_updates_session_and_store() {
        let mut api = RegimenApi::open(InMemoryStore::new());
        api.add_exercise(Exercise::new("Squat", "Legs", "3", "10", "135"));

        assert_eq!(api.list_exercises().listed_exercises.len(), 1);
        assert_eq!(api.store().saved(), Some(api.regimen()));
    }

    #[test]
    fn search_dispatches_with_raw_term() {
        let api = RegimenApi::open(StoreFixture::new().with_squat_and_curl().store);
        let result = api.search_exercises(" Arms ");
        assert_eq!(result.search_term.as_deref(), Some("arms"));
        assert_eq!(result.listed_exercises.len(), 1);
    }
}
