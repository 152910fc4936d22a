use super::{DataStore, FreshReason, LoadOutcome};
use crate::error::{RegimenError, Result};
use crate::model::Regimen;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Regimen>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save returns an error.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn with_regimen(regimen: Regimen) -> Self {
        Self {
            saved: Some(regimen),
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<&Regimen> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> LoadOutcome {
        match &self.saved {
            Some(regimen) => LoadOutcome::Loaded(regimen.clone()),
            None => LoadOutcome::Fresh(FreshReason::Missing),
        }
    }

    fn save(&mut self, regimen: &Regimen) -> Result<()> {
        if self.fail_saves {
            return Err(RegimenError::Store("store is read-only".to_string()));
        }
        self.saved = Some(regimen.clone());
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Exercise;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        regimen: Regimen,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                regimen: Regimen::new(),
            }
        }

        pub fn with_exercise(mut self, exercise: Exercise) -> Self {
            self.regimen.push(exercise);
            self.store = InMemoryStore::with_regimen(self.regimen.clone());
            self
        }

        pub fn with_squat_and_curl(self) -> Self {
            self.with_exercise(Exercise::new("Squat", "Legs", "3", "10", "135"))
                .with_exercise(Exercise::new("Curl", "Arms", "3", "12", "30"))
        }
    }
}
