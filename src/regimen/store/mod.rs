//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the regimen lives so the commands can run
//! against a file on disk or a plain in-memory value in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole regimen is one JSON document (`Workout.json` by default)
//!   - Every save rewrites the full document
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail saves, to exercise the non-fatal save path
//!
//! ## Loading Never Fails
//!
//! A missing, unreadable or malformed file is the normal first-run path, not an
//! error. [`DataStore::load`] therefore returns a [`LoadOutcome`] rather than a
//! `Result`: either the regimen that was read, or a fresh empty one together with
//! the reason nothing was read.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "regimen": {
//!     "exercises": [
//!       {
//!         "name":     { "displayName": "Name",            "value": "Squat" },
//!         "bodyPart": { "displayName": "Muscle group(s)", "value": "Legs" },
//!         "sets":     { "displayName": "# of sets",       "value": "3" },
//!         "reps":     { "displayName": "# of reps",       "value": "10" },
//!         "weight":   { "displayName": "Weight (lbs)",    "value": "135" }
//!       }
//!     ]
//!   }
//! }
//! ```

use crate::error::Result;
use crate::model::Regimen;
use std::fmt;

pub mod fs;
pub mod memory;

/// Why a store came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshReason {
    /// Nothing has been saved yet.
    Missing,
    /// The file exists but could not be read.
    Unreadable,
    /// The file was read but is not a regimen document.
    Malformed,
}

impl fmt::Display for FreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FreshReason::Missing => "no saved regimen",
            FreshReason::Unreadable => "saved regimen could not be read",
            FreshReason::Malformed => "saved regimen is not valid",
        };
        f.write_str(text)
    }
}

/// Result of [`DataStore::load`]. Both variants are usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Regimen),
    Fresh(FreshReason),
}

impl LoadOutcome {
    /// The regimen to start the session with; empty when nothing was loaded.
    pub fn into_regimen(self) -> Regimen {
        match self {
            LoadOutcome::Loaded(regimen) => regimen,
            LoadOutcome::Fresh(_) => Regimen::new(),
        }
    }
}

/// Abstract interface for regimen storage.
pub trait DataStore {
    /// Read the persisted regimen, or explain why there is none.
    fn load(&self) -> LoadOutcome;

    /// Overwrite the persisted regimen with `regimen`.
    fn save(&mut self, regimen: &Regimen) -> Result<()>;
}
