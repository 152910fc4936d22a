use super::{DataStore, FreshReason, LoadOutcome};
use crate::error::{RegimenError, Result};
use crate::model::{Exercise, Field, Regimen};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "Workout.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    regimen: RegimenElement,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegimenElement {
    #[serde(default)]
    exercises: Vec<ExerciseElement>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ExerciseElement {
    name: FieldElement,
    body_part: FieldElement,
    sets: FieldElement,
    reps: FieldElement,
    weight: FieldElement,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FieldElement {
    display_name: String,
    value: String,
}

impl FieldElement {
    fn new(field: Field, exercise: &Exercise) -> Self {
        Self {
            display_name: field.label().to_string(),
            value: exercise.get(field).to_string(),
        }
    }
}

impl From<&Exercise> for ExerciseElement {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: FieldElement::new(Field::Name, exercise),
            body_part: FieldElement::new(Field::BodyPart, exercise),
            sets: FieldElement::new(Field::Sets, exercise),
            reps: FieldElement::new(Field::Reps, exercise),
            weight: FieldElement::new(Field::Weight, exercise),
        }
    }
}

// Stored display names are informational; labels always come from `Field`.
impl From<ExerciseElement> for Exercise {
    fn from(element: ExerciseElement) -> Self {
        Exercise::new(
            element.name.value,
            element.body_part.value,
            element.sets.value,
            element.reps.value,
            element.weight.value,
        )
    }
}

/// Keeps the whole regimen in a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(regimen: &Regimen) -> Result<String> {
        let doc = Document {
            regimen: RegimenElement {
                exercises: regimen.iter().map(ExerciseElement::from).collect(),
            },
        };
        serde_json::to_string_pretty(&doc).map_err(RegimenError::Serialization)
    }

    fn decode(content: &str) -> Result<Regimen> {
        let doc: Document = serde_json::from_str(content).map_err(RegimenError::Serialization)?;
        Ok(Regimen::from_exercises(
            doc.regimen
                .exercises
                .into_iter()
                .map(Exercise::from)
                .collect(),
        ))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No regimen at {}, starting empty", self.path.display());
                return LoadOutcome::Fresh(FreshReason::Missing);
            }
            Err(e) => {
                tracing::warn!("Failed to read regimen {}: {}", self.path.display(), e);
                return LoadOutcome::Fresh(FreshReason::Unreadable);
            }
        };

        match Self::decode(&content) {
            Ok(regimen) => {
                tracing::debug!(
                    "Loaded {} exercise(s) from {}",
                    regimen.len(),
                    self.path.display()
                );
                LoadOutcome::Loaded(regimen)
            }
            Err(e) => {
                tracing::warn!("Failed to parse regimen {}: {}", self.path.display(), e);
                LoadOutcome::Fresh(FreshReason::Malformed)
            }
        }
    }

    fn save(&mut self, regimen: &Regimen) -> Result<()> {
        let content = Self::encode(regimen)?;
        fs::write(&self.path, content).map_err(RegimenError::Io)?;
        tracing::debug!(
            "Saved {} exercise(s) to {}",
            regimen.len(),
            self.path.display()
        );
        Ok(())
    }
}
