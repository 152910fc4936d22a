use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Exercise, Regimen};
use crate::store::DataStore;

pub const ADDED_MESSAGE: &str = "Successfully added exercise to regimen!";

/// Appends `exercise` and rewrites the whole regimen through `store`.
///
/// A failed save is not fatal: the exercise stays in `regimen` and the caller gets a
/// warning instead of the success message. The next successful save persists it too.
pub fn run<S: DataStore>(store: &mut S, regimen: &mut Regimen, exercise: Exercise) -> CmdResult {
    regimen.push(exercise);

    let mut result = CmdResult::default();
    match store.save(regimen) {
        Ok(()) => result.add_message(CmdMessage::success(ADDED_MESSAGE)),
        Err(e) => {
            tracing::error!("Failed to save regimen: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Exercise kept in memory but could not be saved: {}",
                e
            )));
        }
    }
    result
}
