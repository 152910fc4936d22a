use crate::commands::CmdResult;
use crate::model::Regimen;

pub fn run(regimen: &Regimen) -> CmdResult {
    CmdResult::default().with_listed_exercises(regimen.exercises().to_vec())
}
