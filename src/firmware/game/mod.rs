pub(crate) mod engine;
pub(crate) mod events;
pub(crate) mod machine;
pub(crate) mod snapshot;
#[cfg(test)]
mod tests;
pub(crate) mod types;

pub(crate) use engine::{GameApplyResult, GameEngine};
pub(crate) use events::{GameCommand, PlayerAdjust};
pub(crate) use snapshot::GameSnapshot;
pub(crate) use types::{GamePhase, GameStepStatus};
