use statig::blocking::IntoStateMachineExt as _;

use super::super::quiz::QuestionBank;
use super::events::GameCommand;
use super::machine::{DispatchContext, GameMachine};
use super::snapshot::GameSnapshot;
use super::types::{GamePhase, GameStepStatus};

#[derive(Clone, Copy, Debug)]
pub(crate) struct GameApplyResult {
    pub(crate) before: GameSnapshot,
    pub(crate) after: GameSnapshot,
    pub(crate) status: GameStepStatus,
}

impl GameApplyResult {
    pub(crate) fn changed(self) -> bool {
        matches!(self.status, GameStepStatus::Applied)
    }

    pub(crate) fn entered(self, phase: GamePhase) -> bool {
        self.before.phase != phase && self.after.phase == phase
    }
}

pub(crate) struct GameEngine {
    machine: statig::blocking::StateMachine<GameMachine>,
}

impl GameEngine {
    pub(crate) fn new(bank: &'static QuestionBank, seed: u32) -> Self {
        Self {
            machine: GameMachine::new(bank, seed).state_machine(),
        }
    }

    pub(crate) fn snapshot(&self) -> GameSnapshot {
        self.machine.inner().snapshot()
    }

    pub(crate) fn apply(&mut self, command: GameCommand) -> GameApplyResult {
        let before = self.snapshot();
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&command, &mut context);
        let after = self.snapshot();
        GameApplyResult {
            before,
            after,
            status: context.status,
        }
    }
}
