use statig::prelude::*;

use super::super::quiz::{QuestionBank, QuizSession, ShuffleRng, MAX_PLAYERS};
use super::super::sensing::PolarEstimate;
use super::events::{GameCommand, PlayerAdjust};
use super::snapshot::GameSnapshot;
use super::types::{GamePhase, GameStepStatus};

pub(super) struct GameMachine {
    pub(super) bank: &'static QuestionBank,
    pub(super) session: QuizSession,
    pub(super) rng: ShuffleRng,
    pub(super) pending_players: u8,
    pub(super) pending_estimate: PolarEstimate,
    pub(super) phase: GamePhase,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct DispatchContext {
    pub(super) status: GameStepStatus,
}

impl Default for DispatchContext {
    fn default() -> Self {
        Self {
            status: GameStepStatus::Unchanged,
        }
    }
}

impl GameMachine {
    pub(super) fn new(bank: &'static QuestionBank, seed: u32) -> Self {
        Self {
            bank,
            session: QuizSession::empty(),
            rng: ShuffleRng::seeded(seed),
            pending_players: 2,
            pending_estimate: PolarEstimate::NO_DETECTION,
            phase: GamePhase::Calibrating,
        }
    }

    pub(super) fn snapshot(&self) -> GameSnapshot {
        let on_question = matches!(
            self.phase,
            GamePhase::AskingQuestion | GamePhase::AwaitingDirection | GamePhase::MatchingAnswer
        );
        let num_players =
            if self.session.num_players() == 0 || self.phase == GamePhase::SelectingPlayers {
                self.pending_players
            } else {
                self.session.num_players()
            };
        GameSnapshot {
            phase: self.phase,
            num_players,
            current_player: self.session.current_player(),
            scores: self.session.scores(),
            progress: self.session.answered(),
            question: if on_question {
                Some(self.session.current_question())
            } else {
                None
            },
        }
    }
}

#[state_machine(initial = "State::calibrating()")]
impl GameMachine {
    #[state]
    fn calibrating(
        &mut self,
        context: &mut DispatchContext,
        event: &GameCommand,
    ) -> Outcome<State> {
        match event {
            GameCommand::BaselineReady => {
                self.phase = GamePhase::SelectingPlayers;
                context.status = GameStepStatus::Applied;
                Transition(State::selecting_players())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }

    #[state]
    fn selecting_players(
        &mut self,
        context: &mut DispatchContext,
        event: &GameCommand,
    ) -> Outcome<State> {
        match event {
            GameCommand::AdjustPlayers(adjust) => {
                let before = self.pending_players;
                // Out-of-range requests saturate rather than reject.
                self.pending_players = match adjust {
                    PlayerAdjust::Raise => (before + 1).min(MAX_PLAYERS as u8),
                    PlayerAdjust::Lower => before.saturating_sub(1).max(1),
                };
                context.status = if self.pending_players == before {
                    GameStepStatus::Unchanged
                } else {
                    GameStepStatus::Applied
                };
                Handled
            }
            GameCommand::ConfirmPlayers => {
                self.session
                    .start(self.bank, self.pending_players, &mut self.rng);
                self.phase = GamePhase::AskingQuestion;
                context.status = GameStepStatus::Applied;
                Transition(State::asking_question())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }

    #[state]
    fn asking_question(
        &mut self,
        context: &mut DispatchContext,
        event: &GameCommand,
    ) -> Outcome<State> {
        match event {
            GameCommand::QuestionShown => {
                self.phase = GamePhase::AwaitingDirection;
                context.status = GameStepStatus::Applied;
                Transition(State::awaiting_direction())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }

    #[state]
    fn awaiting_direction(
        &mut self,
        context: &mut DispatchContext,
        event: &GameCommand,
    ) -> Outcome<State> {
        match event {
            GameCommand::StylusSample(estimate) => {
                if !estimate.is_detection() {
                    // No stylus this cycle; keep polling. Not an error.
                    context.status = GameStepStatus::Unchanged;
                    return Handled;
                }
                self.pending_estimate = *estimate;
                self.phase = GamePhase::MatchingAnswer;
                context.status = GameStepStatus::Applied;
                Transition(State::matching_answer())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }

    #[state]
    fn matching_answer(
        &mut self,
        context: &mut DispatchContext,
        event: &GameCommand,
    ) -> Outcome<State> {
        match event {
            GameCommand::MatchAnswer => {
                let _ = self.session.record_answer(self.bank, self.pending_estimate);
                self.phase = GamePhase::ShowingScore;
                context.status = GameStepStatus::Applied;
                Transition(State::showing_score())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }

    #[state]
    fn showing_score(
        &mut self,
        context: &mut DispatchContext,
        event: &GameCommand,
    ) -> Outcome<State> {
        match event {
            GameCommand::ScoreHoldElapsed => {
                context.status = GameStepStatus::Applied;
                let current = self.session.current_player();
                if !self.session.is_player_done(current) {
                    self.phase = GamePhase::AskingQuestion;
                    return Transition(State::asking_question());
                }
                if let Some(next) = self.session.next_active_player() {
                    self.session.set_current_player(next);
                    self.phase = GamePhase::AskingQuestion;
                    return Transition(State::asking_question());
                }
                self.phase = GamePhase::GameOver;
                Transition(State::game_over())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }

    #[state]
    fn game_over(&mut self, context: &mut DispatchContext, event: &GameCommand) -> Outcome<State> {
        match event {
            GameCommand::Restart => {
                // Scores and counts stay on display; the next session start
                // is what resets them.
                self.phase = GamePhase::SelectingPlayers;
                context.status = GameStepStatus::Applied;
                Transition(State::selecting_players())
            }
            _ => {
                context.status = GameStepStatus::InvalidCommand;
                Handled
            }
        }
    }
}
