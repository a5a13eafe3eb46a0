use super::super::quiz::{Question, QuestionBank, QUESTIONS_PER_PLAYER};
use super::super::sensing::PolarEstimate;
use super::{GameCommand, GameEngine, GamePhase, GameStepStatus, PlayerAdjust};

static TEST_QUESTIONS: [Question; 44] =
    [Question::new("Point at the pole", 0.0, 20.0, -10.0, 10.0); 44];
static TEST_BANK: QuestionBank = QuestionBank::new(&TEST_QUESTIONS);

fn estimate_at(theta_deg: f32, phi_deg: f32) -> PolarEstimate {
    PolarEstimate {
        radius: 15.0,
        theta_deg,
        phi_deg,
    }
}

fn engine_at_selection() -> GameEngine {
    let mut engine = GameEngine::new(&TEST_BANK, 0xBEEF);
    let result = engine.apply(GameCommand::BaselineReady);
    assert!(result.entered(GamePhase::SelectingPlayers));
    engine
}

/// Drives one full question for the current player: show, hold through a
/// sentinel poll, detect, match, score hold.
fn answer_one(engine: &mut GameEngine, estimate: PolarEstimate) {
    assert!(engine
        .apply(GameCommand::QuestionShown)
        .entered(GamePhase::AwaitingDirection));

    let held = engine.apply(GameCommand::StylusSample(PolarEstimate::NO_DETECTION));
    assert_eq!(held.status, GameStepStatus::Unchanged);
    assert_eq!(held.after.phase, GamePhase::AwaitingDirection);

    assert!(engine
        .apply(GameCommand::StylusSample(estimate))
        .entered(GamePhase::MatchingAnswer));
    assert!(engine
        .apply(GameCommand::MatchAnswer)
        .entered(GamePhase::ShowingScore));
    let _ = engine.apply(GameCommand::ScoreHoldElapsed);
}

#[test]
fn boots_into_calibration_and_advances_on_baseline() {
    let mut engine = GameEngine::new(&TEST_BANK, 1);
    assert_eq!(engine.snapshot().phase, GamePhase::Calibrating);
    let result = engine.apply(GameCommand::BaselineReady);
    assert!(result.changed());
    assert_eq!(result.after.phase, GamePhase::SelectingPlayers);
    assert_eq!(result.after.num_players, 2);
}

#[test]
fn player_count_saturates_at_both_ends() {
    let mut engine = engine_at_selection();

    let raise = engine.apply(GameCommand::AdjustPlayers(PlayerAdjust::Raise));
    assert!(raise.changed());
    assert_eq!(raise.after.num_players, 3);
    let _ = engine.apply(GameCommand::AdjustPlayers(PlayerAdjust::Raise));
    let clamped = engine.apply(GameCommand::AdjustPlayers(PlayerAdjust::Raise));
    assert_eq!(clamped.status, GameStepStatus::Unchanged);
    assert_eq!(clamped.after.num_players, 4);

    for _ in 0..3 {
        let _ = engine.apply(GameCommand::AdjustPlayers(PlayerAdjust::Lower));
    }
    let floor = engine.apply(GameCommand::AdjustPlayers(PlayerAdjust::Lower));
    assert_eq!(floor.status, GameStepStatus::Unchanged);
    assert_eq!(floor.after.num_players, 1);
}

#[test]
fn commands_outside_their_phase_are_rejected() {
    let mut engine = GameEngine::new(&TEST_BANK, 5);
    let sample = engine.apply(GameCommand::StylusSample(estimate_at(10.0, 0.0)));
    assert_eq!(sample.status, GameStepStatus::InvalidCommand);
    assert_eq!(sample.after.phase, GamePhase::Calibrating);

    let _ = engine.apply(GameCommand::BaselineReady);
    let restart = engine.apply(GameCommand::Restart);
    assert_eq!(restart.status, GameStepStatus::InvalidCommand);
    assert_eq!(restart.after.phase, GamePhase::SelectingPlayers);

    let hold = engine.apply(GameCommand::ScoreHoldElapsed);
    assert_eq!(hold.status, GameStepStatus::InvalidCommand);
}

#[test]
fn confirming_starts_the_session_on_question_one() {
    let mut engine = engine_at_selection();
    let confirmed = engine.apply(GameCommand::ConfirmPlayers);
    assert!(confirmed.entered(GamePhase::AskingQuestion));
    assert_eq!(confirmed.after.current_player, 0);
    assert_eq!(confirmed.after.scores, [0; 4]);
    assert_eq!(confirmed.after.progress, [0; 4]);
    assert!(confirmed.after.question.is_some());
}

#[test]
fn two_player_game_runs_to_game_over_and_restarts() {
    let mut engine = engine_at_selection();
    let _ = engine.apply(GameCommand::ConfirmPlayers);

    // Player 0 stays current until their block is exhausted, all hits.
    for round in 0..QUESTIONS_PER_PLAYER {
        assert_eq!(engine.snapshot().current_player, 0);
        assert_eq!(engine.snapshot().progress[0], round);
        answer_one(&mut engine, estimate_at(10.0, 0.0));
    }

    // Then the scan hands the turn to player 1, all misses.
    assert_eq!(engine.snapshot().phase, GamePhase::AskingQuestion);
    assert_eq!(engine.snapshot().current_player, 1);
    for _ in 0..QUESTIONS_PER_PLAYER {
        answer_one(&mut engine, estimate_at(90.0, 90.0));
    }

    let over = engine.snapshot();
    assert_eq!(over.phase, GamePhase::GameOver);
    assert_eq!(over.scores, [QUESTIONS_PER_PLAYER, 0, 0, 0]);
    assert_eq!(over.progress, [QUESTIONS_PER_PLAYER, QUESTIONS_PER_PLAYER, 0, 0]);

    // Restart keeps the old scoreboard until the next session starts.
    let restarted = engine.apply(GameCommand::Restart);
    assert!(restarted.entered(GamePhase::SelectingPlayers));
    assert_eq!(restarted.after.scores, [QUESTIONS_PER_PLAYER, 0, 0, 0]);

    let fresh = engine.apply(GameCommand::ConfirmPlayers);
    assert!(fresh.entered(GamePhase::AskingQuestion));
    assert_eq!(fresh.after.scores, [0; 4]);
    assert_eq!(fresh.after.progress, [0; 4]);
}

#[test]
fn matching_scores_inclusive_edges_through_the_machine() {
    let mut engine = engine_at_selection();
    let _ = engine.apply(GameCommand::AdjustPlayers(PlayerAdjust::Lower));
    let _ = engine.apply(GameCommand::ConfirmPlayers);

    answer_one(&mut engine, estimate_at(20.0, 10.0));
    answer_one(&mut engine, estimate_at(20.1, 0.0));
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.scores[0], 1);
    assert_eq!(snapshot.progress[0], 2);
}
