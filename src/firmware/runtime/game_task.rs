use embassy_time::Timer;

use super::super::config::{CALIBRATION_SAMPLES, PANEL_INPUTS, SCORE_HOLD_MS, UI_FRAMES};
use super::super::game::{GameCommand, GameEngine, GamePhase, GameSnapshot, PlayerAdjust};
use super::super::quiz::QuestionBank;
use super::super::sensing::{
    estimate_direction, MuxAdcBus, NoiseFloor, SensorArray, CHANNEL_COUNT, SENSOR_POSITIONS,
};
use super::super::telemetry;
use super::super::types::PanelInput;

/// The single control loop. One phase-appropriate command is produced and
/// applied per step; nothing here blocks longer than the per-channel settle
/// delay or the score display hold, and all game state stays on this task.
#[embassy_executor::task]
pub(crate) async fn game_task(mut sensors: SensorArray<MuxAdcBus>, bank: &'static QuestionBank) {
    let seed = sensors.harvest_seed().await;
    let mut engine = GameEngine::new(bank, seed);
    let mut noise_floor: NoiseFloor = [0.0; CHANNEL_COUNT];

    publish(engine.snapshot()).await;

    loop {
        let command = match engine.snapshot().phase {
            GamePhase::Calibrating => {
                noise_floor = sensors.calibrate(CALIBRATION_SAMPLES).await;
                telemetry::record_calibration_run();
                esp_println::println!("game: baseline_ready");
                GameCommand::BaselineReady
            }
            GamePhase::SelectingPlayers => match PANEL_INPUTS.receive().await {
                PanelInput::AddPlayer => GameCommand::AdjustPlayers(PlayerAdjust::Raise),
                PanelInput::RemovePlayer => GameCommand::AdjustPlayers(PlayerAdjust::Lower),
                PanelInput::Confirm => GameCommand::ConfirmPlayers,
                PanelInput::Activity => continue,
            },
            GamePhase::AskingQuestion => GameCommand::QuestionShown,
            GamePhase::AwaitingDirection => {
                let readings = sensors.read_all().await;
                let estimate = estimate_direction(&readings, &noise_floor, &SENSOR_POSITIONS);
                telemetry::record_poll_cycle();
                if estimate.is_detection() {
                    telemetry::record_stylus_detection();
                }
                GameCommand::StylusSample(estimate)
            }
            GamePhase::MatchingAnswer => GameCommand::MatchAnswer,
            GamePhase::ShowingScore => {
                Timer::after_millis(SCORE_HOLD_MS).await;
                GameCommand::ScoreHoldElapsed
            }
            GamePhase::GameOver => {
                // Any panel activity restarts; which button it was does not
                // matter here.
                let _ = PANEL_INPUTS.receive().await;
                GameCommand::Restart
            }
        };

        let result = engine.apply(command);

        if result.before.phase != result.after.phase {
            esp_println::println!("game: phase={}", result.after.phase.label());
        }
        if result.entered(GamePhase::ShowingScore) {
            telemetry::record_answer(result.after.scores != result.before.scores);
        }
        if result.entered(GamePhase::AskingQuestion)
            && result.before.phase == GamePhase::SelectingPlayers
        {
            telemetry::record_session_started();
            esp_println::println!("game: session_started players={}", result.after.num_players);
        }
        if result.entered(GamePhase::GameOver) {
            telemetry::record_session_completed();
        }
        if result.entered(GamePhase::SelectingPlayers) || result.entered(GamePhase::GameOver) {
            // Taps queued up mid-game must not register as fresh input.
            drain_panel_inputs();
        }

        if result.changed() {
            publish(result.after).await;
        }
    }
}

fn drain_panel_inputs() {
    while PANEL_INPUTS.try_receive().is_ok() {}
}

async fn publish(snapshot: GameSnapshot) {
    UI_FRAMES.send(snapshot).await;
}
