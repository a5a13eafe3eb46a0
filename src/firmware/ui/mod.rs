//! Boundary to the rendering collaborator. The panel driver lives outside
//! the core; at this seam each applied game step becomes one redraw request,
//! emitted here as structured console lines.

use super::config::UI_FRAMES;
use super::game::{GamePhase, GameSnapshot};
use super::quiz::{QuestionBank, QUESTIONS_PER_PLAYER};

#[embassy_executor::task]
pub(crate) async fn ui_task(bank: &'static QuestionBank) {
    loop {
        let frame = UI_FRAMES.receive().await;
        render_frame(bank, frame);
    }
}

fn render_frame(bank: &QuestionBank, frame: GameSnapshot) {
    match frame.phase {
        GamePhase::Calibrating => {
            esp_println::println!("ui: calibrating keep_shell_clear");
        }
        GamePhase::SelectingPlayers => {
            esp_println::println!("ui: select_players count={} [+/-/OK]", frame.num_players);
        }
        GamePhase::AskingQuestion => {
            let Some(index) = frame.question else {
                return;
            };
            let player = usize::from(frame.current_player);
            esp_println::println!(
                "ui: ask player={} question={}/{} text={:?}",
                frame.current_player + 1,
                frame.progress[player] + 1,
                QUESTIONS_PER_PLAYER,
                bank.question(index).text,
            );
        }
        // Polling and matching have no screen of their own.
        GamePhase::AwaitingDirection | GamePhase::MatchingAnswer => {}
        GamePhase::ShowingScore => {
            render_scoreboard(&frame);
        }
        GamePhase::GameOver => {
            render_scoreboard(&frame);
            esp_println::println!("ui: game_over tap_to_restart");
        }
    }
}

fn render_scoreboard(frame: &GameSnapshot) {
    for player in 0..usize::from(frame.num_players) {
        esp_println::println!(
            "ui: score player={} points={} answered={}",
            player + 1,
            frame.scores[player],
            frame.progress[player],
        );
    }
}
