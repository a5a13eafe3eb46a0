pub(crate) mod channels;

pub(crate) use channels::{PANEL_INPUTS, UI_FRAMES};

/// Analog settle time after switching the mux selector. The sensor front-end
/// needs ~6 ms before the ADC sees a stable level.
pub(crate) const SETTLE_US: u64 = 6000;
/// Samples averaged per channel when establishing the noise floor.
pub(crate) const CALIBRATION_SAMPLES: u16 = 100;
/// How long the scoreboard stays up between questions.
pub(crate) const SCORE_HOLD_MS: u64 = 1000;

pub(crate) const CONSOLE_CMD_BUF_LEN: usize = 32;
