use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use super::super::game::GameSnapshot;
use super::super::types::PanelInput;

pub(crate) static PANEL_INPUTS: Channel<CriticalSectionRawMutex, PanelInput, 8> = Channel::new();
pub(crate) static UI_FRAMES: Channel<CriticalSectionRawMutex, GameSnapshot, 4> = Channel::new();
