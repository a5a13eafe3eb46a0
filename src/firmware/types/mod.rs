mod base;

pub(crate) use base::{ConsoleUart, PanelInput};
