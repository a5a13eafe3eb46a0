use esp_hal::{uart::Uart, Async};

pub(crate) type ConsoleUart = Uart<'static, Async>;

/// Signals from the player-setup collaborator (the +/-/OK panel). In
/// `GameOver` any of these doubles as the restart activity pulse.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum PanelInput {
    AddPlayer,
    RemovePlayer,
    Confirm,
    Activity,
}
