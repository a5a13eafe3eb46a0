use crate::firmware::types::PanelInput;

pub(super) enum ConsoleCommand {
    Panel(PanelInput),
    Stats,
}

pub(super) fn parse_console_command(line: &[u8]) -> Option<ConsoleCommand> {
    let cmd = line.trim_ascii();
    if cmd == b"+" || cmd.eq_ignore_ascii_case(b"ADD") {
        return Some(ConsoleCommand::Panel(PanelInput::AddPlayer));
    }
    if cmd == b"-" || cmd.eq_ignore_ascii_case(b"REMOVE") {
        return Some(ConsoleCommand::Panel(PanelInput::RemovePlayer));
    }
    if cmd.eq_ignore_ascii_case(b"OK") || cmd.eq_ignore_ascii_case(b"CONFIRM") {
        return Some(ConsoleCommand::Panel(PanelInput::Confirm));
    }
    if cmd.eq_ignore_ascii_case(b"TAP") || cmd.eq_ignore_ascii_case(b"RESTART") {
        return Some(ConsoleCommand::Panel(PanelInput::Activity));
    }
    if cmd.eq_ignore_ascii_case(b"STATS") {
        return Some(ConsoleCommand::Stats);
    }
    None
}
