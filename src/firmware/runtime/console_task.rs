mod line_reader;
mod parser;

use core::fmt::Write as _;

use esp_hal::uart::TxError;

use super::super::config::PANEL_INPUTS;
use super::super::telemetry;
use super::super::types::ConsoleUart;
use line_reader::{ConsoleLineReader, LineReadEvent};
use parser::{parse_console_command, ConsoleCommand};

/// Stand-in for the setup touch panel: a line-oriented UART console. `+`,
/// `-` and `OK` drive player selection, `TAP` is the restart activity
/// pulse, `STATS` dumps the telemetry counters.
#[embassy_executor::task]
pub(crate) async fn console_task(mut uart: ConsoleUart) {
    let mut reader = ConsoleLineReader::new();
    let mut rx = [0u8; 1];
    loop {
        let received = match uart.read_async(&mut rx).await {
            Ok(received) => received,
            Err(_) => {
                esp_println::println!("console: read_error");
                continue;
            }
        };
        for index in 0..received {
            match reader.push_byte(rx[index]) {
                LineReadEvent::None => {}
                LineReadEvent::Overflow => esp_println::println!("console: line_overflow"),
                LineReadEvent::Complete(line) => {
                    let command = parse_console_command(line);
                    handle_command(command, &mut uart).await;
                }
            }
        }
    }
}

async fn handle_command(command: Option<ConsoleCommand>, uart: &mut ConsoleUart) {
    match command {
        Some(ConsoleCommand::Panel(input)) => {
            if PANEL_INPUTS.try_send(input).is_err() {
                esp_println::println!("console: input_queue_full");
            }
        }
        Some(ConsoleCommand::Stats) => {
            let _ = write_stats_line(uart).await;
        }
        None => {
            let _ = uart_write_all(uart, b"err unknown_command\r\n").await;
        }
    }
}

async fn write_stats_line(uart: &mut ConsoleUart) -> Result<(), TxError> {
    let stats = telemetry::snapshot();
    let mut line = heapless::String::<160>::new();
    let _ = write!(
        line,
        "stats cal={} polls={} detections={} answers={} correct={} sessions={} completed={}\r\n",
        stats.calibration_runs,
        stats.poll_cycles,
        stats.stylus_detections,
        stats.answers_recorded,
        stats.answers_correct,
        stats.sessions_started,
        stats.sessions_completed,
    );
    uart_write_all(uart, line.as_bytes()).await
}

async fn uart_write_all(uart: &mut ConsoleUart, mut bytes: &[u8]) -> Result<(), TxError> {
    while !bytes.is_empty() {
        let written = uart.write_async(bytes).await?;
        bytes = &bytes[written..];
    }
    Ok(())
}
