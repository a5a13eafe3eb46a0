mod counters;

pub(crate) use counters::{
    record_answer, record_calibration_run, record_poll_cycle, record_session_completed,
    record_session_started, record_stylus_detection, snapshot, TelemetrySnapshot,
};
