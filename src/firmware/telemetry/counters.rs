use core::sync::atomic::{AtomicU32, Ordering};

static CALIBRATION_RUNS: AtomicU32 = AtomicU32::new(0);
static POLL_CYCLES: AtomicU32 = AtomicU32::new(0);
static STYLUS_DETECTIONS: AtomicU32 = AtomicU32::new(0);
static ANSWERS_RECORDED: AtomicU32 = AtomicU32::new(0);
static ANSWERS_CORRECT: AtomicU32 = AtomicU32::new(0);
static SESSIONS_STARTED: AtomicU32 = AtomicU32::new(0);
static SESSIONS_COMPLETED: AtomicU32 = AtomicU32::new(0);

pub(crate) fn record_calibration_run() {
    CALIBRATION_RUNS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_poll_cycle() {
    POLL_CYCLES.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_stylus_detection() {
    STYLUS_DETECTIONS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_answer(correct: bool) {
    ANSWERS_RECORDED.fetch_add(1, Ordering::Relaxed);
    if correct {
        ANSWERS_CORRECT.fetch_add(1, Ordering::Relaxed);
    }
}

pub(crate) fn record_session_started() {
    SESSIONS_STARTED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_session_completed() {
    SESSIONS_COMPLETED.fetch_add(1, Ordering::Relaxed);
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TelemetrySnapshot {
    pub(crate) calibration_runs: u32,
    pub(crate) poll_cycles: u32,
    pub(crate) stylus_detections: u32,
    pub(crate) answers_recorded: u32,
    pub(crate) answers_correct: u32,
    pub(crate) sessions_started: u32,
    pub(crate) sessions_completed: u32,
}

pub(crate) fn snapshot() -> TelemetrySnapshot {
    TelemetrySnapshot {
        calibration_runs: CALIBRATION_RUNS.load(Ordering::Relaxed),
        poll_cycles: POLL_CYCLES.load(Ordering::Relaxed),
        stylus_detections: STYLUS_DETECTIONS.load(Ordering::Relaxed),
        answers_recorded: ANSWERS_RECORDED.load(Ordering::Relaxed),
        answers_correct: ANSWERS_CORRECT.load(Ordering::Relaxed),
        sessions_started: SESSIONS_STARTED.load(Ordering::Relaxed),
        sessions_completed: SESSIONS_COMPLETED.load(Ordering::Relaxed),
    }
}
