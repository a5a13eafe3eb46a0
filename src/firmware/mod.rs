pub(crate) mod config;
pub(crate) mod game;
pub(crate) mod quiz;
mod runtime;
pub(crate) mod sensing;
pub(crate) mod telemetry;
pub(crate) mod types;
mod ui;

pub use runtime::run;
