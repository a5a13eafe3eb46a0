mod bootstrap;
mod console_task;
mod game_task;

pub use bootstrap::run;
