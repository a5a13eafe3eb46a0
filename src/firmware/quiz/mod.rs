mod bank;
pub(crate) mod demo;
mod session;
mod shuffle;
#[cfg(test)]
mod tests;

pub(crate) use bank::{Question, QuestionBank};
pub(crate) use session::QuizSession;
pub(crate) use shuffle::ShuffleRng;

pub(crate) const MAX_PLAYERS: usize = 4;
pub(crate) const QUESTIONS_PER_PLAYER: u8 = 10;
/// Upper bound on bank size; the reference device ships 500 entries.
pub(crate) const BANK_CAPACITY: usize = 500;
