use super::super::sensing::PolarEstimate;
use super::{QuestionBank, ShuffleRng, BANK_CAPACITY, MAX_PLAYERS, QUESTIONS_PER_PLAYER};

/// Mutable state of one quiz run: player count, per-player scores and
/// progress, and the dealt question blocks. Owned exclusively by the game
/// machine; reset by `start`, never partially.
pub(crate) struct QuizSession {
    num_players: u8,
    current_player: u8,
    scores: [u8; MAX_PLAYERS],
    answered: [u8; MAX_PLAYERS],
    assigned: [[u16; QUESTIONS_PER_PLAYER as usize]; MAX_PLAYERS],
}

impl QuizSession {
    pub(crate) const fn empty() -> Self {
        Self {
            num_players: 0,
            current_player: 0,
            scores: [0; MAX_PLAYERS],
            answered: [0; MAX_PLAYERS],
            assigned: [[0; QUESTIONS_PER_PLAYER as usize]; MAX_PLAYERS],
        }
    }

    /// Zeroes all scores and progress, then deals each player a contiguous
    /// block of a fresh Fisher-Yates shuffle of the full bank range. No
    /// question repeats within a session, within or across players.
    pub(crate) fn start(&mut self, bank: &QuestionBank, num_players: u8, rng: &mut ShuffleRng) {
        assert!(num_players >= 1 && usize::from(num_players) <= MAX_PLAYERS);
        let needed = usize::from(num_players) * usize::from(QUESTIONS_PER_PLAYER);
        assert!(bank.len() >= needed, "question bank smaller than one deal");
        assert!(bank.len() <= BANK_CAPACITY, "bank over capacity");

        let mut deck = [0u16; BANK_CAPACITY];
        for (index, slot) in deck.iter_mut().enumerate().take(bank.len()) {
            *slot = index as u16;
        }
        for i in (1..bank.len()).rev() {
            let j = rng.next_below(i as u32 + 1) as usize;
            deck.swap(i, j);
        }

        self.num_players = num_players;
        self.current_player = 0;
        self.scores = [0; MAX_PLAYERS];
        self.answered = [0; MAX_PLAYERS];
        for player in 0..usize::from(num_players) {
            let block = &deck[player * usize::from(QUESTIONS_PER_PLAYER)..];
            for slot in 0..usize::from(QUESTIONS_PER_PLAYER) {
                self.assigned[player][slot] = block[slot];
            }
        }
    }

    pub(crate) fn num_players(&self) -> u8 {
        self.num_players
    }

    pub(crate) fn current_player(&self) -> u8 {
        self.current_player
    }

    pub(crate) fn set_current_player(&mut self, player: u8) {
        assert!(player < self.num_players, "player index out of range");
        self.current_player = player;
    }

    pub(crate) fn scores(&self) -> [u8; MAX_PLAYERS] {
        self.scores
    }

    pub(crate) fn answered(&self) -> [u8; MAX_PLAYERS] {
        self.answered
    }

    /// Bank index of the question the current player is on.
    pub(crate) fn current_question(&self) -> u16 {
        let player = usize::from(self.current_player);
        let offset = self.answered[player];
        assert!(offset < QUESTIONS_PER_PLAYER, "player already finished");
        self.assigned[player][usize::from(offset)]
    }

    /// Scores the estimate against the current question's acceptance
    /// window. Progress always advances; the score only on a hit.
    pub(crate) fn record_answer(&mut self, bank: &QuestionBank, estimate: PolarEstimate) -> bool {
        let question = bank.question(self.current_question());
        let correct = question.accepts(estimate.theta_deg, estimate.phi_deg);
        let player = usize::from(self.current_player);
        if correct {
            self.scores[player] += 1;
        }
        self.answered[player] += 1;
        debug_assert!(self.scores[player] <= self.answered[player]);
        correct
    }

    pub(crate) fn is_player_done(&self, player: u8) -> bool {
        assert!(player < self.num_players, "player index out of range");
        self.answered[usize::from(player)] >= QUESTIONS_PER_PLAYER
    }

    pub(crate) fn is_session_done(&self) -> bool {
        (0..self.num_players).all(|player| self.is_player_done(player))
    }

    /// Lowest-indexed player with questions remaining.
    pub(crate) fn next_active_player(&self) -> Option<u8> {
        (0..self.num_players).find(|&player| !self.is_player_done(player))
    }
}
