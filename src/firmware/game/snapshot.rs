use super::super::quiz::MAX_PLAYERS;
use super::types::GamePhase;

/// What the rendering collaborator gets to see after every applied step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct GameSnapshot {
    pub(crate) phase: GamePhase,
    /// Player count as displayed: the pending selection while choosing,
    /// the running session's count otherwise.
    pub(crate) num_players: u8,
    pub(crate) current_player: u8,
    pub(crate) scores: [u8; MAX_PLAYERS],
    pub(crate) progress: [u8; MAX_PLAYERS],
    /// Bank index of the active question while one is on screen.
    pub(crate) question: Option<u16>,
}
