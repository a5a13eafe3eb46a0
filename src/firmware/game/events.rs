use super::super::sensing::PolarEstimate;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum PlayerAdjust {
    Raise,
    Lower,
}

/// One command per control-loop step. The runtime produces exactly the
/// command the current phase is waiting for; anything else is reported as
/// invalid and leaves the machine untouched.
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum GameCommand {
    BaselineReady,
    AdjustPlayers(PlayerAdjust),
    ConfirmPlayers,
    QuestionShown,
    StylusSample(PolarEstimate),
    MatchAnswer,
    ScoreHoldElapsed,
    Restart,
}
