use thiserror::Error;

/// Every way a call into the engine can be rejected. A rejected call commits
/// nothing; the store is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no record found for the given key")]
    NotFound,
    #[error("address is already registered as a player")]
    DuplicateRegistration,
    #[error("a battle with this name already exists")]
    DuplicateBattle,
    #[error("caller is not a registered player")]
    Unregistered,
    #[error("a battle creator cannot join their own battle")]
    SelfJoin,
    #[error("player is already engaged in a battle")]
    ActiveBattleConflict,
    #[error("battle is not in a state that permits this operation")]
    InvalidState,
    #[error("move must be attack (1) or defend (2)")]
    InvalidMove,
    #[error("this seat already submitted a move this round")]
    DuplicateMove,
    #[error("both seats must submit a move before resolution")]
    MovesIncomplete,
    #[error("caller is not a participant in this battle")]
    NotParticipant,
    #[error("caller is not authorized for this operation")]
    AuthorizationError,
}
