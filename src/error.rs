//! Error types.
//!
//! Two channels, never mixed:
//!
//! - [`Rejection`]: a rule violation by the submitting player. Recoverable;
//!   surfaced to clients as a single `ACTION_REJECTED` event and the state is
//!   left untouched.
//! - [`EngineError`]: an invariant violation (corrupt state or a setup bug).
//!   Unrecoverable for the affected match; the caller should abort or reset
//!   it rather than retry.
//!
//! [`Refusal`] joins both so translation code can use `?` on either.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::{InstanceId, PlayerId, PromptId, Zone};

/// Unrecoverable invariant violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("missing card instance: {0}")]
    MissingCard(InstanceId),

    #[error("missing player state for {0}")]
    MissingPlayer(PlayerId),

    #[error("turn rotation needs at least two players, found {0}")]
    NotEnoughPlayers(usize),

    #[error("{player} must have exactly one opponent, found {found}")]
    NoSingleOpponent { player: PlayerId, found: usize },

    #[error("cannot create a prompt while {0} is outstanding")]
    PromptOutstanding(PromptId),

    #[error("active slot of {player} is already occupied by {occupant}")]
    ActiveOccupied { player: PlayerId, occupant: InstanceId },

    #[error("{instance} records zone {recorded} but its owner's zones disagree")]
    ZoneMismatch { instance: InstanceId, recorded: Zone },

    #[error("unknown card definition: {0}")]
    UnknownCard(CardId),

    #[error("move {move_id} of {card} produced no effects")]
    EmptyMove { card: CardId, move_id: String },

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

/// Recoverable rule violation. `Display` is the client-facing reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("A prompt is awaiting resolution.")]
    PromptPending,

    #[error("Only the prompted player may respond.")]
    NotPromptedPlayer,

    #[error("Not your turn.")]
    NotYourTurn,

    #[error("You can only play cards during MAIN phase.")]
    PlayOutsideMain,

    #[error("You do not own that card.")]
    NotCardOwner,

    #[error("That card is not in your hand.")]
    NotInHand,

    #[error("Unknown card definition.")]
    UnknownDefinition,

    #[error("No active Pokémon to heal.")]
    NoActiveToHeal,

    #[error("Cannot play this card type yet.")]
    UnplayableType,

    #[error("You can only attack during ATTACK phase.")]
    AttackOutsidePhase,

    #[error("You do not own that attacker.")]
    NotAttackerOwner,

    #[error("Only your ACTIVE Pokémon can attack.")]
    AttackerNotActive,

    #[error("Unknown move.")]
    UnknownMove,

    #[error("Opponent has no active Pokémon.")]
    NoOpponentActive,

    #[error("No prompt to resolve.")]
    NoPrompt,

    #[error("Prompt id mismatch.")]
    PromptMismatch,

    #[error("Invalid choice.")]
    InvalidChoice,

    #[error("The game has not started.")]
    NotStarted,

    #[error("The turn is over; end your turn.")]
    TurnOver,
}

/// Why an action produced no effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Fatal(#[from] EngineError),
}

/// Result alias for invariant-checked operations.
pub type Result<T> = std::result::Result<T, EngineError>;
