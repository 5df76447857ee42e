//! Card definitions - static card data and behavior.
//!
//! `CardDefinition` holds the immutable properties of a card: identity,
//! type, HP, and behavior builders. Builders are pure functions over a
//! read-only view of the game state; they describe effects for the
//! resolver to apply and never mutate anything themselves.
//!
//! Instance-specific data (damage counters, statuses, zone) is stored
//! separately in `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, PromptId};
use crate::effects::{Effect, TargetRef};
use crate::error::Refusal;

/// Identifier of a card definition (e.g. `"pikachu-basic"`).
///
/// This identifies the kind of card, not a specific instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Pokemon,
    Trainer,
    Energy,
}

/// Inputs available to a move builder.
pub struct MoveContext<'a> {
    /// Read-only game state at translation time.
    pub state: &'a GameState,
    /// Attacking player.
    pub player: PlayerId,
    /// The attacking card.
    pub attacker: TargetRef,
    /// Base damage printed on the move.
    pub damage: u32,
    /// Id reserved for a prompt this move may create.
    pub prompt_id: PromptId,
}

/// Inputs available to a trainer's on-play builder.
pub struct PlayContext<'a> {
    /// Read-only game state at translation time.
    pub state: &'a GameState,
    /// Player playing the card.
    pub player: PlayerId,
    /// The card being played.
    pub source: TargetRef,
}

/// Builds the effects of a move. May refuse with a rule violation.
pub type MoveFn = fn(&MoveContext<'_>) -> Result<Vec<Effect>, Refusal>;

/// Builds the effects of playing a trainer. May refuse with a rule violation.
pub type PlayFn = fn(&PlayContext<'_>) -> Result<Vec<Effect>, Refusal>;

/// A move printed on a Pokémon card.
#[derive(Clone)]
pub struct MoveDefinition {
    /// Move identifier, unique within its card (e.g. `"thunder-jolt"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base damage.
    pub damage: u32,
    /// Effect builder.
    pub build: MoveFn,
}

impl MoveDefinition {
    /// Create a move definition.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, damage: u32, build: MoveFn) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            damage,
            build,
        }
    }
}

impl std::fmt::Debug for MoveDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("damage", &self.damage)
            .finish_non_exhaustive()
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use pocket_tcg::cards::{CardDefinition, CardId, CardType};
///
/// let energy = CardDefinition::new("grass-energy", "Grass Energy", CardType::Energy);
///
/// assert_eq!(energy.id, CardId::new("grass-energy"));
/// assert!(energy.moves.is_empty());
/// ```
#[derive(Clone)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Card type.
    pub card_type: CardType,

    /// Printed HP (Pokémon only).
    pub hp: Option<u32>,

    /// Moves in printed order (Pokémon only).
    pub moves: Vec<MoveDefinition>,

    /// On-play behavior (Trainers only). `None` means the card is simply
    /// discarded when played.
    pub on_play: Option<PlayFn>,
}

impl CardDefinition {
    /// Create a new card definition with no HP, moves or on-play behavior.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            hp: None,
            moves: Vec::new(),
            on_play: None,
        }
    }

    /// Create a Pokémon definition.
    #[must_use]
    pub fn pokemon(id: impl Into<CardId>, name: impl Into<String>, hp: u32) -> Self {
        Self::new(id, name, CardType::Pokemon).with_hp(hp)
    }

    /// Create a Trainer definition.
    #[must_use]
    pub fn trainer(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self::new(id, name, CardType::Trainer)
    }

    /// Set printed HP (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Add a move (builder pattern).
    #[must_use]
    pub fn with_move(mut self, mv: MoveDefinition) -> Self {
        self.moves.push(mv);
        self
    }

    /// Set on-play behavior (builder pattern).
    #[must_use]
    pub fn with_on_play(mut self, on_play: PlayFn) -> Self {
        self.on_play = Some(on_play);
        self
    }

    /// Look up a move by id.
    #[must_use]
    pub fn find_move(&self, move_id: &str) -> Option<&MoveDefinition> {
        self.moves.iter().find(|m| m.id == move_id)
    }
}

impl std::fmt::Debug for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("card_type", &self.card_type)
            .field("hp", &self.hp)
            .field("moves", &self.moves)
            .field("on_play", &self.on_play.is_some())
            .finish()
    }
}
