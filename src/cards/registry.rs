//! Card registry for definition lookup.
//!
//! The `CardRegistry` is read-only once built. The engine receives it at
//! construction and only ever consults it; cards are loaded by whatever
//! catalog layer embeds the engine.
//!
//! `CardRegistry::standard()` ships the built-in catalog.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, MoveContext, MoveDefinition, PlayContext};
use super::CardType;
use crate::effects::{Continuation, Effect, Prompt, TargetRef};
use crate::error::{Refusal, Rejection};

/// HP restored by a Potion.
pub const POTION_HEAL: u32 = 20;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use pocket_tcg::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::pokemon("eevee-basic", "Eevee", 50));
///
/// let found = registry.get(&CardId::new("eevee-basic")).unwrap();
/// assert_eq!(found.name, "Eevee");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: Pikachu, Potion and Lightning Energy.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(
            CardDefinition::pokemon("pikachu-basic", "Pikachu", 60).with_move(MoveDefinition::new(
                "thunder-jolt",
                "Thunder Jolt",
                20,
                prompt_opponent_active,
            )),
        );
        registry.register(CardDefinition::trainer("potion", "Potion").with_on_play(potion));
        registry.register(CardDefinition::new(
            "lightning-energy",
            "Lightning Energy",
            CardType::Energy,
        ));

        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }
}

/// Move builder: ask the attacker to pick the opponent's active Pokémon,
/// then deal the move's damage to it.
///
/// Assumes exactly two players.
pub fn prompt_opponent_active(ctx: &MoveContext<'_>) -> Result<Vec<Effect>, Refusal> {
    let opponent = ctx.state.opponent_of(ctx.player)?;
    let target = ctx
        .state
        .player(opponent)?
        .active
        .ok_or(Rejection::NoOpponentActive)?;

    let prompt = Prompt::choose_target(
        ctx.prompt_id,
        ctx.player,
        "Choose an opponent Pokémon to attack.",
        [TargetRef::Card(target)],
        Continuation::AttackDamage {
            source: ctx.attacker,
            damage: ctx.damage,
        },
    );

    Ok(vec![Effect::CreatePrompt { prompt }])
}

/// Potion: heal the player's active Pokémon.
fn potion(ctx: &PlayContext<'_>) -> Result<Vec<Effect>, Refusal> {
    let active = ctx
        .state
        .player(ctx.player)?
        .active
        .ok_or(Rejection::NoActiveToHeal)?;

    Ok(vec![Effect::Heal {
        target: TargetRef::Card(active),
        amount: POTION_HEAL,
    }])
}
