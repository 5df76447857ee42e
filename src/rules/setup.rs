//! Match setup.
//!
//! `GameBuilder` turns decklists into a fresh `GameState` in SETUP phase:
//! player 0 active, turn 1, every card in its owner's deck with HP taken
//! from its definition. Send `Action::StartGame` to begin play.

use tracing::debug;

use crate::cards::{CardId, CardInstance, CardRegistry};
use crate::core::{GameState, PlayerId, Zone};
use crate::error::{EngineError, Result};

/// Builder for a new match.
///
/// ```
/// use pocket_tcg::cards::CardRegistry;
/// use pocket_tcg::rules::GameBuilder;
///
/// let registry = CardRegistry::standard();
/// let state = GameBuilder::new("match-1")
///     .seed(42)
///     .player(["pikachu-basic", "potion"])
///     .player(["pikachu-basic"])
///     .build(&registry)
///     .unwrap();
///
/// assert_eq!(state.player_count(), 2);
/// assert_eq!(state.cards.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    game_id: String,
    seed: u32,
    decklists: Vec<Vec<CardId>>,
    shuffle_decks: bool,
}

impl GameBuilder {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            seed: 0,
            decklists: Vec::new(),
            shuffle_decks: false,
        }
    }

    /// Initial RNG seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Seat another player with this decklist. The first entry is the top
    /// of the deck.
    pub fn player<I, C>(mut self, decklist: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        self.decklists.push(decklist.into_iter().map(Into::into).collect());
        self
    }

    /// Shuffle every deck with the in-state RNG after building it.
    pub fn shuffle_decks(mut self, shuffle: bool) -> Self {
        self.shuffle_decks = shuffle;
        self
    }

    /// Build the initial state.
    ///
    /// Fails if any decklist names a card the registry does not know.
    pub fn build(self, registry: &CardRegistry) -> Result<GameState> {
        let player_count = self.decklists.len();
        let mut state = GameState::new(self.game_id, player_count, self.seed);

        for (player, decklist) in PlayerId::all(player_count).zip(self.decklists) {
            let mut deck = Vec::with_capacity(decklist.len());
            for card_id in decklist {
                let definition = registry
                    .get(&card_id)
                    .ok_or_else(|| EngineError::UnknownCard(card_id.clone()))?;
                let hp = definition.hp;
                let id = state.alloc_instance_id();
                deck.push(CardInstance::new(id, card_id, player, Zone::Deck).with_hp(hp));
            }

            if self.shuffle_decks {
                state.rng.shuffle(&mut deck);
            }

            // Deck insertion puts each card on top, so go bottom-up.
            for instance in deck.into_iter().rev() {
                state.insert_instance(instance)?;
            }
        }

        debug!(
            game = %state.game_id,
            players = player_count,
            cards = state.cards.len(),
            "match built"
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InstanceId, Phase};

    fn deck_of(state: &GameState, player: u8) -> Vec<InstanceId> {
        state
            .player(PlayerId::new(player))
            .unwrap()
            .deck
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn test_build_initial_state() {
        let registry = CardRegistry::standard();
        let state = GameBuilder::new("g")
            .seed(9)
            .player(["pikachu-basic", "potion", "lightning-energy"])
            .player(["pikachu-basic"])
            .build(&registry)
            .unwrap();

        assert_eq!(state.turn.phase, Phase::Setup);
        assert_eq!(state.turn.number, 1);
        assert_eq!(state.turn.active_player, PlayerId::new(0));
        assert_eq!(state.rng.seed(), 9);
        assert_eq!(deck_of(&state, 0), vec![InstanceId(1), InstanceId(2), InstanceId(3)]);
        assert_eq!(deck_of(&state, 1), vec![InstanceId(4)]);
        state.verify_zones().unwrap();
    }

    #[test]
    fn test_hp_from_definition() {
        let registry = CardRegistry::standard();
        let state = GameBuilder::new("g")
            .player(["pikachu-basic", "potion"])
            .build(&registry)
            .unwrap();

        let pikachu = state.card(InstanceId(1)).unwrap();
        assert_eq!(pikachu.hp, Some(60));
        assert_eq!(pikachu.max_hp, Some(60));
        assert_eq!(state.card(InstanceId(2)).unwrap().hp, None);
    }

    #[test]
    fn test_unknown_card() {
        let registry = CardRegistry::standard();
        let err = GameBuilder::new("g")
            .player(["pikachu-basic", "charizard-ex"])
            .build(&registry)
            .unwrap_err();

        assert_eq!(err, EngineError::UnknownCard(CardId::new("charizard-ex")));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let registry = CardRegistry::standard();
        let build = |seed| {
            GameBuilder::new("g")
                .seed(seed)
                .shuffle_decks(true)
                .player(vec!["pikachu-basic"; 20])
                .player(vec!["potion"; 20])
                .build(&registry)
                .unwrap()
        };

        let a = build(123);
        let b = build(123);

        assert_eq!(a, b);
        assert_ne!(a.rng.seed(), 123);
        let mut sorted = deck_of(&a, 0);
        sorted.sort();
        assert_eq!(sorted, (1..=20).map(InstanceId).collect::<Vec<_>>());
        a.verify_zones().unwrap();
    }
}
