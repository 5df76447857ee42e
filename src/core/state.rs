//! Game state: the single source of truth for one match.
//!
//! ## GameState
//!
//! - Players in seat order, each owning ordered zone collections
//! - Canonical store of card instances
//! - Turn, at most one prompt, the pending effect queue
//! - RNG seed and id counter
//! - Append-only event history
//!
//! Every collection is an `im` persistent structure, so cloning a whole
//! state is O(1). The engine relies on this to apply actions to a working
//! copy and commit only on success.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::{Phase, Zone};
use super::ids::{InstanceId, PromptId};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{CardId, CardInstance};
use crate::effects::{Effect, Prompt, PromptStatus};
use crate::error::{EngineError, Result};
use crate::events::GameEvent;
use crate::zones::ZoneManager;

/// One player's zones.
///
/// Order is significant: deck order is draw order (front = top), hand,
/// discard and bench order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player: PlayerId,
    pub deck: Vector<InstanceId>,
    pub hand: Vector<InstanceId>,
    pub discard: Vector<InstanceId>,
    pub bench: Vector<InstanceId>,
    pub active: Option<InstanceId>,
}

impl PlayerState {
    /// Create a player with empty zones.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            deck: Vector::new(),
            hand: Vector::new(),
            discard: Vector::new(),
            bench: Vector::new(),
            active: None,
        }
    }

    /// The ordered collection backing a zone. `None` for the active slot.
    #[must_use]
    pub fn collection(&self, zone: Zone) -> Option<&Vector<InstanceId>> {
        match zone {
            Zone::Deck => Some(&self.deck),
            Zone::Hand => Some(&self.hand),
            Zone::Discard => Some(&self.discard),
            Zone::Bench => Some(&self.bench),
            Zone::Active => None,
        }
    }

    pub(crate) fn collection_mut(&mut self, zone: Zone) -> Option<&mut Vector<InstanceId>> {
        match zone {
            Zone::Deck => Some(&mut self.deck),
            Zone::Hand => Some(&mut self.hand),
            Zone::Discard => Some(&mut self.discard),
            Zone::Bench => Some(&mut self.bench),
            Zone::Active => None,
        }
    }

    /// How many times `instance` is stored in `zone` (0 or 1 when consistent).
    #[must_use]
    pub fn occurrences(&self, zone: Zone, instance: InstanceId) -> usize {
        match self.collection(zone) {
            Some(cards) => cards.iter().filter(|&&id| id == instance).count(),
            None => usize::from(self.active == Some(instance)),
        }
    }

    /// Total instances across deck, hand, discard, bench and active.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + self.discard.len()
            + self.bench.len()
            + usize::from(self.active.is_some())
    }
}

/// Turn number, whose turn it is, and the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Turn number (starts at 1, only increases).
    pub number: u32,
    pub active_player: PlayerId,
    pub phase: Phase,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: String,

    /// Players in fixed seat order; turn rotation follows it.
    pub players: PlayerMap<PlayerState>,

    /// Card instances by id.
    pub cards: OrdMap<InstanceId, CardInstance>,

    pub turn: TurnState,

    /// The outstanding prompt, if any.
    pub prompt: Option<Prompt>,

    /// Effects waiting to be applied, front first.
    pub effect_queue: Vector<Effect>,

    pub rng: GameRng,

    /// Next id to allocate.
    next_id: u32,

    /// Every accepted event, in emission order. Never pruned here.
    pub history: Vector<GameEvent>,
}

impl GameState {
    /// Create an empty game in SETUP, turn 1, player 0 active.
    #[must_use]
    pub fn new(game_id: impl Into<String>, player_count: usize, seed: u32) -> Self {
        Self {
            game_id: game_id.into(),
            players: PlayerMap::new(player_count, PlayerState::new),
            cards: OrdMap::new(),
            turn: TurnState {
                number: 1,
                active_player: PlayerId::new(0),
                phase: Phase::Setup,
            },
            prompt: None,
            effect_queue: Vector::new(),
            rng: GameRng::new(seed),
            next_id: 1,
            history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    // === Ids ===

    /// Peek at the next id without allocating it.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Allocate a card instance id.
    pub fn alloc_instance_id(&mut self) -> InstanceId {
        InstanceId(self.alloc_id())
    }

    /// Allocate a prompt id.
    pub fn alloc_prompt_id(&mut self) -> PromptId {
        PromptId(self.alloc_id())
    }

    // === Lookup ===

    /// Get a player's zones.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerState> {
        self.players.get(player).ok_or(EngineError::MissingPlayer(player))
    }

    /// Get a player's zones mutably.
    pub fn player_mut(&mut self, player: PlayerId) -> Result<&mut PlayerState> {
        self.players
            .get_mut(player)
            .ok_or(EngineError::MissingPlayer(player))
    }

    /// Get a card instance.
    pub fn card(&self, instance: InstanceId) -> Result<&CardInstance> {
        self.cards.get(&instance).ok_or(EngineError::MissingCard(instance))
    }

    /// Get a card instance mutably.
    pub fn card_mut(&mut self, instance: InstanceId) -> Result<&mut CardInstance> {
        self.cards
            .get_mut(&instance)
            .ok_or(EngineError::MissingCard(instance))
    }

    /// Whether it is `player`'s turn.
    #[must_use]
    pub fn is_players_turn(&self, player: PlayerId) -> bool {
        self.turn.active_player == player
    }

    /// The single other seated player.
    ///
    /// Fails unless exactly one other player exists.
    pub fn opponent_of(&self, player: PlayerId) -> Result<PlayerId> {
        let mut others = self.players.player_ids().filter(|&p| p != player);
        match (others.next(), others.next()) {
            (Some(opponent), None) => Ok(opponent),
            _ => Err(EngineError::NoSingleOpponent {
                player,
                found: self.players.player_ids().filter(|&p| p != player).count(),
            }),
        }
    }

    /// Current prompt state machine status.
    #[must_use]
    pub fn prompt_status(&self) -> PromptStatus {
        PromptStatus::of(self.prompt.as_ref())
    }

    // === Setup ===

    /// Create a new instance of `card_id` owned by `owner` directly in `zone`.
    pub fn add_card(&mut self, owner: PlayerId, card_id: CardId, zone: Zone) -> Result<InstanceId> {
        self.player(owner)?;
        // The id is only consumed once the instance is placed.
        let id = InstanceId(self.next_id);
        self.insert_instance(CardInstance::new(id, card_id, owner, zone))?;
        self.alloc_instance_id();
        Ok(id)
    }

    /// Insert a prepared instance at the zone it records.
    pub fn insert_instance(&mut self, instance: CardInstance) -> Result<()> {
        let id = instance.instance_id;
        let owner = instance.owner;
        let zone = instance.zone;
        ZoneManager::insert(self.player_mut(owner)?, id, zone)?;
        self.cards.insert(id, instance);
        Ok(())
    }

    // === Queue ===

    /// Append effects to the back of the queue.
    pub fn enqueue(&mut self, effects: impl IntoIterator<Item = Effect>) {
        self.effect_queue.extend(effects);
    }

    /// Insert effects ahead of everything already queued, keeping their order.
    pub fn enqueue_front(&mut self, effects: impl IntoIterator<Item = Effect>) {
        let mut queue: Vector<Effect> = effects.into_iter().collect();
        queue.append(std::mem::take(&mut self.effect_queue));
        self.effect_queue = queue;
    }

    // === RNG ===

    /// Draw a value in `[0, 1)` from the in-state generator.
    pub fn rand01(&mut self) -> f64 {
        self.rng.rand01()
    }

    // === Invariants ===

    /// Check that every instance is stored exactly once, in the zone it
    /// records, and that every stored id belongs to its player.
    pub fn verify_zones(&self) -> Result<()> {
        for (id, card) in &self.cards {
            let owner = self.player(card.owner)?;
            let total: usize = Zone::ALL.iter().map(|&z| owner.occurrences(z, *id)).sum();
            if total != 1 || owner.occurrences(card.zone, *id) != 1 {
                return Err(EngineError::ZoneMismatch {
                    instance: *id,
                    recorded: card.zone,
                });
            }
        }

        for (player, zones) in self.players.iter() {
            let stored = Zone::ALL
                .iter()
                .filter_map(|&z| zones.collection(z))
                .flat_map(|cards| cards.iter().copied())
                .chain(zones.active);
            for id in stored {
                let card = self.card(id)?;
                if card.owner != player {
                    return Err(EngineError::ZoneMismatch {
                        instance: id,
                        recorded: card.zone,
                    });
                }
            }
        }

        Ok(())
    }

    // === Persistence ===

    /// Encode the full state (seed and history included).
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
