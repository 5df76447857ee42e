//! Per-viewer redaction.
//!
//! `view_for` copies the state field by field. Other players' hand and deck
//! entries become `CardSlot::Hidden` one for one, so sizes stay visible but
//! identity and order do not. Everything else is copied as is; a new state
//! field is visible until a rule here says otherwise.

use serde::{Serialize, Serializer};

use crate::cards::CardInstance;
use crate::core::{GameRng, GameState, InstanceId, PlayerId, PlayerState, TurnState, Zone};
use crate::effects::{Effect, Prompt};
use crate::events::GameEvent;

/// Wire marker for a hidden card.
pub const UNKNOWN_CARD: &str = "UNKNOWN_CARD";

/// One entry of a possibly hidden zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSlot {
    Known(InstanceId),
    Hidden,
}

impl CardSlot {
    /// The instance id, if visible.
    #[must_use]
    pub fn known(self) -> Option<InstanceId> {
        match self {
            CardSlot::Known(id) => Some(id),
            CardSlot::Hidden => None,
        }
    }
}

impl Serialize for CardSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardSlot::Known(id) => id.serialize(serializer),
            CardSlot::Hidden => serializer.serialize_str(UNKNOWN_CARD),
        }
    }
}

/// A player's zones as seen by the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub deck: Vec<CardSlot>,
    pub hand: Vec<CardSlot>,
    pub discard: Vec<InstanceId>,
    pub bench: Vec<InstanceId>,
    pub active: Option<InstanceId>,
}

/// Full state as seen by one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_id: String,
    pub viewer: PlayerId,
    pub players: Vec<PlayerView>,
    /// Every card instance, ordered by id.
    pub cards: Vec<CardInstance>,
    pub turn: TurnState,
    pub prompt: Option<Prompt>,
    pub effect_queue: Vec<Effect>,
    pub rng: GameRng,
    pub next_id: u32,
    pub history: Vec<GameEvent>,
}

/// Project `state` for `viewer`. Never mutates `state`.
///
/// Only the zone collections are redacted. `cards` is copied whole, so each
/// opponent card's `card_id` and `zone` stay readable there; that is
/// intended, and this view is not a complete hiding of private zones.
#[must_use]
pub fn view_for(state: &GameState, viewer: PlayerId) -> GameView {
    GameView {
        game_id: state.game_id.clone(),
        viewer,
        players: state
            .players
            .iter()
            .map(|(player, zones)| redact_player(zones, player == viewer))
            .collect(),
        cards: state.cards.values().cloned().collect(),
        turn: state.turn,
        prompt: state.prompt.clone(),
        effect_queue: state.effect_queue.iter().cloned().collect(),
        rng: state.rng,
        next_id: state.next_id(),
        history: state.history.iter().cloned().collect(),
    }
}

fn redact_player(zones: &PlayerState, visible: bool) -> PlayerView {
    let slots = |cards: &im::Vector<InstanceId>, zone: Zone| -> Vec<CardSlot> {
        if visible || !zone.is_private() {
            cards.iter().copied().map(CardSlot::Known).collect()
        } else {
            vec![CardSlot::Hidden; cards.len()]
        }
    };

    PlayerView {
        player: zones.player,
        deck: slots(&zones.deck, Zone::Deck),
        hand: slots(&zones.hand, Zone::Hand),
        discard: zones.discard.iter().copied().collect(),
        bench: zones.bench.iter().copied().collect(),
        active: zones.active,
    }
}
