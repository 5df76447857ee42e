//! Zone manager for card locations and movement.
//!
//! Zone contents live on [`PlayerState`]; the card instance records which
//! zone it is in. `ZoneManager` keeps the two in step:
//! - Removal is tolerant (a card absent from a collection is a no-op)
//! - Insertion follows the per-zone placement rule below
//! - The active slot holds at most one card and is never overwritten
//!
//! | Zone    | Insert at |
//! |---------|-----------|
//! | DECK    | front (top) |
//! | HAND    | back      |
//! | DISCARD | back      |
//! | BENCH   | back      |
//! | ACTIVE  | the slot  |

use crate::core::{GameState, InstanceId, PlayerId, PlayerState, Zone};
use crate::error::{EngineError, Result};

/// Card placement and movement between a player's zones.
pub struct ZoneManager;

impl ZoneManager {
    /// Remove `instance` from `zone`.
    ///
    /// Clears the active slot only if this instance occupies it.
    pub fn remove(zones: &mut PlayerState, instance: InstanceId, zone: Zone) {
        match zones.collection_mut(zone) {
            Some(cards) => cards.retain(|&id| id != instance),
            None => {
                if zones.active == Some(instance) {
                    zones.active = None;
                }
            }
        }
    }

    /// Place `instance` into `zone`.
    pub fn insert(zones: &mut PlayerState, instance: InstanceId, zone: Zone) -> Result<()> {
        match zone {
            Zone::Deck => zones.deck.push_front(instance),
            Zone::Hand => zones.hand.push_back(instance),
            Zone::Discard => zones.discard.push_back(instance),
            Zone::Bench => zones.bench.push_back(instance),
            Zone::Active => match zones.active {
                Some(occupant) if occupant != instance => {
                    return Err(EngineError::ActiveOccupied {
                        player: zones.player,
                        occupant,
                    });
                }
                _ => zones.active = Some(instance),
            },
        }
        Ok(())
    }

    /// Move a card between its owner's zones.
    ///
    /// Returns the zone it came from. Fails without mutating anything if the
    /// card is unknown or the destination is an occupied active slot.
    pub fn move_card(state: &mut GameState, instance: InstanceId, to: Zone) -> Result<Zone> {
        let card = state.card(instance)?;
        let owner = card.owner;
        let from = card.zone;

        let zones = state.player_mut(owner)?;
        if to == Zone::Active {
            if let Some(occupant) = zones.active.filter(|&id| id != instance) {
                return Err(EngineError::ActiveOccupied {
                    player: owner,
                    occupant,
                });
            }
        }

        Self::remove(zones, instance, from);
        Self::insert(zones, instance, to)?;
        state.card_mut(instance)?.zone = to;
        Ok(from)
    }

    /// Move the top card of `player`'s deck to the back of their hand.
    ///
    /// Returns `None` when the deck is empty.
    pub fn draw_one(state: &mut GameState, player: PlayerId) -> Result<Option<InstanceId>> {
        let zones = state.player_mut(player)?;
        let Some(top) = zones.deck.pop_front() else {
            return Ok(None);
        };
        zones.hand.push_back(top);
        state.card_mut(top)?.zone = Zone::Hand;
        Ok(Some(top))
    }
}
