//! Card instances - runtime card state.
//!
//! A `CardInstance` is created once at game setup and never destroyed: it
//! keeps its identity (`instance_id`, `card_id`, `owner`) for the whole
//! match, including after it lands in the discard pile. Only the gameplay
//! fields change.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::CardId;
use crate::core::{InstanceId, PlayerId, Zone};

/// Special condition on a Pokémon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Asleep,
    Paralyzed,
    Poisoned,
    Burned,
}

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this instance.
    pub instance_id: InstanceId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Owning player. Instances never change owner.
    pub owner: PlayerId,

    /// Current zone. Kept in sync with the owner's collections by
    /// `ZoneManager`.
    pub zone: Zone,

    /// Active special conditions (set semantics, insertion order kept).
    pub statuses: SmallVec<[Status; 2]>,

    /// Accumulated damage.
    pub damage_counters: u32,

    /// Current HP, if the card has HP.
    pub hp: Option<u32>,

    /// Printed HP, if the card has HP.
    pub max_hp: Option<u32>,
}

impl CardInstance {
    /// Create a card instance with no damage and no statuses.
    #[must_use]
    pub fn new(instance_id: InstanceId, card_id: CardId, owner: PlayerId, zone: Zone) -> Self {
        Self {
            instance_id,
            card_id,
            owner,
            zone,
            statuses: SmallVec::new(),
            damage_counters: 0,
            hp: None,
            max_hp: None,
        }
    }

    /// Set printed HP (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: Option<u32>) -> Self {
        self.hp = hp;
        self.max_hp = hp;
        self
    }

    /// Add damage counters. There is no cap beyond the integer range.
    pub fn add_damage(&mut self, amount: u32) {
        self.damage_counters = self.damage_counters.saturating_add(amount);
    }

    /// Remove damage counters, never going below zero.
    pub fn heal(&mut self, amount: u32) {
        self.damage_counters = self.damage_counters.saturating_sub(amount);
    }

    /// HP left after damage, if the card has HP.
    #[must_use]
    pub fn remaining_hp(&self) -> Option<u32> {
        self.max_hp.map(|hp| hp.saturating_sub(self.damage_counters))
    }

    /// Check for a status.
    #[must_use]
    pub fn has_status(&self, status: Status) -> bool {
        self.statuses.contains(&status)
    }

    /// Add a status. Returns false if it was already present.
    pub fn add_status(&mut self, status: Status) -> bool {
        if self.has_status(status) {
            return false;
        }
        self.statuses.push(status);
        true
    }

    /// Remove a status. Returns false if it was not present.
    pub fn remove_status(&mut self, status: Status) -> bool {
        let before = self.statuses.len();
        self.statuses.retain(|s| *s != status);
        self.statuses.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> CardInstance {
        CardInstance::new(InstanceId(10), CardId::new("pikachu-basic"), PlayerId::new(0), Zone::Deck)
            .with_hp(Some(60))
    }

    #[test]
    fn test_card_instance_new() {
        let instance = pikachu();

        assert_eq!(instance.instance_id, InstanceId(10));
        assert_eq!(instance.owner, PlayerId::new(0));
        assert_eq!(instance.zone, Zone::Deck);
        assert_eq!(instance.damage_counters, 0);
        assert_eq!(instance.max_hp, Some(60));
        assert!(instance.statuses.is_empty());
    }

    #[test]
    fn test_damage_and_heal() {
        let mut instance = pikachu();

        instance.add_damage(30);
        assert_eq!(instance.damage_counters, 30);
        assert_eq!(instance.remaining_hp(), Some(30));

        instance.heal(20);
        assert_eq!(instance.damage_counters, 10);

        instance.heal(50);
        assert_eq!(instance.damage_counters, 0);
    }

    #[test]
    fn test_damage_beyond_hp_is_kept() {
        let mut instance = pikachu();

        instance.add_damage(90);
        assert_eq!(instance.damage_counters, 90);
        assert_eq!(instance.remaining_hp(), Some(0));
    }

    #[test]
    fn test_statuses_are_a_set() {
        let mut instance = pikachu();

        assert!(instance.add_status(Status::Poisoned));
        assert!(!instance.add_status(Status::Poisoned));
        assert!(instance.add_status(Status::Asleep));
        assert_eq!(instance.statuses.len(), 2);

        assert!(instance.remove_status(Status::Poisoned));
        assert!(!instance.remove_status(Status::Burned));
        assert!(instance.has_status(Status::Asleep));
        assert!(!instance.has_status(Status::Poisoned));
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut instance = pikachu();
        instance.add_damage(20);
        instance.add_status(Status::Paralyzed);

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
