//! Phases, zones and engine configuration.
//!
//! Phases and zones form fixed enumerations: the rules engine matches on
//! them exhaustively. Tunable numbers live in `EngineConfig`, which the
//! embedding service constructs (or deserializes) once per engine.

use serde::{Deserialize, Serialize};

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Setup,
    Draw,
    Main,
    Attack,
    End,
    Prompt,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "SETUP",
            Phase::Draw => "DRAW",
            Phase::Main => "MAIN",
            Phase::Attack => "ATTACK",
            Phase::End => "END",
            Phase::Prompt => "PROMPT",
        };
        f.write_str(name)
    }
}

/// A named location a card instance can occupy.
///
/// Every zone except `Active` is an ordered sequence owned by a player;
/// `Active` is a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Deck,
    Hand,
    Discard,
    Active,
    Bench,
}

impl Zone {
    /// All zones, in display order.
    pub const ALL: [Zone; 5] = [Zone::Deck, Zone::Hand, Zone::Discard, Zone::Active, Zone::Bench];

    /// Whether the zone's contents are hidden from opponents.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Zone::Deck | Zone::Hand)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "DECK",
            Zone::Hand => "HAND",
            Zone::Discard => "DISCARD",
            Zone::Active => "ACTIVE",
            Zone::Bench => "BENCH",
        };
        f.write_str(name)
    }
}

/// Engine-wide rules configuration.
///
/// ```
/// use pocket_tcg::core::EngineConfig;
///
/// let config = EngineConfig::new().with_opening_hand(5).with_turn_draw(1);
/// assert_eq!(config.opening_hand, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards each player draws when the game starts.
    pub opening_hand: usize,

    /// Cards the active player draws when leaving the DRAW phase.
    pub turn_draw: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opening_hand: 0,
            turn_draw: 1,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Set the per-turn draw count.
    #[must_use]
    pub fn with_turn_draw(mut self, cards: usize) -> Self {
        self.turn_draw = cards;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Main.to_string(), "MAIN");
        assert_eq!(Phase::Prompt.to_string(), "PROMPT");
    }

    #[test]
    fn test_zone_privacy() {
        assert!(Zone::Deck.is_private());
        assert!(Zone::Hand.is_private());
        assert!(!Zone::Discard.is_private());
        assert!(!Zone::Active.is_private());
        assert!(!Zone::Bench.is_private());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Zone::Active).unwrap(), "\"ACTIVE\"");
        assert_eq!(serde_json::to_string(&Phase::Attack).unwrap(), "\"ATTACK\"");
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.opening_hand, 0);
        assert_eq!(config.turn_draw, 1);
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: EngineConfig = serde_json::from_str(r#"{"opening_hand": 7}"#).unwrap();
        assert_eq!(config.opening_hand, 7);
        assert_eq!(config.turn_draw, 1);
    }
}
