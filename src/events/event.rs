//! Game event types.
//!
//! One variant per observable state change, plus `ActionRejected`. Events
//! are emitted in application order, one per applied effect (a DRAW emits
//! one `CardMoved` per card actually drawn).

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, Phase, PlayerId, PromptId, Zone};
use crate::effects::{Prompt, TargetRef};
use crate::error::Rejection;

/// Externally observable record of one applied effect or one rejection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    PhaseChanged {
        phase: Phase,
    },
    CardMoved {
        instance: InstanceId,
        from: Zone,
        to: Zone,
    },
    DamageDealt {
        source: TargetRef,
        target: TargetRef,
        amount: u32,
    },
    Healed {
        target: TargetRef,
        amount: u32,
    },
    PromptCreated {
        prompt: Prompt,
    },
    PromptCleared {
        prompt_id: PromptId,
    },
    TurnAdvanced {
        active_player: PlayerId,
        turn_number: u32,
    },
    ActionRejected {
        reason: String,
    },
}

impl GameEvent {
    /// Create a rejection event.
    pub fn rejected(rejection: Rejection) -> Self {
        Self::ActionRejected {
            reason: rejection.to_string(),
        }
    }

    /// Check if this is a rejection.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameEvent::ActionRejected { .. })
    }

    /// Wire name of the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::PhaseChanged { .. } => "PHASE_CHANGED",
            GameEvent::CardMoved { .. } => "CARD_MOVED",
            GameEvent::DamageDealt { .. } => "DAMAGE_DEALT",
            GameEvent::Healed { .. } => "HEALED",
            GameEvent::PromptCreated { .. } => "PROMPT_CREATED",
            GameEvent::PromptCleared { .. } => "PROMPT_CLEARED",
            GameEvent::TurnAdvanced { .. } => "TURN_ADVANCED",
            GameEvent::ActionRejected { .. } => "ACTION_REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_carries_reason() {
        let event = GameEvent::rejected(Rejection::NotYourTurn);

        assert!(event.is_rejection());
        assert_eq!(
            event,
            GameEvent::ActionRejected {
                reason: "Not your turn.".to_string()
            }
        );
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let event = GameEvent::CardMoved {
            instance: InstanceId(4),
            from: Zone::Hand,
            to: Zone::Active,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.starts_with(&format!("{{\"{}\"", event.kind())));
        assert!(!event.is_rejection());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::TurnAdvanced {
            active_player: PlayerId::new(1),
            turn_number: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
