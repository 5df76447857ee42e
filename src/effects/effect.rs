//! Effect definitions.
//!
//! Effects are internal instructions: the engine never accepts them from
//! outside. The translator produces them, card builders describe them, and
//! the resolver applies them one at a time.

use serde::{Deserialize, Serialize};

use super::prompt::Prompt;
use crate::core::{InstanceId, Phase, PlayerId, PromptId, Zone};

/// Reference to something an effect can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetRef {
    Card(InstanceId),
}

impl TargetRef {
    /// The referenced card instance.
    #[must_use]
    pub const fn instance(self) -> InstanceId {
        match self {
            TargetRef::Card(id) => id,
        }
    }
}

impl From<InstanceId> for TargetRef {
    fn from(id: InstanceId) -> Self {
        TargetRef::Card(id)
    }
}

/// An atomic state change.
///
/// Every effect that reaches the resolver is unconditionally applicable:
/// preconditions are checked when the action is translated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    /// Move up to `count` cards from the front of the deck to the hand.
    Draw { player: PlayerId, count: usize },

    /// Move a card to another zone of its owner.
    MoveCard { instance: InstanceId, to: Zone },

    /// Add damage counters to the target.
    DealDamage {
        source: TargetRef,
        target: TargetRef,
        amount: u32,
    },

    /// Remove damage counters from the target, floored at zero.
    Heal { target: TargetRef, amount: u32 },

    /// Overwrite the current phase.
    SetPhase { phase: Phase },

    /// Install a prompt and suspend resolution.
    CreatePrompt { prompt: Prompt },

    /// Remove the prompt if its id matches.
    ClearPrompt { prompt_id: PromptId },

    /// Pass the turn to the next seat.
    AdvanceTurn,
}

impl Effect {
    /// Create a draw effect.
    pub fn draw(player: PlayerId, count: usize) -> Self {
        Self::Draw { player, count }
    }

    /// Create a move card effect.
    pub fn move_to(instance: InstanceId, to: Zone) -> Self {
        Self::MoveCard { instance, to }
    }

    /// Create a set phase effect.
    pub fn set_phase(phase: Phase) -> Self {
        Self::SetPhase { phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_ref() {
        let target: TargetRef = InstanceId(5).into();
        assert_eq!(target, TargetRef::Card(InstanceId(5)));
        assert_eq!(target.instance(), InstanceId(5));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Effect::draw(PlayerId::new(1), 2),
            Effect::Draw { player: PlayerId::new(1), count: 2 }
        );
        assert_eq!(
            Effect::move_to(InstanceId(3), Zone::Discard),
            Effect::MoveCard { instance: InstanceId(3), to: Zone::Discard }
        );
        assert_eq!(Effect::set_phase(Phase::End), Effect::SetPhase { phase: Phase::End });
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::DealDamage {
            source: TargetRef::Card(InstanceId(1)),
            target: TargetRef::Card(InstanceId(2)),
            amount: 20,
        };
        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("DEAL_DAMAGE"));

        let deserialized: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
