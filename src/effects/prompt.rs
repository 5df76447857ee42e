//! Prompts: suspended decision points.
//!
//! At most one prompt exists at a time. While it is installed the effect
//! queue is frozen; only a matching `RESOLVE_PROMPT` from the prompted
//! player can move the game forward.
//!
//! ```text
//!   Idle ──CREATE_PROMPT──▶ AwaitingChoice ──CLEAR_PROMPT──▶ Idle
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::{Effect, TargetRef};
use crate::core::{Phase, PlayerId, PromptId};

/// Kind of question being asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromptKind {
    ChooseTarget,
}

/// What to do once a valid choice arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Continuation {
    /// Damage from an attack.
    AttackDamage { source: TargetRef, damage: u32 },
    /// Damage from a card effect.
    CardEffectDamage { source: TargetRef, damage: u32 },
}

impl Continuation {
    /// Concrete effects for `choice`, clearing `prompt_id` first.
    #[must_use]
    pub fn resolve(self, prompt_id: PromptId, choice: TargetRef) -> Vec<Effect> {
        match self {
            Continuation::AttackDamage { source, damage }
            | Continuation::CardEffectDamage { source, damage } => vec![
                Effect::ClearPrompt { prompt_id },
                Effect::DealDamage {
                    source,
                    target: choice,
                    amount: damage,
                },
                Effect::SetPhase { phase: Phase::End },
            ],
        }
    }
}

/// An outstanding question to one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub kind: PromptKind,
    /// The player who must answer.
    pub player: PlayerId,
    pub message: String,
    /// Every legal answer.
    pub candidates: SmallVec<[TargetRef; 4]>,
    pub continuation: Continuation,
}

impl Prompt {
    /// Create a CHOOSE_TARGET prompt.
    #[must_use]
    pub fn choose_target(
        id: PromptId,
        player: PlayerId,
        message: impl Into<String>,
        candidates: impl IntoIterator<Item = TargetRef>,
        continuation: Continuation,
    ) -> Self {
        Self {
            id,
            kind: PromptKind::ChooseTarget,
            player,
            message: message.into(),
            candidates: candidates.into_iter().collect(),
            continuation,
        }
    }

    /// Whether `choice` is one of the candidates.
    #[must_use]
    pub fn allows(&self, choice: TargetRef) -> bool {
        self.candidates.contains(&choice)
    }
}

/// Where the prompt state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptStatus {
    /// No prompt; the resolver drains freely.
    Idle,
    /// A prompt is installed; resolution is frozen.
    AwaitingChoice { player: PlayerId, prompt_id: PromptId },
}

impl PromptStatus {
    /// Status for an optional installed prompt.
    #[must_use]
    pub fn of(prompt: Option<&Prompt>) -> Self {
        match prompt {
            None => PromptStatus::Idle,
            Some(p) => PromptStatus::AwaitingChoice {
                player: p.player,
                prompt_id: p.id,
            },
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, PromptStatus::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceId;

    fn sample() -> Prompt {
        Prompt::choose_target(
            PromptId(3),
            PlayerId::new(0),
            "Pick one.",
            [TargetRef::Card(InstanceId(7)), TargetRef::Card(InstanceId(8))],
            Continuation::AttackDamage {
                source: TargetRef::Card(InstanceId(1)),
                damage: 30,
            },
        )
    }

    #[test]
    fn test_allows_only_candidates() {
        let prompt = sample();

        assert!(prompt.allows(TargetRef::Card(InstanceId(7))));
        assert!(prompt.allows(TargetRef::Card(InstanceId(8))));
        assert!(!prompt.allows(TargetRef::Card(InstanceId(1))));
    }

    #[test]
    fn test_continuation_effects() {
        let effects = sample()
            .continuation
            .resolve(PromptId(3), TargetRef::Card(InstanceId(8)));

        assert_eq!(
            effects,
            vec![
                Effect::ClearPrompt { prompt_id: PromptId(3) },
                Effect::DealDamage {
                    source: TargetRef::Card(InstanceId(1)),
                    target: TargetRef::Card(InstanceId(8)),
                    amount: 30,
                },
                Effect::SetPhase { phase: Phase::End },
            ]
        );
    }

    #[test]
    fn test_card_effect_damage_resolves_like_attack() {
        let source = TargetRef::Card(InstanceId(2));
        let choice = TargetRef::Card(InstanceId(4));

        let attack = Continuation::AttackDamage { source, damage: 10 }.resolve(PromptId(1), choice);
        let effect = Continuation::CardEffectDamage { source, damage: 10 }.resolve(PromptId(1), choice);

        assert_eq!(attack, effect);
    }

    #[test]
    fn test_status() {
        assert_eq!(PromptStatus::of(None), PromptStatus::Idle);
        assert!(PromptStatus::of(None).is_idle());

        let prompt = sample();
        assert_eq!(
            PromptStatus::of(Some(&prompt)),
            PromptStatus::AwaitingChoice {
                player: PlayerId::new(0),
                prompt_id: PromptId(3)
            }
        );
    }
}
