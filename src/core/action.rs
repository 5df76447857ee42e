//! Actions: the only input the engine accepts from outside.
//!
//! Each variant carries the minimum fields needed to validate and translate
//! it. The caller is trusted to have authenticated `player`.

use serde::{Deserialize, Serialize};

use super::ids::{InstanceId, PromptId};
use super::player::PlayerId;
use crate::effects::TargetRef;

/// An externally submitted request to change game state.
///
/// ```
/// use pocket_tcg::core::{Action, InstanceId, PlayerId};
///
/// let play = Action::PlayCard { player: PlayerId::new(0), instance: InstanceId(4) };
/// assert_eq!(play.player(), Some(PlayerId::new(0)));
/// assert_eq!(Action::StartGame.player(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    StartGame,
    EndTurn {
        player: PlayerId,
    },
    PlayCard {
        player: PlayerId,
        instance: InstanceId,
    },
    Attack {
        player: PlayerId,
        attacker: InstanceId,
        move_id: String,
    },
    ResolvePrompt {
        player: PlayerId,
        prompt_id: PromptId,
        choice: TargetRef,
    },
    /// Step the active player's turn forward (DRAW → MAIN → ATTACK → END).
    AdvancePhase {
        player: PlayerId,
    },
}

impl Action {
    /// The acting player, if the action has one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Action::StartGame => None,
            Action::EndTurn { player }
            | Action::PlayCard { player, .. }
            | Action::Attack { player, .. }
            | Action::ResolvePrompt { player, .. }
            | Action::AdvancePhase { player } => Some(*player),
        }
    }

    /// Wire name of the action kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::StartGame => "START_GAME",
            Action::EndTurn { .. } => "END_TURN",
            Action::PlayCard { .. } => "PLAY_CARD",
            Action::Attack { .. } => "ATTACK",
            Action::ResolvePrompt { .. } => "RESOLVE_PROMPT",
            Action::AdvancePhase { .. } => "ADVANCE_PHASE",
        }
    }
}
