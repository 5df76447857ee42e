//! The engine: the single entry point that changes game state.
//!
//! `apply_action` is transactional. It translates and resolves on an O(1)
//! clone of the state and commits the clone only when everything succeeded:
//!
//! | Outcome   | Returns                          | State      | History   |
//! |-----------|----------------------------------|------------|-----------|
//! | accepted  | `Ok(events)`                     | committed  | appended  |
//! | rejected  | `Ok([ACTION_REJECTED])`          | untouched  | untouched |
//! | fatal     | `Err(EngineError)`               | untouched  | untouched |

use tracing::{debug, error};

use crate::cards::CardRegistry;
use crate::core::{Action, EngineConfig, GameState, PlayerId};
use crate::effects::EffectResolver;
use crate::error::{EngineError, Refusal, Result};
use crate::events::GameEvent;
use crate::view::{self, GameView};

use super::translate::ActionTranslator;

/// Rules engine over a fixed card catalog.
///
/// Holds no per-match data, so one engine can serve any number of matches.
/// The caller must serialize calls per `GameState`.
#[derive(Debug)]
pub struct Engine {
    registry: CardRegistry,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine.
    #[must_use]
    pub fn new(registry: CardRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Engine over the standard catalog with default configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CardRegistry::standard(), EngineConfig::default())
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate, translate and fully resolve one action.
    ///
    /// Returns the events of this call. A rule violation is reported as a
    /// single `ActionRejected` event and is not recorded in history.
    pub fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<Vec<GameEvent>> {
        let mut working = state.clone();
        let translator = ActionTranslator::new(&self.registry, &self.config);

        let effects = match translator.translate(&mut working, action) {
            Ok(effects) => effects,
            Err(Refusal::Rejected(rejection)) => {
                debug!(
                    game = %state.game_id,
                    action = action.kind(),
                    reason = %rejection,
                    "action rejected"
                );
                return Ok(vec![GameEvent::rejected(rejection)]);
            }
            Err(Refusal::Fatal(err)) => return Err(Self::fatal(state, action, err)),
        };

        // A prompt resolution runs its clear and continuation ahead of the
        // effects frozen behind the prompt.
        if working.prompt.is_some() {
            working.enqueue_front(effects);
        } else {
            working.enqueue(effects);
        }
        let events = EffectResolver::drain(&mut working).map_err(|err| Self::fatal(state, action, err))?;

        working.history.extend(events.iter().cloned());
        *state = working;

        debug!(
            game = %state.game_id,
            action = action.kind(),
            player = ?action.player(),
            events = events.len(),
            turn = state.turn.number,
            phase = %state.turn.phase,
            "action applied"
        );
        Ok(events)
    }

    /// Redacted snapshot of `state` for `viewer`.
    #[must_use]
    pub fn view_for(&self, state: &GameState, viewer: PlayerId) -> GameView {
        view::view_for(state, viewer)
    }

    fn fatal(state: &GameState, action: &Action, err: EngineError) -> EngineError {
        error!(
            game = %state.game_id,
            action = action.kind(),
            error = %err,
            "invariant violated; match state not committed"
        );
        err
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{InstanceId, Phase, Zone};
    use crate::error::Rejection;
    use crate::view::CardSlot;

    fn state_in(phase: Phase) -> GameState {
        let mut state = GameState::new("engine", 2, 11);
        state.turn.phase = phase;
        state
    }

    #[test]
    fn test_accepted_action_commits_and_records() {
        let engine = Engine::standard();
        let mut state = state_in(Phase::Setup);

        let events = engine.apply_action(&mut state, &Action::StartGame).unwrap();

        assert_eq!(events, vec![GameEvent::PhaseChanged { phase: Phase::Draw }]);
        assert_eq!(state.turn.phase, Phase::Draw);
        assert_eq!(state.history.iter().cloned().collect::<Vec<_>>(), events);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let engine = Engine::standard();
        let mut state = state_in(Phase::Main);
        let before = state.clone();

        let events = engine
            .apply_action(&mut state, &Action::EndTurn { player: PlayerId::new(1) })
            .unwrap();

        assert_eq!(events, vec![GameEvent::rejected(Rejection::NotYourTurn)]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejected_attack_does_not_consume_id() {
        let engine = Engine::standard();
        let mut state = state_in(Phase::Attack);
        let attacker = state
            .add_card(PlayerId::new(0), CardId::new("pikachu-basic"), Zone::Active)
            .unwrap();
        let before = state.clone();

        let events = engine
            .apply_action(
                &mut state,
                &Action::Attack {
                    player: PlayerId::new(0),
                    attacker,
                    move_id: "thunder-jolt".to_string(),
                },
            )
            .unwrap();

        assert!(events[0].is_rejection());
        assert_eq!(state.next_id(), before.next_id());
        assert_eq!(state, before);
    }

    #[test]
    fn test_fatal_error_leaves_state_untouched() {
        let engine = Engine::standard();
        let mut state = state_in(Phase::Main);
        let before = state.clone();

        let err = engine
            .apply_action(
                &mut state,
                &Action::PlayCard { player: PlayerId::new(0), instance: InstanceId(77) },
            )
            .unwrap_err();

        assert_eq!(err, EngineError::MissingCard(InstanceId(77)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_fatal_during_resolution_rolls_back() {
        let engine = Engine::standard();
        let mut state = GameState::new("solo", 1, 3);
        state.turn.phase = Phase::Main;
        let before = state.clone();

        let err = engine
            .apply_action(&mut state, &Action::EndTurn { player: PlayerId::new(0) })
            .unwrap_err();

        assert_eq!(err, EngineError::NotEnoughPlayers(1));
        assert_eq!(state, before);
    }

    #[test]
    fn test_view_for_delegates() {
        let engine = Engine::standard();
        let mut state = state_in(Phase::Main);
        let id = state
            .add_card(PlayerId::new(1), CardId::new("potion"), Zone::Hand)
            .unwrap();

        let own = engine.view_for(&state, PlayerId::new(1));
        let other = engine.view_for(&state, PlayerId::new(0));

        assert_eq!(own.players[1].hand, vec![CardSlot::Known(id)]);
        assert_eq!(other.players[1].hand, vec![CardSlot::Hidden]);
    }
}
