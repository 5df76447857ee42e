//! Action validation and translation.
//!
//! `ActionTranslator` checks an action's preconditions and, when they hold,
//! turns it into the initial effects for the resolver. Validation and
//! translation are one pass: no effect is produced until every check has
//! passed, and a failed check never touches the effect queue.
//!
//! The prompt gate runs first for every action. While a prompt is
//! outstanding only `ResolvePrompt` from the prompted player gets past it.

use crate::cards::{CardRegistry, CardType, MoveContext, PlayContext};
use crate::core::{Action, EngineConfig, GameState, InstanceId, Phase, PlayerId, PromptId, Zone};
use crate::effects::{Effect, TargetRef};
use crate::error::{EngineError, Refusal, Rejection};

type Translation = Result<Vec<Effect>, Refusal>;

/// Validates actions and builds their initial effects.
pub struct ActionTranslator<'a> {
    registry: &'a CardRegistry,
    config: &'a EngineConfig,
}

impl<'a> ActionTranslator<'a> {
    /// Create a translator over a card catalog.
    #[must_use]
    pub fn new(registry: &'a CardRegistry, config: &'a EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Validate `action` against `state` and produce its effects.
    ///
    /// Takes the state mutably only to reserve ids (a prompt id for an
    /// attack). Callers translate on a working copy so a refusal leaves the
    /// committed state untouched.
    pub fn translate(&self, state: &mut GameState, action: &Action) -> Translation {
        Self::check_prompt_gate(state, action)?;

        match action {
            Action::StartGame => Ok(self.start_game(state)),
            Action::EndTurn { player } => Self::end_turn(state, *player),
            Action::PlayCard { player, instance } => self.play_card(state, *player, *instance),
            Action::Attack {
                player,
                attacker,
                move_id,
            } => self.attack(state, *player, *attacker, move_id),
            Action::ResolvePrompt {
                player: _,
                prompt_id,
                choice,
            } => Self::resolve_prompt(state, *prompt_id, *choice),
            Action::AdvancePhase { player } => self.advance_phase(state, *player),
        }
    }

    fn check_prompt_gate(state: &GameState, action: &Action) -> Result<(), Rejection> {
        let Some(prompt) = &state.prompt else {
            return Ok(());
        };
        match action {
            Action::ResolvePrompt { player, .. } if *player == prompt.player => Ok(()),
            Action::ResolvePrompt { .. } => Err(Rejection::NotPromptedPlayer),
            _ => Err(Rejection::PromptPending),
        }
    }

    fn check_turn(state: &GameState, player: PlayerId) -> Result<(), Rejection> {
        if state.is_players_turn(player) {
            Ok(())
        } else {
            Err(Rejection::NotYourTurn)
        }
    }

    fn start_game(&self, state: &GameState) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(state.player_count() + 1);
        if self.config.opening_hand > 0 {
            effects.extend(
                state
                    .players
                    .player_ids()
                    .map(|player| Effect::draw(player, self.config.opening_hand)),
            );
        }
        effects.push(Effect::set_phase(Phase::Draw));
        effects
    }

    fn end_turn(state: &GameState, player: PlayerId) -> Translation {
        Self::check_turn(state, player)?;
        Ok(vec![Effect::AdvanceTurn, Effect::set_phase(Phase::Draw)])
    }

    fn advance_phase(&self, state: &GameState, player: PlayerId) -> Translation {
        Self::check_turn(state, player)?;

        match state.turn.phase {
            Phase::Draw => Ok(vec![
                Effect::draw(player, self.config.turn_draw),
                Effect::set_phase(Phase::Main),
            ]),
            Phase::Main => Ok(vec![Effect::set_phase(Phase::Attack)]),
            Phase::Attack => Ok(vec![Effect::set_phase(Phase::End)]),
            Phase::Setup => Err(Rejection::NotStarted.into()),
            // PROMPT is never the current phase while the gate is open.
            Phase::End | Phase::Prompt => Err(Rejection::TurnOver.into()),
        }
    }

    fn play_card(&self, state: &GameState, player: PlayerId, instance: InstanceId) -> Translation {
        Self::check_turn(state, player)?;
        if state.turn.phase != Phase::Main {
            return Err(Rejection::PlayOutsideMain.into());
        }

        let card = state.card(instance)?;
        if card.owner != player {
            return Err(Rejection::NotCardOwner.into());
        }
        if card.zone != Zone::Hand {
            return Err(Rejection::NotInHand.into());
        }

        let definition = self
            .registry
            .get(&card.card_id)
            .ok_or(Rejection::UnknownDefinition)?;

        match definition.card_type {
            CardType::Pokemon => {
                let to = if state.player(player)?.active.is_none() {
                    Zone::Active
                } else {
                    Zone::Bench
                };
                Ok(vec![Effect::move_to(instance, to)])
            }
            CardType::Trainer => {
                let mut effects = match definition.on_play {
                    Some(build) => build(&PlayContext {
                        state,
                        player,
                        source: TargetRef::Card(instance),
                    })?,
                    None => Vec::new(),
                };
                effects.push(Effect::move_to(instance, Zone::Discard));
                Ok(effects)
            }
            CardType::Energy => Err(Rejection::UnplayableType.into()),
        }
    }

    fn attack(
        &self,
        state: &mut GameState,
        player: PlayerId,
        attacker: InstanceId,
        move_id: &str,
    ) -> Translation {
        Self::check_turn(state, player)?;
        if state.turn.phase != Phase::Attack {
            return Err(Rejection::AttackOutsidePhase.into());
        }

        let card = state.card(attacker)?;
        if card.owner != player {
            return Err(Rejection::NotAttackerOwner.into());
        }
        if card.zone != Zone::Active {
            return Err(Rejection::AttackerNotActive.into());
        }

        let card_id = card.card_id.clone();
        let chosen = self
            .registry
            .get(&card_id)
            .and_then(|definition| definition.find_move(move_id))
            .ok_or(Rejection::UnknownMove)?;

        let opponent = state.opponent_of(player)?;
        if state.player(opponent)?.active.is_none() {
            return Err(Rejection::NoOpponentActive.into());
        }

        let prompt_id = state.alloc_prompt_id();
        let effects = (chosen.build)(&MoveContext {
            state: &*state,
            player,
            attacker: TargetRef::Card(attacker),
            damage: chosen.damage,
            prompt_id,
        })?;
        if effects.is_empty() {
            return Err(EngineError::EmptyMove {
                card: card_id,
                move_id: move_id.to_string(),
            }
            .into());
        }
        Ok(effects)
    }

    fn resolve_prompt(state: &GameState, prompt_id: PromptId, choice: TargetRef) -> Translation {
        let prompt = state.prompt.as_ref().ok_or(Rejection::NoPrompt)?;
        if prompt.id != prompt_id {
            return Err(Rejection::PromptMismatch.into());
        }
        if !prompt.allows(choice) {
            return Err(Rejection::InvalidChoice.into());
        }
        Ok(prompt.continuation.resolve(prompt_id, choice))
    }
}
