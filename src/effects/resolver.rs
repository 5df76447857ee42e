//! Effect resolution - executing effects on game state.
//!
//! The resolver drains `GameState::effect_queue` one effect at a time and
//! returns the events those effects produced, in order.
//!
//! Draining follows the prompt state machine:
//! - Idle: pop from the front of the queue.
//! - AwaitingChoice: the queue is frozen. Only the first queued
//!   `ClearPrompt` whose id matches the installed prompt may run; it is
//!   taken out of the queue wherever it sits.
//! - Applying a `CreatePrompt` halts draining immediately.
//!
//! The engine queues a prompt resolution's clear and continuation at the
//! front, so the continuation runs right after the clear and before
//! anything that was frozen.

use tracing::{debug, trace};

use crate::core::{GameState, PromptId, Zone};
use crate::error::{EngineError, Result};
use crate::events::GameEvent;
use crate::zones::ZoneManager;

use super::Effect;

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply queued effects until the queue is empty or a prompt halts it.
    ///
    /// On `Err` the state may be partially updated; callers drain a working
    /// copy and discard it on failure.
    pub fn drain(state: &mut GameState) -> Result<Vec<GameEvent>> {
        let mut events = Vec::new();

        loop {
            let next = match state.prompt.as_ref().map(|p| p.id) {
                None => state.effect_queue.pop_front(),
                Some(prompt_id) => Self::take_clear(state, prompt_id),
            };
            let Some(effect) = next else {
                break;
            };

            let halts = matches!(effect, Effect::CreatePrompt { .. });
            Self::apply(state, effect, &mut events)?;

            if halts {
                debug!(
                    game = %state.game_id,
                    queued = state.effect_queue.len(),
                    "resolution suspended on prompt"
                );
                break;
            }
        }

        Ok(events)
    }

    /// Pull the first queued clear for `prompt_id`, leaving the rest in place.
    fn take_clear(state: &mut GameState, prompt_id: PromptId) -> Option<Effect> {
        let index = state.effect_queue.iter().position(
            |effect| matches!(effect, Effect::ClearPrompt { prompt_id: id } if *id == prompt_id),
        )?;
        Some(state.effect_queue.remove(index))
    }

    /// Apply one effect, pushing the events it produces.
    pub fn apply(state: &mut GameState, effect: Effect, events: &mut Vec<GameEvent>) -> Result<()> {
        trace!(game = %state.game_id, ?effect, "applying effect");

        match effect {
            Effect::Draw { player, count } => {
                for _ in 0..count {
                    let Some(instance) = ZoneManager::draw_one(state, player)? else {
                        break;
                    };
                    events.push(GameEvent::CardMoved {
                        instance,
                        from: Zone::Deck,
                        to: Zone::Hand,
                    });
                }
            }

            Effect::MoveCard { instance, to } => {
                let from = ZoneManager::move_card(state, instance, to)?;
                events.push(GameEvent::CardMoved { instance, from, to });
            }

            Effect::DealDamage {
                source,
                target,
                amount,
            } => {
                state.card_mut(target.instance())?.add_damage(amount);
                events.push(GameEvent::DamageDealt {
                    source,
                    target,
                    amount,
                });
            }

            Effect::Heal { target, amount } => {
                state.card_mut(target.instance())?.heal(amount);
                events.push(GameEvent::Healed { target, amount });
            }

            Effect::SetPhase { phase } => {
                state.turn.phase = phase;
                events.push(GameEvent::PhaseChanged { phase });
            }

            Effect::CreatePrompt { prompt } => {
                if let Some(existing) = &state.prompt {
                    return Err(EngineError::PromptOutstanding(existing.id));
                }
                state.prompt = Some(prompt.clone());
                events.push(GameEvent::PromptCreated { prompt });
            }

            Effect::ClearPrompt { prompt_id } => {
                if state.prompt.as_ref().is_some_and(|p| p.id == prompt_id) {
                    state.prompt = None;
                    events.push(GameEvent::PromptCleared { prompt_id });
                }
            }

            Effect::AdvanceTurn => {
                let current = state.turn.active_player;
                let count = state.player_count();
                if count < 2 {
                    return Err(EngineError::NotEnoughPlayers(count));
                }
                let next = state
                    .players
                    .next_after(current)
                    .ok_or(EngineError::MissingPlayer(current))?;

                state.turn.active_player = next;
                state.turn.number += 1;
                events.push(GameEvent::TurnAdvanced {
                    active_player: next,
                    turn_number: state.turn.number,
                });
            }
        }

        Ok(())
    }
}
