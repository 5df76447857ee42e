//! Prompt discipline tests.
//!
//! While a prompt is installed the engine accepts exactly one thing: a
//! `ResolvePrompt` from the prompted player with the right id and a legal
//! choice. Everything else is rejected without touching state.

use pocket_tcg::cards::{prompt_opponent_active, CardDefinition, MoveContext, MoveDefinition};
use pocket_tcg::error::Refusal;
use pocket_tcg::{
    Action, CardId, CardRegistry, Effect, Engine, EngineConfig, GameEvent, GameState, InstanceId,
    Phase, PlayerId, Prompt, PromptId, PromptStatus, TargetRef, Zone,
};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

/// Prompt for a target, then draw a card once the target is chosen.
fn strike_and_draw(ctx: &MoveContext<'_>) -> Result<Vec<Effect>, Refusal> {
    let mut effects = prompt_opponent_active(ctx)?;
    effects.push(Effect::draw(ctx.player, 1));
    Ok(effects)
}

fn registry() -> CardRegistry {
    let mut registry = CardRegistry::standard();
    registry.register(
        CardDefinition::pokemon("raichu", "Raichu", 90)
            .with_move(MoveDefinition::new("strike-and-draw", "Strike and Draw", 30, strike_and_draw)),
    );
    registry
}

struct Table {
    engine: Engine,
    state: GameState,
    attacker: InstanceId,
    defender: InstanceId,
    spare: InstanceId,
}

/// Player 0 in ATTACK phase with an active Raichu and one card in deck;
/// player 1 has an active Pikachu.
fn table() -> Table {
    let engine = Engine::new(registry(), EngineConfig::default());
    let mut state = GameState::new("prompts", 2, 99);
    let attacker = state.add_card(P0, CardId::new("raichu"), Zone::Active).unwrap();
    let spare = state.add_card(P0, CardId::new("potion"), Zone::Deck).unwrap();
    let defender = state.add_card(P1, CardId::new("pikachu-basic"), Zone::Active).unwrap();
    state.turn.phase = Phase::Attack;
    Table {
        engine,
        state,
        attacker,
        defender,
        spare,
    }
}

fn attack(table: &mut Table, move_id: &str) -> Prompt {
    let action = Action::Attack {
        player: P0,
        attacker: table.attacker,
        move_id: move_id.to_string(),
    };
    let events = table.engine.apply_action(&mut table.state, &action).unwrap();
    match events.as_slice() {
        [GameEvent::PromptCreated { prompt }] => prompt.clone(),
        other => panic!("expected a single PROMPT_CREATED, got {other:?}"),
    }
}

fn rejected(reason: &str) -> Vec<GameEvent> {
    vec![GameEvent::ActionRejected {
        reason: reason.to_string(),
    }]
}

#[test]
fn test_unknown_move_rejected() {
    let mut table = table();
    let before = table.state.clone();

    let events = table
        .engine
        .apply_action(
            &mut table.state,
            &Action::Attack {
                player: P0,
                attacker: table.attacker,
                move_id: "thunder-jolt".to_string(),
            },
        )
        .unwrap();

    assert_eq!(events, rejected("Unknown move."));
    assert_eq!(table.state, before);
}

#[test]
fn test_other_actions_blocked_while_prompted() {
    let mut table = table();
    let prompt = attack(&mut table, "strike-and-draw");
    assert_eq!(
        table.state.prompt_status(),
        PromptStatus::AwaitingChoice {
            player: P0,
            prompt_id: prompt.id
        }
    );
    let before = table.state.clone();

    for action in [
        Action::StartGame,
        Action::EndTurn { player: P0 },
        Action::AdvancePhase { player: P0 },
        Action::PlayCard { player: P0, instance: table.spare },
        Action::Attack {
            player: P0,
            attacker: table.attacker,
            move_id: "strike-and-draw".to_string(),
        },
    ] {
        let events = table.engine.apply_action(&mut table.state, &action).unwrap();
        assert_eq!(events, rejected("A prompt is awaiting resolution."), "{action:?}");
        assert_eq!(table.state, before);
    }
}

#[test]
fn test_only_prompted_player_may_respond() {
    let mut table = table();
    let prompt = attack(&mut table, "strike-and-draw");
    let before = table.state.clone();

    let events = table
        .engine
        .apply_action(
            &mut table.state,
            &Action::ResolvePrompt {
                player: P1,
                prompt_id: prompt.id,
                choice: TargetRef::Card(table.defender),
            },
        )
        .unwrap();

    assert_eq!(events, rejected("Only the prompted player may respond."));
    assert_eq!(table.state, before);
}

#[test]
fn test_mismatched_id_and_invalid_choice() {
    let mut table = table();
    let prompt = attack(&mut table, "strike-and-draw");
    let before = table.state.clone();

    let stale = Action::ResolvePrompt {
        player: P0,
        prompt_id: PromptId(prompt.id.0 + 100),
        choice: TargetRef::Card(table.defender),
    };
    let off_list = Action::ResolvePrompt {
        player: P0,
        prompt_id: prompt.id,
        choice: TargetRef::Card(table.attacker),
    };

    assert_eq!(
        table.engine.apply_action(&mut table.state, &stale).unwrap(),
        rejected("Prompt id mismatch.")
    );
    assert_eq!(
        table.engine.apply_action(&mut table.state, &off_list).unwrap(),
        rejected("Invalid choice.")
    );
    assert_eq!(table.state, before);
}

#[test]
fn test_continuation_runs_before_frozen_effects() {
    let mut table = table();
    let prompt = attack(&mut table, "strike-and-draw");

    // The draw queued behind the prompt has not run.
    assert_eq!(
        table.state.effect_queue.iter().cloned().collect::<Vec<_>>(),
        vec![Effect::draw(P0, 1)]
    );
    assert!(table.state.player(P0).unwrap().hand.is_empty());

    let events = table
        .engine
        .apply_action(
            &mut table.state,
            &Action::ResolvePrompt {
                player: P0,
                prompt_id: prompt.id,
                choice: TargetRef::Card(table.defender),
            },
        )
        .unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::PromptCleared { prompt_id: prompt.id },
            GameEvent::DamageDealt {
                source: TargetRef::Card(table.attacker),
                target: TargetRef::Card(table.defender),
                amount: 30
            },
            GameEvent::PhaseChanged { phase: Phase::End },
            GameEvent::CardMoved {
                instance: table.spare,
                from: Zone::Deck,
                to: Zone::Hand
            },
        ]
    );
    assert_eq!(table.state.prompt_status(), PromptStatus::Idle);
    assert!(table.state.effect_queue.is_empty());
    assert_eq!(table.state.card(table.defender).unwrap().damage_counters, 30);
}

#[test]
fn test_prompt_is_not_resolvable_twice() {
    let mut table = table();
    let prompt = attack(&mut table, "strike-and-draw");
    let resolve = Action::ResolvePrompt {
        player: P0,
        prompt_id: prompt.id,
        choice: TargetRef::Card(table.defender),
    };

    table.engine.apply_action(&mut table.state, &resolve).unwrap();
    let events = table.engine.apply_action(&mut table.state, &resolve).unwrap();

    assert_eq!(events, rejected("No prompt to resolve."));
    assert_eq!(table.state.card(table.defender).unwrap().damage_counters, 30);
}

#[test]
fn test_prompt_visible_in_both_views() {
    let mut table = table();
    let prompt = attack(&mut table, "strike-and-draw");

    for viewer in [P0, P1] {
        let view = table.engine.view_for(&table.state, viewer);
        assert_eq!(view.prompt.as_ref(), Some(&prompt));
    }
}
