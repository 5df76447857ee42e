//! # pocket-tcg
//!
//! An authoritative, deterministic rules engine for a two-player
//! Pokémon-style trading card game.
//!
//! ## Design Principles
//!
//! 1. **One Entry Point**: `Engine::apply_action` is the only way state
//!    changes. It either commits fully or leaves the state untouched.
//!
//! 2. **Actions In, Events Out**: clients submit `Action`s; the engine
//!    validates them, translates them into internal `Effect`s, drains those
//!    and returns `GameEvent`s.
//!
//! 3. **Waiting Is State**: a choice the engine needs mid-resolution is a
//!    `Prompt` stored in `GameState`. Nothing suspends.
//!
//! ## Architecture
//!
//! - **Deterministic**: the RNG seed lives in `GameState`, so a snapshot plus
//!   an action log replays a match bit for bit.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, which makes the
//!   clone-and-commit transaction in `apply_action` cheap.
//!
//! ## Modules
//!
//! - `core`: ids, players, state, actions, RNG, configuration
//! - `cards`: card definitions, instances and the registry
//! - `zones`: card movement between a player's zones
//! - `effects`: effects, prompts and the resolver
//! - `events`: the outbound event contract
//! - `rules`: validation, translation, the engine and match setup
//! - `view`: per-player redacted views
//! - `error`: fatal errors and rule rejections
//!
//! ## Example
//!
//! ```
//! use pocket_tcg::{Action, Engine, GameBuilder, GameEvent, Phase};
//!
//! let engine = Engine::standard();
//! let mut state = GameBuilder::new("demo")
//!     .seed(7)
//!     .player(["pikachu-basic", "potion"])
//!     .player(["pikachu-basic"])
//!     .build(engine.registry())
//!     .unwrap();
//!
//! let events = engine.apply_action(&mut state, &Action::StartGame).unwrap();
//! assert_eq!(events, vec![GameEvent::PhaseChanged { phase: Phase::Draw }]);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod events;
pub mod rules;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, EngineConfig, GameRng, GameState, InstanceId, Phase, PlayerId, PlayerMap,
    PlayerState, PromptId, TurnState, Zone,
};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardRegistry, CardType, MoveDefinition, Status,
};

pub use crate::zones::ZoneManager;

pub use crate::effects::{
    Continuation, Effect, EffectResolver, Prompt, PromptKind, PromptStatus, TargetRef,
};

pub use crate::events::GameEvent;

pub use crate::rules::{ActionTranslator, Engine, GameBuilder};

pub use crate::view::{view_for, CardSlot, GameView, PlayerView};

pub use crate::error::{EngineError, Rejection};
