//! Core engine types: ids, players, state, actions, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `rules`, state changes in
//! `effects`.

pub mod action;
pub mod config;
pub mod ids;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::{EngineConfig, Phase, Zone};
pub use ids::{InstanceId, PromptId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, PlayerState, TurnState};
