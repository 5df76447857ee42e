//! Rules: validation, translation and the engine entry point.
//!
//! - `ActionTranslator`: checks an action against the rules and produces
//!   its initial effects, or refuses it
//! - `Engine`: `apply_action`, the only operation that changes state
//! - `GameBuilder`: creates a match from decklists

pub mod engine;
pub mod setup;
pub mod translate;

pub use engine::Engine;
pub use setup::GameBuilder;
pub use translate::ActionTranslator;
