//! Effect system.
//!
//! - `Effect`: atomic, always-applicable state changes
//! - `Prompt`: a suspended decision point with its `Continuation`
//! - `EffectResolver`: drains the queue and emits events
//!
//! Effects are never accepted from outside the engine. Actions are
//! translated into them after validation.

mod effect;
mod prompt;
mod resolver;

pub use effect::{Effect, TargetRef};
pub use prompt::{Continuation, Prompt, PromptKind, PromptStatus};
pub use resolver::EffectResolver;
