//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data plus pure effect builders
//! - `CardInstance`: Runtime card state (zone, owner, damage, statuses)
//! - `CardRegistry`: Read-only definition lookup injected into the engine

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{
    CardDefinition, CardId, CardType, MoveContext, MoveDefinition, MoveFn, PlayContext, PlayFn,
};
pub use instance::{CardInstance, Status};
pub use registry::{prompt_opponent_active, CardRegistry, POTION_HEAL};
