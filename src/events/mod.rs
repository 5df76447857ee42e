//! Game events: the outbound wire contract.
//!
//! Clients render against events. Each `apply_action` call returns the
//! authoritative delta for that call as an ordered batch; accepted batches
//! are also appended to the match history.

mod event;

pub use event::GameEvent;
