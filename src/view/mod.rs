//! Per-player projections of game state.
//!
//! Transports push a `GameView`, never a raw `GameState`.

mod redact;

pub use redact::{view_for, CardSlot, GameView, PlayerView, UNKNOWN_CARD};
