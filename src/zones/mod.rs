//! Zone system for card locations.
//!
//! Every player owns five zones: DECK, HAND, DISCARD, BENCH and a single
//! ACTIVE slot. All movement between them goes through `ZoneManager`, which
//! keeps the player's collections and each card's recorded zone in step.

mod manager;

pub use manager::ZoneManager;
