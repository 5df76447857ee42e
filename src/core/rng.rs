//! Deterministic random number generation stored inside game state.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed and same call count produce bit-identical
//!   output, so replaying an action log from a snapshot reproduces a match.
//! - **Serializable**: the whole generator is one `u32`, persisted with the
//!   rest of `GameState`.
//! - **`rand` compatible**: implements `rand::RngCore`, so shuffles and
//!   range sampling use `rand`'s algorithms while consuming only this stream.
//!
//! The generator is the classic 32-bit LCG
//! `seed' = (1664525 * seed + 1013904223) mod 2^32`.
//!
//! ```
//! use pocket_tcg::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.rand01(), b.rand01());
//! assert_eq!(a.seed(), b.seed());
//! ```

use rand::RngCore;
use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Linear-congruential generator persisted in game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRng {
    seed: u32,
}

impl GameRng {
    /// Create a generator with the given seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Current seed (the last emitted raw value).
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Advance one step and return the new raw value.
    pub fn step(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Advance one step and return a value in `[0, 1)`.
    pub fn rand01(&mut self) -> f64 {
        f64::from(self.step()) / MODULUS
    }

    /// Shuffle a slice in place using this stream.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(self);
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
