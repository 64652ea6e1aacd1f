//! # Quote reference
//!
//! Short correlation code handed back to a customer after a quote request, so
//! that follow-up calls and emails can name the request.
//!
//! ## Format
//!
//! `RR-` followed by six uppercase base-36 digits (`0-9A-Z`), encoded from a
//! single pseudo-random draw in `[0, 36^6)`.
//!
//! The reference is never stored and is not checked for collisions. Two
//! requests may receive the same code. That is acceptable for a low-volume
//! contact form and is a known limitation.

use derive_more::Display;
use rand::Rng;
use serde::Serialize;

const PREFIX: &str = "RR-";
const DIGITS: usize = 6;
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// 36^6, the number of distinct codes
const SPACE: u64 = 36u64.pow(DIGITS as u32);

/// Quote reference code (`RR-XXXXXX`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
pub struct Reference(String);

impl Reference {
    /// Draws a new reference from the thread-local RNG
    pub fn generate() -> Self {
        Self::from_draw(rand::rng().random_range(0..SPACE))
    }

    /// Encodes a draw as a reference
    ///
    /// Values outside `[0, 36^6)` wrap around.
    pub fn from_draw(draw: u64) -> Self {
        let mut remaining = draw % SPACE;
        let mut digits = [b'0'; DIGITS];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(remaining % 36) as usize];
            remaining /= 36;
        }

        let code: String = digits.iter().map(|&b| b as char).collect();
        Self(format!("{PREFIX}{code}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
