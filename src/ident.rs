//! Unique-id generation for roster and catalog entries.
//!
//! Id generation is injected by the caller so library behavior stays
//! deterministic under test: pass [`SequentialIds`] in tests and
//! [`RandomIds`] where collision-resistant ids are wanted. The distributor
//! itself never generates ids and contains no randomness.

use rand::Rng;

/// Source of unique identifiers.
pub trait IdGenerator {
    /// Returns the next unique identifier.
    fn next_id(&mut self) -> String;
}

/// Prefix-plus-counter ids: `s1`, `s2`, `s3`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    counter: u64,
}

impl SequentialIds {
    /// Creates a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }
}

/// Random base-36 ids, nine characters by default.
#[derive(Debug)]
pub struct RandomIds<R: Rng> {
    rng: R,
    length: usize,
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl RandomIds<rand::rngs::ThreadRng> {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RandomIds<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomIds<R> {
    /// Creates a generator backed by the given RNG (seedable for tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng, length: 9 }
    }

    /// Sets the id length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

impl<R: Rng> IdGenerator for RandomIds<R> {
    fn next_id(&mut self) -> String {
        (0..self.length)
            .map(|_| ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}
