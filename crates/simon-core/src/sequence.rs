//! Sources of new sequence elements
//!
//! The model asks an [`IndexSource`] for every new light index. Production
//! code uses a single seeded [`RandomSource`]; tests and replays use a
//! [`ScriptedSource`] so sequences are fully deterministic.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces light indices for sequence growth
pub trait IndexSource: Send {
    /// Return an index in `0..light_count`. `light_count` is never zero.
    fn next_index(&mut self, light_count: usize) -> usize;
}

/// Uniform random indices from one process-wide generator
#[derive(Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Deterministic generator for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl IndexSource for RandomSource {
    fn next_index(&mut self, light_count: usize) -> usize {
        self.rng.gen_range(0..light_count)
    }
}

/// Replays a fixed list of indices, then repeats the last one.
///
/// Values are reduced modulo the light count so a script can never produce
/// an out-of-range index.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
    last: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: 0,
        }
    }
}

impl IndexSource for ScriptedSource {
    fn next_index(&mut self, light_count: usize) -> usize {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last % light_count
    }
}
