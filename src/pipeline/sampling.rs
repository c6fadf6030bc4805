//! Random index sources for test sampling.
//!
//! Sampling only needs "a uniform index below `len`", so that is the whole
//! interface. Every [`rand::Rng`] is an [`IndexSource`]; [`ScriptedIndices`]
//! replays a fixed sequence for tests that assert exact selection order.

use rand::Rng;

/// Supplies uniformly distributed indices
pub trait IndexSource {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays a fixed index sequence, wrapping around at the end.
///
/// Values are reduced modulo `len`, so a script written for one candidate
/// count never produces an out-of-range index for another.
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedIndices {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of indices handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
