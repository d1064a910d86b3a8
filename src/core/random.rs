//! Random stream shared by every rule routine.
//!
//! Rules never draw fresh randomness: they consume a fixed ring of 8192
//! pre-sampled integers in `[0, 100)`. Outcomes of a tick therefore depend
//! on how many draws ran before, in scan order. Continuous draws (particle
//! sizes, grammar pick, producer choice) go through the backing `SmallRng`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const RAND_STREAM_LEN: usize = 8192;

pub struct RandStream {
    values: Box<[u8]>,
    cursor: usize,
    rng: SmallRng,
}

impl RandStream {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let values = (0..RAND_STREAM_LEN)
            .map(|_| rng.gen_range(0..100u8))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { values, cursor: 0, rng }
    }

    /// Stream that always yields `value`. With 0 every `roll < chance` check
    /// passes and every tie-break picks the first candidate.
    pub fn constant(value: u8, seed: u64) -> Self {
        Self {
            values: vec![value.min(99); RAND_STREAM_LEN].into_boxed_slice(),
            cursor: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Next pre-sampled value in `[0, 100)`.
    #[inline]
    pub fn roll(&mut self) -> u8 {
        let v = self.values[self.cursor];
        self.cursor += 1;
        if self.cursor == RAND_STREAM_LEN {
            self.cursor = 0;
        }
        v
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Uniform float in `[0, 1)` from the backing generator.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform index in `[0, n)`; `n` must be non-zero.
    #[inline]
    pub fn index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    /// Pick between two optional candidates. Both present: coin flip on the
    /// stream (`< 50` keeps `a`). One present: that one.
    #[inline]
    pub fn pick_valid(&mut self, a: Option<usize>, b: Option<usize>) -> Option<usize> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if self.roll() < 50 { a } else { b }),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}
