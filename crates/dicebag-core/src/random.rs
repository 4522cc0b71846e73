//! Injectable random sources.
//!
//! Every roll and selection takes its random source explicitly. Any
//! [`rand::Rng`] works (typically a seeded [`rand::rngs::StdRng`]), and
//! [`ScriptedSource`] replays a fixed draw sequence for tests.

use rand::Rng;

/// A source of uniform integer draws.
pub trait RandomSource {
    /// Draw a value uniformly from `1..=max`. `max` must be at least 1.
    fn draw(&mut self, max: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn draw(&mut self, max: u32) -> u32 {
        self.random_range(1..=max.max(1))
    }
}

/// A random source that replays a scripted sequence of draws.
///
/// Draws cycle through the script and are clamped into `1..=max`. An empty
/// script always draws 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    /// Create a source that replays `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, max: u32) -> u32 {
        let value = if self.draws.is_empty() {
            1
        } else {
            self.draws[self.next % self.draws.len()]
        };
        self.next += 1;
        value.clamp(1, max.max(1))
    }
}
