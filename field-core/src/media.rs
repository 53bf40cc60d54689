//! Small helpers for the two media widgets next to the dot field: a
//! playlist embed chosen at random on startup and a picture that cycles
//! through a list on every click.

use rand::Rng;

/// Picks one entry uniformly at random, or `None` for an empty list.
pub fn pick_random<'a>(sources: &'a [String], rng: &mut impl Rng) -> Option<&'a str> {
    if sources.is_empty() {
        return None;
    }
    let i = rng.random_range(0..sources.len());
    Some(sources[i].as_str())
}

/// Click-to-advance cycle over a fixed list of image sources.
#[derive(Clone, Debug)]
pub struct ImageCycle {
    sources: Vec<String>,
    index: usize,
}

impl ImageCycle {
    /// Starts the cycle on the first source.
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources, index: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.sources.get(self.index).map(String::as_str)
    }

    /// Moves to the next source, wrapping to the first after the last.
    pub fn advance(&mut self) -> Option<&str> {
        if self.sources.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.sources.len();
        self.current()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}
