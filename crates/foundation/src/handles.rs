/// Generation stamp for one complete result set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u32);

/// Generational handle: `(index, generation)`.
///
/// A handle only addresses the slot it was minted for; once the owner moves to
/// a new generation every older handle stops resolving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u32, u32);

impl Handle {
    pub fn new(index: u32, generation: Generation) -> Self {
        Handle(index, generation.0)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn generation(&self) -> Generation {
        Generation(self.1)
    }
}

/// Monotonic source of generations.
#[derive(Debug, Default, Clone)]
pub struct GenerationCounter {
    latest: Generation,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next generation and makes it the latest.
    pub fn advance(&mut self) -> Generation {
        self.latest = Generation(self.latest.0.wrapping_add(1));
        self.latest
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        self.latest == generation
    }
}
