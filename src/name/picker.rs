use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the random indices used to draw words.
///
/// The generator only ever asks for an index below the length of a pool, so
/// tests can swap in a scripted sequence and walk the collision paths on purpose.
pub trait Picker {
    /// Return an index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}

/// Uniform draws backed by a `rand` generator
#[derive(Debug)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl RandomPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
#[cfg(test)]
pub(crate) struct ScriptedPicker {
    draws: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedPicker {
    pub(crate) fn new(draws: Vec<usize>) -> Self {
        assert!(!draws.is_empty());
        Self { draws, next: 0 }
    }
}

#[cfg(test)]
impl Picker for ScriptedPicker {
    fn pick(&mut self, upper: usize) -> usize {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw % upper
    }
}
