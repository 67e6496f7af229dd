use rand::Rng;

/// The input distributions every algorithm is timed against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Uniformly distributed values in `[0, f64::MAX)`.
    Random,
    /// Strictly decreasing values starting at `f64::MAX`, without duplicates.
    Reversed,
}

impl Pattern {
    pub const ALL: [Pattern; 2] = [Pattern::Random, Pattern::Reversed];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Random => "Random",
            Pattern::Reversed => "Reversed",
        }
    }

    /// Overwrites every element of `slice`. Only [`Pattern::Random`] draws from `rng`.
    pub fn fill<R: Rng + ?Sized>(&self, slice: &mut [f64], rng: &mut R) {
        match self {
            Pattern::Random => random(slice, rng),
            Pattern::Reversed => reversed(slice),
        }
    }
}

pub fn random<R: Rng + ?Sized>(slice: &mut [f64], rng: &mut R) {
    for value in slice.iter_mut() {
        *value = rng.gen::<f64>() * f64::MAX;
    }
}

// The step between neighbours is `f64::MAX / len`, far more than one ulp at any magnitude, so
// no two values round to the same double.
pub fn reversed(slice: &mut [f64]) {
    let len = slice.len() as f64;
    for (i, value) in slice.iter_mut().enumerate() {
        *value = f64::MAX * ((len - i as f64) / len);
    }
}
