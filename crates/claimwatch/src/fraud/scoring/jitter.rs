use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of distinct jitter points, `0..JITTER_SPAN`.
pub const JITTER_SPAN: u8 = 15;

const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// Source of uniform samples in `[0, 1)` for the scoring jitter term.
///
/// Passed explicitly into the scorer so tests can pin the sample.
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Always yields the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    pub const ZERO: FixedJitter = FixedJitter(0.0);
}

impl JitterSource for FixedJitter {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngJitter<R>(R);

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngJitter<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Draw one sample and turn it into whole jitter points in `0..JITTER_SPAN`.
///
/// Out-of-range and NaN samples are pulled back into `[0, 1)` first.
pub(crate) fn draw_points<J: JitterSource + ?Sized>(source: &mut J) -> u8 {
    let sample = source.next_unit();
    let unit = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(0.0, MAX_UNIT)
    };
    (unit * f64::from(JITTER_SPAN)).floor() as u8
}
