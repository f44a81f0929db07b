pub trait Factorial {
    fn get(&self, n: u8) -> f64;
}

/// Computes factorials on demand. Anything above `170!` is not representable as an `f64` and
/// evaluates to infinity.
#[derive(Default)]
pub struct Calculator;

impl Factorial for Calculator {
    #[inline]
    fn get(&self, n: u8) -> f64 {
        let mut product = 1.0;
        for i in 2..=n {
            product *= i as f64;
        }
        product
    }
}

const MAX_FACTORIAL_ENTRIES: usize = u8::MAX as usize + 1;

/// Precomputed factorials for the entire `u8` domain.
pub struct Lookup {
    entries: [f64; MAX_FACTORIAL_ENTRIES],
}
impl Factorial for Lookup {
    #[inline]
    fn get(&self, n: u8) -> f64 {
        self.entries[n as usize]
    }
}

impl Default for Lookup {
    fn default() -> Self {
        let mut entries = [1.0; MAX_FACTORIAL_ENTRIES];
        for i in 2..MAX_FACTORIAL_ENTRIES {
            entries[i] = i as f64 * entries[i - 1];
        }
        Self { entries }
    }
}
