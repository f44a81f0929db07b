//! Timing of computations.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    /// Times a fallible computation, discarding the timing if it fails.
    pub fn result<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        f().map(|value| Timed {
            value,
            elapsed: start_time.elapsed(),
        })
    }

    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Timed<W> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}
