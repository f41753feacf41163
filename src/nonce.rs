//! Monotonic nonce issuance.
//!
//! The exchange uses millisecond timestamps as replay/ordering protection.
//! A plain `now()` collides as soon as two actions are issued within the same
//! millisecond, so issuance goes through a single locked counter: adopt the
//! wall clock when it has advanced past the last issued value, otherwise
//! increment by one. Nonces track real time whenever calls are spaced out and
//! stay strictly increasing under any interleaving, including a clock that
//! steps backwards.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;

/// Issues strictly increasing millisecond nonces.
///
/// All read-modify-write sequences go through one lock, so issuance is
/// linearizable: any two callers observe distinct, totally ordered values.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: Mutex<u64>,
}

impl NonceGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: Mutex::new(0),
        }
    }

    /// Returns the next nonce. Never fails; a backward clock step degrades to
    /// increment-by-one.
    pub fn next(&self) -> u64 {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now().timestamp_millis().max(0) as u64;
        *last = if now > *last { now } else { *last + 1 };
        *last
    }
}

static SHARED: NonceGenerator = NonceGenerator::new();

/// Next nonce from the process-wide generator.
///
/// All actions signed by one process must draw from the same sequence; use
/// this unless you are running multiple isolated signing identities, in which
/// case give each its own [`NonceGenerator`].
pub fn next_nonce() -> u64 {
    SHARED.next()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn sequential_nonces_strictly_increase() {
        let generator = NonceGenerator::new();
        let mut prev = 0;
        // Far more than one call per millisecond, forcing the increment path.
        for _ in 0..10_000 {
            let nonce = generator.next();
            assert!(nonce > prev, "nonce {nonce} not greater than {prev}");
            prev = nonce;
        }
    }

    #[test]
    fn nonces_track_wall_clock() {
        let generator = NonceGenerator::new();
        let before = Utc::now().timestamp_millis() as u64;
        let nonce = generator.next();
        assert!(nonce >= before);
    }

    #[test]
    fn concurrent_nonces_are_distinct() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 2_000;

        let generator = Arc::new(NonceGenerator::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    let mut seen = Vec::with_capacity(PER_THREAD);
                    for _ in 0..PER_THREAD {
                        seen.push(generator.next());
                    }
                    seen
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            let seen = handle.join().unwrap();
            // Per-thread issuance order is strictly increasing.
            assert!(seen.windows(2).all(|w| w[0] < w[1]));
            for nonce in seen {
                assert!(all.insert(nonce), "duplicate nonce {nonce}");
            }
        }
        assert_eq!(all.len(), THREADS * PER_THREAD);
    }

    #[test]
    fn process_wide_generator_is_shared() {
        let a = next_nonce();
        let b = next_nonce();
        assert!(b > a);
    }
}
