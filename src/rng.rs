//! Process-wide random source shared by every shuffle that is not given its own.
//!
//! The generator is a single [`ChaCha8Rng`] seeded from the wall clock the
//! first time any [`SharedRng`] handle draws from it. It is never reseeded
//! afterwards, so repeated games in one process keep consuming one stream.
//!
//! Tests and replays should pass their own seeded generator instead.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

static SHARED: Mutex<Option<ChaCha8Rng>> = Mutex::new(None);

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    // Fold the high bits in so distant timestamps still differ.
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

fn lock() -> MutexGuard<'static, Option<ChaCha8Rng>> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_shared<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut guard = lock();
    let rng = guard.get_or_insert_with(|| ChaCha8Rng::seed_from_u64(clock_seed()));
    f(rng)
}

/// Handle to the process-wide random source.
///
/// Handles are free to create; all of them draw from the same generator.
///
/// ```
/// use rand::Rng;
///
/// let mut rng = suitmatch::rng::shared();
/// let roll: u8 = rng.random_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRng;

/// Returns a handle to the process-wide random source.
#[must_use]
pub const fn shared() -> SharedRng {
    SharedRng
}

/// Returns whether the process-wide source has been seeded yet.
#[must_use]
pub fn is_seeded() -> bool {
    lock().is_some()
}

impl RngCore for SharedRng {
    fn next_u32(&mut self) -> u32 {
        with_shared(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        with_shared(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        with_shared(|rng| rng.fill_bytes(dst));
    }
}
