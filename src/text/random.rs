//! Random string generation
//!
//! The default source is a fast, non-cryptographic PRNG (`SmallRng`, one per
//! thread, seeded from OS entropy). Do not use [`random`] for tokens or
//! secrets; pass a secure generator such as `rand::rngs::OsRng` to
//! [`random_with`] instead.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Longest string the script-facing `random` will build
pub const MAX_RANDOM_LENGTH: usize = 1 << 24;

/// The 62 ASCII letters and digits
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

thread_local! {
    static FAST_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Something that can pick an index uniformly from `0..bound`
pub trait RandomSource {
    /// `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// `length` characters drawn uniformly, with replacement, from `charset`.
///
/// An empty `charset` yields an empty string.
pub fn random(length: usize, charset: &str) -> String {
    FAST_RNG.with(|rng| random_with(&mut *rng.borrow_mut(), length, charset))
}

/// Same as [`random`] but with a caller-provided source
pub fn random_with<S: RandomSource>(source: &mut S, length: usize, charset: &str) -> String {
    let pool: Vec<char> = charset.chars().collect();
    if pool.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(length.min(MAX_RANDOM_LENGTH));
    for _ in 0..length {
        out.push(pool[source.next_index(pool.len())]);
    }
    out
}
