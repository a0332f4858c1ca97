//! Short code generation and syntactic validation.
//!
//! Validation is pure; generation draws from a seedable PRNG owned by
//! [`CodeGenerator`] rather than ambient global state, so tests can pin a
//! seed and replay candidate sequences.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use url::Url;

/// Length of auto-generated codes. 62^6 ≈ 5.6e10 keys.
pub const GENERATED_CODE_LEN: usize = 6;

/// Shortest and longest accepted custom code.
pub const MIN_CODE_LEN: usize = 6;
pub const MAX_CODE_LEN: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Returns true iff `code` is 6-8 characters of `[A-Za-z0-9]`, nothing else.
pub fn is_valid_code(code: &str) -> bool {
    (MIN_CODE_LEN..=MAX_CODE_LEN).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true iff `target` parses as an absolute URL with scheme
/// `http` or `https`. Malformed input yields false, never an error.
pub fn is_valid_target(target: &str) -> bool {
    match Url::parse(target) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Produces random candidate codes from the 62-character alphabet.
///
/// Uniformity, not unpredictability, is the requirement here; collisions
/// are detected by the store, the generator only has to keep them rare.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Returns a fresh 6-character candidate drawn uniformly from the
    /// alphanumeric alphabet.
    pub fn candidate(&self) -> String {
        let mut rng = self.rng.lock().expect("code generator lock poisoned");
        (0..GENERATED_CODE_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
