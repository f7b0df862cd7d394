//! Random password generation.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// Characters eligible for generated passwords: letters, digits and the
/// 32 ASCII punctuation symbols.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Length used when none is configured.
pub const DEFAULT_LENGTH: usize = 12;

/// Returns `length` characters drawn uniformly from [`ALPHABET`].
///
/// Randomness comes from the operating system CSPRNG. A zero length yields
/// an empty string.
pub fn generate(length: usize) -> String {
    let mut rng = OsRng.unwrap_err();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
