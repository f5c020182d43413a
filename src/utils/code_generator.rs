//! Short code generation.

use rand::Rng;

/// Alphabet for short codes: lowercase, uppercase, digits (62 characters).
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Generates a random 8-character alphanumeric short code.
///
/// Each character is drawn uniformly from the 62-character alphabet, giving
/// 62^8 (~218 trillion) possible codes. The thread-local rng is a CSPRNG,
/// so observed codes do not let a caller predict other active codes.
///
/// No uniqueness check happens here; the link store's unique constraint
/// rejects collisions at insert time and the creation flow retries.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
