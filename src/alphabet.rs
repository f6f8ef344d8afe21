//! # Alphabet
//!
//! The fixed set of characters every generated string is drawn from.

/// Alphabet used for generated strings (lowercase, uppercase, digits)
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyz\
                                  ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  0123456789";

/// Number of characters in the alphabet
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Random bytes at or above this value are rejected.
///
/// It is the largest multiple of [`ALPHABET_LEN`] not exceeding 256, so every
/// accepted byte maps onto exactly four byte values per character.
pub const ACCEPT_LIMIT: u8 = (256 / ALPHABET_LEN * ALPHABET_LEN) as u8;

/// Map a random byte onto the alphabet, or `None` if it must be redrawn.
#[inline]
pub fn select(byte: u8) -> Option<char> {
    if byte < ACCEPT_LIMIT {
        Some(ALPHABET[byte as usize % ALPHABET_LEN] as char)
    } else {
        None
    }
}

/// Check if a character is part of the alphabet
pub fn contains(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Position of a character in the alphabet
pub fn index_of(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize + 26),
        '0'..='9' => Some(c as usize - '0' as usize + 52),
        _ => None,
    }
}
