//! Total accessors over digest bits and bytes.
//!
//! Digests of any length are accepted. Reads outside of the digest never
//! fail: bits default to `false` and bytes wrap around.

/// Returns bit `n`, counting from the least significant bit of byte 0.
pub fn bit(digest: &[u8], n: isize) -> bool {
    if digest.is_empty() || n < 0 {
        return false;
    };
    let byte_index = (n / 8) as usize;
    let bit_index = n % 8;
    match digest.get(byte_index) {
        Some(value) => (value >> bit_index) & 1 == 1,
        None => false,
    }
}

/// Returns byte `n` modulo digest length, or 0 for an empty digest.
pub fn byte(digest: &[u8], n: isize) -> u8 {
    if digest.is_empty() {
        return 0;
    };
    let index = n.rem_euclid(digest.len() as isize) as usize;
    digest[index]
}

/// Accumulates `width` bits starting at `start`, lowest bit first.
pub fn bits_le(digest: &[u8], start: isize, width: u32) -> u32 {
    (0..width).fold(0, |value, offset| {
        if bit(digest, start + offset as isize) {
            value | (1 << offset)
        } else {
            value
        }
    })
}
