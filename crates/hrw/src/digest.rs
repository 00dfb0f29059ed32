//! Key digest: FNV-1a over the raw key bytes.
//!
//! The 32-bit digest seeds the weight function. Its bit pattern is part of
//! the interoperability contract, so the algorithm and constants are fixed.

use std::fmt;
use std::hash::Hasher;

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Computes the 32-bit FNV-1a hash of `key`.
#[inline]
pub fn digest(key: &[u8]) -> u32 {
    let mut hasher = Fnv1a32::new();
    hasher.write(key);
    hasher.value()
}

/// Streaming FNV-1a 32-bit hasher.
///
/// Feed bytes with [`Hasher::write`]. Do not use `Hash::hash` on a slice:
/// that prefixes the length and changes the digest.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a32 {
    state: u32,
}

impl Fnv1a32 {
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Current 32-bit hash value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= u32::from(b);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    /// The 32-bit value, zero-extended.
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }
}

/// Signed view of a key's digest, as consumed by the weight function.
///
/// The bit pattern of the unsigned FNV-1a value is preserved; the value may be
/// negative.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct KeyDigest(pub i32);

impl KeyDigest {
    /// Digests a key.
    #[inline]
    pub fn from_key(key: &[u8]) -> Self {
        Self::from_u32(digest(key))
    }

    /// Reinterprets an unsigned digest.
    #[inline]
    pub fn from_u32(value: u32) -> Self {
        KeyDigest(value as i32)
    }
}

impl fmt::Display for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0 as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_offset_basis() {
        assert_eq!(digest(b""), FNV_OFFSET_BASIS);
        assert_eq!(digest(b""), 0x811c_9dc5);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(digest(b"a"), 0xe40c_292c);
        assert_eq!(digest(b"hello, world"), 0x4d0e_a41d);
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let mut hasher = Fnv1a32::new();
        hasher.write(b"hello");
        hasher.write(b", ");
        hasher.write(b"world");
        assert_eq!(hasher.value(), digest(b"hello, world"));
        assert_eq!(hasher.finish(), u64::from(digest(b"hello, world")));
    }

    #[test]
    fn test_signed_reinterpretation() {
        // 0x811c9dc5 has the top bit set.
        assert_eq!(KeyDigest::from_key(b""), KeyDigest(-2_128_831_035));
        assert_eq!(KeyDigest::from_key(b"hello, world"), KeyDigest(1_292_805_149));
        assert_eq!(KeyDigest::from_key(b"").to_string(), "811c9dc5");
    }
}
