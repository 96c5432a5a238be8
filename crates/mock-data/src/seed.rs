//! Deterministic seed derivation from opaque identifiers.
//!
//! An identifier string maps to a stable 64-bit seed via a checksum of its
//! UTF-8 bytes. Combining that seed with a small integer chain key yields
//! per-position seeds, so a template loop over `key = 0..N-1` obtains N
//! distinct-but-reproducible seeds from one identifier.

use sha2::{Digest, Sha256};

/// Derive the stable 64-bit seed for an identifier.
///
/// Pure function of the identifier's UTF-8 bytes: the first eight bytes of
/// its SHA-256 digest, interpreted big-endian. Checksum quality is all that
/// is required here; collisions only weaken the "appears random" property.
#[must_use]
pub fn identifier_seed(identifier: &str) -> u64 {
    let digest = Sha256::digest(identifier.as_bytes());
    digest
        .iter()
        .take(8)
        .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

/// Derive the seed for one chained position under an identifier.
///
/// Defined as `identifier_seed(identifier) + key` with wrapping arithmetic,
/// so negative keys are valid and the result is stable across processes.
#[must_use]
pub fn chained_seed(identifier: &str, key: i64) -> u64 {
    identifier_seed(identifier).wrapping_add(key.cast_unsigned())
}

/// Produce a fresh, intentionally non-reproducible seed.
///
/// Wall-clock nanoseconds since the Unix epoch. Used only for first-time
/// generation, before a payload has acquired its content identifier.
#[must_use]
pub fn fresh_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "nanosecond counter wrap-around is harmless for seeding"
            )]
            {
                elapsed.as_nanos() as u64
            }
        })
}
