// Copyright 2026 the cadence authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Call-site identity derivation.
//!
//! A [`SiteId`] is the 64-bit key under which a call site's timing state is
//! stored. It is derived from a byte description of the call site (by
//! default the `file:line:column` captured via `#[track_caller]`) plus a
//! caller-supplied salt: the description is digested, the digest is folded
//! into 64 bits by XOR-combining its 8-byte little-endian windows, and the
//! salt is XORed in.
//!
//! # Collisions
//!
//! Two unrelated call sites whose contexts fold to the same 64 bits will
//! share one timer and interfere with each other's schedule. This is a
//! known, accepted limitation of the fixed-width identity: it is neither
//! detected nor recovered, since detection would require storing the full
//! context alongside every entry.

use std::panic::Location;

/// Pluggable digest algorithm for [`SiteId`] derivation.
///
/// The digest may be any length; [`SiteId`] folds it into 64 bits
/// regardless. The default is [`Blake3Site`].
pub trait SiteHasher {
    /// Digests the call-context bytes.
    fn digest(&self, context: &[u8]) -> Vec<u8>;
}

/// Default [`SiteHasher`]: blake3, truncated to a 16-byte digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Site;

impl SiteHasher for Blake3Site {
    fn digest(&self, context: &[u8]) -> Vec<u8> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(context);
        let mut out = [0u8; 16];
        hasher.finalize_xof().fill(&mut out);
        out.to_vec()
    }
}

/// A 64-bit call-site identity.
///
/// Equality is bitwise; no ordering is defined. See the
/// [module docs](self) for the derivation and its collision caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteId(u64);

impl SiteId {
    /// Derives an identity from explicit context bytes and a salt, using
    /// the default digest.
    ///
    /// Pure: the same context and salt always produce the same identity.
    #[must_use]
    pub fn derive(context: &[u8], salt: u64) -> Self {
        Self::derive_with(&Blake3Site, context, salt)
    }

    /// Derives an identity using a caller-chosen digest algorithm.
    #[must_use]
    pub fn derive_with<H: SiteHasher + ?Sized>(hasher: &H, context: &[u8], salt: u64) -> Self {
        SiteId(fold(&hasher.digest(context)) ^ salt)
    }

    /// Derives an identity for the caller's source location.
    ///
    /// The location (`file:line:column`) is captured at compile time via
    /// `#[track_caller]`, so every textual call site gets its own identity.
    /// A call site executed in a loop is one location; pass a distinct
    /// `salt` per iteration to split it into independent timers.
    #[must_use]
    #[track_caller]
    pub fn here(salt: u64) -> Self {
        let location = Location::caller();
        let context = format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
        Self::derive(context.as_bytes(), salt)
    }

    /// Returns the raw 64-bit value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Builds an identity from a raw 64-bit value.
    ///
    /// Useful when the caller manages its own key space instead of deriving
    /// identities from call contexts.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        SiteId(raw)
    }
}

/// XOR-folds a digest of any length into 64 bits.
///
/// Bytes are combined as little-endian 8-byte windows; a short final window
/// is implicitly zero-padded.
fn fold(digest: &[u8]) -> u64 {
    let mut acc = 0u64;
    for (i, byte) in digest.iter().enumerate() {
        acc ^= u64::from(*byte) << (8 * (i % 8));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hasher that ignores its input and returns a canned digest, so the
    /// fold can be checked against hand-computed values.
    struct FixedDigest(Vec<u8>);

    impl SiteHasher for FixedDigest {
        fn digest(&self, _context: &[u8]) -> Vec<u8> {
            self.0.clone()
        }
    }

    #[test]
    fn derive_is_deterministic() {
        let a = SiteId::derive(b"src/main.rs:42:9", 0);
        let b = SiteId::derive(b"src/main.rs:42:9", 0);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_contexts_differ() {
        let a = SiteId::derive(b"src/main.rs:42:9", 0);
        let b = SiteId::derive(b"src/main.rs:43:9", 0);
        assert_ne!(a, b);
    }

    #[test]
    fn salt_is_xored_into_fold() {
        let base = SiteId::derive(b"ctx", 0);
        let salted = SiteId::derive(b"ctx", 0xDEAD_BEEF);
        assert_eq!(salted.as_u64(), base.as_u64() ^ 0xDEAD_BEEF);
    }

    #[test]
    fn fold_single_window_is_little_endian() {
        let digest = vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];
        let id = SiteId::derive_with(&FixedDigest(digest), b"", 0);
        assert_eq!(id.as_u64(), 0xFF00_0000_0000_0001);
    }

    #[test]
    fn fold_xors_successive_windows() {
        // Two 8-byte windows: their LE values XOR together.
        let mut digest = vec![0u8; 16];
        digest[0] = 0x0F; // window 0 -> 0x0F
        digest[8] = 0xF0; // window 1 -> 0xF0
        let id = SiteId::derive_with(&FixedDigest(digest), b"", 0);
        assert_eq!(id.as_u64(), 0x0F ^ 0xF0);
    }

    #[test]
    fn fold_zero_pads_short_final_window() {
        // 9 bytes: one full window plus a 1-byte window padded with zeros.
        let mut digest = vec![0u8; 9];
        digest[8] = 0x01;
        let id = SiteId::derive_with(&FixedDigest(digest), b"", 0);
        assert_eq!(id.as_u64(), 0x01);
    }

    #[test]
    fn here_differs_per_line() {
        let a = SiteId::here(0);
        let b = SiteId::here(0);
        assert_ne!(a, b);
    }

    #[test]
    fn here_in_a_loop_needs_salt() {
        let mut unsalted = Vec::new();
        let mut salted = Vec::new();
        for i in 0..4u64 {
            unsalted.push(SiteId::here(0));
            salted.push(SiteId::here(i));
        }
        // One location, one identity -- unless the salt splits it.
        assert!(unsalted.windows(2).all(|w| w[0] == w[1]));
        for i in 0..salted.len() {
            for j in (i + 1)..salted.len() {
                assert_ne!(salted[i], salted[j]);
            }
        }
    }

    #[test]
    fn raw_round_trip() {
        let id = SiteId::from_raw(0x1234_5678_9ABC_DEF0);
        assert_eq!(id.as_u64(), 0x1234_5678_9ABC_DEF0);
    }
}
