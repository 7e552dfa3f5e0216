//! Seed hashing and the deterministic draw function.
//!
//! A session seed is hashed once with SHA-512 into a 64-byte digest. The
//! digest is then treated as a pool of 124 independent 4-byte windows:
//! indices 0..=61 read a big-endian u32 at byte offset = index, indices
//! 62..=123 read a little-endian u32 at byte offset = index − 62. Each
//! window normalizes to a float in [0,1), giving up to 124 reproducible
//! draws per seed without re-hashing.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use sha2::{Digest, Sha512};

/// Number of distinct draw windows the 64-byte digest supplies.
pub const DRAW_WINDOWS: u32 = 124;

/// Offset where the little-endian windows begin.
const LE_BASE: u32 = 62;

const DIGEST_LEN: usize = 64;

const UINT32_MAX: f64 = u32::MAX as f64;

/// A session's 512-bit digest plus the draw function bound to it.
///
/// Immutable after construction; cheap to clone and safe to share across
/// any number of browser contexts derived from the same seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDigest {
    bytes: [u8; DIGEST_LEN],
}

impl SessionDigest {
    /// Hash a non-empty session seed into a digest.
    pub fn new(seed: &str) -> Result<Self> {
        if seed.is_empty() {
            return Err(Error::EmptySeed);
        }
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Sha512::digest(seed.as_bytes()));
        Ok(Self { bytes })
    }

    /// The digest encoded as standard base64. Used as the per-session
    /// browser unique ID (`buid`) and as the canvas poison token.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.bytes)
    }

    /// Deterministic draw in [0,1) for the given index.
    ///
    /// Pure in (digest, index); indices wrap modulo 124 so callers can use
    /// any non-negative index. Stateless — concurrent calls share nothing
    /// mutable.
    pub fn draw(&self, index: u32) -> f64 {
        let idx = index % DRAW_WINDOWS;
        let value = if idx < LE_BASE {
            BigEndian::read_u32(&self.window(idx as usize))
        } else {
            LittleEndian::read_u32(&self.window((idx - LE_BASE) as usize))
        };
        f64::from(value) / UINT32_MAX
    }

    /// Read the 4-byte window starting at `offset`. The final window starts
    /// at offset 61 and wraps around the end of the digest.
    fn window(&self, offset: usize) -> [u8; 4] {
        [
            self.bytes[offset % DIGEST_LEN],
            self.bytes[(offset + 1) % DIGEST_LEN],
            self.bytes[(offset + 2) % DIGEST_LEN],
            self.bytes[(offset + 3) % DIGEST_LEN],
        ]
    }
}
