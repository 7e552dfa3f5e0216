//! Fingerprint synthesis: seed → digest → sampled device identity.
//!
//! `generate_fingerprint` turns an opaque session seed into a
//! [`FingerprintRecord`]: a device profile sampled as one unit from a
//! realistic corpus, a WebGL identity from a static catalog, and a
//! digest-derived unique ID with a deterministic draw function. The same
//! seed always yields the same digest-derived values, so a session can be
//! reproduced for debugging by replaying its seed.

pub mod corpus;
pub mod digest;
pub mod record;
pub mod webgl;

use crate::error::Result;
use corpus::{sample_profile, BundledCorpus, ProfileCorpus};
use digest::SessionDigest;
use record::FingerprintRecord;
use tracing::debug;
use uuid::Uuid;

/// Default device-category hint.
pub const DEFAULT_DEVICE_CATEGORY: &str = "desktop";

/// Generate a fingerprint record from the bundled corpus.
///
/// `category` is a device-category hint ("desktop", "mobile", "tablet");
/// pass `None` for the desktop default. Fails if the seed is empty or the
/// corpus has no profile for the category.
pub fn generate_fingerprint(seed: &str, category: Option<&str>) -> Result<FingerprintRecord> {
    generate_fingerprint_with(&BundledCorpus, seed, category)
}

/// Generate a fingerprint record from a caller-supplied corpus.
pub fn generate_fingerprint_with(
    corpus: &dyn ProfileCorpus,
    seed: &str,
    category: Option<&str>,
) -> Result<FingerprintRecord> {
    let digest = SessionDigest::new(seed)?;
    let category = category.unwrap_or(DEFAULT_DEVICE_CATEGORY);
    let device = sample_profile(corpus, category)?;
    let renderer = webgl::sample_renderer();

    let record = FingerprintRecord::new(
        device,
        webgl::WEBGL_VENDOR.to_string(),
        renderer.to_string(),
        digest,
    );

    debug!(
        user_agent = %record.device.user_agent,
        platform = %record.device.platform,
        device_category = %record.device.device_category,
        viewport_width = record.device.viewport_width,
        viewport_height = record.device.viewport_height,
        webgl_vendor = %record.webgl_vendor,
        webgl_renderer = %record.webgl_renderer,
        "generated fingerprint"
    );

    Ok(record)
}

/// Mint a fresh opaque session seed.
///
/// For callers that do not carry their own per-run identifier. One seed
/// per automation run; reusing a seed reproduces the digest-derived parts
/// of the identity.
pub fn fresh_seed() -> String {
    Uuid::new_v4().to_string()
}
