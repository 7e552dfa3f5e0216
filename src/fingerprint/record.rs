//! The immutable fingerprint record passed to the cloak installer.

use crate::fingerprint::corpus::DeviceProfile;
use crate::fingerprint::digest::SessionDigest;
use serde::Serialize;

/// A complete synthetic browser identity.
///
/// Immutable after construction. One record per session seed; share it by
/// reference (or `Arc`) across every browser context derived from that
/// seed — contexts cloaked from the same record present the same identity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintRecord {
    /// The sampled device bundle.
    #[serde(flatten)]
    pub device: DeviceProfile,
    /// Constant vendor reported for UNMASKED_VENDOR_WEBGL.
    pub webgl_vendor: String,
    /// Sampled renderer reported for UNMASKED_RENDERER_WEBGL.
    pub webgl_renderer: String,
    /// Base64 of the session digest; per-session unique ID and canvas
    /// poison token.
    pub buid: String,
    /// The digest backing `draw`. Not serialized into the page.
    #[serde(skip)]
    digest: SessionDigest,
}

impl FingerprintRecord {
    pub(crate) fn new(
        device: DeviceProfile,
        webgl_vendor: String,
        webgl_renderer: String,
        digest: SessionDigest,
    ) -> Self {
        let buid = digest.to_base64();
        Self {
            device,
            webgl_vendor,
            webgl_renderer,
            buid,
            digest,
        }
    }

    /// Deterministic draw in [0,1), bound to this record's digest.
    pub fn draw(&self, index: u32) -> f64 {
        self.digest.draw(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::corpus::{sample_profile, BundledCorpus};
    use crate::fingerprint::webgl::WEBGL_VENDOR;

    fn record_for(seed: &str) -> FingerprintRecord {
        let device = sample_profile(&BundledCorpus, "desktop").unwrap();
        FingerprintRecord::new(
            device,
            WEBGL_VENDOR.to_string(),
            "ANGLE (Intel(R) HD Graphics 4000)".to_string(),
            SessionDigest::new(seed).unwrap(),
        )
    }

    #[test]
    fn test_buid_matches_digest() {
        let record = record_for("abc");
        assert_eq!(record.buid, SessionDigest::new("abc").unwrap().to_base64());
    }

    #[test]
    fn test_draw_delegates_to_digest() {
        let record = record_for("abc");
        let digest = SessionDigest::new("abc").unwrap();
        for i in 0..10 {
            assert_eq!(record.draw(i), digest.draw(i));
        }
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let record = record_for("abc");
        let json = serde_json::to_value(&record).unwrap();
        // Device fields are flattened next to the webgl fields and buid.
        assert!(json.get("userAgent").is_some());
        assert!(json.get("webglVendor").is_some());
        assert!(json.get("webglRenderer").is_some());
        assert!(json.get("buid").is_some());
        // The digest itself never crosses into the page.
        assert!(json.get("digest").is_none());
    }
}
