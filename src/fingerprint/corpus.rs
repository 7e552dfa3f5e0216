//! Device-profile corpus: realistic user-agent bundles.
//!
//! A profile is sampled as one unit — user agent, platform, viewport and
//! screen dimensions all come from the same real-world device entry, never
//! mixed across entries. Mixing would produce internally inconsistent
//! identities (an iPhone user agent with a 1920×1080 screen) that
//! fingerprinting scripts flag immediately.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Embedded corpus of real-world device profiles.
const DEVICE_PROFILES_JSON: &str = include_str!("device_profiles.json");

/// How many candidate profiles the sampler draws before picking one.
pub const SAMPLE_CANDIDATES: usize = 1000;

/// One observable device identity, sampled as a unit.
///
/// Field names follow the upstream user-agent corpus (camelCase on the
/// wire), which is also what the injected script expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub user_agent: String,
    pub platform: String,
    pub app_name: String,
    pub device_category: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub screen_width: u32,
    pub screen_height: u32,
}

/// Source of realistic device profiles for a category hint.
///
/// The default implementation is [`BundledCorpus`]; callers with a richer
/// corpus (live user-agent feeds, per-region distributions) implement this
/// trait and pass their own source to
/// [`generate_fingerprint_with`](crate::fingerprint::generate_fingerprint_with).
pub trait ProfileCorpus: Send + Sync {
    /// Draw up to `count` candidate profiles matching the category hint.
    fn candidates(&self, category: &str, count: usize) -> Vec<DeviceProfile>;
}

/// The corpus bundled with the crate, loaded once from embedded JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledCorpus;

fn bundled_profiles() -> &'static [DeviceProfile] {
    static PROFILES: OnceLock<Vec<DeviceProfile>> = OnceLock::new();
    PROFILES.get_or_init(|| serde_json::from_str(DEVICE_PROFILES_JSON).unwrap_or_default())
}

impl ProfileCorpus for BundledCorpus {
    fn candidates(&self, category: &str, count: usize) -> Vec<DeviceProfile> {
        let mut rng = rand::thread_rng();
        let pool: Vec<&DeviceProfile> = bundled_profiles()
            .iter()
            .filter(|p| p.device_category == category)
            .collect();
        if pool.is_empty() {
            return Vec::new();
        }
        (0..count)
            .filter_map(|_| pool.choose(&mut rng).map(|p| (*p).clone()))
            .collect()
    }
}

/// Sample one profile for the category from the given corpus.
///
/// Draws a batch of candidates and picks one at random. Selection is
/// deliberately not seed-deterministic (the reference behavior); the
/// deterministic parts of the identity all derive from the session digest.
pub fn sample_profile(corpus: &dyn ProfileCorpus, category: &str) -> Result<DeviceProfile> {
    let candidates = corpus.candidates(category, SAMPLE_CANDIDATES);
    candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| Error::EmptyCorpus {
            category: category.to_string(),
        })
}
