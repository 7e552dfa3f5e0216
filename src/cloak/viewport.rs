//! Viewport planning: reconcile the sampled viewport with caller minimums.
//!
//! Appointment pages and other dense UIs need a working area of at least
//! `min_width` × `min_height`; sampled consumer viewports are often
//! smaller. Each axis is clamped independently: an axis that already meets
//! its minimum is kept exactly as sampled, an axis below it is re-derived
//! deterministically into [minimum, screen dimension] using the record's
//! draw function, so the same seed always plans the same viewport.

use crate::fingerprint::record::FingerprintRecord;
use serde::Serialize;

/// Draw index used for the width axis.
const WIDTH_DRAW: u32 = 0;
/// Draw index used for the height axis.
const HEIGHT_DRAW: u32 = 1;

/// The window geometry the cloaked context will present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportPlan {
    pub width: u32,
    pub height: u32,
    pub is_landscape: bool,
}

impl ViewportPlan {
    /// Plan the viewport for a record under the given minimums.
    pub fn derive(record: &FingerprintRecord, min_width: u32, min_height: u32) -> Self {
        let width = clamp_axis(
            record.device.viewport_width,
            record.device.screen_width,
            min_width,
            record.draw(WIDTH_DRAW),
        );
        let height = clamp_axis(
            record.device.viewport_height,
            record.device.screen_height,
            min_height,
            record.draw(HEIGHT_DRAW),
        );
        Self {
            width,
            height,
            is_landscape: width >= height,
        }
    }
}

/// Clamp one axis. A sampled value at or above the minimum passes through
/// unchanged; below it, re-derive into [minimum, screen] from the draw.
fn clamp_axis(sampled: u32, screen: u32, minimum: u32, draw: f64) -> u32 {
    if sampled >= minimum {
        return sampled;
    }
    let span = screen.saturating_sub(minimum);
    minimum + (draw * f64::from(span)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::corpus::DeviceProfile;
    use crate::fingerprint::digest::SessionDigest;
    use crate::fingerprint::webgl::WEBGL_VENDOR;

    fn record_with(viewport: (u32, u32), screen: (u32, u32)) -> FingerprintRecord {
        let device = DeviceProfile {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) TestKit/1.0".to_string(),
            platform: "Win32".to_string(),
            app_name: "Netscape".to_string(),
            device_category: "desktop".to_string(),
            viewport_width: viewport.0,
            viewport_height: viewport.1,
            screen_width: screen.0,
            screen_height: screen.1,
        };
        FingerprintRecord::new(
            device,
            WEBGL_VENDOR.to_string(),
            "ANGLE (Intel(R) HD Graphics 4000)".to_string(),
            SessionDigest::new("viewport-test").unwrap(),
        )
    }

    #[test]
    fn test_axis_below_minimum_scales_into_screen_range() {
        let record = record_with((800, 600), (1920, 1080));
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        assert!((1280..=1920).contains(&plan.width), "width {}", plan.width);
        assert!((1024..=1080).contains(&plan.height), "height {}", plan.height);
    }

    #[test]
    fn test_axis_meeting_minimum_is_unchanged() {
        let record = record_with((1600, 900), (1920, 1080));
        let plan = ViewportPlan::derive(&record, 1280, 720);
        assert_eq!(plan.width, 1600);
        assert_eq!(plan.height, 900);
    }

    #[test]
    fn test_axes_clamp_independently() {
        // Width passes, height is below minimum: only height re-derives.
        let record = record_with((1600, 600), (1920, 1080));
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        assert_eq!(plan.width, 1600);
        assert!((1024..=1080).contains(&plan.height));
    }

    #[test]
    fn test_deterministic_per_seed() {
        let record = record_with((800, 600), (1920, 1080));
        let a = ViewportPlan::derive(&record, 1280, 1024);
        let b = ViewportPlan::derive(&record, 1280, 1024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_screen_smaller_than_minimum_pins_to_minimum() {
        let record = record_with((800, 600), (1024, 768));
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        assert_eq!(plan.width, 1280);
        assert_eq!(plan.height, 1024);
    }

    #[test]
    fn test_landscape_flag_follows_dimensions() {
        let record = record_with((1600, 900), (1920, 1080));
        let plan = ViewportPlan::derive(&record, 0, 0);
        assert!(plan.is_landscape);

        let portrait = record_with((393, 852), (393, 852));
        let plan = ViewportPlan::derive(&portrait, 0, 0);
        assert!(!plan.is_landscape);
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = record_with((800, 600), (1920, 1080));
        let plan = ViewportPlan::derive(&record, 1280, 1024);
        let json = serde_json::to_value(plan).unwrap();
        assert!(json.get("isLandscape").is_some());
    }
}
