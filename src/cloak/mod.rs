//! Cloak installation: apply a fingerprint record to a browser page.
//!
//! One init script per context; the browser re-evaluates it on every
//! navigation, which is what keeps getter overrides alive across page
//! loads. The installer awaits script registration before anything else
//! touches the page — if a page script runs first, the race is lost and
//! the real environment leaks.

pub mod hooks;
pub mod identity;
pub mod script;
pub mod viewport;

use crate::error::Result;
use crate::fingerprint::record::FingerprintRecord;
use crate::page::Page;
use std::collections::HashMap;
use tracing::debug;

pub use script::{build_init_script, CHROME_BAR_ALLOWANCE};
pub use viewport::ViewportPlan;

/// Minimum working area and instrumentation switches for a cloaked page.
#[derive(Debug, Clone, Copy)]
pub struct CloakOptions {
    /// Minimum usable viewport width.
    pub min_width: u32,
    /// Minimum usable viewport height.
    pub min_height: u32,
    /// Relay override hits and hooked calls to the host logs.
    pub log_overrides: bool,
}

impl Default for CloakOptions {
    fn default() -> Self {
        Self {
            min_width: 1280,
            min_height: 1024,
            log_overrides: false,
        }
    }
}

/// Headers a consumer browser sends that headless defaults omit.
fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Accept-Language".to_string(), "en-US,en;q=0.9".to_string()),
        ("Accept-Encoding".to_string(), "gzip, deflate, br".to_string()),
    ])
}

/// Install the cloak on a page. Resolves once every override is in place;
/// only then is the page safe to navigate.
///
/// The record is read-only and may be shared across any number of pages;
/// each call derives the same viewport plan and script text from it.
/// Installation failure leaves the page unusable — the caller must not
/// navigate it, and any retry policy belongs to the caller.
pub async fn apply_cloak(
    page: &dyn Page,
    record: &FingerprintRecord,
    options: &CloakOptions,
) -> Result<()> {
    debug!(
        user_agent = %record.device.user_agent,
        webgl_renderer = %record.webgl_renderer,
        min_width = options.min_width,
        min_height = options.min_height,
        "installing cloak"
    );

    let plan = ViewportPlan::derive(record, options.min_width, options.min_height);
    let init_script = build_init_script(record, plan, options.log_overrides)?;

    // Must complete before any navigation.
    page.add_init_script(&init_script).await?;

    if options.log_overrides {
        page.relay_console().await?;
    }

    // Prime the getters and prototype patches in a throwaway document.
    page.goto("about:blank").await?;

    page.set_extra_http_headers(&default_headers()).await?;
    page.set_viewport_size(plan.width, plan.height).await?;

    debug!(width = plan.width, height = plan.height, "cloak installed");
    Ok(())
}
