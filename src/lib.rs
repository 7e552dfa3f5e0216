//! Deterministic browser-fingerprint synthesis and environment cloaking.
//!
//! An automated Chromium session is trivially identifiable: headless GPU
//! strings, `navigator.webdriver`, default viewport geometry. This crate
//! derives a consistent synthetic consumer identity from an opaque session
//! seed and installs it into a page before any page script runs:
//!
//! 1. [`generate_fingerprint`] hashes the seed into a 512-bit digest and
//!    samples a realistic device profile plus a WebGL identity, bundled as
//!    an immutable [`FingerprintRecord`] with a deterministic draw
//!    function (same seed, same derived values — a session can be replayed
//!    for debugging).
//! 2. [`apply_cloak`] compiles the record into a single init script that
//!    overrides the browser's introspection surfaces as one consistent
//!    unit — screen and window geometry, navigator identity, WebRTC,
//!    permissions, canvas and WebGL — hooks prototype methods for canvas
//!    poisoning, and launders the patched functions' stringified identity.
//!    The returned future resolves only once the overrides are installed;
//!    navigate after that, never before.
//!
//! The workflow driving the browser (login, navigation, scheduling,
//! notifications) lives outside this crate and talks to it through the
//! [`Page`] trait; [`CdpPage`] adapts a `chromiumoxide` page.
//!
//! ```no_run
//! use cloak_engine::{apply_cloak, generate_fingerprint, CloakOptions};
//! # async fn run(page: cloak_engine::CdpPage) -> cloak_engine::Result<()> {
//! let fingerprint = generate_fingerprint("run-2024-06-11", None)?;
//! apply_cloak(&page, &fingerprint, &CloakOptions::default()).await?;
//! // Safe to navigate now: page scripts observe the spoofed environment.
//! # Ok(())
//! # }
//! ```

pub mod cloak;
pub mod error;
pub mod fingerprint;
pub mod page;

pub use cloak::{apply_cloak, build_init_script, CloakOptions, ViewportPlan};
pub use error::{Error, Result};
pub use fingerprint::corpus::{BundledCorpus, DeviceProfile, ProfileCorpus};
pub use fingerprint::record::FingerprintRecord;
pub use fingerprint::{fresh_seed, generate_fingerprint, generate_fingerprint_with};
pub use page::{CdpPage, Page};

/// Initialize tracing for binaries embedding the engine.
///
/// Respects `RUST_LOG`; defaults the crate's own output to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cloak_engine=info".parse().unwrap()),
        )
        .init();
}
