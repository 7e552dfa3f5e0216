//! Page abstraction consumed by the cloak installer.
//!
//! The installer only needs four capabilities from a browser page; the
//! trait keeps the cloaking logic independent of the driver and lets
//! tests substitute a recording mock. The production implementation is
//! [`CdpPage`], backed by a `chromiumoxide` page over the Chrome DevTools
//! Protocol.

pub mod cdp;

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub use cdp::CdpPage;

/// A browser page the cloak can be installed on.
///
/// One page = one logical actor. `add_init_script` must register the
/// source to run before any other script in every fresh document of the
/// page — including re-navigations, which the browser re-evaluates it for.
#[async_trait]
pub trait Page: Send + Sync {
    /// Register an init script. Completion means the script is installed;
    /// callers must await this before navigating or page scripts may run
    /// against the unspoofed environment.
    async fn add_init_script(&self, source: &str) -> Result<()>;

    /// Resize the viewport.
    async fn set_viewport_size(&self, width: u32, height: u32) -> Result<()>;

    /// Attach extra HTTP headers to every outgoing request.
    async fn set_extra_http_headers(&self, headers: &HashMap<String, String>) -> Result<()>;

    /// Navigate the page.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Start forwarding the page's console output to the host logs.
    /// Uncaught page exceptions are included, relayed at warn level.
    /// Drivers without console access keep the default no-op.
    async fn relay_console(&self) -> Result<()> {
        Ok(())
    }
}
