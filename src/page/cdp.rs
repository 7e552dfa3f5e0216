//! Chrome DevTools Protocol implementation of [`Page`].

use crate::error::{Error, Result};
use crate::page::Page;
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::network::{Headers, SetExtraHttpHeadersParams};
use chromiumoxide::cdp::browser_protocol::page::AddScriptToEvaluateOnNewDocumentParams;
use chromiumoxide::cdp::js_protocol::runtime::{EventConsoleApiCalled, EventExceptionThrown};
use futures::StreamExt;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A `chromiumoxide` page speaking CDP.
pub struct CdpPage {
    inner: chromiumoxide::Page,
}

impl CdpPage {
    pub fn new(page: chromiumoxide::Page) -> Self {
        Self { inner: page }
    }

    /// The underlying driver page, for workflow code that needs more than
    /// the cloak surface.
    pub fn inner(&self) -> &chromiumoxide::Page {
        &self.inner
    }
}

#[async_trait]
impl Page for CdpPage {
    async fn add_init_script(&self, source: &str) -> Result<()> {
        let params = AddScriptToEvaluateOnNewDocumentParams::builder()
            .source(source)
            .build()
            .map_err(Error::injection)?;
        self.inner
            .execute(params)
            .await
            .map_err(Error::injection)?;
        Ok(())
    }

    async fn set_viewport_size(&self, width: u32, height: u32) -> Result<()> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(width))
            .height(i64::from(height))
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(Error::injection)?;
        self.inner
            .execute(params)
            .await
            .map_err(|e| Error::Page(anyhow::anyhow!(e)))?;
        Ok(())
    }

    async fn set_extra_http_headers(&self, headers: &HashMap<String, String>) -> Result<()> {
        let map = serde_json::to_value(headers)
            .map_err(|e| Error::Page(anyhow::anyhow!(e)))?;
        let params = SetExtraHttpHeadersParams::new(Headers::new(map));
        self.inner
            .execute(params)
            .await
            .map_err(|e| Error::Page(anyhow::anyhow!(e)))?;
        Ok(())
    }

    async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::Page(anyhow::anyhow!(e)))?;
        Ok(())
    }

    async fn relay_console(&self) -> Result<()> {
        let mut events = self
            .inner
            .event_listener::<EventConsoleApiCalled>()
            .await
            .map_err(|e| Error::Page(anyhow::anyhow!(e)))?;

        tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let text = event
                    .args
                    .iter()
                    .filter_map(|arg| arg.value.as_ref())
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                debug!(kind = ?event.r#type, "page console: {text}");
            }
        });

        let mut errors = self
            .inner
            .event_listener::<EventExceptionThrown>()
            .await
            .map_err(|e| Error::Page(anyhow::anyhow!(e)))?;

        tokio::spawn(async move {
            while let Some(event) = errors.next().await {
                let details = &event.exception_details;
                let description = details
                    .exception
                    .as_ref()
                    .and_then(|e| e.description.clone())
                    .unwrap_or_else(|| details.text.clone());
                warn!(line = details.line_number, "page error: {description}");
            }
        });
        Ok(())
    }
}
