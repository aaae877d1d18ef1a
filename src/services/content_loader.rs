use std::time::Duration;

use crate::configuration::LoaderSettings;

use super::{BrowserSession, SessionError};

/// Fully rendered markup of the listing page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub markup: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to navigate to {url}")]
    Navigation {
        url: String,
        #[source]
        source: SessionError,
    },
    #[error("failed to scroll the listing on cycle {cycle}")]
    Scroll {
        cycle: u32,
        #[source]
        source: SessionError,
    },
    #[error("failed to capture the rendered page")]
    Capture(#[source] SessionError),
    #[error("run aborted while loading the listing")]
    Aborted,
}

/// Loads a page and forces lazy content to render with a fixed
/// settle-then-scroll budget.
pub struct ContentLoader {
    settle_delay: Duration,
    scroll_cycles: u32,
    scroll_delay: Duration,
}

impl ContentLoader {
    pub fn new(settings: &LoaderSettings) -> Self {
        ContentLoader {
            settle_delay: settings.settle_delay(),
            scroll_cycles: settings.scroll_cycles,
            scroll_delay: settings.scroll_delay(),
        }
    }

    pub async fn load<S: BrowserSession>(
        &self,
        session: &S,
        url: &str,
    ) -> Result<RenderedPage, LoadError> {
        log::info!("Loading webpage {}", url);
        session
            .goto(url)
            .await
            .map_err(|source| LoadError::Navigation {
                url: url.to_string(),
                source,
            })?;
        tokio::time::sleep(self.settle_delay).await;

        log::info!("Scrolling to load all content...");
        for cycle in 1..=self.scroll_cycles {
            session
                .scroll_to_bottom()
                .await
                .map_err(|source| LoadError::Scroll { cycle, source })?;
            tokio::time::sleep(self.scroll_delay).await;
        }

        let markup = session.page_source().await.map_err(LoadError::Capture)?;
        log::debug!("Captured {} bytes of rendered markup", markup.len());

        Ok(RenderedPage { markup })
    }
}
