use thirtyfour::{error::WebDriverError, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

use crate::configuration::WebDriverSettings;

const SCROLL_TO_BOTTOM: &str = "window.scrollTo(0, document.body.scrollHeight);";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),
    #[error("browser session unavailable: {0}")]
    Unavailable(String),
}

/// The browser operations the content loader needs. Implemented by [`Droid`]
/// for a real WebDriver session.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    async fn goto(&self, url: &str) -> Result<(), SessionError>;

    async fn scroll_to_bottom(&self) -> Result<(), SessionError>;

    async fn page_source(&self) -> Result<String, SessionError>;

    /// Ends the session. Consumes the handle so it can only happen once.
    async fn quit(self) -> Result<(), SessionError>;
}

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(settings: &WebDriverSettings) -> Result<Self, SessionError> {
        let mut caps = DesiredCapabilities::chrome();

        if settings.headless {
            caps.add_arg("--headless=new")?;
        }
        caps.add_arg("--disable-gpu")?;
        caps.add_arg(&format!(
            "--window-size={},{}",
            settings.window_width, settings.window_height
        ))?;
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;

        // chromedriver defaults to http://localhost:9515
        let driver = WebDriver::new(settings.server_url.as_str(), caps).await?;

        Ok(Droid { driver })
    }
}

impl BrowserSession for Droid {
    async fn goto(&self, url: &str) -> Result<(), SessionError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> Result<(), SessionError> {
        self.driver.execute(SCROLL_TO_BOTTOM, Vec::new()).await?;
        Ok(())
    }

    async fn page_source(&self) -> Result<String, SessionError> {
        Ok(self.driver.source().await?)
    }

    async fn quit(self) -> Result<(), SessionError> {
        self.driver.quit().await?;
        Ok(())
    }
}
