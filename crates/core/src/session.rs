//! Scoped browser session.
//!
//! A [`BrowserSession`] owns the Chromium process, the driver's event loop
//! task, and one page. Dropping the session kills the browser, so no exit
//! path can leak a running Chromium — the consuming [`BrowserSession::close`]
//! is the orderly variant that waits for the process to exit.

use std::path::Path;
use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{CdpError, Error, Result};

/// Browser launch configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run without a visible window.
    pub headless: bool,
    /// Viewport width and height in pixels.
    pub window_size: (u32, u32),
    /// Timeout applied to each driver request.
    pub request_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1280, 720),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl SessionConfig {
    /// Switches the session to a visible browser window.
    pub fn headful(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Overrides the per-request driver timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Active browser session used by command flows.
///
/// Owns the browser instance and the single page commands operate on. The
/// page cannot outlive the browser, and the browser cannot outlive the
/// session.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    /// Launches a session with default configuration.
    pub async fn launch() -> Result<Self> {
        Self::launch_with(SessionConfig::default()).await
    }

    /// Launches a browser and opens its page.
    pub async fn launch_with(config: SessionConfig) -> Result<Self> {
        debug!(target = "pagecheck", headless = config.headless, "launching browser...");

        let mut builder = BrowserConfig::builder()
            .window_size(config.window_size.0, config.window_size.1)
            .request_timeout(config.request_timeout);
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(Error::Launch)?;

        let (browser, mut events) = Browser::launch(browser_config)
            .await
            .map_err(|e| Error::Launch(e.to_string()))?;

        // The driver resolves every command through this event stream; it
        // must be polled for the calls below to make progress.
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self { browser, page, handler })
    }

    /// Navigates the page and waits for the load to complete.
    pub async fn goto(&self, url: &str) -> Result<()> {
        let navigation = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<_, CdpError>(())
        };

        navigation.await.map_err(|source| Error::Navigation {
            url: url.to_string(),
            source,
        })
    }

    /// Returns the page handle.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Returns the page's current URL.
    pub async fn url(&self) -> Result<String> {
        Ok(self.page.url().await?.unwrap_or_default())
    }

    /// Returns the page's current title.
    pub async fn title(&self) -> Result<String> {
        Ok(self.page.get_title().await?.unwrap_or_default())
    }

    /// Captures a PNG screenshot to `path`, overwriting any existing file.
    ///
    /// The parent directory is created if absent. Returns the number of
    /// bytes written.
    pub async fn screenshot_to_file(&self, path: &Path, full_page: bool) -> Result<u64> {
        ensure_parent_dir(path)?;

        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(full_page)
            .build();

        let bytes = self
            .page
            .save_screenshot(params, path)
            .await
            .map_err(|source| Error::Screenshot {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(target = "pagecheck", path = %path.display(), bytes = bytes.len(), "screenshot saved");
        Ok(bytes.len() as u64)
    }

    /// Closes the browser and waits for the process to exit.
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler.abort();
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // The driver kills the child process when `browser` drops; the event
        // task has nothing left to poll after that.
        self.handler.abort();
    }
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn default_config_is_headless() {
        let config = SessionConfig::default();
        assert!(config.headless);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn headful_flips_headless() {
        let config = SessionConfig::default().headful();
        assert!(!config.headless);
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = SessionConfig::default().with_timeout(Duration::from_millis(100));
        assert_eq!(config.request_timeout, Duration::from_millis(100));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("shot.png");

        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn ensure_parent_dir_is_noop_for_bare_filename() {
        ensure_parent_dir(Path::new("shot.png")).unwrap();
    }

    #[test]
    fn ensure_parent_dir_is_noop_when_parent_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shot.png");
        ensure_parent_dir(&path).unwrap();
    }
}
