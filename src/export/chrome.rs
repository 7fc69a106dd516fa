//! Headless Chrome page engine.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};

use super::{EngineLauncher, PageEngine, PrintRequest};
use crate::error::{Error, Result};

/// Counts code blocks the highlighter has not processed yet.
const PENDING_HIGHLIGHT_JS: &str = "document.querySelectorAll('pre code:not(.hljs)').length";

/// Options for launching Chrome.
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    /// Run without a window
    pub headless: bool,

    /// Keep Chrome's sandbox enabled
    pub sandbox: bool,

    /// Chrome executable; auto-detected when unset
    pub executable: Option<PathBuf>,

    /// Longest wait for the highlighter after the page has loaded
    pub settle_timeout: Duration,

    /// Interval between highlighter checks
    pub poll_interval: Duration,
}

impl ChromeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn with_settle_timeout(mut self, timeout: Duration) -> Self {
        self.settle_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            executable: None,
            settle_timeout: Duration::from_millis(300),
            poll_interval: Duration::from_millis(50),
        }
    }
}

/// Launches [`ChromeEngine`]s.
#[derive(Debug, Clone, Default)]
pub struct ChromeLauncher {
    config: ChromeConfig,
}

impl ChromeLauncher {
    pub fn new(config: ChromeConfig) -> Self {
        Self { config }
    }
}

impl EngineLauncher for ChromeLauncher {
    type Engine = ChromeEngine;

    fn launch(&self) -> Result<ChromeEngine> {
        let options = LaunchOptions::default_builder()
            .headless(self.config.headless)
            .sandbox(self.config.sandbox)
            .path(self.config.executable.clone())
            .build()
            .map_err(|e| Error::EngineLaunch(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| Error::EngineLaunch(e.to_string()))?;
        log::debug!("Chrome launched");

        Ok(ChromeEngine {
            browser: Some(browser),
            config: self.config.clone(),
        })
    }
}

/// A running headless Chrome instance.
pub struct ChromeEngine {
    browser: Option<Browser>,
    config: ChromeConfig,
}

impl ChromeEngine {
    fn load(&self, tab: &Tab, html: &str) -> Result<tempfile::NamedTempFile> {
        // Large documents load more reliably from a file than from a data URL.
        let mut file = tempfile::Builder::new()
            .prefix("reportkit-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        file.flush()?;

        let url = format!("file://{}", file.path().display());
        tab.navigate_to(&url)
            .map_err(|e| Error::Navigation(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| Error::Navigation(e.to_string()))?;

        Ok(file)
    }

    /// Wait until every code block is highlighted, or the settle timeout.
    fn settle(&self, tab: &Tab) -> Result<()> {
        let started = Instant::now();
        loop {
            let pending = tab
                .evaluate(PENDING_HIGHLIGHT_JS, false)
                .map_err(|e| Error::Navigation(e.to_string()))?
                .value
                .and_then(|v| v.as_u64())
                .unwrap_or(0);

            if pending == 0 {
                return Ok(());
            }
            if started.elapsed() >= self.config.settle_timeout {
                log::debug!("{} code blocks still unhighlighted, printing anyway", pending);
                return Ok(());
            }
            std::thread::sleep(self.config.poll_interval);
        }
    }

    fn print(&self, tab: &Arc<Tab>, html: &str, request: &PrintRequest) -> Result<Vec<u8>> {
        let _file = self.load(tab, html)?;
        self.settle(tab)?;

        let (paper_width, paper_height) = request.format.size_inches();
        let options = PrintToPdfOptions {
            landscape: Some(request.landscape),
            display_header_footer: Some(request.display_header_footer),
            print_background: Some(request.print_background),
            scale: Some(request.scale),
            paper_width: Some(paper_width),
            paper_height: Some(paper_height),
            margin_top: Some(0.0),
            margin_bottom: Some(0.0),
            margin_left: Some(0.0),
            margin_right: Some(0.0),
            header_template: Some(request.header_template.clone()),
            footer_template: Some(request.footer_template.clone()),
            prefer_css_page_size: Some(request.prefer_css_page_size),
            ..Default::default()
        };

        tab.print_to_pdf(Some(options))
            .map_err(|e| Error::Rasterize(e.to_string()))
    }
}

impl PageEngine for ChromeEngine {
    fn print_to_pdf(&mut self, html: &str, request: &PrintRequest) -> Result<Vec<u8>> {
        let browser = self.browser.as_ref().ok_or(Error::EngineClosed)?;
        let tab = browser
            .new_tab()
            .map_err(|e| Error::EngineLaunch(e.to_string()))?;

        let result = self.print(&tab, html, request);

        if let Err(e) = tab.close(false) {
            log::warn!("Failed to close tab: {}", e);
        }
        result
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the browser terminates the Chrome process.
        if self.browser.take().is_some() {
            log::debug!("Chrome closed");
        }
        Ok(())
    }
}
