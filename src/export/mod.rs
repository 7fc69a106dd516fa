//! PDF export through an external page-rendering engine.
//!
//! The engine itself sits behind two traits: [`EngineLauncher`] starts one,
//! and [`PageEngine`] turns an HTML string into PDF bytes. [`PdfBuilder`]
//! owns at most one running engine, starts it on first use, and shuts it
//! down on [`PdfBuilder::close`], after any failed export, and on drop.
//!
//! ```
//! use reportkit::export::{EngineLauncher, PageEngine, PdfBuilder, PdfOptions, PrintRequest};
//! use reportkit::model::{Report, ReportMeta};
//!
//! struct Echo;
//!
//! impl PageEngine for Echo {
//!     fn print_to_pdf(&mut self, html: &str, _: &PrintRequest) -> reportkit::Result<Vec<u8>> {
//!         Ok(html.as_bytes().to_vec())
//!     }
//!     fn close(&mut self) -> reportkit::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct EchoLauncher;
//!
//! impl EngineLauncher for EchoLauncher {
//!     type Engine = Echo;
//!     fn launch(&self) -> reportkit::Result<Echo> {
//!         Ok(Echo)
//!     }
//! }
//!
//! let builder = PdfBuilder::new(EchoLauncher);
//! let report = Report::builder(ReportMeta::new("Hello")).build();
//! let bytes = builder.generate_pdf(&report, &PdfOptions::default()).unwrap();
//! assert!(String::from_utf8(bytes).unwrap().contains("<title>Hello</title>"));
//! ```

#[cfg(feature = "chrome")]
mod chrome;
#[cfg(feature = "async")]
mod nonblocking;
mod options;

#[cfg(feature = "chrome")]
pub use chrome::{ChromeConfig, ChromeEngine, ChromeLauncher};
#[cfg(feature = "async")]
pub use nonblocking::AsyncPdfBuilder;
pub use options::{Orientation, PaperFormat, PdfOptions, PrintRequest, PAGE_NUMBER_FOOTER};

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::model::Report;
use crate::render::HtmlRenderer;
use crate::theme::DesignTokens;

/// A running page-rendering engine.
pub trait PageEngine: Send {
    /// Load `html`, wait for it to settle, and print it.
    fn print_to_pdf(&mut self, html: &str, request: &PrintRequest) -> Result<Vec<u8>>;

    /// Shut the engine down.
    fn close(&mut self) -> Result<()>;
}

/// Starts page engines.
pub trait EngineLauncher: Send + Sync {
    type Engine: PageEngine;

    fn launch(&self) -> Result<Self::Engine>;
}

/// PDF builder for the headless Chrome engine.
#[cfg(feature = "chrome")]
pub type ChromePdfBuilder = PdfBuilder<ChromeLauncher>;

/// Renders reports to HTML and prints them through a page engine.
///
/// Exports through one builder are serialized on its engine.
pub struct PdfBuilder<L: EngineLauncher> {
    renderer: HtmlRenderer,
    launcher: L,
    engine: Mutex<Option<L::Engine>>,
}

impl<L: EngineLauncher> PdfBuilder<L> {
    /// Create a builder using the default `mono` theme.
    pub fn new(launcher: L) -> Self {
        Self::with_renderer(HtmlRenderer::default(), launcher)
    }

    /// Create a builder with a theme.
    pub fn with_tokens(tokens: DesignTokens, launcher: L) -> Self {
        Self::with_renderer(HtmlRenderer::new(tokens), launcher)
    }

    /// Create a builder with a configured renderer.
    pub fn with_renderer(renderer: HtmlRenderer, launcher: L) -> Self {
        Self {
            renderer,
            launcher,
            engine: Mutex::new(None),
        }
    }

    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    /// Start the engine if it is not running.
    pub fn init(&self) -> Result<()> {
        let mut slot = self.lock();
        Self::ensure_engine(&self.launcher, &mut slot)?;
        Ok(())
    }

    /// Whether an engine is currently running.
    pub fn is_running(&self) -> bool {
        self.lock().is_some()
    }

    /// Shut the engine down. Does nothing if it is not running.
    pub fn close(&self) -> Result<()> {
        match self.lock().take() {
            Some(mut engine) => {
                log::debug!("Closing page engine");
                engine.close()
            }
            None => Ok(()),
        }
    }

    /// Render a report and print it to PDF bytes.
    pub fn generate_pdf(&self, report: &Report, options: &PdfOptions) -> Result<Vec<u8>> {
        let html = self.renderer.render(report, &options.margin);
        self.print(report, html, options)
    }

    /// Like [`generate_pdf`](Self::generate_pdf), with extra CSS injected
    /// before `</head>`.
    pub fn generate_styled_pdf(
        &self,
        report: &Report,
        options: &PdfOptions,
        custom_css: Option<&str>,
    ) -> Result<Vec<u8>> {
        let mut html = self.renderer.render(report, &options.margin);
        if let Some(css) = custom_css {
            html = inject_css(&html, css);
        }
        self.print(report, html, options)
    }

    /// Render a report to PDF and write it to `path`.
    pub fn save_pdf(
        &self,
        report: &Report,
        path: impl AsRef<Path>,
        options: &PdfOptions,
    ) -> Result<()> {
        let bytes = self.generate_pdf(report, options)?;
        std::fs::write(path.as_ref(), bytes)?;
        log::debug!("Wrote PDF to {}", path.as_ref().display());
        Ok(())
    }

    fn print(&self, report: &Report, html: String, options: &PdfOptions) -> Result<Vec<u8>> {
        let request = options.print_request(report.page_numbering());

        let mut slot = self.lock();
        let engine = Self::ensure_engine(&self.launcher, &mut slot)?;

        match engine.print_to_pdf(&html, &request) {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                log::warn!("Export failed, shutting down page engine: {}", err);
                if let Some(mut engine) = slot.take() {
                    if let Err(close_err) = engine.close() {
                        log::warn!("Failed to close page engine: {}", close_err);
                    }
                }
                Err(err)
            }
        }
    }

    fn ensure_engine<'a>(
        launcher: &L,
        slot: &'a mut MutexGuard<'_, Option<L::Engine>>,
    ) -> Result<&'a mut L::Engine> {
        if slot.is_none() {
            log::debug!("Launching page engine");
            **slot = Some(launcher.launch()?);
        }
        match slot.as_mut() {
            Some(engine) => Ok(engine),
            None => Err(crate::Error::EngineClosed),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<L::Engine>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: EngineLauncher> Drop for PdfBuilder<L> {
    fn drop(&mut self) {
        let slot = self.engine.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut engine) = slot.take() {
            if let Err(err) = engine.close() {
                log::warn!("Failed to close page engine on drop: {}", err);
            }
        }
    }
}

/// Insert a `<style>` element before the first `</head>`.
///
/// Markup without a `</head>` is returned unchanged.
pub fn inject_css(html: &str, css: &str) -> String {
    html.replacen("</head>", &format!("<style>{}</style>\n</head>", css), 1)
}
