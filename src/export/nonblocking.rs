//! Async wrapper around [`PdfBuilder`] for tokio applications.

use std::path::PathBuf;
use std::sync::Arc;

use super::{EngineLauncher, PdfBuilder, PdfOptions};
use crate::error::{Error, Result};
use crate::model::Report;

/// Runs [`PdfBuilder`] exports on tokio's blocking thread pool.
///
/// Cloning is cheap; clones share one engine.
pub struct AsyncPdfBuilder<L: EngineLauncher + 'static> {
    inner: Arc<PdfBuilder<L>>,
}

impl<L: EngineLauncher + 'static> Clone for AsyncPdfBuilder<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: EngineLauncher + 'static> AsyncPdfBuilder<L> {
    pub fn new(builder: PdfBuilder<L>) -> Self {
        Self {
            inner: Arc::new(builder),
        }
    }

    /// The wrapped builder.
    pub fn blocking(&self) -> &PdfBuilder<L> {
        &self.inner
    }

    pub async fn init(&self) -> Result<()> {
        self.run(|builder| builder.init()).await
    }

    pub async fn close(&self) -> Result<()> {
        self.run(|builder| builder.close()).await
    }

    pub async fn generate_pdf(&self, report: Report, options: PdfOptions) -> Result<Vec<u8>> {
        self.run(move |builder| builder.generate_pdf(&report, &options))
            .await
    }

    pub async fn generate_styled_pdf(
        &self,
        report: Report,
        options: PdfOptions,
        custom_css: Option<String>,
    ) -> Result<Vec<u8>> {
        self.run(move |builder| {
            builder.generate_styled_pdf(&report, &options, custom_css.as_deref())
        })
        .await
    }

    /// Render a report to PDF and write it to `path`.
    pub async fn save_pdf(
        &self,
        report: Report,
        path: impl Into<PathBuf>,
        options: PdfOptions,
    ) -> Result<()> {
        let path = path.into();
        let bytes = self.generate_pdf(report, options).await?;
        tokio::fs::write(&path, bytes).await?;
        log::debug!("Wrote PDF to {}", path.display());
        Ok(())
    }

    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&PdfBuilder<L>) -> Result<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&inner))
            .await
            .map_err(|e| Error::Other(format!("export task failed: {}", e)))?
    }
}
