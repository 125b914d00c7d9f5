//! Render service: acquires the canvas backend once, then renders on demand.

use log::{debug, error};
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::pdf_canvas::PdfCanvasProvider;
use super::personal_details::DocumentRenderer;
use super::traits::CanvasProvider;
use super::{NamedArtifact, RenderError};
use crate::config::DocumentConfig;
use crate::form::ValidatedRecord;

pub struct RenderService {
    source: Arc<dyn CanvasProvider>,
    provider: OnceCell<Arc<dyn CanvasProvider>>,
    renderer: DocumentRenderer,
}

impl RenderService {
    /// Service backed by the PDF canvas, acquired on first render.
    pub fn new(config: DocumentConfig) -> Self {
        debug!("PDF canvas configured with {:?} units", config.page_unit);
        Self::with_provider(Arc::new(PdfCanvasProvider::new(&config)))
    }

    /// Service over a custom canvas provider, acquired on first render.
    pub fn with_provider(provider: Arc<dyn CanvasProvider>) -> Self {
        Self {
            source: provider,
            provider: OnceCell::new(),
            renderer: DocumentRenderer::new(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.provider.initialized()
    }

    /// Open one canvas to prove the backend works before keeping it.
    async fn provider(&self) -> Result<&Arc<dyn CanvasProvider>, RenderError> {
        self.provider
            .get_or_try_init(|| async {
                debug!("Acquiring canvas backend");
                self.source.create().map_err(|e| {
                    error!("Canvas backend unavailable: {}", e);
                    RenderError::Setup(e)
                })?;
                Ok::<_, RenderError>(Arc::clone(&self.source))
            })
            .await
    }

    /// Render a record. A failure leaves the service usable for another attempt.
    pub async fn render(&self, record: &ValidatedRecord) -> Result<NamedArtifact, RenderError> {
        let provider = self.provider().await?;
        let mut canvas = provider.create().map_err(|e| {
            error!("Error creating canvas: {}", e);
            RenderError::Setup(e)
        })?;
        self.renderer.render(record, canvas.as_mut())
    }
}
