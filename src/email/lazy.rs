//! Memoized transport initialisation
//!
//! The first caller triggers `TransportLoader::load`; concurrent callers wait
//! on the same initialisation. A failed load leaves the cell empty so the next
//! call tries again.

use super::provider::{EmailTransport, TransportError, TransportLoader};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Shared handle to a lazily loaded transport
pub struct LazyTransport {
    loader: Arc<dyn TransportLoader>,
    cell: OnceCell<Arc<dyn EmailTransport>>,
}

impl LazyTransport {
    pub fn new(loader: Arc<dyn TransportLoader>) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
        }
    }

    /// Wrap an already initialised transport
    pub fn ready(transport: Arc<dyn EmailTransport>) -> Self {
        struct Preloaded(Arc<dyn EmailTransport>);

        #[async_trait::async_trait]
        impl TransportLoader for Preloaded {
            async fn load(&self) -> Result<Arc<dyn EmailTransport>, TransportError> {
                Ok(self.0.clone())
            }
        }

        Self {
            loader: Arc::new(Preloaded(transport.clone())),
            cell: OnceCell::new_with(Some(transport)),
        }
    }

    /// Get the transport, loading it on first use
    pub async fn get(&self) -> Result<Arc<dyn EmailTransport>, TransportError> {
        let transport = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!("Loading email transport");
                let transport = self.loader.load().await?;
                tracing::info!(
                    transport = transport.transport_name(),
                    "Email transport initialised"
                );
                Ok::<_, TransportError>(transport)
            })
            .await?;

        Ok(transport.clone())
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}
