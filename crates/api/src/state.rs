use std::sync::Arc;

use brickside_content::media::MediaService;
use brickside_content::service::ContentService;
use brickside_store::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The object store backing content, versions, and images.
    pub store: Arc<dyn ObjectStore>,
    /// Content reads/writes with pre-write snapshots and rollback.
    pub content: Arc<ContentService>,
    /// Image uploads, listing, and soft deletion.
    pub media: Arc<MediaService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble the state from a store and configuration.
    pub fn new(store: Arc<dyn ObjectStore>, config: ServerConfig) -> Self {
        let content = Arc::new(ContentService::new(Arc::clone(&store)));
        let media = Arc::new(MediaService::new(
            Arc::clone(&store),
            config.public_asset_base_url.clone(),
        ));
        Self {
            store,
            content,
            media,
            config: Arc::new(config),
        }
    }
}
