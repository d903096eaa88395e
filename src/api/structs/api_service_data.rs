//! Shared data context for API request handlers.

use crate::config::structs::api_server_config::ApiServerConfig;
use crate::index::structs::torrent_index::TorrentIndex;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// This struct is injected into Actix-web's application data and provides
/// request handlers with access to the index instance and the server
/// block it was spawned for.
///
/// # Thread Safety
///
/// Both fields are wrapped in `Arc` for safe sharing across multiple
/// worker threads in the Actix-web runtime.
#[derive(Debug)]
pub struct ApiServiceData {
    /// Reference to the central index instance.
    pub torrent_index: Arc<TorrentIndex>,

    /// Configuration for this API server instance.
    pub api_server_config: Arc<ApiServerConfig>,
}
