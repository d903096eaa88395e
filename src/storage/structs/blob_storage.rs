use std::sync::Arc;
use crate::config::structs::configuration::Configuration;

/// Disk-backed blob store rooted at the configured uploads path.
#[derive(Debug, Clone)]
pub struct BlobStorage {
    pub config: Arc<Configuration>,
}
