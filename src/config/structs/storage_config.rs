use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StorageConfig {
    pub uploads_path: String,
    pub torrents_dir: String,
    pub images_dir: String,
    pub default_avatar: String
}
