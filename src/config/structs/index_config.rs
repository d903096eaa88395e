use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IndexConfig {
    pub api_key: String,
    pub jwt_secret: String,
    pub token_validity_secs: u64,
    pub bcrypt_cost: u32,
    pub torrents_per_page: u64,
    pub posts_per_page: u64,
    pub top_torrents_limit: u64,
    pub recent_threads_limit: u64,
    pub max_image_files: u64,
    pub max_torrent_file_size: u64,
    pub max_image_file_size: u64,
    pub max_avatar_file_size: u64
}
