use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::index_config::IndexConfig;
use crate::config::structs::storage_config::StorageConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub index: IndexConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub storage: StorageConfig,
    pub api_server: Vec<ApiServerConfig>
}
