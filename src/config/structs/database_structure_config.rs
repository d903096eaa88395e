use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_forums::DatabaseStructureConfigForums;
use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;
use crate::config::structs::database_structure_config_threads::DatabaseStructureConfigThreads;
use crate::config::structs::database_structure_config_torrents::DatabaseStructureConfigTorrents;
use crate::config::structs::database_structure_config_users::DatabaseStructureConfigUsers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub torrents: DatabaseStructureConfigTorrents,
    pub users: DatabaseStructureConfigUsers,
    pub forums: DatabaseStructureConfigForums,
    pub threads: DatabaseStructureConfigThreads,
    pub posts: DatabaseStructureConfigPosts
}
