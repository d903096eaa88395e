use std::collections::BTreeMap;
use std::sync::Arc;
use sqlx::Error;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_record::ForumRecord;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;

impl DatabaseConnector {
    /// Builds the connector for the configured engine. Without persistence
    /// and without a creation run, no connection is opened at all and the
    /// returned connector ignores every load and save.
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> DatabaseConnector
    {
        if !config.database.persistent && !create_database {
            return DatabaseConnector {
                mysql: None,
                sqlite: None,
                pgsql: None,
                engine: None,
            };
        }

        match config.database.engine {
            DatabaseDrivers::sqlite3 => { DatabaseConnectorSQLite::database_connector(config, create_database).await }
            DatabaseDrivers::mysql => { DatabaseConnectorMySQL::database_connector(config, create_database).await }
            DatabaseDrivers::pgsql => { DatabaseConnectorPgSQL::database_connector(config, create_database).await }
        }
    }

    pub async fn load_torrents(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().load_torrents(torrent_index.clone()).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().load_torrents(torrent_index.clone()).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().load_torrents(torrent_index.clone()).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn load_users(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().load_users(torrent_index.clone()).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().load_users(torrent_index.clone()).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().load_users(torrent_index.clone()).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn load_forums(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().load_forums(torrent_index.clone()).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().load_forums(torrent_index.clone()).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().load_forums(torrent_index.clone()).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn load_threads(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().load_threads(torrent_index.clone()).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().load_threads(torrent_index.clone()).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().load_threads(torrent_index.clone()).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn load_posts(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().load_posts(torrent_index.clone()).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().load_posts(torrent_index.clone()).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().load_posts(torrent_index.clone()).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn save_torrents(&self, torrent_index: Arc<TorrentIndex>, torrents: BTreeMap<InfoHash, (TorrentRecord, UpdatesAction)>) -> Result<(), Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().save_torrents(torrent_index.clone(), torrents).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().save_torrents(torrent_index.clone(), torrents).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().save_torrents(torrent_index.clone(), torrents).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn save_users(&self, torrent_index: Arc<TorrentIndex>, users: BTreeMap<UserId, (UserRecord, UpdatesAction)>) -> Result<(), Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().save_users(torrent_index.clone(), users).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().save_users(torrent_index.clone(), users).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().save_users(torrent_index.clone(), users).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn save_forums(&self, torrent_index: Arc<TorrentIndex>, forums: BTreeMap<ForumId, (ForumRecord, UpdatesAction)>) -> Result<(), Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().save_forums(torrent_index.clone(), forums).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().save_forums(torrent_index.clone(), forums).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().save_forums(torrent_index.clone(), forums).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn save_threads(&self, torrent_index: Arc<TorrentIndex>, threads: BTreeMap<ThreadId, (ThreadRecord, UpdatesAction)>) -> Result<(), Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().save_threads(torrent_index.clone(), threads).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().save_threads(torrent_index.clone(), threads).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().save_threads(torrent_index.clone(), threads).await }
            };
        }

        Err(Error::RowNotFound)
    }

    pub async fn save_posts(&self, torrent_index: Arc<TorrentIndex>, posts: BTreeMap<PostId, (PostRecord, UpdatesAction)>) -> Result<(), Error>
    {
        if self.engine.is_some() {
            return match self.engine.clone().unwrap() {
                DatabaseDrivers::sqlite3 => { self.sqlite.clone().unwrap().save_posts(torrent_index.clone(), posts).await }
                DatabaseDrivers::mysql => { self.mysql.clone().unwrap().save_posts(torrent_index.clone(), posts).await }
                DatabaseDrivers::pgsql => { self.pgsql.clone().unwrap().save_posts(torrent_index.clone(), posts).await }
            };
        }

        Err(Error::RowNotFound)
    }
}
