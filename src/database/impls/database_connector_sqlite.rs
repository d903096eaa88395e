use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::helpers::{column_list, limit_offset, placeholder, placeholders, quote_identifier, upsert_conflict_clause};
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::index::enums::forum_kind::ForumKind;
use crate::index::enums::torrent_category::TorrentCategory;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::enums::user_role::UserRole;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_record::ForumRecord;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::index::structs::user_avatar::UserAvatar;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite, Transaction};
use std::collections::BTreeMap;
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;

const ENGINE: DatabaseDrivers = DatabaseDrivers::sqlite3;
const LOG_PREFIX: &str = "[SQLite]";

const TORRENT_COLUMNS: [&str; 13] = [
    "info_hash", "name", "description", "category", "total_size", "files", "uploader",
    "seeders", "leechers", "downloads", "torrent_blob", "image_blobs", "created_at",
];
const USER_COLUMNS: [&str; 10] = [
    "id", "username", "email", "password_hash", "role", "avatar", "avatar_content_type",
    "following", "bookmarks", "created_at",
];
const FORUM_COLUMNS: [&str; 5] = ["id", "name", "description", "kind", "created_at"];
const THREAD_COLUMNS: [&str; 7] = ["id", "forum_id", "title", "author", "locked", "created_at", "updated_at"];
const POST_COLUMNS: [&str; 5] = ["id", "thread_id", "author", "content", "created_at"];

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Sqlite>, Error>
    {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(config: Arc<Configuration>, create_database: bool) -> DatabaseConnector
    {
        let sqlite_connect = DatabaseConnectorSQLite::create(config.database.path.as_str()).await;
        if let Err(sqlite_connect) = sqlite_connect {
            error!("{} Unable to connect to SQLite on DSL {}", LOG_PREFIX, config.database.path);
            error!("{} Message: {:#?}", LOG_PREFIX, sqlite_connect.into_database_error().unwrap().message());
            exit(1);
        }

        let mut structure = DatabaseConnector {
            mysql: None,
            sqlite: None,
            pgsql: None,
            engine: None,
        };
        structure.sqlite = Some(DatabaseConnectorSQLite {
            pool: sqlite_connect.unwrap(),
        });
        structure.engine = Some(DatabaseDrivers::sqlite3);

        if create_database {
            let pool = &structure.sqlite.clone().unwrap().pool;
            info!("[BOOT] Database creation triggered for SQLite.");
            info!("[BOOT SQLite] Setting the PRAGMA config...");
            let _ = sqlx::query("PRAGMA temp_store = memory;").execute(pool).await;
            let _ = sqlx::query("PRAGMA journal_mode = WAL;").execute(pool).await;
            let _ = sqlx::query("PRAGMA page_size = 32768;").execute(pool).await;
            let _ = sqlx::query("PRAGMA synchronous = full;").execute(pool).await;

            let table = &config.database_structure.torrents.table_name;
            info!("[BOOT SQLite] Creating table {}", table);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (\
                `info_hash` TEXT PRIMARY KEY NOT NULL, \
                `name` TEXT NOT NULL, \
                `description` TEXT NOT NULL, \
                `category` TEXT NOT NULL, \
                `total_size` INTEGER NOT NULL DEFAULT 0, \
                `files` TEXT NOT NULL DEFAULT '[]', \
                `uploader` TEXT NOT NULL, \
                `seeders` INTEGER NOT NULL DEFAULT 0, \
                `leechers` INTEGER NOT NULL DEFAULT 0, \
                `downloads` INTEGER NOT NULL DEFAULT 0, \
                `torrent_blob` TEXT NOT NULL, \
                `image_blobs` TEXT NOT NULL DEFAULT '[]', \
                `created_at` INTEGER NOT NULL DEFAULT 0)",
                table
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }

            let table = &config.database_structure.users.table_name;
            info!("[BOOT SQLite] Creating table {}", table);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (\
                `id` TEXT PRIMARY KEY NOT NULL, \
                `username` TEXT NOT NULL UNIQUE, \
                `email` TEXT NOT NULL UNIQUE, \
                `password_hash` TEXT NOT NULL, \
                `role` TEXT NOT NULL DEFAULT 'member', \
                `avatar` BLOB, \
                `avatar_content_type` TEXT, \
                `following` TEXT NOT NULL DEFAULT '[]', \
                `bookmarks` TEXT NOT NULL DEFAULT '[]', \
                `created_at` INTEGER NOT NULL DEFAULT 0)",
                table
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }

            let table = &config.database_structure.forums.table_name;
            info!("[BOOT SQLite] Creating table {}", table);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (\
                `id` TEXT PRIMARY KEY NOT NULL, \
                `name` TEXT NOT NULL UNIQUE, \
                `description` TEXT NOT NULL, \
                `kind` TEXT NOT NULL DEFAULT 'forum', \
                `created_at` INTEGER NOT NULL DEFAULT 0)",
                table
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }

            let table = &config.database_structure.threads.table_name;
            info!("[BOOT SQLite] Creating table {}", table);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (\
                `id` TEXT PRIMARY KEY NOT NULL, \
                `forum_id` TEXT NOT NULL, \
                `title` TEXT NOT NULL, \
                `author` TEXT NOT NULL, \
                `locked` INTEGER NOT NULL DEFAULT 0, \
                `created_at` INTEGER NOT NULL DEFAULT 0, \
                `updated_at` INTEGER NOT NULL DEFAULT 0)",
                table
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }

            let table = &config.database_structure.posts.table_name;
            info!("[BOOT SQLite] Creating table {}", table);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS `{}` (\
                `id` TEXT PRIMARY KEY NOT NULL, \
                `thread_id` TEXT NOT NULL, \
                `author` TEXT NOT NULL, \
                `content` TEXT NOT NULL, \
                `created_at` INTEGER NOT NULL DEFAULT 0)",
                table
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }

            info!("[BOOT] Created the database and tables, restart without the parameter to start the app.");
            tokio::time::sleep(Duration::from_secs(1)).await;
            exit(0);
        }

        structure
    }

    #[tracing::instrument(level = "debug")]
    pub async fn load_torrents(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        let mut start = 0u64;
        let length = 10000u64;
        let mut torrents = 0u64;
        let structure = &torrent_index.config.database_structure.torrents;
        loop {
            let query = format!(
                "SELECT {} FROM {} ORDER BY {} {}",
                column_list(ENGINE, &TORRENT_COLUMNS),
                quote_identifier(ENGINE, &structure.table_name),
                quote_identifier(ENGINE, "info_hash"),
                limit_offset(ENGINE, start, length)
            );
            let mut rows = sqlx::query(&query).fetch(&self.pool);
            while let Some(result) = rows.try_next().await? {
                let info_hash_data: &str = result.get("info_hash");
                let info_hash = match InfoHash::from_str(info_hash_data) {
                    Ok(info_hash) => info_hash,
                    Err(_) => {
                        error!("{} Skipping torrent row with invalid info hash {}", LOG_PREFIX, info_hash_data);
                        continue;
                    }
                };
                let uploader_data: &str = result.get("uploader");
                let uploader = match UserId::from_str(uploader_data) {
                    Ok(uploader) => uploader,
                    Err(_) => {
                        error!("{} Skipping torrent row with invalid uploader id {}", LOG_PREFIX, uploader_data);
                        continue;
                    }
                };
                let category: &str = result.get("category");
                let record = TorrentRecord {
                    info_hash,
                    name: result.get("name"),
                    description: result.get("description"),
                    category: TorrentCategory::from_str(category).unwrap_or(TorrentCategory::Other),
                    total_size: result.get::<i64, &str>("total_size") as u64,
                    files: serde_json::from_str(result.get("files")).unwrap_or_default(),
                    uploader,
                    seeders: AtomicU64::new(result.get::<i64, &str>("seeders") as u64),
                    leechers: AtomicU64::new(result.get::<i64, &str>("leechers") as u64),
                    downloads: AtomicU64::new(result.get::<i64, &str>("downloads") as u64),
                    torrent_blob: result.get("torrent_blob"),
                    image_blobs: serde_json::from_str(result.get("image_blobs")).unwrap_or_default(),
                    created_at: result.get("created_at"),
                };
                torrent_index.add_torrent(record.info_hash, record);
                torrents += 1;
            }
            start += length;
            if torrents < start {
                break;
            }
            info!("{} Handled {} torrents", LOG_PREFIX, torrents);
        }
        info!("{} Loaded {} torrents", LOG_PREFIX, torrents);
        Ok(torrents)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_torrents(&self, torrent_index: Arc<TorrentIndex>, torrents: BTreeMap<InfoHash, (TorrentRecord, UpdatesAction)>) -> Result<(), Error>
    {
        let mut transaction = self.pool.begin().await?;
        let mut handled = 0u64;
        let structure = &torrent_index.config.database_structure.torrents;
        for (info_hash, (torrent_record, updates_action)) in torrents.iter() {
            handled += 1;
            match updates_action {
                UpdatesAction::Remove => {
                    let query = format!(
                        "DELETE FROM {} WHERE {}={}",
                        quote_identifier(ENGINE, &structure.table_name),
                        quote_identifier(ENGINE, "info_hash"),
                        placeholder(ENGINE, 1)
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(info_hash.to_string())
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
                UpdatesAction::Add | UpdatesAction::Update => {
                    let query = format!(
                        "INSERT INTO {} ({}) VALUES ({}) {}",
                        quote_identifier(ENGINE, &structure.table_name),
                        column_list(ENGINE, &TORRENT_COLUMNS),
                        placeholders(ENGINE, TORRENT_COLUMNS.len()),
                        upsert_conflict_clause(ENGINE, "info_hash", &TORRENT_COLUMNS[1..])
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(info_hash.to_string())
                        .bind(torrent_record.name.as_str())
                        .bind(torrent_record.description.as_str())
                        .bind(torrent_record.category.as_str())
                        .bind(torrent_record.total_size as i64)
                        .bind(serde_json::to_string(&torrent_record.files).unwrap_or_else(|_| String::from("[]")))
                        .bind(torrent_record.uploader.to_string())
                        .bind(torrent_record.seeders_count() as i64)
                        .bind(torrent_record.leechers_count() as i64)
                        .bind(torrent_record.downloads_count() as i64)
                        .bind(torrent_record.torrent_blob.as_str())
                        .bind(serde_json::to_string(&torrent_record.image_blobs).unwrap_or_else(|_| String::from("[]")))
                        .bind(torrent_record.created_at)
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
            }
            if (handled as f64 / 1000f64).fract() == 0.0 {
                info!("{} Handled {} torrents", LOG_PREFIX, handled);
            }
        }
        info!("{} Handled {} torrents", LOG_PREFIX, handled);
        self.commit(transaction).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn load_users(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        let mut start = 0u64;
        let length = 10000u64;
        let mut users = 0u64;
        let structure = &torrent_index.config.database_structure.users;
        loop {
            let query = format!(
                "SELECT {} FROM {} ORDER BY {} {}",
                column_list(ENGINE, &USER_COLUMNS),
                quote_identifier(ENGINE, &structure.table_name),
                quote_identifier(ENGINE, "id"),
                limit_offset(ENGINE, start, length)
            );
            let mut rows = sqlx::query(&query).fetch(&self.pool);
            while let Some(result) = rows.try_next().await? {
                let id_data: &str = result.get("id");
                let id = match UserId::from_str(id_data) {
                    Ok(id) => id,
                    Err(_) => {
                        error!("{} Skipping user row with invalid id {}", LOG_PREFIX, id_data);
                        continue;
                    }
                };
                let role: &str = result.get("role");
                let avatar_data: Option<Vec<u8>> = result.get("avatar");
                let avatar_content_type: Option<String> = result.get("avatar_content_type");
                let avatar = match (avatar_data, avatar_content_type) {
                    (Some(data), Some(content_type)) => Some(UserAvatar { data, content_type }),
                    _ => None,
                };
                let record = UserRecord {
                    id,
                    username: result.get("username"),
                    email: result.get("email"),
                    password_hash: result.get("password_hash"),
                    role: UserRole::from_str(role).unwrap_or_default(),
                    avatar,
                    following: serde_json::from_str(result.get("following")).unwrap_or_default(),
                    bookmarks: serde_json::from_str(result.get("bookmarks")).unwrap_or_default(),
                    created_at: result.get("created_at"),
                };
                torrent_index.add_user(record.id, record);
                users += 1;
            }
            start += length;
            if users < start {
                break;
            }
            info!("{} Handled {} users", LOG_PREFIX, users);
        }
        info!("{} Loaded {} users", LOG_PREFIX, users);
        Ok(users)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_users(&self, torrent_index: Arc<TorrentIndex>, users: BTreeMap<UserId, (UserRecord, UpdatesAction)>) -> Result<(), Error>
    {
        let mut transaction = self.pool.begin().await?;
        let mut handled = 0u64;
        let structure = &torrent_index.config.database_structure.users;
        for (user_id, (user_record, updates_action)) in users.iter() {
            handled += 1;
            match updates_action {
                UpdatesAction::Remove => {
                    let query = format!(
                        "DELETE FROM {} WHERE {}={}",
                        quote_identifier(ENGINE, &structure.table_name),
                        quote_identifier(ENGINE, "id"),
                        placeholder(ENGINE, 1)
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(user_id.to_string())
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
                UpdatesAction::Add | UpdatesAction::Update => {
                    let (avatar_data, avatar_content_type) = match &user_record.avatar {
                        Some(avatar) => (Some(avatar.data.clone()), Some(avatar.content_type.clone())),
                        None => (None, None),
                    };
                    let query = format!(
                        "INSERT INTO {} ({}) VALUES ({}) {}",
                        quote_identifier(ENGINE, &structure.table_name),
                        column_list(ENGINE, &USER_COLUMNS),
                        placeholders(ENGINE, USER_COLUMNS.len()),
                        upsert_conflict_clause(ENGINE, "id", &USER_COLUMNS[1..])
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(user_id.to_string())
                        .bind(user_record.username.as_str())
                        .bind(user_record.email.as_str())
                        .bind(user_record.password_hash.as_str())
                        .bind(user_record.role.as_str())
                        .bind(avatar_data)
                        .bind(avatar_content_type)
                        .bind(serde_json::to_string(&user_record.following).unwrap_or_else(|_| String::from("[]")))
                        .bind(serde_json::to_string(&user_record.bookmarks).unwrap_or_else(|_| String::from("[]")))
                        .bind(user_record.created_at)
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
            }
            if (handled as f64 / 1000f64).fract() == 0.0 {
                info!("{} Handled {} users", LOG_PREFIX, handled);
            }
        }
        info!("{} Handled {} users", LOG_PREFIX, handled);
        self.commit(transaction).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn load_forums(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        let mut start = 0u64;
        let length = 10000u64;
        let mut forums = 0u64;
        let structure = &torrent_index.config.database_structure.forums;
        loop {
            let query = format!(
                "SELECT {} FROM {} ORDER BY {} {}",
                column_list(ENGINE, &FORUM_COLUMNS),
                quote_identifier(ENGINE, &structure.table_name),
                quote_identifier(ENGINE, "id"),
                limit_offset(ENGINE, start, length)
            );
            let mut rows = sqlx::query(&query).fetch(&self.pool);
            while let Some(result) = rows.try_next().await? {
                let id_data: &str = result.get("id");
                let id = match ForumId::from_str(id_data) {
                    Ok(id) => id,
                    Err(_) => {
                        error!("{} Skipping forum row with invalid id {}", LOG_PREFIX, id_data);
                        continue;
                    }
                };
                let kind: &str = result.get("kind");
                let record = ForumRecord {
                    id,
                    name: result.get("name"),
                    description: result.get("description"),
                    kind: ForumKind::from_str(kind).unwrap_or_default(),
                    created_at: result.get("created_at"),
                };
                torrent_index.add_forum(record.id, record);
                forums += 1;
            }
            start += length;
            if forums < start {
                break;
            }
            info!("{} Handled {} forums", LOG_PREFIX, forums);
        }
        info!("{} Loaded {} forums", LOG_PREFIX, forums);
        Ok(forums)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_forums(&self, torrent_index: Arc<TorrentIndex>, forums: BTreeMap<ForumId, (ForumRecord, UpdatesAction)>) -> Result<(), Error>
    {
        let mut transaction = self.pool.begin().await?;
        let mut handled = 0u64;
        let structure = &torrent_index.config.database_structure.forums;
        for (forum_id, (forum_record, updates_action)) in forums.iter() {
            handled += 1;
            match updates_action {
                UpdatesAction::Remove => {
                    let query = format!(
                        "DELETE FROM {} WHERE {}={}",
                        quote_identifier(ENGINE, &structure.table_name),
                        quote_identifier(ENGINE, "id"),
                        placeholder(ENGINE, 1)
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(forum_id.to_string())
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
                UpdatesAction::Add | UpdatesAction::Update => {
                    let query = format!(
                        "INSERT INTO {} ({}) VALUES ({}) {}",
                        quote_identifier(ENGINE, &structure.table_name),
                        column_list(ENGINE, &FORUM_COLUMNS),
                        placeholders(ENGINE, FORUM_COLUMNS.len()),
                        upsert_conflict_clause(ENGINE, "id", &FORUM_COLUMNS[1..])
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(forum_id.to_string())
                        .bind(forum_record.name.as_str())
                        .bind(forum_record.description.as_str())
                        .bind(forum_record.kind.as_str())
                        .bind(forum_record.created_at)
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
            }
        }
        info!("{} Handled {} forums", LOG_PREFIX, handled);
        self.commit(transaction).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn load_threads(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        let mut start = 0u64;
        let length = 10000u64;
        let mut threads = 0u64;
        let structure = &torrent_index.config.database_structure.threads;
        loop {
            let query = format!(
                "SELECT {} FROM {} ORDER BY {} {}",
                column_list(ENGINE, &THREAD_COLUMNS),
                quote_identifier(ENGINE, &structure.table_name),
                quote_identifier(ENGINE, "id"),
                limit_offset(ENGINE, start, length)
            );
            let mut rows = sqlx::query(&query).fetch(&self.pool);
            while let Some(result) = rows.try_next().await? {
                let id_data: &str = result.get("id");
                let id = match ThreadId::from_str(id_data) {
                    Ok(id) => id,
                    Err(_) => {
                        error!("{} Skipping thread row with invalid id {}", LOG_PREFIX, id_data);
                        continue;
                    }
                };
                let forum_id_data: &str = result.get("forum_id");
                let forum_id = match ForumId::from_str(forum_id_data) {
                    Ok(forum_id) => forum_id,
                    Err(_) => {
                        error!("{} Skipping thread row with invalid forum id {}", LOG_PREFIX, forum_id_data);
                        continue;
                    }
                };
                let author_data: &str = result.get("author");
                let author = match UserId::from_str(author_data) {
                    Ok(author) => author,
                    Err(_) => {
                        error!("{} Skipping thread row with invalid author id {}", LOG_PREFIX, author_data);
                        continue;
                    }
                };
                let record = ThreadRecord {
                    id,
                    forum_id,
                    title: result.get("title"),
                    author,
                    locked: result.get("locked"),
                    created_at: result.get("created_at"),
                    updated_at: result.get("updated_at"),
                };
                torrent_index.add_thread(record.id, record);
                threads += 1;
            }
            start += length;
            if threads < start {
                break;
            }
            info!("{} Handled {} threads", LOG_PREFIX, threads);
        }
        info!("{} Loaded {} threads", LOG_PREFIX, threads);
        Ok(threads)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_threads(&self, torrent_index: Arc<TorrentIndex>, threads: BTreeMap<ThreadId, (ThreadRecord, UpdatesAction)>) -> Result<(), Error>
    {
        let mut transaction = self.pool.begin().await?;
        let mut handled = 0u64;
        let structure = &torrent_index.config.database_structure.threads;
        for (thread_id, (thread_record, updates_action)) in threads.iter() {
            handled += 1;
            match updates_action {
                UpdatesAction::Remove => {
                    let query = format!(
                        "DELETE FROM {} WHERE {}={}",
                        quote_identifier(ENGINE, &structure.table_name),
                        quote_identifier(ENGINE, "id"),
                        placeholder(ENGINE, 1)
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(thread_id.to_string())
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
                UpdatesAction::Add | UpdatesAction::Update => {
                    let query = format!(
                        "INSERT INTO {} ({}) VALUES ({}) {}",
                        quote_identifier(ENGINE, &structure.table_name),
                        column_list(ENGINE, &THREAD_COLUMNS),
                        placeholders(ENGINE, THREAD_COLUMNS.len()),
                        upsert_conflict_clause(ENGINE, "id", &THREAD_COLUMNS[1..])
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(thread_id.to_string())
                        .bind(thread_record.forum_id.to_string())
                        .bind(thread_record.title.as_str())
                        .bind(thread_record.author.to_string())
                        .bind(thread_record.locked)
                        .bind(thread_record.created_at)
                        .bind(thread_record.updated_at)
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
            }
            if (handled as f64 / 1000f64).fract() == 0.0 {
                info!("{} Handled {} threads", LOG_PREFIX, handled);
            }
        }
        info!("{} Handled {} threads", LOG_PREFIX, handled);
        self.commit(transaction).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn load_posts(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error>
    {
        let mut start = 0u64;
        let length = 10000u64;
        let mut posts = 0u64;
        let structure = &torrent_index.config.database_structure.posts;
        loop {
            let query = format!(
                "SELECT {} FROM {} ORDER BY {} {}",
                column_list(ENGINE, &POST_COLUMNS),
                quote_identifier(ENGINE, &structure.table_name),
                quote_identifier(ENGINE, "id"),
                limit_offset(ENGINE, start, length)
            );
            let mut rows = sqlx::query(&query).fetch(&self.pool);
            while let Some(result) = rows.try_next().await? {
                let id_data: &str = result.get("id");
                let id = match PostId::from_str(id_data) {
                    Ok(id) => id,
                    Err(_) => {
                        error!("{} Skipping post row with invalid id {}", LOG_PREFIX, id_data);
                        continue;
                    }
                };
                let thread_id_data: &str = result.get("thread_id");
                let thread_id = match ThreadId::from_str(thread_id_data) {
                    Ok(thread_id) => thread_id,
                    Err(_) => {
                        error!("{} Skipping post row with invalid thread id {}", LOG_PREFIX, thread_id_data);
                        continue;
                    }
                };
                let author_data: &str = result.get("author");
                let author = match UserId::from_str(author_data) {
                    Ok(author) => author,
                    Err(_) => {
                        error!("{} Skipping post row with invalid author id {}", LOG_PREFIX, author_data);
                        continue;
                    }
                };
                let record = PostRecord {
                    id,
                    thread_id,
                    author,
                    content: result.get("content"),
                    created_at: result.get("created_at"),
                };
                torrent_index.add_post(record.id, record);
                posts += 1;
            }
            start += length;
            if posts < start {
                break;
            }
            info!("{} Handled {} posts", LOG_PREFIX, posts);
        }
        info!("{} Loaded {} posts", LOG_PREFIX, posts);
        Ok(posts)
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_posts(&self, torrent_index: Arc<TorrentIndex>, posts: BTreeMap<PostId, (PostRecord, UpdatesAction)>) -> Result<(), Error>
    {
        let mut transaction = self.pool.begin().await?;
        let mut handled = 0u64;
        let structure = &torrent_index.config.database_structure.posts;
        for (post_id, (post_record, updates_action)) in posts.iter() {
            handled += 1;
            match updates_action {
                UpdatesAction::Remove => {
                    let query = format!(
                        "DELETE FROM {} WHERE {}={}",
                        quote_identifier(ENGINE, &structure.table_name),
                        quote_identifier(ENGINE, "id"),
                        placeholder(ENGINE, 1)
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(post_id.to_string())
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
                UpdatesAction::Add | UpdatesAction::Update => {
                    let query = format!(
                        "INSERT INTO {} ({}) VALUES ({}) {}",
                        quote_identifier(ENGINE, &structure.table_name),
                        column_list(ENGINE, &POST_COLUMNS),
                        placeholders(ENGINE, POST_COLUMNS.len()),
                        upsert_conflict_clause(ENGINE, "id", &POST_COLUMNS[1..])
                    );
                    if let Err(e) = sqlx::query(&query)
                        .bind(post_id.to_string())
                        .bind(post_record.thread_id.to_string())
                        .bind(post_record.author.to_string())
                        .bind(post_record.content.as_str())
                        .bind(post_record.created_at)
                        .execute(&mut *transaction)
                        .await
                    {
                        error!("{} Error: {}", LOG_PREFIX, e);
                        return Err(e);
                    }
                }
            }
            if (handled as f64 / 1000f64).fract() == 0.0 {
                info!("{} Handled {} posts", LOG_PREFIX, handled);
            }
        }
        info!("{} Handled {} posts", LOG_PREFIX, handled);
        self.commit(transaction).await
    }

    pub async fn commit(&self, transaction: Transaction<'_, Sqlite>) -> Result<(), Error>
    {
        match transaction.commit().await {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("{} Error: {}", LOG_PREFIX, e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorSQLite {
    async fn load_torrents(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error> {
        DatabaseConnectorSQLite::load_torrents(self, torrent_index).await
    }

    async fn load_users(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error> {
        DatabaseConnectorSQLite::load_users(self, torrent_index).await
    }

    async fn load_forums(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error> {
        DatabaseConnectorSQLite::load_forums(self, torrent_index).await
    }

    async fn load_threads(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error> {
        DatabaseConnectorSQLite::load_threads(self, torrent_index).await
    }

    async fn load_posts(&self, torrent_index: Arc<TorrentIndex>) -> Result<u64, Error> {
        DatabaseConnectorSQLite::load_posts(self, torrent_index).await
    }

    async fn save_torrents(&self, torrent_index: Arc<TorrentIndex>, torrents: BTreeMap<InfoHash, (TorrentRecord, UpdatesAction)>) -> Result<(), Error> {
        DatabaseConnectorSQLite::save_torrents(self, torrent_index, torrents).await
    }

    async fn save_users(&self, torrent_index: Arc<TorrentIndex>, users: BTreeMap<UserId, (UserRecord, UpdatesAction)>) -> Result<(), Error> {
        DatabaseConnectorSQLite::save_users(self, torrent_index, users).await
    }

    async fn save_forums(&self, torrent_index: Arc<TorrentIndex>, forums: BTreeMap<ForumId, (ForumRecord, UpdatesAction)>) -> Result<(), Error> {
        DatabaseConnectorSQLite::save_forums(self, torrent_index, forums).await
    }

    async fn save_threads(&self, torrent_index: Arc<TorrentIndex>, threads: BTreeMap<ThreadId, (ThreadRecord, UpdatesAction)>) -> Result<(), Error> {
        DatabaseConnectorSQLite::save_threads(self, torrent_index, threads).await
    }

    async fn save_posts(&self, torrent_index: Arc<TorrentIndex>, posts: BTreeMap<PostId, (PostRecord, UpdatesAction)>) -> Result<(), Error> {
        DatabaseConnectorSQLite::save_posts(self, torrent_index, posts).await
    }
}
