#![allow(dead_code)]
use std::sync::Arc;
use actix_web::test;
use bip_bencode::{ben_bytes, ben_int, ben_map, BMutAccess};
use serde_json::Value;
use tempfile::TempDir;
use harbor_actix::api::structs::api_service_data::ApiServiceData;
use harbor_actix::config::structs::api_server_config::ApiServerConfig;
use harbor_actix::config::structs::configuration::Configuration;
use harbor_actix::index::structs::torrent_index::TorrentIndex;

pub type TestIndex = Arc<TorrentIndex>;
pub type TestConfig = Arc<Configuration>;

/// Test configuration backed by an in-memory database and a temporary
/// uploads directory. The TempDir must stay alive for the test's duration.
pub fn create_test_config(storage_root: &TempDir) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.path = ":memory:".to_string();
    config.database.persistent = false;
    config.storage.uploads_path = storage_root.path().join("uploads").to_string_lossy().to_string();
    config.storage.default_avatar = storage_root.path().join("uploads/default.png").to_string_lossy().to_string();
    Arc::new(config)
}

pub async fn create_test_index(config: TestConfig) -> TestIndex {
    let index = Arc::new(TorrentIndex::new(config, false).await);
    index.storage.init().expect("blob storage init works under a tempdir");
    index
}

pub fn create_test_api_config() -> Arc<ApiServerConfig> {
    Arc::new(ApiServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:8081".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        max_connections: 1000,
        threads: 4,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

pub fn create_service_data(index: TestIndex) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        torrent_index: index,
        api_server_config: create_test_api_config(),
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A valid single-file torrent, bencoded. Different names yield different
/// info hashes.
pub fn test_torrent_bytes(name: &str, length: i64) -> Vec<u8> {
    ben_map! {
        "announce" => ben_bytes!("http://tracker.example.com/announce"),
        "info" => ben_map! {
            "length" => ben_int!(length),
            "name" => ben_bytes!(name),
            "piece length" => ben_int!(262144),
            "pieces" => ben_bytes!("aaaaaaaaaaaaaaaaaaaa")
        }
    }.encode()
}

pub const MULTIPART_BOUNDARY: &str = "----harbortestboundary";

/// Builds a multipart/form-data body by hand so upload handlers can be
/// exercised through `TestRequest` without a live client.
pub fn multipart_body(fields: &[(&str, Option<&str>, &[u8])]) -> (String, Vec<u8>) {
    let mut body: Vec<u8> = Vec::new();
    for (name, filename, data) in fields {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                ).as_bytes());
            }
            None => {
                body.extend_from_slice(format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                ).as_bytes());
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"), body)
}

/// Registers an account through the index and issues a bearer token for it,
/// the same way the register endpoint does.
pub fn register_test_user(index: &TestIndex, username: &str, email: &str, password: &str) -> (harbor_actix::index::structs::user_record::UserRecord, String) {
    use harbor_actix::security::security::{hash_password, issue_token};

    let hash = hash_password(password, 4).expect("bcrypt hashing works");
    let user = index.register_user(username, email, hash).expect("registration of a fresh user succeeds");
    let token = issue_token(
        &user.id.to_string(),
        &index.config.index.jwt_secret,
        index.config.index.token_validity_secs
    ).expect("token issuance works");
    (user, token)
}

pub async fn read_json_body(response: actix_web::dev::ServiceResponse) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is json")
}
