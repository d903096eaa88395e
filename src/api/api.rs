use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_multipart::Field;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::{Data, ServiceConfig};
use futures_util::StreamExt;
use log::{error, info};
use serde_json::json;
use crate::api::api_forums::{api_service_forum_delete, api_service_forum_last_thread_get, api_service_forum_post, api_service_forum_threads_get, api_service_forums_get, api_service_thread_post};
use crate::api::api_stats::api_service_stats_get;
use crate::api::api_threads::{api_service_post_delete, api_service_post_post, api_service_thread_delete, api_service_thread_get, api_service_thread_lock_put, api_service_thread_posts_get, api_service_threads_recent_get};
use crate::api::api_torrents::{api_service_torrent_delete, api_service_torrent_get, api_service_torrent_lucky_get, api_service_torrent_post, api_service_torrent_track_post, api_service_torrents_get, api_service_torrents_recent_get, api_service_torrents_top_get};
use crate::api::api_users::{api_service_user_avatar_get, api_service_user_avatar_put, api_service_user_bookmark_delete, api_service_user_bookmark_put, api_service_user_follow_delete, api_service_user_follow_put, api_service_user_login_post, api_service_user_password_put, api_service_user_posts_get, api_service_user_profile_get, api_service_user_profile_put, api_service_user_register_post, api_service_user_role_put, api_service_user_uploads_get};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::index::enums::index_error::IndexError;
use crate::index::enums::user_role::UserRole;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;
use crate::security::security::{constant_time_eq, verify_token};
use crate::stats::enums::stats_event::StatsEvent;

const MAX_JSON_BODY_SIZE: usize = 262_144;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("api/torrents")
            .route(web::get().to(api_service_torrents_get))
            .route(web::post().to(api_service_torrent_post)));
        cfg.service(web::resource("api/torrents/recent").route(web::get().to(api_service_torrents_recent_get)));
        cfg.service(web::resource("api/torrents/top").route(web::get().to(api_service_torrents_top_get)));
        cfg.service(web::resource("api/torrents/lucky").route(web::get().to(api_service_torrent_lucky_get)));
        cfg.service(web::resource("api/torrents/{info_hash}")
            .route(web::get().to(api_service_torrent_get))
            .route(web::delete().to(api_service_torrent_delete)));
        cfg.service(web::resource("api/torrents/{info_hash}/track").route(web::post().to(api_service_torrent_track_post)));
        cfg.service(web::resource("api/users/register").route(web::post().to(api_service_user_register_post)));
        cfg.service(web::resource("api/users/login").route(web::post().to(api_service_user_login_post)));
        cfg.service(web::resource("api/users/profile").route(web::put().to(api_service_user_profile_put)));
        cfg.service(web::resource("api/users/password").route(web::put().to(api_service_user_password_put)));
        cfg.service(web::resource("api/users/profile/avatar").route(web::put().to(api_service_user_avatar_put)));
        cfg.service(web::resource("api/users/avatar/{user_id}").route(web::get().to(api_service_user_avatar_get)));
        cfg.service(web::resource("api/users/profile/{username}").route(web::get().to(api_service_user_profile_get)));
        cfg.service(web::resource("api/users/profile/{username}/uploads").route(web::get().to(api_service_user_uploads_get)));
        cfg.service(web::resource("api/users/profile/{username}/posts").route(web::get().to(api_service_user_posts_get)));
        cfg.service(web::resource("api/users/profile/{username}/follow")
            .route(web::put().to(api_service_user_follow_put))
            .route(web::delete().to(api_service_user_follow_delete)));
        cfg.service(web::resource("api/users/profile/{username}/role").route(web::put().to(api_service_user_role_put)));
        cfg.service(web::resource("api/users/bookmarks/{info_hash}")
            .route(web::put().to(api_service_user_bookmark_put))
            .route(web::delete().to(api_service_user_bookmark_delete)));
        cfg.service(web::resource("api/forums")
            .route(web::get().to(api_service_forums_get))
            .route(web::post().to(api_service_forum_post)));
        cfg.service(web::resource("api/forums/{forum_id}").route(web::delete().to(api_service_forum_delete)));
        cfg.service(web::resource("api/forums/{forum_id}/threads")
            .route(web::get().to(api_service_forum_threads_get))
            .route(web::post().to(api_service_thread_post)));
        cfg.service(web::resource("api/forums/{forum_id}/last-thread").route(web::get().to(api_service_forum_last_thread_get)));
        cfg.service(web::resource("api/threads/recent").route(web::get().to(api_service_threads_recent_get)));
        cfg.service(web::resource("api/threads/{thread_id}")
            .route(web::get().to(api_service_thread_get))
            .route(web::delete().to(api_service_thread_delete)));
        cfg.service(web::resource("api/threads/{thread_id}/lock").route(web::put().to(api_service_thread_lock_put)));
        cfg.service(web::resource("api/threads/{thread_id}/posts")
            .route(web::get().to(api_service_thread_posts_get))
            .route(web::post().to(api_service_post_post)));
        cfg.service(web::resource("api/posts/{post_id}").route(web::delete().to(api_service_post_delete)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<TorrentIndex>,
    api_server_config: Arc<ApiServerConfig>
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    let service_data = Arc::new(ApiServiceData {
        torrent_index: data,
        api_server_config: api_server_config.clone(),
    });

    if api_server_config.ssl {
        info!("[API] Starting server listener with SSL on {}", addr);
        if api_server_config.ssl_key.is_empty() || api_server_config.ssl_cert.is_empty() {
            error!("[API] No SSL key or SSL certificate given, exiting...");
            exit(1);
        }

        let certs_file = &mut BufReader::new(File::open(api_server_config.ssl_cert.clone()).unwrap());
        let key_file = &mut BufReader::new(File::open(api_server_config.ssl_key.clone()).unwrap());

        let tls_certs = rustls_pemfile::certs(certs_file)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let tls_key = rustls_pemfile::pkcs8_private_keys(key_file)
            .next()
            .unwrap()
            .unwrap();

        let tls_config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(tls_certs, rustls::pki_types::PrivateKeyDer::Pkcs8(tls_key))
            .unwrap();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(api_service_cors())
                .configure(api_service_routes(service_data.clone()))
        })
            .keep_alive(Duration::from_secs(api_server_config.keep_alive))
            .client_request_timeout(Duration::from_secs(api_server_config.request_timeout))
            .client_disconnect_timeout(Duration::from_secs(api_server_config.disconnect_timeout))
            .max_connections(api_server_config.max_connections as usize)
            .workers(api_server_config.threads as usize)
            .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
            .unwrap()
            .disable_signals()
            .run();

        return (server.handle(), server);
    }

    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(api_server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(api_server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(api_server_config.disconnect_timeout))
        .max_connections(api_server_config.max_connections as usize)
        .workers(api_server_config.threads as usize)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}

/// Admin API key guard for the `?token=` protected endpoints. Returns the
/// rejection response, or None when the key matches.
pub async fn api_service_token(token: Option<String>, data: &Data<Arc<ApiServiceData>>) -> Option<HttpResponse>
{
    match token {
        None => {
            data.torrent_index.update_stats(StatsEvent::ApiUnauthorized, 1);
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if !constant_time_eq(token_code.as_str(), data.torrent_index.config.index.api_key.as_str()) {
                data.torrent_index.update_stats(StatsEvent::ApiUnauthorized, 1);
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

pub async fn api_parse_body(mut payload: web::Payload) -> Result<web::BytesMut, CustomError>
{
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(_) => { return Err(CustomError::new("chunked body broken")); }
        };
        if (body.len() + chunk.len()) > MAX_JSON_BODY_SIZE {
            return Err(CustomError::new("body overflow"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Collects one multipart field into memory, rejecting it past `max_size`.
pub async fn api_read_multipart_field(field: &mut Field, max_size: usize) -> Result<Vec<u8>, HttpResponse>
{
    let mut buffer = Vec::new();
    while let Some(chunk) = field.next().await {
        match chunk {
            Ok(bytes) => {
                if buffer.len() + bytes.len() > max_size {
                    return Err(HttpResponse::PayloadTooLarge().content_type(ContentType::json()).json(json!({
                        "status": "uploaded file exceeds the size limit"
                    })));
                }
                buffer.extend_from_slice(&bytes);
            }
            Err(_) => {
                return Err(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                    "status": "malformed multipart body"
                })));
            }
        }
    }
    Ok(buffer)
}

/// Maps an index error onto its HTTP response. Infrastructure failures
/// are logged and collapsed into a generic message so internals never
/// reach the client.
pub fn api_error_response(data: &Data<Arc<ApiServiceData>>, error: &IndexError) -> HttpResponse
{
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!("[API] {error}");
        data.torrent_index.update_stats(StatsEvent::ApiFailure, 1);
        return HttpResponse::build(status).content_type(ContentType::json()).json(json!({
            "status": "internal server error"
        }));
    }
    HttpResponse::build(status).content_type(ContentType::json()).json(json!({
        "status": error.to_string()
    }))
}

pub fn api_service_bearer(request: &HttpRequest) -> Option<String>
{
    let header = request.headers().get(http::header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(|token| token.trim().to_string())
}

/// Resolves the optional request identity from the bearer token. Invalid
/// or expired tokens identify nobody instead of failing the request.
pub fn api_service_identify(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Option<UserRecord>
{
    let token = api_service_bearer(request)?;
    let claims = verify_token(token.as_str(), data.torrent_index.config.index.jwt_secret.as_str()).ok()?;
    let user_id = claims.sub.parse::<UserId>().ok()?;
    data.torrent_index.get_user(user_id)
}

pub fn api_service_require_user(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Result<UserRecord, HttpResponse>
{
    match api_service_identify(request, data) {
        Some(user) => Ok(user),
        None => {
            data.torrent_index.update_stats(StatsEvent::ApiUnauthorized, 1);
            Err(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "authentication required"
            })))
        }
    }
}

pub fn api_service_require_moderator(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Result<UserRecord, HttpResponse>
{
    let user = api_service_require_user(request, data)?;
    if user.role != UserRole::Moderator {
        data.torrent_index.update_stats(StatsEvent::ApiUnauthorized, 1);
        return Err(HttpResponse::Forbidden().content_type(ContentType::json()).json(json!({
            "status": "insufficient permissions"
        })));
    }
    Ok(user)
}

pub async fn api_service_not_found(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiNotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
