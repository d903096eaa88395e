use std::sync::Arc;
use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use futures_util::StreamExt;
use serde_json::json;
use crate::api::api::{api_error_response, api_parse_body, api_read_multipart_field, api_service_identify, api_service_require_user, api_service_token};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::login_payload::LoginPayload;
use crate::api::structs::password_change_payload::PasswordChangePayload;
use crate::api::structs::profile_update_payload::ProfileUpdatePayload;
use crate::api::structs::query_token::QueryToken;
use crate::api::structs::register_payload::RegisterPayload;
use crate::api::structs::role_payload::RolePayload;
use crate::index::enums::index_error::IndexError;
use crate::index::enums::user_role::UserRole;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::user_avatar::UserAvatar;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_summary::UserSummary;
use crate::security::security::{hash_password, issue_token, validate_email, validate_password, validate_username, verify_password};
use crate::stats::enums::stats_event::StatsEvent;

fn api_service_validation_response(message: &str) -> HttpResponse
{
    HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
        "status": message
    }))
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_user_register_post(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => { return api_service_validation_response(&error.message); }
    };
    let register: RegisterPayload = match serde_json::from_slice(&body) {
        Ok(register) => register,
        Err(_) => { return api_service_validation_response("invalid json body"); }
    };

    if let Err(error) = validate_username(&register.username) { return api_service_validation_response(&error.message); }
    if let Err(error) = validate_email(&register.email) { return api_service_validation_response(&error.message); }
    if let Err(error) = validate_password(&register.password) { return api_service_validation_response(&error.message); }

    let password_hash = match hash_password(&register.password, data.torrent_index.config.index.bcrypt_cost) {
        Ok(password_hash) => password_hash,
        Err(_) => { return api_error_response(&data, &IndexError::StorageFailure("password hashing failed".to_string())); }
    };

    let user = match data.torrent_index.register_user(&register.username, &register.email, password_hash) {
        Ok(user) => user,
        Err(error) => { return api_error_response(&data, &error); }
    };

    let token = match issue_token(&user.id.to_string(), &data.torrent_index.config.index.jwt_secret, data.torrent_index.config.index.token_validity_secs) {
        Ok(token) => token,
        Err(_) => { return api_error_response(&data, &IndexError::StorageFailure("token issuance failed".to_string())); }
    };

    HttpResponse::Created().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "token": token,
        "user": UserSummary::from(&user)
    }))
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_user_login_post(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => { return api_service_validation_response(&error.message); }
    };
    let login: LoginPayload = match serde_json::from_slice(&body) {
        Ok(login) => login,
        Err(_) => { return api_service_validation_response("invalid json body"); }
    };

    let user = match data.torrent_index.authenticate_user(&login.email, &login.password) {
        Ok(user) => user,
        Err(error) => { return api_error_response(&data, &error); }
    };

    let token = match issue_token(&user.id.to_string(), &data.torrent_index.config.index.jwt_secret, data.torrent_index.config.index.token_validity_secs) {
        Ok(token) => token,
        Err(_) => { return api_error_response(&data, &IndexError::StorageFailure("token issuance failed".to_string())); }
    };

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "token": token,
        "user": UserSummary::from(&user)
    }))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_profile_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let viewer = api_service_identify(&request, &data).map(|user| user.id);
    match data.torrent_index.user_profile(&path.into_inner(), viewer) {
        Some(profile) => HttpResponse::Ok().content_type(ContentType::json()).json(profile),
        None => api_error_response(&data, &IndexError::NotFound("user".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_uploads_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    match data.torrent_index.get_user_by_username(&path.into_inner()) {
        Some(user) => HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.uploads_by_user(user.id)),
        None => api_error_response(&data, &IndexError::NotFound("user".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_posts_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    match data.torrent_index.get_user_by_username(&path.into_inner()) {
        Some(user) => HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.user_post_views(user.id)),
        None => api_error_response(&data, &IndexError::NotFound("user".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_follow_put(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };
    let target = match data.torrent_index.get_user_by_username(&path.into_inner()) {
        Some(target) => target,
        None => { return api_error_response(&data, &IndexError::NotFound("user".to_string())); }
    };

    match data.torrent_index.follow_user(user.id, target.id) {
        Ok(changed) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "changed": changed
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_follow_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };
    let target = match data.torrent_index.get_user_by_username(&path.into_inner()) {
        Some(target) => target,
        None => { return api_error_response(&data, &IndexError::NotFound("user".to_string())); }
    };

    match data.torrent_index.unfollow_user(user.id, target.id) {
        Ok(changed) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "changed": changed
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_bookmark_put(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };
    let raw = path.into_inner();
    let info_hash = match raw.parse::<InfoHash>() {
        Ok(info_hash) if raw.len() == 40 => info_hash,
        _ => { return api_error_response(&data, &IndexError::InvalidIdentifier(raw)); }
    };

    match data.torrent_index.bookmark_torrent(user.id, info_hash) {
        Ok(changed) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "changed": changed
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_bookmark_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };
    let raw = path.into_inner();
    let info_hash = match raw.parse::<InfoHash>() {
        Ok(info_hash) if raw.len() == 40 => info_hash,
        _ => { return api_error_response(&data, &IndexError::InvalidIdentifier(raw)); }
    };

    match data.torrent_index.unbookmark_torrent(user.id, info_hash) {
        Ok(changed) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "changed": changed
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_user_profile_put(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => { return api_service_validation_response(&error.message); }
    };
    let update: ProfileUpdatePayload = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(_) => { return api_service_validation_response("invalid json body"); }
    };

    if let Err(error) = validate_email(&update.email) { return api_service_validation_response(&error.message); }

    match data.torrent_index.update_user_email(user.id, &update.email) {
        Ok(updated) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "user": UserSummary::from(&updated),
            "email": updated.email
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_user_password_put(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => { return api_service_validation_response(&error.message); }
    };
    let change: PasswordChangePayload = match serde_json::from_slice(&body) {
        Ok(change) => change,
        Err(_) => { return api_service_validation_response("invalid json body"); }
    };

    if !verify_password(&change.current_password, &user.password_hash) {
        return api_error_response(&data, &IndexError::InvalidCredentials);
    }
    if let Err(error) = validate_password(&change.new_password) { return api_service_validation_response(&error.message); }

    let password_hash = match hash_password(&change.new_password, data.torrent_index.config.index.bcrypt_cost) {
        Ok(password_hash) => password_hash,
        Err(_) => { return api_error_response(&data, &IndexError::StorageFailure("password hashing failed".to_string())); }
    };

    match data.torrent_index.set_user_password(user.id, password_hash) {
        Ok(()) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok"
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_user_avatar_put(request: HttpRequest, mut payload: Multipart, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };

    let max_avatar_size = data.torrent_index.config.index.max_avatar_file_size as usize;
    let mut avatar: Option<UserAvatar> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(_) => {
                return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                    "status": "malformed multipart body"
                }));
            }
        };
        if field.name() != "avatar" {
            while let Some(chunk) = field.next().await {
                if chunk.is_err() { break; }
            }
            continue;
        }
        let content_type = match field.content_type() {
            Some(mime) if mime.type_() == "image" => mime.to_string(),
            _ => { return api_service_validation_response("avatar must be an image"); }
        };
        let buffer = match api_read_multipart_field(&mut field, max_avatar_size).await {
            Ok(buffer) => buffer,
            Err(response) => { return response; }
        };
        avatar = Some(UserAvatar { data: buffer, content_type });
    }

    let avatar = match avatar {
        Some(avatar) => avatar,
        None => { return api_service_validation_response("missing avatar file"); }
    };

    match data.torrent_index.update_user_avatar(user.id, avatar) {
        Ok(()) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok"
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_user_avatar_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let raw = path.into_inner();
    let user_id = match raw.parse::<UserId>() {
        Ok(user_id) => user_id,
        Err(_) => { return api_error_response(&data, &IndexError::InvalidIdentifier(raw)); }
    };

    let user = match data.torrent_index.get_user(user_id) {
        Some(user) => user,
        None => { return api_error_response(&data, &IndexError::NotFound("user".to_string())); }
    };

    match user.avatar {
        Some(avatar) => HttpResponse::Ok().content_type(avatar.content_type).body(avatar.data),
        None => match data.torrent_index.storage.default_avatar() {
            Ok(bytes) => HttpResponse::Ok().content_type("image/png").body(bytes),
            Err(_) => api_error_response(&data, &IndexError::NotFound("avatar".to_string()))
        }
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_user_role_put(request: HttpRequest, path: web::Path<String>, params: web::Query<QueryToken>, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Some(response) = api_service_token(params.token.clone(), &data).await { return response; }

    let target = match data.torrent_index.get_user_by_username(&path.into_inner()) {
        Some(target) => target,
        None => { return api_error_response(&data, &IndexError::NotFound("user".to_string())); }
    };

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => { return api_service_validation_response(&error.message); }
    };
    let role_change: RolePayload = match serde_json::from_slice(&body) {
        Ok(role_change) => role_change,
        Err(_) => { return api_service_validation_response("invalid json body"); }
    };
    let role = match role_change.role.parse::<UserRole>() {
        Ok(role) => role,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.set_user_role(target.id, role) {
        Ok(updated) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "user": UserSummary::from(&updated),
            "role": updated.role
        })),
        Err(error) => api_error_response(&data, &error)
    }
}
