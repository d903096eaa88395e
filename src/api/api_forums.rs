use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_error_response, api_parse_body, api_service_require_moderator, api_service_require_user};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::forum_create_payload::ForumCreatePayload;
use crate::api::structs::thread_create_payload::ThreadCreatePayload;
use crate::bbcode::bbcode::render_bbcode;
use crate::index::enums::forum_kind::ForumKind;
use crate::index::enums::index_error::IndexError;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::post_view::PostView;
use crate::index::structs::user_summary::UserSummary;
use crate::stats::enums::stats_event::StatsEvent;

fn api_service_parse_forum_id(raw: &str) -> Result<ForumId, IndexError>
{
    raw.parse::<ForumId>().map_err(|_| IndexError::InvalidIdentifier(raw.to_string()))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_forums_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.forum_summaries())
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_forum_post(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Err(response) = api_service_require_moderator(&request, &data) { return response; }

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": error.message
            }));
        }
    };
    let create: ForumCreatePayload = match serde_json::from_slice(&body) {
        Ok(create) => create,
        Err(_) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid json body"
            }));
        }
    };

    let kind = match create.kind.as_deref() {
        None => ForumKind::default(),
        Some(raw) => match raw.parse::<ForumKind>() {
            Ok(kind) => kind,
            Err(error) => { return api_error_response(&data, &error); }
        }
    };

    match data.torrent_index.create_forum(&create.name, &create.description, kind) {
        Ok(forum) => HttpResponse::Created().content_type(ContentType::json()).json(forum),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_forum_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Err(response) = api_service_require_moderator(&request, &data) { return response; }

    let forum_id = match api_service_parse_forum_id(&path.into_inner()) {
        Ok(forum_id) => forum_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.remove_forum(forum_id) {
        Some((_, removed_threads, removed_posts)) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "removed_threads": removed_threads,
            "removed_posts": removed_posts
        })),
        None => api_error_response(&data, &IndexError::NotFound("forum".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_forum_threads_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let forum_id = match api_service_parse_forum_id(&path.into_inner()) {
        Ok(forum_id) => forum_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    if data.torrent_index.get_forum(forum_id).is_none() {
        return api_error_response(&data, &IndexError::NotFound("forum".to_string()));
    }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.threads_with_stats(forum_id))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_forum_last_thread_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let forum_id = match api_service_parse_forum_id(&path.into_inner()) {
        Ok(forum_id) => forum_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    if data.torrent_index.get_forum(forum_id).is_none() {
        return api_error_response(&data, &IndexError::NotFound("forum".to_string()));
    }

    match data.torrent_index.threads_with_stats(forum_id).into_iter().next() {
        Some(summary) => HttpResponse::Ok().content_type(ContentType::json()).json(summary),
        None => HttpResponse::Ok().content_type(ContentType::json()).json(serde_json::Value::Null)
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_thread_post(request: HttpRequest, path: web::Path<String>, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };

    let forum_id = match api_service_parse_forum_id(&path.into_inner()) {
        Ok(forum_id) => forum_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    let body = match api_parse_body(payload).await {
        Ok(body) => body,
        Err(error) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": error.message
            }));
        }
    };
    let create: ThreadCreatePayload = match serde_json::from_slice(&body) {
        Ok(create) => create,
        Err(_) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid json body"
            }));
        }
    };

    match data.torrent_index.create_thread(forum_id, user.id, &create.title, &create.content) {
        Ok((thread, post)) => {
            let thread_view = data.torrent_index.thread_view(thread.id);
            let post_view = PostView {
                id: post.id,
                thread_id: post.thread_id,
                author: UserSummary::from(&user),
                author_since: Some(user.created_at),
                content: render_bbcode(&post.content),
                created_at: post.created_at,
            };
            HttpResponse::Created().content_type(ContentType::json()).json(json!({
                "thread": thread_view,
                "opening_post": post_view
            }))
        }
        Err(error) => api_error_response(&data, &error)
    }
}
