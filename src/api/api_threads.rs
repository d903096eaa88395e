use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_error_response, api_parse_body, api_service_require_moderator, api_service_require_user};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::limit_query::LimitQuery;
use crate::api::structs::page_query::PageQuery;
use crate::api::structs::post_create_payload::PostCreatePayload;
use crate::bbcode::bbcode::render_bbcode;
use crate::index::enums::index_error::IndexError;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_view::PostView;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::user_summary::UserSummary;
use crate::stats::enums::stats_event::StatsEvent;

fn api_service_parse_thread_id(raw: &str) -> Result<ThreadId, IndexError>
{
    raw.parse::<ThreadId>().map_err(|_| IndexError::InvalidIdentifier(raw.to_string()))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_threads_recent_get(request: HttpRequest, query: web::Query<LimitQuery>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let limit = query.limit
        .unwrap_or(data.torrent_index.config.index.recent_threads_limit)
        .clamp(1, 100) as usize;

    HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.recent_thread_summaries(limit))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_thread_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let thread_id = match api_service_parse_thread_id(&path.into_inner()) {
        Ok(thread_id) => thread_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.thread_view(thread_id) {
        Some(view) => HttpResponse::Ok().content_type(ContentType::json()).json(view),
        None => api_error_response(&data, &IndexError::NotFound("thread".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_thread_lock_put(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Err(response) = api_service_require_moderator(&request, &data) { return response; }

    let thread_id = match api_service_parse_thread_id(&path.into_inner()) {
        Ok(thread_id) => thread_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.toggle_thread_lock(thread_id) {
        Ok(locked) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "locked": locked
        })),
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_thread_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Err(response) = api_service_require_moderator(&request, &data) { return response; }

    let thread_id = match api_service_parse_thread_id(&path.into_inner()) {
        Ok(thread_id) => thread_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.remove_thread(thread_id) {
        Some((_, removed_posts)) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "removed_posts": removed_posts
        })),
        None => api_error_response(&data, &IndexError::NotFound("thread".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_thread_posts_get(request: HttpRequest, path: web::Path<String>, query: web::Query<PageQuery>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let thread_id = match api_service_parse_thread_id(&path.into_inner()) {
        Ok(thread_id) => thread_id,
        Err(error) => { return api_error_response(&data, &error); }
    };

    let page = query.page.unwrap_or(1).max(1);
    let page_size = data.torrent_index.config.index.posts_per_page;

    match data.torrent_index.thread_posts_page(thread_id, page, page_size) {
        Some(result) => HttpResponse::Ok().content_type(ContentType::json()).json(result),
        None => api_error_response(&data, &IndexError::NotFound("thread".to_string()))
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_post_post(request: HttpRequest, path: web::Path<String>, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };

    let thread_id = match api_service_parse_thread_id(&path.into_inner()) {
        Ok(thread_id) => thread_id,
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
    let create: PostCreatePayload = match serde_json::from_slice(&body) {
        Ok(create) => create,
        Err(_) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid json body"
            }));
        }
    };

    match data.torrent_index.create_post(thread_id, user.id, &create.content) {
        Ok(post) => {
            let view = PostView {
                id: post.id,
                thread_id: post.thread_id,
                author: UserSummary::from(&user),
                author_since: Some(user.created_at),
                content: render_bbcode(&post.content),
                created_at: post.created_at,
            };
            HttpResponse::Created().content_type(ContentType::json()).json(view)
        }
        Err(error) => api_error_response(&data, &error)
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_post_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Err(response) = api_service_require_moderator(&request, &data) { return response; }

    let raw = path.into_inner();
    let post_id = match raw.parse::<PostId>() {
        Ok(post_id) => post_id,
        Err(_) => { return api_error_response(&data, &IndexError::InvalidIdentifier(raw)); }
    };

    match data.torrent_index.remove_post(post_id) {
        Some(_) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok"
        })),
        None => api_error_response(&data, &IndexError::NotFound("post".to_string()))
    }
}
