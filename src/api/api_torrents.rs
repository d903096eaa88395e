use std::str::FromStr;
use std::sync::Arc;
use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use futures_util::StreamExt;
use log::error;
use serde_json::json;
use crate::api::api::{api_error_response, api_read_multipart_field, api_service_require_user, api_service_token};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::lucky_query::LuckyQuery;
use crate::api::structs::query_token::QueryToken;
use crate::api::structs::top_query::TopQuery;
use crate::api::structs::torrent_list_query::TorrentListQuery;
use crate::index::enums::index_error::IndexError;
use crate::index::enums::query_order::QueryOrder;
use crate::index::enums::torrent_category::TorrentCategory;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::paged_result::PagedResult;
use crate::index::structs::torrent_view::TorrentView;
use crate::metainfo::structs::torrent_meta::TorrentMeta;
use crate::stats::enums::stats_event::StatsEvent;
use crate::storage::enums::blob_kind::BlobKind;

/// Parses the `{info_hash}` path segment, rejecting anything that is not
/// 40 hex characters before the store is consulted.
fn api_service_parse_info_hash(raw: &str) -> Result<InfoHash, IndexError>
{
    if raw.len() != 40 {
        return Err(IndexError::InvalidIdentifier(raw.to_string()));
    }
    raw.parse::<InfoHash>().map_err(|_| IndexError::InvalidIdentifier(raw.to_string()))
}

fn api_service_parse_categories(raw: &str) -> Result<Vec<TorrentCategory>, IndexError>
{
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(TorrentCategory::from_str)
        .collect()
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrents_get(request: HttpRequest, query: web::Query<TorrentListQuery>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let categories = match query.categories.as_deref() {
        None => None,
        Some(raw) => match api_service_parse_categories(raw) {
            Ok(parsed) if parsed.is_empty() => None,
            Ok(parsed) => Some(parsed),
            Err(error) => { return api_error_response(&data, &error); }
        }
    };

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size
        .unwrap_or(data.torrent_index.config.index.torrents_per_page)
        .clamp(1, 100);

    let result = data.torrent_index.query_torrents(
        query.q.as_deref(),
        categories.as_deref(),
        QueryOrder::SeedersDesc,
        page,
        page_size
    );

    let entries: Vec<TorrentView> = result.entries.iter().map(|record| data.torrent_index.torrent_view(record)).collect();
    HttpResponse::Ok().content_type(ContentType::json()).json(PagedResult {
        entries,
        total: result.total,
        current_page: result.current_page,
        total_pages: result.total_pages,
    })
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrents_recent_get(request: HttpRequest, query: web::Query<TorrentListQuery>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size
        .unwrap_or(data.torrent_index.config.index.torrents_per_page)
        .clamp(1, 100);

    let result = data.torrent_index.query_torrents(
        query.q.as_deref(),
        None,
        QueryOrder::CreatedDesc,
        page,
        page_size
    );

    let entries: Vec<TorrentView> = result.entries.iter().map(|record| data.torrent_index.torrent_view(record)).collect();
    HttpResponse::Ok().content_type(ContentType::json()).json(PagedResult {
        entries,
        total: result.total,
        current_page: result.current_page,
        total_pages: result.total_pages,
    })
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrents_top_get(request: HttpRequest, query: web::Query<TopQuery>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let category = match query.category.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<TorrentCategory>() {
            Ok(category) => Some(category),
            Err(error) => { return api_error_response(&data, &error); }
        }
    };

    let limit = data.torrent_index.config.index.top_torrents_limit;
    let entries: Vec<TorrentView> = data.torrent_index.top_torrents(category, limit)
        .iter()
        .map(|record| data.torrent_index.torrent_view(record))
        .collect();

    HttpResponse::Ok().content_type(ContentType::json()).json(entries)
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrent_lucky_get(request: HttpRequest, query: web::Query<LuckyQuery>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    match data.torrent_index.lucky_torrent(query.q.as_deref()) {
        Some(record) => HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.torrent_view(&record)),
        None => api_error_response(&data, &IndexError::NotFound("torrent".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrent_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let info_hash = match api_service_parse_info_hash(&path.into_inner()) {
        Ok(info_hash) => info_hash,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.get_torrent(&info_hash) {
        Some(record) => HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.torrent_view(&record)),
        None => api_error_response(&data, &IndexError::NotFound("torrent".to_string()))
    }
}

#[tracing::instrument(level = "debug", skip(payload))]
pub async fn api_service_torrent_post(request: HttpRequest, mut payload: Multipart, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let user = match api_service_require_user(&request, &data) {
        Ok(user) => user,
        Err(response) => { return response; }
    };

    let max_torrent_size = data.torrent_index.config.index.max_torrent_file_size as usize;
    let max_image_size = data.torrent_index.config.index.max_image_file_size as usize;
    let max_images = data.torrent_index.config.index.max_image_files as usize;

    let mut torrent_file: Option<(String, Vec<u8>)> = None;
    let mut image_files: Vec<(String, Vec<u8>)> = Vec::new();
    let mut description = String::new();
    let mut category_raw: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(_) => {
                return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                    "status": "malformed multipart body"
                }));
            }
        };
        match field.name() {
            "torrent" => {
                let filename = field.content_disposition().get_filename().unwrap_or("upload.torrent").to_string();
                let buffer = match api_read_multipart_field(&mut field, max_torrent_size).await {
                    Ok(buffer) => buffer,
                    Err(response) => { return response; }
                };
                torrent_file = Some((filename, buffer));
            }
            "images" => {
                if image_files.len() >= max_images {
                    return api_error_response(&data, &IndexError::ValidationError(format!("at most {max_images} images are allowed")));
                }
                let filename = field.content_disposition().get_filename().unwrap_or("image").to_string();
                let buffer = match api_read_multipart_field(&mut field, max_image_size).await {
                    Ok(buffer) => buffer,
                    Err(response) => { return response; }
                };
                image_files.push((filename, buffer));
            }
            "description" => {
                let buffer = match api_read_multipart_field(&mut field, max_image_size).await {
                    Ok(buffer) => buffer,
                    Err(response) => { return response; }
                };
                description = String::from_utf8_lossy(&buffer).to_string();
            }
            "category" => {
                let buffer = match api_read_multipart_field(&mut field, 256).await {
                    Ok(buffer) => buffer,
                    Err(response) => { return response; }
                };
                category_raw = Some(String::from_utf8_lossy(&buffer).to_string());
            }
            _ => {
                // unknown fields are drained and dropped
                while let Some(chunk) = field.next().await {
                    if chunk.is_err() { break; }
                }
            }
        }
    }

    let (torrent_name, torrent_bytes) = match torrent_file {
        Some(file) => file,
        None => { return api_error_response(&data, &IndexError::ValidationError("missing torrent file".to_string())); }
    };

    let category = match category_raw {
        Some(raw) => match raw.parse::<TorrentCategory>() {
            Ok(category) => category,
            Err(error) => { return api_error_response(&data, &error); }
        }
        None => { return api_error_response(&data, &IndexError::ValidationError("missing category".to_string())); }
    };

    let meta = match TorrentMeta::from_bytes(&torrent_bytes) {
        Ok(meta) => meta,
        Err(error) => { return api_error_response(&data, &IndexError::InvalidTorrentFile(error.to_string())); }
    };

    // Blobs land on disk before the record exists; a rejected ingest
    // deletes them again so no orphan files survive the request.
    let torrent_blob = match data.torrent_index.storage.store(BlobKind::Torrents, &torrent_name, &torrent_bytes) {
        Ok(stored_name) => stored_name,
        Err(storage_error) => { return api_error_response(&data, &IndexError::StorageFailure(storage_error.to_string())); }
    };

    let mut image_blobs: Vec<String> = Vec::with_capacity(image_files.len());
    for (image_name, image_bytes) in &image_files {
        match data.torrent_index.storage.store(BlobKind::Images, image_name, image_bytes) {
            Ok(stored_name) => { image_blobs.push(stored_name); }
            Err(storage_error) => {
                api_service_cleanup_blobs(&data, &torrent_blob, &image_blobs);
                return api_error_response(&data, &IndexError::StorageFailure(storage_error.to_string()));
            }
        }
    }

    match data.torrent_index.ingest_torrent(&meta, &description, category, user.id, torrent_blob.clone(), image_blobs.clone()) {
        Ok(record) => {
            HttpResponse::Created().content_type(ContentType::json()).json(data.torrent_index.torrent_view(&record))
        }
        Err(index_error) => {
            api_service_cleanup_blobs(&data, &torrent_blob, &image_blobs);
            api_error_response(&data, &index_error)
        }
    }
}

fn api_service_cleanup_blobs(data: &Data<Arc<ApiServiceData>>, torrent_blob: &str, image_blobs: &[String])
{
    if let Err(storage_error) = data.torrent_index.storage.delete(BlobKind::Torrents, torrent_blob) {
        error!("[API] Unable to remove stored torrent file {torrent_blob}: {storage_error}");
    }
    for image_blob in image_blobs {
        if let Err(storage_error) = data.torrent_index.storage.delete(BlobKind::Images, image_blob) {
            error!("[API] Unable to remove stored image file {image_blob}: {storage_error}");
        }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrent_track_post(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    let info_hash = match api_service_parse_info_hash(&path.into_inner()) {
        Ok(info_hash) => info_hash,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.track_download(&info_hash) {
        Some((downloads, leechers)) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "downloads": downloads,
            "leechers": leechers
        })),
        None => api_error_response(&data, &IndexError::NotFound("torrent".to_string()))
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_torrent_delete(request: HttpRequest, path: web::Path<String>, params: web::Query<QueryToken>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Some(response) = api_service_token(params.token.clone(), &data).await { return response; }

    let info_hash = match api_service_parse_info_hash(&path.into_inner()) {
        Ok(info_hash) => info_hash,
        Err(error) => { return api_error_response(&data, &error); }
    };

    match data.torrent_index.remove_torrent(&info_hash) {
        Some(record) => {
            api_service_cleanup_blobs(&data, &record.torrent_blob, &record.image_blobs);
            HttpResponse::Ok().content_type(ContentType::json()).json(json!({
                "status": "ok"
            }))
        }
        None => api_error_response(&data, &IndexError::NotFound("torrent".to_string()))
    }
}
