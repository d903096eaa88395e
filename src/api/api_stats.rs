use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::api_service_token;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, params: web::Query<QueryToken>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.torrent_index.update_stats(StatsEvent::ApiHandled, 1);

    if let Some(response) = api_service_token(params.token.clone(), &data).await { return response; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_index.get_stats())
}
