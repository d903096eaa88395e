mod common;

use std::sync::atomic::Ordering;
use actix_web::{test, App};
use actix_web::http::header;
use serde_json::json;
use harbor_actix::api::api::api_service_routes;
use harbor_actix::index::enums::torrent_category::TorrentCategory;
use harbor_actix::index::structs::info_hash::InfoHash;
use harbor_actix::metainfo::structs::torrent_meta::TorrentMeta;
use harbor_actix::storage::enums::blob_kind::BlobKind;

#[actix_web::test]
async fn test_api_register_and_login() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({"username": "alice", "email": "alice@example.com", "password": "correct-horse-battery"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "Registration should return 201");
    let body = common::read_json_body(resp).await;
    assert!(body["token"].as_str().is_some(), "Registration should return a token");
    assert_eq!(body["user"]["username"], "alice");

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({"email": "alice@example.com", "password": "correct-horse-battery"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Login with the right password should succeed");

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({"email": "alice@example.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401, "Login with the wrong password should fail with 401");
}

#[actix_web::test]
async fn test_api_register_duplicate_username_rejected() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    for (email, expected) in [("bob@example.com", 201u16), ("other@example.com", 409u16)] {
        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(json!({"username": "bob", "email": email, "password": "correct-horse-battery"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), expected, "Duplicate username should be rejected with 409");
    }
}

#[actix_web::test]
async fn test_api_torrent_upload_and_fetch() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (_, token) = common::register_test_user(&index, "uploader", "uploader@example.com", "correct-horse-battery");
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let torrent = common::test_torrent_bytes("ubuntu.iso", 4096);
    let (content_type, body) = common::multipart_body(&[
        ("torrent", Some("ubuntu.torrent"), &torrent),
        ("description", None, b"An [b]excellent[/b] release"),
        ("category", None, b"Applications"),
    ]);

    let req = test::TestRequest::post()
        .uri("/api/torrents")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "Upload should return 201");
    let created = common::read_json_body(resp).await;
    assert_eq!(created["name"], "ubuntu.iso");
    assert_eq!(created["uploader"]["username"], "uploader");

    let info_hash = created["info_hash"].as_str().unwrap().to_string();
    let req = test::TestRequest::get().uri(&format!("/api/torrents/{info_hash}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Uploaded torrent should be fetchable by info hash");

    let expected = TorrentMeta::from_bytes(&torrent).unwrap();
    assert_eq!(info_hash, expected.info_hash.to_string(), "Catalog id should be the info hash");
}

#[actix_web::test]
async fn test_api_torrent_upload_requires_authentication() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let torrent = common::test_torrent_bytes("anon.iso", 64);
    let (content_type, body) = common::multipart_body(&[
        ("torrent", Some("anon.torrent"), &torrent),
        ("category", None, b"Applications"),
    ]);

    let req = test::TestRequest::post()
        .uri("/api/torrents")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401, "Anonymous uploads should be rejected");
}

#[actix_web::test]
async fn test_api_duplicate_upload_rejected_and_blobs_cleaned() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (_, token) = common::register_test_user(&index, "dupe", "dupe@example.com", "correct-horse-battery");
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let torrent = common::test_torrent_bytes("same.iso", 512);
    for (round, expected) in [(1u8, 201u16), (2u8, 409u16)] {
        let (content_type, body) = common::multipart_body(&[
            ("torrent", Some("same.torrent"), &torrent),
            ("description", None, b"The same image twice"),
            ("category", None, b"Applications"),
        ]);
        let req = test::TestRequest::post()
            .uri("/api/torrents")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), expected, "Round {round} of the same info hash");
    }

    // Exactly one stored torrent blob may remain after the rejected retry.
    let meta = TorrentMeta::from_bytes(&torrent).unwrap();
    let record = index.get_torrent(&meta.info_hash).unwrap();
    assert!(index.storage.exists(BlobKind::Torrents, &record.torrent_blob), "Accepted upload keeps its blob");
    let stored: Vec<_> = std::fs::read_dir(index.storage.kind_root(BlobKind::Torrents)).unwrap().collect();
    assert_eq!(stored.len(), 1, "Rejected duplicate upload must not leave a blob behind");
}

#[actix_web::test]
async fn test_api_torrents_query_pagination_consistency() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (user, _) = common::register_test_user(&index, "librarian", "librarian@example.com", "correct-horse-battery");

    for i in 0..7 {
        let torrent = common::test_torrent_bytes(&format!("archive-{i}.iso"), 1024 + i);
        let meta = TorrentMeta::from_bytes(&torrent).unwrap();
        index.ingest_torrent(&meta, &format!("Archive volume {i}"), TorrentCategory::Applications, user.id, format!("blob-{i}"), vec![]).unwrap();
    }

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let mut seen = std::collections::BTreeSet::new();
    let mut total = 0;
    for page in 1..=3 {
        let req = test::TestRequest::get().uri(&format!("/api/torrents?q=archive&page={page}&page_size=3")).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = common::read_json_body(resp).await;
        assert_eq!(body["total"], 7, "Total must be constant across pages");
        assert_eq!(body["total_pages"], 3);
        for entry in body["entries"].as_array().unwrap() {
            assert!(seen.insert(entry["info_hash"].as_str().unwrap().to_string()), "No entry may repeat across pages");
            total += 1;
        }
    }
    assert_eq!(total, 7, "Union of all pages must be the full result set");
}

#[actix_web::test]
async fn test_api_track_download_counts() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (user, _) = common::register_test_user(&index, "seeder", "seeder@example.com", "correct-horse-battery");

    let torrent = common::test_torrent_bytes("busy.iso", 2048);
    let meta = TorrentMeta::from_bytes(&torrent).unwrap();
    index.ingest_torrent(&meta, "A heavily fetched image", TorrentCategory::Applications, user.id, "blob".to_string(), vec![]).unwrap();

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    for expected in 1..=3u64 {
        let req = test::TestRequest::post().uri(&format!("/api/torrents/{}/track", meta.info_hash)).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = common::read_json_body(resp).await;
        assert_eq!(body["downloads"].as_u64().unwrap(), expected, "Every tracked download must count exactly once");
    }

    let req = test::TestRequest::post()
        .uri("/api/torrents/ffffffffffffffffffffffffffffffffffffffff/track")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404, "Tracking an unknown hash should 404");
}

#[actix_web::test]
async fn test_api_invalid_info_hash_rejected_before_lookup() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let not_hex = "zz".repeat(20);
    for bad in ["short", not_hex.as_str()] {
        let req = test::TestRequest::get().uri(&format!("/api/torrents/{bad}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "Malformed identifier {bad} should be a 400, not a 404");
    }
}

#[actix_web::test]
async fn test_api_profile_statistics() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (user, _) = common::register_test_user(&index, "casey", "casey@example.com", "correct-horse-battery");
    let (fan, fan_token) = common::register_test_user(&index, "fan", "fan@example.com", "correct-horse-battery");

    let torrent = common::test_torrent_bytes("casey-release.iso", 4096);
    let meta = TorrentMeta::from_bytes(&torrent).unwrap();
    index.ingest_torrent(&meta, "Fresh off the mixing desk", TorrentCategory::Music, user.id, "blob".to_string(), vec![]).unwrap();
    index.track_download(&meta.info_hash);
    index.track_download(&meta.info_hash);
    index.follow_user(fan.id, user.id).unwrap();

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::get().uri("/api/users/profile/casey").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = common::read_json_body(resp).await;
    assert_eq!(body["stats"]["uploads"], 1, "Profile must count uploads");
    assert_eq!(body["stats"]["total_downloads"], 2, "Profile must sum downloads over uploads");
    assert_eq!(body["followers"].as_array().unwrap().len(), 1, "Profile must list followers");
    assert!(body.get("email").is_none() || body["email"].is_null(), "Public profiles never leak the email");

    // An authenticated viewer sees their own follow state.
    let req = test::TestRequest::get()
        .uri("/api/users/profile/casey")
        .insert_header((header::AUTHORIZATION, format!("Bearer {fan_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = common::read_json_body(resp).await;
    assert_eq!(body["is_following"], true, "Viewer follow state must be resolved");

    let req = test::TestRequest::get().uri("/api/users/profile/nobody").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404, "Unknown profile should 404");
}

#[actix_web::test]
async fn test_api_follow_idempotence_and_self_follow() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (_, follower_token) = common::register_test_user(&index, "follower", "follower@example.com", "correct-horse-battery");
    common::register_test_user(&index, "famous", "famous@example.com", "correct-horse-battery");

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    for (round, expect_changed) in [(1u8, true), (2u8, false)] {
        let req = test::TestRequest::put()
            .uri("/api/users/profile/famous/follow")
            .insert_header((header::AUTHORIZATION, format!("Bearer {follower_token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "Repeated follow stays successful (round {round})");
        let body = common::read_json_body(resp).await;
        assert_eq!(body["changed"], expect_changed, "Only the first follow changes the graph");
    }

    let req = test::TestRequest::put()
        .uri("/api/users/profile/follower/follow")
        .insert_header((header::AUTHORIZATION, format!("Bearer {follower_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400, "Self-follow is rejected");
}

#[actix_web::test]
async fn test_api_bookmarks_roundtrip() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (user, token) = common::register_test_user(&index, "reader", "reader@example.com", "correct-horse-battery");

    let torrent = common::test_torrent_bytes("keeper.iso", 4096);
    let meta = TorrentMeta::from_bytes(&torrent).unwrap();
    index.ingest_torrent(&meta, "Worth keeping around", TorrentCategory::Other, user.id, "blob".to_string(), vec![]).unwrap();

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/bookmarks/{}", meta.info_hash))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(index.get_user(user.id).unwrap().bookmarks.contains(&meta.info_hash));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/bookmarks/{}", meta.info_hash))
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(index.get_user(user.id).unwrap().bookmarks.is_empty());
}

#[actix_web::test]
async fn test_api_torrent_delete_requires_admin_token() {
    let temp = common::create_temp_dir();
    let config = common::create_test_config(&temp);
    let index = common::create_test_index(config.clone()).await;
    let (user, _) = common::register_test_user(&index, "owner", "owner@example.com", "correct-horse-battery");

    let torrent = common::test_torrent_bytes("target.iso", 4096);
    let meta = TorrentMeta::from_bytes(&torrent).unwrap();
    index.ingest_torrent(&meta, "Marked for removal", TorrentCategory::Other, user.id, "blob".to_string(), vec![]).unwrap();

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::delete().uri(&format!("/api/torrents/{}", meta.info_hash)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401, "Delete without token should 401");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/torrents/{}?token=wrong", meta.info_hash))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401, "Delete with the wrong token should 401");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/torrents/{}?token={}", meta.info_hash, config.index.api_key))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Delete with the configured token should succeed");
    assert!(index.get_torrent(&meta.info_hash).is_none(), "Removed torrent must be gone");
}

#[actix_web::test]
async fn test_api_stats_endpoint_guarded() {
    let temp = common::create_temp_dir();
    let config = common::create_test_config(&temp);
    let index = common::create_test_index(config.clone()).await;
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401, "Stats without token should 401");

    let req = test::TestRequest::get().uri(&format!("/api/stats?token={}", config.index.api_key)).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success(), "Stats with the configured token should succeed");
    let body = common::read_json_body(resp).await;
    assert!(body["api_handled"].as_i64().unwrap() >= 1, "The stats request itself is counted");
}

#[actix_web::test]
async fn test_api_unknown_route_is_404_json() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::get().uri("/api/nothing/here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    let body = common::read_json_body(resp).await;
    assert_eq!(body["status"], "not found");
}

#[actix_web::test]
async fn test_api_lucky_and_top_listings() {
    let temp = common::create_temp_dir();
    let index = common::create_test_index(common::create_test_config(&temp)).await;
    let (user, _) = common::register_test_user(&index, "dj", "dj@example.com", "correct-horse-battery");

    let popular = common::test_torrent_bytes("popular.flac", 4096);
    let obscure = common::test_torrent_bytes("obscure.flac", 4096);
    let popular_meta = TorrentMeta::from_bytes(&popular).unwrap();
    let obscure_meta = TorrentMeta::from_bytes(&obscure).unwrap();
    index.ingest_torrent(&popular_meta, "Everyone seeds this one", TorrentCategory::Music, user.id, "a".to_string(), vec![]).unwrap();
    index.ingest_torrent(&obscure_meta, "Nobody seeds this one", TorrentCategory::Music, user.id, "b".to_string(), vec![]).unwrap();
    index.torrents.read().get(&popular_meta.info_hash).unwrap().seeders.fetch_add(5, Ordering::SeqCst);

    let app = test::init_service(App::new().configure(api_service_routes(common::create_service_data(index.clone())))).await;

    let req = test::TestRequest::get().uri("/api/torrents/top?category=Music").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = common::read_json_body(resp).await;
    let top = body.as_array().unwrap();
    assert_eq!(top[0]["info_hash"].as_str().unwrap(), popular_meta.info_hash.to_string(), "Most seeded comes first");

    let req = test::TestRequest::get().uri("/api/torrents/lucky?q=flac").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = common::read_json_body(resp).await;
    let hash: InfoHash = body["info_hash"].as_str().unwrap().parse().unwrap();
    assert!(hash == popular_meta.info_hash || hash == obscure_meta.info_hash, "Lucky must return one of the matches");
}
