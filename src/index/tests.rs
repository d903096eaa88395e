#[cfg(test)]
mod index_tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicU64;
    use crate::config::structs::configuration::Configuration;
    use crate::index::enums::index_error::IndexError;
    use crate::index::enums::torrent_category::TorrentCategory;
    use crate::index::structs::info_hash::InfoHash;
    use crate::index::structs::torrent_index::TorrentIndex;
    use crate::index::structs::torrent_record::TorrentRecord;
    use crate::index::structs::user_id::UserId;
    use crate::index::structs::user_record::UserRecord;
    use crate::metainfo::structs::meta_file::MetaFile;
    use crate::metainfo::structs::torrent_meta::TorrentMeta;

    async fn test_index() -> TorrentIndex
    {
        TorrentIndex::new(Arc::new(Configuration::init()), false).await
    }

    fn test_meta(name: &str, seed: u8) -> TorrentMeta
    {
        TorrentMeta {
            info_hash: InfoHash([seed; 20]),
            name: name.to_string(),
            total_size: 1024,
            files: vec![MetaFile { path: name.to_string(), size: 1024 }],
        }
    }

    fn register(index: &TorrentIndex, username: &str) -> UserRecord
    {
        index.register_user(username, &format!("{username}@example.com"), "not-a-real-hash".to_string()).unwrap()
    }

    fn ingest(index: &TorrentIndex, name: &str, seed: u8, uploader: UserId) -> TorrentRecord
    {
        index.ingest_torrent(
            &test_meta(name, seed),
            "about this torrent",
            TorrentCategory::Movies,
            uploader,
            format!("{seed:02x}.torrent"),
            vec![],
        ).unwrap()
    }

    fn stored_torrent(name: &str, seed: u8, uploader: UserId, seeders: u64, created_at: i64) -> TorrentRecord
    {
        TorrentRecord {
            info_hash: InfoHash([seed; 20]),
            name: name.to_string(),
            description: "about this torrent".to_string(),
            category: TorrentCategory::Movies,
            total_size: 1024,
            files: vec![],
            uploader,
            seeders: AtomicU64::new(seeders),
            leechers: AtomicU64::new(0),
            downloads: AtomicU64::new(0),
            torrent_blob: format!("{seed:02x}.torrent"),
            image_blobs: vec![],
            created_at,
        }
    }

    mod torrent_tests {
        use super::*;

        #[tokio::test]
        async fn test_ingest_populates_record() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, uploader.id);
            assert_eq!(record.info_hash, InfoHash([1u8; 20]));
            assert_eq!(record.name, "Ubuntu ISO");
            assert_eq!(record.total_size, 1024);
            assert_eq!(record.seeders_count(), 0);
            assert_eq!(record.leechers_count(), 0);
            assert_eq!(record.downloads_count(), 0);
            assert!(index.get_torrent(&record.info_hash).is_some());
        }

        #[tokio::test]
        async fn test_duplicate_info_hash_rejected() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            ingest(&index, "Ubuntu ISO", 1, uploader.id);
            let duplicate = index.ingest_torrent(
                &test_meta("Same payload, other name", 1),
                "different description",
                TorrentCategory::Games,
                uploader.id,
                "01-copy.torrent".to_string(),
                vec![],
            );
            assert!(matches!(duplicate, Err(IndexError::DuplicateInfoHash)));
            let kept = index.get_torrent(&InfoHash([1u8; 20])).unwrap();
            assert_eq!(kept.name, "Ubuntu ISO");
            let stats = index.get_stats();
            assert_eq!(stats.torrents, 1);
            assert_eq!(stats.uploads_rejected, 1);
        }

        #[tokio::test]
        async fn test_ingest_requires_description() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            let result = index.ingest_torrent(
                &test_meta("No description", 9),
                "   ",
                TorrentCategory::Other,
                uploader.id,
                "09.torrent".to_string(),
                vec![],
            );
            assert!(matches!(result, Err(IndexError::ValidationError(_))));
            assert!(index.get_torrent(&InfoHash([9u8; 20])).is_none());
        }

        #[tokio::test]
        async fn test_remove_torrent() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, uploader.id);
            let removed = index.remove_torrent(&record.info_hash);
            assert!(removed.is_some());
            assert!(index.get_torrent(&record.info_hash).is_none());
            assert_eq!(index.get_stats().torrents, 0);
        }

        #[tokio::test]
        async fn test_track_download_bumps_downloads_and_leechers() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, uploader.id);
            let counters = index.track_download(&record.info_hash);
            assert_eq!(counters, Some((1, 1)));
            let stored = index.get_torrent(&record.info_hash).unwrap();
            assert_eq!(stored.downloads_count(), 1);
            assert_eq!(stored.leechers_count(), 1);
            assert_eq!(stored.seeders_count(), 0);
        }

        #[tokio::test]
        async fn test_track_download_unknown_hash() {
            let index = test_index().await;
            assert_eq!(index.track_download(&InfoHash([7u8; 20])), None);
        }

        #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
        async fn test_concurrent_downloads_all_counted() {
            let index = Arc::new(test_index().await);
            let uploader = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, uploader.id);
            let mut handles = Vec::with_capacity(100);
            for _ in 0..100 {
                let index = index.clone();
                let info_hash = record.info_hash;
                handles.push(tokio::spawn(async move {
                    index.track_download(&info_hash)
                }));
            }
            for handle in handles {
                assert!(handle.await.unwrap().is_some());
            }
            let stored = index.get_torrent(&record.info_hash).unwrap();
            assert_eq!(stored.downloads_count(), 100);
            assert_eq!(stored.leechers_count(), 100);
        }
    }

    mod query_tests {
        use super::*;
        use crate::index::enums::query_order::QueryOrder;

        #[tokio::test]
        async fn test_text_filter_is_case_insensitive() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            ingest(&index, "Ubuntu Server ISO", 1, uploader.id);
            ingest(&index, "Fedora Workstation", 2, uploader.id);
            let page = index.query_torrents(Some("ubuntu"), None, QueryOrder::CreatedDesc, 1, 25);
            assert_eq!(page.total, 1);
            assert_eq!(page.entries[0].name, "Ubuntu Server ISO");
        }

        #[tokio::test]
        async fn test_category_filter() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            ingest(&index, "A movie", 1, uploader.id);
            index.ingest_torrent(
                &test_meta("A game", 2),
                "about",
                TorrentCategory::Games,
                uploader.id,
                "02.torrent".to_string(),
                vec![],
            ).unwrap();
            index.ingest_torrent(
                &test_meta("An album", 3),
                "about",
                TorrentCategory::Music,
                uploader.id,
                "03.torrent".to_string(),
                vec![],
            ).unwrap();
            let wanted = [TorrentCategory::Games, TorrentCategory::Music];
            let page = index.query_torrents(None, Some(&wanted), QueryOrder::CreatedDesc, 1, 25);
            assert_eq!(page.total, 2);
            assert!(page.entries.iter().all(|entry| wanted.contains(&entry.category)));
        }

        #[tokio::test]
        async fn test_order_by_seeders_desc() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            index.add_torrent(InfoHash([1u8; 20]), stored_torrent("few", 1, uploader.id, 3, 100));
            index.add_torrent(InfoHash([2u8; 20]), stored_torrent("many", 2, uploader.id, 90, 100));
            index.add_torrent(InfoHash([3u8; 20]), stored_torrent("some", 3, uploader.id, 12, 100));
            let page = index.query_torrents(None, None, QueryOrder::SeedersDesc, 1, 25);
            let names: Vec<&str> = page.entries.iter().map(|entry| entry.name.as_str()).collect();
            assert_eq!(names, vec!["many", "some", "few"]);
        }

        #[tokio::test]
        async fn test_order_by_created_desc() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            index.add_torrent(InfoHash([1u8; 20]), stored_torrent("oldest", 1, uploader.id, 0, 100));
            index.add_torrent(InfoHash([2u8; 20]), stored_torrent("newest", 2, uploader.id, 0, 300));
            index.add_torrent(InfoHash([3u8; 20]), stored_torrent("middle", 3, uploader.id, 0, 200));
            let page = index.query_torrents(None, None, QueryOrder::CreatedDesc, 1, 25);
            let names: Vec<&str> = page.entries.iter().map(|entry| entry.name.as_str()).collect();
            assert_eq!(names, vec!["newest", "middle", "oldest"]);
        }

        #[tokio::test]
        async fn test_pagination_splits_and_counts() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            for seed in 1..=12u8 {
                ingest(&index, &format!("torrent {seed}"), seed, uploader.id);
            }
            let first = index.query_torrents(None, None, QueryOrder::CreatedDesc, 1, 5);
            let second = index.query_torrents(None, None, QueryOrder::CreatedDesc, 2, 5);
            let third = index.query_torrents(None, None, QueryOrder::CreatedDesc, 3, 5);
            assert_eq!(first.entries.len(), 5);
            assert_eq!(second.entries.len(), 5);
            assert_eq!(third.entries.len(), 2);
            assert_eq!(first.total, 12);
            assert_eq!(first.total_pages, 3);
            assert_eq!(third.current_page, 3);
        }

        #[tokio::test]
        async fn test_page_past_the_end_is_empty() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            for seed in 1..=12u8 {
                ingest(&index, &format!("torrent {seed}"), seed, uploader.id);
            }
            let page = index.query_torrents(None, None, QueryOrder::CreatedDesc, 4, 5);
            assert!(page.entries.is_empty());
            assert_eq!(page.total, 12);
            assert_eq!(page.total_pages, 3);
        }

        #[tokio::test]
        async fn test_lucky_torrent_prefers_most_seeded() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            index.add_torrent(InfoHash([1u8; 20]), stored_torrent("Ubuntu few seeds", 1, uploader.id, 2, 100));
            index.add_torrent(InfoHash([2u8; 20]), stored_torrent("Ubuntu many seeds", 2, uploader.id, 50, 100));
            let lucky = index.lucky_torrent(Some("ubuntu")).unwrap();
            assert_eq!(lucky.name, "Ubuntu many seeds");
            assert!(index.lucky_torrent(Some("no such thing")).is_none());
        }

        #[tokio::test]
        async fn test_top_torrents_limit() {
            let index = test_index().await;
            let uploader = register(&index, "alice");
            for seed in 1..=6u8 {
                index.add_torrent(InfoHash([seed; 20]), stored_torrent(&format!("t{seed}"), seed, uploader.id, seed as u64, 100));
            }
            let top = index.top_torrents(None, 3);
            assert_eq!(top.len(), 3);
            assert_eq!(top[0].seeders_count(), 6);
            assert_eq!(top[1].seeders_count(), 5);
            assert_eq!(top[2].seeders_count(), 4);
        }
    }

    mod user_tests {
        use super::*;
        use crate::index::enums::user_role::UserRole;
        use crate::security::security::{hash_password, verify_password};

        #[tokio::test]
        async fn test_register_assigns_member_role() {
            let index = test_index().await;
            let record = register(&index, "alice");
            assert_eq!(record.username, "alice");
            assert_eq!(record.role, UserRole::Member);
            assert!(record.following.is_empty());
            assert!(record.bookmarks.is_empty());
            assert_eq!(index.get_stats().users, 1);
        }

        #[tokio::test]
        async fn test_duplicate_username_rejected() {
            let index = test_index().await;
            register(&index, "alice");
            let result = index.register_user("alice", "other@example.com", "hash".to_string());
            assert!(matches!(result, Err(IndexError::DuplicateUsername)));
            assert_eq!(index.get_stats().users, 1);
        }

        #[tokio::test]
        async fn test_duplicate_email_rejected() {
            let index = test_index().await;
            register(&index, "alice");
            let result = index.register_user("bob", "alice@example.com", "hash".to_string());
            assert!(matches!(result, Err(IndexError::DuplicateEmail)));
        }

        #[tokio::test]
        async fn test_authenticate_roundtrip() {
            let index = test_index().await;
            let hash = hash_password("correct horse", 4).unwrap();
            index.register_user("alice", "alice@example.com", hash).unwrap();
            let authenticated = index.authenticate_user("alice@example.com", "correct horse").unwrap();
            assert_eq!(authenticated.username, "alice");
            let wrong = index.authenticate_user("alice@example.com", "battery staple");
            assert!(matches!(wrong, Err(IndexError::InvalidCredentials)));
            let unknown = index.authenticate_user("nobody@example.com", "correct horse");
            assert!(matches!(unknown, Err(IndexError::InvalidCredentials)));
            let stats = index.get_stats();
            assert_eq!(stats.logins_handled, 1);
            assert_eq!(stats.logins_failed, 2);
        }

        #[tokio::test]
        async fn test_password_change_applies() {
            let index = test_index().await;
            let hash = hash_password("old password", 4).unwrap();
            let record = index.register_user("alice", "alice@example.com", hash).unwrap();
            let new_hash = hash_password("new password", 4).unwrap();
            index.set_user_password(record.id, new_hash).unwrap();
            let stored = index.get_user(record.id).unwrap();
            assert!(verify_password("new password", &stored.password_hash));
            assert!(!verify_password("old password", &stored.password_hash));
        }

        #[tokio::test]
        async fn test_follow_is_idempotent() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            assert_eq!(index.follow_user(alice.id, bob.id), Ok(true));
            assert_eq!(index.follow_user(alice.id, bob.id), Ok(false));
            let stored = index.get_user(alice.id).unwrap();
            assert_eq!(stored.following.len(), 1);
        }

        #[tokio::test]
        async fn test_self_follow_rejected() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let result = index.follow_user(alice.id, alice.id);
            assert!(matches!(result, Err(IndexError::ValidationError(_))));
        }

        #[tokio::test]
        async fn test_follow_unknown_target() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let result = index.follow_user(alice.id, UserId::generate());
            assert!(matches!(result, Err(IndexError::NotFound(_))));
        }

        #[tokio::test]
        async fn test_unfollow_is_idempotent() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            index.follow_user(alice.id, bob.id).unwrap();
            assert_eq!(index.unfollow_user(alice.id, bob.id), Ok(true));
            assert_eq!(index.unfollow_user(alice.id, bob.id), Ok(false));
        }

        #[tokio::test]
        async fn test_followers_mirror_following() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            let carol = register(&index, "carol");
            index.follow_user(alice.id, carol.id).unwrap();
            index.follow_user(bob.id, carol.id).unwrap();
            let followers = index.followers_of(carol.id);
            let mut usernames: Vec<String> = followers.iter().map(|summary| summary.username.clone()).collect();
            usernames.sort();
            assert_eq!(usernames, vec!["alice".to_string(), "bob".to_string()]);
            assert!(index.is_following(alice.id, carol.id));
            assert!(!index.is_following(carol.id, alice.id));
        }

        #[tokio::test]
        async fn test_bookmark_requires_existing_torrent() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let result = index.bookmark_torrent(alice.id, InfoHash([1u8; 20]));
            assert!(matches!(result, Err(IndexError::NotFound(_))));
        }

        #[tokio::test]
        async fn test_bookmark_roundtrip() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, alice.id);
            assert_eq!(index.bookmark_torrent(alice.id, record.info_hash), Ok(true));
            assert_eq!(index.bookmark_torrent(alice.id, record.info_hash), Ok(false));
            assert_eq!(index.unbookmark_torrent(alice.id, record.info_hash), Ok(true));
            assert_eq!(index.unbookmark_torrent(alice.id, record.info_hash), Ok(false));
        }

        #[tokio::test]
        async fn test_remove_user_strips_follow_edges() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            index.follow_user(alice.id, bob.id).unwrap();
            index.remove_user(bob.id).unwrap();
            let stored = index.get_user(alice.id).unwrap();
            assert!(stored.following.is_empty());
            assert_eq!(index.get_stats().users, 1);
        }

        #[tokio::test]
        async fn test_update_email_enforces_uniqueness() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            register(&index, "bob");
            let taken = index.update_user_email(alice.id, "bob@example.com");
            assert!(matches!(taken, Err(IndexError::DuplicateEmail)));
            let updated = index.update_user_email(alice.id, "alice@elsewhere.example.com").unwrap();
            assert_eq!(updated.email, "alice@elsewhere.example.com");
        }

        #[tokio::test]
        async fn test_set_user_role() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let updated = index.set_user_role(alice.id, UserRole::Moderator).unwrap();
            assert_eq!(updated.role, UserRole::Moderator);
            assert_eq!(index.get_user(alice.id).unwrap().role, UserRole::Moderator);
        }
    }

    mod forum_tests {
        use super::*;
        use crate::index::enums::forum_kind::ForumKind;

        #[tokio::test]
        async fn test_create_forum() {
            let index = test_index().await;
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            assert_eq!(forum.name, "General");
            assert_eq!(forum.kind, ForumKind::Forum);
            assert!(index.get_forum(forum.id).is_some());
            assert_eq!(index.get_stats().forums, 1);
        }

        #[tokio::test]
        async fn test_duplicate_forum_name_rejected() {
            let index = test_index().await;
            index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let duplicate = index.create_forum("General", "Another one", ForumKind::Faq);
            assert!(matches!(duplicate, Err(IndexError::ValidationError(_))));
            assert_eq!(index.get_forums().len(), 1);
        }

        #[tokio::test]
        async fn test_remove_forum_cascades() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let other = index.create_forum("Help", "Support", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "First", "opening text").unwrap();
            index.create_post(thread.id, alice.id, "a reply").unwrap();
            let (kept_thread, _) = index.create_thread(other.id, alice.id, "Elsewhere", "untouched").unwrap();

            let (removed, threads_removed, posts_removed) = index.remove_forum(forum.id).unwrap();
            assert_eq!(removed.id, forum.id);
            assert_eq!(threads_removed, 1);
            assert_eq!(posts_removed, 2);
            assert!(index.get_thread(thread.id).is_none());
            assert_eq!(index.thread_post_count(thread.id), 0);
            assert!(index.get_thread(kept_thread.id).is_some());
            let stats = index.get_stats();
            assert_eq!(stats.forums, 1);
            assert_eq!(stats.threads, 1);
            assert_eq!(stats.posts, 1);
        }

        #[tokio::test]
        async fn test_forum_summaries_carry_counts() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let busy = index.create_forum("Busy", "Has traffic", ForumKind::Forum).unwrap();
            index.create_forum("Quiet", "No traffic", ForumKind::Guide).unwrap();
            let (thread, _) = index.create_thread(busy.id, alice.id, "First", "opening text").unwrap();
            index.create_post(thread.id, alice.id, "a reply").unwrap();

            let summaries = index.forum_summaries();
            assert_eq!(summaries.len(), 2);
            let busy_summary = summaries.iter().find(|summary| summary.name == "Busy").unwrap();
            let quiet_summary = summaries.iter().find(|summary| summary.name == "Quiet").unwrap();
            assert_eq!(busy_summary.threads, 1);
            assert_eq!(busy_summary.posts, 2);
            assert_eq!(quiet_summary.threads, 0);
            assert_eq!(quiet_summary.posts, 0);
        }
    }

    mod thread_tests {
        use super::*;
        use crate::index::enums::forum_kind::ForumKind;
        use crate::index::structs::thread_record::ThreadRecord;
        use crate::index::structs::thread_id::ThreadId;

        #[tokio::test]
        async fn test_create_thread_creates_opening_post() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, post) = index.create_thread(forum.id, alice.id, "Hello", "first message").unwrap();
            assert_eq!(post.thread_id, thread.id);
            assert_eq!(post.content, "first message");
            assert_eq!(thread.created_at, thread.updated_at);
            assert_eq!(index.thread_post_count(thread.id), 1);
            let stats = index.get_stats();
            assert_eq!(stats.threads, 1);
            assert_eq!(stats.posts, 1);
        }

        #[tokio::test]
        async fn test_create_thread_unknown_forum() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let result = index.create_thread(crate::index::structs::forum_id::ForumId::generate(), alice.id, "Hello", "text");
            assert!(matches!(result, Err(IndexError::NotFound(_))));
            assert_eq!(index.get_stats().threads, 0);
        }

        #[tokio::test]
        async fn test_create_thread_requires_title_and_content() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            assert!(matches!(index.create_thread(forum.id, alice.id, " ", "text"), Err(IndexError::ValidationError(_))));
            assert!(matches!(index.create_thread(forum.id, alice.id, "Title", ""), Err(IndexError::ValidationError(_))));
        }

        #[tokio::test]
        async fn test_reply_bumps_thread_activity() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let aged = ThreadRecord {
                id: ThreadId::generate(),
                forum_id: forum.id,
                title: "Old thread".to_string(),
                author: alice.id,
                locked: false,
                created_at: 100,
                updated_at: 100,
            };
            index.add_thread(aged.id, aged.clone());
            index.create_post(aged.id, alice.id, "fresh reply").unwrap();
            let stored = index.get_thread(aged.id).unwrap();
            assert!(stored.updated_at > 100);
        }

        #[tokio::test]
        async fn test_toggle_lock_roundtrip() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "text").unwrap();
            assert_eq!(index.toggle_thread_lock(thread.id), Ok(true));
            assert_eq!(index.toggle_thread_lock(thread.id), Ok(false));
            let missing = index.toggle_thread_lock(ThreadId::generate());
            assert!(matches!(missing, Err(IndexError::NotFound(_))));
        }

        #[tokio::test]
        async fn test_locked_thread_rejects_replies() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "text").unwrap();
            index.toggle_thread_lock(thread.id).unwrap();
            let before = index.get_thread(thread.id).unwrap().updated_at;
            let result = index.create_post(thread.id, alice.id, "too late");
            assert!(matches!(result, Err(IndexError::ThreadLocked)));
            assert_eq!(index.thread_post_count(thread.id), 1);
            assert_eq!(index.get_thread(thread.id).unwrap().updated_at, before);
        }

        #[tokio::test]
        async fn test_remove_thread_cascades_posts() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "text").unwrap();
            index.create_post(thread.id, alice.id, "reply one").unwrap();
            index.create_post(thread.id, alice.id, "reply two").unwrap();
            let (removed, posts_removed) = index.remove_thread(thread.id).unwrap();
            assert_eq!(removed.id, thread.id);
            assert_eq!(posts_removed, 3);
            assert_eq!(index.thread_post_count(thread.id), 0);
            let stats = index.get_stats();
            assert_eq!(stats.threads, 0);
            assert_eq!(stats.posts, 0);
        }

        #[tokio::test]
        async fn test_threads_in_forum_sorted_by_activity() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let first = ThreadRecord {
                id: ThreadId::generate(),
                forum_id: forum.id,
                title: "first".to_string(),
                author: alice.id,
                locked: false,
                created_at: 100,
                updated_at: 100,
            };
            let second = ThreadRecord {
                id: ThreadId::generate(),
                forum_id: forum.id,
                title: "second".to_string(),
                author: alice.id,
                locked: false,
                created_at: 200,
                updated_at: 200,
            };
            index.add_thread(first.id, first.clone());
            index.add_thread(second.id, second);
            index.create_post(first.id, alice.id, "necro reply").unwrap();
            let threads = index.threads_in_forum(forum.id);
            assert_eq!(threads[0].title, "first");
            assert_eq!(threads[1].title, "second");
        }
    }

    mod post_tests {
        use super::*;
        use crate::index::enums::forum_kind::ForumKind;

        #[tokio::test]
        async fn test_posts_page_in_posting_order() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, opening) = index.create_thread(forum.id, alice.id, "Hello", "opening post").unwrap();
            for n in 1..=6 {
                index.create_post(thread.id, alice.id, &format!("reply {n}")).unwrap();
            }
            let first = index.posts_in_thread(thread.id, 1, 5);
            let second = index.posts_in_thread(thread.id, 2, 5);
            assert_eq!(first.total, 7);
            assert_eq!(first.total_pages, 2);
            assert_eq!(first.entries.len(), 5);
            assert_eq!(first.entries[0].id, opening.id);
            assert_eq!(first.entries[0].content, "opening post");
            assert_eq!(second.entries.len(), 2);
            assert_eq!(second.entries[1].content, "reply 6");
        }

        #[tokio::test]
        async fn test_posts_by_user_newest_first() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, bob.id, "Hello", "bob opens").unwrap();
            index.create_post(thread.id, alice.id, "alice first").unwrap();
            index.create_post(thread.id, alice.id, "alice second").unwrap();
            let posts = index.posts_by_user(alice.id);
            assert_eq!(posts.len(), 2);
            assert_eq!(posts[0].content, "alice second");
            assert_eq!(posts[1].content, "alice first");
        }

        #[tokio::test]
        async fn test_remove_post() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "opening").unwrap();
            let reply = index.create_post(thread.id, alice.id, "reply").unwrap();
            let removed = index.remove_post(reply.id).unwrap();
            assert_eq!(removed.id, reply.id);
            assert!(index.get_post(reply.id).is_none());
            assert_eq!(index.thread_post_count(thread.id), 1);
        }
    }

    mod aggregate_tests {
        use super::*;
        use crate::index::enums::forum_kind::ForumKind;
        use crate::index::structs::user_summary::UserSummary;

        #[tokio::test]
        async fn test_user_summary_falls_back_to_placeholder() {
            let index = test_index().await;
            let summary = index.user_summary(UserId::generate());
            assert_eq!(summary, UserSummary::deleted());
            assert!(summary.id.is_none());
        }

        #[tokio::test]
        async fn test_user_stats_derived_from_stores() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, alice.id);
            ingest(&index, "Fedora ISO", 2, alice.id);
            index.track_download(&record.info_hash);
            index.track_download(&record.info_hash);
            index.track_download(&record.info_hash);
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "opening").unwrap();
            index.create_post(thread.id, alice.id, "reply").unwrap();

            let stats = index.user_stats(alice.id);
            assert_eq!(stats.uploads, 2);
            assert_eq!(stats.posts, 2);
            assert_eq!(stats.total_downloads, 3);
        }

        #[tokio::test]
        async fn test_user_profile_resolves_relationships() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            let record = ingest(&index, "Ubuntu ISO", 1, bob.id);
            index.bookmark_torrent(alice.id, record.info_hash).unwrap();
            index.follow_user(bob.id, alice.id).unwrap();

            let profile = index.user_profile("alice", Some(bob.id)).unwrap();
            assert_eq!(profile.username, "alice");
            assert!(profile.is_following);
            assert_eq!(profile.followers.len(), 1);
            assert_eq!(profile.followers[0].username, "bob");
            assert_eq!(profile.bookmarks.len(), 1);
            assert_eq!(profile.bookmarks[0].name, "Ubuntu ISO");
            assert_eq!(profile.bookmarks[0].category, TorrentCategory::Movies);

            let anonymous = index.user_profile("alice", None).unwrap();
            assert!(!anonymous.is_following);
            assert!(index.user_profile("nobody", None).is_none());
        }

        #[tokio::test]
        async fn test_profile_drops_bookmarks_of_removed_torrents() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let record = ingest(&index, "Ubuntu ISO", 1, alice.id);
            index.bookmark_torrent(alice.id, record.info_hash).unwrap();
            index.remove_torrent(&record.info_hash);
            let profile = index.user_profile("alice", None).unwrap();
            assert!(profile.bookmarks.is_empty());
        }

        #[tokio::test]
        async fn test_thread_summary_reply_count_and_last_post() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let bob = register(&index, "bob");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (lonely, _) = index.create_thread(forum.id, alice.id, "Lonely", "only the opener").unwrap();
            let (active, _) = index.create_thread(forum.id, alice.id, "Active", "opener").unwrap();
            index.create_post(active.id, bob.id, "latest word").unwrap();

            let summaries = index.threads_with_stats(forum.id);
            let lonely_summary = summaries.iter().find(|summary| summary.id == lonely.id).unwrap();
            let active_summary = summaries.iter().find(|summary| summary.id == active.id).unwrap();
            assert_eq!(lonely_summary.reply_count, 0);
            assert!(lonely_summary.last_post.is_none());
            assert_eq!(active_summary.reply_count, 1);
            let last_post = active_summary.last_post.as_ref().unwrap();
            assert_eq!(last_post.author.username, "bob");
        }

        #[tokio::test]
        async fn test_thread_view_resolves_forum_name() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "opening").unwrap();
            let view = index.thread_view(thread.id).unwrap();
            assert_eq!(view.forum_name, "General");
            assert_eq!(view.author.username, "alice");
            assert!(index.thread_view(crate::index::structs::thread_id::ThreadId::generate()).is_none());
        }

        #[tokio::test]
        async fn test_thread_posts_page_renders_markup() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "Hello", "[b]shouting[/b]").unwrap();
            let page = index.thread_posts_page(thread.id, 1, 5).unwrap();
            assert_eq!(page.entries.len(), 1);
            assert_eq!(page.entries[0].content, "<strong>shouting</strong>");
            assert_eq!(page.entries[0].author.username, "alice");
            assert_eq!(page.entries[0].author_since, Some(alice.created_at));
        }

        #[tokio::test]
        async fn test_thread_posts_page_unknown_thread() {
            let index = test_index().await;
            let missing = index.thread_posts_page(crate::index::structs::thread_id::ThreadId::generate(), 1, 5);
            assert!(missing.is_none());
        }

        #[tokio::test]
        async fn test_deleted_author_resolves_to_placeholder() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let ghost = register(&index, "ghost");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, ghost.id, "Haunted", "boo").unwrap();
            index.create_post(thread.id, alice.id, "who said that").unwrap();
            index.remove_user(ghost.id);
            let page = index.thread_posts_page(thread.id, 1, 5).unwrap();
            assert_eq!(page.entries[0].author, UserSummary::deleted());
            assert_eq!(page.entries[0].author_since, None);
            assert_eq!(page.entries[1].author.username, "alice");
        }

        #[tokio::test]
        async fn test_uploads_by_user_newest_first() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            index.add_torrent(InfoHash([1u8; 20]), stored_torrent("older", 1, alice.id, 0, 100));
            index.add_torrent(InfoHash([2u8; 20]), stored_torrent("newer", 2, alice.id, 0, 200));
            let uploads = index.uploads_by_user(alice.id);
            assert_eq!(uploads.len(), 2);
            assert_eq!(uploads[0].name, "newer");
            assert_eq!(uploads[1].name, "older");
            assert_eq!(uploads[0].uploader.username, "alice");
        }

        #[tokio::test]
        async fn test_user_post_views_carry_thread_titles() {
            let index = test_index().await;
            let alice = register(&index, "alice");
            let forum = index.create_forum("General", "General discussion", ForumKind::Forum).unwrap();
            let (thread, _) = index.create_thread(forum.id, alice.id, "My thread", "[i]hello[/i]").unwrap();
            index.create_post(thread.id, alice.id, "plain reply").unwrap();
            let views = index.user_post_views(alice.id);
            assert_eq!(views.len(), 2);
            assert_eq!(views[0].thread_title, "My thread");
            assert_eq!(views[0].content, "plain reply");
            assert_eq!(views[1].content, "<em>hello</em>");
        }
    }
}
