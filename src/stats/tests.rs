#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::index::structs::torrent_index::TorrentIndex;
    use crate::stats::enums::stats_event::StatsEvent;

    async fn test_index() -> TorrentIndex
    {
        TorrentIndex::new(Arc::new(Configuration::init()), false).await
    }

    #[tokio::test]
    async fn test_started_timestamp_set() {
        let index = test_index().await;
        let stats = index.get_stats();
        assert!(stats.started > 1_700_000_000);
    }

    #[tokio::test]
    async fn test_update_stats_increments() {
        let index = test_index().await;
        index.update_stats(StatsEvent::Torrents, 1);
        index.update_stats(StatsEvent::Torrents, 1);
        let stats = index.update_stats(StatsEvent::SearchesHandled, 5);
        assert_eq!(stats.torrents, 2);
        assert_eq!(stats.searches_handled, 5);
    }

    #[tokio::test]
    async fn test_update_stats_decrements() {
        let index = test_index().await;
        index.update_stats(StatsEvent::Posts, 10);
        let stats = index.update_stats(StatsEvent::Posts, -3);
        assert_eq!(stats.posts, 7);
    }

    #[tokio::test]
    async fn test_update_stats_zero_is_noop() {
        let index = test_index().await;
        index.update_stats(StatsEvent::DownloadsTracked, 17);
        let stats = index.update_stats(StatsEvent::DownloadsTracked, 0);
        assert_eq!(stats.downloads_tracked, 17);
    }

    #[tokio::test]
    async fn test_set_stats_overwrites() {
        let index = test_index().await;
        index.update_stats(StatsEvent::Users, 4);
        let stats = index.set_stats(StatsEvent::Users, 42);
        assert_eq!(stats.users, 42);
    }

    #[tokio::test]
    async fn test_counters_are_independent() {
        let index = test_index().await;
        index.update_stats(StatsEvent::LoginsHandled, 1);
        index.update_stats(StatsEvent::LoginsFailed, 2);
        let stats = index.get_stats();
        assert_eq!(stats.logins_handled, 1);
        assert_eq!(stats.logins_failed, 2);
        assert_eq!(stats.registrations_handled, 0);
    }

    #[tokio::test]
    async fn test_concurrent_updates_accumulate() {
        let index = Arc::new(test_index().await);
        let mut handles = Vec::new();
        for _ in 0..50 {
            let index_clone = index.clone();
            handles.push(tokio::spawn(async move {
                index_clone.update_stats(StatsEvent::ApiHandled, 1);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(index.get_stats().api_handled, 50);
    }

    #[tokio::test]
    async fn test_stats_snapshot_serializes() {
        let index = test_index().await;
        index.update_stats(StatsEvent::Threads, 3);
        let stats = index.get_stats();
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["threads"], 3);
        assert_eq!(json["forums"], 0);
    }
}
