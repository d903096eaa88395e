use std::sync::atomic::Ordering;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl TorrentIndex {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_save: self.stats.timestamp_run_save.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            torrents: self.stats.torrents.load(Ordering::SeqCst),
            torrents_updates: self.stats.torrents_updates.load(Ordering::SeqCst),
            users: self.stats.users.load(Ordering::SeqCst),
            users_updates: self.stats.users_updates.load(Ordering::SeqCst),
            forums: self.stats.forums.load(Ordering::SeqCst),
            forums_updates: self.stats.forums_updates.load(Ordering::SeqCst),
            threads: self.stats.threads.load(Ordering::SeqCst),
            threads_updates: self.stats.threads_updates.load(Ordering::SeqCst),
            posts: self.stats.posts.load(Ordering::SeqCst),
            posts_updates: self.stats.posts_updates.load(Ordering::SeqCst),
            searches_handled: self.stats.searches_handled.load(Ordering::SeqCst),
            lucky_searches_handled: self.stats.lucky_searches_handled.load(Ordering::SeqCst),
            downloads_tracked: self.stats.downloads_tracked.load(Ordering::SeqCst),
            uploads_handled: self.stats.uploads_handled.load(Ordering::SeqCst),
            uploads_rejected: self.stats.uploads_rejected.load(Ordering::SeqCst),
            registrations_handled: self.stats.registrations_handled.load(Ordering::SeqCst),
            logins_handled: self.stats.logins_handled.load(Ordering::SeqCst),
            logins_failed: self.stats.logins_failed.load(Ordering::SeqCst),
            api_handled: self.stats.api_handled.load(Ordering::SeqCst),
            api_not_found: self.stats.api_not_found.load(Ordering::SeqCst),
            api_failure: self.stats.api_failure.load(Ordering::SeqCst),
            api_unauthorized: self.stats.api_unauthorized.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::Torrents => {
                if value > 0 { self.stats.torrents.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.torrents.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::TorrentsUpdates => {
                if value > 0 { self.stats.torrents_updates.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.torrents_updates.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Users => {
                if value > 0 { self.stats.users.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.users.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::UsersUpdates => {
                if value > 0 { self.stats.users_updates.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.users_updates.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Forums => {
                if value > 0 { self.stats.forums.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.forums.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ForumsUpdates => {
                if value > 0 { self.stats.forums_updates.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.forums_updates.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Threads => {
                if value > 0 { self.stats.threads.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.threads.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ThreadsUpdates => {
                if value > 0 { self.stats.threads_updates.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.threads_updates.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Posts => {
                if value > 0 { self.stats.posts.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.posts.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::PostsUpdates => {
                if value > 0 { self.stats.posts_updates.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.posts_updates.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::TimestampSave => {
                if value > 0 { self.stats.timestamp_run_save.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.timestamp_run_save.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::TimestampConsole => {
                if value > 0 { self.stats.timestamp_run_console.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.timestamp_run_console.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::SearchesHandled => {
                if value > 0 { self.stats.searches_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.searches_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::LuckySearchesHandled => {
                if value > 0 { self.stats.lucky_searches_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.lucky_searches_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::DownloadsTracked => {
                if value > 0 { self.stats.downloads_tracked.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.downloads_tracked.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::UploadsHandled => {
                if value > 0 { self.stats.uploads_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.uploads_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::UploadsRejected => {
                if value > 0 { self.stats.uploads_rejected.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.uploads_rejected.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::RegistrationsHandled => {
                if value > 0 { self.stats.registrations_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.registrations_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::LoginsHandled => {
                if value > 0 { self.stats.logins_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.logins_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::LoginsFailed => {
                if value > 0 { self.stats.logins_failed.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.logins_failed.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiHandled => {
                if value > 0 { self.stats.api_handled.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_handled.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiNotFound => {
                if value > 0 { self.stats.api_not_found.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_not_found.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiFailure => {
                if value > 0 { self.stats.api_failure.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_failure.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiUnauthorized => {
                if value > 0 { self.stats.api_unauthorized.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_unauthorized.fetch_sub(-value, Ordering::SeqCst); }
            }
        }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::Torrents => {
                self.stats.torrents.store(value, Ordering::SeqCst);
            }
            StatsEvent::TorrentsUpdates => {
                self.stats.torrents_updates.store(value, Ordering::SeqCst);
            }
            StatsEvent::Users => {
                self.stats.users.store(value, Ordering::SeqCst);
            }
            StatsEvent::UsersUpdates => {
                self.stats.users_updates.store(value, Ordering::SeqCst);
            }
            StatsEvent::Forums => {
                self.stats.forums.store(value, Ordering::SeqCst);
            }
            StatsEvent::ForumsUpdates => {
                self.stats.forums_updates.store(value, Ordering::SeqCst);
            }
            StatsEvent::Threads => {
                self.stats.threads.store(value, Ordering::SeqCst);
            }
            StatsEvent::ThreadsUpdates => {
                self.stats.threads_updates.store(value, Ordering::SeqCst);
            }
            StatsEvent::Posts => {
                self.stats.posts.store(value, Ordering::SeqCst);
            }
            StatsEvent::PostsUpdates => {
                self.stats.posts_updates.store(value, Ordering::SeqCst);
            }
            StatsEvent::TimestampSave => {
                self.stats.timestamp_run_save.store(value, Ordering::SeqCst);
            }
            StatsEvent::TimestampConsole => {
                self.stats.timestamp_run_console.store(value, Ordering::SeqCst);
            }
            StatsEvent::SearchesHandled => {
                self.stats.searches_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::LuckySearchesHandled => {
                self.stats.lucky_searches_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::DownloadsTracked => {
                self.stats.downloads_tracked.store(value, Ordering::SeqCst);
            }
            StatsEvent::UploadsHandled => {
                self.stats.uploads_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::UploadsRejected => {
                self.stats.uploads_rejected.store(value, Ordering::SeqCst);
            }
            StatsEvent::RegistrationsHandled => {
                self.stats.registrations_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::LoginsHandled => {
                self.stats.logins_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::LoginsFailed => {
                self.stats.logins_failed.store(value, Ordering::SeqCst);
            }
            StatsEvent::ApiHandled => {
                self.stats.api_handled.store(value, Ordering::SeqCst);
            }
            StatsEvent::ApiNotFound => {
                self.stats.api_not_found.store(value, Ordering::SeqCst);
            }
            StatsEvent::ApiFailure => {
                self.stats.api_failure.store(value, Ordering::SeqCst);
            }
            StatsEvent::ApiUnauthorized => {
                self.stats.api_unauthorized.store(value, Ordering::SeqCst);
            }
        }
        self.get_stats()
    }
}
