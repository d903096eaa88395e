use std::mem;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use harbor_actix::api::api::api_service;
use harbor_actix::common::common::{http_check_host_and_port_used, setup_logging};
use harbor_actix::config::structs::configuration::Configuration;
use harbor_actix::index::structs::torrent_index::TorrentIndex;
use harbor_actix::stats::enums::stats_event::StatsEvent;
use harbor_actix::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let index = Arc::new(TorrentIndex::new(config.clone(), args.create_databases).await);

            if let Err(error) = index.storage.init() {
                error!("[BOOT] Unable to prepare the blob storage directories: {error}");
                exit(1);
            }

            let db_config = index.config.database.clone();

            if db_config.persistent {
                index.load_torrents(index.clone()).await;
                index.load_users(index.clone()).await;
                index.load_forums(index.clone()).await;
                index.load_threads(index.clone()).await;
                index.load_posts(index.clone()).await;
            }

            let tokio_core = Builder::new_multi_thread().thread_name("core").worker_threads(9).enable_all().build()?;
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio_core.spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut api_futures = Vec::new();
            let mut apis_futures = Vec::new();

            for api_server_object in &config.api_server {
                if api_server_object.enabled {
                    http_check_host_and_port_used(api_server_object.bind_address.clone());
                    let address: SocketAddr = api_server_object.bind_address.parse().unwrap();

                    let (handle, future) = api_service(
                        address,
                        index.clone(),
                        Arc::new(api_server_object.clone())
                    ).await;

                    if api_server_object.ssl {
                        apis_futures.push((handle, future));
                    } else {
                        api_futures.push((handle, future));
                    }
                }
            }

            if !api_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = api_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }
            if !apis_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = apis_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let index_spawn_stats = index.clone();
            let console_interval = index_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio_core.spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            index_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp() + console_interval as i64);
                            let stats = index_spawn_stats.get_stats();

                            info!(
                                "[STATS] Torrents: {} - Updates: {} | Users: {} - Updates: {} | \
                                Forums: {} - Updates: {} | Threads: {} - Updates: {} | Posts: {} - Updates: {}",
                                stats.torrents, stats.torrents_updates, stats.users, stats.users_updates,
                                stats.forums, stats.forums_updates, stats.threads, stats.threads_updates,
                                stats.posts, stats.posts_updates
                            );

                            info!(
                                "[STATS ACTIVITY] Searches:{} Lucky:{} Downloads:{} Uploads:{} Rejected:{} Registrations:{} Logins:{} Failed:{}",
                                stats.searches_handled, stats.lucky_searches_handled, stats.downloads_tracked,
                                stats.uploads_handled, stats.uploads_rejected, stats.registrations_handled,
                                stats.logins_handled, stats.logins_failed
                            );

                            info!(
                                "[STATS API] Handled:{} 404:{} Failure:{} Unauthorized:{}",
                                stats.api_handled, stats.api_not_found, stats.api_failure, stats.api_unauthorized
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            if db_config.persistent {
                let updates_handler = tokio_shutdown.clone();
                let index_spawn_updates = index.clone();
                let update_interval = index_spawn_updates.config.database.persistent_interval;
                info!("[BOOT] Starting thread for database updates with {update_interval} seconds delay...");

                tokio_core.spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(update_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                index_spawn_updates.set_stats(StatsEvent::TimestampSave,
                                    chrono::Utc::now().timestamp() + update_interval as i64);

                                info!("[DATABASE UPDATES] Starting batch updates...");

                                let tasks = vec![
                                    tokio::spawn({
                                        let index = index_spawn_updates.clone();
                                        async move {
                                            let _ = index.save_torrent_updates(index.clone()).await;
                                        }
                                    }),
                                    tokio::spawn({
                                        let index = index_spawn_updates.clone();
                                        async move {
                                            let _ = index.save_user_updates(index.clone()).await;
                                        }
                                    }),
                                    tokio::spawn({
                                        let index = index_spawn_updates.clone();
                                        async move {
                                            let _ = index.save_forum_updates(index.clone()).await;
                                        }
                                    }),
                                    tokio::spawn({
                                        let index = index_spawn_updates.clone();
                                        async move {
                                            let _ = index.save_thread_updates(index.clone()).await;
                                        }
                                    }),
                                    tokio::spawn({
                                        let index = index_spawn_updates.clone();
                                        async move {
                                            let _ = index.save_post_updates(index.clone()).await;
                                        }
                                    }),
                                ];

                                for task in tasks {
                                    let _ = task.await;
                                }

                                info!("[DATABASE UPDATES] Batch updates completed");
                            }
                            _ = updates_handler.handle() => {
                                info!("[BOOT] Shutting down thread for updates...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    Configuration::save_from_config(index.config.clone(), "config.toml");

                    if db_config.persistent {
                        info!("Saving final data to database...");

                        let tasks = vec![
                            tokio::spawn({
                                let index_clone = index.clone();
                                async move {
                                    let _ = index_clone.save_torrent_updates(index_clone.clone()).await;
                                }
                            }),
                            tokio::spawn({
                                let index_clone = index.clone();
                                async move {
                                    let _ = index_clone.save_user_updates(index_clone.clone()).await;
                                }
                            }),
                            tokio::spawn({
                                let index_clone = index.clone();
                                async move {
                                    let _ = index_clone.save_forum_updates(index_clone.clone()).await;
                                }
                            }),
                            tokio::spawn({
                                let index_clone = index.clone();
                                async move {
                                    let _ = index_clone.save_thread_updates(index_clone.clone()).await;
                                }
                            }),
                            tokio::spawn({
                                let index_clone = index.clone();
                                async move {
                                    let _ = index_clone.save_post_updates(index_clone.clone()).await;
                                }
                            }),
                        ];

                        for task in tasks {
                            let _ = task.await;
                        }
                    }

                    tokio::time::sleep(Duration::from_secs(1)).await;
                    info!("Server shutting down completed");

                    mem::forget(tokio_core);
                    Ok(())
                }
            }
        })
}
