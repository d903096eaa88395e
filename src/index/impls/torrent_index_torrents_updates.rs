use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::SystemTime;
use log::{error, info};
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::torrent_record::TorrentRecord;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub fn add_torrent_update(&self, info_hash: InfoHash, torrent_record: TorrentRecord, updates_action: UpdatesAction) -> bool
    {
        let mut lock = self.torrents_updates.write();
        let timestamp = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap().as_nanos();

        if lock.insert(timestamp, (info_hash, torrent_record, updates_action)).is_none() {
            self.update_stats(StatsEvent::TorrentsUpdates, 1);
            true
        } else {
            false
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_torrent_updates(&self) -> HashMap<u128, (InfoHash, TorrentRecord, UpdatesAction)>
    {
        let lock = self.torrents_updates.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_torrent_update(&self, timestamp: &u128) -> bool
    {
        let mut lock = self.torrents_updates.write();
        if lock.remove(timestamp).is_some() {
            self.update_stats(StatsEvent::TorrentsUpdates, -1);
            true
        } else {
            false
        }
    }

    /// Drains the queue into the database, collapsing entries for the same
    /// info hash to the latest action so one sync writes each key once.
    #[tracing::instrument(level = "debug")]
    pub async fn save_torrent_updates(&self, torrent_index: Arc<TorrentIndex>) -> Result<(), ()>
    {
        let updates = {
            let lock = self.torrents_updates.read_recursive();
            lock.clone()
        };

        if updates.is_empty() {
            return Ok(());
        }

        let mut mapping: HashMap<InfoHash, (u128, TorrentRecord, UpdatesAction)> = HashMap::with_capacity(updates.len());
        let mut timestamps_to_remove = Vec::new();

        for (timestamp, (info_hash, torrent_record, updates_action)) in updates {
            match mapping.entry(info_hash) {
                Entry::Occupied(mut o) => {
                    let existing = o.get();
                    if timestamp > existing.0 {
                        timestamps_to_remove.push(existing.0);
                        o.insert((timestamp, torrent_record, updates_action));
                    } else {
                        timestamps_to_remove.push(timestamp);
                    }
                }
                Entry::Vacant(v) => {
                    v.insert((timestamp, torrent_record, updates_action));
                }
            }
        }

        let mapping_len = mapping.len();
        let torrents_to_save: BTreeMap<InfoHash, (TorrentRecord, UpdatesAction)> = mapping
            .iter()
            .map(|(info_hash, (_, torrent_record, updates_action))| (*info_hash, (torrent_record.clone(), *updates_action)))
            .collect();

        match self.save_torrents(torrent_index, torrents_to_save).await {
            Ok(_) => {
                info!("[SYNC TORRENT UPDATES] Synced {mapping_len} torrents");

                let mut lock = self.torrents_updates.write();
                let mut removed_count = 0i64;

                for (_, (timestamp, _, _)) in mapping {
                    if lock.remove(&timestamp).is_some() {
                        removed_count += 1;
                    }
                }

                for timestamp in timestamps_to_remove {
                    if lock.remove(&timestamp).is_some() {
                        removed_count += 1;
                    }
                }

                if removed_count > 0 {
                    self.update_stats(StatsEvent::TorrentsUpdates, -removed_count);
                }

                Ok(())
            }
            Err(_) => {
                error!("[SYNC TORRENT UPDATES] Unable to sync {mapping_len} torrents");
                Err(())
            }
        }
    }
}
