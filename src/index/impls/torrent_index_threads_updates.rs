use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use log::{error, info};
use crate::common::common::current_time_nanos;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::thread_id::ThreadId;
use crate::index::structs::thread_record::ThreadRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub fn add_thread_update(&self, thread_id: ThreadId, thread_record: ThreadRecord, updates_action: UpdatesAction) -> (u128, ThreadId, ThreadRecord, UpdatesAction)
    {
        let mut lock = self.threads_updates.write();
        let timestamp = current_time_nanos();
        lock.insert(timestamp, (thread_id, thread_record.clone(), updates_action));
        self.update_stats(StatsEvent::ThreadsUpdates, 1);
        (timestamp, thread_id, thread_record, updates_action)
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_thread_updates(&self) -> HashMap<u128, (ThreadId, ThreadRecord, UpdatesAction)>
    {
        let lock = self.threads_updates.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_thread_update(&self, timestamp: &u128) -> bool
    {
        let mut lock = self.threads_updates.write();
        match lock.remove(timestamp) {
            None => false,
            Some(_) => {
                self.update_stats(StatsEvent::ThreadsUpdates, -1);
                true
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_thread_updates(&self, torrent_index: Arc<TorrentIndex>) -> Result<(), ()>
    {
        let mut mapping: HashMap<ThreadId, (u128, ThreadRecord, UpdatesAction)> = HashMap::new();
        let mut timestamps_to_remove = vec![];
        for (timestamp, (thread_id, thread_record, updates_action)) in self.get_thread_updates().iter() {
            match mapping.get(thread_id) {
                None => {
                    mapping.insert(*thread_id, (*timestamp, thread_record.clone(), *updates_action));
                }
                Some((seen_timestamp, _, _)) => {
                    if timestamp > seen_timestamp {
                        timestamps_to_remove.push(*seen_timestamp);
                        mapping.insert(*thread_id, (*timestamp, thread_record.clone(), *updates_action));
                    } else {
                        timestamps_to_remove.push(*timestamp);
                    }
                }
            }
        }

        let mapping_len = mapping.len();
        let threads: BTreeMap<ThreadId, (ThreadRecord, UpdatesAction)> = mapping
            .iter()
            .map(|(thread_id, (_, thread_record, updates_action))| (*thread_id, (thread_record.clone(), *updates_action)))
            .collect();
        match self.save_threads(torrent_index.clone(), threads).await {
            Ok(_) => {
                info!("[SYNC THREAD UPDATES] Synced {mapping_len} threads");
                for (_, (timestamp, _, _)) in mapping.iter() {
                    timestamps_to_remove.push(*timestamp);
                }
            }
            Err(_) => {
                error!("[SYNC THREAD UPDATES] Unable to sync {mapping_len} threads");
            }
        }

        for timestamp in timestamps_to_remove.iter() {
            self.remove_thread_update(timestamp);
        }
        Ok(())
    }
}
