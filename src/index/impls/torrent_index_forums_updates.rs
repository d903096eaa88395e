use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use log::{error, info};
use crate::common::common::current_time_nanos;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::forum_id::ForumId;
use crate::index::structs::forum_record::ForumRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub fn add_forum_update(&self, forum_id: ForumId, forum_record: ForumRecord, updates_action: UpdatesAction) -> (u128, ForumId, ForumRecord, UpdatesAction)
    {
        let mut lock = self.forums_updates.write();
        let timestamp = current_time_nanos();
        lock.insert(timestamp, (forum_id, forum_record.clone(), updates_action));
        self.update_stats(StatsEvent::ForumsUpdates, 1);
        (timestamp, forum_id, forum_record, updates_action)
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_forum_updates(&self) -> HashMap<u128, (ForumId, ForumRecord, UpdatesAction)>
    {
        let lock = self.forums_updates.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_forum_update(&self, timestamp: &u128) -> bool
    {
        let mut lock = self.forums_updates.write();
        match lock.remove(timestamp) {
            None => false,
            Some(_) => {
                self.update_stats(StatsEvent::ForumsUpdates, -1);
                true
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_forum_updates(&self, torrent_index: Arc<TorrentIndex>) -> Result<(), ()>
    {
        let mut mapping: HashMap<ForumId, (u128, ForumRecord, UpdatesAction)> = HashMap::new();
        let mut timestamps_to_remove = vec![];
        for (timestamp, (forum_id, forum_record, updates_action)) in self.get_forum_updates().iter() {
            match mapping.get(forum_id) {
                None => {
                    mapping.insert(*forum_id, (*timestamp, forum_record.clone(), *updates_action));
                }
                Some((seen_timestamp, _, _)) => {
                    if timestamp > seen_timestamp {
                        timestamps_to_remove.push(*seen_timestamp);
                        mapping.insert(*forum_id, (*timestamp, forum_record.clone(), *updates_action));
                    } else {
                        timestamps_to_remove.push(*timestamp);
                    }
                }
            }
        }

        let mapping_len = mapping.len();
        let forums: BTreeMap<ForumId, (ForumRecord, UpdatesAction)> = mapping
            .iter()
            .map(|(forum_id, (_, forum_record, updates_action))| (*forum_id, (forum_record.clone(), *updates_action)))
            .collect();
        match self.save_forums(torrent_index.clone(), forums).await {
            Ok(_) => {
                info!("[SYNC FORUM UPDATES] Synced {mapping_len} forums");
                for (_, (timestamp, _, _)) in mapping.iter() {
                    timestamps_to_remove.push(*timestamp);
                }
            }
            Err(_) => {
                error!("[SYNC FORUM UPDATES] Unable to sync {mapping_len} forums");
            }
        }

        for timestamp in timestamps_to_remove.iter() {
            self.remove_forum_update(timestamp);
        }
        Ok(())
    }
}
