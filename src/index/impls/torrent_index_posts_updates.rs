use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use log::{error, info};
use crate::common::common::current_time_nanos;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::post_id::PostId;
use crate::index::structs::post_record::PostRecord;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub fn add_post_update(&self, post_id: PostId, post_record: PostRecord, updates_action: UpdatesAction) -> (u128, PostId, PostRecord, UpdatesAction)
    {
        let mut lock = self.posts_updates.write();
        let timestamp = current_time_nanos();
        lock.insert(timestamp, (post_id, post_record.clone(), updates_action));
        self.update_stats(StatsEvent::PostsUpdates, 1);
        (timestamp, post_id, post_record, updates_action)
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_post_updates(&self) -> HashMap<u128, (PostId, PostRecord, UpdatesAction)>
    {
        let lock = self.posts_updates.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_post_update(&self, timestamp: &u128) -> bool
    {
        let mut lock = self.posts_updates.write();
        match lock.remove(timestamp) {
            None => false,
            Some(_) => {
                self.update_stats(StatsEvent::PostsUpdates, -1);
                true
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_post_updates(&self, torrent_index: Arc<TorrentIndex>) -> Result<(), ()>
    {
        let mut mapping: HashMap<PostId, (u128, PostRecord, UpdatesAction)> = HashMap::new();
        let mut timestamps_to_remove = vec![];
        for (timestamp, (post_id, post_record, updates_action)) in self.get_post_updates().iter() {
            match mapping.get(post_id) {
                None => {
                    mapping.insert(*post_id, (*timestamp, post_record.clone(), *updates_action));
                }
                Some((seen_timestamp, _, _)) => {
                    if timestamp > seen_timestamp {
                        timestamps_to_remove.push(*seen_timestamp);
                        mapping.insert(*post_id, (*timestamp, post_record.clone(), *updates_action));
                    } else {
                        timestamps_to_remove.push(*timestamp);
                    }
                }
            }
        }

        let mapping_len = mapping.len();
        let posts: BTreeMap<PostId, (PostRecord, UpdatesAction)> = mapping
            .iter()
            .map(|(post_id, (_, post_record, updates_action))| (*post_id, (post_record.clone(), *updates_action)))
            .collect();
        match self.save_posts(torrent_index.clone(), posts).await {
            Ok(_) => {
                info!("[SYNC POST UPDATES] Synced {mapping_len} posts");
                for (_, (timestamp, _, _)) in mapping.iter() {
                    timestamps_to_remove.push(*timestamp);
                }
            }
            Err(_) => {
                error!("[SYNC POST UPDATES] Unable to sync {mapping_len} posts");
            }
        }

        for timestamp in timestamps_to_remove.iter() {
            self.remove_post_update(timestamp);
        }
        Ok(())
    }
}
