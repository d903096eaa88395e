use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::SystemTime;
use log::{error, info};
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub fn add_user_update(&self, user_id: UserId, user_record: UserRecord, updates_action: UpdatesAction) -> bool
    {
        let mut lock = self.users_updates.write();
        let timestamp = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap().as_nanos();

        if lock.insert(timestamp, (user_id, user_record, updates_action)).is_none() {
            self.update_stats(StatsEvent::UsersUpdates, 1);
            true
        } else {
            false
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_user_updates(&self) -> HashMap<u128, (UserId, UserRecord, UpdatesAction)>
    {
        let lock = self.users_updates.read_recursive();
        lock.clone()
    }

    #[tracing::instrument(level = "debug")]
    pub fn remove_user_update(&self, timestamp: &u128) -> bool
    {
        let mut lock = self.users_updates.write();
        if lock.remove(timestamp).is_some() {
            self.update_stats(StatsEvent::UsersUpdates, -1);
            true
        } else {
            false
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_user_updates(&self, torrent_index: Arc<TorrentIndex>) -> Result<(), ()>
    {
        let updates = {
            let lock = self.users_updates.read_recursive();
            lock.clone()
        };

        if updates.is_empty() {
            return Ok(());
        }

        let mut mapping: HashMap<UserId, (u128, UserRecord, UpdatesAction)> = HashMap::with_capacity(updates.len());
        let mut timestamps_to_remove = Vec::new();

        for (timestamp, (user_id, user_record, updates_action)) in updates {
            match mapping.entry(user_id) {
                Entry::Occupied(mut o) => {
                    let existing = o.get();
                    if timestamp > existing.0 {
                        timestamps_to_remove.push(existing.0);
                        o.insert((timestamp, user_record, updates_action));
                    } else {
                        timestamps_to_remove.push(timestamp);
                    }
                }
                Entry::Vacant(v) => {
                    v.insert((timestamp, user_record, updates_action));
                }
            }
        }

        let mapping_len = mapping.len();
        let users_to_save: BTreeMap<UserId, (UserRecord, UpdatesAction)> = mapping
            .iter()
            .map(|(user_id, (_, user_record, updates_action))| (*user_id, (user_record.clone(), *updates_action)))
            .collect();

        match self.save_users(torrent_index, users_to_save).await {
            Ok(_) => {
                info!("[SYNC USER UPDATES] Synced {mapping_len} users");

                let mut lock = self.users_updates.write();
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
                    self.update_stats(StatsEvent::UsersUpdates, -removed_count);
                }

                Ok(())
            }
            Err(_) => {
                error!("[SYNC USER UPDATES] Unable to sync {mapping_len} users");
                Err(())
            }
        }
    }
}
