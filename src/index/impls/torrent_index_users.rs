use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_map::Entry;
use std::sync::Arc;
use chrono::Utc;
use log::{error, info};
use crate::index::enums::index_error::IndexError;
use crate::index::enums::updates_action::UpdatesAction;
use crate::index::enums::user_role::UserRole;
use crate::index::structs::info_hash::InfoHash;
use crate::index::structs::torrent_index::TorrentIndex;
use crate::index::structs::user_avatar::UserAvatar;
use crate::index::structs::user_id::UserId;
use crate::index::structs::user_record::UserRecord;
use crate::security;
use crate::stats::enums::stats_event::StatsEvent;

impl TorrentIndex {
    #[tracing::instrument(level = "debug")]
    pub async fn load_users(&self, torrent_index: Arc<TorrentIndex>)
    {
        if let Ok(users) = self.sqlx.load_users(torrent_index).await {
            info!("Loaded {users} users");
        }
    }

    #[tracing::instrument(level = "debug")]
    pub async fn save_users(&self, torrent_index: Arc<TorrentIndex>, users: BTreeMap<UserId, (UserRecord, UpdatesAction)>) -> Result<(), ()>
    {
        let users_len = users.len();
        match self.sqlx.save_users(torrent_index, users).await {
            Ok(_) => {
                info!("[SYNC USERS] Synced {users_len} users");
                Ok(())
            }
            Err(_) => {
                error!("[SYNC USERS] Unable to sync {users_len} users");
                Err(())
            }
        }
    }

    /// Creates an account. Username and email uniqueness are both checked
    /// under the single write lock, so two concurrent registrations can
    /// never both claim the same name.
    #[tracing::instrument(level = "debug", skip(password_hash))]
    pub fn register_user(&self, username: &str, email: &str, password_hash: String) -> Result<UserRecord, IndexError>
    {
        let record = {
            let mut lock = self.users.write();
            for user in lock.values() {
                if user.username == username {
                    return Err(IndexError::DuplicateUsername);
                }
                if user.email == email {
                    return Err(IndexError::DuplicateEmail);
                }
            }
            let record = UserRecord {
                id: UserId::generate(),
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::Member,
                avatar: None,
                following: BTreeSet::new(),
                bookmarks: BTreeSet::new(),
                created_at: Utc::now().timestamp(),
            };
            lock.insert(record.id, record.clone());
            record
        };

        self.update_stats(StatsEvent::Users, 1);
        self.update_stats(StatsEvent::RegistrationsHandled, 1);
        if self.config.database.persistent {
            self.add_user_update(record.id, record.clone(), UpdatesAction::Add);
        }
        Ok(record)
    }

    /// Verifies credentials against the stored hash. The failure is a
    /// single non-specific error whether the email is unknown or the
    /// password wrong, so accounts cannot be enumerated.
    #[tracing::instrument(level = "debug", skip(password))]
    pub fn authenticate_user(&self, email: &str, password: &str) -> Result<UserRecord, IndexError>
    {
        let candidate = {
            let lock = self.users.read_recursive();
            lock.values().find(|user| user.email == email).cloned()
        };

        match candidate {
            Some(record) if security::security::verify_password(password, &record.password_hash) => {
                self.update_stats(StatsEvent::LoginsHandled, 1);
                Ok(record)
            }
            _ => {
                self.update_stats(StatsEvent::LoginsFailed, 1);
                Err(IndexError::InvalidCredentials)
            }
        }
    }

    /// Direct insert used by the database load path and tests. Does not
    /// touch the update queue.
    #[tracing::instrument(level = "debug")]
    pub fn add_user(&self, user_id: UserId, user_record: UserRecord) -> bool
    {
        let mut lock = self.users.write();
        match lock.entry(user_id) {
            Entry::Vacant(v) => {
                self.update_stats(StatsEvent::Users, 1);
                v.insert(user_record);
                true
            }
            Entry::Occupied(mut o) => {
                o.insert(user_record);
                false
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_user(&self, user_id: UserId) -> Option<UserRecord>
    {
        let lock = self.users.read_recursive();
        lock.get(&user_id).cloned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_user_by_username(&self, username: &str) -> Option<UserRecord>
    {
        let lock = self.users.read_recursive();
        lock.values().find(|user| user.username == username).cloned()
    }

    #[tracing::instrument(level = "debug")]
    pub fn get_users(&self) -> BTreeMap<UserId, UserRecord>
    {
        let lock = self.users.read_recursive();
        lock.clone()
    }

    /// Removes an account and strips it from every other user's following
    /// set, so the follow graph never keeps edges to missing accounts.
    #[tracing::instrument(level = "debug")]
    pub fn remove_user(&self, user_id: UserId) -> Option<UserRecord>
    {
        let (removed, unfollowed) = {
            let mut lock = self.users.write();
            let removed = lock.remove(&user_id);
            let mut unfollowed = Vec::new();
            if removed.is_some() {
                for user in lock.values_mut() {
                    if user.following.remove(&user_id) {
                        unfollowed.push(user.clone());
                    }
                }
            }
            (removed, unfollowed)
        };

        if let Some(record) = removed {
            self.update_stats(StatsEvent::Users, -1);
            if self.config.database.persistent {
                self.add_user_update(user_id, record.clone(), UpdatesAction::Remove);
                for user in unfollowed {
                    self.add_user_update(user.id, user, UpdatesAction::Update);
                }
            }
            Some(record)
        } else {
            None
        }
    }

    /// Adds `target` to `follower`'s following set. Idempotent: following
    /// an already-followed user succeeds without changing anything.
    #[tracing::instrument(level = "debug")]
    pub fn follow_user(&self, follower: UserId, target: UserId) -> Result<bool, IndexError>
    {
        if follower == target {
            return Err(IndexError::ValidationError("you cannot follow yourself".to_string()));
        }

        let (added, record) = {
            let mut lock = self.users.write();
            if !lock.contains_key(&target) {
                return Err(IndexError::NotFound("user".to_string()));
            }
            match lock.get_mut(&follower) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    let added = user.following.insert(target);
                    (added, user.clone())
                }
            }
        };

        if added && self.config.database.persistent {
            self.add_user_update(record.id, record, UpdatesAction::Update);
        }
        Ok(added)
    }

    /// Removes `target` from `follower`'s following set. Unfollowing a
    /// user that was never followed is a no-op, not an error.
    #[tracing::instrument(level = "debug")]
    pub fn unfollow_user(&self, follower: UserId, target: UserId) -> Result<bool, IndexError>
    {
        let (removed, record) = {
            let mut lock = self.users.write();
            match lock.get_mut(&follower) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    let removed = user.following.remove(&target);
                    (removed, user.clone())
                }
            }
        };

        if removed && self.config.database.persistent {
            self.add_user_update(record.id, record, UpdatesAction::Update);
        }
        Ok(removed)
    }

    /// Adds a torrent to the user's bookmark set. Idempotent like
    /// [`TorrentIndex::follow_user`].
    #[tracing::instrument(level = "debug")]
    pub fn bookmark_torrent(&self, user_id: UserId, info_hash: InfoHash) -> Result<bool, IndexError>
    {
        {
            let torrents = self.torrents.read_recursive();
            if !torrents.contains_key(&info_hash) {
                return Err(IndexError::NotFound("torrent".to_string()));
            }
        }

        let (added, record) = {
            let mut lock = self.users.write();
            match lock.get_mut(&user_id) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    let added = user.bookmarks.insert(info_hash);
                    (added, user.clone())
                }
            }
        };

        if added && self.config.database.persistent {
            self.add_user_update(record.id, record, UpdatesAction::Update);
        }
        Ok(added)
    }

    #[tracing::instrument(level = "debug")]
    pub fn unbookmark_torrent(&self, user_id: UserId, info_hash: InfoHash) -> Result<bool, IndexError>
    {
        let (removed, record) = {
            let mut lock = self.users.write();
            match lock.get_mut(&user_id) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    let removed = user.bookmarks.remove(&info_hash);
                    (removed, user.clone())
                }
            }
        };

        if removed && self.config.database.persistent {
            self.add_user_update(record.id, record, UpdatesAction::Update);
        }
        Ok(removed)
    }

    #[tracing::instrument(level = "debug", skip(avatar))]
    pub fn update_user_avatar(&self, user_id: UserId, avatar: UserAvatar) -> Result<(), IndexError>
    {
        let record = {
            let mut lock = self.users.write();
            match lock.get_mut(&user_id) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    user.avatar = Some(avatar);
                    user.clone()
                }
            }
        };

        if self.config.database.persistent {
            self.add_user_update(record.id, record, UpdatesAction::Update);
        }
        Ok(())
    }

    /// Changes the account email, keeping email uniqueness intact.
    #[tracing::instrument(level = "debug")]
    pub fn update_user_email(&self, user_id: UserId, email: &str) -> Result<UserRecord, IndexError>
    {
        let record = {
            let mut lock = self.users.write();
            if lock.values().any(|user| user.email == email && user.id != user_id) {
                return Err(IndexError::DuplicateEmail);
            }
            match lock.get_mut(&user_id) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    user.email = email.to_string();
                    user.clone()
                }
            }
        };

        if self.config.database.persistent {
            self.add_user_update(record.id, record.clone(), UpdatesAction::Update);
        }
        Ok(record)
    }

    /// Replaces the stored password hash. Re-verifying the current
    /// password is the caller's job, this is a plain setter.
    #[tracing::instrument(level = "debug", skip(password_hash))]
    pub fn set_user_password(&self, user_id: UserId, password_hash: String) -> Result<(), IndexError>
    {
        let record = {
            let mut lock = self.users.write();
            match lock.get_mut(&user_id) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    user.password_hash = password_hash;
                    user.clone()
                }
            }
        };

        if self.config.database.persistent {
            self.add_user_update(record.id, record, UpdatesAction::Update);
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug")]
    pub fn set_user_role(&self, user_id: UserId, role: UserRole) -> Result<UserRecord, IndexError>
    {
        let record = {
            let mut lock = self.users.write();
            match lock.get_mut(&user_id) {
                None => return Err(IndexError::NotFound("user".to_string())),
                Some(user) => {
                    user.role = role;
                    user.clone()
                }
            }
        };

        if self.config.database.persistent {
            self.add_user_update(record.id, record.clone(), UpdatesAction::Update);
        }
        Ok(record)
    }
}
