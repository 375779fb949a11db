use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::models::{Account, Platform, UserView, Video};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid username or password")]
    BadCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("user or platform not found")]
    PlatformNotFound,
}

/// In-memory account store. One lock around the whole map: every operation
/// acquires it exactly once, so mutations serialize and a read after a write
/// on the same account always sees the write.
#[derive(Debug)]
pub struct AccountStore {
    accounts: Mutex<HashMap<String, Account>>,
}

impl AccountStore {
    pub fn new(accounts: HashMap<String, Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }

    /// The demo dataset: one creator with two already-published videos.
    pub fn with_seed_data() -> Self {
        let connected_accounts = HashMap::from([
            (Platform::Xiaohongshu, false),
            (Platform::Tiktok, true),
            (Platform::Youtube, true),
            (Platform::Facebook, false),
        ]);
        let videos = vec![
            seed_video(
                1_678_886_400_001,
                "The old doll's stare",
                "Past midnight, the doll on the bookshelf moved its eyes...",
                vec![Platform::Tiktok, Platform::Youtube],
            ),
            seed_video(
                1_678_886_400_000,
                "Footsteps down the hallway",
                "The hallway is empty, yet the footsteps keep coming...",
                vec![Platform::Tiktok],
            ),
        ];
        let creator = Account {
            username: "creator".to_string(),
            password: "password123".to_string(),
            connected_accounts,
            videos,
        };
        Self::new(HashMap::from([(creator.username.clone(), creator)]))
    }

    /// Plain-equality credential check. Returns the public view on success;
    /// unknown user and wrong password are indistinguishable to the caller.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserView, StoreError> {
        let accounts = self.accounts.lock().await;
        let account = accounts.get(username).ok_or(StoreError::BadCredentials)?;
        if account.password != password {
            return Err(StoreError::BadCredentials);
        }
        Ok(account.public_view())
    }

    /// Flips the connection flag for `platform` and returns the updated map.
    /// This is a toggle, not a "set connected": calling it twice restores the
    /// original state.
    pub async fn toggle_connection(
        &self,
        username: &str,
        platform: Platform,
    ) -> Result<HashMap<Platform, bool>, StoreError> {
        let mut accounts = self.accounts.lock().await;
        let account = accounts
            .get_mut(username)
            .ok_or(StoreError::PlatformNotFound)?;
        let flag = account
            .connected_accounts
            .get_mut(&platform)
            .ok_or(StoreError::PlatformNotFound)?;
        *flag = !*flag;
        debug!(username, platform = %platform, connected = *flag, "toggled connection");
        Ok(account.connected_accounts.clone())
    }

    /// All of the account's videos, newest first.
    pub async fn list_videos(&self, username: &str) -> Result<Vec<Video>, StoreError> {
        let accounts = self.accounts.lock().await;
        let account = accounts.get(username).ok_or(StoreError::UserNotFound)?;
        Ok(sorted_newest_first(&account.videos))
    }

    /// The account's videos in insertion order, for analytics input.
    pub async fn videos_snapshot(&self, username: &str) -> Result<Vec<Video>, StoreError> {
        let accounts = self.accounts.lock().await;
        let account = accounts.get(username).ok_or(StoreError::UserNotFound)?;
        Ok(account.videos.clone())
    }

    /// Appends a new video and returns the full list newest-first. The id is
    /// the current epoch-millis, bumped past the newest existing id so that
    /// same-millisecond publishes still get unique, ordered ids.
    pub async fn publish_video(
        &self,
        username: &str,
        title: String,
        description: String,
        platforms: Vec<Platform>,
    ) -> Result<Vec<Video>, StoreError> {
        let mut accounts = self.accounts.lock().await;
        let account = accounts.get_mut(username).ok_or(StoreError::UserNotFound)?;

        let now = Utc::now().timestamp_millis();
        let newest = account.videos.iter().map(|v| v.id).max().unwrap_or(0);
        let id = now.max(newest + 1);

        account.videos.push(Video {
            id,
            title,
            description,
            platforms,
            timestamp: display_timestamp(id),
        });
        debug!(username, id, "published video");
        Ok(sorted_newest_first(&account.videos))
    }
}

fn sorted_newest_first(videos: &[Video]) -> Vec<Video> {
    let mut out = videos.to_vec();
    out.sort_by(|a, b| b.id.cmp(&a.id));
    out
}

fn seed_video(id: i64, title: &str, description: &str, platforms: Vec<Platform>) -> Video {
    Video {
        id,
        title: title.to_string(),
        description: description.to_string(),
        platforms,
        timestamp: display_timestamp(id),
    }
}

fn display_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
