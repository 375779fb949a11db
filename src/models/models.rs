use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of publishing targets an account can connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Youtube,
    Xiaohongshu,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Tiktok,
        Platform::Youtube,
        Platform::Xiaohongshu,
        Platform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown platform")]
pub struct UnknownPlatform;

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiktok" => Ok(Platform::Tiktok),
            "youtube" => Ok(Platform::Youtube),
            "xiaohongshu" => Ok(Platform::Xiaohongshu),
            "facebook" => Ok(Platform::Facebook),
            _ => Err(UnknownPlatform),
        }
    }
}

/// A published video. Immutable once created; ids are epoch-millis based and
/// strictly increasing per account, so sorting by id descending yields
/// newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    /// Human-readable creation time, captured once at publish.
    pub timestamp: String,
}

/// One user's record in the in-memory store. The password stays plaintext on
/// purpose: this is a mock backend, not a security model.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub connected_accounts: HashMap<Platform, bool>,
    pub videos: Vec<Video>,
}

impl Account {
    /// Projection handed out after login. Never includes the password.
    pub fn public_view(&self) -> UserView {
        UserView {
            username: self.username.clone(),
            connected_accounts: self.connected_accounts.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub username: String,
    pub connected_accounts: HashMap<Platform, bool>,
}

/// The top-performing video of a report, with its synthetic view count
/// attached alongside the video's own fields.
#[derive(Debug, Clone, Serialize)]
pub struct TopVideo {
    #[serde(flatten)]
    pub video: Video,
    pub views: u64,
}

/// Synthetic aggregate metrics, recomputed from scratch on every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub top_video: Option<TopVideo>,
    pub platform_performance: HashMap<Platform, u64>,
}
