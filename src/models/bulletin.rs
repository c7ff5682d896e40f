//! Bulletin board models.

use serde::{Deserialize, Serialize};

/// A reply under a bulletin message. Replies are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinReply {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

/// A bulletin board post.
///
/// `audience` holds group tags (`(All)`, `(Staff)`) and/or literal usernames;
/// `likes` holds the usernames that currently like the post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinMessage {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub audience: Vec<String>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub replies: Vec<BulletinReply>,
}

/// Request body for posting a bulletin. An empty audience defaults to
/// `["(All)"]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinRequest {
    pub content: String,
    #[serde(default)]
    pub audience: Vec<String>,
}

/// Request body for replying to a bulletin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinReplyRequest {
    pub content: String,
}
