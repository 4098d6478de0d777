use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    pub id: i64,
    pub title: String,
    #[serde(default, alias = "audioUrl")]
    pub audio_url: String,
    #[serde(default, alias = "collectionId")]
    pub collection_id: Option<i64>,
    #[serde(default, alias = "addedAt")]
    pub added_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Collection {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Series {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: Option<String>,
    #[serde(default, alias = "hasNewChapter")]
    pub has_new_chapter: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Chapter {
    pub id: i64,
    #[serde(default, alias = "seriesId")]
    pub series_id: i64,
    pub number: u32,
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default, alias = "nextChapterId")]
    pub next_chapter_id: Option<i64>,
    #[serde(default, alias = "previousChapterId")]
    pub previous_chapter_id: Option<i64>,
    #[serde(default, alias = "addedAt")]
    pub added_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,
    #[serde(default, alias = "telegramId")]
    pub telegram_id: Option<String>,
    #[serde(default, alias = "telegramToken")]
    pub telegram_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct NotifierUpdate {
    pub telegram_id: String,
    pub telegram_token: String,
}

pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Short "3 Jan 2026" style label for list rows; empty when unknown.
pub fn format_added_at(added_at: Option<DateTime<Utc>>) -> String {
    added_at
        .map(|when| when.format("%-d %b %Y").to_string())
        .unwrap_or_default()
}
