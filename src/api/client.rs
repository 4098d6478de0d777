//! REST client for the collection/track/series backend.
//!
//! Thin JSON-over-HTTP glue: the backend owns storage, uploads and token
//! issuance; this side only presents the bearer token it was handed at login.

use crate::api::error::ApiError;
use crate::api::models::{
    Chapter, Collection, Credentials, NotifierUpdate, Series, TokenResponse, Track, UserProfile,
};
use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub struct LibraryClient {
    base_url: String,
    token: Option<String>,
}

impl LibraryClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() == 401 {
            return Err(ApiError::AuthRequired);
        }
        let body = response.text().await.unwrap_or_default();
        let message = extract_detail(&body);
        warn!(status = status.as_u16(), %message, "backend request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(HTTP_CLIENT.get(self.api_url(path)))
            .send()
            .await?;
        Ok(Self::check(response).await?.json::<T>().await?)
    }

    // --- auth ---

    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let response = HTTP_CLIENT
            .post(self.api_url("login"))
            .json(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let response = HTTP_CLIENT
            .post(self.api_url("register"))
            .json(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("user/me").await
    }

    pub async fn update_notifier(
        &self,
        telegram_id: &str,
        telegram_token: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .with_auth(HTTP_CLIENT.patch(self.api_url("user/me")))
            .json(&NotifierUpdate {
                telegram_id: telegram_id.to_string(),
                telegram_token: telegram_token.to_string(),
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // --- collections and tracks ---

    pub async fn get_collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.get_json("collections/").await
    }

    pub async fn get_collection(&self, collection_id: i64) -> Result<Collection, ApiError> {
        self.get_json(&format!("collections/{}", collection_id))
            .await
    }

    pub async fn create_collection(
        &self,
        title: &str,
        description: &str,
        cover: Option<(String, Vec<u8>)>,
    ) -> Result<Collection, ApiError> {
        let mut form = Form::new()
            .text("title", title.to_string())
            .text("description", description.to_string());
        if let Some((file_name, bytes)) = cover {
            let part = Part::bytes(bytes)
                .file_name(file_name.clone())
                .mime_str(image_mime(&file_name))?;
            form = form.part("cover", part);
        }

        let response = self
            .with_auth(HTTP_CLIENT.post(self.api_url("collections/")))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_tracks(&self) -> Result<Vec<Track>, ApiError> {
        self.get_json("tracks/").await
    }

    /// Upload a standalone track (not attached to any collection).
    pub async fn upload_track(
        &self,
        title: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Track, ApiError> {
        self.post_track_form("tracks/", title, file_name, bytes)
            .await
    }

    /// Upload a new track straight into a collection.
    pub async fn upload_collection_track(
        &self,
        collection_id: i64,
        title: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Track, ApiError> {
        self.post_track_form(
            &format!("collections/{}/tracks", collection_id),
            title,
            file_name,
            bytes,
        )
        .await
    }

    async fn post_track_form(
        &self,
        path: &str,
        title: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Track, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(audio_mime(file_name))?;
        let form = Form::new().text("title", title.to_string()).part("audio", part);

        let response = self
            .with_auth(HTTP_CLIENT.post(self.api_url(path)))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Attach an existing standalone track to a collection.
    pub async fn attach_track(&self, track_id: i64, collection_id: i64) -> Result<(), ApiError> {
        let response = self
            .with_auth(HTTP_CLIENT.put(self.api_url(&format!("tracks/{}", track_id))))
            .json(&serde_json::json!({ "collection_id": collection_id }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // --- series and chapters ---

    pub async fn get_series(&self) -> Result<Vec<Series>, ApiError> {
        self.get_json("series/").await
    }

    pub async fn get_series_detail(&self, series_id: i64) -> Result<Series, ApiError> {
        self.get_json(&format!("series/{}", series_id)).await
    }

    pub async fn get_chapters(&self, series_id: i64) -> Result<Vec<Chapter>, ApiError> {
        self.get_json(&format!("series/{}/chapters", series_id))
            .await
    }

    pub async fn get_chapter(&self, chapter_id: i64) -> Result<Chapter, ApiError> {
        self.get_json(&format!("chapters/{}", chapter_id)).await
    }

    pub async fn clear_new_flag(&self, series_id: i64) -> Result<(), ApiError> {
        let response = self
            .with_auth(HTTP_CLIENT.post(self.api_url(&format!("series/{}/clear-new", series_id))))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // --- media URLs ---

    /// Absolute URL for streaming a track. The backend serves audio by file
    /// name; tracks that already carry a full URL are passed through.
    pub fn stream_url(&self, track: &Track) -> String {
        if track.audio_url.starts_with("http://") || track.audio_url.starts_with("https://") {
            return track.audio_url.clone();
        }
        let file_name = track
            .audio_url
            .rsplit('/')
            .next()
            .unwrap_or(track.audio_url.as_str());
        format!("{}/api/audio/{}", self.base_url, urlencoding::encode(file_name))
    }

    /// Absolute URL for a cover or page image stored by the backend.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Pull FastAPI-style `{"detail": "..."}` messages out of error bodies.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn audio_mime(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        Some("m4a") | Some("aac") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

fn image_mime(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LibraryClient {
        LibraryClient::new("http://media.test:8002/", None)
    }

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(
            client().api_url("collections/"),
            "http://media.test:8002/api/collections/"
        );
    }

    #[test]
    fn stream_url_uses_the_stored_file_name() {
        let track = Track {
            audio_url: "uploads/audio/demo tape.mp3".to_string(),
            ..Track::default()
        };
        assert_eq!(
            client().stream_url(&track),
            "http://media.test:8002/api/audio/demo%20tape.mp3"
        );
    }

    #[test]
    fn stream_url_passes_absolute_urls_through() {
        let track = Track {
            audio_url: "https://cdn.media.test/direct.mp3".to_string(),
            ..Track::default()
        };
        assert_eq!(client().stream_url(&track), "https://cdn.media.test/direct.mp3");
    }

    #[test]
    fn media_url_joins_relative_paths() {
        assert_eq!(
            client().media_url("uploads/covers/one.jpg"),
            "http://media.test:8002/uploads/covers/one.jpg"
        );
        assert_eq!(
            client().media_url("/uploads/covers/one.jpg"),
            "http://media.test:8002/uploads/covers/one.jpg"
        );
    }

    #[test]
    fn error_bodies_prefer_the_detail_field() {
        assert_eq!(extract_detail(r#"{"detail": "title already used"}"#), "title already used");
        assert_eq!(extract_detail("plain failure"), "plain failure");
    }

    #[test]
    fn audio_mime_covers_common_suffixes() {
        assert_eq!(audio_mime("take.mp3"), "audio/mpeg");
        assert_eq!(audio_mime("take.flac"), "audio/flac");
        assert_eq!(audio_mime("take.bin"), "application/octet-stream");
    }
}
