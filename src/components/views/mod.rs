//! Per-screen views: library browsing, series reading, auth and admin forms.

mod chapter_viewer;
mod collection_detail;
mod collections;
mod home;
mod library_admin;
mod login;
mod profile;
mod register;
mod series;
mod series_detail;
pub(crate) mod tracks;

pub use chapter_viewer::ChapterView;
pub use collection_detail::CollectionDetailView;
pub use collections::CollectionsView;
pub use home::HomeView;
pub use library_admin::LibraryAdminView;
pub use login::LoginView;
pub use profile::ProfileView;
pub use register::RegisterView;
pub use series::SeriesView;
pub use series_detail::SeriesDetailView;
pub use tracks::TracksView;

use crate::api::LibraryClient;
use crate::db::{AuthSession, ServerSettings};

/// Client for the configured backend, carrying the session token if present.
pub(crate) fn build_client(
    settings: &ServerSettings,
    session: Option<&AuthSession>,
) -> LibraryClient {
    LibraryClient::new(
        settings.base_url.clone(),
        session.map(|session| session.token.clone()),
    )
}
