use crate::components::views::{
    ChapterView, CollectionDetailView, HomeView, LibraryAdminView, LoginView, ProfileView,
    RegisterView, SeriesDetailView, SeriesView,
};
use crate::components::{AppView, AudioController, Navbar, Navigation, Player, VolumeSignal};
use crate::db::{self, AuthSession, PlayerSettings, ServerSettings};
use crate::playback::{platform_resource, PlaybackController};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let mut session = use_signal(|| None::<AuthSession>);
    let mut server_settings = use_signal(ServerSettings::default);
    let mut volume = use_signal(|| db::DEFAULT_VOLUME);
    let current_view = use_signal(|| AppView::Home);
    let back_stack = use_signal(Vec::<AppView>::new);
    let navigation = Navigation::new(current_view.clone(), back_stack.clone());
    let playback = use_signal(|| PlaybackController::new(platform_resource()));
    let mut settings_loaded = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| session);
    use_context_provider(|| server_settings);
    use_context_provider(|| navigation.clone());
    use_context_provider(|| playback);
    use_context_provider(|| VolumeSignal(volume));

    // Restore the saved session and settings on mount
    use_effect(move || {
        if let Some(saved) = db::load_session() {
            info!(username = %saved.username, "restored saved session");
            session.set(Some(saved));
        }
        server_settings.set(db::load_server_settings());
        volume.set(db::load_player_settings().volume.clamp(0.0, 1.0));
        settings_loaded.set(true);
    });

    // Auto-save the volume when it changes
    use_effect(move || {
        let vol = volume();
        if settings_loaded() {
            db::save_player_settings(&PlayerSettings { volume: vol });
        }
    });

    // Auto-save the backend address when it changes
    use_effect(move || {
        let settings = server_settings();
        if settings_loaded() {
            db::save_server_settings(&settings);
        }
    });

    let view = current_view.clone();

    rsx! {
        div { class: "app-container flex flex-col min-h-screen text-white",
            Navbar {}

            // Main scrollable content
            main { class: "flex-1 overflow-y-auto main-scroll",
                div { class: "page-shell max-w-6xl mx-auto px-4 md:px-8 py-6 pb-36",
                    {match view() {
                        AppView::Home => rsx! {
                            HomeView {}
                        },
                        AppView::CollectionDetail(collection_id) => rsx! {
                            CollectionDetailView { collection_id }
                        },
                        AppView::Series => rsx! {
                            SeriesView {}
                        },
                        AppView::SeriesDetail(series_id) => rsx! {
                            SeriesDetailView { series_id }
                        },
                        AppView::Chapter(chapter_id) => rsx! {
                            ChapterView { chapter_id }
                        },
                        AppView::Login => rsx! {
                            LoginView {}
                        },
                        AppView::Register => rsx! {
                            RegisterView {}
                        },
                        AppView::LibraryAdmin => rsx! {
                            LibraryAdminView {}
                        },
                        AppView::Profile => rsx! {
                            ProfileView {}
                        },
                    }}
                }
            }

            // Fixed bottom player
            Player {}
        }

        // Audio wiring - manages playback separately from UI
        AudioController {}
    }
}
