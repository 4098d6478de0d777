use crate::components::views::tracks::TrackRow;
use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::prelude::*;

#[component]
pub fn CollectionDetailView(collection_id: i64) -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let is_admin = session()
        .map(|session| session.is_admin)
        .unwrap_or(false);

    let collection = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            build_client(&settings, session.as_ref())
                .get_collection(collection_id)
                .await
        }
    });

    rsx! {
        {match &*collection.read() {
            Some(Ok(collection)) => {
                let cover_url = collection.cover_url.as_ref().map(|path| {
                    build_client(&server_settings.peek(), None).media_url(path)
                });
                let tracks = collection.tracks.clone();
                rsx! {
                    div { class: "space-y-8",
                        // Header: cover, title, description
                        header { class: "flex flex-col sm:flex-row items-center sm:items-end gap-6",
                            div { class: "w-48 h-48 rounded-xl bg-zinc-800 overflow-hidden shadow-xl flex-shrink-0",
                                {match &cover_url {
                                    Some(url) => rsx! {
                                        img {
                                            class: "w-full h-full object-cover",
                                            src: "{url}",
                                            alt: "{collection.title}",
                                        }
                                    },
                                    None => rsx! {
                                        div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-emerald-600 to-teal-700",
                                            Icon { name: "album".to_string(), class: "w-16 h-16 text-white/70".to_string() }
                                        }
                                    },
                                }}
                            }
                            div { class: "text-center sm:text-left min-w-0",
                                p { class: "text-xs uppercase tracking-widest text-zinc-500 mb-1", "Collection" }
                                h1 { class: "text-3xl md:text-4xl font-bold text-white", "{collection.title}" }
                                p { class: "text-zinc-400 mt-2", "{collection.description}" }
                                p { class: "text-xs text-zinc-500 mt-2",
                                    {
                                        let count = tracks.len();
                                        if count == 1 {
                                            "1 track".to_string()
                                        } else {
                                            format!("{} tracks", count)
                                        }
                                    }
                                }
                            }
                        }

                        // Track list
                        section {
                            h2 { class: "text-lg font-semibold text-white mb-3", "Tracks" }
                            if tracks.is_empty() {
                                p { class: "text-zinc-400 py-8 text-center", "This collection has no tracks yet" }
                            } else {
                                div { class: "space-y-1",
                                    for (index, track) in tracks.clone().into_iter().enumerate() {
                                        TrackRow {
                                            track,
                                            index,
                                            tracks: tracks.clone(),
                                        }
                                    }
                                }
                            }
                        }

                        if is_admin {
                            div { class: "text-center",
                                button {
                                    class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white text-sm font-medium transition-colors",
                                    onclick: {
                                        let navigation = navigation.clone();
                                        move |_| navigation.go_to(AppView::LibraryAdmin)
                                    },
                                    Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                                    "Add a track"
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(error)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    p { class: "text-rose-400", "Failed to load this collection" }
                    p { class: "text-xs text-zinc-500 mt-2", "{error}" }
                }
            },
            None => rsx! {
                div { class: "flex items-center justify-center py-20",
                    Icon { name: "loader".to_string(), class: "w-8 h-8 text-zinc-500".to_string() }
                }
            },
        }}
    }
}
