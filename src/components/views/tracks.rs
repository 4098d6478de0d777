use crate::api::{format_added_at, Track};
use crate::components::views::build_client;
use crate::components::Icon;
use crate::db::{AuthSession, ServerSettings};
use crate::playback::{PlaybackController, PlaylistTrack};
use dioxus::prelude::*;

#[component]
pub fn TracksView() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();

    let tracks = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move { build_client(&settings, session.as_ref()).get_tracks().await }
    });

    rsx! {
        {match &*tracks.read() {
            Some(Ok(items)) if !items.is_empty() => rsx! {
                div { class: "space-y-1",
                    for (index, track) in items.clone().into_iter().enumerate() {
                        TrackRow {
                            track,
                            index,
                            tracks: items.clone(),
                        }
                    }
                }
            },
            Some(Ok(_)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon { name: "music".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                    h2 { class: "text-xl font-semibold text-white mb-2", "No tracks yet" }
                    p { class: "text-zinc-400", "Upload a track to get started" }
                }
            },
            Some(Err(error)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    p { class: "text-rose-400", "Failed to load tracks" }
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

/// One row in a track list. Clicking it rebuilds the playlist from the whole
/// list so next/previous and auto-advance walk the visible order.
#[component]
pub fn TrackRow(track: Track, index: usize, tracks: Vec<Track>) -> Element {
    let server_settings = use_context::<Signal<ServerSettings>>();
    let mut playback = use_context::<Signal<PlaybackController>>();

    let stream_url = build_client(&server_settings(), None).stream_url(&track);
    let is_current = playback
        .read()
        .current_track()
        .map(|current| current.stream_url == stream_url)
        .unwrap_or(false);
    let added = format_added_at(track.added_at);
    let display_index = index + 1;

    let on_click_row = {
        let tracks = tracks.clone();
        move |_| {
            let playlist: Vec<PlaylistTrack> = {
                let client = build_client(&server_settings(), None);
                tracks
                    .iter()
                    .map(|track| PlaylistTrack {
                        title: track.title.clone(),
                        stream_url: client.stream_url(track),
                    })
                    .collect()
            };
            let mut controller = playback.write();
            controller.set_playlist(playlist);
            controller.select_track(index);
        }
    };

    rsx! {
        div {
            class: if is_current {
                "w-full flex items-center gap-4 p-3 rounded-xl bg-emerald-500/5 transition-colors group cursor-pointer"
            } else {
                "w-full flex items-center gap-4 p-3 rounded-xl hover:bg-zinc-800/50 transition-colors group cursor-pointer"
            },
            onclick: on_click_row,
            if is_current {
                span { class: "w-6 text-sm text-emerald-400",
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                }
            } else {
                span { class: "w-6 text-sm text-zinc-500 group-hover:hidden", "{display_index}" }
                span { class: "w-6 text-sm text-white hidden group-hover:block",
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            div { class: "min-w-0 flex-1",
                p {
                    class: if is_current { "text-sm font-medium text-emerald-400 truncate" } else { "text-sm font-medium text-white truncate" },
                    "{track.title}"
                }
                if !added.is_empty() {
                    p { class: "text-xs text-zinc-500 truncate", "Added {added}" }
                }
            }
        }
    }
}
