use crate::components::views::{CollectionsView, TracksView};
use dioxus::prelude::*;

/// Library landing page: flips between the collection grid and the flat list
/// of every track.
#[component]
pub fn HomeView() -> Element {
    let mut show_tracks = use_signal(|| false);

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                h1 { class: "text-3xl font-bold text-white",
                    if show_tracks() {
                        "All Tracks"
                    } else {
                        "Collections"
                    }
                }
                button {
                    class: "px-3 py-1.5 rounded-lg text-sm font-medium bg-zinc-800/80 text-zinc-200 hover:text-white hover:bg-zinc-700/80 transition-colors",
                    onclick: move |_| show_tracks.set(!show_tracks()),
                    if show_tracks() {
                        "Show collections"
                    } else {
                        "Show all tracks"
                    }
                }
            }
            if show_tracks() {
                TracksView {}
            } else {
                CollectionsView {}
            }
        }
    }
}
