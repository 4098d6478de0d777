use crate::api::Series;
use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::prelude::*;

#[component]
pub fn SeriesView() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let series = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move { build_client(&settings, session.as_ref()).get_series().await }
    });

    rsx! {
        div { class: "space-y-8",
            header {
                h1 { class: "text-3xl font-bold text-white mb-2", "Series" }
                p { class: "text-zinc-400", "Paginated image chapters, newest first" }
            }

            {match &*series.read() {
                Some(Ok(items)) if !items.is_empty() => rsx! {
                    div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
                        for entry in items.clone() {
                            SeriesCard {
                                series: entry.clone(),
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| navigation.go_to(AppView::SeriesDetail(entry.id))
                                },
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div { class: "flex flex-col items-center justify-center py-20",
                        Icon { name: "book".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                        h2 { class: "text-xl font-semibold text-white mb-2", "No series yet" }
                        p { class: "text-zinc-400", "Series added to the library will show up here" }
                    }
                },
                Some(Err(error)) => rsx! {
                    div { class: "flex flex-col items-center justify-center py-20",
                        p { class: "text-rose-400", "Failed to load series" }
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
}

#[component]
fn SeriesCard(series: Series, onclick: EventHandler<MouseEvent>) -> Element {
    let server_settings = use_context::<Signal<ServerSettings>>();

    let cover_url = series
        .cover_url
        .as_ref()
        .map(|path| build_client(&server_settings(), None).media_url(path));

    rsx! {
        button {
            class: "group text-left relative",
            onclick: move |e| onclick.call(e),
            div { class: "aspect-[3/4] rounded-xl bg-zinc-800 mb-3 overflow-hidden relative shadow-lg group-hover:shadow-xl transition-shadow",
                {match &cover_url {
                    Some(url) => rsx! {
                        img {
                            class: "w-full h-full object-cover",
                            src: "{url}",
                            alt: "{series.title}",
                            loading: "lazy",
                        }
                    },
                    None => rsx! {
                        div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-indigo-600 to-purple-700",
                            Icon { name: "book".to_string(), class: "w-12 h-12 text-white/70".to_string() }
                        }
                    },
                }}
                if series.has_new_chapter {
                    span { class: "absolute top-2 right-2 px-2 py-0.5 rounded-full bg-emerald-500 text-[10px] font-bold uppercase tracking-wide text-white shadow",
                        "New"
                    }
                }
            }
            h3 { class: "text-sm font-semibold text-white truncate", "{series.title}" }
            p { class: "text-xs text-zinc-400 truncate mt-1", "{series.description}" }
        }
    }
}
