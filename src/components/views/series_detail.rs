use crate::api::{format_added_at, ApiError};
use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::prelude::*;

#[component]
pub fn SeriesDetailView(series_id: i64) -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let detail = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            let client = build_client(&settings, session.as_ref());
            let series = client.get_series_detail(series_id).await?;
            let chapters = client.get_chapters(series_id).await?;
            Ok::<_, ApiError>((series, chapters))
        }
    });

    // Opening the detail acknowledges the "new chapters" badge
    use_effect(move || {
        let has_new = match &*detail.read() {
            Some(Ok((series, _))) => series.has_new_chapter,
            _ => false,
        };
        if has_new {
            spawn(async move {
                let settings = server_settings();
                let session_value = session();
                let _ = build_client(&settings, session_value.as_ref())
                    .clear_new_flag(series_id)
                    .await;
            });
        }
    });

    rsx! {
        {match &*detail.read() {
            Some(Ok((series, chapters))) => {
                let cover_url = series.cover_url.as_ref().map(|path| {
                    build_client(&server_settings.peek(), None).media_url(path)
                });
                rsx! {
                    div { class: "space-y-8",
                        header { class: "flex flex-col sm:flex-row items-center sm:items-end gap-6",
                            div { class: "w-44 h-60 rounded-xl bg-zinc-800 overflow-hidden shadow-xl flex-shrink-0",
                                {match &cover_url {
                                    Some(url) => rsx! {
                                        img {
                                            class: "w-full h-full object-cover",
                                            src: "{url}",
                                            alt: "{series.title}",
                                        }
                                    },
                                    None => rsx! {
                                        div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-indigo-600 to-purple-700",
                                            Icon { name: "book".to_string(), class: "w-16 h-16 text-white/70".to_string() }
                                        }
                                    },
                                }}
                            }
                            div { class: "text-center sm:text-left min-w-0",
                                p { class: "text-xs uppercase tracking-widest text-zinc-500 mb-1", "Series" }
                                h1 { class: "text-3xl md:text-4xl font-bold text-white", "{series.title}" }
                                p { class: "text-zinc-400 mt-2", "{series.description}" }
                            }
                        }

                        section {
                            h2 { class: "text-lg font-semibold text-white mb-3", "Chapters" }
                            if chapters.is_empty() {
                                p { class: "text-zinc-400 py-8 text-center", "No chapters available yet" }
                            } else {
                                div { class: "space-y-1",
                                    for chapter in chapters.clone() {
                                        {
                                            let added = format_added_at(chapter.added_at);
                                            let page_count = chapter.pages.len();
                                            let chapter_id = chapter.id;
                                            rsx! {
                                                button {
                                                    class: "w-full flex items-center gap-4 p-3 rounded-xl hover:bg-zinc-800/50 transition-colors text-left",
                                                    onclick: {
                                                        let navigation = navigation.clone();
                                                        move |_| navigation.go_to(AppView::Chapter(chapter_id))
                                                    },
                                                    span { class: "text-sm font-medium text-white", "Chapter {chapter.number}" }
                                                    span { class: "text-xs text-zinc-500",
                                                        {
                                                            if page_count == 1 {
                                                                "1 page".to_string()
                                                            } else {
                                                                format!("{} pages", page_count)
                                                            }
                                                        }
                                                    }
                                                    if !added.is_empty() {
                                                        span { class: "ml-auto text-xs text-zinc-500", "{added}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(error)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    p { class: "text-rose-400", "Failed to load this series" }
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
