use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::prelude::*;

/// Full-width page images for one chapter, with previous/next navigation.
/// Read positions are not tracked here; the viewer is stateless.
#[component]
pub fn ChapterView(chapter_id: i64) -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let chapter = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            build_client(&settings, session.as_ref())
                .get_chapter(chapter_id)
                .await
        }
    });

    rsx! {
        {match &*chapter.read() {
            Some(Ok(chapter)) => {
                let client = build_client(&server_settings.peek(), None);
                let pages: Vec<String> = chapter
                    .pages
                    .iter()
                    .map(|page| client.media_url(page))
                    .collect();
                let previous_id = chapter.previous_chapter_id;
                let next_id = chapter.next_chapter_id;
                let series_id = chapter.series_id;
                rsx! {
                    div { class: "space-y-6 max-w-3xl mx-auto",
                        header { class: "flex items-center justify-between",
                            button {
                                class: "flex items-center gap-2 text-sm text-zinc-400 hover:text-white transition-colors",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| navigation.go_to(AppView::SeriesDetail(series_id))
                                },
                                Icon { name: "arrow-left".to_string(), class: "w-4 h-4".to_string() }
                                "Back to series"
                            }
                            h1 { class: "text-xl font-bold text-white", "Chapter {chapter.number}" }
                        }

                        if pages.is_empty() {
                            p { class: "text-zinc-400 py-16 text-center", "This chapter has no pages" }
                        } else {
                            div { class: "space-y-2",
                                for (page_index, page_url) in pages.clone().into_iter().enumerate() {
                                    {
                                        let page_number = page_index + 1;
                                        rsx! {
                                            img {
                                                class: "w-full rounded-lg shadow",
                                                src: "{page_url}",
                                                alt: "Page {page_number}",
                                                loading: "lazy",
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        // Chapter navigation
                        div { class: "flex items-center justify-between pt-4",
                            button {
                                disabled: previous_id.is_none(),
                                class: if previous_id.is_some() { "flex items-center gap-2 px-4 py-2 rounded-lg bg-zinc-800 hover:bg-zinc-700 text-sm text-white transition-colors" } else { "flex items-center gap-2 px-4 py-2 rounded-lg bg-zinc-900 text-sm text-zinc-600 cursor-not-allowed" },
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| {
                                        if let Some(id) = previous_id {
                                            navigation.go_to(AppView::Chapter(id));
                                        }
                                    }
                                },
                                Icon { name: "arrow-left".to_string(), class: "w-4 h-4".to_string() }
                                "Previous"
                            }
                            button {
                                disabled: next_id.is_none(),
                                class: if next_id.is_some() { "flex items-center gap-2 px-4 py-2 rounded-lg bg-zinc-800 hover:bg-zinc-700 text-sm text-white transition-colors" } else { "flex items-center gap-2 px-4 py-2 rounded-lg bg-zinc-900 text-sm text-zinc-600 cursor-not-allowed" },
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| {
                                        if let Some(id) = next_id {
                                            navigation.go_to(AppView::Chapter(id));
                                        }
                                    }
                                },
                                "Next"
                                Icon { name: "arrow-right".to_string(), class: "w-4 h-4".to_string() }
                            }
                        }
                    }
                }
            }
            Some(Err(error)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    p { class: "text-rose-400", "Failed to load this chapter" }
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
