use crate::api::Collection;
use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::prelude::*;

#[component]
pub fn CollectionsView() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let collections = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            build_client(&settings, session.as_ref())
                .get_collections()
                .await
        }
    });

    rsx! {
        {match &*collections.read() {
            Some(Ok(items)) if !items.is_empty() => rsx! {
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
                    for collection in items.clone() {
                        CollectionCard {
                            collection: collection.clone(),
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| navigation.go_to(AppView::CollectionDetail(collection.id))
                            },
                        }
                    }
                }
            },
            Some(Ok(_)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon { name: "album".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                    h2 { class: "text-xl font-semibold text-white mb-2", "No collections yet" }
                    p { class: "text-zinc-400", "Add your first mixtape or album" }
                }
            },
            Some(Err(error)) => rsx! {
                div { class: "flex flex-col items-center justify-center py-20",
                    p { class: "text-rose-400", "Failed to load collections" }
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

#[component]
fn CollectionCard(collection: Collection, onclick: EventHandler<MouseEvent>) -> Element {
    let server_settings = use_context::<Signal<ServerSettings>>();

    let cover_url = collection.cover_url.as_ref().map(|path| {
        build_client(&server_settings(), None).media_url(path)
    });

    rsx! {
        button {
            class: "group text-left",
            onclick: move |e| onclick.call(e),
            div { class: "aspect-square rounded-xl bg-zinc-800 mb-3 overflow-hidden relative shadow-lg group-hover:shadow-xl transition-shadow",
                {match &cover_url {
                    Some(url) => rsx! {
                        img {
                            class: "w-full h-full object-cover",
                            src: "{url}",
                            alt: "{collection.title}",
                            loading: "lazy",
                        }
                    },
                    None => rsx! {
                        div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-emerald-600 to-teal-700",
                            Icon { name: "album".to_string(), class: "w-12 h-12 text-white/70".to_string() }
                        }
                    },
                }}
                // Play overlay
                div { class: "absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center",
                    div { class: "w-12 h-12 rounded-full bg-emerald-500 flex items-center justify-center shadow-xl transform scale-90 group-hover:scale-100 transition-transform",
                        Icon { name: "play".to_string(), class: "w-5 h-5 text-white ml-0.5".to_string() }
                    }
                }
            }
            h3 { class: "text-sm font-semibold text-white truncate", "{collection.title}" }
            p { class: "text-xs text-zinc-400 truncate mt-1", "{collection.description}" }
        }
    }
}
