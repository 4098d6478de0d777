use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::html::FileData;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const INPUT_CLASS: &str =
    "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none";
const SELECT_CLASS: &str =
    "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none";
const SUBMIT_CLASS: &str =
    "w-full py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white font-medium transition-colors disabled:opacity-50";

/// Admin-only library management: create collections, upload tracks and
/// attach loose tracks to a collection. The server enforces the role too;
/// this gate only keeps the forms out of regular accounts' way.
#[component]
pub fn LibraryAdminView() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let is_admin = session().map(|session| session.is_admin).unwrap_or(false);

    if !is_admin {
        return rsx! {
            div { class: "flex flex-col items-center justify-center py-20",
                Icon { name: "user".to_string(), class: "w-16 h-16 text-zinc-600 mb-4".to_string() }
                h2 { class: "text-xl font-semibold text-white mb-2", "Administrators only" }
                p { class: "text-zinc-400", "Sign in with an administrator account to manage the library" }
            }
        };
    }

    rsx! {
        div { class: "space-y-10 max-w-2xl mx-auto",
            header {
                h1 { class: "text-3xl font-bold text-white mb-2", "Manage library" }
                p { class: "text-zinc-400", "Create collections, upload tracks, organize loose ones" }
            }
            NewCollectionForm {}
            UploadTrackForm {}
            AttachTrackForm {}
        }
    }
}

#[component]
fn FormNotice(error: Option<String>, success: Option<String>) -> Element {
    rsx! {
        if let Some(message) = error {
            div { class: "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-sm text-rose-200",
                "{message}"
            }
        }
        if let Some(message) = success {
            div { class: "rounded-lg border border-emerald-500/35 bg-emerald-500/10 px-3 py-2 text-sm text-emerald-200",
                "{message}"
            }
        }
    }
}

#[component]
fn NewCollectionForm() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut cover_file = use_signal(|| None::<FileData>);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = {
        let navigation = navigation.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            if busy() {
                return;
            }
            let title_value = title().trim().to_string();
            if title_value.is_empty() {
                error.set(Some("A title is required".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);
            let description_value = description();
            let cover = cover_file();
            let settings = server_settings();
            let session_value = session();
            let navigation = navigation.clone();
            spawn(async move {
                let cover_payload = match cover {
                    Some(file) => match file.read_bytes().await {
                        Ok(bytes) => Some((file.name(), bytes.to_vec())),
                        Err(_) => {
                            error.set(Some("Could not read the cover image".to_string()));
                            busy.set(false);
                            return;
                        }
                    },
                    None => None,
                };

                let client = build_client(&settings, session_value.as_ref());
                match client
                    .create_collection(&title_value, &description_value, cover_payload)
                    .await
                {
                    Ok(created) => {
                        busy.set(false);
                        navigation.go_to(AppView::CollectionDetail(created.id));
                    }
                    Err(err) => {
                        warn!(%err, "failed to create collection");
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        section { class: "rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-5",
            h2 { class: "text-lg font-semibold text-white mb-4", "New collection" }
            form { class: "space-y-4", onsubmit: on_submit,
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Title" }
                    input {
                        r#type: "text",
                        value: "{title}",
                        class: INPUT_CLASS,
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Description" }
                    textarea {
                        value: "{description}",
                        rows: "3",
                        class: INPUT_CLASS,
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Cover image (optional)" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        class: "block w-full text-sm text-zinc-400 file:mr-3 file:px-3 file:py-1.5 file:rounded-lg file:border-0 file:bg-zinc-800 file:text-zinc-200",
                        onchange: move |evt| {
                            cover_file.set(evt.files().first().cloned());
                        },
                    }
                }
                FormNotice { error: error(), success: None }
                button { r#type: "submit", disabled: busy(), class: SUBMIT_CLASS,
                    if busy() {
                        "Creating…"
                    } else {
                        "Create collection"
                    }
                }
            }
        }
    }
}

#[component]
fn UploadTrackForm() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();

    let mut title = use_signal(String::new);
    let mut audio_file = use_signal(|| None::<FileData>);
    let mut collection_choice = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let collections = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            build_client(&settings, session.as_ref())
                .get_collections()
                .await
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let title_value = title().trim().to_string();
        let Some(file) = audio_file() else {
            error.set(Some("Pick an audio file first".to_string()));
            return;
        };
        if title_value.is_empty() {
            error.set(Some("A title is required".to_string()));
            return;
        }

        busy.set(true);
        error.set(None);
        success.set(None);
        let target_collection = collection_choice().parse::<i64>().ok();
        let settings = server_settings();
        let session_value = session();
        spawn(async move {
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(_) => {
                    error.set(Some("Could not read the audio file".to_string()));
                    busy.set(false);
                    return;
                }
            };

            let client = build_client(&settings, session_value.as_ref());
            let file_name = file.name();
            let result = match target_collection {
                Some(collection_id) => {
                    client
                        .upload_collection_track(collection_id, &title_value, &file_name, bytes)
                        .await
                }
                None => client.upload_track(&title_value, &file_name, bytes).await,
            };

            match result {
                Ok(track) => {
                    success.set(Some(format!("\"{}\" uploaded", track.title)));
                    title.set(String::new());
                    audio_file.set(None);
                }
                Err(err) => {
                    warn!(%err, "track upload failed");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-5",
            h2 { class: "text-lg font-semibold text-white mb-4", "Upload a track" }
            form { class: "space-y-4", onsubmit: on_submit,
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Title" }
                    input {
                        r#type: "text",
                        value: "{title}",
                        class: INPUT_CLASS,
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Audio file" }
                    input {
                        r#type: "file",
                        accept: "audio/*",
                        class: "block w-full text-sm text-zinc-400 file:mr-3 file:px-3 file:py-1.5 file:rounded-lg file:border-0 file:bg-zinc-800 file:text-zinc-200",
                        onchange: move |evt| {
                            audio_file.set(evt.files().first().cloned());
                        },
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Collection (optional)" }
                    select {
                        value: "{collection_choice}",
                        class: SELECT_CLASS,
                        onchange: move |e| collection_choice.set(e.value()),
                        option { value: "", "No collection (standalone)" }
                        {match &*collections.read() {
                            Some(Ok(items)) => rsx! {
                                for collection in items.clone() {
                                    option { value: "{collection.id}", "{collection.title}" }
                                }
                            },
                            _ => rsx! {},
                        }}
                    }
                }
                FormNotice { error: error(), success: success() }
                button { r#type: "submit", disabled: busy(), class: SUBMIT_CLASS,
                    if busy() {
                        "Uploading…"
                    } else {
                        "Upload track"
                    }
                }
            }
        }
    }
}

#[component]
fn AttachTrackForm() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();

    let mut collection_choice = use_signal(String::new);
    let mut track_choice = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);

    let collections = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            build_client(&settings, session.as_ref())
                .get_collections()
                .await
        }
    });

    let mut standalone_tracks = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            build_client(&settings, session.as_ref())
                .get_tracks()
                .await
                .map(|tracks| {
                    tracks
                        .into_iter()
                        .filter(|track| track.collection_id.is_none())
                        .collect::<Vec<_>>()
                })
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let (Ok(collection_id), Ok(track_id)) = (
            collection_choice().parse::<i64>(),
            track_choice().parse::<i64>(),
        ) else {
            error.set(Some("Pick a collection and a track".to_string()));
            return;
        };

        busy.set(true);
        error.set(None);
        success.set(None);
        let settings = server_settings();
        let session_value = session();
        spawn(async move {
            let client = build_client(&settings, session_value.as_ref());
            match client.attach_track(track_id, collection_id).await {
                Ok(()) => {
                    success.set(Some("Track attached to the collection".to_string()));
                    track_choice.set(String::new());
                    standalone_tracks.restart();
                }
                Err(err) => {
                    warn!(%err, "failed to attach track");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-5",
            h2 { class: "text-lg font-semibold text-white mb-4", "Attach an existing track" }
            form { class: "space-y-4", onsubmit: on_submit,
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Collection" }
                    select {
                        value: "{collection_choice}",
                        class: SELECT_CLASS,
                        onchange: move |e| collection_choice.set(e.value()),
                        option { value: "", "Select a collection" }
                        {match &*collections.read() {
                            Some(Ok(items)) => rsx! {
                                for collection in items.clone() {
                                    option { value: "{collection.id}", "{collection.title}" }
                                }
                            },
                            _ => rsx! {},
                        }}
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Standalone track" }
                    select {
                        value: "{track_choice}",
                        class: SELECT_CLASS,
                        onchange: move |e| track_choice.set(e.value()),
                        option { value: "", "Select a track" }
                        {match &*standalone_tracks.read() {
                            Some(Ok(items)) => rsx! {
                                for track in items.clone() {
                                    option { value: "{track.id}", "{track.title}" }
                                }
                            },
                            _ => rsx! {},
                        }}
                    }
                }
                FormNotice { error: error(), success: success() }
                button { r#type: "submit", disabled: busy(), class: SUBMIT_CLASS,
                    if busy() {
                        "Attaching…"
                    } else {
                        "Attach track"
                    }
                }
            }
        }
    }
}
