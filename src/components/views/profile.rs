use crate::components::views::build_client;
use crate::components::{AppView, Icon, Navigation};
use crate::db::{AuthSession, ServerSettings};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const INPUT_CLASS: &str =
    "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none";

/// Account page: Telegram notifier credentials and the backend address.
#[component]
pub fn ProfileView() -> Element {
    let session = use_context::<Signal<Option<AuthSession>>>();
    let mut server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let mut telegram_id = use_signal(String::new);
    let mut telegram_token = use_signal(String::new);
    let mut notifier_prefilled = use_signal(|| false);
    let mut notifier_busy = use_signal(|| false);
    let mut notifier_error = use_signal(|| None::<String>);
    let mut notifier_saved = use_signal(|| false);

    let mut base_url = use_signal(String::new);
    let mut url_prefilled = use_signal(|| false);
    let mut url_saved = use_signal(|| false);

    let profile = use_resource(move || {
        let settings = server_settings();
        let session = session();
        async move {
            match session {
                Some(session) => build_client(&settings, Some(&session)).me().await.map(Some),
                None => Ok(None),
            }
        }
    });

    // Prefill the notifier form once the profile arrives
    use_effect(move || {
        if notifier_prefilled() {
            return;
        }
        if let Some(Ok(Some(me))) = &*profile.read() {
            telegram_id.set(me.telegram_id.clone().unwrap_or_default());
            telegram_token.set(me.telegram_token.clone().unwrap_or_default());
            notifier_prefilled.set(true);
        }
    });

    // Prefill the backend address from the stored settings
    use_effect(move || {
        let settings = server_settings();
        if !url_prefilled() {
            base_url.set(settings.base_url.clone());
            url_prefilled.set(true);
        }
    });

    let signed_in = session().is_some();

    let on_save_notifier = move |evt: Event<FormData>| {
        evt.prevent_default();
        if notifier_busy() {
            return;
        }
        notifier_busy.set(true);
        notifier_error.set(None);
        notifier_saved.set(false);
        let id_value = telegram_id().trim().to_string();
        let token_value = telegram_token().trim().to_string();
        let settings = server_settings();
        let session_value = session();
        spawn(async move {
            let client = build_client(&settings, session_value.as_ref());
            match client.update_notifier(&id_value, &token_value).await {
                Ok(()) => notifier_saved.set(true),
                Err(err) => {
                    warn!(%err, "failed to update notifier credentials");
                    notifier_error.set(Some(err.to_string()));
                }
            }
            notifier_busy.set(false);
        });
    };

    let on_save_url = move |evt: Event<FormData>| {
        evt.prevent_default();
        let trimmed = base_url().trim().trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            return;
        }
        server_settings.set(ServerSettings { base_url: trimmed });
        url_saved.set(true);
    };

    rsx! {
        div { class: "space-y-10 max-w-2xl mx-auto",
            header {
                h1 { class: "text-3xl font-bold text-white mb-2", "Profile" }
                p { class: "text-zinc-400", "Notification settings and backend connection" }
            }

            if signed_in {
                section { class: "rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-5",
                    h2 { class: "text-lg font-semibold text-white mb-1", "Telegram notifications" }
                    p { class: "text-sm text-zinc-400 mb-4",
                        "New-chapter alerts are sent through your own bot"
                    }
                    form { class: "space-y-4", onsubmit: on_save_notifier,
                        div {
                            label { class: "block text-sm text-zinc-400 mb-1", "Chat ID" }
                            input {
                                r#type: "text",
                                value: "{telegram_id}",
                                class: INPUT_CLASS,
                                oninput: move |e| telegram_id.set(e.value()),
                            }
                        }
                        div {
                            label { class: "block text-sm text-zinc-400 mb-1", "Bot token" }
                            input {
                                r#type: "password",
                                value: "{telegram_token}",
                                class: INPUT_CLASS,
                                oninput: move |e| telegram_token.set(e.value()),
                            }
                        }
                        if let Some(message) = notifier_error() {
                            div { class: "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-sm text-rose-200",
                                "{message}"
                            }
                        }
                        if notifier_saved() {
                            div { class: "rounded-lg border border-emerald-500/35 bg-emerald-500/10 px-3 py-2 text-sm text-emerald-200",
                                "Notification settings saved"
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: notifier_busy(),
                            class: "w-full py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white font-medium transition-colors disabled:opacity-50",
                            if notifier_busy() {
                                "Saving…"
                            } else {
                                "Save notification settings"
                            }
                        }
                    }
                }
            } else {
                section { class: "rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-5 text-center",
                    Icon { name: "user".to_string(), class: "w-12 h-12 text-zinc-600 mx-auto mb-3".to_string() }
                    p { class: "text-zinc-400 mb-4", "Sign in to manage your notification settings" }
                    button {
                        class: "px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white text-sm font-medium transition-colors",
                        onclick: {
                            let navigation = navigation.clone();
                            move |_| navigation.go_to(AppView::Login)
                        },
                        "Sign in"
                    }
                }
            }

            section { class: "rounded-xl border border-zinc-800/60 bg-zinc-900/40 p-5",
                h2 { class: "text-lg font-semibold text-white mb-1", "Backend" }
                p { class: "text-sm text-zinc-400 mb-4", "Where this client fetches its library from" }
                form { class: "space-y-4", onsubmit: on_save_url,
                    div {
                        label { class: "block text-sm text-zinc-400 mb-1", "Server address" }
                        input {
                            r#type: "url",
                            value: "{base_url}",
                            placeholder: "http://localhost:8002",
                            class: INPUT_CLASS,
                            oninput: move |e| {
                                base_url.set(e.value());
                                url_saved.set(false);
                            },
                        }
                    }
                    if url_saved() {
                        div { class: "rounded-lg border border-emerald-500/35 bg-emerald-500/10 px-3 py-2 text-sm text-emerald-200",
                            "Backend address saved"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full py-2 rounded-lg bg-zinc-800 hover:bg-zinc-700 text-white font-medium transition-colors",
                        "Save address"
                    }
                }
            }
        }
    }
}
