use crate::components::views::build_client;
use crate::components::{AppView, Navigation};
use crate::db::ServerSettings;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[component]
pub fn RegisterView() -> Element {
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = {
        let navigation = navigation.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            if busy() {
                return;
            }
            let name = username().trim().to_string();
            let pass = password();
            if name.is_empty() || pass.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }
            if pass != confirm() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);
            let settings = server_settings();
            let navigation = navigation.clone();
            spawn(async move {
                let client = build_client(&settings, None);
                match client.register(&name, &pass).await {
                    Ok(()) => {
                        busy.set(false);
                        navigation.go_to(AppView::Login);
                    }
                    Err(err) => {
                        warn!(%err, "registration failed");
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "max-w-md mx-auto mt-12",
            h1 { class: "text-2xl font-bold text-white mb-6 text-center", "Create account" }
            form { class: "space-y-4", onsubmit: on_submit,
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Username" }
                    input {
                        r#type: "text",
                        value: "{username}",
                        autocomplete: "username",
                        class: "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none",
                        oninput: move |e| username.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Password" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        autocomplete: "new-password",
                        class: "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Confirm password" }
                    input {
                        r#type: "password",
                        value: "{confirm}",
                        autocomplete: "new-password",
                        class: "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none",
                        oninput: move |e| confirm.set(e.value()),
                    }
                }
                if let Some(message) = error() {
                    div { class: "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-sm text-rose-200",
                        "{message}"
                    }
                }
                button {
                    r#type: "submit",
                    disabled: busy(),
                    class: "w-full py-2 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white font-medium transition-colors disabled:opacity-50",
                    if busy() {
                        "Creating…"
                    } else {
                        "Create account"
                    }
                }
            }
            p { class: "text-sm text-zinc-400 text-center mt-6",
                "Already registered? "
                button {
                    class: "text-emerald-400 hover:text-emerald-300 transition-colors",
                    onclick: {
                        let navigation = navigation.clone();
                        move |_| navigation.go_to(AppView::Login)
                    },
                    "Sign in"
                }
            }
        }
    }
}
