use crate::components::views::build_client;
use crate::components::{AppView, Navigation};
use crate::db::{self, AuthSession, ServerSettings};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

#[component]
pub fn LoginView() -> Element {
    let mut session = use_context::<Signal<Option<AuthSession>>>();
    let server_settings = use_context::<Signal<ServerSettings>>();
    let navigation = use_context::<Navigation>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
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

            busy.set(true);
            error.set(None);
            let settings = server_settings();
            let navigation = navigation.clone();
            spawn(async move {
                let client = build_client(&settings, None);
                match client.login(&name, &pass).await {
                    Ok(granted) => {
                        // The profile tells us whether to show the admin tools;
                        // backends without one just mean a regular session.
                        let probe = AuthSession {
                            username: name.clone(),
                            token: granted.token.clone(),
                            is_admin: false,
                        };
                        let is_admin = build_client(&settings, Some(&probe))
                            .me()
                            .await
                            .map(|profile| profile.is_admin)
                            .unwrap_or(false);

                        let new_session = AuthSession {
                            username: name,
                            token: granted.token,
                            is_admin,
                        };
                        db::save_session(&new_session);
                        session.set(Some(new_session));
                        busy.set(false);
                        navigation.reset_to(AppView::Home);
                    }
                    Err(err) => {
                        warn!(%err, "login failed");
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "max-w-md mx-auto mt-12",
            h1 { class: "text-2xl font-bold text-white mb-6 text-center", "Sign in" }
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
                        autocomplete: "current-password",
                        class: "w-full px-3 py-2 rounded-lg bg-zinc-900 border border-zinc-800 text-white focus:border-emerald-500 focus:outline-none",
                        oninput: move |e| password.set(e.value()),
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
                        "Signing in…"
                    } else {
                        "Sign in"
                    }
                }
            }
            p { class: "text-sm text-zinc-400 text-center mt-6",
                "No account yet? "
                button {
                    class: "text-emerald-400 hover:text-emerald-300 transition-colors",
                    onclick: {
                        let navigation = navigation.clone();
                        move |_| navigation.go_to(AppView::Register)
                    },
                    "Create one"
                }
            }
        }
    }
}
