use crate::components::{view_label, AppView, Icon, Navigation};
use crate::db::{self, AuthSession};
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Signal<Option<AuthSession>>>();
    let navigation = use_context::<Navigation>();
    let mut menu_open = use_signal(|| false);

    let current = navigation.current();
    let signed_in = session();
    let is_admin = signed_in.as_ref().map(|s| s.is_admin).unwrap_or(false);
    let username = signed_in.as_ref().map(|s| s.username.clone());
    let can_go_back = navigation.can_go_back();

    let on_logout = {
        let navigation = navigation.clone();
        move |_| {
            db::clear_session();
            session.set(None);
            menu_open.set(false);
            navigation.reset_to(AppView::Login);
        }
    };

    rsx! {
        header { class: "sticky top-0 z-40 border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl",
            div { class: "flex items-center justify-between px-4 py-3 max-w-6xl mx-auto",
                div { class: "flex items-center gap-3",
                    if can_go_back {
                        button {
                            class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors md:hidden",
                            aria_label: "Go back",
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| {
                                    let _ = navigation.go_back();
                                }
                            },
                            Icon {
                                name: "arrow-left".to_string(),
                                class: "w-5 h-5".to_string(),
                            }
                        }
                    }
                    button {
                        class: "flex items-center gap-2",
                        onclick: {
                            let navigation = navigation.clone();
                            move |_| navigation.go_to(AppView::Home)
                        },
                        div { class: "w-8 h-8 rounded-lg bg-gradient-to-br from-emerald-500 to-teal-600 flex items-center justify-center text-white font-bold shadow-lg shadow-emerald-500/20",
                            "M"
                        }
                        div { class: "flex flex-col items-start",
                            span { class: "text-sm font-bold text-white leading-tight", "MediaShelf" }
                            span { class: "text-[10px] uppercase tracking-widest text-zinc-500 leading-tight",
                                "{view_label(&current)}"
                            }
                        }
                    }
                }

                // Desktop links
                nav { class: "hidden md:flex items-center gap-1",
                    NavLink {
                        label: "Library",
                        active: matches!(current, AppView::Home | AppView::CollectionDetail(_)),
                        onclick: {
                            let navigation = navigation.clone();
                            move |_| navigation.go_to(AppView::Home)
                        },
                    }
                    NavLink {
                        label: "Series",
                        active: matches!(current, AppView::Series | AppView::SeriesDetail(_) | AppView::Chapter(_)),
                        onclick: {
                            let navigation = navigation.clone();
                            move |_| navigation.go_to(AppView::Series)
                        },
                    }
                    if is_admin {
                        NavLink {
                            label: "Manage",
                            active: matches!(current, AppView::LibraryAdmin),
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| navigation.go_to(AppView::LibraryAdmin)
                            },
                        }
                    }
                }

                div { class: "hidden md:flex items-center gap-3",
                    {match &username {
                        Some(name) => rsx! {
                            button {
                                class: "flex items-center gap-2 text-sm text-zinc-300 hover:text-white transition-colors",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| navigation.go_to(AppView::Profile)
                                },
                                Icon { name: "user".to_string(), class: "w-4 h-4".to_string() }
                                "{name}"
                            }
                            button {
                                class: "text-sm text-rose-400 hover:text-rose-300 transition-colors",
                                onclick: on_logout.clone(),
                                "Sign out"
                            }
                        },
                        None => rsx! {
                            button {
                                class: "text-sm text-zinc-300 hover:text-white transition-colors",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| navigation.go_to(AppView::Login)
                                },
                                "Sign in"
                            }
                            button {
                                class: "text-sm px-3 py-1.5 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-white transition-colors",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| navigation.go_to(AppView::Register)
                                },
                                "Create account"
                            }
                        },
                    }}
                }

                // Mobile menu toggle
                button {
                    class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors md:hidden",
                    aria_label: "Open menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    Icon {
                        name: if menu_open() { "close".to_string() } else { "menu".to_string() },
                        class: "w-5 h-5".to_string(),
                    }
                }
            }

            if menu_open() {
                nav { class: "md:hidden border-t border-zinc-800/60 bg-zinc-950/95 px-4 py-3 space-y-1",
                    MobileLink {
                        label: "Library",
                        onclick: {
                            let navigation = navigation.clone();
                            move |_| {
                                menu_open.set(false);
                                navigation.go_to(AppView::Home);
                            }
                        },
                    }
                    MobileLink {
                        label: "Series",
                        onclick: {
                            let navigation = navigation.clone();
                            move |_| {
                                menu_open.set(false);
                                navigation.go_to(AppView::Series);
                            }
                        },
                    }
                    if is_admin {
                        MobileLink {
                            label: "Manage library",
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| {
                                    menu_open.set(false);
                                    navigation.go_to(AppView::LibraryAdmin);
                                }
                            },
                        }
                    }
                    {match &username {
                        Some(name) => rsx! {
                            p { class: "px-3 pt-2 text-xs text-zinc-500", "Signed in as {name}" }
                            MobileLink {
                                label: "Profile",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| {
                                        menu_open.set(false);
                                        navigation.go_to(AppView::Profile);
                                    }
                                },
                            }
                            button {
                                class: "w-full text-left px-3 py-2 rounded-lg text-sm text-rose-400 hover:bg-zinc-800/60 transition-colors",
                                onclick: on_logout.clone(),
                                "Sign out"
                            }
                        },
                        None => rsx! {
                            MobileLink {
                                label: "Sign in",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| {
                                        menu_open.set(false);
                                        navigation.go_to(AppView::Login);
                                    }
                                },
                            }
                            MobileLink {
                                label: "Create account",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| {
                                        menu_open.set(false);
                                        navigation.go_to(AppView::Register);
                                    }
                                },
                            }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn NavLink(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if active { "px-3 py-1.5 rounded-lg text-sm font-medium bg-zinc-800/80 text-white" } else { "px-3 py-1.5 rounded-lg text-sm font-medium text-zinc-400 hover:text-white hover:bg-zinc-800/40 transition-colors" },
            onclick: move |e| onclick.call(e),
            "{label}"
        }
    }
}

#[component]
fn MobileLink(label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "w-full text-left px-3 py-2 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800/60 transition-colors",
            onclick: move |e| onclick.call(e),
            "{label}"
        }
    }
}
