use crate::api::models::format_duration;
use crate::components::{Icon, VolumeSignal};
use crate::playback::{PlaybackController, TrackPhase};
use dioxus::prelude::*;

#[component]
pub fn Player() -> Element {
    let playback = use_context::<Signal<PlaybackController>>();
    let mut volume = use_context::<VolumeSignal>().0;

    let (state, phase, track_title) = {
        let controller = playback.read();
        (
            controller.state().clone(),
            controller.phase(),
            controller.current_track().map(|track| track.title.clone()),
        )
    };
    let current_time = state.current_time;
    let duration = state.duration;
    let seekable = matches!(phase, TrackPhase::Paused | TrackPhase::Playing);
    let progress_percent = if duration > 0.0 {
        (current_time / duration * 100.0).round() as i32
    } else {
        0
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            volume.set((val / 100.0).clamp(0.0, 1.0));
        }
    };

    let on_seek_input = {
        let mut playback = playback;
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                let percent = percent.clamp(0.0, 100.0);
                if duration > 0.0 {
                    playback.write().seek((percent / 100.0) * duration);
                }
            }
        }
    };

    let on_seek_commit = {
        let mut playback = playback;
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                let percent = percent.clamp(0.0, 100.0);
                if duration > 0.0 {
                    playback.write().seek((percent / 100.0) * duration);
                }
            }
        }
    };

    rsx! {
        div { class: "player-shell fixed bottom-0 left-0 right-0 bg-zinc-950/90 backdrop-blur-xl border-t border-zinc-800/60 z-50 md:h-24",
            div { class: "h-full flex flex-col md:flex-row md:items-center md:justify-between px-4 md:px-6 gap-3 md:gap-8 py-2 md:py-0",
                // Now playing info
                div { class: "flex items-center gap-3 md:gap-4 min-w-0 w-full md:w-1/4",
                    {
                        match &track_title {
                            Some(title) => rsx! {
                                div { class: "w-12 h-12 md:w-14 md:h-14 rounded-lg flex-shrink-0 flex items-center justify-center bg-gradient-to-br from-emerald-600 to-teal-700 shadow-lg",
                                    Icon { name: "music".to_string(), class: "w-6 h-6 text-white/70".to_string() }
                                }
                                div { class: "min-w-0 flex-1",
                                    p { class: "text-sm font-medium text-white truncate", "{title}" }
                                    p { class: "text-xs text-zinc-400 truncate",
                                        {
                                            match phase {
                                                TrackPhase::Loading => "Loading…",
                                                TrackPhase::Playing => "Playing",
                                                TrackPhase::Ended => "Finished",
                                                _ => "Paused",
                                            }
                                        }
                                    }
                                }
                            },
                            None => rsx! {
                                div { class: "w-14 h-14 rounded-lg bg-zinc-800/50 flex items-center justify-center",
                                    Icon { name: "music".to_string(), class: "w-6 h-6 text-zinc-600".to_string() }
                                }
                                div { class: "min-w-0 flex-1",
                                    p { class: "text-sm text-zinc-500", "No track playing" }
                                    p { class: "text-xs text-zinc-600", "Pick a track to start" }
                                }
                            },
                        }
                    }
                }

                // Player controls
                div { class: "flex flex-col items-center gap-3 w-full md:flex-1 md:max-w-2xl",
                    div { class: "flex items-center gap-6 md:gap-4 justify-center",
                        PrevButton {}
                        PlayPauseButton {}
                        NextButton {}
                    }
                    // Progress bar
                    div { class: "flex items-center gap-2 md:gap-3 w-full",
                        span { class: "text-xs text-zinc-500 w-10 text-right",
                            {format_duration(current_time as u32)}
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            disabled: !seekable,
                            value: progress_percent,
                            class: "flex-1 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-emerald-500",
                            oninput: on_seek_input,
                            onchange: on_seek_commit,
                        }
                        span { class: "text-xs text-zinc-500 w-10",
                            {
                                if duration > 0.0 {
                                    format_duration(duration as u32)
                                } else {
                                    "--:--".to_string()
                                }
                            }
                        }
                    }
                }

                // Volume
                div { class: "flex items-center w-full md:w-1/4 justify-end",
                    div { class: "hidden md:flex items-center gap-3",
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: (volume() * 100.0).round() as i32,
                            class: "w-24 h-1.5 bg-zinc-800 rounded-full appearance-none cursor-pointer accent-zinc-400",
                            oninput: on_volume_change,
                        }
                    }
                }
            }
        }
    }
}

/// Play/Pause button - completely isolated component
#[component]
fn PlayPauseButton() -> Element {
    let mut playback = use_context::<Signal<PlaybackController>>();
    let playing = playback.read().state().is_playing;
    let has_track = playback.read().current_track().is_some();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            disabled: !has_track,
            class: "w-10 h-10 rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg disabled:opacity-40",
            onclick: move |_| {
                playback.write().toggle_play_pause();
            },
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "w-5 h-5 text-black".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-5 h-5 text-black ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Previous button - completely isolated component
#[component]
fn PrevButton() -> Element {
    let mut playback = use_context::<Signal<PlaybackController>>();
    let can_prev = playback
        .read()
        .state()
        .current_index
        .map(|index| index > 0)
        .unwrap_or(false);

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            disabled: !can_prev,
            class: if can_prev { "p-3 md:p-2 text-zinc-300 hover:text-white transition-colors" } else { "p-3 md:p-2 text-zinc-600 cursor-not-allowed" },
            onclick: move |_| {
                let index = playback.peek().state().current_index;
                if let Some(index) = index {
                    if index > 0 {
                        playback.write().select_track(index - 1);
                    }
                }
            },
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Next button - completely isolated component
#[component]
fn NextButton() -> Element {
    let mut playback = use_context::<Signal<PlaybackController>>();
    let can_next = {
        let controller = playback.read();
        controller
            .state()
            .current_index
            .map(|index| index + 1 < controller.playlist().len())
            .unwrap_or(false)
    };

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            disabled: !can_next,
            class: if can_next { "p-3 md:p-2 text-zinc-300 hover:text-white transition-colors" } else { "p-3 md:p-2 text-zinc-600 cursor-not-allowed" },
            onclick: move |_| {
                let (index, len) = {
                    let controller = playback.peek();
                    (controller.state().current_index, controller.playlist().len())
                };
                if let Some(index) = index {
                    if index + 1 < len {
                        playback.write().select_track(index + 1);
                    }
                }
            },
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}
