//! Audio Manager - routes media-element events into the playback controller
//! outside of the component render cycle, so unrelated UI state changes never
//! restart audio.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::playback::element::{current_generation, get_or_create_audio_element};
#[cfg(target_arch = "wasm32")]
use crate::playback::PlaybackController;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Shared volume level, applied to the audio element here rather than routed
/// through the controller core.
#[derive(Clone, Copy)]
pub struct VolumeSignal(pub Signal<f64>);

/// Render-less controller bridge for platforms without an audio element.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let playback = use_context::<Signal<PlaybackController>>();
    let volume = use_context::<VolumeSignal>().0;

    // One-time setup: create the element and attach listeners. Every event
    // reads the generation stamped by the load it belongs to, so the
    // controller can discard callbacks from superseded loads.
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        // Autoplay gate: remember the first user gesture anywhere on the page
        if let Some(doc) = window().and_then(|w| w.document()) {
            for event in ["click", "keydown", "touchstart"] {
                let mut playback = playback;
                let gesture_cb = Closure::wrap(Box::new(move || {
                    let already_interacted = playback.peek().state().has_user_interacted;
                    if !already_interacted {
                        playback.write().note_user_gesture();
                    }
                }) as Box<dyn FnMut()>);
                let _ =
                    doc.add_event_listener_with_callback(event, gesture_cb.as_ref().unchecked_ref());
                gesture_cb.forget();
            }
        }

        let mut playback_time = playback;
        let time_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                playback_time
                    .write()
                    .on_time_update(current_generation(), audio.current_time());
            }
        }) as Box<dyn FnMut()>);
        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        time_closure.forget();

        let mut playback_meta = playback;
        let metadata_closure = Closure::wrap(Box::new(move || {
            if let Some(audio) = get_or_create_audio_element() {
                let duration = audio.duration();
                if !duration.is_nan() {
                    playback_meta
                        .write()
                        .on_metadata_ready(current_generation(), duration);
                }
            }
        }) as Box<dyn FnMut()>);
        audio.set_onloadedmetadata(Some(metadata_closure.as_ref().unchecked_ref()));
        metadata_closure.forget();

        let mut playback_ended = playback;
        let ended_closure = Closure::wrap(Box::new(move || {
            playback_ended.write().on_ended(current_generation());
        }) as Box<dyn FnMut()>);
        audio.set_onended(Some(ended_closure.as_ref().unchecked_ref()));
        ended_closure.forget();

        let mut playback_play = playback;
        let play_closure = Closure::wrap(Box::new(move || {
            playback_play.write().on_resource_play(current_generation());
        }) as Box<dyn FnMut()>);
        audio.set_onplay(Some(play_closure.as_ref().unchecked_ref()));
        play_closure.forget();

        let mut playback_pause = playback;
        let pause_closure = Closure::wrap(Box::new(move || {
            playback_pause
                .write()
                .on_resource_pause(current_generation());
        }) as Box<dyn FnMut()>);
        audio.set_onpause(Some(pause_closure.as_ref().unchecked_ref()));
        pause_closure.forget();
    });

    // Handle volume changes
    use_effect(move || {
        let vol = volume().clamp(0.0, 1.0);
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(vol);
        }
    });

    // Return empty element - this component just manages wiring
    rsx! {}
}
