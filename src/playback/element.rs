//! Browser adapter: a single hidden `<audio>` element as the media resource.

use super::controller::MediaResource;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "mediashelf-audio";
#[cfg(target_arch = "wasm32")]
const GENERATION_ATTR: &str = "data-generation";

/// Initialize the shared audio element once, appended hidden to the body.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Keep preload light so we stream instead of buffering entire files
    audio.set_attribute("preload", "metadata").ok()?;

    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Generation stamped on the element by the most recent load; event callbacks
/// read this to tag themselves before handing off to the controller.
#[cfg(target_arch = "wasm32")]
pub fn current_generation() -> u64 {
    get_or_create_audio_element()
        .and_then(|audio| audio.get_attribute(GENERATION_ATTR))
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
pub struct AudioElementResource;

#[cfg(target_arch = "wasm32")]
impl MediaResource for AudioElementResource {
    fn load(&mut self, generation: u64, url: &str) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.set_attribute(GENERATION_ATTR, &generation.to_string());
            audio.set_src(url);
            audio.load();
        }
    }

    fn play(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            // Autoplay denial arrives as a rejected promise; the element's own
            // play/pause events remain the source of truth.
            let _ = audio.play();
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
    }

    fn seek(&mut self, seconds: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_current_time(seconds);
        }
    }
}

/// Stand-in so non-wasm builds link; commands go nowhere.
#[cfg(not(target_arch = "wasm32"))]
pub struct NullResource;

#[cfg(not(target_arch = "wasm32"))]
impl MediaResource for NullResource {
    fn load(&mut self, _generation: u64, _url: &str) {}

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek(&mut self, _seconds: f64) {}
}

/// The media resource for the platform we were compiled for.
pub fn platform_resource() -> Box<dyn MediaResource> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(AudioElementResource)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(NullResource)
    }
}
