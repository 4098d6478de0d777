//! Audio playback: the framework-free controller core plus the browser
//! adapter that backs it with a hidden `<audio>` element.

pub mod controller;
pub mod element;

pub use controller::{PlaybackController, PlaylistTrack, TrackPhase};
pub use element::platform_resource;
