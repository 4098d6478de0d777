//! Playlist playback state machine.
//!
//! Owns the playlist, the current position and the confirmed play/pause state,
//! and maps user intents plus media-element events onto commands for a single
//! underlying audio resource. Every load is tagged with a generation; events
//! carrying a stale generation are discarded, so a slow callback from a
//! superseded track cannot touch the current one.

/// The audio-rendering capability of the host environment.
///
/// Implementations must stop any prior playback when `load` is called and must
/// swallow `play` rejections (browser autoplay policy); the controller only
/// trusts the resource's own play/pause events, never its command calls.
pub trait MediaResource {
    fn load(&mut self, generation: u64, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
}

/// One playable entry. Immutable once placed in a playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistTrack {
    pub title: String,
    pub stream_url: String,
}

/// Where the current track session is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackPhase {
    /// Nothing selected yet (fresh mount or playlist swap).
    #[default]
    Idle,
    /// A load was issued; metadata has not arrived.
    Loading,
    Paused,
    Playing,
    /// The last track finished; position stays at the end.
    Ended,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    /// Valid index into the playlist whenever it is non-empty.
    pub current_index: Option<usize>,
    /// Confirmed by the resource's play/pause events, never optimistic.
    pub is_playing: bool,
    pub current_time: f64,
    /// 0.0 means "not known yet".
    pub duration: f64,
    /// Once a user gesture has been seen, track switches may auto-play.
    pub has_user_interacted: bool,
}

pub struct PlaybackController {
    playlist: Vec<PlaylistTrack>,
    state: PlaybackState,
    phase: TrackPhase,
    generation: u64,
    pending_seek: Option<f64>,
    resource: Box<dyn MediaResource>,
}

impl PlaybackController {
    pub fn new(resource: Box<dyn MediaResource>) -> Self {
        Self {
            playlist: Vec::new(),
            state: PlaybackState::default(),
            phase: TrackPhase::Idle,
            generation: 0,
            pending_seek: None,
            resource,
        }
    }

    /// Replace the playlist wholesale and reset the track session.
    ///
    /// The interaction flag is session-scoped and survives the swap.
    pub fn set_playlist(&mut self, tracks: Vec<PlaylistTrack>) {
        self.generation += 1;
        self.playlist = tracks;
        self.state.current_index = if self.playlist.is_empty() {
            None
        } else {
            Some(0)
        };
        self.state.is_playing = false;
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.phase = TrackPhase::Idle;
        self.pending_seek = None;
        self.resource.pause();
    }

    /// Jump to `index` and start loading it. Out-of-range calls leave the
    /// state untouched; callers gate their buttons, this is the backstop.
    pub fn select_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            return;
        }

        let inherited_gesture = self.state.has_user_interacted;
        self.generation += 1;
        self.state.current_index = Some(index);
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.state.is_playing = false;
        self.state.has_user_interacted = true;
        self.pending_seek = None;
        self.phase = TrackPhase::Loading;

        let url = self.playlist[index].stream_url.clone();
        self.resource.load(self.generation, &url);
        if inherited_gesture {
            self.resource.play();
        }
    }

    /// Request play or pause for the current track. Only meaningful once the
    /// resource has reported ready; during `Idle`/`Loading` the request is
    /// dropped (the gesture itself is still recorded).
    pub fn toggle_play_pause(&mut self) {
        if self.state.current_index.is_none() {
            return;
        }
        self.state.has_user_interacted = true;

        match self.phase {
            TrackPhase::Paused | TrackPhase::Playing => {
                if self.state.is_playing {
                    self.resource.pause();
                } else {
                    self.resource.play();
                }
            }
            TrackPhase::Idle | TrackPhase::Loading | TrackPhase::Ended => {}
        }
    }

    /// Seek within the current track, clamped to `[0, duration]`. A seek
    /// issued while still loading is queued and applied once metadata lands.
    pub fn seek(&mut self, target_seconds: f64) {
        if !target_seconds.is_finite() {
            return;
        }
        match self.phase {
            TrackPhase::Paused | TrackPhase::Playing => {
                let clamped = target_seconds.clamp(0.0, self.state.duration);
                self.state.current_time = clamped;
                self.resource.seek(clamped);
            }
            TrackPhase::Loading => {
                self.pending_seek = Some(target_seconds.max(0.0));
            }
            TrackPhase::Idle | TrackPhase::Ended => {}
        }
    }

    /// Record that a user gesture was observed somewhere in the page.
    pub fn note_user_gesture(&mut self) {
        self.state.has_user_interacted = true;
    }

    pub fn on_metadata_ready(&mut self, generation: u64, duration_seconds: f64) {
        if generation != self.generation {
            return;
        }
        self.state.duration = duration_seconds.max(0.0);
        self.state.current_time = 0.0;
        if self.phase == TrackPhase::Loading {
            self.phase = if self.state.is_playing {
                TrackPhase::Playing
            } else {
                TrackPhase::Paused
            };
        }
        if let Some(target) = self.pending_seek.take() {
            let clamped = target.clamp(0.0, self.state.duration);
            self.state.current_time = clamped;
            self.resource.seek(clamped);
        }
    }

    pub fn on_time_update(&mut self, generation: u64, current_seconds: f64) {
        if generation != self.generation {
            return;
        }
        let mut time = current_seconds.max(0.0);
        if self.state.duration > 0.0 {
            time = time.min(self.state.duration);
        }
        self.state.current_time = time;
    }

    /// Auto-advance to the next track, or park at the end of the last one.
    pub fn on_ended(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        let Some(index) = self.state.current_index else {
            return;
        };
        if index + 1 < self.playlist.len() {
            self.select_track(index + 1);
        } else {
            self.state.is_playing = false;
            if self.state.duration > 0.0 {
                self.state.current_time = self.state.duration;
            }
            self.phase = TrackPhase::Ended;
        }
    }

    pub fn on_resource_play(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.state.is_playing = true;
        self.phase = TrackPhase::Playing;
    }

    pub fn on_resource_pause(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.state.is_playing = false;
        if self.phase == TrackPhase::Playing {
            self.phase = TrackPhase::Paused;
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> TrackPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn playlist(&self) -> &[PlaylistTrack] {
        &self.playlist
    }

    pub fn current_track(&self) -> Option<&PlaylistTrack> {
        self.state
            .current_index
            .and_then(|index| self.playlist.get(index))
    }

    /// Fraction of the current track played, 0.0 while duration is unknown.
    pub fn progress(&self) -> f64 {
        if self.state.duration > 0.0 {
            self.state.current_time / self.state.duration
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Load(u64, String),
        Play,
        Pause,
        Seek(f64),
    }

    struct RecordingResource {
        commands: Rc<RefCell<Vec<Command>>>,
    }

    impl MediaResource for RecordingResource {
        fn load(&mut self, generation: u64, url: &str) {
            self.commands
                .borrow_mut()
                .push(Command::Load(generation, url.to_string()));
        }

        fn play(&mut self) {
            self.commands.borrow_mut().push(Command::Play);
        }

        fn pause(&mut self) {
            self.commands.borrow_mut().push(Command::Pause);
        }

        fn seek(&mut self, seconds: f64) {
            self.commands.borrow_mut().push(Command::Seek(seconds));
        }
    }

    fn track(n: usize) -> PlaylistTrack {
        PlaylistTrack {
            title: format!("Track {}", n),
            stream_url: format!("https://media.test/audio/track-{}.mp3", n),
        }
    }

    fn controller_with_tracks(count: usize) -> (PlaybackController, Rc<RefCell<Vec<Command>>>) {
        let commands = Rc::new(RefCell::new(Vec::new()));
        let mut controller = PlaybackController::new(Box::new(RecordingResource {
            commands: commands.clone(),
        }));
        controller.set_playlist((1..=count).map(track).collect());
        commands.borrow_mut().clear();
        (controller, commands)
    }

    #[test]
    fn select_track_sets_index_and_resets_time() {
        let (mut controller, commands) = controller_with_tracks(3);

        controller.select_track(1);

        assert_eq!(controller.state().current_index, Some(1));
        assert_eq!(controller.state().current_time, 0.0);
        assert_eq!(controller.phase(), TrackPhase::Loading);
        assert_eq!(
            commands.borrow().as_slice(),
            &[Command::Load(
                controller.generation(),
                track(2).stream_url
            )]
        );
    }

    #[test]
    fn select_track_out_of_range_is_a_noop() {
        let (mut controller, commands) = controller_with_tracks(3);
        let before = controller.state().clone();

        controller.select_track(3);
        controller.select_track(usize::MAX);

        assert_eq!(controller.state(), &before);
        assert!(commands.borrow().is_empty());
    }

    #[test]
    fn empty_playlist_makes_all_operations_noops() {
        let (mut controller, commands) = controller_with_tracks(0);

        controller.select_track(0);
        controller.toggle_play_pause();
        controller.seek(10.0);

        assert_eq!(controller.state().current_index, None);
        assert!(controller.current_track().is_none());
        assert!(commands.borrow().is_empty());
    }

    #[test]
    fn first_select_without_gesture_loads_but_does_not_play() {
        let (mut controller, commands) = controller_with_tracks(2);

        controller.select_track(0);

        assert!(!commands.borrow().contains(&Command::Play));
        // The gesture is recorded by the selection itself.
        assert!(controller.state().has_user_interacted);
    }

    #[test]
    fn select_after_gesture_also_issues_play() {
        let (mut controller, commands) = controller_with_tracks(2);
        controller.note_user_gesture();

        controller.select_track(0);

        assert!(commands.borrow().contains(&Command::Play));
    }

    #[test]
    fn progress_is_time_over_duration() {
        let (mut controller, _commands) = controller_with_tracks(1);
        controller.select_track(0);
        let generation = controller.generation();

        controller.on_metadata_ready(generation, 180.0);
        assert_eq!(controller.progress(), 0.0);

        controller.on_time_update(generation, 90.0);
        assert_eq!(controller.progress(), 0.5);
    }

    #[test]
    fn ended_on_last_track_stops_without_advancing() {
        let (mut controller, commands) = controller_with_tracks(2);
        controller.select_track(1);
        let generation = controller.generation();
        controller.on_metadata_ready(generation, 60.0);
        controller.on_resource_play(generation);
        commands.borrow_mut().clear();

        controller.on_ended(generation);

        assert_eq!(controller.state().current_index, Some(1));
        assert!(!controller.state().is_playing);
        assert_eq!(controller.state().current_time, 60.0);
        assert_eq!(controller.phase(), TrackPhase::Ended);
        assert!(commands.borrow().is_empty());
    }

    #[test]
    fn ended_mid_playlist_advances_by_one_and_loads() {
        let (mut controller, commands) = controller_with_tracks(3);
        controller.select_track(0);
        let generation = controller.generation();
        controller.on_metadata_ready(generation, 60.0);
        controller.on_resource_play(generation);
        commands.borrow_mut().clear();

        controller.on_ended(generation);

        assert_eq!(controller.state().current_index, Some(1));
        assert_eq!(
            commands.borrow().as_slice(),
            &[
                Command::Load(controller.generation(), track(2).stream_url),
                // Auto-advance inherits the interaction flag.
                Command::Play,
            ]
        );
    }

    #[test]
    fn full_session_walkthrough() {
        let (mut controller, commands) = controller_with_tracks(3);

        controller.select_track(2);
        let generation = controller.generation();
        assert_eq!(controller.state().current_index, Some(2));
        assert_eq!(controller.state().current_time, 0.0);
        assert_eq!(
            commands.borrow()[0],
            Command::Load(generation, track(3).stream_url)
        );

        controller.on_metadata_ready(generation, 200.0);
        assert_eq!(controller.state().duration, 200.0);
        assert_eq!(controller.progress(), 0.0);

        controller.on_time_update(generation, 50.0);
        assert_eq!(controller.progress(), 0.25);

        controller.on_ended(generation);
        assert!(!controller.state().is_playing);
        assert_eq!(controller.state().current_index, Some(2));
    }

    #[test]
    fn stale_metadata_from_superseded_load_is_discarded() {
        let (mut controller, _commands) = controller_with_tracks(2);

        controller.select_track(0);
        let first_generation = controller.generation();
        controller.select_track(1);
        let second_generation = controller.generation();

        // Track 0's metadata arrives late; it must not leak into track 1.
        controller.on_metadata_ready(first_generation, 120.0);
        assert_eq!(controller.state().duration, 0.0);
        assert_eq!(controller.phase(), TrackPhase::Loading);

        controller.on_metadata_ready(second_generation, 200.0);
        assert_eq!(controller.state().duration, 200.0);
    }

    #[test]
    fn stale_ended_and_play_events_are_discarded() {
        let (mut controller, _commands) = controller_with_tracks(3);
        controller.select_track(0);
        let first_generation = controller.generation();
        controller.select_track(1);

        controller.on_ended(first_generation);
        controller.on_resource_play(first_generation);

        assert_eq!(controller.state().current_index, Some(1));
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn seek_clamps_to_track_bounds() {
        let (mut controller, commands) = controller_with_tracks(1);
        controller.select_track(0);
        let generation = controller.generation();
        controller.on_metadata_ready(generation, 100.0);
        commands.borrow_mut().clear();

        controller.seek(150.0);
        assert_eq!(controller.state().current_time, 100.0);

        controller.seek(-5.0);
        assert_eq!(controller.state().current_time, 0.0);

        assert_eq!(
            commands.borrow().as_slice(),
            &[Command::Seek(100.0), Command::Seek(0.0)]
        );
    }

    #[test]
    fn seek_while_loading_is_deferred_until_metadata() {
        let (mut controller, commands) = controller_with_tracks(1);
        controller.select_track(0);
        let generation = controller.generation();
        commands.borrow_mut().clear();

        controller.seek(30.0);
        assert!(commands.borrow().is_empty());

        controller.on_metadata_ready(generation, 60.0);
        assert_eq!(commands.borrow().as_slice(), &[Command::Seek(30.0)]);
        assert_eq!(controller.state().current_time, 30.0);
    }

    #[test]
    fn deferred_seek_is_clamped_to_the_fresh_duration() {
        let (mut controller, commands) = controller_with_tracks(1);
        controller.select_track(0);
        let generation = controller.generation();
        commands.borrow_mut().clear();

        controller.seek(10.0);
        controller.seek(999.0); // only the most recent request survives

        controller.on_metadata_ready(generation, 60.0);
        assert_eq!(commands.borrow().as_slice(), &[Command::Seek(60.0)]);
    }

    #[test]
    fn toggle_during_loading_is_dropped_but_records_the_gesture() {
        let (mut controller, commands) = controller_with_tracks(1);
        controller.select_track(0);
        commands.borrow_mut().clear();

        controller.toggle_play_pause();

        assert!(commands.borrow().is_empty());
        assert!(controller.state().has_user_interacted);
    }

    #[test]
    fn is_playing_only_flips_on_resource_confirmation() {
        let (mut controller, commands) = controller_with_tracks(1);
        controller.select_track(0);
        let generation = controller.generation();
        controller.on_metadata_ready(generation, 90.0);
        commands.borrow_mut().clear();

        controller.toggle_play_pause();
        assert_eq!(commands.borrow().as_slice(), &[Command::Play]);
        // Still false: the command was issued but nothing confirmed it.
        assert!(!controller.state().is_playing);

        controller.on_resource_play(generation);
        assert!(controller.state().is_playing);
        assert_eq!(controller.phase(), TrackPhase::Playing);

        commands.borrow_mut().clear();
        controller.toggle_play_pause();
        assert_eq!(commands.borrow().as_slice(), &[Command::Pause]);

        controller.on_resource_pause(generation);
        assert!(!controller.state().is_playing);
        assert_eq!(controller.phase(), TrackPhase::Paused);
    }

    #[test]
    fn playlist_swap_resets_the_session_but_keeps_the_gesture_flag() {
        let (mut controller, _commands) = controller_with_tracks(2);
        controller.select_track(1);
        let old_generation = controller.generation();
        controller.on_metadata_ready(old_generation, 45.0);
        controller.on_resource_play(old_generation);

        controller.set_playlist(vec![track(7)]);

        assert_eq!(controller.state().current_index, Some(0));
        assert!(!controller.state().is_playing);
        assert_eq!(controller.state().current_time, 0.0);
        assert_eq!(controller.state().duration, 0.0);
        assert_eq!(controller.phase(), TrackPhase::Idle);
        assert!(controller.state().has_user_interacted);

        // Events from the old playlist's load are stale now.
        controller.on_metadata_ready(old_generation, 45.0);
        assert_eq!(controller.state().duration, 0.0);
    }
}
