//! Background audio and the start-screen sequence.
//!
//! `Playback` is the host's audio element; `BackgroundTrack` adds looping,
//! volume clamping and failure logging on top. A rejected `play` is logged
//! and otherwise ignored.

use crate::core::DrapeError;

pub trait Playback {
    fn set_looping(&mut self, looping: bool);

    fn set_volume(&mut self, volume: f64);

    /// Start playback. Hosts that resolve asynchronously report late
    /// failures themselves.
    fn play(&mut self) -> Result<(), DrapeError>;

    fn pause(&mut self);

    fn rewind(&mut self);
}

pub struct BackgroundTrack<P: Playback> {
    inner: P,
    volume: f64,
    looping: bool,
}

impl<P: Playback> BackgroundTrack<P> {
    pub fn new(mut inner: P) -> Self {
        inner.set_looping(true);
        inner.set_volume(0.5);
        Self { inner, volume: 0.5, looping: true }
    }

    pub fn play(&mut self) {
        if let Err(err) = self.inner.play() {
            log::error!("{}", err);
        }
    }

    pub fn no_loop(&mut self) {
        self.looping = false;
        self.inner.set_looping(false);
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn stop(&mut self) {
        self.inner.pause();
        self.inner.rewind();
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.inner.set_volume(self.volume);
    }

    pub fn volume(&self) -> f64 { self.volume }
    pub fn is_looping(&self) -> bool { self.looping }
    pub fn inner(&self) -> &P { &self.inner }
}

/// Something the start sequence hides once audio is going.
pub trait Overlay {
    fn hide(&mut self);
}

pub const AMBIENT_VOLUME: f64 = 0.3;
pub const VOICEOVER_VOLUME: f64 = 0.8;

/// Ambient loop plus one-shot voiceover, started by a single user gesture.
pub struct StartSequence<P: Playback> {
    ambient: BackgroundTrack<P>,
    voiceover: BackgroundTrack<P>,
    started: bool,
}

impl<P: Playback> StartSequence<P> {
    pub fn new(ambient: P, voiceover: P) -> Self {
        Self {
            ambient: BackgroundTrack::new(ambient),
            voiceover: BackgroundTrack::new(voiceover),
            started: false,
        }
    }

    pub fn activate<O: Overlay + ?Sized>(&mut self, overlay: &mut O) {
        self.ambient.play();
        self.ambient.set_volume(AMBIENT_VOLUME);

        self.voiceover.play();
        self.voiceover.no_loop();
        self.voiceover.set_volume(VOICEOVER_VOLUME);

        overlay.hide();
        self.started = true;
    }

    pub fn started(&self) -> bool { self.started }
    pub fn ambient(&self) -> &BackgroundTrack<P> { &self.ambient }
    pub fn voiceover(&self) -> &BackgroundTrack<P> { &self.voiceover }
}
