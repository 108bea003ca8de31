// Non-browser targets have no element handle to drive, so lazy videos stay
// dormant: never visible, never commanded.
use dioxus::prelude::MountedData;

use crate::error::MediaError;
use crate::media::controller::PlaySettlement;
use crate::media::geometry::{ObserverOptions, VisibilityCallback, VisibilitySource};
use crate::media::sink::{MediaSink, PlayRequest};

#[derive(Clone)]
pub enum WebVideo {}

impl WebVideo {
    pub fn from_mounted(_data: &MountedData) -> Option<Self> {
        None
    }
}

impl MediaSink for WebVideo {
    fn load(&self) -> Result<(), MediaError> {
        match *self {}
    }

    fn play(&self) -> PlayRequest {
        match *self {}
    }

    fn pause(&self) -> Result<(), MediaError> {
        match *self {}
    }

    fn current_time(&self) -> f64 {
        match *self {}
    }

    fn seek(&self, _seconds: f64) -> Result<(), MediaError> {
        match *self {}
    }

    fn muted(&self) -> bool {
        match *self {}
    }

    fn set_muted(&self, _muted: bool) -> Result<(), MediaError> {
        match *self {}
    }

    fn set_playback_rate(&self, _rate: f64) -> Result<(), MediaError> {
        match *self {}
    }
}

#[derive(Clone, Copy, Default)]
pub struct Viewport;

impl VisibilitySource for Viewport {
    type Target = WebVideo;
    type Registration = ();

    fn observe(
        &self,
        target: &WebVideo,
        _options: &ObserverOptions,
        _on_change: VisibilityCallback,
    ) -> Result<(), MediaError> {
        match *target {}
    }
}

pub fn spawn_settlement(settlement: PlaySettlement) {
    dioxus::prelude::spawn(settlement);
}

pub fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    f();
}

// No element to follow, so the clock never advances.
pub fn spawn_ticker<F>(_period_ms: u32, _on_tick: F)
where
    F: FnMut() + 'static,
{
}
