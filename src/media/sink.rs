use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::MediaError;

/// Outcome of a play request, settled by the host some time after the
/// request was issued.
pub type PlayRequest = LocalBoxFuture<'static, Result<(), MediaError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Unstarted,
    Playing,
    Paused,
    Ended,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// Imperative control over one playable element.
///
/// Every call returns immediately. `play` hands back a future instead of
/// blocking, since hosts may reject it later (autoplay policy, decode
/// failure).
pub trait MediaSink {
    fn load(&self) -> Result<(), MediaError>;
    fn play(&self) -> PlayRequest;
    fn pause(&self) -> Result<(), MediaError>;
    fn current_time(&self) -> f64;
    fn seek(&self, seconds: f64) -> Result<(), MediaError>;
    fn muted(&self) -> bool;
    fn set_muted(&self, muted: bool) -> Result<(), MediaError>;
    fn set_playback_rate(&self, rate: f64) -> Result<(), MediaError>;
}
