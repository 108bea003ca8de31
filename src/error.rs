use thiserror::Error;

/// Failures reported by a media element or the visibility observer.
///
/// None of these are fatal: the lazy controller logs and swallows them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("media element is no longer attached")]
    Detached,
    #[error("visibility observer unavailable: {0}")]
    ObserverUnavailable(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("visibility threshold {0} must be within 0.0..=1.0")]
    Threshold(f64),
    #[error("root margin {0}px must be a non-negative number")]
    Margin(f64),
    #[error("skip step {0}s must be a positive number")]
    SkipStep(f64),
    #[error("recording window {0}s must be positive and shorter than a day")]
    RecordingWindow(f64),
    #[error("no stores configured")]
    NoStores,
    #[error("default store {0:?} is not in the store list")]
    UnknownStore(String),
}
