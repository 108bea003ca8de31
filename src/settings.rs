//! Dashboard settings, bundled with the app and read once at startup.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SettingsError;
use crate::media::geometry::ObserverOptions;

const BUNDLED_SETTINGS: &str = include_str!("../assets/ridertrack.json");

/// The past feed picks its range within one day.
pub const MAX_RECORDING_WINDOW_SECONDS: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub stores: Vec<String>,
    pub default_store: String,
    pub lazy_video: ObserverOptions,
    pub live_feed_muted: bool,
    pub skip_seconds: f64,
    /// Length of the recorded window shown on the past feed page.
    pub recording_window_seconds: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            stores: vec![
                "BB Now #14".to_string(),
                "BB Now #18".to_string(),
                "BB Now #22".to_string(),
                "BB Now #35".to_string(),
            ],
            default_store: "BB Now #14".to_string(),
            lazy_video: ObserverOptions::default(),
            live_feed_muted: true,
            skip_seconds: 10.0,
            recording_window_seconds: 7200.0,
        }
    }
}

impl AppSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let settings: AppSettings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let threshold = self.lazy_video.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SettingsError::Threshold(threshold));
        }
        let margin = self.lazy_video.root_margin_px;
        if !margin.is_finite() || margin < 0.0 {
            return Err(SettingsError::Margin(margin));
        }
        let skip = self.skip_seconds;
        if !skip.is_finite() || skip <= 0.0 {
            return Err(SettingsError::SkipStep(skip));
        }
        let window = self.recording_window_seconds;
        if !window.is_finite() || window <= 0.0 || window >= MAX_RECORDING_WINDOW_SECONDS {
            return Err(SettingsError::RecordingWindow(window));
        }
        if self.stores.is_empty() {
            return Err(SettingsError::NoStores);
        }
        if !self.stores.contains(&self.default_store) {
            return Err(SettingsError::UnknownStore(self.default_store.clone()));
        }
        Ok(())
    }

    /// Reads the bundled settings, falling back to defaults when they are
    /// missing or invalid.
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_SETTINGS) {
            Ok(settings) => {
                info!(stores = settings.stores.len(), "loaded dashboard settings");
                settings
            }
            Err(err) => {
                warn!(error = %err, "using default dashboard settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_settings_are_valid() {
        let settings = AppSettings::from_json(BUNDLED_SETTINGS).unwrap();
        assert_eq!(settings.default_store, "BB Now #14");
        assert_eq!(settings.lazy_video, ObserverOptions::default());
        assert!(settings.live_feed_muted);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings = AppSettings::from_json(r#"{"skip_seconds": 30}"#).unwrap();
        assert_eq!(settings.skip_seconds, 30.0);
        assert_eq!(settings.stores.len(), 4);
        assert_eq!(settings.recording_window_seconds, 7200.0);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = AppSettings::from_json(r#"{"lazy_video": {"threshold": 1.5}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Threshold(t) if t == 1.5));
    }

    #[test]
    fn negative_margin_is_rejected() {
        let err =
            AppSettings::from_json(r#"{"lazy_video": {"root_margin_px": -20}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Margin(_)));
    }

    #[test]
    fn skip_step_must_be_positive() {
        let err = AppSettings::from_json(r#"{"skip_seconds": -10}"#).unwrap_err();
        assert!(matches!(err, SettingsError::SkipStep(s) if s == -10.0));

        let err = AppSettings::from_json(r#"{"skip_seconds": 0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::SkipStep(_)));
    }

    #[test]
    fn recording_window_must_fit_in_a_day() {
        for raw in [
            r#"{"recording_window_seconds": 1e20}"#,
            r#"{"recording_window_seconds": 86400}"#,
            r#"{"recording_window_seconds": 0}"#,
            r#"{"recording_window_seconds": -7200}"#,
        ] {
            let err = AppSettings::from_json(raw).unwrap_err();
            assert!(matches!(err, SettingsError::RecordingWindow(_)), "{raw}");
        }

        let settings =
            AppSettings::from_json(r#"{"recording_window_seconds": 86399}"#).unwrap();
        assert_eq!(settings.recording_window_seconds, 86_399.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut settings = AppSettings::default();
        settings.skip_seconds = f64::NAN;
        assert!(matches!(settings.validate(), Err(SettingsError::SkipStep(_))));

        let mut settings = AppSettings::default();
        settings.recording_window_seconds = f64::INFINITY;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::RecordingWindow(_))
        ));
    }

    #[test]
    fn default_store_must_be_listed() {
        let err = AppSettings::from_json(r#"{"stores": ["BB Now #99"]}"#).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownStore(ref s) if s == "BB Now #14"));

        let err = AppSettings::from_json(r#"{"stores": []}"#).unwrap_err();
        assert!(matches!(err, SettingsError::NoStores));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = AppSettings::from_json("{ stores: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
