use crate::error::MediaError;
use crate::media::sink::{MediaSink, PlayRequest, PlaybackState};

pub const PLAYBACK_SPEEDS: [f64; 4] = [0.5, 1.0, 1.5, 2.0];

/// User-facing transport state for a full-size feed player.
///
/// Live feeds have no duration (`f64::INFINITY`); recorded footage has a
/// fixed window and ends when the position reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    state: PlaybackState,
    muted: bool,
    position: f64,
    duration: f64,
    speed: f64,
}

impl Transport {
    pub fn recorded(duration: f64) -> Self {
        Self {
            state: PlaybackState::Unstarted,
            muted: false,
            position: 0.0,
            duration: duration.max(0.0),
            speed: 1.0,
        }
    }

    /// Live feeds start out playing; autoplay only works while muted.
    pub fn live(muted: bool) -> Self {
        Self {
            state: PlaybackState::Playing,
            muted,
            position: 0.0,
            duration: f64::INFINITY,
            speed: 1.0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Fraction of the window already played, for progress bars and
    /// timeline markers.
    pub fn progress(&self) -> f64 {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return 0.0;
        }
        (self.position / self.duration).clamp(0.0, 1.0)
    }

    pub fn toggle_play(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Ended => {
                self.position = 0.0;
                PlaybackState::Playing
            }
            PlaybackState::Unstarted | PlaybackState::Paused => PlaybackState::Playing,
        };
        self.state
    }

    /// Mirrors `play`/`pause` events reported by the element itself.
    pub fn set_playing(&mut self, playing: bool) {
        self.state = if playing {
            PlaybackState::Playing
        } else if self.state == PlaybackState::Ended {
            PlaybackState::Ended
        } else {
            PlaybackState::Paused
        };
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn seek(&mut self, seconds: f64) -> f64 {
        let target = if seconds.is_finite() { seconds } else { 0.0 };
        self.position = target.clamp(0.0, self.duration);
        if self.state == PlaybackState::Ended && self.position < self.duration {
            self.state = PlaybackState::Paused;
        }
        self.position
    }

    pub fn skip(&mut self, delta: f64) -> f64 {
        self.seek(self.position + delta)
    }

    /// Accepts only the advertised speeds.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if PLAYBACK_SPEEDS.iter().any(|s| (s - speed).abs() < f64::EPSILON) {
            self.speed = speed;
            true
        } else {
            false
        }
    }

    /// Advances the clock while playing; stops at the end of the window.
    pub fn tick(&mut self, elapsed: f64) {
        if !self.is_playing() || elapsed <= 0.0 {
            return;
        }
        self.position += elapsed * self.speed;
        if self.position >= self.duration {
            self.position = self.duration;
            self.state = PlaybackState::Ended;
        }
    }

    /// Pushes play state and mute flag onto a bound element. The play
    /// request is returned unsettled.
    pub fn apply_playback<S: MediaSink>(
        &self,
        sink: &S,
    ) -> Result<Option<PlayRequest>, MediaError> {
        if sink.muted() != self.muted {
            sink.set_muted(self.muted)?;
        }
        if self.is_playing() {
            Ok(Some(sink.play()))
        } else {
            sink.pause()?;
            Ok(None)
        }
    }

    pub fn apply_position<S: MediaSink>(&self, sink: &S) -> Result<(), MediaError> {
        sink.set_playback_rate(self.speed)?;
        if (sink.current_time() - self.position).abs() > 0.5 {
            sink.seek(self.position)?;
        }
        Ok(())
    }
}

/// Formats seconds as `HH:MM:SS`.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::media::testing::{Call, FakeVideo};

    #[test]
    fn recorded_footage_plays_to_the_end() {
        let mut transport = Transport::recorded(30.0);
        assert_eq!(transport.toggle_play(), PlaybackState::Playing);
        transport.tick(10.0);
        assert_eq!(transport.position(), 10.0);
        assert!((transport.progress() - 1.0 / 3.0).abs() < 1e-9);

        transport.tick(25.0);
        assert_eq!(transport.position(), 30.0);
        assert_eq!(transport.state(), PlaybackState::Ended);

        transport.tick(5.0);
        assert_eq!(transport.position(), 30.0);
    }

    #[test]
    fn replay_after_end_restarts() {
        let mut transport = Transport::recorded(5.0);
        transport.toggle_play();
        transport.tick(6.0);
        assert_eq!(transport.toggle_play(), PlaybackState::Playing);
        assert_eq!(transport.position(), 0.0);
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut transport = Transport::recorded(7200.0);
        transport.tick(5.0);
        assert_eq!(transport.position(), 0.0);

        transport.toggle_play();
        transport.toggle_play();
        transport.tick(5.0);
        assert_eq!(transport.position(), 0.0);
        assert_eq!(transport.state(), PlaybackState::Paused);
    }

    #[test]
    fn seeking_and_skipping_stay_in_the_window() {
        let mut transport = Transport::recorded(7200.0);
        assert_eq!(transport.skip(-10.0), 0.0);
        assert_eq!(transport.seek(7195.0), 7195.0);
        assert_eq!(transport.skip(10.0), 7200.0);
        assert_eq!(transport.seek(f64::NAN), 0.0);
    }

    #[test]
    fn seeking_back_from_the_end_pauses() {
        let mut transport = Transport::recorded(60.0);
        transport.toggle_play();
        transport.tick(60.0);
        transport.seek(12.0);
        assert_eq!(transport.state(), PlaybackState::Paused);
    }

    #[test]
    fn speed_scales_the_clock() {
        let mut transport = Transport::recorded(100.0);
        assert!(transport.set_speed(2.0));
        assert!(!transport.set_speed(3.0));
        assert_eq!(transport.speed(), 2.0);

        transport.toggle_play();
        transport.tick(4.0);
        assert_eq!(transport.position(), 8.0);
    }

    #[test]
    fn element_events_drive_play_state() {
        let mut transport = Transport::live(true);
        assert!(transport.is_playing());
        transport.set_playing(false);
        assert_eq!(transport.state(), PlaybackState::Paused);
        transport.set_playing(true);
        assert!(transport.is_playing());
        assert_eq!(transport.progress(), 0.0);
    }

    #[test]
    fn live_feed_toggles_reach_the_element() {
        let video = FakeVideo::new();
        let mut transport = Transport::live(true);

        let request = transport.apply_playback(&video).unwrap();
        block_on(request.expect("live feed plays")).expect("fake resolves");
        assert_eq!(video.state(), PlaybackState::Playing);

        transport.toggle_play();
        transport.toggle_mute();
        assert!(transport.apply_playback(&video).unwrap().is_none());

        assert_eq!(
            video.calls(),
            vec![Call::Mute(true), Call::Play, Call::Mute(false), Call::Pause]
        );
        assert_eq!(video.state(), PlaybackState::Paused);
    }

    #[test]
    fn position_sync_ignores_small_drift() {
        let video = FakeVideo::new();
        let mut transport = Transport::recorded(600.0);
        video.set_position(10.2);
        transport.seek(10.0);
        transport.apply_position(&video).unwrap();
        assert_eq!(video.calls(), vec![Call::Rate(1.0)]);

        transport.seek(120.0);
        transport.apply_position(&video).unwrap();
        assert_eq!(video.position(), 120.0);
    }

    #[test]
    fn detached_element_reports_an_error() {
        let video = FakeVideo::new();
        video.remove_from_document();
        let transport = Transport::recorded(60.0);
        assert_eq!(transport.apply_playback(&video).err(), Some(MediaError::Detached));
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0.0), "00:00:00");
        assert_eq!(format_clock(59.9), "00:00:59");
        assert_eq!(format_clock(3725.0), "01:02:05");
        assert_eq!(format_clock(7200.0), "02:00:00");
        assert_eq!(format_clock(-4.0), "00:00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00:00");
    }
}
