//! In-memory stand-ins for the browser: a recording video element and a
//! viewport that computes intersection ratios from rectangles.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::channel::oneshot;
use futures::future::{self, FutureExt};

use crate::error::MediaError;
use crate::media::geometry::{ObserverOptions, VisibilityCallback, VisibilitySource};
use crate::media::sink::{MediaSink, PlayRequest, PlaybackState};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load,
    Play,
    Pause,
    Seek(f64),
    Mute(bool),
    Rate(f64),
}

#[derive(Debug, Clone, Default)]
enum PlayOutcome {
    #[default]
    Resolve,
    Reject(String),
    Pending,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<Call>,
    position: f64,
    muted: bool,
    detached: bool,
    state: PlaybackState,
    outcome: PlayOutcome,
    pending: Vec<oneshot::Sender<Result<(), MediaError>>>,
}

#[derive(Clone, Default)]
pub struct FakeVideo(Rc<RefCell<FakeState>>);

impl FakeVideo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(reason: &str) -> Self {
        let video = Self::new();
        video.0.borrow_mut().outcome = PlayOutcome::Reject(reason.to_string());
        video
    }

    /// Play requests stay unsettled until `settle_pending` or `drop_pending`.
    pub fn pending() -> Self {
        let video = Self::new();
        video.0.borrow_mut().outcome = PlayOutcome::Pending;
        video
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    pub fn play_count(&self) -> usize {
        self.0
            .borrow()
            .calls
            .iter()
            .filter(|call| **call == Call::Play)
            .count()
    }

    pub fn position(&self) -> f64 {
        self.0.borrow().position
    }

    pub fn set_position(&self, seconds: f64) {
        self.0.borrow_mut().position = seconds;
    }

    pub fn state(&self) -> PlaybackState {
        self.0.borrow().state
    }

    pub fn remove_from_document(&self) {
        self.0.borrow_mut().detached = true;
    }

    pub fn settle_pending(&self, result: Result<(), MediaError>) {
        let senders: Vec<_> = self.0.borrow_mut().pending.drain(..).collect();
        for sender in senders {
            let _ = sender.send(result.clone());
        }
    }

    pub fn drop_pending(&self) {
        self.0.borrow_mut().pending.clear();
    }

    fn record(&self, call: Call) -> Result<(), MediaError> {
        let mut state = self.0.borrow_mut();
        if state.detached {
            return Err(MediaError::Detached);
        }
        state.calls.push(call);
        Ok(())
    }
}

impl MediaSink for FakeVideo {
    fn load(&self) -> Result<(), MediaError> {
        self.record(Call::Load)
    }

    fn play(&self) -> PlayRequest {
        if let Err(err) = self.record(Call::Play) {
            return future::ready(Err(err)).boxed_local();
        }
        let mut state = self.0.borrow_mut();
        match state.outcome.clone() {
            PlayOutcome::Resolve => {
                state.state = PlaybackState::Playing;
                future::ready(Ok(())).boxed_local()
            }
            PlayOutcome::Reject(reason) => {
                future::ready(Err(MediaError::PlaybackRejected(reason))).boxed_local()
            }
            PlayOutcome::Pending => {
                let (sender, receiver) = oneshot::channel();
                state.pending.push(sender);
                receiver
                    .map(|settled| {
                        settled.unwrap_or_else(|_| {
                            Err(MediaError::PlaybackRejected("request dropped".into()))
                        })
                    })
                    .boxed_local()
            }
        }
    }

    fn pause(&self) -> Result<(), MediaError> {
        self.record(Call::Pause)?;
        self.0.borrow_mut().state = PlaybackState::Paused;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.0.borrow().position
    }

    fn seek(&self, seconds: f64) -> Result<(), MediaError> {
        self.record(Call::Seek(seconds))?;
        self.0.borrow_mut().position = seconds;
        Ok(())
    }

    fn muted(&self) -> bool {
        self.0.borrow().muted
    }

    fn set_muted(&self, muted: bool) -> Result<(), MediaError> {
        self.record(Call::Mute(muted))?;
        self.0.borrow_mut().muted = muted;
        Ok(())
    }

    fn set_playback_rate(&self, rate: f64) -> Result<(), MediaError> {
        self.record(Call::Rate(rate))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn inflate(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let width = (self.x + self.width).min(other.x + other.width) - self.x.max(other.x);
        let height = (self.y + self.height).min(other.y + other.height) - self.y.max(other.y);
        width.max(0.0) * height.max(0.0)
    }
}

pub fn intersection_ratio(target: &Rect, root: &Rect, root_margin: f64) -> f64 {
    let area = target.area();
    if area <= 0.0 {
        return 0.0;
    }
    target.overlap_area(&root.inflate(root_margin)) / area
}

struct Observed {
    id: usize,
    rect: Rect,
    options: ObserverOptions,
    last: Option<bool>,
    on_change: VisibilityCallback,
}

struct ViewportState {
    root: Rect,
    next_id: usize,
    observed: Vec<Observed>,
}

/// A scrollable viewport. Targets are laid out in page coordinates and
/// callbacks fire only when a target crosses its threshold.
pub struct SimulatedViewport {
    inner: Rc<RefCell<ViewportState>>,
}

pub struct SimulatedRegistration {
    id: usize,
    viewport: Weak<RefCell<ViewportState>>,
}

impl Drop for SimulatedRegistration {
    fn drop(&mut self) {
        if let Some(viewport) = self.viewport.upgrade() {
            viewport.borrow_mut().observed.retain(|o| o.id != self.id);
        }
    }
}

impl SimulatedViewport {
    pub fn new(root: Rect) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewportState {
                root,
                next_id: 0,
                observed: Vec::new(),
            })),
        }
    }

    pub fn scroll_to(&self, y: f64) {
        self.inner.borrow_mut().root.y = y;
        self.recompute();
    }

    pub fn observed_count(&self) -> usize {
        self.inner.borrow().observed.len()
    }

    fn recompute(&self) {
        let mut state = self.inner.borrow_mut();
        let root = state.root;
        for observed in state.observed.iter_mut() {
            let ratio = intersection_ratio(&observed.rect, &root, observed.options.root_margin_px);
            let visible = observed.options.is_visible(ratio);
            if observed.last != Some(visible) {
                observed.last = Some(visible);
                (observed.on_change)(visible);
            }
        }
    }
}

impl VisibilitySource for SimulatedViewport {
    type Target = Rect;
    type Registration = SimulatedRegistration;

    fn observe(
        &self,
        target: &Rect,
        options: &ObserverOptions,
        on_change: VisibilityCallback,
    ) -> Result<SimulatedRegistration, MediaError> {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.observed.push(Observed {
                id,
                rect: *target,
                options: *options,
                last: None,
                on_change,
            });
            id
        };
        // Hosts report the initial state right after observation starts.
        self.recompute();
        Ok(SimulatedRegistration {
            id,
            viewport: Rc::downgrade(&self.inner),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_accounts_for_root_margin() {
        let root = Rect::new(0.0, 0.0, 800.0, 600.0);
        let target = Rect::new(0.0, 700.0, 400.0, 200.0);
        assert_eq!(intersection_ratio(&target, &root, 0.0), 0.0);
        assert_eq!(intersection_ratio(&target, &root, 150.0), 0.25);
        assert_eq!(intersection_ratio(&target, &root, 200.0), 0.5);
        assert_eq!(intersection_ratio(&target, &root, 300.0), 1.0);
    }

    #[test]
    fn empty_target_never_intersects() {
        let root = Rect::new(0.0, 0.0, 800.0, 600.0);
        let target = Rect::new(10.0, 10.0, 0.0, 50.0);
        assert_eq!(intersection_ratio(&target, &root, 200.0), 0.0);
    }
}
