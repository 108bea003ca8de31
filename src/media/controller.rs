//! Lazy playback driven by viewport visibility.
//!
//! Entering view loads and plays the element; leaving view pauses it and
//! rewinds to the start, so a later re-entry restarts the clip instead of
//! resuming it. Commands are only issued when they differ from the last one
//! issued, which keeps bursts of identical visibility reports harmless.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures_util::FutureExt;
use tracing::{debug, warn};

use crate::error::MediaError;
use crate::media::sink::{MediaSink, PlayRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Issued {
    Play,
    Stop,
}

pub struct LazyMediaController<S: MediaSink> {
    label: String,
    sink: Option<S>,
    visible: bool,
    last_issued: Option<Issued>,
    // Shared with in-flight settlements so they can tell they outlived the element.
    live: Rc<Cell<bool>>,
}

impl<S: MediaSink> LazyMediaController<S> {
    /// A dormant controller: no element bound, not visible, no commands.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sink: None,
            visible: false,
            last_issued: None,
            live: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Binds the rendered element. A controller that was already told it is
    /// visible starts playback immediately.
    pub fn attach(&mut self, sink: S) -> Option<PlaySettlement> {
        if self.sink.is_some() {
            self.detach();
        }
        self.live = Rc::new(Cell::new(true));
        self.sink = Some(sink);
        self.last_issued = None;
        if self.visible {
            self.start()
        } else {
            None
        }
    }

    /// Applies one visibility report. The returned settlement must be driven
    /// by the host executor; it never fails.
    pub fn set_visible(&mut self, visible: bool) -> Option<PlaySettlement> {
        self.visible = visible;
        if visible {
            self.start()
        } else {
            self.stop();
            None
        }
    }

    /// Unbinds the element. Settlements still in flight become inert.
    pub fn detach(&mut self) -> Option<S> {
        self.live.set(false);
        self.visible = false;
        self.last_issued = None;
        self.sink.take()
    }

    fn start(&mut self) -> Option<PlaySettlement> {
        if self.last_issued == Some(Issued::Play) {
            return None;
        }
        let sink = self.sink.as_ref()?;
        self.last_issued = Some(Issued::Play);

        if let Err(err) = sink.load() {
            debug!(label = %self.label, error = %err, "skipping lazy play");
            return None;
        }
        Some(PlaySettlement {
            request: sink.play(),
            live: self.live.clone(),
            label: self.label.clone(),
        })
    }

    fn stop(&mut self) {
        if self.last_issued != Some(Issued::Play) {
            return;
        }
        self.last_issued = Some(Issued::Stop);
        let Some(sink) = self.sink.as_ref() else {
            return;
        };

        let rewound = sink.pause().and_then(|_| {
            if sink.current_time() > 0.0 {
                sink.seek(0.0)
            } else {
                Ok(())
            }
        });
        if let Err(err) = rewound {
            debug!(label = %self.label, error = %err, "lazy pause ignored");
        }
    }
}

/// A pending play request. Resolves to `()` whatever the host decides;
/// rejections are only logged.
#[must_use = "play settlements do nothing unless polled"]
pub struct PlaySettlement {
    request: PlayRequest,
    live: Rc<Cell<bool>>,
    label: String,
}

impl PlaySettlement {
    fn report(&self, result: Result<(), MediaError>) {
        let live = self.live.get();
        match result {
            Ok(()) if live => debug!(label = %self.label, "lazy playback started"),
            Ok(()) => debug!(label = %self.label, "play resolved after unmount"),
            Err(err) if live => {
                warn!(label = %self.label, error = %err, "lazy play failed (may need user interaction)")
            }
            Err(err) => debug!(label = %self.label, error = %err, "play rejected after unmount"),
        }
    }
}

impl Future for PlaySettlement {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match self.request.poll_unpin(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(result) => {
                self.report(result);
                Poll::Ready(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::future::join_all;

    use super::*;
    use crate::media::geometry::{ObserverOptions, VisibilitySource};
    use crate::media::testing::{Call, FakeVideo, Rect, SimulatedViewport};

    fn settle(settlement: Option<PlaySettlement>) {
        if let Some(settlement) = settlement {
            block_on(settlement);
        }
    }

    #[test]
    fn dormant_controller_issues_nothing() {
        let mut controller = LazyMediaController::<FakeVideo>::new("preview");
        assert!(!controller.is_visible());
        assert!(!controller.is_attached());
        assert!(controller.set_visible(true).is_none());
        assert!(controller.set_visible(false).is_none());
    }

    #[test]
    fn attached_but_unseen_element_stays_untouched() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        assert!(controller.attach(video.clone()).is_none());
        assert!(!controller.is_visible());
        assert!(video.calls().is_empty());
    }

    #[test]
    fn entering_view_loads_then_plays() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        settle(controller.set_visible(true));

        assert!(controller.is_visible());
        assert_eq!(video.calls(), vec![Call::Load, Call::Play]);
    }

    #[test]
    fn repeated_visible_reports_play_once() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        settle(controller.set_visible(true));
        assert!(controller.set_visible(true).is_none());
        assert!(controller.set_visible(true).is_none());

        assert_eq!(video.play_count(), 1);
    }

    #[test]
    fn repeated_hidden_reports_pause_once() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        settle(controller.set_visible(true));
        let _ = controller.set_visible(false);
        let _ = controller.set_visible(false);

        let pauses = video.calls().iter().filter(|c| **c == Call::Pause).count();
        assert_eq!(pauses, 1);
    }

    #[test]
    fn leaving_view_rewinds_from_any_position() {
        for position in [0.5, 3.0, 59.9, 3600.0] {
            let video = FakeVideo::new();
            let mut controller = LazyMediaController::new("preview");
            let _ = controller.attach(video.clone());

            settle(controller.set_visible(true));
            video.set_position(position);
            let _ = controller.set_visible(false);

            assert_eq!(video.position(), 0.0);
            assert_eq!(
                video.calls(),
                vec![Call::Load, Call::Play, Call::Pause, Call::Seek(0.0)]
            );
        }
    }

    #[test]
    fn leaving_view_at_start_skips_the_seek() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        settle(controller.set_visible(true));
        let _ = controller.set_visible(false);

        assert_eq!(video.calls(), vec![Call::Load, Call::Play, Call::Pause]);
    }

    #[test]
    fn rapid_toggles_are_processed_in_order() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        for visible in [true, false, true, false, true] {
            settle(controller.set_visible(visible));
        }

        assert_eq!(
            video.calls(),
            vec![
                Call::Load,
                Call::Play,
                Call::Pause,
                Call::Load,
                Call::Play,
                Call::Pause,
                Call::Load,
                Call::Play,
            ]
        );
        assert!(controller.is_visible());
    }

    #[test]
    fn rejected_play_is_contained() {
        let video = FakeVideo::rejecting("NotAllowedError");
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        settle(controller.set_visible(true));

        assert!(controller.is_visible());
        assert_eq!(video.calls(), vec![Call::Load, Call::Play]);
        // The rejection does not count as a transition.
        assert!(controller.set_visible(true).is_none());
    }

    #[test]
    fn settlement_after_detach_is_harmless() {
        let video = FakeVideo::pending();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        let settlement = controller.set_visible(true).expect("play issued");
        let detached = controller.detach();
        assert!(detached.is_some());
        assert!(!controller.is_visible());

        video.settle_pending(Err(MediaError::PlaybackRejected("AbortError".into())));
        block_on(settlement);

        let settlement = {
            let _ = controller.attach(video.clone());
            controller.set_visible(true).expect("play issued")
        };
        let _ = controller.detach();
        video.settle_pending(Ok(()));
        block_on(settlement);
    }

    #[test]
    fn dropped_play_request_settles_quietly() {
        let video = FakeVideo::pending();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        let settlement = controller.set_visible(true).expect("play issued");
        video.drop_pending();
        block_on(settlement);
        assert!(controller.is_visible());
    }

    #[test]
    fn detached_element_race_is_ignored() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(video.clone());

        settle(controller.set_visible(true));
        video.set_position(8.0);
        video.remove_from_document();
        let _ = controller.set_visible(false);

        assert!(!controller.is_visible());
        assert_eq!(video.calls(), vec![Call::Load, Call::Play]);

        // No retry once the element is gone.
        assert!(controller.set_visible(true).is_none());
        assert_eq!(video.play_count(), 1);
    }

    #[test]
    fn attach_while_visible_autoplays() {
        let video = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        assert!(controller.set_visible(true).is_none());

        settle(controller.attach(video.clone()));

        assert_eq!(video.calls(), vec![Call::Load, Call::Play]);
        assert_eq!(video.position(), 0.0);
    }

    #[test]
    fn reattach_starts_a_fresh_element() {
        let first = FakeVideo::new();
        let second = FakeVideo::new();
        let mut controller = LazyMediaController::new("preview");
        let _ = controller.attach(first.clone());
        settle(controller.set_visible(true));

        let _ = controller.attach(second.clone());
        assert!(!controller.is_visible());
        assert!(second.calls().is_empty());

        settle(controller.set_visible(true));
        assert_eq!(second.calls(), vec![Call::Load, Call::Play]);
        assert_eq!(first.play_count(), 1);
    }

    #[test]
    fn handles_are_independent() {
        let a = FakeVideo::new();
        let b = FakeVideo::new();
        let mut controller_a = LazyMediaController::new("loading-bay-1");
        let mut controller_b = LazyMediaController::new("exit-gate");
        let _ = controller_a.attach(a.clone());
        let _ = controller_b.attach(b.clone());

        settle(controller_b.set_visible(true));
        b.set_position(42.0);
        let before = b.calls();

        settle(controller_a.set_visible(true));
        let _ = controller_a.set_visible(false);

        assert_eq!(b.calls(), before);
        assert_eq!(b.position(), 42.0);
        assert!(controller_b.is_visible());
        assert_eq!(a.calls(), vec![Call::Load, Call::Play, Call::Pause]);
    }

    #[test]
    fn scroll_through_restarts_from_the_beginning() {
        let video = FakeVideo::new();
        let controller = Rc::new(RefCell::new(LazyMediaController::new("waiting-area")));
        let _ = controller.borrow_mut().attach(video.clone());
        let pending = Rc::new(RefCell::new(Vec::new()));

        let viewport = SimulatedViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let _registration = viewport
            .observe(
                &Rect::new(0.0, 1000.0, 400.0, 200.0),
                &ObserverOptions::default(),
                Box::new({
                    let controller = controller.clone();
                    let pending = pending.clone();
                    move |visible| {
                        if let Some(settlement) = controller.borrow_mut().set_visible(visible) {
                            pending.borrow_mut().push(settlement);
                        }
                    }
                }),
            )
            .unwrap();
        assert!(video.calls().is_empty());

        // Expanded root reaches y=1010: 5% of the element, below the threshold.
        viewport.scroll_to(210.0);
        assert!(video.calls().is_empty());

        // 10% of the element intersects the expanded root.
        viewport.scroll_to(220.0);
        assert_eq!(video.calls(), vec![Call::Load, Call::Play]);
        block_on(join_all(pending.borrow_mut().drain(..)));

        video.set_position(17.25);
        viewport.scroll_to(2000.0);
        assert_eq!(video.position(), 0.0);
        assert!(!controller.borrow().is_visible());

        viewport.scroll_to(900.0);
        block_on(join_all(pending.borrow_mut().drain(..)));
        assert_eq!(
            video.calls(),
            vec![
                Call::Load,
                Call::Play,
                Call::Pause,
                Call::Seek(0.0),
                Call::Load,
                Call::Play,
            ]
        );
        assert_eq!(video.position(), 0.0);
        assert!(controller.borrow().is_visible());
    }

    #[test]
    fn dropped_registration_stops_callbacks() {
        let video = FakeVideo::new();
        let controller = Rc::new(RefCell::new(LazyMediaController::new("entry-gate")));
        let _ = controller.borrow_mut().attach(video.clone());

        let viewport = SimulatedViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let registration = viewport
            .observe(
                &Rect::new(0.0, 1000.0, 400.0, 200.0),
                &ObserverOptions::default(),
                Box::new({
                    let controller = controller.clone();
                    move |visible| {
                        let _ = controller.borrow_mut().set_visible(visible);
                    }
                }),
            )
            .unwrap();

        drop(registration);
        let _ = controller.borrow_mut().detach();
        viewport.scroll_to(900.0);

        assert_eq!(viewport.observed_count(), 0);
        assert!(video.calls().is_empty());
    }
}
