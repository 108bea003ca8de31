// Browser bindings: HTMLVideoElement as a media sink, IntersectionObserver as
// the visibility source.
use dioxus::prelude::MountedData;
use futures_util::future::{self, FutureExt};
use tracing::debug;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::MediaError;
use crate::media::controller::PlaySettlement;
use crate::media::geometry::{ObserverOptions, VisibilityCallback, VisibilitySource};
use crate::media::sink::{MediaSink, PlayRequest};

#[derive(Clone)]
pub struct WebVideo {
    element: HtmlVideoElement,
}

impl WebVideo {
    /// Resolves the element behind an `onmounted` event, if it is a video.
    pub fn from_mounted(data: &MountedData) -> Option<Self> {
        let element = data.downcast::<web_sys::Element>()?.clone();
        element
            .dyn_into::<HtmlVideoElement>()
            .ok()
            .map(|element| Self { element })
    }

    fn connected(&self) -> Result<&HtmlVideoElement, MediaError> {
        if self.element.is_connected() {
            Ok(&self.element)
        } else {
            Err(MediaError::Detached)
        }
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    let name = js_sys::Reflect::get(value, &"name".into())
        .ok()
        .and_then(|v| v.as_string());
    let message = js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string());
    match (name, message) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (Some(name), None) => name,
        (None, Some(message)) => message,
        (None, None) => format!("{value:?}"),
    }
}

impl MediaSink for WebVideo {
    fn load(&self) -> Result<(), MediaError> {
        self.connected()?.load();
        Ok(())
    }

    fn play(&self) -> PlayRequest {
        let video = match self.connected() {
            Ok(video) => video,
            Err(err) => return future::ready(Err(err)).boxed_local(),
        };
        match video.play() {
            Ok(promise) => JsFuture::from(promise)
                .map(|settled| {
                    settled
                        .map(|_| ())
                        .map_err(|err| MediaError::PlaybackRejected(js_error_message(&err)))
                })
                .boxed_local(),
            Err(err) => {
                future::ready(Err(MediaError::PlaybackRejected(js_error_message(&err))))
                    .boxed_local()
            }
        }
    }

    fn pause(&self) -> Result<(), MediaError> {
        self.connected()?
            .pause()
            .map_err(|err| MediaError::PlaybackRejected(js_error_message(&err)))
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn seek(&self, seconds: f64) -> Result<(), MediaError> {
        self.connected()?.set_current_time(seconds);
        Ok(())
    }

    fn muted(&self) -> bool {
        self.element.muted()
    }

    fn set_muted(&self, muted: bool) -> Result<(), MediaError> {
        self.connected()?.set_muted(muted);
        Ok(())
    }

    fn set_playback_rate(&self, rate: f64) -> Result<(), MediaError> {
        self.connected()?.set_playback_rate(rate);
        Ok(())
    }
}

/// Disconnects the observer when dropped.
pub struct IntersectionRegistration {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for IntersectionRegistration {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The browser viewport (`root: null`).
#[derive(Clone, Copy, Default)]
pub struct Viewport;

impl VisibilitySource for Viewport {
    type Target = WebVideo;
    type Registration = IntersectionRegistration;

    fn observe(
        &self,
        target: &WebVideo,
        options: &ObserverOptions,
        mut on_change: VisibilityCallback,
    ) -> Result<IntersectionRegistration, MediaError> {
        let options = *options;
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_change(options.is_visible(entry.intersection_ratio()));
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin_css());
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| MediaError::ObserverUnavailable(js_error_message(&err)))?;
        observer.observe(&target.element);
        debug!(margin = %options.root_margin_css(), threshold = options.threshold, "observing video");

        Ok(IntersectionRegistration {
            observer,
            _callback: callback,
        })
    }
}

pub fn spawn_settlement(settlement: PlaySettlement) {
    wasm_bindgen_futures::spawn_local(settlement);
}

/// Defers a signal write to the next task so it never lands mid-render.
pub fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        f();
    });
}

/// Runs `on_tick` every `period_ms` for as long as the calling scope lives.
pub fn spawn_ticker<F>(period_ms: u32, mut on_tick: F)
where
    F: FnMut() + 'static,
{
    dioxus::prelude::spawn(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(period_ms).await;
            on_tick();
        }
    });
}
