use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::debug;

use crate::media::controller::LazyMediaController;
use crate::media::geometry::{ObserverOptions, VisibilitySource};
use crate::media::{defer_signal_update, spawn_settlement, Viewport, WebVideo};
use crate::settings::AppSettings;

type Registration = <Viewport as VisibilitySource>::Registration;

struct LazyBinding {
    controller: Rc<RefCell<LazyMediaController<WebVideo>>>,
    registration: Option<Registration>,
}

impl LazyBinding {
    fn new(label: &str) -> Self {
        Self {
            controller: Rc::new(RefCell::new(LazyMediaController::new(label))),
            registration: None,
        }
    }

    // Observer first, so no callback can reach a detached controller.
    fn release(&mut self) {
        self.registration.take();
        self.controller.borrow_mut().detach();
    }
}

/// Handle returned by [`use_lazy_video`].
#[derive(Clone)]
pub struct LazyVideo {
    is_visible: Signal<bool>,
    options: ObserverOptions,
    binding: Rc<RefCell<LazyBinding>>,
}

impl PartialEq for LazyVideo {
    fn eq(&self, other: &Self) -> bool {
        self.is_visible == other.is_visible && Rc::ptr_eq(&self.binding, &other.binding)
    }
}

/// Writes a deferred visibility update. Returns `false` when the owning
/// scope has already been dropped, in which case the update is discarded.
fn write_visibility(mut is_visible: Signal<bool>, visible: bool) -> bool {
    match is_visible.try_peek() {
        Ok(current) if *current == visible => return true,
        Ok(_) => {}
        Err(_) => return false,
    }
    match is_visible.try_write() {
        Ok(mut current) => {
            *current = visible;
            true
        }
        Err(_) => false,
    }
}

impl LazyVideo {
    pub fn is_visible(&self) -> bool {
        (self.is_visible)()
    }

    // Unbinds the previous element and clears the flag it left behind.
    fn unbind(&self, binding: &mut LazyBinding) {
        binding.release();
        write_visibility(self.is_visible, false);
    }

    /// Binds the rendered `<video>`; wire it to `onmounted`. Until this runs
    /// with a real element the video stays dormant.
    pub fn mount(&self, event: MountedEvent) {
        let Some(video) = WebVideo::from_mounted(&event.data()) else {
            debug!("lazy video mounted without a usable element");
            return;
        };

        let mut binding = self.binding.borrow_mut();
        self.unbind(&mut binding);
        let controller = binding.controller.clone();
        if let Some(settlement) = controller.borrow_mut().attach(video.clone()) {
            spawn_settlement(settlement);
        }

        let runtime = Runtime::current();
        let is_visible = self.is_visible;
        let on_change = {
            let controller = controller.clone();
            Box::new(move |visible: bool| {
                let settlement = controller.borrow_mut().set_visible(visible);
                if let Some(settlement) = settlement {
                    spawn_settlement(settlement);
                }
                let runtime = runtime.clone();
                defer_signal_update(move || {
                    let _guard = RuntimeGuard::new(runtime);
                    if !write_visibility(is_visible, visible) {
                        debug!(visible, "visibility update dropped after unmount");
                    }
                });
            })
        };

        match Viewport.observe(&video, &self.options, on_change) {
            Ok(registration) => binding.registration = Some(registration),
            Err(err) => {
                debug!(error = %err, "lazy video stays dormant");
                controller.borrow_mut().detach();
            }
        }
    }
}

/// Ties a `<video>`'s playback to its visibility in the viewport.
///
/// Starts out not visible. Once mounted, scrolling the element into view
/// (with the configured margin and threshold) loads and plays it; scrolling
/// it out pauses and rewinds it. Unmounting disconnects the observer.
pub fn use_lazy_video(label: &str) -> LazyVideo {
    let options = try_use_context::<Signal<AppSettings>>()
        .map(|settings| settings.peek().lazy_video)
        .unwrap_or_default();
    let is_visible = use_signal(|| false);
    let binding = use_hook({
        let label = label.to_string();
        move || Rc::new(RefCell::new(LazyBinding::new(&label)))
    });

    use_drop({
        let binding = binding.clone();
        move || binding.borrow_mut().release()
    });

    LazyVideo {
        is_visible,
        options,
        binding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    thread_local! {
        static FLAG: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
        static HANDLE: RefCell<Option<LazyVideo>> = const { RefCell::new(None) };
    }

    #[component]
    fn FlagOwner() -> Element {
        let flag = use_signal(|| false);
        FLAG.with(|slot| *slot.borrow_mut() = Some(flag));
        rsx! {}
    }

    #[component]
    fn TileOwner() -> Element {
        let lazy = use_lazy_video("waiting-area");
        HANDLE.with(|slot| *slot.borrow_mut() = Some(lazy));
        rsx! {}
    }

    #[test]
    fn deferred_write_lands_while_the_scope_lives() {
        let mut dom = VirtualDom::new(FlagOwner);
        dom.rebuild_in_place();
        let flag = FLAG.with(|slot| slot.borrow_mut().take()).unwrap();

        dom.in_runtime(|| {
            assert!(write_visibility(flag, true));
            assert!(*flag.peek());
            assert!(write_visibility(flag, true));
        });
    }

    #[test]
    fn deferred_write_after_unmount_is_discarded() {
        let mut dom = VirtualDom::new(FlagOwner);
        dom.rebuild_in_place();
        let flag = FLAG.with(|slot| slot.borrow_mut().take()).unwrap();

        drop(dom);
        assert!(!write_visibility(flag, true));
        assert!(!write_visibility(flag, false));
    }

    #[test]
    fn rebinding_clears_a_stale_visible_flag() {
        let mut dom = VirtualDom::new(TileOwner);
        dom.rebuild_in_place();
        let lazy = HANDLE.with(|slot| slot.borrow_mut().take()).unwrap();

        dom.in_runtime(|| {
            assert!(write_visibility(lazy.is_visible, true));
            assert!(*lazy.is_visible.peek());

            let binding = lazy.binding.clone();
            lazy.unbind(&mut binding.borrow_mut());
            assert!(!*lazy.is_visible.peek());
            assert!(!binding.borrow().controller.borrow().is_visible());
        });
    }
}
