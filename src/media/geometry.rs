//! Observation parameters and the seam over the host's intersection facility.

use serde::{Deserialize, Serialize};

use crate::error::MediaError;

pub const DEFAULT_ROOT_MARGIN_PX: f64 = 200.0;
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// How eagerly an element counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Expansion of the observation root on all sides, so media starts
    /// loading slightly before it scrolls into view.
    pub root_margin_px: f64,
    /// Minimum intersecting fraction of the element's area.
    pub threshold: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}

impl ObserverOptions {
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px)
    }

    pub fn is_visible(&self, ratio: f64) -> bool {
        is_visible_ratio(ratio, self.threshold)
    }
}

/// An element is visible once any of it overlaps the root and the overlap
/// reaches the threshold. A zero threshold means "any overlap".
pub fn is_visible_ratio(ratio: f64, threshold: f64) -> bool {
    ratio.is_finite() && ratio > 0.0 && ratio >= threshold
}

pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// A host facility that reports when a target crosses the visibility
/// threshold. Callbacks arrive asynchronously on the UI thread, in the
/// order the geometry changed.
pub trait VisibilitySource {
    type Target: ?Sized;
    /// Dropping the registration stops further callbacks.
    type Registration;

    fn observe(
        &self,
        target: &Self::Target,
        options: &ObserverOptions,
        on_change: VisibilityCallback,
    ) -> Result<Self::Registration, MediaError>;
}
