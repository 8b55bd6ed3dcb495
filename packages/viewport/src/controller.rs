//! Event-driven re-fitting.
//!
//! Both re-fit triggers (a new container size, a new bounding box) go
//! through [`ViewportController::refit`]; there is no separate resize path.

use covid_dashboard_geography_models::BoundingBox;

use crate::{ContainerSize, ViewportFitter, ViewportState};

/// Result of a re-fit attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    /// A new viewport was computed and is now current.
    Applied(ViewportState),
    /// The fit was skipped (no usable container yet); the previous viewport
    /// is still current.
    Retained(ViewportState),
}

impl FitOutcome {
    /// The viewport that is current after this outcome.
    #[must_use]
    pub const fn viewport(&self) -> ViewportState {
        match self {
            Self::Applied(viewport) | Self::Retained(viewport) => *viewport,
        }
    }

    /// Returns `true` if a new viewport was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Owns the current camera and the inputs it was fitted from.
#[derive(Debug, Clone)]
pub struct ViewportController {
    fitter: ViewportFitter,
    padding: f64,
    bounds: BoundingBox,
    size: Option<ContainerSize>,
    viewport: ViewportState,
}

impl ViewportController {
    /// Creates a controller showing `initial` until the first container size
    /// arrives.
    #[must_use]
    pub const fn new(
        fitter: ViewportFitter,
        padding: f64,
        bounds: BoundingBox,
        initial: ViewportState,
    ) -> Self {
        Self {
            fitter,
            padding,
            bounds,
            size: None,
            viewport: initial,
        }
    }

    /// Current camera (read-only snapshot).
    #[must_use]
    pub const fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Bounding box the camera is (or will be) fitted to.
    #[must_use]
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Last container size received, usable or not.
    #[must_use]
    pub const fn size(&self) -> Option<ContainerSize> {
        self.size
    }

    /// Records a new container size and re-fits.
    pub fn resize(&mut self, size: ContainerSize) -> FitOutcome {
        self.size = Some(size);
        self.refit()
    }

    /// Records a new bounding box and re-fits.
    pub fn set_bounds(&mut self, bounds: BoundingBox) -> FitOutcome {
        self.bounds = bounds;
        self.refit()
    }

    /// Fits the current bounds into the current size, replacing the viewport
    /// wholesale on success.
    pub fn refit(&mut self) -> FitOutcome {
        let fitted = self
            .size
            .and_then(|size| self.fitter.fit(self.bounds, size, self.padding));

        match fitted {
            Some(viewport) => {
                self.viewport = viewport;
                FitOutcome::Applied(viewport)
            }
            None => FitOutcome::Retained(self.viewport),
        }
    }
}

/// Coalesces container resize signals.
///
/// Hosts can emit many resize signals in quick succession. Each observed
/// size replaces the pending one, so a [`flush`](Self::flush) fits only the
/// final size.
#[derive(Debug, Clone, Default)]
pub struct ResizeObserver {
    pending: Option<ContainerSize>,
    superseded: u64,
}

impl ResizeObserver {
    /// Creates an observer with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            superseded: 0,
        }
    }

    /// Records a resize signal, discarding any size still pending.
    pub fn observe(&mut self, size: ContainerSize) {
        if let Some(previous) = self.pending.replace(size) {
            self.superseded += 1;
            log::trace!("Resize to {size:?} supersedes pending {previous:?}");
        }
    }

    /// Returns `true` if a resize is waiting to be fitted.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of signals discarded because a newer one arrived first.
    #[must_use]
    pub const fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Applies the pending size, if any, to `controller`.
    pub fn flush(&mut self, controller: &mut ViewportController) -> Option<FitOutcome> {
        self.pending.take().map(|size| controller.resize(size))
    }
}
