//! Bounding box → camera fitting.

use covid_dashboard_geography_models::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::mercator::{self, WorldPoint};
use crate::{ContainerSize, ViewportState};

/// Pure function object turning `(box, container, padding)` into camera
/// parameters.
///
/// The fitter holds only its numeric policy; it never remembers previous
/// fits, so identical inputs always produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportFitter {
    /// A container must be strictly larger than this on both axes (pixels)
    /// for a fit to be computed.
    pub min_usable_size: f64,
    /// Lowest zoom ever returned. Also used when the computed zoom is not
    /// finite.
    pub min_zoom: f64,
    /// Highest zoom ever returned.
    pub max_zoom: f64,
    /// Extent in degrees that zero-width or zero-height boxes are widened
    /// to.
    pub min_extent: f64,
}

impl Default for ViewportFitter {
    fn default() -> Self {
        Self {
            min_usable_size: 50.0,
            min_zoom: 0.0,
            max_zoom: 20.0,
            min_extent: 0.01,
        }
    }
}

impl ViewportFitter {
    /// Returns `true` if `size` is large enough to fit into.
    #[must_use]
    pub fn is_usable(&self, size: ContainerSize) -> bool {
        size.width > self.min_usable_size && size.height > self.min_usable_size
    }

    /// Computes the camera that frames `bbox` inside `size`, keeping
    /// `padding` pixels free on every side.
    ///
    /// The zoom is the largest (fractional) value at which the projected
    /// box plus padding fits the container, clamped to
    /// `[min_zoom, max_zoom]`. The center is the projected midpoint of the
    /// box corners.
    ///
    /// Returns `None` when the fit is skipped: the container is at or below
    /// the usable size, or the box has non-finite coordinates. Callers keep
    /// their previous viewport in that case.
    #[must_use]
    pub fn fit(
        &self,
        bbox: BoundingBox,
        size: ContainerSize,
        padding: f64,
    ) -> Option<ViewportState> {
        if !self.is_usable(size) {
            log::trace!(
                "Skipping fit: container {}x{} is not larger than {}px",
                size.width,
                size.height,
                self.min_usable_size
            );
            return None;
        }

        if !bbox.is_finite() {
            log::debug!("Skipping fit: bounding box {bbox:?} is not finite");
            return None;
        }

        let bbox = if bbox.is_degenerate() {
            log::debug!(
                "Widening degenerate bounding box {bbox:?} to {} degrees",
                self.min_extent
            );
            bbox.with_min_extent(self.min_extent)
        } else {
            bbox
        };

        let padding = padding.max(0.0);
        let south_west = mercator::project(bbox.south_west());
        let north_east = mercator::project(bbox.north_east());

        let span_x = (north_east.x - south_west.x).abs();
        let span_y = (north_east.y - south_west.y).abs();
        let target_width = size.width - 2.0 * padding;
        let target_height = size.height - 2.0 * padding;

        let scale = (target_width / span_x).min(target_height / span_y);
        let zoom = scale.log2();

        if !zoom.is_finite() {
            let centroid = bbox.centroid();
            log::debug!(
                "Non-finite zoom for {bbox:?} in {}x{} with {padding}px padding, \
                 falling back to zoom {}",
                size.width,
                size.height,
                self.min_zoom
            );
            return Some(ViewportState::new(
                centroid.latitude,
                centroid.longitude,
                self.min_zoom,
            ));
        }

        let center = mercator::unproject(WorldPoint {
            x: (south_west.x + north_east.x) / 2.0,
            y: (south_west.y + north_east.y) / 2.0,
        });

        Some(ViewportState::new(
            center.latitude,
            center.longitude,
            zoom.clamp(self.min_zoom, self.max_zoom),
        ))
    }

    /// Like [`Self::fit`], returning `previous` unchanged when the fit is
    /// skipped.
    #[must_use]
    pub fn fit_or_retain(
        &self,
        previous: ViewportState,
        bbox: BoundingBox,
        size: ContainerSize,
        padding: f64,
    ) -> ViewportState {
        self.fit(bbox, size, padding).unwrap_or(previous)
    }
}
