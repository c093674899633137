//! Pixel geometry of a SlideMenu.
//!
//! All rectangles share the widget's own coordinate frame: the button's
//! drawing rect as reported by the host, normally with its origin at 0,0.
//! The clip rect and the landing zones extend to negative coordinates.

use super::metrics::SlideMenuMetrics;
use slidemenu_ui_graphics::{mm_to_px, Density, IntRect, IntSize, Mm};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneSide {
    Left,
    Right,
}

/// Measured size of the button: `trunc(mm * DP_PER_MM * density)`, square.
pub fn compute_own_size(physical_side: Mm, density: Density) -> IntSize {
    IntSize::square(physical_side.to_px_floor(density).max(0))
}

/// Clip rect: the own rect grown upward and sideways, sharing its bottom edge.
///
/// Edges saturate at the `i32` range instead of wrapping.
pub fn compute_clip_rect(
    own: IntRect,
    additional_top: Mm,
    additional_left: Mm,
    additional_right: Mm,
    density: Density,
) -> IntRect {
    IntRect::new(
        own.left.saturating_sub(mm_to_px(additional_left, density)),
        own.top.saturating_sub(mm_to_px(additional_top, density)),
        own.right.saturating_add(mm_to_px(additional_right, density)),
        own.bottom,
    )
}

/// Landing zone adjacent to `own` on `side`, bottom-aligned with it.
///
/// Returns [`IntRect::EMPTY`] when either converted dimension is not positive.
pub fn compute_landing_zone(
    own: IntRect,
    zone_width: Mm,
    zone_height: Mm,
    density: Density,
    side: ZoneSide,
) -> IntRect {
    let width = mm_to_px(zone_width, density);
    let height = mm_to_px(zone_height, density);
    if width <= 0 || height <= 0 {
        return IntRect::EMPTY;
    }

    let top = own.bottom.saturating_sub(height);
    match side {
        ZoneSide::Left => IntRect::new(own.left.saturating_sub(width), top, own.left, own.bottom),
        ZoneSide::Right => IntRect::new(own.right, top, own.right.saturating_add(width), own.bottom),
    }
}

/// The four rectangles of one layout pass, always replaced together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideMenuGeometry {
    pub own: IntRect,
    pub clip: IntRect,
    pub left_zone: IntRect,
    pub right_zone: IntRect,
}

impl SlideMenuGeometry {
    pub fn compute(own: IntRect, metrics: &SlideMenuMetrics, density: Density) -> Self {
        Self {
            own,
            clip: compute_clip_rect(
                own,
                metrics.additional_top,
                metrics.additional_left,
                metrics.additional_right,
                density,
            ),
            left_zone: compute_landing_zone(
                own,
                metrics.zone_width,
                metrics.zone_height,
                density,
                ZoneSide::Left,
            ),
            right_zone: compute_landing_zone(
                own,
                metrics.zone_width,
                metrics.zone_height,
                density,
                ZoneSide::Right,
            ),
        }
    }

    pub fn zone(&self, side: ZoneSide) -> IntRect {
        match side {
            ZoneSide::Left => self.left_zone,
            ZoneSide::Right => self.right_zone,
        }
    }

    /// Which landing zone, if any, contains the pixel.
    pub fn zone_at(&self, x: i32, y: i32) -> Option<ZoneSide> {
        if self.left_zone.contains(x, y) {
            Some(ZoneSide::Left)
        } else if self.right_zone.contains(x, y) {
            Some(ZoneSide::Right)
        } else {
            None
        }
    }
}

/// Lazily computed geometry guarded by a one-time initialization flag.
///
/// Bounds are only meaningful after the host's layout pass; until then the
/// model has no geometry and every zone query misses.
#[derive(Debug, Default)]
pub struct LayoutModel {
    geometry: Option<SlideMenuGeometry>,
    density: Option<Density>,
    /// Bounds and density bits of the last rejected pass.
    rejected: Option<(IntRect, u32)>,
}

impl LayoutModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn geometry(&self) -> Option<&SlideMenuGeometry> {
        self.geometry.as_ref()
    }

    /// Density the current geometry was computed with.
    pub fn density(&self) -> Option<Density> {
        self.density
    }

    /// Computes the geometry unless it is already initialized.
    ///
    /// Returns true once geometry is available.
    pub fn ensure(&mut self, bounds: IntRect, metrics: &SlideMenuMetrics, density: Density) -> bool {
        if self.geometry.is_some() {
            return true;
        }
        self.recompute(bounds, metrics, density)
    }

    /// Replaces all four rectangles from fresh bounds.
    ///
    /// Empty bounds or an unusable density leave the model not ready.
    pub fn recompute(
        &mut self,
        bounds: IntRect,
        metrics: &SlideMenuMetrics,
        density: Density,
    ) -> bool {
        if bounds.is_empty() || !density.is_valid() {
            if self.note_rejected(bounds, density) {
                log::warn!(
                    "SlideMenu layout not ready: bounds {:?}, density {:?}",
                    bounds,
                    density
                );
            } else {
                log::debug!("SlideMenu layout still not ready");
            }
            self.geometry = None;
            self.density = None;
            return false;
        }

        self.rejected = None;
        let geometry = SlideMenuGeometry::compute(bounds, metrics, density);
        log::debug!("SlideMenu geometry computed: {:?}", geometry);
        self.geometry = Some(geometry);
        self.density = Some(density);
        true
    }

    /// Records a rejected pass; true when its inputs differ from the last one.
    ///
    /// Density is compared bitwise so a repeated NaN counts as unchanged.
    fn note_rejected(&mut self, bounds: IntRect, density: Density) -> bool {
        let key = (bounds, density.0.to_bits());
        let changed = self.rejected != Some(key);
        self.rejected = Some(key);
        changed
    }

    /// Drops the geometry so the next [`ensure`](Self::ensure) recomputes it.
    pub fn invalidate(&mut self) {
        self.geometry = None;
        self.density = None;
    }

    pub fn zone_at(&self, x: i32, y: i32) -> Option<ZoneSide> {
        self.geometry.as_ref().and_then(|g| g.zone_at(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/layout_model_tests.rs"]
mod tests;
