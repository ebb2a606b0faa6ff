use crate::constants::{DEFAULT_FRACTION_DIGITS, VW_FRACTION_DIGITS};
use crate::units::{px_to_rem, to_fixed};

/// Line through two (viewport, size) points, all in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Size px gained per viewport px.
    pub slope: f64,
    /// Size at viewport width 0.
    pub intercept_px: f64,
}

impl LinearFit {
    /// Fits the line through `(min_viewport_px, min_size_px)` and
    /// `(max_viewport_px, max_size_px)`.
    ///
    /// Sizes may come in either order, giving a negative slope. Equal
    /// viewports are not guarded: the slope becomes infinite or NaN.
    pub fn through(
        min_size_px: f64,
        max_size_px: f64,
        min_viewport_px: f64,
        max_viewport_px: f64,
    ) -> Self {
        let slope = (max_size_px - min_size_px) / (max_viewport_px - min_viewport_px);
        LinearFit {
            slope,
            intercept_px: max_size_px - max_viewport_px * slope,
        }
    }

    pub fn value_at(&self, viewport_px: f64) -> f64 {
        self.intercept_px + self.slope * viewport_px
    }
}

/// The preferred (middle) argument of a clamp expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferredValue {
    pub constant_rem: f64,
    pub coefficient_vw: f64,
}

impl From<LinearFit> for PreferredValue {
    fn from(fit: LinearFit) -> Self {
        PreferredValue {
            constant_rem: to_fixed(px_to_rem(fit.intercept_px), DEFAULT_FRACTION_DIGITS),
            // 1vw is 1% of the viewport
            coefficient_vw: to_fixed(100.0 * fit.slope, VW_FRACTION_DIGITS),
        }
    }
}

/// Derives the `<constant>rem + <coefficient>vw` term for the given boundary points.
pub fn derive_preferred(
    min_size_px: f64,
    max_size_px: f64,
    min_viewport_px: f64,
    max_viewport_px: f64,
) -> PreferredValue {
    LinearFit::through(min_size_px, max_size_px, min_viewport_px, max_viewport_px).into()
}
