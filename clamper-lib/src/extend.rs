//! Slope-preserving extrapolation of the size bounds to new viewport limits.

use crate::units::to_px;

/// Projects the size bounds onto extended viewport limits.
///
/// The line through the original boundary points is kept as is; only the
/// point where it gets clamped moves. A side without a target (or with an
/// empty one) keeps its original size. Targets are not checked against the
/// original range, so a target inside it narrows that side instead.
///
/// Returns `(extended_min_size_px, extended_max_size_px)`.
pub fn extend_sizes(
    min_size_px: f64,
    max_size_px: f64,
    min_viewport_px: f64,
    max_viewport_px: f64,
    extend_min_viewport: Option<&str>,
    extend_max_viewport: Option<&str>,
) -> (f64, f64) {
    let extend_min_viewport = extend_min_viewport.filter(|v| !v.is_empty());
    let extend_max_viewport = extend_max_viewport.filter(|v| !v.is_empty());

    if extend_min_viewport.is_none() && extend_max_viewport.is_none() {
        return (min_size_px, max_size_px);
    }

    let viewport_per_size = (max_viewport_px - min_viewport_px) / (max_size_px - min_size_px);

    (
        extend_size(viewport_per_size, extend_min_viewport, min_viewport_px, min_size_px),
        extend_size(viewport_per_size, extend_max_viewport, max_viewport_px, max_size_px),
    )
}

fn extend_size(
    viewport_per_size: f64,
    target_viewport: Option<&str>,
    viewport_border_px: f64,
    size_border_px: f64,
) -> f64 {
    let Some(target) = target_viewport else {
        return size_border_px;
    };

    let added_viewport = to_px(target) - viewport_border_px;
    let added_size = added_viewport / viewport_per_size;
    tracing::debug!(
        message = "Extending size bound",
        viewport = ?target,
        from_px = ?size_border_px,
        added_px = ?added_size
    );
    size_border_px + added_size
}
