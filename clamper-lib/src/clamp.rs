use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_VIEWPORT, DEFAULT_MIN_VIEWPORT};
use crate::extend::extend_sizes;
use crate::format::ClampExpression;
use crate::interp::{LinearFit, PreferredValue};
use crate::units::to_px;

/// Viewport limits a clamp expression interpolates between.
///
/// Deserializes from `{ "minViewport", "maxViewport", "extendMinViewport",
/// "extendMaxViewport" }`; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClampOptions {
    pub min_viewport: String,
    pub max_viewport: String,
    /// Viewport the minimum size is moved to, keeping the slope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_min_viewport: Option<String>,
    /// Viewport the maximum size is moved to, keeping the slope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extend_max_viewport: Option<String>,
}

impl Default for ClampOptions {
    fn default() -> Self {
        ClampOptions {
            min_viewport: DEFAULT_MIN_VIEWPORT.to_string(),
            max_viewport: DEFAULT_MAX_VIEWPORT.to_string(),
            extend_min_viewport: None,
            extend_max_viewport: None,
        }
    }
}

impl ClampOptions {
    pub fn new(min_viewport: impl Into<String>, max_viewport: impl Into<String>) -> Self {
        ClampOptions {
            min_viewport: min_viewport.into(),
            max_viewport: max_viewport.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn extend(
        mut self,
        extend_min_viewport: Option<impl Into<String>>,
        extend_max_viewport: Option<impl Into<String>>,
    ) -> Self {
        self.extend_min_viewport = extend_min_viewport.map(Into::into);
        self.extend_max_viewport = extend_max_viewport.map(Into::into);
        self
    }

    pub fn is_extended(&self) -> bool {
        let given = |v: &Option<String>| v.as_deref().is_some_and(|v| !v.is_empty());
        given(&self.extend_min_viewport) || given(&self.extend_max_viewport)
    }
}

/// Computes the clamp expression for two sizes between the given viewport limits.
///
/// Sizes and viewports are `px` or `rem` values such as `"16px"` or
/// `"1.5rem"`. The sizes may be given in either order. Malformed values
/// count as zero; equal viewports produce `Infinity`/`NaN` terms.
///
/// # Examples
/// ```
/// use css_clamper::{ClampOptions, compute_fluid_clamp};
///
/// let css = compute_fluid_clamp("16px", "24px", &ClampOptions::default());
/// assert_eq!(css, "clamp(1rem, 0.9rem + 0.5vw, 1.5rem)");
/// ```
pub fn compute_fluid_clamp(min_value: &str, max_value: &str, options: &ClampOptions) -> String {
    fluid_clamp_expression(min_value, max_value, options).to_string()
}

/// Same as [`compute_fluid_clamp`], returning the unrendered expression.
pub fn fluid_clamp_expression(
    min_value: &str,
    max_value: &str,
    options: &ClampOptions,
) -> ClampExpression {
    let min_size_px = to_px(min_value);
    let max_size_px = to_px(max_value);
    let min_viewport_px = to_px(&options.min_viewport);
    let max_viewport_px = to_px(&options.max_viewport);

    let fit = LinearFit::through(min_size_px, max_size_px, min_viewport_px, max_viewport_px);
    let preferred = PreferredValue::from(fit);

    let (extended_min_px, extended_max_px) = extend_sizes(
        min_size_px,
        max_size_px,
        min_viewport_px,
        max_viewport_px,
        options.extend_min_viewport.as_deref(),
        options.extend_max_viewport.as_deref(),
    );

    tracing::trace!(
        message = "Derived fluid clamp",
        slope = ?fit.slope,
        intercept_px = ?fit.intercept_px,
        min_px = ?extended_min_px,
        max_px = ?extended_max_px
    );

    ClampExpression::new(extended_min_px, extended_max_px, preferred)
}

/// [`compute_fluid_clamp`] with the default `320px`..`1920px` viewport.
pub fn clampify(min_value: &str, max_value: &str) -> String {
    compute_fluid_clamp(min_value, max_value, &ClampOptions::default())
}

/// Fixes the viewport limits and returns a two-argument clamp function.
///
/// # Examples
/// ```
/// use css_clamper::{ClampOptions, make_clamper};
///
/// let clamp = make_clamper(ClampOptions::new("320px", "1920px"));
/// assert_eq!(clamp("16px", "96px"), "clamp(1rem, 5vw, 6rem)");
/// ```
pub fn make_clamper(options: ClampOptions) -> impl Fn(&str, &str) -> String {
    move |min_value: &str, max_value: &str| compute_fluid_clamp(min_value, max_value, &options)
}

/// Reusable clamp calculator with fixed viewport limits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clamper {
    options: ClampOptions,
}

impl Clamper {
    pub fn new(min_viewport: impl Into<String>, max_viewport: impl Into<String>) -> Self {
        Clamper {
            options: ClampOptions::new(min_viewport, max_viewport),
        }
    }

    pub fn with_options(options: ClampOptions) -> Self {
        Clamper { options }
    }

    pub fn options(&self) -> &ClampOptions {
        &self.options
    }

    pub fn clamp(&self, min_value: &str, max_value: &str) -> String {
        compute_fluid_clamp(min_value, max_value, &self.options)
    }

    /// Clamps with per-call extension targets.
    ///
    /// A clamper built with its own extension targets ignores these.
    pub fn clamp_extended(
        &self,
        min_value: &str,
        max_value: &str,
        extend_min_viewport: Option<&str>,
        extend_max_viewport: Option<&str>,
    ) -> String {
        if self.options.is_extended() {
            return self.clamp(min_value, max_value);
        }
        let options = self
            .options
            .clone()
            .extend(extend_min_viewport, extend_max_viewport);
        compute_fluid_clamp(min_value, max_value, &options)
    }
}

impl From<ClampOptions> for Clamper {
    fn from(options: ClampOptions) -> Self {
        Clamper::with_options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClampOptions::default();
        assert_eq!(options.min_viewport, "320px");
        assert_eq!(options.max_viewport, "1920px");
        assert!(!options.is_extended());
    }

    #[test]
    fn test_empty_extension_is_not_extended() {
        let options = ClampOptions::default().extend(Some(""), None::<String>);
        assert!(!options.is_extended());
        let options = ClampOptions::default().extend(None::<String>, Some("2000px"));
        assert!(options.is_extended());
    }

    #[test]
    fn test_clampify_defaults() {
        assert_eq!(clampify("16px", "24px"), "clamp(1rem, 0.9rem + 0.5vw, 1.5rem)");
        assert_eq!(clampify("", ""), "clamp(0rem, 0vw, 0rem)");
    }

    #[test]
    fn test_clamper_fixed_extension_wins() {
        let clamper = Clamper::with_options(
            ClampOptions::default().extend(Some("120px"), Some("2120px")),
        );
        assert_eq!(
            clamper.clamp_extended("16px", "24px", Some("0px"), None),
            clamper.clamp("16px", "24px")
        );
    }

    #[test]
    fn test_expression_matches_rendered() {
        let expr = fluid_clamp_expression("16px", "24px", &ClampOptions::default());
        assert_eq!(expr.min_rem, 1.0);
        assert_eq!(expr.max_rem, 1.5);
        assert_eq!(expr.to_string(), clampify("16px", "24px"));
    }
}
