//! WASM bindings for css-clamper.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p css-clamper-wasm
//! ```

use wasm_bindgen::prelude::*;

use css_clamper::{ClampExpression, ClampOptions, Clamper as CoreClamper};

fn to_js(e: css_clamper::ClamperError) -> JsError {
    JsError::new(&e.to_string())
}

fn build_options(
    min_viewport: Option<String>,
    max_viewport: Option<String>,
    extend_min_viewport: Option<String>,
    extend_max_viewport: Option<String>,
) -> ClampOptions {
    let defaults = ClampOptions::default();
    ClampOptions::new(
        min_viewport.unwrap_or(defaults.min_viewport),
        max_viewport.unwrap_or(defaults.max_viewport),
    )
    .extend(extend_min_viewport, extend_max_viewport)
}

// ── Clamp expressions ──

/// Returns a fluid `clamp()` expression for two sizes.
///
/// Viewport limits default to `320px` and `1920px`.
#[wasm_bindgen]
pub fn clampify(
    min_value: &str,
    max_value: &str,
    min_viewport: Option<String>,
    max_viewport: Option<String>,
    extend_min_viewport: Option<String>,
    extend_max_viewport: Option<String>,
) -> String {
    let options = build_options(
        min_viewport,
        max_viewport,
        extend_min_viewport,
        extend_max_viewport,
    );
    css_clamper::compute_fluid_clamp(min_value, max_value, &options)
}

/// Clamp calculator with predefined viewport limits.
#[wasm_bindgen]
pub struct Clamper {
    inner: CoreClamper,
}

#[wasm_bindgen]
impl Clamper {
    #[wasm_bindgen(constructor)]
    pub fn new(
        min_viewport: &str,
        max_viewport: &str,
        extend_min_viewport: Option<String>,
        extend_max_viewport: Option<String>,
    ) -> Clamper {
        let options = ClampOptions::new(min_viewport, max_viewport)
            .extend(extend_min_viewport, extend_max_viewport);
        Clamper {
            inner: CoreClamper::with_options(options),
        }
    }

    /// Extension targets only apply when the clamper has none of its own.
    pub fn clamp(
        &self,
        min_value: &str,
        max_value: &str,
        extend_min_viewport: Option<String>,
        extend_max_viewport: Option<String>,
    ) -> String {
        self.inner.clamp_extended(
            min_value,
            max_value,
            extend_min_viewport.as_deref(),
            extend_max_viewport.as_deref(),
        )
    }
}

// ── Units ──

/// Converts a `px` or `rem` value to px (anything else counts as px).
#[wasm_bindgen]
pub fn to_px(value: &str) -> f64 {
    css_clamper::units::to_px(value)
}

/// Converts a `px` or `rem` value to rem (anything else counts as px).
#[wasm_bindgen]
pub fn to_rem(value: &str) -> f64 {
    css_clamper::units::to_rem(value)
}

/// Fails unless the value is a number in `px` or `rem`.
#[wasm_bindgen]
pub fn validate_value(value: &str) -> Result<(), JsError> {
    css_clamper::units::parse_absolute(value)
        .map(|_| ())
        .map_err(to_js)
}

// ── Evaluation ──

/// Returns the size in px the expression resolves to at the given viewport.
#[wasm_bindgen]
pub fn resolve_clamp(expression: &str, viewport: &str) -> Result<f64, JsError> {
    let expr: ClampExpression = expression.parse().map_err(to_js)?;
    Ok(expr.resolve(viewport))
}

/// Returns [min_rem, constant_rem, coefficient_vw, max_rem] of an expression.
#[wasm_bindgen]
pub fn parse_clamp(expression: &str) -> Result<Vec<f64>, JsError> {
    let expr: ClampExpression = expression.parse().map_err(to_js)?;
    Ok(vec![
        expr.min_rem,
        expr.constant_rem,
        expr.coefficient_vw,
        expr.max_rem,
    ])
}
