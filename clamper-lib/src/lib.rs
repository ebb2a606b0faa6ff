//! Fluid CSS `clamp()` expressions.
//!
//! A size grows linearly with the viewport width between two limits and is
//! clamped outside of them:
//!
//! ```
//! assert_eq!(
//!     css_clamper::clampify("16px", "24px"),
//!     "clamp(1rem, 0.9rem + 0.5vw, 1.5rem)"
//! );
//! ```

pub mod clamp;
pub mod constants;
pub mod error;
pub mod extend;
pub mod format;
pub mod interp;
pub mod units;

pub use clamp::{
    ClampOptions, Clamper, clampify, compute_fluid_clamp, fluid_clamp_expression, make_clamper,
};
pub use error::{ClamperError, Result};
pub use format::ClampExpression;
pub use interp::{LinearFit, PreferredValue};
pub use units::{ParsedUnit, Unit};
