/// Pixels in one root em.
pub const PX_PER_REM: f64 = 16.0;

/// Decimal places kept for px and rem magnitudes.
pub const DEFAULT_FRACTION_DIGITS: i32 = 3;

/// Decimal places kept for the vw coefficient.
pub const VW_FRACTION_DIGITS: i32 = 2;

/// Default lower viewport limit.
pub const DEFAULT_MIN_VIEWPORT: &str = "320px";

/// Default upper viewport limit.
pub const DEFAULT_MAX_VIEWPORT: &str = "1920px";
