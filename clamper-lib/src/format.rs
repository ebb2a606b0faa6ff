use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::DEFAULT_FRACTION_DIGITS;
use crate::error::{ClamperError, Result};
use crate::interp::PreferredValue;
use crate::units::{Unit, px_to_rem, rem_to_px, to_fixed, to_px};

/// A `clamp(<min>rem, [<constant>rem + ]<coefficient>vw, <max>rem)` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampExpression {
    pub min_rem: f64,
    pub constant_rem: f64,
    pub coefficient_vw: f64,
    pub max_rem: f64,
}

impl ClampExpression {
    /// Builds the expression from two size bounds in px, in either order.
    ///
    /// Bounds are rounded first and sorted afterwards, so the rendered
    /// minimum never exceeds the rendered maximum.
    pub fn new(size_a_px: f64, size_b_px: f64, preferred: PreferredValue) -> Self {
        let mut low = to_fixed(px_to_rem(size_a_px), DEFAULT_FRACTION_DIGITS);
        let mut high = to_fixed(px_to_rem(size_b_px), DEFAULT_FRACTION_DIGITS);
        if high < low {
            std::mem::swap(&mut low, &mut high);
        }
        ClampExpression {
            min_rem: low,
            constant_rem: preferred.constant_rem,
            coefficient_vw: preferred.coefficient_vw,
            max_rem: high,
        }
    }

    /// Whether the `<constant>rem + ` part is rendered.
    pub fn has_constant(&self) -> bool {
        !(self.constant_rem == 0.0 || self.constant_rem.is_nan())
    }

    /// Size in px a browser would compute for this expression at `viewport_px`.
    pub fn resolve_px(&self, viewport_px: f64) -> f64 {
        let min_px = to_fixed(rem_to_px(self.min_rem), DEFAULT_FRACTION_DIGITS);
        let max_px = to_fixed(rem_to_px(self.max_rem), DEFAULT_FRACTION_DIGITS);
        let constant_px = to_fixed(rem_to_px(self.constant_rem), DEFAULT_FRACTION_DIGITS);
        let preferred_px = constant_px + self.coefficient_vw * viewport_px / 100.0;
        max_px.min(min_px.max(preferred_px))
    }

    /// Same as [`resolve_px`](Self::resolve_px) with the viewport given as text.
    pub fn resolve(&self, viewport: &str) -> f64 {
        self.resolve_px(to_px(viewport))
    }
}

/// Shortest round-trip form; magnitudes outside `[1e-6, 1e21)` use an
/// exponent with an explicit sign (`1e+21`, `1e-7`).
fn render_number(num: f64) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        let sign = if num < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    let magnitude = num.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let exp = format!("{num:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    num.to_string()
}

impl fmt::Display for ClampExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clamp({}rem, ", render_number(self.min_rem))?;
        if self.has_constant() {
            write!(f, "{}rem + ", render_number(self.constant_rem))?;
        }
        write!(
            f,
            "{}vw, {}rem)",
            render_number(self.coefficient_vw),
            render_number(self.max_rem)
        )
    }
}

static TERM: OnceLock<Regex> = OnceLock::new();

/// A whole `<number><unit>` term as written by `Display`, non-finite numbers included.
fn term_pattern() -> &'static Regex {
    TERM.get_or_init(|| {
        Regex::new(r"^(NaN|-?(?:Infinity|[0-9.]+(?:e[+-][0-9]+)?))([a-z%]+)$")
            .expect("term pattern is valid")
    })
}

/// Reads one `<number><unit>` term; px and rem terms come back in rem.
fn parse_term(term: &str, expected: &Unit) -> Result<f64> {
    let malformed = || ClamperError::MalformedExpression(term.to_string());
    let caps = term_pattern().captures(term).ok_or_else(malformed)?;
    let num = caps[1].parse::<f64>().map_err(|_| malformed())?;
    match (Unit::from_tag(&caps[2]), expected) {
        (Unit::Vw, Unit::Vw) | (Unit::Rem, Unit::Rem) => Ok(num),
        (Unit::Px, Unit::Rem) => Ok(px_to_rem(num)),
        (found, _) => Err(ClamperError::UnsupportedUnit {
            value: term.to_string(),
            unit: found.as_str().to_string(),
        }),
    }
}

impl FromStr for ClampExpression {
    type Err = ClamperError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix("clamp(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ClamperError::MalformedExpression(s.to_string()))?;

        let args: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [min, preferred, max] = args.as_slice() else {
            return Err(ClamperError::MalformedExpression(s.to_string()));
        };

        let (constant_rem, coefficient_vw) = match preferred.split_once(" + ") {
            Some((constant, vw)) => (
                parse_term(constant.trim(), &Unit::Rem)?,
                parse_term(vw.trim(), &Unit::Vw)?,
            ),
            None => (0.0, parse_term(preferred, &Unit::Vw)?),
        };

        Ok(ClampExpression {
            min_rem: parse_term(min, &Unit::Rem)?,
            constant_rem,
            coefficient_vw,
            max_rem: parse_term(max, &Unit::Rem)?,
        })
    }
}

/// Renders the clamp expression for two size bounds (px, either order).
pub fn format_clamp(size_a_px: f64, size_b_px: f64, preferred: &PreferredValue) -> String {
    ClampExpression::new(size_a_px, size_b_px, *preferred).to_string()
}
