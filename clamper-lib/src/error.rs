use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ClamperError {
    UnrecognizedValue(String),
    UnsupportedUnit { value: String, unit: String },
    MalformedExpression(String),
}

pub type Result<T> = std::result::Result<T, ClamperError>;

impl fmt::Display for ClamperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedValue(value) => write!(f, "no numeric value in '{value}'"),
            Self::UnsupportedUnit { value, unit } => {
                write!(f, "unsupported unit '{unit}' in '{value}' (expected px or rem)")
            }
            Self::MalformedExpression(expr) => write!(f, "malformed clamp expression: {expr}"),
        }
    }
}

impl std::error::Error for ClamperError {}
