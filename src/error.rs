use std::fmt;

/// Fatal construction errors. Everything else in the crate degrades to
/// "no visual update this cycle" instead of failing.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartError {
    /// Two input entries share a label; the registry cannot be built.
    DuplicateLabel(String),
    /// Raw input could not be parsed.
    InvalidInput(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel(label) => write!(f, "duplicate series label: {label:?}"),
            Self::InvalidInput(msg) => write!(f, "invalid series input: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {}
