use std::fmt;

/// Errors originating from form input, the cached dataset, or the
/// conversion/parsing layers underneath the filter.
#[derive(Debug)]
pub enum CadError {
    InvalidUnit(String),
    UnparseableDate(String),
    BadInput(String),
    MissingColumn(String),
    Malformed(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CadError::InvalidUnit(tag) => write!(f, "Unknown distance unit: {tag}"),
            CadError::UnparseableDate(s) => write!(f, "Unknown date format: {s}"),
            CadError::BadInput(msg) => write!(f, "Bad input: {msg}"),
            CadError::MissingColumn(name) => write!(f, "Dataset has no '{name}' column"),
            CadError::Malformed(what) => write!(f, "Malformed dataset: {what}"),
            CadError::Io(e) => write!(f, "Cache read error: {e}"),
            CadError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for CadError {}

impl From<std::io::Error> for CadError {
    fn from(e: std::io::Error) -> Self {
        CadError::Io(e)
    }
}

impl From<serde_json::Error> for CadError {
    fn from(e: serde_json::Error) -> Self {
        CadError::Json(e)
    }
}
