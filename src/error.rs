#![warn(missing_docs)]
//! Raybench specific error structures
use std::{error::Error, fmt::Display};

/// Raybench application specific Result type
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// Errors that can be returned by the bench state, document and export functions.
///
/// The ray tracer itself never fails. These errors only occur in the layers around it.
#[derive(Debug, PartialEq, Eq)]
pub enum BenchError {
    /// an element id was not found or an operation does not apply to the element kind
    Element(String),
    /// invalid bench dimensions
    Geometry(String),
    /// invalid laser parameters
    Laser(String),
    /// errors while reading, parsing or writing a bench document
    Document(String),
    /// errors while exporting a trace (csv, svg)
    Export(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(m) => {
                write!(f, "Element:{m}")
            }
            Self::Geometry(m) => {
                write!(f, "Geometry:{m}")
            }
            Self::Laser(m) => {
                write!(f, "Laser:{m}")
            }
            Self::Document(m) => {
                write!(f, "Document:{m}")
            }
            Self::Export(m) => {
                write!(f, "Export:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Raybench Error:Other:{m}"),
        }
    }
}
impl Error for BenchError {}

impl std::convert::From<String> for BenchError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = BenchError::from("test".to_string());
        assert_eq!(error, BenchError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", BenchError::Element("test".to_string())),
            "Element:test"
        );
        assert_eq!(
            format!("{}", BenchError::Geometry("test".to_string())),
            "Geometry:test"
        );
        assert_eq!(
            format!("{}", BenchError::Laser("test".to_string())),
            "Laser:test"
        );
        assert_eq!(
            format!("{}", BenchError::Document("test".to_string())),
            "Document:test"
        );
        assert_eq!(
            format!("{}", BenchError::Export("test".to_string())),
            "Export:test"
        );
        assert_eq!(
            format!("{}", BenchError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", BenchError::Other("test".to_string())),
            "Raybench Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", BenchError::Element("test".to_string())),
            "Element(\"test\")"
        );
    }
}
