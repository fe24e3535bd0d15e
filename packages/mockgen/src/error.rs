//! Error Module
//!
//! Failures raised while validating a model or generating a mock package

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockgenError {
    /// A type references a package that the alias map does not cover.
    #[error("{interface}.{method}: no import alias for package {path:?}")]
    MissingImport {
        interface: String,
        method: String,
        path: String,
    },

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("invalid mock name {name:?} for interface {interface}")]
    InvalidMockName { interface: String, name: String },

    #[error("bad mock names spec: {0:?}")]
    BadMockNamesSpec(String),

    /// The formatter rejected the generated text. The unformatted text is
    /// attached since formatter positions are meaningless without it.
    #[error("failed to format generated source code: {message}\n{source_text}")]
    Format {
        message: String,
        source_text: String,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MockgenError>;

/// Raised by the type renderer when a named type's package has no alias.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no import alias for package {0:?}")]
pub struct UnresolvedImport(pub String);

impl UnresolvedImport {
    pub fn in_method(self, interface: &str, method: &str) -> MockgenError {
        MockgenError::MissingImport {
            interface: interface.to_string(),
            method: method.to_string(),
            path: self.0,
        }
    }
}
