//! Error types for FHIR models
//!
//! Every variant except [`Error::Config`] is raised only by a builder's
//! `build()`. Accessors on built nodes and visitor traversal never fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required element: '{0}'")]
    MissingRequiredField(&'static str),

    #[error("Required element '{0}' must contain at least one value")]
    EmptyRequiredCollection(&'static str),

    #[error("Invalid type: {actual} for choice element: '{field}' must be one of: {allowed:?}")]
    InvalidChoiceType {
        field: &'static str,
        actual: &'static str,
        allowed: &'static [&'static str],
    },

    #[error("Element: '{0}' is prohibited")]
    Prohibited(&'static str),

    #[error("ele-1: {0} must have a value or children")]
    ValueOrChildrenRequired(&'static str),

    #[error("Invalid {type_name} value: {reason}")]
    InvalidValue {
        type_name: &'static str,
        reason: String,
    },

    #[error("Invalid reference for element '{field}': {reason}")]
    InvalidReferenceType { field: &'static str, reason: String },

    #[error("Invalid model configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
