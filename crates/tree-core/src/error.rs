//! Error types for the core crate.

use thiserror::Error;

/// A detected hand that cannot be used for classification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} keypoints, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("keypoint {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Field generation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("particle count must be greater than zero")]
    EmptyField,
}
