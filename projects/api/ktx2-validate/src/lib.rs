#![doc = include_str!("../README.md")]

pub mod context;
pub mod issues;
pub mod reports;

mod dfd_check;
mod gltf;
mod level_index;
mod metadata;
mod sgd;
mod validator;

pub use context::{
    validate_file, validate_memory, validate_stream, ValidationOptions, EXIT_INVALID_FILE,
    EXIT_SUCCESS,
};
pub use issues::{Issue, IssueSeverity};
pub use reports::{JsonReporter, TextReporter, ValidationReport};
