//! Runtime settings and build-time metadata

pub mod build;
pub mod settings;

pub use build::*;
pub use settings::*;
