//! Git repository integration

pub mod client;
pub mod installer;

pub use client::*;
pub use installer::*;
