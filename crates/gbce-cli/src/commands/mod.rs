//! CLI command implementations.

pub mod demo;
pub mod quote;

// Re-export submodules for convenience
pub use demo::DemoArgs;
pub use quote::QuoteArgs;
