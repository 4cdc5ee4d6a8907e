//! QR Code Rebuilder
//!

pub mod classifier;
pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod report;
pub mod types;

pub use classifier::classify;
pub use report::render;
pub use types::ClassifiedContent;
