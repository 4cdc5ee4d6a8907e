//! Unit Tests Module
//!
//! Tests for the public classification and rendering API, one suite per concern.

pub mod classifier;
