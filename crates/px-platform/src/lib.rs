//! # px-platform
//!
//! Platform-specific implementations for the ProXplore access gate.
//!
//! This crate contains adapters that talk to the operating system: biometric
//! services and per-user application directories.

pub mod app_dirs;
pub mod biometric;
