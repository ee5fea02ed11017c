/// Handles argument parsing and the provisioning run.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Classifies the engine's own execution origin.
pub mod origin;

/// Reads per-template manifests.
pub mod manifest;

/// Validates the provisioning target directory.
pub mod target;

/// An abstraction that allows materializing templates from different
/// backing stores.
pub mod source;

/// Unpacks downloaded template archives.
pub mod unzip;

/// Runs the optional post-provision build.
pub mod build;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Constants used throughout the application.
pub mod constants;
