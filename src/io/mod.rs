//! Input/output, configuration and error handling

/// Command-line interface
pub mod cli;
/// Engine constants and CLI defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading, fitting and snapshot rendering
pub mod image;
/// Progress bars for the CLI
pub mod progress;
/// Replay frame capture and GIF export
pub mod visualization;
