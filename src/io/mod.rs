//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation operations
pub mod error;
/// Multi-file progress tracking
pub mod progress;
/// Text sample loading and grid export
pub mod text;
