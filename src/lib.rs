/*!
 * # timesrt - timestamped transcript to SRT converter
 *
 * A Rust library that turns a transcript made of timestamp lines and text
 * paragraphs into a SubRip (SRT) subtitle file.
 *
 * ## Features
 *
 * - Timestamps as `mm:ss`, `hh:mm:ss` or `hh:mm:ss:ff` (frames at a configurable rate)
 * - Optional one-hour correction for sources whose clock starts at 01:00:00
 * - Each paragraph becomes a cue, shown until the next timestamp, at most 3 seconds
 * - Hour offset applied to the rendered output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timestamp`: Timestamp token parsing and SRT time formatting
 * - `segmenter`: Grouping of transcript lines into timed blocks
 * - `srt_generator`: Cue derivation and SRT serialization
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod segmenter;
pub mod srt_generator;
pub mod timestamp;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError, TimestampError};
pub use segmenter::{Block, segment};
pub use srt_generator::{Cue, generate};
pub use timestamp::{TimeOffset, parse_time};
