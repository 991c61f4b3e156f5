//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `CarouselError`, so functions can simply return `Result<T>`.
use crate::error::CarouselError;

/// Workspace-wide `Result` alias with `CarouselError` as the default error.
pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
