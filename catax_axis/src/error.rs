// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration validation errors.

/// Errors returned when an axis configuration or limit line is rejected.
///
/// Validation happens when configuration is handed to an [`crate::XAxis`], so rendering
/// never has to deal with malformed state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The label stride was zero.
    #[error("label stride must be at least 1")]
    ZeroLabelStride,
    /// A font size was NaN, infinite, zero, or negative.
    #[error("{what} font size must be finite and positive, got {size}")]
    InvalidFontSize {
        /// Which font was rejected.
        what: &'static str,
        /// The offending size.
        size: f64,
    },
    /// A named font family had an empty name.
    #[error("{what} font family name is empty")]
    EmptyFontFamily {
        /// Which font was rejected.
        what: &'static str,
    },
    /// A stroke width was NaN, infinite, or negative.
    #[error("{what} stroke width must be finite and non-negative, got {width}")]
    InvalidStrokeWidth {
        /// Which stroke was rejected.
        what: &'static str,
        /// The offending width.
        width: f64,
    },
    /// A dash pattern could not be used for stroking.
    #[error("{what} dash pattern is invalid: {reason}")]
    InvalidDashPattern {
        /// Which stroke was rejected.
        what: &'static str,
        /// Why the pattern was rejected.
        reason: &'static str,
    },
    /// The label rotation was NaN or infinite.
    #[error("label rotation must be finite, got {0}")]
    InvalidRotation(f64),
    /// The word wrap width fraction was NaN, infinite, or negative.
    #[error("word wrap width fraction must be finite and non-negative, got {0}")]
    InvalidWrapFraction(f64),
    /// A limit line index did not refer to an existing line.
    #[error("no limit line at index {index} (axis has {len})")]
    NoSuchLimitLine {
        /// The requested index.
        index: usize,
        /// The number of limit lines on the axis.
        len: usize,
    },
    /// A limit line value or offset was NaN or infinite.
    #[error("limit line {field} must be finite, got {value}")]
    NonFiniteLimit {
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
}
