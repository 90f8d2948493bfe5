// Copyright 2025 the Catax Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The x-axis model: configuration, computed layout state, limit lines, and formatter.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Affine;

use crate::{AxisConfig, ConfigError, LimitLine, Viewport};

/// Turns a raw category label into the text that is drawn.
///
/// Implemented for closures `Fn(usize, &str, &Viewport) -> String`.
pub trait LabelFormatter {
    /// Formats the label at `index`.
    fn format_label(&self, index: usize, label: &str, viewport: &Viewport) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(usize, &str, &Viewport) -> String,
{
    fn format_label(&self, index: usize, label: &str, viewport: &Viewport) -> String {
        (self)(index, label, viewport)
    }
}

/// The default formatter: draws labels unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityFormatter;

impl LabelFormatter for IdentityFormatter {
    fn format_label(&self, _index: usize, label: &str, _viewport: &Viewport) -> String {
        label.to_string()
    }
}

/// Layout outputs computed by [`crate::AxisLayoutEngine`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisRuntimeState {
    /// Category labels by data index; `None` leaves that index unlabeled.
    pub values: Vec<Option<String>>,
    /// Width of the (rotated) label bounding box.
    pub label_width: f64,
    /// Height of the (rotated) label bounding box.
    pub label_height: f64,
    /// Stride chosen by [`crate::AxisLayoutEngine::fit_label_stride`], if any.
    pub fitted_stride: Option<usize>,
}

/// A category x-axis.
///
/// Configuration and limit lines are validated on the way in; runtime state is written by
/// the layout engine and read by the renderer.
#[derive(Clone)]
pub struct XAxis {
    config: AxisConfig,
    state: AxisRuntimeState,
    limit_lines: Vec<LimitLine>,
    formatter: Option<Arc<dyn LabelFormatter + Send + Sync>>,
}

impl core::fmt::Debug for XAxis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("XAxis")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("limit_lines", &self.limit_lines)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Default for XAxis {
    fn default() -> Self {
        Self {
            config: AxisConfig::default(),
            state: AxisRuntimeState::default(),
            limit_lines: Vec::new(),
            formatter: None,
        }
    }
}

impl XAxis {
    /// Creates an axis with the given configuration.
    pub fn new(config: AxisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// On error the previous configuration is kept. Changing font or rotation requires
    /// running the layout engine again before the next render.
    pub fn set_config(&mut self, config: AxisConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Returns the computed layout state.
    pub fn state(&self) -> &AxisRuntimeState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut AxisRuntimeState {
        &mut self.state
    }

    /// Category labels by data index.
    pub fn values(&self) -> &[Option<String>] {
        &self.state.values
    }

    /// The stride the renderer steps by.
    ///
    /// With `auto_stride` this is the fitted stride once one has been computed;
    /// otherwise the configured stride.
    pub fn label_stride(&self) -> usize {
        match (self.config.auto_stride, self.state.fitted_stride) {
            (true, Some(stride)) => stride,
            _ => self.config.label_stride,
        }
    }

    /// Wrap width for labels under `transform`, or `None` without word wrap.
    ///
    /// The width is a fraction of one category slot in pixels.
    pub fn word_wrap_width(&self, transform: Affine) -> Option<f64> {
        self.config
            .word_wrap
            .then(|| self.config.word_wrap_width_fraction * transform.as_coeffs()[0])
    }

    /// Returns the limit lines.
    pub fn limit_lines(&self) -> &[LimitLine] {
        &self.limit_lines
    }

    /// Adds a limit line.
    pub fn add_limit_line(&mut self, line: LimitLine) -> Result<(), ConfigError> {
        line.validate()?;
        self.limit_lines.push(line);
        Ok(())
    }

    /// Replaces the limit line at `index`, returning the previous line.
    ///
    /// `line` is validated first; on error the axis is left unchanged.
    pub fn replace_limit_line(
        &mut self,
        index: usize,
        line: LimitLine,
    ) -> Result<LimitLine, ConfigError> {
        line.validate()?;
        let len = self.limit_lines.len();
        let slot = self
            .limit_lines
            .get_mut(index)
            .ok_or(ConfigError::NoSuchLimitLine { index, len })?;
        Ok(core::mem::replace(slot, line))
    }

    /// Removes and returns the limit line at `index`.
    pub fn remove_limit_line(&mut self, index: usize) -> Option<LimitLine> {
        (index < self.limit_lines.len()).then(|| self.limit_lines.remove(index))
    }

    /// Removes all limit lines.
    pub fn clear_limit_lines(&mut self) {
        self.limit_lines.clear();
    }

    /// Sets a custom label formatter.
    pub fn set_formatter(&mut self, formatter: impl LabelFormatter + Send + Sync + 'static) {
        self.formatter = Some(Arc::new(formatter));
    }

    /// Builder form of [`XAxis::set_formatter`].
    pub fn with_formatter(mut self, formatter: impl LabelFormatter + Send + Sync + 'static) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// Restores the identity formatter.
    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }

    /// The formatter labels are drawn through.
    pub fn formatter(&self) -> &dyn LabelFormatter {
        match &self.formatter {
            Some(f) => f.as_ref(),
            None => &IdentityFormatter,
        }
    }
}
