//! Ripple animation configuration

use std::time::Duration;

use iced::Color;

use crate::ui::primitives::RippleStyle;
use crate::ui::theme;

/// Default number of concentric circles
pub const DEFAULT_RIPPLE_COUNT: usize = 5;

/// Largest accepted number of circles
pub const MAX_RIPPLE_COUNT: usize = 64;

/// Default time between two steps (130ms)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(130);

/// Immutable configuration of a ripple animator
#[derive(Debug, Clone, PartialEq)]
pub struct RippleConfig {
    pub style: RippleStyle,
    /// Number of concentric circles, `1..=MAX_RIPPLE_COUNT`
    pub ripple_count: usize,
    pub tint: Color,
    /// Time between steps, must be non-zero
    pub tick_interval: Duration,
    /// Border width for outlined circles
    pub stroke_width: f32,
    /// Tint opacity for solid circles (0.0 - 1.0)
    pub fill_opacity: f32,
    /// Fade newly revealed circles in instead of snapping
    pub smooth_transitions: bool,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            style: RippleStyle::Solid,
            ripple_count: DEFAULT_RIPPLE_COUNT,
            tint: theme::DEFAULT_TINT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            stroke_width: 1.0,
            fill_opacity: theme::SOLID_FILL_OPACITY,
            smooth_transitions: true,
        }
    }
}

impl RippleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: RippleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn ripple_count(mut self, count: usize) -> Self {
        self.ripple_count = count;
        self
    }

    pub fn tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = opacity;
        self
    }

    pub fn smooth_transitions(mut self, smooth: bool) -> Self {
        self.smooth_transitions = smooth;
        self
    }

    /// Check the configuration, rejecting values that would draw nothing
    /// or spin the timer
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_RIPPLE_COUNT).contains(&self.ripple_count) {
            return Err(ConfigError::RippleCount(self.ripple_count));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::TickInterval(self.tick_interval));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ConfigError::StrokeWidth(self.stroke_width));
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ConfigError::FillOpacity(self.fill_opacity));
        }
        Ok(self)
    }

    /// Step the animation starts from, the innermost circle
    pub fn first_step(&self) -> i32 {
        last_index(self.ripple_count)
    }
}

/// Index of the innermost circle, saturating for counts beyond `i32`
pub(crate) fn last_index(ripple_count: usize) -> i32 {
    i32::try_from(ripple_count).unwrap_or(i32::MAX) - 1
}

/// Errors for invalid ripple configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    RippleCount(usize),
    TickInterval(Duration),
    StrokeWidth(f32),
    FillOpacity(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::RippleCount(n) => {
                write!(
                    f,
                    "ripple count must be within 1..={}, got {}",
                    MAX_RIPPLE_COUNT, n
                )
            }
            ConfigError::TickInterval(d) => {
                write!(f, "tick interval must be greater than zero, got {:?}", d)
            }
            ConfigError::StrokeWidth(w) => {
                write!(f, "stroke width must be a non-negative number, got {}", w)
            }
            ConfigError::FillOpacity(o) => {
                write!(f, "fill opacity must be within 0.0..=1.0, got {}", o)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
