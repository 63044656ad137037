//! Ripple animator: the step state machine behind the ripple widget
//!
//! The animator is either idle (no timer) or running (a repeating timer
//! counts `current_step` down from `ripple_count - 1` to `0` and wraps).
//! Circles with an index `>= current_step` are shown, so each cycle reveals
//! the ripple from the innermost circle outward.
//!
//! The timer is an `iced::time::every` subscription keyed by the active
//! [`TimerHandle`]. Stopping drops the handle, which drops the subscription;
//! ticks still in flight from an old handle are ignored.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use iced::Subscription;
use iced_anim::Animated;
use iced_anim::transition::Easing;

use super::binding::Binding;
use super::config::{ConfigError, RippleConfig, last_index};
use crate::ui::primitives::{RippleSnapshot, ripple::is_visible};

/// Step value while idle
pub const IDLE_STEP: i32 = -1;

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one running timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Events an animator consumes from its subscription
#[derive(Debug, Clone, Copy)]
pub enum RippleEvent {
    /// The repeating timer fired
    Tick(TimerHandle),
    /// A render frame while a reveal transition is running
    Frame(Instant),
}

/// Step that follows `current`, counting down and wrapping to the innermost circle
pub fn next_step(current: i32, ripple_count: usize) -> i32 {
    let next = current - 1;
    if next < 0 {
        last_index(ripple_count)
    } else {
        next
    }
}

#[derive(Debug)]
pub struct RippleAnimator {
    config: RippleConfig,
    current_step: i32,
    timer: Option<TimerHandle>,
    mounted: bool,
    signal: Binding,
    /// Last signal value seen by `sync`
    observed_signal: bool,
    /// Opacity transition per circle
    reveal: Vec<Animated<f32>>,
}

impl Default for RippleAnimator {
    fn default() -> Self {
        Self::from_valid(RippleConfig::default())
    }
}

impl RippleAnimator {
    /// Create an idle animator, rejecting invalid configuration
    pub fn new(config: RippleConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_valid(config.validate()?))
    }

    fn from_valid(config: RippleConfig) -> Self {
        let reveal = (0..config.ripple_count)
            .map(|_| Animated::transition(1.0, reveal_easing(&config)))
            .collect();
        let signal = Binding::default();

        Self {
            config,
            current_step: IDLE_STEP,
            timer: None,
            mounted: false,
            observed_signal: signal.get(),
            signal,
            reveal,
        }
    }

    /// Observe `binding` as the external on/off signal
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.observed_signal = binding.get();
        self.signal = binding;
        self
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn binding(&self) -> &Binding {
        &self.signal
    }

    pub fn current_step(&self) -> i32 {
        self.current_step
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start stepping from the innermost circle
    ///
    /// Returns `false` if a timer is already running.
    pub fn start(&mut self) -> bool {
        if self.timer.is_some() {
            return false;
        }

        self.apply_step(self.config.first_step());
        let handle = TimerHandle::next();
        self.timer = Some(handle);
        tracing::debug!(
            "Ripple started: {:?}, {} circles every {:?}",
            handle,
            self.config.ripple_count,
            self.config.tick_interval
        );
        true
    }

    /// Cancel the timer, keeping the last frame
    ///
    /// The circles visible at the last step stay drawn until the next
    /// `start()`; the all-circles idle frame only appears before the first
    /// start and after `reconfigure`. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                tracing::debug!(
                    "Ripple stopped: {:?} at step {}",
                    handle,
                    self.current_step
                );
                true
            }
            None => false,
        }
    }

    /// Advance one step if `handle` is the running timer
    pub fn tick(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            tracing::trace!("Ignoring tick from stale timer {:?}", handle);
            return false;
        }

        let next = next_step(self.current_step, self.config.ripple_count);
        tracing::trace!("Ripple step {} -> {}", self.current_step, next);
        self.apply_step(next);
        true
    }

    /// The widget became visible
    pub fn mount(&mut self) {
        self.mounted = true;
        self.observed_signal = self.signal.get();
        if self.observed_signal {
            self.start();
        }
    }

    /// The widget was removed; always stops
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.stop();
    }

    /// Re-read the external signal and react to an edge
    ///
    /// Switching the signal off stops the timer like `stop()` and keeps the
    /// last frame on screen. Returns `true` if the animator started or stopped.
    pub fn sync(&mut self) -> bool {
        let value = self.signal.get();
        if value == self.observed_signal {
            return false;
        }
        self.observed_signal = value;

        if !self.mounted {
            return false;
        }
        if value { self.start() } else { self.stop() }
    }

    /// Replace the configuration, resetting to the idle frame
    ///
    /// A mounted and enabled animator restarts with the new settings.
    pub fn reconfigure(&mut self, config: RippleConfig) -> Result<(), ConfigError> {
        let config = config.validate()?;
        self.stop();

        tracing::debug!("Ripple reconfigured: {:?}", config);
        self.reveal = (0..config.ripple_count)
            .map(|_| Animated::transition(1.0, reveal_easing(&config)))
            .collect();
        self.config = config;
        self.current_step = IDLE_STEP;

        if self.mounted && self.signal.get() {
            self.start();
        }
        Ok(())
    }

    /// Check if a reveal transition is in progress
    pub fn is_animating(&self) -> bool {
        self.reveal.iter().any(|anim| anim.is_animating())
    }

    /// Tick reveal transitions forward in time
    pub fn animate(&mut self, now: Instant) {
        for anim in &mut self.reveal {
            anim.tick(now);
        }
    }

    pub fn update(&mut self, event: RippleEvent) {
        match event {
            RippleEvent::Tick(handle) => {
                self.tick(handle);
            }
            RippleEvent::Frame(now) => self.animate(now),
        }
    }

    /// Timer while running, render frames while a reveal is in flight
    pub fn subscription(&self) -> Subscription<RippleEvent> {
        let timer = match self.timer {
            Some(handle) => iced::time::every(self.config.tick_interval)
                .with(handle)
                .map(|(handle, _)| RippleEvent::Tick(handle)),
            None => Subscription::none(),
        };

        let frames = if self.is_animating() {
            iced::window::frames().map(RippleEvent::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([timer, frames])
    }

    /// Data for drawing the current frame
    pub fn snapshot(&self) -> RippleSnapshot {
        RippleSnapshot {
            style: self.config.style,
            tint: self.config.tint,
            stroke_width: self.config.stroke_width,
            fill_opacity: self.config.fill_opacity,
            current_step: self.current_step,
            reveal: self.reveal.iter().map(|anim| *anim.value()).collect(),
        }
    }

    /// Number of circles the current step shows
    pub fn visible_count(&self) -> usize {
        (0..self.config.ripple_count)
            .filter(|&index| is_visible(index, self.current_step))
            .count()
    }

    fn apply_step(&mut self, next: i32) {
        let previous = self.current_step;
        let smooth = self.config.smooth_transitions;

        for (index, anim) in self.reveal.iter_mut().enumerate() {
            let before = is_visible(index, previous);
            let after = is_visible(index, next);

            if !before && after {
                if smooth {
                    *anim = Animated::transition(0.0, reveal_easing(&self.config));
                    anim.update(1.0.into());
                } else {
                    *anim = Animated::transition(1.0, reveal_easing(&self.config));
                }
            } else if before && !after {
                // Hidden circles leave immediately
                *anim = Animated::transition(0.0, reveal_easing(&self.config));
            }
        }

        self.current_step = next;
    }
}

/// One reveal takes one tick
fn reveal_easing(config: &RippleConfig) -> Easing {
    Easing::EASE_IN_OUT.with_duration(config.tick_interval)
}
