//! Animation system for the ripple widget
//!
//! [`RippleAnimator`] owns the step counter and the timer, [`Binding`] is the
//! host's on/off switch, and reveal transitions use `iced_anim`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ripple::ui::animation::prelude::*;
//!
//! let mut animator = RippleAnimator::new(RippleConfig::new().ripple_count(3))?;
//! animator.mount();
//! ```

pub mod binding;
pub mod config;
pub mod prelude;
pub mod ripple;

pub use binding::Binding;
pub use config::{ConfigError, RippleConfig};
pub use ripple::{RippleAnimator, RippleEvent, TimerHandle};
