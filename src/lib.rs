//! Ripple - an animated ripple widget for iced
//!
//! Concentric circles pulse outward on a timer, either filled or outlined,
//! switched on and off by a host-owned [`Binding`].
//!
//! ```rust,ignore
//! let mut animator = RippleAnimator::new(RippleConfig::new().ripple_count(3))?;
//! animator.mount();
//!
//! // in update:  animator.update(event)
//! // in view:    view_ripple(&animator)
//! // in subscription: animator.subscription().map(Message::Ripple)
//! ```

pub mod features;
pub mod ui;
pub mod utils;

pub use ui::animation::{
    Binding, ConfigError, RippleAnimator, RippleConfig, RippleEvent, TimerHandle,
};
pub use ui::primitives::RippleStyle;
pub use ui::widgets::{RippleView, view_ripple};
