//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust,ignore
//! use ripple::ui::animation::prelude::*;
//! ```

pub use super::{Binding, ConfigError, RippleAnimator, RippleConfig, RippleEvent, TimerHandle};
pub use crate::ui::primitives::RippleStyle;

// Re-export iced_anim types
pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;
