//! Reusable UI widgets - composable components without application logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs
//! - **Animation** (`crate::ui::animation`): State that drives primitives
//! - **Widgets** (this module): Elements ready to embed in a view tree

pub mod ripple_view;

pub use ripple_view::{RippleView, view_ripple};
