//! UI module for the ripple widget
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs and pure layout
//! - **Animation** (`animation`): Step state machine, timer, transitions
//! - **Widgets** (`widgets`): Embeddable elements built from both

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
