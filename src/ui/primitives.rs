//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No animation logic**: Primitives draw a snapshot, they never step it
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`Ripple`] - Concentric circles drawn with Canvas

pub mod ripple;

pub use ripple::{Ripple, RippleCircle, RippleSnapshot, RippleStyle};
