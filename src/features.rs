//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly, only on the
//! configuration types they produce.

pub mod settings;

pub use settings::{DisplaySettings, RippleSettings, Settings, SettingsError};
