//! Application state definitions

use std::path::PathBuf;

use anyhow::Context;
use ripple::features::Settings;
use ripple::{Binding, RippleAnimator};

/// Main application state
pub struct App {
    /// Persisted preview preferences
    pub settings: Settings,
    /// Where settings are saved, `None` keeps them in memory
    pub settings_path: Option<PathBuf>,
    /// The widget under preview
    pub animator: RippleAnimator,
    /// Host-owned animate switch observed by the animator
    pub animate: Binding,
    /// Whether the ripple is part of the view tree
    pub mounted: bool,
}

impl App {
    /// Build state from settings; the ripple starts mounted
    pub fn from_settings(
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let animator = RippleAnimator::new(settings.ripple_config())
            .context("Invalid ripple configuration")?;
        Ok(Self::assemble(settings, settings_path, animator))
    }

    /// Default settings, used when stored ones cannot be applied
    pub fn with_defaults(settings_path: Option<PathBuf>) -> Self {
        Self::assemble(Settings::default(), settings_path, RippleAnimator::default())
    }

    fn assemble(
        settings: Settings,
        settings_path: Option<PathBuf>,
        animator: RippleAnimator,
    ) -> Self {
        let animate = Binding::new(settings.ripple.animate);
        let mut animator = animator.with_binding(animate.clone());
        animator.mount();

        Self {
            settings,
            settings_path,
            animator,
            animate,
            mounted: true,
        }
    }
}
