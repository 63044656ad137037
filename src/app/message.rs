//! Application messages

use ripple::RippleEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Ripple ============
    /// Timer tick or render frame for the ripple
    Ripple(RippleEvent),
    /// Flip the external animate signal
    ToggleAnimation,
    /// Switch between solid and outlined circles
    ToggleStyle,
    /// Ripple count slider moved
    RippleCountChanged(u8),
    /// Step interval slider moved (milliseconds)
    IntervalChanged(u16),

    // ============ Preview ============
    /// Add or remove the ripple from the view tree
    ToggleMounted,
    /// Switch light/dark preview background
    ToggleDarkMode,
}
