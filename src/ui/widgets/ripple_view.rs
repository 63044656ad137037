//! Ripple view widget
//!
//! Wraps the ripple canvas around an animator so hosts can drop it into
//! any layout. The canvas fills the box it is given and keeps the circles
//! centered, even when only the smallest one is showing.

use iced::widget::Canvas;
use iced::{Element, Length};

use crate::ui::animation::RippleAnimator;
use crate::ui::primitives::{Ripple, RippleSnapshot};

/// Ripple element configuration
#[derive(Debug, Clone)]
pub struct RippleView {
    snapshot: RippleSnapshot,
    width: Length,
    height: Length,
}

impl RippleView {
    pub fn new(animator: &RippleAnimator) -> Self {
        Self {
            snapshot: animator.snapshot(),
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Square box of `size` pixels
    pub fn size(self, size: f32) -> Self {
        self.width(size).height(size)
    }

    /// Override the tint, e.g. to keep a black ripple visible on a dark theme
    pub fn tint(mut self, tint: iced::Color) -> Self {
        self.snapshot.tint = tint;
        self
    }
}

impl<'a, Message: 'a> From<RippleView> for Element<'a, Message> {
    fn from(view: RippleView) -> Self {
        Canvas::new(Ripple::new(view.snapshot))
            .width(view.width)
            .height(view.height)
            .into()
    }
}

/// Create a ripple element filling the available space
pub fn view_ripple<'a, Message: 'a>(animator: &RippleAnimator) -> Element<'a, Message> {
    RippleView::new(animator).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::RippleConfig;

    #[test]
    fn test_view_tracks_animator_state() {
        let mut animator =
            RippleAnimator::new(RippleConfig::new().ripple_count(3)).unwrap();
        animator.start();

        let view = RippleView::new(&animator).size(250.0);
        assert_eq!(view.width, Length::Fixed(250.0));
        assert_eq!(view.height, Length::Fixed(250.0));
        assert_eq!(view.snapshot.current_step, 2);
        assert_eq!(
            view.snapshot.layout(iced::Size::new(250.0, 250.0)).len(),
            1
        );
    }

    #[test]
    fn test_tint_override() {
        let animator = RippleAnimator::default();
        let view = RippleView::new(&animator).tint(iced::Color::WHITE);
        assert_eq!(view.snapshot.tint, iced::Color::WHITE);
        assert_eq!(animator.snapshot().tint, iced::Color::BLACK);
    }
}
