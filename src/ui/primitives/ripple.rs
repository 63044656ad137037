//! Concentric ripple primitive
//!
//! Draws a centered stack of circles using iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It only knows how to lay out and paint a [`RippleSnapshot`]; stepping the
//! animation lives in `crate::ui::animation`.

use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, mouse};
use serde::{Deserialize, Serialize};

/// The available ripple styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RippleStyle {
    /// Borderless circles filled with the tint at reduced opacity
    #[default]
    Solid,
    /// Circles stroked with the tint, no fill
    Outlined,
}

impl RippleStyle {
    /// The other style
    pub fn toggled(self) -> Self {
        match self {
            Self::Solid => Self::Outlined,
            Self::Outlined => Self::Solid,
        }
    }
}

impl std::fmt::Display for RippleStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RippleStyle::Solid => write!(f, "Solid"),
            RippleStyle::Outlined => write!(f, "Outlined"),
        }
    }
}

/// Everything needed to draw one frame of the ripple
#[derive(Debug, Clone, PartialEq)]
pub struct RippleSnapshot {
    pub style: RippleStyle,
    pub tint: Color,
    pub stroke_width: f32,
    /// Opacity applied to the tint when filling solid circles
    pub fill_opacity: f32,
    /// Current step, `-1` while idle
    pub current_step: i32,
    /// Reveal progress per circle index (0.0 - 1.0)
    pub reveal: Vec<f32>,
}

/// One laid out circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleCircle {
    pub index: usize,
    pub center: Point,
    pub diameter: f32,
    pub fill: Option<Color>,
    pub border: Option<Color>,
}

impl RippleCircle {
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }
}

/// Whether circle `index` is part of the layout at `current_step`
pub fn is_visible(index: usize, current_step: i32) -> bool {
    index as i64 >= current_step as i64
}

impl RippleSnapshot {
    /// Lay out the visible circles inside a box of `size`, largest first
    ///
    /// Diameters share the smaller side so non-square boxes still get circles.
    pub fn layout(&self, size: Size) -> Vec<RippleCircle> {
        let basis = size.width.min(size.height).max(0.0);
        let center = Point::new(size.width / 2.0, size.height / 2.0);

        self.reveal
            .iter()
            .enumerate()
            .filter(|(index, _)| is_visible(*index, self.current_step))
            .map(|(index, &reveal)| {
                let (fill, border) = self.paint(reveal);
                RippleCircle {
                    index,
                    center,
                    diameter: basis / (index as f32 + 1.0),
                    fill,
                    border,
                }
            })
            .collect()
    }

    fn paint(&self, reveal: f32) -> (Option<Color>, Option<Color>) {
        let reveal = reveal.clamp(0.0, 1.0);
        match self.style {
            RippleStyle::Solid => (
                Some(with_alpha(self.tint, self.fill_opacity * reveal)),
                None,
            ),
            RippleStyle::Outlined => (None, Some(with_alpha(self.tint, reveal))),
        }
    }
}

fn with_alpha(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

/// Canvas program drawing a [`RippleSnapshot`]
#[derive(Debug, Clone)]
pub struct Ripple {
    snapshot: RippleSnapshot,
}

impl Ripple {
    pub fn new(snapshot: RippleSnapshot) -> Self {
        Self { snapshot }
    }
}

impl<Message> Program<Message> for Ripple {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for circle in self.snapshot.layout(bounds.size()) {
            if let Some(fill) = circle.fill {
                if circle.radius() > 0.0 {
                    frame.fill(&Path::circle(circle.center, circle.radius()), fill);
                }
            }

            if let Some(border) = circle.border {
                // Stroke inside the circle's bounds
                let radius = circle.radius() - self.snapshot.stroke_width / 2.0;
                if radius > 0.0 && self.snapshot.stroke_width > 0.0 {
                    frame.stroke(
                        &Path::circle(circle.center, radius),
                        Stroke::default()
                            .with_width(self.snapshot.stroke_width)
                            .with_color(border),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(style: RippleStyle, count: usize, current_step: i32) -> RippleSnapshot {
        RippleSnapshot {
            style,
            tint: Color::BLACK,
            stroke_width: 1.0,
            fill_opacity: 0.3,
            current_step,
            reveal: vec![1.0; count],
        }
    }

    #[test]
    fn test_idle_shows_every_circle() {
        for count in 1..=8 {
            let layout = snapshot(RippleStyle::Solid, count, -1).layout(Size::new(250.0, 250.0));
            assert_eq!(layout.len(), count, "idle frame must show all {count} circles");
        }
    }

    #[test]
    fn test_visible_count_is_count_minus_step() {
        let count = 6;
        for step in 0..count as i32 {
            let layout =
                snapshot(RippleStyle::Solid, count, step).layout(Size::new(100.0, 100.0));
            assert_eq!(layout.len(), count - step as usize);
            assert!(layout.iter().all(|c| c.index as i32 >= step));
        }
    }

    #[test]
    fn test_diameters_shrink_by_index() {
        let layout = snapshot(RippleStyle::Solid, 4, -1).layout(Size::new(240.0, 240.0));
        let diameters: Vec<f32> = layout.iter().map(|c| c.diameter).collect();
        assert_eq!(diameters, vec![240.0, 120.0, 80.0, 60.0]);
    }

    #[test]
    fn test_non_square_box_uses_smaller_side() {
        let layout = snapshot(RippleStyle::Solid, 2, -1).layout(Size::new(300.0, 100.0));
        assert_eq!(layout[0].diameter, 100.0);
        assert_eq!(layout[1].diameter, 50.0);
        assert!(
            layout.iter().all(|c| c.center == Point::new(150.0, 50.0)),
            "all circles share the box center"
        );
    }

    #[test]
    fn test_zero_size_box() {
        let layout = snapshot(RippleStyle::Outlined, 3, -1).layout(Size::ZERO);
        assert_eq!(layout.len(), 3);
        assert!(layout.iter().all(|c| c.diameter == 0.0));
    }

    #[test]
    fn test_solid_fills_without_border() {
        let layout = snapshot(RippleStyle::Solid, 3, -1).layout(Size::new(90.0, 90.0));
        for circle in layout {
            assert!(circle.border.is_none());
            let fill = circle.fill.expect("solid circles are filled");
            assert!((fill.a - 0.3).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_outlined_borders_without_fill() {
        let tint = Color::from_rgb(0.2, 0.4, 0.9);
        let mut snap = snapshot(RippleStyle::Outlined, 3, -1);
        snap.tint = tint;
        for circle in snap.layout(Size::new(90.0, 90.0)) {
            assert!(circle.fill.is_none());
            assert_eq!(circle.border, Some(tint));
        }
    }

    #[test]
    fn test_reveal_scales_opacity() {
        let mut snap = snapshot(RippleStyle::Outlined, 2, -1);
        snap.reveal = vec![0.5, 0.0];
        let layout = snap.layout(Size::new(10.0, 10.0));
        assert_eq!(layout[0].border.map(|c| c.a), Some(0.5));
        assert_eq!(layout[1].border.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn test_style_toggle() {
        assert_eq!(RippleStyle::Solid.toggled(), RippleStyle::Outlined);
        assert_eq!(RippleStyle::Outlined.toggled(), RippleStyle::Solid);
        assert_eq!(RippleStyle::default(), RippleStyle::Solid);
    }
}
