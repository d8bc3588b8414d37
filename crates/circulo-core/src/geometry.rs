use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Translation followed by a uniform-or-not scale, applied to a node and its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub dx: f64,
    pub dy: f64,
    pub sx: f64,
    pub sy: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        sx: 1.0,
        sy: 1.0,
    };

    pub fn move_to(offset: Point) -> Self {
        Self {
            dx: offset.x,
            dy: offset.y,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            sx,
            sy,
            ..Self::IDENTITY
        }
    }

    /// `self` applied inside `parent`.
    pub fn then(&self, parent: &Transform) -> Self {
        Self {
            dx: parent.dx + parent.sx * self.dx,
            dy: parent.dy + parent.sy * self.dy,
            sx: parent.sx * self.sx,
            sy: parent.sy * self.sy,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.dx + self.sx * p.x, self.dy + self.sy * p.y)
    }

    pub fn lerp(&self, to: &Transform, t: f64) -> Self {
        Self {
            dx: lerp(self.dx, to.dx, t),
            dy: lerp(self.dy, to.dy, t),
            sx: lerp(self.sx, to.sx, t),
            sy: lerp(self.sy, to.sy, t),
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Where the menu centre sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Anchor {
    #[default]
    ViewportCenter,
    At(Point),
}

impl Anchor {
    pub fn resolve(&self, viewport: Size) -> Point {
        match self {
            Self::ViewportCenter => Point::new(viewport.w / 2.0, viewport.h / 2.0),
            Self::At(p) => *p,
        }
    }
}

/// Angle of satellite `index` out of `total`. Index 0 sits at PI (left of the anchor).
///
/// Half mode spreads the buttons over 180 degrees by dividing the circle into
/// `(total - 1) * 2` steps. A single button always uses the full-circle formula.
pub fn angle_placement(index: usize, total: usize, half_mode: bool) -> f64 {
    let steps = match total {
        0 => return PI,
        1 => 1.0,
        n if half_mode => ((n - 1) * 2) as f64,
        n => n as f64,
    };
    2.0 * PI / steps * index as f64 + PI
}

pub fn expand_offset(index: usize, total: usize, half_mode: bool, distance: f64) -> Point {
    let alpha = angle_placement(index, total, half_mode);
    Point::new(distance * alpha.cos(), distance * alpha.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_full_circle_is_evenly_spaced() {
        for total in 1..=12 {
            let angles: Vec<f64> = (0..total)
                .map(|i| angle_placement(i, total, false))
                .collect();
            let step = 2.0 * PI / total as f64;

            for pair in angles.windows(2) {
                assert!(close(pair[1] - pair[0], step));
            }

            // wrapping back to index 0 closes the circle
            let wrap = (angles[0] + 2.0 * PI) - angles[total - 1];
            assert!(close(wrap, step));
        }
    }

    #[test]
    fn test_half_mode_spans_half_circle() {
        for total in 2..=10 {
            let first = angle_placement(0, total, true);
            let last = angle_placement(total - 1, total, true);
            assert!(close(last - first, PI), "total = {}", total);
        }
    }

    #[test]
    fn test_single_button_half_mode() {
        let half = angle_placement(0, 1, true);
        let full = angle_placement(0, 1, false);
        assert!(half.is_finite());
        assert!(close(half, full));
        assert!(close(half, PI));
    }

    #[test]
    fn test_three_button_offsets() {
        let expected = [PI, PI + 2.0 * PI / 3.0, PI + 4.0 * PI / 3.0];
        for (i, angle) in expected.iter().enumerate() {
            let offset = expand_offset(i, 3, false, 95.0);
            assert!(close(offset.length(), 95.0));
            assert!(close(offset.x, 95.0 * angle.cos()));
            assert!(close(offset.y, 95.0 * angle.sin()));
        }
    }

    #[test]
    fn test_anchor_resolution() {
        let viewport = Size::new(800.0, 600.0);
        assert_eq!(
            Anchor::ViewportCenter.resolve(viewport),
            Point::new(400.0, 300.0)
        );
        assert_eq!(
            Anchor::At(Point::new(10.0, 20.0)).resolve(viewport),
            Point::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_transform_composition() {
        let parent = Transform::move_to(Point::new(100.0, 50.0));
        let child = Transform::scale(2.0, 2.0);
        let world = child.then(&parent);
        assert_eq!(world.apply(Point::new(1.0, 1.0)), Point::new(102.0, 52.0));
    }
}
