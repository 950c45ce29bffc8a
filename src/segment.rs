#![warn(missing_docs)]
//! A straight leg of a traced ray.
use nalgebra::{Point2, Vector2};
use plotters::style::RGBColor;
use std::fmt::Display;

/// One straight segment of the ray path between two consecutive events (launch, element or
/// bench border).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    start: Point2<f64>,
    end: Point2<f64>,
    color: RGBColor,
}
impl RaySegment {
    /// Creates a new [`RaySegment`].
    #[must_use]
    pub const fn new(start: Point2<f64>, end: Point2<f64>, color: RGBColor) -> Self {
        Self { start, end, color }
    }
    /// Returns the start point of this [`RaySegment`].
    #[must_use]
    pub const fn start(&self) -> Point2<f64> {
        self.start
    }
    /// Returns the end point of this [`RaySegment`].
    #[must_use]
    pub const fn end(&self) -> Point2<f64> {
        self.end
    }
    /// Returns the color of this [`RaySegment`].
    #[must_use]
    pub const fn color(&self) -> RGBColor {
        self.color
    }
    /// Returns the geometric length of this [`RaySegment`].
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
    /// Returns the normalized direction of this [`RaySegment`].
    ///
    /// A segment of zero length returns `None`.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2<f64>> {
        (self.end - self.start).try_normalize(f64::EPSILON)
    }
}
impl Display for RaySegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) -> ({:.2}, {:.2})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}
