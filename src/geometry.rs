#![warn(missing_docs)]
//! Dimensions of the optical bench.
//!
//! The bench is the rectangle `[0, width] x [0, height]` in bench units. `x` points to the right
//! (along the bench), `y` points upwards. The optical axis is the horizontal center line.
use crate::error::{BenchError, BenchResult};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// The geometric configuration of an optical bench.
///
/// Deserialized values pass the same validation as [`BenchGeometry::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryConfig")]
pub struct BenchGeometry {
    width: f64,
    height: f64,
    aperture_height: f64,
    element_width: f64,
    origin: Point2<f64>,
}
/// Unchecked serialized form of a [`BenchGeometry`].
#[derive(Deserialize)]
struct GeometryConfig {
    width: f64,
    height: f64,
    aperture_height: f64,
    element_width: f64,
    origin: Point2<f64>,
}
impl TryFrom<GeometryConfig> for BenchGeometry {
    type Error = BenchError;

    fn try_from(config: GeometryConfig) -> BenchResult<Self> {
        Self::new(
            config.width,
            config.height,
            config.aperture_height,
            config.element_width,
            config.origin,
        )
    }
}
impl Default for BenchGeometry {
    /// The reference bench: 800 x 400 units, element aperture of 160 units, element width of 20
    /// units and the laser origin at (50, 200).
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            aperture_height: 160.0,
            element_width: 20.0,
            origin: Point2::new(50.0, 200.0),
        }
    }
}
impl BenchGeometry {
    /// Creates a new [`BenchGeometry`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - any dimension is not finite or not positive.
    ///   - the element width is not smaller than the bench width.
    ///   - the origin lies outside the bench.
    pub fn new(
        width: f64,
        height: f64,
        aperture_height: f64,
        element_width: f64,
        origin: Point2<f64>,
    ) -> BenchResult<Self> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("aperture height", aperture_height),
            ("element width", element_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BenchError::Geometry(format!(
                    "{name} must be positive and finite"
                )));
            }
        }
        if element_width >= width {
            return Err(BenchError::Geometry(
                "element width must be smaller than the bench width".into(),
            ));
        }
        let geometry = Self {
            width,
            height,
            aperture_height,
            element_width,
            origin,
        };
        if !geometry.contains(&origin) {
            return Err(BenchError::Geometry("origin must lie on the bench".into()));
        }
        Ok(geometry)
    }
    /// Returns the width of the bench.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }
    /// Returns the height of the bench.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
    /// Returns the (vertical) aperture height of all elements.
    #[must_use]
    pub const fn aperture_height(&self) -> f64 {
        self.aperture_height
    }
    /// Returns the nominal (horizontal) width of all elements.
    #[must_use]
    pub const fn element_width(&self) -> f64 {
        self.element_width
    }
    /// Returns the launch point of the laser.
    #[must_use]
    pub const fn origin(&self) -> Point2<f64> {
        self.origin
    }
    /// Returns the vertical position of the optical axis.
    #[must_use]
    pub fn optical_axis(&self) -> f64 {
        self.height / 2.0
    }
    /// Returns the range of valid element positions.
    #[must_use]
    pub fn position_range(&self) -> (f64, f64) {
        let half_width = self.element_width / 2.0;
        (half_width, self.width - half_width)
    }
    /// Clamp a given element position into the valid range of this bench.
    ///
    /// `NaN` is mapped to the bench center.
    #[must_use]
    pub fn clamp_position(&self, position: f64) -> f64 {
        if position.is_nan() {
            return self.width / 2.0;
        }
        let (min, max) = self.position_range();
        position.clamp(min, max)
    }
    /// Check if the given point lies on the bench (borders included).
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
    /// Check if the given point lies strictly inside the bench (borders excluded).
    #[must_use]
    pub fn strictly_contains(&self, point: &Point2<f64>) -> bool {
        point.x > 0.0 && point.x < self.width && point.y > 0.0 && point.y < self.height
    }
    /// Clamp a point onto the bench.
    #[must_use]
    pub fn clamp_point(&self, point: &Point2<f64>) -> Point2<f64> {
        Point2::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }
    /// Returns the distance along a ray until it leaves the bench.
    ///
    /// The ray starts at `start` and points along the (normalized) direction `(cos, sin)`. The
    /// smallest non-negative distance to any of the four bench borders is returned. A direction
    /// component smaller than `epsilon` is treated as zero.
    #[must_use]
    pub fn exit_distance(&self, start: &Point2<f64>, cos: f64, sin: f64, epsilon: f64) -> f64 {
        let x_crossing = edge_crossing(start.x, cos, self.width, epsilon);
        let y_crossing = edge_crossing(start.y, sin, self.height, epsilon);
        let distance = match (x_crossing, y_crossing) {
            (Some((dx, _)), Some((dy, _))) => dx.min(dy),
            (Some((d, _)), None) | (None, Some((d, _))) => d,
            (None, None) => 0.0,
        };
        if distance.is_finite() {
            distance.max(0.0)
        } else {
            0.0
        }
    }
    /// Returns the point where a ray leaves the bench.
    ///
    /// See [`exit_distance`](Self::exit_distance). The coordinate of the limiting border is set
    /// exactly onto that border, the result is clamped onto the bench.
    #[must_use]
    pub fn exit_point(&self, start: &Point2<f64>, cos: f64, sin: f64, epsilon: f64) -> Point2<f64> {
        let x_crossing = edge_crossing(start.x, cos, self.width, epsilon);
        let y_crossing = edge_crossing(start.y, sin, self.height, epsilon);
        let point = match (x_crossing, y_crossing) {
            (Some((dx, edge_x)), Some((dy, _))) if dx <= dy => {
                Point2::new(edge_x, dx.max(0.0).mul_add(sin, start.y))
            }
            (Some((dx, edge_x)), None) => Point2::new(edge_x, dx.max(0.0).mul_add(sin, start.y)),
            (_, Some((dy, edge_y))) => Point2::new(dy.max(0.0).mul_add(cos, start.x), edge_y),
            (None, None) => *start,
        };
        self.clamp_point(&point)
    }
}

/// Distance along one axis until the border in direction of `component` is reached, together
/// with the coordinate of that border.
fn edge_crossing(coordinate: f64, component: f64, extent: f64, epsilon: f64) -> Option<(f64, f64)> {
    if component.abs() < epsilon {
        return None;
    }
    let edge = if component > 0.0 { extent } else { 0.0 };
    Some(((edge - coordinate) / component, edge))
}
