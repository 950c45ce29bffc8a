#![warn(missing_docs)]
//! Sequential paraxial ray tracing along the bench.
//!
//! The ray is launched at a given point and angle. It is then propagated from element to element
//! in ascending order of their positions. At each element it is either refracted (thin lens) or
//! reflected (mirror) according to the paraxial approximation. Finally it is extended to the
//! border of the bench.
//!
//! Known approximations:
//!   - a (nearly) vertical ray does not interact with any element. It is extended straight to the
//!     top or bottom border.
//!   - every element is visited at most once in sort order. A ray reflected backwards does not hit
//!     elements it has already passed.
use std::f64::consts::PI;

use crate::{
    color::wavelength_to_color,
    element::{ElementKind, OpticalElement},
    geometry::BenchGeometry,
    segment::RaySegment,
    utils::normalize_radians,
};
use itertools::Itertools;
use log::{debug, warn};
use nalgebra::Point2;
use plotters::style::RGBColor;

/// Rays with `|cos(angle)|` below this value are treated as vertical.
pub const VERTICAL_EPSILON: f64 = 1e-6;
/// Focal lengths with a magnitude below this value are treated as "no optical power".
const FOCAL_EPSILON: f64 = 1e-9;

enum Progress {
    Continue,
    OffBench,
}

struct Cursor<'a> {
    geometry: &'a BenchGeometry,
    color: RGBColor,
    point: Point2<f64>,
    angle: f64,
    segments: Vec<RaySegment>,
}
impl<'a> Cursor<'a> {
    fn new(geometry: &'a BenchGeometry, origin: Point2<f64>, angle: f64, color: RGBColor) -> Self {
        Self {
            geometry,
            color,
            point: origin,
            angle,
            segments: Vec::new(),
        }
    }
    fn emit(&mut self, end: Point2<f64>) {
        self.segments
            .push(RaySegment::new(self.point, end, self.color));
        self.point = end;
    }
    fn is_vertical(&self) -> bool {
        self.angle.cos().abs() < VERTICAL_EPSILON
    }
    fn exit_vertically(&mut self) {
        let edge_y = if self.angle.sin() > 0.0 {
            self.geometry.height()
        } else {
            0.0
        };
        debug!("vertical ray leaves the bench at y={edge_y}");
        self.emit(Point2::new(self.point.x, edge_y));
    }
    fn exit_bench(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        let exit = self
            .geometry
            .exit_point(&self.point, cos, sin, VERTICAL_EPSILON);
        debug!("ray leaves the bench at ({:.2}, {:.2})", exit.x, exit.y);
        self.emit(exit);
    }
    fn advance_to(&mut self, element: &OpticalElement) -> Progress {
        if self.is_vertical() {
            self.exit_vertically();
            return Progress::OffBench;
        }
        let (sin, cos) = self.angle.sin_cos();
        let t = (element.position() - self.point.x) / cos;
        if t < 0.0 {
            debug!(
                "{} at {} lies behind the ray, skipping",
                element.kind(),
                element.position()
            );
            return Progress::Continue;
        }
        let exit_distance =
            self.geometry
                .exit_distance(&self.point, cos, sin, VERTICAL_EPSILON);
        if t > exit_distance {
            self.exit_bench();
            return Progress::OffBench;
        }
        let hit = self.geometry.clamp_point(&Point2::new(
            t.mul_add(cos, self.point.x),
            t.mul_add(sin, self.point.y),
        ));
        self.emit(hit);
        if self.is_hit(element) {
            self.interact(element);
        } else {
            debug!(
                "ray misses {} at {} (y={:.2})",
                element.kind(),
                element.position(),
                hit.y
            );
        }
        if self.geometry.contains(&self.point) {
            Progress::Continue
        } else {
            Progress::OffBench
        }
    }
    fn is_hit(&self, element: &OpticalElement) -> bool {
        let y_rel = self.point.y - self.geometry.optical_axis();
        let in_aperture = y_rel.abs() <= self.geometry.aperture_height() / 2.0;
        let in_element =
            (self.point.x - element.position()).abs() <= self.geometry.element_width() / 2.0;
        in_aperture && in_element
    }
    fn interact(&mut self, element: &OpticalElement) {
        let y_rel = self.point.y - self.geometry.optical_axis();
        let power = element
            .focal_length()
            .filter(|f| f.is_finite() && f.abs() >= FOCAL_EPSILON)
            .map_or(0.0, |f| 1.0 / f);
        let old_angle = self.angle;
        self.angle = match element.kind() {
            ElementKind::PlaneMirror => normalize_radians(PI - self.angle),
            ElementKind::ConvexMirror | ElementKind::ConcaveMirror => {
                normalize_radians(PI - self.angle - 2.0 * y_rel * power)
            }
            ElementKind::ConvexLens | ElementKind::ConcaveLens => self.angle - y_rel * power,
        };
        debug!(
            "ray hits {} at ({:.2}, {:.2}): angle {:.4} rad -> {:.4} rad",
            element.kind(),
            self.point.x,
            self.point.y,
            old_angle,
            self.angle
        );
    }
    fn finish(mut self) -> Vec<RaySegment> {
        let stopped_inside = self
            .segments
            .last()
            .map_or(true, |last| self.geometry.strictly_contains(&last.end()));
        if stopped_inside {
            if self.is_vertical() {
                self.exit_vertically();
            } else {
                self.exit_bench();
            }
        }
        self.segments
    }
}

/// Trace a ray along the bench.
///
/// The ray starts at `origin` with the direction `angle_deg` (in degrees, counter-clockwise from
/// the horizontal axis). The elements are processed in ascending order of their positions
/// (elements with equal positions keep their input order). All segments carry the display color
/// of the given wavelength (in nm).
///
/// The returned segments form a connected polyline from `origin` to the point where the ray leaves
/// the bench. The list is empty if `origin` does not lie on the bench or the angle is not finite.
/// This function is pure: identical inputs always produce identical outputs.
#[must_use]
pub fn trace(
    elements: &[OpticalElement],
    origin: Point2<f64>,
    angle_deg: f64,
    wavelength_nm: f64,
    geometry: &BenchGeometry,
) -> Vec<RaySegment> {
    if !geometry.contains(&origin) {
        warn!("ray origin ({}, {}) outside of bench", origin.x, origin.y);
        return Vec::new();
    }
    if !angle_deg.is_finite() {
        warn!("launch angle must be finite");
        return Vec::new();
    }
    let color = wavelength_to_color(wavelength_nm);
    let mut cursor = Cursor::new(geometry, origin, angle_deg.to_radians(), color);
    let sorted_elements = elements
        .iter()
        .filter(|e| e.position().is_finite())
        .sorted_by(|a, b| a.position().total_cmp(&b.position()));
    for element in sorted_elements {
        if let Progress::OffBench = cursor.advance_to(element) {
            return cursor.segments;
        }
    }
    cursor.finish()
}
