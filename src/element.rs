#![warn(missing_docs)]
//! Idealized optical elements (thin lenses and mirrors) placed on the bench.
use crate::{
    error::{BenchError, BenchResult},
    geometry::BenchGeometry,
};
use log::warn;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use uuid::Uuid;

/// Smallest allowed magnitude of a focal length.
pub const MIN_FOCAL_LENGTH: f64 = 10.0;
/// Largest allowed magnitude of a focal length.
pub const MAX_FOCAL_LENGTH: f64 = 300.0;
/// Focal length magnitude of newly created elements.
pub const DEFAULT_FOCAL_LENGTH: f64 = 100.0;

/// The kind of an [`OpticalElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
pub enum ElementKind {
    /// thin focusing lens (positive focal length)
    #[strum(serialize = "convex lens")]
    ConvexLens,
    /// thin defocusing lens (negative focal length)
    #[strum(serialize = "concave lens")]
    ConcaveLens,
    /// flat mirror (no focal length)
    #[strum(serialize = "plane mirror")]
    PlaneMirror,
    /// defocusing curved mirror (negative focal length)
    #[strum(serialize = "convex mirror")]
    ConvexMirror,
    /// focusing curved mirror (positive focal length)
    #[strum(serialize = "concave mirror")]
    ConcaveMirror,
}
impl ElementKind {
    /// Returns `true` if this kind reflects the ray.
    #[must_use]
    pub const fn is_mirror(self) -> bool {
        matches!(
            self,
            Self::PlaneMirror | Self::ConvexMirror | Self::ConcaveMirror
        )
    }
    /// Returns the sign of the focal length of this kind or `None` for a plane mirror.
    #[must_use]
    pub const fn focal_sign(self) -> Option<f64> {
        match self {
            Self::ConvexLens | Self::ConcaveMirror => Some(1.0),
            Self::ConcaveLens | Self::ConvexMirror => Some(-1.0),
            Self::PlaneMirror => None,
        }
    }
    /// Returns the default (signed) focal length of this kind.
    #[must_use]
    pub fn default_focal_length(self) -> Option<f64> {
        self.focal_sign().map(|sign| sign * DEFAULT_FOCAL_LENGTH)
    }
    /// Convert a focal length into a valid focal length of this kind.
    ///
    /// The magnitude is clamped into `[MIN_FOCAL_LENGTH, MAX_FOCAL_LENGTH]` and the sign is set
    /// according to the kind. A plane mirror has no focal length at all. `NaN` is replaced by the
    /// default focal length.
    #[must_use]
    pub fn sanitize_focal_length(self, focal_length: f64) -> Option<f64> {
        self.focal_sign().map(|sign| {
            let magnitude = if focal_length.is_nan() {
                DEFAULT_FOCAL_LENGTH
            } else {
                focal_length.abs().clamp(MIN_FOCAL_LENGTH, MAX_FOCAL_LENGTH)
            };
            sign * magnitude
        })
    }
}

/// An idealized, infinitely thin optical element.
///
/// The element is located at `position` along the bench and covers the aperture of the bench
/// geometry, centered on the optical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalElement {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    kind: ElementKind,
    position: f64,
    #[serde(default)]
    focal_length: Option<f64>,
}
impl OpticalElement {
    /// Creates a new [`OpticalElement`] with the default focal length of its kind.
    ///
    /// The position is not checked here. Use [`OpticalElement::set_position`] in order to keep it
    /// on a given bench.
    #[must_use]
    pub fn new(kind: ElementKind, position: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            focal_length: kind.default_focal_length(),
        }
    }
    /// Modifies the focal length of an [`OpticalElement`].
    ///
    /// This function can be used with the "builder pattern". See
    /// [`set_focal_length`](Self::set_focal_length) for the clamping rules.
    ///
    /// # Errors
    ///
    /// This function will return an error if the element is a plane mirror.
    pub fn with_focal_length(mut self, focal_length: f64) -> BenchResult<Self> {
        self.set_focal_length(focal_length)?;
        Ok(self)
    }
    /// Returns the id of this [`OpticalElement`].
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }
    /// Returns the kind of this [`OpticalElement`].
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }
    /// Changes the kind of this [`OpticalElement`].
    ///
    /// The focal length magnitude is kept (or the default is used when coming from a plane mirror),
    /// the sign follows the new kind.
    pub fn set_kind(&mut self, kind: ElementKind) {
        let magnitude = self.focal_length.map_or(DEFAULT_FOCAL_LENGTH, f64::abs);
        self.kind = kind;
        self.focal_length = kind.sanitize_focal_length(magnitude);
    }
    /// Returns the position of this [`OpticalElement`].
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }
    /// Sets the position of this [`OpticalElement`] clamped to the given bench.
    pub fn set_position(&mut self, position: f64, geometry: &BenchGeometry) {
        let clamped = geometry.clamp_position(position);
        if clamped != position {
            warn!("element position {position} clamped to {clamped}");
        }
        self.position = clamped;
    }
    /// Returns the (signed) focal length of this [`OpticalElement`]. A plane mirror returns `None`.
    #[must_use]
    pub const fn focal_length(&self) -> Option<f64> {
        self.focal_length
    }
    /// Sets the focal length of this [`OpticalElement`].
    ///
    /// Only the magnitude of the given value is used. It is clamped into
    /// `[MIN_FOCAL_LENGTH, MAX_FOCAL_LENGTH]`, the sign is determined by the element kind.
    ///
    /// # Errors
    ///
    /// This function will return an error if the element is a plane mirror.
    pub fn set_focal_length(&mut self, focal_length: f64) -> BenchResult<()> {
        let Some(sanitized) = self.kind.sanitize_focal_length(focal_length) else {
            return Err(BenchError::Element(format!(
                "{} has no focal length",
                self.kind
            )));
        };
        if sanitized.abs() != focal_length.abs() {
            warn!("focal length {focal_length} clamped to {sanitized}");
        }
        self.focal_length = Some(sanitized);
        Ok(())
    }
    /// Bring position and focal length of a (e.g. deserialized) element into their valid ranges.
    pub fn sanitize(&mut self, geometry: &BenchGeometry) {
        self.set_position(self.position, geometry);
        let focal_length = self.focal_length.unwrap_or(DEFAULT_FOCAL_LENGTH);
        self.focal_length = self.kind.sanitize_focal_length(focal_length);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_logs;
    use assert_matches::assert_matches;
    use strum::IntoEnumIterator;
    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", ElementKind::ConvexLens), "convex lens");
        assert_eq!(format!("{}", ElementKind::PlaneMirror), "plane mirror");
        assert_eq!(ElementKind::iter().count(), 5);
    }
    #[test]
    fn kind_focal_sign() {
        assert_eq!(ElementKind::ConvexLens.focal_sign(), Some(1.0));
        assert_eq!(ElementKind::ConcaveMirror.focal_sign(), Some(1.0));
        assert_eq!(ElementKind::ConcaveLens.focal_sign(), Some(-1.0));
        assert_eq!(ElementKind::ConvexMirror.focal_sign(), Some(-1.0));
        assert_eq!(ElementKind::PlaneMirror.focal_sign(), None);
        assert!(ElementKind::ConvexMirror.is_mirror());
        assert!(!ElementKind::ConcaveLens.is_mirror());
    }
    #[test]
    fn sanitize_focal_length() {
        let kind = ElementKind::ConvexLens;
        assert_eq!(kind.sanitize_focal_length(50.0), Some(50.0));
        assert_eq!(kind.sanitize_focal_length(-50.0), Some(50.0));
        assert_eq!(kind.sanitize_focal_length(1.0), Some(10.0));
        assert_eq!(kind.sanitize_focal_length(0.0), Some(10.0));
        assert_eq!(kind.sanitize_focal_length(1000.0), Some(300.0));
        assert_eq!(kind.sanitize_focal_length(f64::INFINITY), Some(300.0));
        assert_eq!(kind.sanitize_focal_length(f64::NAN), Some(100.0));
        let kind = ElementKind::ConvexMirror;
        assert_eq!(kind.sanitize_focal_length(50.0), Some(-50.0));
        assert_eq!(kind.sanitize_focal_length(-500.0), Some(-300.0));
        assert_eq!(ElementKind::PlaneMirror.sanitize_focal_length(50.0), None);
    }
    #[test]
    fn new() {
        let element = OpticalElement::new(ElementKind::ConcaveLens, 300.0);
        assert_eq!(element.kind(), ElementKind::ConcaveLens);
        assert_eq!(element.position(), 300.0);
        assert_eq!(element.focal_length(), Some(-100.0));
        let element = OpticalElement::new(ElementKind::PlaneMirror, 300.0);
        assert_eq!(element.focal_length(), None);
        let other = OpticalElement::new(ElementKind::PlaneMirror, 300.0);
        assert_ne!(element.id(), other.id());
    }
    #[test]
    fn with_focal_length() {
        let element = OpticalElement::new(ElementKind::ConcaveMirror, 300.0)
            .with_focal_length(150.0)
            .unwrap();
        assert_eq!(element.focal_length(), Some(150.0));
        assert_matches!(
            OpticalElement::new(ElementKind::PlaneMirror, 300.0).with_focal_length(150.0),
            Err(BenchError::Element(_))
        );
    }
    #[test]
    fn set_focal_length() {
        testing_logger::setup();
        let mut element = OpticalElement::new(ElementKind::ConvexLens, 300.0);
        element.set_focal_length(-200.0).unwrap();
        assert_eq!(element.focal_length(), Some(200.0));
        check_logs(log::Level::Warn, vec![]);
        element.set_focal_length(5.0).unwrap();
        assert_eq!(element.focal_length(), Some(10.0));
        check_logs(log::Level::Warn, vec!["focal length 5 clamped to 10"]);
    }
    #[test]
    fn set_position() {
        testing_logger::setup();
        let geometry = BenchGeometry::default();
        let mut element = OpticalElement::new(ElementKind::ConvexLens, 300.0);
        element.set_position(500.0, &geometry);
        assert_eq!(element.position(), 500.0);
        element.set_position(5.0, &geometry);
        assert_eq!(element.position(), 10.0);
        element.set_position(900.0, &geometry);
        assert_eq!(element.position(), 790.0);
        check_logs(
            log::Level::Warn,
            vec![
                "element position 5 clamped to 10",
                "element position 900 clamped to 790",
            ],
        );
    }
    #[test]
    fn set_kind() {
        let mut element = OpticalElement::new(ElementKind::ConvexLens, 300.0)
            .with_focal_length(150.0)
            .unwrap();
        element.set_kind(ElementKind::ConvexMirror);
        assert_eq!(element.focal_length(), Some(-150.0));
        element.set_kind(ElementKind::PlaneMirror);
        assert_eq!(element.focal_length(), None);
        element.set_kind(ElementKind::ConcaveLens);
        assert_eq!(element.focal_length(), Some(-100.0));
    }
    #[test]
    fn sanitize() {
        let geometry = BenchGeometry::default();
        let mut element = OpticalElement {
            id: Uuid::new_v4(),
            kind: ElementKind::ConcaveMirror,
            position: 2000.0,
            focal_length: Some(-3.0),
        };
        element.sanitize(&geometry);
        assert_eq!(element.position(), 790.0);
        assert_eq!(element.focal_length(), Some(10.0));
        let mut element = OpticalElement {
            id: Uuid::new_v4(),
            kind: ElementKind::PlaneMirror,
            position: 400.0,
            focal_length: Some(50.0),
        };
        element.sanitize(&geometry);
        assert_eq!(element.focal_length(), None);
        let mut element = OpticalElement {
            id: Uuid::new_v4(),
            kind: ElementKind::ConvexLens,
            position: 400.0,
            focal_length: None,
        };
        element.sanitize(&geometry);
        assert_eq!(element.focal_length(), Some(100.0));
    }
}
