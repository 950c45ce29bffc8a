#![warn(missing_docs)]
//! The mutable state of an optical bench.
//!
//! An [`OpticalBench`] owns the element list, the laser and the bench geometry. All mutators keep
//! the state valid (positions and focal lengths are clamped). The ray is recomputed from scratch
//! by [`OpticalBench::trace`] whenever needed.
use crate::{
    element::{ElementKind, OpticalElement},
    error::{BenchError, BenchResult},
    geometry::BenchGeometry,
    laser::Laser,
    segment::RaySegment,
    tracer::trace,
};
use itertools::Itertools;
use log::info;
use uuid::Uuid;

/// An optical bench with its elements and the laser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpticalBench {
    geometry: BenchGeometry,
    laser: Laser,
    elements: Vec<OpticalElement>,
}
impl OpticalBench {
    /// Creates a new, empty [`OpticalBench`] with the given geometry.
    #[must_use]
    pub fn new(geometry: BenchGeometry) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }
    /// Returns a reference to the geometry of this [`OpticalBench`].
    #[must_use]
    pub const fn geometry(&self) -> &BenchGeometry {
        &self.geometry
    }
    /// Returns a reference to the laser of this [`OpticalBench`].
    #[must_use]
    pub const fn laser(&self) -> &Laser {
        &self.laser
    }
    /// Returns a mutable reference to the laser of this [`OpticalBench`].
    pub fn laser_mut(&mut self) -> &mut Laser {
        &mut self.laser
    }
    /// Replaces the laser of this [`OpticalBench`].
    pub fn set_laser(&mut self, laser: Laser) {
        self.laser = laser;
    }
    /// Returns the elements of this [`OpticalBench`] in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[OpticalElement] {
        &self.elements
    }
    /// Returns the elements of this [`OpticalBench`] sorted by their position.
    #[must_use]
    pub fn sorted_elements(&self) -> Vec<&OpticalElement> {
        self.elements
            .iter()
            .sorted_by(|a, b| a.position().total_cmp(&b.position()))
            .collect()
    }
    /// Returns the element with the given id.
    ///
    /// # Errors
    ///
    /// This function will return an error if no element with the given id exists.
    pub fn element(&self, id: Uuid) -> BenchResult<&OpticalElement> {
        self.elements
            .iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| BenchError::Element(format!("element {id} not found")))
    }
    fn element_mut(&mut self, id: Uuid) -> BenchResult<&mut OpticalElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| BenchError::Element(format!("element {id} not found")))
    }
    /// Add a new element of the given kind at the given position.
    ///
    /// The position is clamped onto the bench. The element gets the default focal length of its
    /// kind. Returns the id of the new element.
    pub fn add_element(&mut self, kind: ElementKind, position: f64) -> Uuid {
        let mut element = OpticalElement::new(kind, position);
        element.set_position(position, &self.geometry);
        let id = element.id();
        info!("add {kind} at {}", element.position());
        self.elements.push(element);
        id
    }
    /// Insert an existing element (e.g. read from a document).
    ///
    /// Position and focal length are sanitized. Returns the id of the element.
    ///
    /// # Errors
    ///
    /// This function will return an error if an element with the same id already exists.
    pub fn insert_element(&mut self, mut element: OpticalElement) -> BenchResult<Uuid> {
        let id = element.id();
        if self.element(id).is_ok() {
            return Err(BenchError::Element(format!("element {id} already exists")));
        }
        element.sanitize(&self.geometry);
        self.elements.push(element);
        Ok(id)
    }
    /// Remove the element with the given id and return it.
    ///
    /// # Errors
    ///
    /// This function will return an error if no element with the given id exists.
    pub fn remove_element(&mut self, id: Uuid) -> BenchResult<OpticalElement> {
        let idx = self
            .elements
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| BenchError::Element(format!("element {id} not found")))?;
        Ok(self.elements.remove(idx))
    }
    /// Move the element with the given id to a new position (clamped onto the bench).
    ///
    /// # Errors
    ///
    /// This function will return an error if no element with the given id exists.
    pub fn move_element(&mut self, id: Uuid, position: f64) -> BenchResult<()> {
        let geometry = self.geometry;
        self.element_mut(id)?.set_position(position, &geometry);
        Ok(())
    }
    /// Set the focal length of the element with the given id.
    ///
    /// The magnitude is clamped, the sign follows the element kind.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - no element with the given id exists.
    ///   - the element is a plane mirror.
    pub fn set_focal_length(&mut self, id: Uuid, focal_length: f64) -> BenchResult<()> {
        self.element_mut(id)?.set_focal_length(focal_length)
    }
    /// Change the kind of the element with the given id.
    ///
    /// # Errors
    ///
    /// This function will return an error if no element with the given id exists.
    pub fn set_kind(&mut self, id: Uuid, kind: ElementKind) -> BenchResult<()> {
        self.element_mut(id)?.set_kind(kind);
        Ok(())
    }
    /// Remove all elements from this [`OpticalBench`].
    pub fn clear(&mut self) {
        self.elements.clear();
    }
    /// Trace the ray of the current laser through the current elements.
    #[must_use]
    pub fn trace(&self) -> Vec<RaySegment> {
        trace(
            &self.elements,
            self.geometry.origin(),
            self.laser.angle_deg(),
            self.laser.wavelength_nm(),
            &self.geometry,
        )
    }
}
