#![warn(missing_docs)]
//! The laser source launching the ray.
use crate::{
    color::{wavelength_to_color, VISIBLE_MAX_NM, VISIBLE_MIN_NM},
    degree,
    error::{BenchError, BenchResult},
    nanometer,
};
use log::warn;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::{
    angle::degree,
    f64::{Angle, Length},
    length::nanometer,
};

/// Launch state of the ray: its direction and its wavelength.
///
/// The angle is measured from the horizontal axis, positive angles are counter-clockwise. It is
/// always kept within `(-180°, 180°]`. The wavelength is kept within the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "LaserConfig", try_from = "LaserConfig")]
pub struct Laser {
    angle: Angle,
    wavelength: Length,
}
impl Default for Laser {
    /// A horizontal laser beam at 532 nm.
    fn default() -> Self {
        Self {
            angle: degree!(0.0),
            wavelength: nanometer!(532.0),
        }
    }
}
impl Laser {
    /// Creates a new [`Laser`].
    ///
    /// The angle is normalized into `(-180°, 180°]`, the wavelength clamped into the visible range.
    ///
    /// # Errors
    ///
    /// This function will return an error if the angle or the wavelength is not finite.
    pub fn new(angle: Angle, wavelength: Length) -> BenchResult<Self> {
        let mut laser = Self::default();
        laser.set_angle(angle)?;
        laser.set_wavelength(wavelength)?;
        Ok(laser)
    }
    /// Returns the launch angle of this [`Laser`].
    #[must_use]
    pub const fn angle(&self) -> Angle {
        self.angle
    }
    /// Returns the launch angle of this [`Laser`] in degrees.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        self.angle.get::<degree>()
    }
    /// Sets the launch angle of this [`Laser`].
    ///
    /// Any finite angle is accepted and normalized into `(-180°, 180°]`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given angle is not finite.
    pub fn set_angle(&mut self, angle: Angle) -> BenchResult<()> {
        let deg = angle.get::<degree>();
        if !deg.is_finite() {
            return Err(BenchError::Laser("angle must be finite".into()));
        }
        self.angle = degree!(normalize_degrees(deg));
        Ok(())
    }
    /// Returns the wavelength of this [`Laser`].
    #[must_use]
    pub const fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the wavelength of this [`Laser`] in nm.
    #[must_use]
    pub fn wavelength_nm(&self) -> f64 {
        self.wavelength.get::<nanometer>()
    }
    /// Sets the wavelength of this [`Laser`].
    ///
    /// The wavelength is clamped into the visible range (380 nm..=780 nm).
    ///
    /// # Errors
    ///
    /// This function will return an error if the given wavelength is not finite.
    pub fn set_wavelength(&mut self, wavelength: Length) -> BenchResult<()> {
        let nm = wavelength.get::<nanometer>();
        if !nm.is_finite() {
            return Err(BenchError::Laser("wavelength must be finite".into()));
        }
        let clamped = nm.clamp(VISIBLE_MIN_NM, VISIBLE_MAX_NM);
        if clamped != nm {
            warn!("wavelength {nm:.1} nm clamped to {clamped:.1} nm");
        }
        self.wavelength = nanometer!(clamped);
        Ok(())
    }
    /// Returns the display color of this [`Laser`]'s wavelength.
    #[must_use]
    pub fn color(&self) -> RGBColor {
        wavelength_to_color(self.wavelength_nm())
    }
}
impl Display for Laser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "angle: {:.1}°, wavelength: {:.0} nm",
            self.angle_deg(),
            self.wavelength_nm()
        )
    }
}

/// Serialized form of a [`Laser`] using the units of the user interface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LaserConfig {
    angle_deg: f64,
    wavelength_nm: f64,
}
impl From<Laser> for LaserConfig {
    fn from(laser: Laser) -> Self {
        Self {
            angle_deg: laser.angle_deg(),
            wavelength_nm: laser.wavelength_nm(),
        }
    }
}
impl TryFrom<LaserConfig> for Laser {
    type Error = BenchError;

    fn try_from(config: LaserConfig) -> BenchResult<Self> {
        Self::new(degree!(config.angle_deg), nanometer!(config.wavelength_nm))
    }
}

/// Normalize an angle (in degrees) into `(-180, 180]`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized > 180.0 {
        normalized - 360.0
    } else {
        normalized
    }
}
