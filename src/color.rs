#![warn(missing_docs)]
//! Conversion of a wavelength into a display color.
//!
//! The visible spectrum is approximated piecewise-linearly by six bands. Each band linearly
//! interpolates raw red / green / blue weights. Towards both ends of the visible range the
//! weights are attenuated in order to mimic the reduced perceived brightness. Finally a fixed
//! gamma correction is applied.
use crate::utils::f64_to_u8;
use plotters::style::RGBColor;

/// Lower limit of the visible spectrum in nm.
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Upper limit of the visible spectrum in nm.
pub const VISIBLE_MAX_NM: f64 = 780.0;

const GAMMA: f64 = 0.8;
const INTENSITY_MAX: f64 = 255.0;

/// Raw (not attenuated) color weights of the given wavelength (in nm).
fn raw_weights(wavelength: f64) -> (f64, f64, f64) {
    if (380.0..440.0).contains(&wavelength) {
        ((440.0 - wavelength) / (440.0 - 380.0), 0.0, 1.0)
    } else if (440.0..490.0).contains(&wavelength) {
        (0.0, (wavelength - 440.0) / (490.0 - 440.0), 1.0)
    } else if (490.0..510.0).contains(&wavelength) {
        (0.0, 1.0, (510.0 - wavelength) / (510.0 - 490.0))
    } else if (510.0..580.0).contains(&wavelength) {
        ((wavelength - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if (580.0..645.0).contains(&wavelength) {
        (1.0, (645.0 - wavelength) / (645.0 - 580.0), 0.0)
    } else if (645.0..=VISIBLE_MAX_NM).contains(&wavelength) {
        (1.0, 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// Intensity attenuation towards the edges of the visible spectrum.
fn attenuation(wavelength: f64) -> f64 {
    if !(VISIBLE_MIN_NM..=VISIBLE_MAX_NM).contains(&wavelength) {
        0.0
    } else if wavelength > 700.0 {
        (VISIBLE_MAX_NM - wavelength) / (VISIBLE_MAX_NM - 700.0)
    } else if wavelength < 420.0 {
        (wavelength - VISIBLE_MIN_NM) / (420.0 - VISIBLE_MIN_NM)
    } else {
        1.0
    }
}

fn channel(weight: f64, factor: f64) -> u8 {
    f64_to_u8(INTENSITY_MAX * (weight * factor).powf(GAMMA))
}

/// Map a wavelength (in nm) to an RGB display color.
///
/// Any input is accepted. Wavelengths outside the visible range (including `NaN`) yield black,
/// wavelengths close to the borders of the visible range yield darker colors.
#[must_use]
pub fn wavelength_to_color(wavelength: f64) -> RGBColor {
    let (r, g, b) = raw_weights(wavelength);
    let factor = attenuation(wavelength);
    RGBColor(channel(r, factor), channel(g, factor), channel(b, factor))
}
