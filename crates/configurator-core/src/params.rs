//! Runtime configuration of the configurator scene.
//!
//! Numeric setters behave like the sliders they replace: values are clamped
//! into range rather than rejected. Only non-finite input is an error.

use crate::constants::{EXPOSURE_RANGE, FOV_RANGE_DEGREES, HEIGHT_RANGE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("invalid colour {input:?}: expected #rrggbb or #rgb")]
    InvalidColor { input: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(input: &str) -> Result<Self, ParamsError> {
        let invalid = || ParamsError::InvalidColor {
            input: input.to_string(),
        };
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 17);
                Ok(Self::new(short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Multiply each channel by `factor`, saturating at white.
    pub fn scaled(self, factor: f32) -> Self {
        let f = if factor.is_finite() { factor.max(0.0) } else { 1.0 };
        let s = |c: u8| (c as f32 * f).round().clamp(0.0, 255.0) as u8;
        Self::new(s(self.r), s(self.g), s(self.b))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfiguratorParams {
    pub shadows: bool,
    height: f32,
    exposure: f32,
    pub background: Rgb,
    fov_degrees: f32,
    pub debug: bool,
}

impl Default for ConfiguratorParams {
    fn default() -> Self {
        Self {
            shadows: true,
            height: 0.0,
            exposure: 0.5,
            background: Rgb::new(0xa3, 0xa3, 0xa3),
            fov_degrees: 56.0,
            debug: false,
        }
    }
}

fn clamp_field(field: &'static str, value: f32, range: (f32, f32)) -> Result<f32, ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NonFinite { field });
    }
    Ok(value.clamp(range.0, range.1))
}

impl ConfiguratorParams {
    pub fn height(&self) -> f32 {
        self.height
    }
    pub fn exposure(&self) -> f32 {
        self.exposure
    }
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn set_height(&mut self, v: f32) -> Result<(), ParamsError> {
        self.height = clamp_field("height", v, HEIGHT_RANGE)?;
        Ok(())
    }
    pub fn set_exposure(&mut self, v: f32) -> Result<(), ParamsError> {
        self.exposure = clamp_field("exposure", v, EXPOSURE_RANGE)?;
        Ok(())
    }
    pub fn set_fov_degrees(&mut self, v: f32) -> Result<(), ParamsError> {
        self.fov_degrees = clamp_field("fov", v, FOV_RANGE_DEGREES)?;
        Ok(())
    }
    pub fn set_background_hex(&mut self, hex: &str) -> Result<(), ParamsError> {
        self.background = Rgb::from_hex(hex)?;
        Ok(())
    }
}
