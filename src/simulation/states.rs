//! Core state types for the gravity simulation.
//!
//! Defines the 2D body used by every other part of the engine:
//! - `NVec2`  nalgebra 2D vector used for position, velocity and acceleration
//! - `Rgb`    display color, one byte per channel
//! - `Body`   a named point mass with its kinematic state and appearance
//!
//! Appearance setters clamp to the bounds below instead of rejecting input.

use nalgebra::Vector2;

use super::integrator::euler_step;
use super::params::VelocityUpdate;

pub type NVec2 = Vector2<f64>;

pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_MAX: f64 = 50.0;
pub const MASS_MIN: f64 = 10.0;
pub const MASS_MAX: f64 = 1.0e14;

/// Stable handle for a body, never reused within one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integer channels, clamping each to [0, 255]
    pub fn from_channels(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    pub fn channel(&self, channel: ColorChannel) -> u8 {
        match channel {
            ColorChannel::Red => self.r,
            ColorChannel::Green => self.g,
            ColorChannel::Blue => self.b,
        }
    }

    pub fn set_channel(&mut self, channel: ColorChannel, value: i64) {
        let value = clamp_channel(value);
        match channel {
            ColorChannel::Red => self.r = value,
            ColorChannel::Green => self.g = value,
            ColorChannel::Blue => self.b = value,
        }
    }
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamp a display radius into [RADIUS_MIN, RADIUS_MAX]
pub fn clamp_radius(radius: f64) -> f64 {
    if radius.is_nan() {
        return RADIUS_MIN;
    }
    radius.clamp(RADIUS_MIN, RADIUS_MAX)
}

/// Clamp a mass into [MASS_MIN, MASS_MAX], which also keeps it strictly positive
pub fn clamp_mass(mass: f64) -> f64 {
    if mass.is_nan() {
        return MASS_MIN;
    }
    mass.clamp(MASS_MIN, MASS_MAX)
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String, // unique, trimmed, non-empty
    pub x: NVec2, // position
    pub v: NVec2, // velocity ("direction")
    pub a: NVec2, // acceleration from the last force evaluation
    m: f64, // mass
    radius: f64, // display radius, not used by gravity
    pub color: Rgb,
}

impl Body {
    /// Create a body; radius and mass are clamped to their documented ranges
    pub fn new(id: BodyId, name: impl Into<String>, radius: f64, color: Rgb, x: NVec2, m: f64, v: NVec2) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            v,
            a: NVec2::zeros(),
            m: clamp_mass(m),
            radius: clamp_radius(radius),
            color,
        }
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_mass(&mut self, m: f64) {
        self.m = clamp_mass(m);
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = clamp_radius(radius);
    }

    pub fn set_color_channel(&mut self, channel: ColorChannel, value: i64) {
        self.color.set_channel(channel, value);
    }

    /// Replace the stored acceleration, once per frame before `apply_motion`
    pub fn set_acceleration(&mut self, a: NVec2) {
        self.a = a;
    }

    /// Move by the current velocity, then fold the acceleration into the velocity
    pub fn apply_motion(&mut self, dt: f64, mode: VelocityUpdate) {
        let (x, v) = euler_step(self.x, self.v, self.a, dt, mode);
        self.x = x;
        self.v = v;
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}
