use super::misc::nearly_equal;

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

/// linear rgb triple. no clamping is applied anywhere, values may be negative or exceed 1.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        nearly_equal(self.r, other.r) && nearly_equal(self.g, other.g) && nearly_equal(self.b, other.b)
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        *self = *self + other;
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, other: Color) -> Color {
        Color::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl Neg for Color {
    type Output = Color;
    fn neg(self) -> Color {
        Color::new(-self.r, -self.g, -self.b)
    }
}

// hadamard product
impl Mul for Color {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, other: Color) {
        *self = *self * other;
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, other: f32) -> Color {
        Color::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        other * self
    }
}

impl Div<f32> for Color {
    type Output = Color;
    fn div(self, other: f32) -> Color {
        Color::new(self.r / other, self.g / other, self.b / other)
    }
}

impl From<f32> for Color {
    fn from(s: f32) -> Color {
        Color::new(s, s, s)
    }
}
