use crate::{color::Rgb, fixed::Fixed};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Material {
    pub color: Rgb,
    /// Share of the outgoing color taken from the mirror ray, `0..=SCALE`.
    pub reflectance: Fixed,
}

impl Material {
    pub fn matte(color: Rgb) -> Self {
        Self { color, reflectance: 0 }
    }

    pub fn is_reflective(&self) -> bool {
        self.reflectance > 0
    }
}
