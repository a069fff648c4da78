use crate::algebra::Vec3;
use crate::fixed::{self, Fixed};

/// Point light circling the vertical axis in the x/z plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Light {
    pub pos: Vec3,
    pub orbit_radius: Fixed,
}

impl Light {
    /// Place the light on its orbit for the given fixed-point sine/cosine.
    /// Height is left as configured.
    pub fn orbit(&mut self, sin: Fixed, cos: Fixed) {
        self.pos.0 = fixed::scale(cos, self.orbit_radius);
        self.pos.2 = fixed::scale(sin, self.orbit_radius);
    }
}
