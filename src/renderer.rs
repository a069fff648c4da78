use crate::{
    algebra::Vec3,
    color::{color_add, color_mul, Rgb},
    fixed::{Fixed, EPS_REFLECT_BIAS, EPS_SHADOW_BIAS, MAX_DEPTH, SCALE},
    hit::HitRecord,
    scene::Scene,
    screen::PixelSink,
};

/// Flat fill added to the diffuse term on lit surfaces.
const AMBIENT: Fixed = 200;
/// Shadowed surfaces keep `1 / SHADOW_DIVISOR` of their diffuse term.
const SHADOW_DIVISOR: Fixed = 4;

/// Pinhole camera looking down +z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub pos: Vec3,
    pub focal: Fixed,
    /// Raw units of image-plane offset per pixel.
    pub fov_step: Fixed,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    /// Unit direction through pixel `(x, y)`, row 0 at the top.
    pub fn ray_dir(&self, x: u32, y: u32) -> Vec3 {
        let u = (x as Fixed - (self.width / 2) as Fixed) * self.fov_step;
        let v = ((self.height / 2) as Fixed - y as Fixed) * self.fov_step;
        Vec3(u, v, self.focal).normalize()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Rays started by the camera.
    pub primary: u64,
    /// Scene intersection passes, primary plus reflection.
    pub passes: u64,
    pub shadow: u64,
    /// Deepest recursion level reached.
    pub deepest: u32,
}

/// Vertical sky gradient: full `base` straight up, black straight down.
pub fn sky(base: Rgb, rd: Vec3) -> Rgb {
    color_mul(base, ((rd.1 + SCALE) / 2).clamp(0, SCALE))
}

pub struct Tracer<'s> {
    scene: &'s Scene,
    stats: TraceStats,
}

impl<'s> Tracer<'s> {
    pub fn new(scene: &'s Scene) -> Self {
        Self { scene, stats: TraceStats::default() }
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    /// Nearest hit over every sphere, then the floor.
    pub fn intersect(&self, ro: Vec3, rd: Vec3) -> HitRecord {
        let rec = self
            .scene
            .spheres
            .iter()
            .fold(HitRecord::new(), |rec, s| s.intersect(ro, rd, rec));
        self.scene.plane.intersect(ro, rd, rec)
    }

    /// Whether a sphere sits between `rec.point` and the light. The floor
    /// does not cast shadows.
    fn occluded(&mut self, rec: &HitRecord, light_dir: Vec3) -> bool {
        self.stats.shadow += 1;
        let to_light = self.scene.light.pos.sub(rec.point);
        let origin = rec.point.add(rec.normal.scale(EPS_SHADOW_BIAS));
        self.scene
            .spheres
            .iter()
            .fold(HitRecord::within(to_light.length()), |shadow, s| {
                s.intersect(origin, light_dir, shadow)
            })
            .hit
    }

    pub fn trace(&mut self, ro: Vec3, rd: Vec3, depth: u32) -> Rgb {
        self.stats.passes += 1;
        self.stats.deepest = self.stats.deepest.max(depth);

        let rec = self.intersect(ro, rd);
        if !rec.hit {
            return sky(self.scene.sky, rd);
        }

        let light_dir = self.scene.light.pos.sub(rec.point).normalize();
        let mut diff = rec.normal.dot(light_dir).max(0);
        if self.occluded(&rec, light_dir) {
            diff /= SHADOW_DIVISOR;
        } else {
            diff = (diff + AMBIENT).min(SCALE);
        }

        let base = color_mul(rec.material.color, diff);

        let refl = rec.material.reflectance;
        if !rec.material.is_reflective() || depth >= MAX_DEPTH {
            return base;
        }

        let reflect_dir = rd.reflect(rec.normal);
        let reflect_ro = rec.point.add(rec.normal.scale(EPS_REFLECT_BIAS));
        let reflected = self.trace(reflect_ro, reflect_dir, depth + 1);

        color_add(color_mul(base, SCALE - refl), color_mul(reflected, refl))
    }

    pub fn trace_pixel(&mut self, x: u32, y: u32) -> Rgb {
        self.stats.primary += 1;
        let camera = self.scene.camera;
        self.trace(camera.pos, camera.ray_dir(x, y), 0)
    }
}

/// Trace every pixel of the frame in row-major order, then flush the sink.
pub fn render_frame(scene: &Scene, sink: &mut impl PixelSink) -> TraceStats {
    let mut tracer = Tracer::new(scene);
    for y in 0..scene.camera.height {
        for x in 0..scene.camera.width {
            let col = tracer.trace_pixel(x, y);
            sink.draw_pixel(x as i32, y as i32, col);
        }
    }
    sink.full_refresh();
    tracer.stats()
}
