use crate::{
    algebra::{vec3_from_array, Vec3},
    color::{rgb_from_hex, Rgb},
    fixed::{Fixed, SCALE},
    light::Light,
    material::Material,
    plane::Plane,
    renderer::Camera,
    sphere::Sphere,
    trig::Trig,
    SCREEN_H, SCREEN_W,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Scene validation error: {0}")]
    Validation(String),
}

#[derive(Deserialize)]
struct CameraJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pos: Vec3,
    focal: Fixed,
    fov_step: Fixed,
}

#[derive(Deserialize)]
struct RenderJson {
    width: u32,
    height: u32,
    frames: u32,
    tick_step: i32,
}

/// Animation settings. The frame size lives on `Camera`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub frames: u32,
    /// Degrees the animation advances per frame.
    pub tick_step: i32,
}

#[derive(Deserialize)]
struct PlaneJson {
    y: Fixed,
    #[serde(deserialize_with = "rgb_from_hex")]
    odd: Rgb,
    #[serde(deserialize_with = "rgb_from_hex")]
    even: Rgb,
}

#[derive(Deserialize)]
struct LightJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pos: Vec3,
    #[serde(default)]
    orbit_radius: Fixed,
}

#[derive(Deserialize)]
struct SphereJson {
    name: String,
    #[serde(deserialize_with = "vec3_from_array")]
    center: Vec3,
    radius: Fixed,
    #[serde(deserialize_with = "rgb_from_hex")]
    color: Rgb,
    #[serde(default)]
    reflectance: Fixed,
    #[serde(default)] // static unless given
    bob: Fixed,
}

#[derive(Deserialize)]
struct SceneFile {
    camera: CameraJson,
    render: RenderJson,
    #[serde(deserialize_with = "rgb_from_hex")]
    sky: Rgb,
    plane: PlaneJson,
    light: LightJson,
    spheres: Vec<SphereJson>,
}

/// Everything one frame needs. Tracing only ever borrows it immutably;
/// `advance` is the single per-frame mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    pub camera: Camera,
    pub render: RenderSettings,
    pub sky: Rgb,
    pub plane: Plane,
    pub light: Light,
    /// Tested in order; on equal distance the earlier sphere wins.
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// The stock two-sphere scene over a checkerboard.
    pub fn reference() -> Self {
        Scene {
            camera: Camera {
                pos: Vec3::ZERO,
                focal: 1024,
                fov_step: 30,
                width: SCREEN_W,
                height: SCREEN_H,
            },
            render: RenderSettings {
                frames: 36,
                tick_step: 10,
            },
            sky: Rgb(0x87CEEB),
            plane: Plane {
                y: -1536,
                odd: Rgb(0xFFFFFF),
                even: Rgb(0x444444),
            },
            light: Light {
                pos: Vec3(2048, 3072, -1024),
                orbit_radius: 3000,
            },
            spheres: vec![
                Sphere::new(
                    "mirror",
                    Vec3(0, 0, 4096),
                    1024,
                    Material { color: Rgb(0xFFFFFF), reflectance: 800 },
                ),
                Sphere::new(
                    "red",
                    Vec3(-1536, -512, 3500),
                    700,
                    Material { color: Rgb(0xFF0000), reflectance: 100 },
                )
                .with_bob(300),
            ],
        }
    }

    pub fn from_json(data: &str) -> Result<Self, SceneError> {
        let file: SceneFile = serde_json::from_str(data)?;

        let spheres = file
            .spheres
            .into_iter()
            .map(|s| {
                Sphere::new(
                    s.name,
                    s.center,
                    s.radius,
                    Material { color: s.color, reflectance: s.reflectance },
                )
                .with_bob(s.bob)
            })
            .collect();

        let scene = Scene {
            camera: Camera {
                pos: file.camera.pos,
                focal: file.camera.focal,
                fov_step: file.camera.fov_step,
                width: file.render.width,
                height: file.render.height,
            },
            render: RenderSettings {
                frames: file.render.frames,
                tick_step: file.render.tick_step,
            },
            sky: file.sky,
            plane: Plane {
                y: file.plane.y,
                odd: file.plane.odd,
                even: file.plane.even,
            },
            light: Light {
                pos: file.light.pos,
                orbit_radius: file.light.orbit_radius,
            },
            spheres,
        };
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let invalid = |msg: String| Err(SceneError::Validation(msg));

        if self.camera.width == 0 || self.camera.height == 0 {
            return invalid(format!(
                "frame must be at least 1x1, got {}x{}",
                self.camera.width, self.camera.height
            ));
        }
        if self.render.tick_step == 0 {
            return invalid("tick_step must be nonzero".to_string());
        }
        if self.camera.focal <= 0 || self.camera.fov_step <= 0 {
            return invalid(format!(
                "camera focal ({}) and fov_step ({}) must be positive",
                self.camera.focal, self.camera.fov_step
            ));
        }
        for s in &self.spheres {
            if s.radius <= 0 {
                return invalid(format!("sphere '{}' has radius {}", s.name, s.radius));
            }
            if !(0..=SCALE).contains(&s.material.reflectance) {
                return invalid(format!(
                    "sphere '{}' reflectance {} outside 0..={SCALE}",
                    s.name, s.material.reflectance
                ));
            }
        }
        Ok(())
    }

    /// Move the light and the bobbing spheres to their positions for `tick`
    /// (degrees). Call once per frame, before any pixel is traced.
    pub fn advance(&mut self, tick: i32, trig: &impl Trig) {
        let angle = tick.rem_euclid(360);
        let s = trig.sin(angle);
        let c = trig.cos(angle);

        self.light.orbit(s, c);
        for sphere in &mut self.spheres {
            sphere.bob_to(s);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let data = std::fs::read_to_string(path)?;
    Scene::from_json(&data)
}
