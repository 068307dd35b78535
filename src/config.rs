use crate::geometry::Sphere;
use crate::math::{Matrix, Ray, Vector3};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct SphereSettings {
    pub center: [f32; 3],
    pub radius: f32,
}

impl Default for SphereSettings {
    fn default() -> Self {
        SphereSettings {
            center: [0.0; 3],
            radius: 1.0,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct RaySettings {
    pub origin: [f32; 3],
    pub direction: [f32; 3],
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TransformSettings {
    Translation {
        offset: [f32; 3],
    },
    Scaling {
        factors: [f32; 3],
    },
    RotationX {
        radians: f32,
    },
    RotationY {
        radians: f32,
    },
    RotationZ {
        radians: f32,
    },
    Shear {
        xy: f32,
        xz: f32,
        yx: f32,
        yz: f32,
        zx: f32,
        zy: f32,
    },
}

impl TransformSettings {
    pub fn to_matrix(&self) -> Matrix {
        match *self {
            TransformSettings::Translation { offset } => Matrix::translation(offset.into()),
            TransformSettings::Scaling { factors } => Matrix::scaling(factors.into()),
            TransformSettings::RotationX { radians } => Matrix::rotation_x(radians),
            TransformSettings::RotationY { radians } => Matrix::rotation_y(radians),
            TransformSettings::RotationZ { radians } => Matrix::rotation_z(radians),
            TransformSettings::Shear {
                xy,
                xz,
                yx,
                yz,
                zx,
                zy,
            } => Matrix::shear(xy, xz, yx, yz, zx, zy),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLProbeConfig {
    #[serde(default)]
    pub sphere: SphereSettings,
    #[serde(default)]
    pub transforms: Vec<TransformSettings>,
    pub rays: Vec<RaySettings>,
}

#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub sphere: Sphere,
    // every transform from the file, folded so that they apply in listed order
    pub transform: Matrix,
    pub rays: Vec<Ray>,
}

impl TryFrom<TOMLProbeConfig> for ProbeConfig {
    type Error = anyhow::Error;
    fn try_from(data: TOMLProbeConfig) -> anyhow::Result<Self> {
        let transform = data
            .transforms
            .iter()
            .fold(Matrix::IDENTITY, |acc, t| acc * t.to_matrix());
        let rays = data
            .rays
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let direction = Vector3::from(r.direction)
                    .try_normalized()
                    .with_context(|| format!("ray {} has a zero length direction", i))?;
                Ok(Ray::new(r.origin.into(), direction))
            })
            .collect::<anyhow::Result<Vec<Ray>>>()?;
        Ok(ProbeConfig {
            sphere: Sphere::new(Vector3::from(data.sphere.center), data.sphere.radius),
            transform,
            rays,
        })
    }
}

pub fn parse_settings(input: &str) -> anyhow::Result<ProbeConfig> {
    let settings: TOMLProbeConfig = toml::from_str(input).context("malformed probe config")?;
    debug!(
        "parsed probe config: {} transforms, {} rays",
        settings.transforms.len(),
        settings.rays.len()
    );
    if settings.sphere.radius <= 0.0 {
        warn!("sphere radius {} is not positive", settings.sphere.radius);
    }
    ProbeConfig::try_from(settings)
}

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<ProbeConfig> {
    let filepath = filepath.as_ref();
    info!("loading probe config at {}", filepath.display());
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    parse_settings(&input)
}
