// src/physics/grid.rs
use std::f64::consts::PI;

type Point3 = [f64; 3];

/// Angular step between neighbouring samples, in degrees.
pub const ANGLE_STEP_DEG: u32 = 10;
/// Polar samples: 10°, 20°, ..., 360°.
pub const POLAR_SAMPLES: usize = 36;
/// Azimuthal samples: 10°, 20°, ..., 180°.
pub const AZIMUTHAL_SAMPLES: usize = 18;
pub const GRID_SIZE: usize = POLAR_SAMPLES * AZIMUTHAL_SAMPLES;

/// Unit directions used as contraction inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionGrid(Vec<Point3>);

/// Arrow start points on a sphere of the requested radius.
///
/// Deliberately a separate type from [`DirectionGrid`]: anchors only place
/// arrows and must never be fed to the contraction.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorGrid(Vec<Point3>);

impl DirectionGrid {
    pub fn points(&self) -> &[Point3] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AnchorGrid {
    pub fn points(&self) -> &[Point3] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Polar-major, azimuthal-minor sweep of the unit sphere.
fn unit_sweep() -> impl Iterator<Item = Point3> {
    (1..=POLAR_SAMPLES as u32).flat_map(|i| {
        let theta = f64::from(i * ANGLE_STEP_DEG) * PI / 180.0;
        (1..=AZIMUTHAL_SAMPLES as u32).map(move |j| {
            let phi = f64::from(j * ANGLE_STEP_DEG) * PI / 180.0;
            [theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos()]
        })
    })
}

/// The 648 unit directions.
pub fn direction_grid() -> DirectionGrid {
    DirectionGrid(unit_sweep().collect())
}

/// The same sweep scaled by `radius`. Zero and negative radii are accepted.
pub fn anchor_grid(radius: f64) -> AnchorGrid {
    AnchorGrid(unit_sweep().map(|p| p.map(|c| radius * c)).collect())
}
