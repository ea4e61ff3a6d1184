//! Gravity-field sampler for the deformable grid surface.
//!
//! Accumulates `mass / (planar distance + 1)` over all bodies and maps the
//! sum through a selectable falloff kernel into a "warp" value. The warp is
//! a rendering effect visualizing combined gravitational influence, not a
//! physically accurate potential. Deterministic, stateless, O(bodies) per
//! query point.

mod kernel;

#[cfg(test)]
mod proptest_field;

pub use kernel::FalloffKernel;

use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;

/// A massive body as seen by the sampler: position plus mass.
///
/// Produced each tick by [`crate::kinematics::field_sources`]; the sampler
/// never reaches back into the catalogue or any renderer-owned buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSource {
    /// Position in scene units.
    pub position: DVec3,
    /// Mass in relative units.
    pub mass: f64,
}

/// Which two axes the deformable surface spans.
///
/// Distance is measured in this plane only; displacement along the third
/// axis is ignored. Consolidates the source history's per-orientation grid
/// component copies into one parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfacePlane {
    /// Ground plane: X and Z span the surface, Y is the warp axis.
    #[default]
    Xz,
    /// Backdrop plane: X and Y span the surface, Z is the warp axis.
    Xy,
}

impl SurfacePlane {
    /// Project a scene point onto the surface plane.
    pub fn project(&self, p: DVec3) -> DVec2 {
        match self {
            SurfacePlane::Xz => DVec2::new(p.x, p.z),
            SurfacePlane::Xy => DVec2::new(p.x, p.y),
        }
    }
}

/// Configuration failures, surfaced once at construction time.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FieldConfigError {
    #[error("kernel sensitivity must be positive and finite, got {0}")]
    InvalidSensitivity(f64),

    #[error("conical kernel radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("conical kernel max depth must be non-negative and finite, got {0}")]
    InvalidMaxDepth(f64),
}

/// Validated sampler configuration: active kernel plus surface plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    kernel: FalloffKernel,
    plane: SurfacePlane,
}

impl Default for FieldConfig {
    fn default() -> Self {
        // Known-valid constants, so construction cannot fail here.
        Self {
            kernel: FalloffKernel::exponential(),
            plane: SurfacePlane::Xz,
        }
    }
}

impl FieldConfig {
    /// Validate kernel constants and build a config.
    pub fn new(kernel: FalloffKernel, plane: SurfacePlane) -> Result<Self, FieldConfigError> {
        kernel.validate()?;
        Ok(Self { kernel, plane })
    }

    /// The active kernel.
    pub fn kernel(&self) -> FalloffKernel {
        self.kernel
    }

    /// The surface plane distances are measured in.
    pub fn plane(&self) -> SurfacePlane {
        self.plane
    }

    /// Raw additive accumulation: Σ `mass / (planar distance + 1)`.
    ///
    /// Monotonically increasing in each body's mass, decreasing in distance
    /// to each body, and zero for an empty source list.
    pub fn raw_accumulation(&self, point: DVec3, sources: &[FieldSource]) -> f64 {
        let p = self.plane.project(point);
        sources
            .iter()
            .map(|source| {
                let d = p.distance(self.plane.project(source.position));
                source.mass / (d + 1.0)
            })
            .sum()
    }

    /// Sample the warp at a query point.
    ///
    /// The accumulating kernels map [`Self::raw_accumulation`] through their
    /// falloff curve. The conical kernel instead measures planar radial
    /// distance from the plane origin (its single dominant source) and
    /// ignores the source list.
    pub fn sample(&self, point: DVec3, sources: &[FieldSource]) -> f64 {
        match self.kernel {
            FalloffKernel::Conical { radius, max_depth } => {
                let r = self.plane.project(point).length();
                FalloffKernel::cone(radius, max_depth, r)
            }
            kernel => kernel.warp_from_raw(self.raw_accumulation(point, sources)),
        }
    }
}

/// App-facing resource carrying the sampler configuration.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FieldSettings {
    pub config: FieldConfig,
}
