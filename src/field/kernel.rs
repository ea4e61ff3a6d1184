//! Falloff kernels transforming raw field accumulation into a warp value.
//!
//! The source history grew several near-duplicate grid components differing
//! only in kernel shape; they are consolidated here behind one tagged
//! variant selected in [`super::FieldConfig`].

use super::FieldConfigError;

/// Kernel applied to the raw mass/distance accumulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FalloffKernel {
    /// Warp equals the raw accumulated value directly. Unbounded; the
    /// simplest option for small scenes.
    Linear,
    /// `1 - exp(-raw * sensitivity)`: bounded in `[0, 1)`, smooth.
    /// Preferred default.
    Exponential { sensitivity: f64 },
    /// `sqrt(1 - exp(-raw * sensitivity))`: flattens the peak near strong
    /// sources for a less pointy dip.
    SmoothedExponential { sensitivity: f64 },
    /// Radius-limited cone around the plane origin, for a single dominant
    /// central source. Ignores per-body mass weighting entirely: inside
    /// `radius` the warp is `max_depth * (1 - r/radius)²`, outside it is 0.
    Conical { radius: f64, max_depth: f64 },
}

impl FalloffKernel {
    /// Default sensitivity for the exponential kernels.
    pub const DEFAULT_SENSITIVITY: f64 = 0.1;

    /// The preferred default kernel.
    pub fn exponential() -> Self {
        FalloffKernel::Exponential {
            sensitivity: Self::DEFAULT_SENSITIVITY,
        }
    }

    /// Validate kernel constants. Called once at config construction so
    /// authoring mistakes surface immediately instead of being clamped.
    pub(super) fn validate(&self) -> Result<(), FieldConfigError> {
        match *self {
            FalloffKernel::Linear => Ok(()),
            FalloffKernel::Exponential { sensitivity }
            | FalloffKernel::SmoothedExponential { sensitivity } => {
                if sensitivity > 0.0 && sensitivity.is_finite() {
                    Ok(())
                } else {
                    Err(FieldConfigError::InvalidSensitivity(sensitivity))
                }
            }
            FalloffKernel::Conical { radius, max_depth } => {
                if !(radius > 0.0 && radius.is_finite()) {
                    return Err(FieldConfigError::InvalidRadius(radius));
                }
                if !(max_depth >= 0.0 && max_depth.is_finite()) {
                    return Err(FieldConfigError::InvalidMaxDepth(max_depth));
                }
                Ok(())
            }
        }
    }

    /// Map a raw accumulated value to a warp. Not used by the conical
    /// kernel, which is distance-based (see [`super::FieldConfig::sample`]).
    pub(super) fn warp_from_raw(&self, raw: f64) -> f64 {
        match *self {
            FalloffKernel::Linear => raw,
            FalloffKernel::Exponential { sensitivity } => 1.0 - (-raw * sensitivity).exp(),
            FalloffKernel::SmoothedExponential { sensitivity } => {
                // max(0) guards against a tiny negative from float round-off
                // before the square root.
                (1.0 - (-raw * sensitivity).exp()).max(0.0).sqrt()
            }
            FalloffKernel::Conical { .. } => 0.0,
        }
    }

    /// Cone profile at planar radial distance `r` from the plane origin.
    pub(super) fn cone(radius: f64, max_depth: f64, r: f64) -> f64 {
        if r < radius {
            let falloff = 1.0 - r / radius;
            max_depth * falloff * falloff
        } else {
            0.0
        }
    }
}
