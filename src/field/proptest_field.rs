//! Property-based tests for the gravity-field sampler using proptest.
//!
//! These tests verify that sampling maintains its contract (boundedness,
//! monotonicity, permutation invariance) across a wide range of inputs.

use proptest::prelude::*;

use bevy::math::DVec3;

use super::{FalloffKernel, FieldConfig, FieldSource, SurfacePlane};

fn arb_source() -> impl Strategy<Value = FieldSource> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        0.001f64..1000.0,
    )
        .prop_map(|(x, z, mass)| FieldSource {
            position: DVec3::new(x, 0.0, z),
            mass,
        })
}

fn arb_point() -> impl Strategy<Value = DVec3> {
    (-200.0f64..200.0, -50.0f64..50.0, -200.0f64..200.0)
        .prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The exponential kernel never leaves [0, 1] for non-negative raw
    /// values (the mathematical bound is [0, 1); float rounding can land
    /// exactly on 1 when e^-x underflows).
    #[test]
    fn prop_exponential_warp_bounded(
        sources in prop::collection::vec(arb_source(), 0..12),
        point in arb_point(),
        sensitivity in 0.001f64..10.0,
    ) {
        let config = FieldConfig::new(
            FalloffKernel::Exponential { sensitivity },
            SurfacePlane::Xz,
        ).unwrap();

        let warp = config.sample(point, &sources);
        prop_assert!(
            (0.0..=1.0).contains(&warp),
            "warp {} out of bounds for {} sources", warp, sources.len()
        );
    }

    /// Sampling is invariant under reordering of the source list.
    #[test]
    fn prop_permutation_invariance(
        sources in prop::collection::vec(arb_source(), 1..12),
        point in arb_point(),
    ) {
        let config = FieldConfig::new(FalloffKernel::Linear, SurfacePlane::Xz).unwrap();

        let mut reversed = sources.clone();
        reversed.reverse();

        let forward = config.sample(point, &sources);
        let backward = config.sample(point, &reversed);

        // Addition of the per-source terms is commutative up to float
        // re-association; the raw terms here are all benign magnitudes.
        prop_assert!(
            (forward - backward).abs() <= 1e-9 * forward.abs().max(1.0),
            "reordering changed the sample: {} vs {}", forward, backward
        );
    }

    /// A single body sampled from closer up never yields a smaller value.
    #[test]
    fn prop_distance_monotonicity(
        mass in 0.001f64..1000.0,
        d1 in 0.0f64..500.0,
        extra in 0.001f64..500.0,
    ) {
        let config = FieldConfig::new(FalloffKernel::Linear, SurfacePlane::Xz).unwrap();
        let sources = [FieldSource { position: DVec3::ZERO, mass }];

        let d2 = d1 + extra;
        let near = config.sample(DVec3::new(d1, 0.0, 0.0), &sources);
        let far = config.sample(DVec3::new(d2, 0.0, 0.0), &sources);

        prop_assert!(
            near >= far,
            "sample grew with distance: {} at {} vs {} at {}", near, d1, far, d2
        );
    }

    /// Increasing a body's mass never decreases the sampled value.
    #[test]
    fn prop_mass_monotonicity(
        point in arb_point(),
        source in arb_source(),
        factor in 1.0f64..100.0,
    ) {
        let config = FieldConfig::new(
            FalloffKernel::exponential(),
            SurfacePlane::Xz,
        ).unwrap();

        let heavier = FieldSource { mass: source.mass * factor, ..source };
        let base = config.sample(point, &[source]);
        let boosted = config.sample(point, &[heavier]);

        prop_assert!(
            boosted >= base,
            "heavier source sampled lower: {} vs {}", boosted, base
        );
    }

    /// The smoothed-exponential kernel shares the exponential bound.
    #[test]
    fn prop_smoothed_warp_bounded(
        sources in prop::collection::vec(arb_source(), 0..12),
        point in arb_point(),
        sensitivity in 0.001f64..10.0,
    ) {
        let config = FieldConfig::new(
            FalloffKernel::SmoothedExponential { sensitivity },
            SurfacePlane::Xz,
        ).unwrap();

        let warp = config.sample(point, &sources);
        prop_assert!((0.0..=1.0).contains(&warp), "warp {} out of bounds", warp);
    }

    /// The conical kernel is zero everywhere outside its radius and bounded
    /// by max depth inside.
    #[test]
    fn prop_conical_bounded(
        radius in 0.1f64..100.0,
        max_depth in 0.0f64..10.0,
        point in arb_point(),
    ) {
        let config = FieldConfig::new(
            FalloffKernel::Conical { radius, max_depth },
            SurfacePlane::Xz,
        ).unwrap();

        let warp = config.sample(point, &[]);
        let r = SurfacePlane::Xz.project(point).length();
        if r < radius {
            prop_assert!((0.0..=max_depth).contains(&warp));
        } else {
            prop_assert_eq!(warp, 0.0);
        }
    }
}
