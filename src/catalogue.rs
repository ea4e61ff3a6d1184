//! Celestial body catalogue for the toy solar system.
//!
//! Bodies follow fixed analytic circular orbits (no mutual perturbation);
//! masses are relative units (Earth = 1) consumed only by the gravity-field
//! sampler. The catalogue is built once at startup and read-only afterwards.

use bevy::prelude::*;
use std::f64::consts::TAU;

/// Static descriptor for one body in the system.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    /// Unique identifier, used by the camera sequencer for target lookup.
    pub name: String,
    /// Mass in relative units (Earth = 1, Sun ≫ planets).
    pub mass: f64,
    /// Orbit distance from the origin in scene units. 0 for the central body.
    pub orbit_radius: f64,
    /// Orbital angular speed in radians per simulation second.
    /// 0 for the central body (it never moves).
    pub angular_speed: f64,
    /// Orbit angle offset at `t = 0`, radians.
    pub initial_phase: f64,
    /// Render radius in scene units. Opaque to the simulation core.
    pub visual_radius: f32,
    /// Render color. Opaque to the simulation core.
    pub color: Color,
}

impl CelestialBody {
    /// Create a body from an explicit angular speed.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        orbit_radius: f64,
        angular_speed: f64,
        initial_phase: f64,
        visual_radius: f32,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            orbit_radius,
            angular_speed,
            initial_phase,
            visual_radius,
            color,
        }
    }

    /// Create a body from an orbital period in simulation seconds.
    ///
    /// Angular speed is derived as `2π / period` when the period is
    /// positive. A zero or negative period yields angular speed 0, which
    /// the kinematics engine treats as a stationary body (a deliberate
    /// fallback, not a division producing infinity).
    pub fn from_period(
        name: impl Into<String>,
        mass: f64,
        orbit_radius: f64,
        orbital_period: f64,
        initial_phase: f64,
        visual_radius: f32,
        color: Color,
    ) -> Self {
        let angular_speed = if orbital_period > 0.0 {
            TAU / orbital_period
        } else {
            0.0
        };
        Self::new(
            name,
            mass,
            orbit_radius,
            angular_speed,
            initial_phase,
            visual_radius,
            color,
        )
    }

    /// Whether this is the central body (fixed at the origin).
    pub fn is_central(&self) -> bool {
        self.orbit_radius == 0.0
    }
}

/// Validation failures when constructing a catalogue.
///
/// Surfaced once at construction time; the core never silently clamps bad
/// authoring data.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogueError {
    #[error("catalogue is empty")]
    Empty,

    #[error("catalogue has no central body (orbit radius 0)")]
    NoCentralBody,

    #[error("catalogue has more than one central body: {0:?} and {1:?}")]
    MultipleCentralBodies(String, String),

    #[error("duplicate body name {0:?}")]
    DuplicateName(String),

    #[error("body {name:?} has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body {name:?} has negative orbit radius {radius}")]
    NegativeOrbitRadius { name: String, radius: f64 },

    #[error("orbiting body {0:?} has non-positive angular speed")]
    StationaryOrbiter(String),
}

/// Immutable, ordered list of celestial bodies.
///
/// One owned catalogue is injected into every consumer (kinematics, field
/// sampler snapshots, camera sequencer); no component embeds its own copy.
#[derive(Resource, Clone, Debug)]
pub struct BodyCatalogue {
    bodies: Vec<CelestialBody>,
}

impl BodyCatalogue {
    /// Validate and build a catalogue.
    ///
    /// Invariants enforced here:
    /// - at least one body, exactly one with `orbit_radius == 0`;
    /// - every other body has `orbit_radius > 0` and `angular_speed > 0`;
    /// - positive masses and unique names throughout.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, CatalogueError> {
        if bodies.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let mut central: Option<&CelestialBody> = None;
        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i].iter().any(|b| b.name == body.name) {
                return Err(CatalogueError::DuplicateName(body.name.clone()));
            }
            if body.mass <= 0.0 || !body.mass.is_finite() {
                return Err(CatalogueError::NonPositiveMass {
                    name: body.name.clone(),
                    mass: body.mass,
                });
            }
            if body.orbit_radius < 0.0 {
                return Err(CatalogueError::NegativeOrbitRadius {
                    name: body.name.clone(),
                    radius: body.orbit_radius,
                });
            }
            if body.is_central() {
                match central {
                    None => central = Some(body),
                    Some(first) => {
                        return Err(CatalogueError::MultipleCentralBodies(
                            first.name.clone(),
                            body.name.clone(),
                        ));
                    }
                }
            } else if body.angular_speed <= 0.0 {
                return Err(CatalogueError::StationaryOrbiter(body.name.clone()));
            }
        }

        if central.is_none() {
            return Err(CatalogueError::NoCentralBody);
        }

        Ok(Self { bodies })
    }

    /// All bodies, in catalogue order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Look up a body by name.
    pub fn by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// The central body.
    pub fn central(&self) -> &CelestialBody {
        // Construction guarantees exactly one central body.
        self.bodies
            .iter()
            .find(|b| b.is_central())
            .expect("validated catalogue always has a central body")
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the catalogue is empty (never true after validation).
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The baked-in Sun + 8 planets demo system.
    ///
    /// Masses are relative (Earth = 1), orbit radii in scene units with
    /// Earth at 20, angular speeds chosen for a watchable demo rather than
    /// Kepler's third law.
    pub fn toy_solar_system() -> Self {
        let bodies = vec![
            CelestialBody::new("Sun", 1000.0, 0.0, 0.0, 0.0, 4.0, Color::srgb(1.0, 0.95, 0.4)),
            CelestialBody::new("Mercury", 0.055, 10.0, 0.5, 0.0, 0.38, Color::srgb(0.6, 0.6, 0.6)),
            CelestialBody::new("Venus", 0.815, 15.0, 0.4, 1.0, 0.95, Color::srgb(0.9, 0.85, 0.7)),
            CelestialBody::new("Earth", 1.0, 20.0, 0.3, 2.0, 1.0, Color::srgb(0.2, 0.5, 0.8)),
            CelestialBody::new("Mars", 0.107, 25.0, 0.25, 3.0, 0.53, Color::srgb(0.8, 0.4, 0.2)),
            CelestialBody::new("Jupiter", 317.8, 35.0, 0.15, 4.0, 2.8, Color::srgb(0.8, 0.7, 0.6)),
            CelestialBody::new("Saturn", 95.2, 45.0, 0.1, 5.0, 2.4, Color::srgb(0.9, 0.85, 0.6)),
            CelestialBody::new("Uranus", 14.5, 55.0, 0.07, 6.0, 1.6, Color::srgb(0.6, 0.8, 0.9)),
            CelestialBody::new("Neptune", 17.1, 65.0, 0.05, 7.0, 1.55, Color::srgb(0.3, 0.5, 0.9)),
        ];
        Self::new(bodies).expect("baked-in demo catalogue is valid")
    }
}
