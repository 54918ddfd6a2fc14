//! Light transport for a recursive ray tracer, following the
//! [Ray Tracing in One Weekend](https://raytracing.github.io/) book series.
//!
//! Materials decide whether a ray that struck a surface is absorbed or continues,
//! and with what attenuation. The rest (spheres, camera, integrator) is the
//! minimum needed to render a scene with them.

pub mod camera;
pub mod config;
pub mod error;
pub mod material;
pub mod object;
pub mod picture;
pub mod random;
pub mod ray;
pub mod render;
pub mod scene;

pub use error::{Error, Result};
