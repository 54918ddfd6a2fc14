//! Sampling helpers over an explicit random source.
//!
//! Every function takes the generator by `&mut`, so each render (or worker)
//! owns its own stream and seeded runs are reproducible.

use fastrand::Rng;
use nalgebra::{vector, Vector3};

pub fn random(rng: &mut Rng) -> f32 {
    rng.f32()
}

pub fn random_vec(rng: &mut Rng) -> Vector3<f32> {
    vector![random(rng) * 2.0 - 1.0, random(rng) * 2.0 - 1.0, random(rng) * 2.0 - 1.0]
}

pub fn random_vec_in_unit_sphere(rng: &mut Rng) -> Vector3<f32> {
    loop {
        let vec = random_vec(rng);
        if vec.magnitude_squared() < 1.0 {
            return vec;
        }
    }
}

pub fn random_unit_vec(rng: &mut Rng) -> Vector3<f32> {
    loop {
        let vec = random_vec_in_unit_sphere(rng);
        // too close to the origin to normalize reliably
        if vec.magnitude_squared() > 1e-12 {
            return vec.normalize();
        }
    }
}
