use std::ops::Neg;

use fastrand::Rng;
use nalgebra::Vector3;

use crate::picture::Color;
use crate::random::{random, random_unit_vec, random_vec_in_unit_sphere};
use crate::ray::{Hit, Ray};

/// Index of a material in the scene's material table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) usize);

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Lambertian { albedo: Color },
    Metal { albedo: Color, fuzz: f32 },
    Dielectric { refractive_index: f32 },
}

pub fn reflect(v: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    v - 2.0 * v.dot(n) * n
}

pub fn refract(uv: &Vector3<f32>, n: &Vector3<f32>, etai_over_etat: f32) -> Vector3<f32> {
    let cos_theta = f32::min((-uv).dot(n), 1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = (1.0 - r_out_perp.magnitude_squared()).abs().sqrt().neg() * n;
    r_out_perp + r_out_parallel
}

/// Schlick-style reflectance, in the `r0 * (1 - r0) * (1 - cos)^5` form.
///
/// This is zero at normal incidence, unlike the textbook `r0 + (1 - r0) * (1 - cos)^5`.
pub fn reflectance(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 * (1.0 - r0) * (1.0 - cosine).powi(5)
}

pub fn near_zero(v: &Vector3<f32>) -> bool {
    const EPSILON: f32 = 1e-8;
    v.iter().all(|c| c.abs() < EPSILON)
}

/// Scatter direction for a diffuse bounce, falling back to the normal when
/// `sample` cancels it out.
fn diffuse_direction(normal: &Vector3<f32>, sample: &Vector3<f32>) -> Vector3<f32> {
    let direction = normal + sample;
    if near_zero(&direction) {
        *normal
    } else {
        direction
    }
}

fn refraction_ratio(refractive_index: f32, front_face: bool) -> f32 {
    if front_face {
        1.0 / refractive_index
    } else {
        refractive_index
    }
}

impl Material {
    /// Continues `ray` from `hit`, or returns `None` if the surface absorbs it.
    pub fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut Rng) -> Option<(Color, Ray)> {
        match self {
            Material::Lambertian { albedo } => {
                let scatter_direction = diffuse_direction(&hit.normal, &random_unit_vec(rng));
                Some((*albedo, Ray::new(hit.point, scatter_direction)))
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(&ray.direction.normalize(), &hit.normal)
                    + *fuzz * random_vec_in_unit_sphere(rng);
                // perturbed below the surface: absorbed
                if reflected.dot(&hit.normal) <= 0.0 {
                    return None;
                }
                Some((*albedo, Ray::new(hit.point, reflected)))
            }
            Material::Dielectric { refractive_index } => {
                let refraction_ratio = refraction_ratio(*refractive_index, hit.front_face);

                let unit_direction = ray.direction.normalize();

                let cos_theta = unit_direction.neg().dot(&hit.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction = if cannot_refract || reflectance(cos_theta, refraction_ratio) > random(rng) {
                    reflect(&unit_direction, &hit.normal)
                } else {
                    refract(&unit_direction, &hit.normal, refraction_ratio)
                };

                Some((Color::WHITE, Ray::new(hit.point, direction)))
            }
        }
    }

    pub fn lambertian(albedo: Color) -> Material {
        Material::Lambertian { albedo }
    }

    /// Fuzz is clamped to at most 1, never rejected.
    pub fn metal(albedo: Color, fuzz: f32) -> Material {
        let fuzz = if fuzz < 1.0 { fuzz } else { 1.0 };
        Material::Metal { albedo, fuzz }
    }

    pub fn dielectric(refractive_index: f32) -> Material {
        Material::Dielectric { refractive_index }
    }
}
