use nalgebra::{Point3, Vector3};

use crate::material::MaterialId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    /// Position along the ray. Negative `t` is the backward extension.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Surface intersection handed to a material.
#[derive(Clone, Debug)]
pub struct Hit {
    pub point: Point3<f32>,
    /// Unit normal, always facing against the incoming ray.
    pub normal: Vector3<f32>,
    pub front_face: bool,
    pub t: f32,
    pub material: MaterialId,
}

impl Hit {
    pub fn new(ray: &Ray, t: f32, outward_normal: Vector3<f32>, material: MaterialId) -> Self {
        let front_face = ray.direction.dot(&outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Hit {
            point: ray.at(t),
            normal,
            front_face,
            t,
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn at_is_origin_plus_scaled_direction() {
        let ray = Ray::new(point![1.0, 2.0, 3.0], vector![0.5, -1.0, 2.0]);

        assert_eq!(ray.at(0.0), point![1.0, 2.0, 3.0]);
        assert_eq!(ray.at(2.0), point![2.0, 0.0, 7.0]);
        assert_eq!(ray.at(-1.0), point![0.5, 3.0, 1.0]);
    }

    #[test]
    fn hit_faces_normal_against_ray() {
        let outward = vector![0.0, 1.0, 0.0];

        let from_above = Ray::new(point![0.0, 1.0, 0.0], vector![0.0, -1.0, 0.0]);
        let hit = Hit::new(&from_above, 1.0, outward, MaterialId(0));
        assert!(hit.front_face);
        assert_eq!(hit.normal, outward);
        assert_eq!(hit.point, point![0.0, 0.0, 0.0]);

        let from_below = Ray::new(point![0.0, -1.0, 0.0], vector![0.0, 1.0, 0.0]);
        let hit = Hit::new(&from_below, 1.0, outward, MaterialId(0));
        assert!(!hit.front_face);
        assert_eq!(hit.normal, -outward);
    }
}
