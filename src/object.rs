use std::mem;
use std::ops::RangeBounds;

use float_ord::FloatOrd;
use nalgebra::Point3;

use crate::material::MaterialId;
use crate::ray::{Hit, Ray};

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point3<f32>,
    /// A negative radius flips the normals inward, e.g. the inner wall of a glass shell.
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32, material: MaterialId) -> Self {
        Sphere { center, radius, material }
    }

    /// Nearest intersection with `t` inside `t_rng`.
    pub fn hit<R>(&self, ray: &Ray, t_rng: R) -> Option<Hit>
        where R: RangeBounds<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.magnitude_squared();
        let half_b = oc.dot(&ray.direction);
        let c = oc.magnitude_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let t = [(-half_b - sqrtd) / a, (-half_b + sqrtd) / a]
            .into_iter()
            .find(|t| t_rng.contains(t))?;

        let outward_normal = (ray.at(t) - self.center) / self.radius;
        Some(Hit::new(ray, t, outward_normal, self.material))
    }
}

#[derive(Clone, Debug)]
pub enum Object {
    Sphere(Sphere),
    /// A group of objects hit as one; the nearest member wins.
    List(Vec<Object>),
}

impl Object {
    pub fn hit<R>(&self, ray: &Ray, t_rng: R) -> Option<Hit>
        where R: RangeBounds<f32> + Clone {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, t_rng),
            Object::List(list) => {
                list.iter()
                    .filter_map(|obj| obj.hit(ray, t_rng.clone()))
                    .min_by_key(|hit| FloatOrd(hit.t))
            }
        }
    }

    /// Adds `object` to this group, turning a single sphere into a group first.
    pub fn push(&mut self, object: Object) {
        match self {
            Object::List(list) => list.push(object),
            Object::Sphere(_) => {
                let previous = mem::replace(self, Object::List(Vec::with_capacity(2)));
                *self = Object::List(vec![previous, object]);
            }
        }
    }

    /// Every material id referenced by this object or its members.
    pub fn materials(&self) -> Vec<MaterialId> {
        match self {
            Object::Sphere(sphere) => vec![sphere.material],
            Object::List(list) => list.iter().flat_map(Object::materials).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use super::*;

    fn ray_down_z() -> Ray {
        Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 0.0, -1.0])
    }

    fn sphere(z: f32, radius: f32, material: usize) -> Object {
        Object::Sphere(Sphere::new(point![0.0, 0.0, z], radius, MaterialId(material)))
    }

    #[test]
    fn sphere_hit_from_outside() {
        let sphere = Sphere::new(point![0.0, 0.0, -1.0], 0.5, MaterialId(3));
        let hit = sphere.hit(&ray_down_z(), 0.001..).expect("hit");

        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.point, point![0.0, 0.0, -0.5]);
        assert_eq!(hit.normal, vector![0.0, 0.0, 1.0]);
        assert!(hit.front_face);
        assert_eq!(hit.material, MaterialId(3));
    }

    #[test]
    fn sphere_hit_from_inside_is_back_face() {
        let sphere = Sphere::new(point![0.0, 0.0, 0.0], 2.0, MaterialId(0));
        let hit = sphere.hit(&ray_down_z(), 0.001..).expect("hit");

        assert_eq!(hit.t, 2.0);
        assert!(!hit.front_face);
        assert_eq!(hit.normal, vector![0.0, 0.0, 1.0]);
    }

    #[test]
    fn negative_radius_turns_normals_inward() {
        let sphere = Sphere::new(point![0.0, 0.0, -1.0], -0.5, MaterialId(0));
        let hit = sphere.hit(&ray_down_z(), 0.001..).expect("hit");

        assert!(!hit.front_face);
        assert_eq!(hit.normal, vector![0.0, 0.0, 1.0]);
    }

    #[test]
    fn range_excludes_roots() {
        let sphere = Sphere::new(point![0.0, 0.0, -1.0], 0.5, MaterialId(0));
        assert!(sphere.hit(&ray_down_z(), 0.001..0.4).is_none());
        assert!(sphere.hit(&Ray::new(point![0.0, 2.0, 0.0], vector![0.0, 0.0, -1.0]), ..).is_none());
    }

    #[test]
    fn list_returns_nearest() {
        let world = Object::List(vec![sphere(-5.0, 1.0, 0), sphere(-2.0, 0.5, 1)]);
        let hit = world.hit(&ray_down_z(), 0.001..).expect("hit");

        assert_eq!(hit.material, MaterialId(1));
        assert_eq!(hit.t, 1.5);
    }

    #[test]
    fn push_groups_objects() {
        let mut group = sphere(-5.0, 1.0, 0);
        group.push(sphere(-2.0, 0.5, 1));
        group.push(Object::List(vec![sphere(-8.0, 0.5, 2)]));

        assert!(matches!(&group, Object::List(list) if list.len() == 3));
        assert_eq!(group.materials(), vec![MaterialId(0), MaterialId(1), MaterialId(2)]);
        assert_eq!(group.hit(&ray_down_z(), 0.001..).expect("hit").material, MaterialId(1));
    }
}
