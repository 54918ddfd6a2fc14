use std::ops::RangeBounds;

use log::debug;
use nalgebra::{point, Point3};

use crate::error::{Error, Result};
use crate::material::{Material, MaterialId};
use crate::object::{Object, Sphere};
use crate::picture::Color;
use crate::ray::{Hit, Ray};

/// Geometry plus the material table its surfaces index into.
#[derive(Clone, Debug)]
pub struct Scene {
    materials: Vec<Material>,
    /// Always a group, so objects can be pushed onto it.
    world: Object,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            materials: Vec::new(),
            world: Object::List(Vec::new()),
        }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_sphere(&mut self, center: Point3<f32>, radius: f32, material: MaterialId) -> Result<()> {
        self.add_object(Object::Sphere(Sphere::new(center, radius, material)))
    }

    /// Adds an object once every material it references is in this scene's table.
    pub fn add_object(&mut self, object: Object) -> Result<()> {
        if let Some(unknown) = object.materials().into_iter().find(|id| self.material(*id).is_none()) {
            return Err(Error::UnknownMaterial(unknown.0));
        }
        self.world.push(object);
        Ok(())
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn hit<R>(&self, ray: &Ray, t_rng: R) -> Option<Hit>
        where R: RangeBounds<f32> + Clone {
        self.world.hit(ray, t_rng)
    }

    /// Ground, a diffuse center ball, a hollow glass ball on the left and a metal ball on the right.
    pub fn weekend() -> Result<Self> {
        let mut scene = Scene::new();

        let ground = scene.add_material(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
        let center = scene.add_material(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
        let glass = scene.add_material(Material::dielectric(1.5));
        let metal = scene.add_material(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));

        scene.add_sphere(point![0.0, -100.5, -1.0], 100.0, ground)?;
        scene.add_sphere(point![0.0, 0.0, -1.0], 0.5, center)?;
        scene.add_object(Object::List(vec![
            Object::Sphere(Sphere::new(point![-1.0, 0.0, -1.0], 0.5, glass)),
            Object::Sphere(Sphere::new(point![-1.0, 0.0, -1.0], -0.4, glass)),
        ]))?;
        scene.add_sphere(point![1.0, 0.0, -1.0], 0.5, metal)?;

        debug!(target: "app", "Built scene with {} materials", scene.materials.len());
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn material_ids_index_the_table() {
        let mut scene = Scene::new();
        let a = scene.add_material(Material::lambertian(Color::WHITE));
        let b = scene.add_material(Material::dielectric(1.5));

        assert_eq!(a, MaterialId(0));
        assert_eq!(b, MaterialId(1));
        assert_eq!(scene.material(b), Some(&Material::dielectric(1.5)));
        assert_eq!(scene.material(MaterialId(2)), None);
    }

    #[test]
    fn rejects_unknown_material() {
        let mut scene = Scene::new();
        let result = scene.add_sphere(point![0.0, 0.0, 0.0], 1.0, MaterialId(0));
        assert!(matches!(result, Err(Error::UnknownMaterial(0))));
    }

    #[test]
    fn rejects_group_with_unknown_member_material() {
        let mut scene = Scene::new();
        let known = scene.add_material(Material::lambertian(Color::WHITE));
        let group = Object::List(vec![
            Object::Sphere(Sphere::new(point![0.0, 0.0, -1.0], 0.5, known)),
            Object::Sphere(Sphere::new(point![0.0, 0.0, -1.0], -0.4, MaterialId(7))),
        ]);

        assert!(matches!(scene.add_object(group), Err(Error::UnknownMaterial(7))));
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 0.0, -1.0]);
        assert!(scene.hit(&ray, 0.001..).is_none());
    }

    #[test]
    fn hollow_glass_group_hits_outer_then_inner_wall() {
        let scene = Scene::weekend().expect("scene");
        let ray = Ray::new(point![-1.0, 0.0, 0.0], vector![0.0, 0.0, -1.0]);

        let outer = scene.hit(&ray, 0.001..).expect("outer wall");
        assert!((outer.t - 0.5).abs() < 1e-6);
        assert!(outer.front_face);
        assert_eq!(scene.material(outer.material), Some(&Material::dielectric(1.5)));

        let inner = scene.hit(&ray, outer.t + 0.001..).expect("inner wall");
        assert!((inner.t - 0.6).abs() < 1e-6);
        assert!(!inner.front_face);
    }

    #[test]
    fn hit_resolves_to_nearest_surface_material() {
        let scene = Scene::weekend().expect("scene");
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 0.0, -1.0]);
        let hit = scene.hit(&ray, 0.001..).expect("center sphere");

        assert_eq!(scene.material(hit.material), Some(&Material::lambertian(Color::new(0.1, 0.2, 0.5))));
    }

    #[test]
    fn empty_scene_misses() {
        let ray = Ray::new(point![0.0, 0.0, 0.0], vector![0.0, 0.0, -1.0]);
        assert!(Scene::new().hit(&ray, 0.001..).is_none());
    }
}
