use std::f32::consts::FRAC_PI_2;

use nalgebra::{Point2, Point3, Rotation3, vector, Vector3};

use crate::ray::Ray;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub focal_length: f32,
    /// Vertical field of view in radians.
    pub vertical_fov: f32,
}

impl Camera {
    pub fn new(position: Point3<f32>, focal_length: f32) -> Self {
        Camera {
            position,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            focal_length,
            vertical_fov: FRAC_PI_2,
        }
    }

    pub fn with_vertical_fov(mut self, degrees: f32) -> Self {
        self.vertical_fov = degrees.to_radians();
        self
    }

    pub fn viewport(&self, width: u32, height: u32) -> Viewport {
        let image_width = width as f32;
        let image_height = height as f32;

        // image plane sits focal_length in front of the camera
        let vertical = 2.0 * (self.vertical_fov / 2.0).tan() * self.focal_length;
        let horizontal = vertical * image_width / image_height;

        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw) *
            Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch) *
            Rotation3::from_axis_angle(&Vector3::z_axis(), self.roll);
        let vertical = rotation * vector![0.0, vertical, 0.0];
        let horizontal = rotation * vector![horizontal, 0.0, 0.0];
        let depth = rotation * vector![0.0, 0.0, self.focal_length];

        let lower_left_corner = self.position - vertical / 2.0 - horizontal / 2.0 - depth;

        Viewport {
            origin: self.position,
            image_width,
            image_height,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }
}

pub struct Viewport {
    pub origin: Point3<f32>,
    pub image_width: f32,
    pub image_height: f32,
    pub horizontal: Vector3<f32>,
    pub vertical: Vector3<f32>,
    pub lower_left_corner: Point3<f32>,
}

impl Viewport {
    /// Primary ray through `uv`, where (0, 0) is the lower left corner and (1, 1) the upper right.
    pub fn emit_ray(&self, uv: &Point2<f32>) -> Ray {
        let target = self.lower_left_corner + uv.x * self.horizontal + uv.y * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }
}
