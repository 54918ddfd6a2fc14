use std::time::Instant;

use fastrand::Rng;
use image::RgbImage;
use log::{info, trace};
use nalgebra::{point, Point2};

use crate::camera::{Camera, Viewport};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::picture::Color;
use crate::random::random;
use crate::ray::Ray;
use crate::scene::Scene;

/// Hits closer than this are treated as self-intersections of the surface a ray left from.
const T_MIN: f32 = 0.001;

const SKY_COLOR: Color = Color::new(0.5, 0.7, 1.0);

pub fn render_ray(ray: &Ray, scene: &Scene, rng: &mut Rng, bounces_left: u32) -> Color {
    if bounces_left == 0 {
        return Color::BLACK;
    }

    if let Some(hit) = scene.hit(ray, T_MIN..) {
        let scattered = scene.material(hit.material)
            .and_then(|material| material.scatter(ray, &hit, rng));
        return match scattered {
            Some((attenuation, scattered)) => attenuation * render_ray(&scattered, scene, rng, bounces_left - 1),
            None => Color::BLACK,
        };
    }

    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::WHITE + t * SKY_COLOR
}

/// Produces the color of a single pixel using n randomly placed samples.
/// `p` counts rows from the bottom of the viewport.
pub fn render_pixel(p: Point2<u32>, viewport: &Viewport, scene: &Scene, config: &RenderConfig, rng: &mut Rng) -> Color {
    let sum: Color = (0..config.samples_per_pixel)
        .map(|_| {
            let u = (p.x as f32 + random(rng)) / (viewport.image_width - 1.0);
            let v = (p.y as f32 + random(rng)) / (viewport.image_height - 1.0);
            let ray = viewport.emit_ray(&point![u, v]);
            render_ray(&ray, scene, rng, config.max_depth)
        })
        .sum();
    (sum * (1.0 / config.samples_per_pixel as f32)).gamma_corrected()
}

pub fn render_image(scene: &Scene, camera: &Camera, config: &RenderConfig) -> Result<RgbImage> {
    config.validate()?;

    let (width, height) = (config.width, config.height);
    let viewport = camera.viewport(width, height);
    let mut rng = match config.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    info!(target: "app", "Starting {}x{} render, {} samples per pixel", width, height, config.samples_per_pixel);
    let start = Instant::now();

    let mut image = RgbImage::new(width, height);
    for y in 0..height {
        trace!(target: "app", "Rendering row {} of {}", y + 1, height);
        // image rows run top-down, viewport rows bottom-up
        let row = height - 1 - y;
        for x in 0..width {
            let color = render_pixel(point![x, row], &viewport, scene, config, &mut rng);
            image.put_pixel(x, y, color.into());
        }
    }

    info!(target: "app", "Finished rendering. Took {:?}", start.elapsed());
    Ok(image)
}
