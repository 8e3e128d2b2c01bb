//! Small scenes exercising the kernel end to end.

use crate::canvas::{Canvas, CanvasError};
use crate::colour::Colour;
use crate::intersection::hit;
use crate::matrix::MatrixError;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::transform::{rotation_y, transform_point};
use crate::tuple::{Point, Vector};
use crate::util::math::degree_to_radian;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub position: Point,
    pub velocity: Vector,
}

#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub gravity: Vector,
    pub wind: Vector,
}

pub fn tick(env: &Environment, proj: &Projectile) -> Projectile {
    Projectile {
        position: proj.position + proj.velocity,
        velocity: proj.velocity + env.gravity + env.wind,
    }
}

/// Fires a projectile across the canvas and plots its path until it drops
/// below the ground. Returns the number of ticks taken.
///
/// Positions that leave the canvas are not plotted.
pub fn projectile(canvas: &mut Canvas) -> Result<u32, DemoError> {
    let env = Environment {
        gravity: Vector::new(0.0, -0.1, 0.0),
        wind: Vector::new(-0.01, 0.0, 0.0),
    };
    // Launch speed scales with the canvas so the arc roughly fills it.
    let speed = 11.25 * canvas.width() as f64 / 900.0;
    let mut proj = Projectile {
        position: Point::new(0.0, 1.0, 0.0),
        velocity: Vector::new(1.0, 1.8, 0.0).normalize() * speed,
    };

    let colour = Colour::new(1.0, 0.8, 0.2);
    let mut ticks = 0;
    while proj.position.y() > 0.0 {
        let x = proj.position.x().round();
        let y = canvas.height() as f64 - proj.position.y().round();
        if x >= 0.0 && y >= 0.0 {
            match canvas.write_pixel(x as u32, y as u32, colour) {
                Ok(()) | Err(CanvasError::OutOfBounds { .. }) => {}
                Err(err) => return Err(err.into()),
            }
        }
        tracing::trace!(ticks, x = proj.position.x(), y = proj.position.y(), "projectile");
        proj = tick(&env, &proj);
        ticks += 1;
    }

    tracing::info!(ticks, "projectile hit the ground");
    Ok(ticks)
}

/// Twelve hour marks, one every 30 degrees around the y axis, seen from above.
pub fn clock_marks() -> Result<Vec<Point>, MatrixError> {
    let twelve = Point::new(0.0, 0.0, 1.0);
    (0..12)
        .map(|hour| transform_point(&rotation_y(degree_to_radian(hour as f64 * 30.0)), twelve))
        .collect()
}

/// Paints the hour marks on a dial spanning 3/4 of the canvas' shorter side.
pub fn clock(canvas: &mut Canvas) -> Result<(), DemoError> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Ok(());
    }
    // pixel centres run from 0 to side - 1
    let span = (canvas.width().min(canvas.height()) - 1) as f64;
    let radius = span * 3.0 / 8.0;
    let centre = span / 2.0;

    for mark in clock_marks()? {
        let x = (centre + mark.x() * radius).round() as u32;
        let y = (centre - mark.z() * radius).round() as u32;
        canvas.write_pixel(x, y, Colour::WHITE)?;
    }
    Ok(())
}

/// Casts one ray per pixel from `(0, 0, -5)` at a wall at `z = 10` and paints
/// every pixel whose ray hits the unit sphere.
pub fn silhouette(canvas: &mut Canvas) -> Result<usize, DemoError> {
    let mut scene = Scene::new();
    let sphere = scene.make_sphere();
    scene.add(sphere);

    let ray_origin = Point::new(0.0, 0.0, -5.0);
    let wall_z = 10.0;
    let wall_size = 7.0;
    let pixel_size = wall_size / canvas.width() as f64;
    let half = wall_size / 2.0;
    let colour = Colour::new(1.0, 0.0, 0.0);

    let mut painted = 0;
    for y in 0..canvas.height() {
        let world_y = half - pixel_size * y as f64;
        for x in 0..canvas.width() {
            let world_x = -half + pixel_size * x as f64;
            let target = Point::new(world_x, world_y, wall_z);
            let ray = Ray::new(ray_origin, (target - ray_origin).normalize());

            if hit(&scene.intersect(&ray)).is_some() {
                canvas.write_pixel(x, y, colour)?;
                painted += 1;
            }
        }
    }

    tracing::info!(painted, "silhouette rendered");
    Ok(painted)
}
