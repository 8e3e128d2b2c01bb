//! Ray/sphere intersection and hit selection.

use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::tuple::Point;

/// Distance `t` along a ray at which it crosses `object`.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub object: &'a Sphere,
    pub t: f64,
}

impl<'a> Intersection<'a> {
    pub fn new(object: &'a Sphere, t: f64) -> Self {
        Self { object, t }
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object && self.t == other.t
    }
}

/// Intersects `ray` with `sphere`, returning both roots in ascending order.
///
/// A tangent ray yields the same `t` twice. A miss, or a sphere whose
/// transform cannot be inverted, yields nothing.
pub fn intersect<'a>(sphere: &'a Sphere, ray: &Ray) -> Vec<Intersection<'a>> {
    let inverse = match sphere.transform().inverse() {
        Ok(Some(inverse)) => inverse,
        Ok(None) => {
            tracing::debug!(sphere = %sphere.id(), "singular transform, no intersection");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(sphere = %sphere.id(), %err, "malformed transform, no intersection");
            return Vec::new();
        }
    };
    let local = match ray.transform(&inverse) {
        Ok(local) => local,
        Err(err) => {
            tracing::warn!(sphere = %sphere.id(), %err, "ray transform failed");
            return Vec::new();
        }
    };

    // |origin + t * direction|^2 = 1
    // a = direction . direction
    // b = 2 * (direction . sphere_to_ray)
    // c = sphere_to_ray . sphere_to_ray - 1
    let sphere_to_ray = local.origin - Point::ORIGIN;
    let a = local.direction.dot(&local.direction);
    let b = 2.0 * local.direction.dot(&sphere_to_ray);
    let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t1 = (-b - sqrt_discriminant) / (2.0 * a);
    let t2 = (-b + sqrt_discriminant) / (2.0 * a);
    vec![Intersection::new(sphere, t1), Intersection::new(sphere, t2)]
}

/// Nearest intersection with `t >= 0`. Intersections behind the ray origin are skipped.
pub fn hit<'a>(intersections: &[Intersection<'a>]) -> Option<Intersection<'a>> {
    intersections
        .iter()
        .filter(|i| i.t >= 0.0)
        .min_by(|a, b| a.t.total_cmp(&b.t))
        .copied()
}
