use crate::intersection::{intersect, Intersection};
use crate::ray::Ray;
use crate::sphere::{Sphere, SphereIds};

/// World context: owns the sphere id allocator and the spheres placed in the scene.
///
/// Sphere ids are unique per scene. Spheres from two scenes must not be mixed.
#[derive(Debug, Default)]
pub struct Scene {
    ids: SphereIds,
    pub spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// New sphere with a fresh id and identity transform. It is not added to the scene.
    pub fn make_sphere(&self) -> Sphere {
        let sphere = Sphere::with_id(self.ids.next());
        tracing::trace!(sphere = %sphere.id(), "sphere created");
        sphere
    }

    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// All intersections of `ray` with the scene, sphere by sphere in insertion order.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        self.spheres
            .iter()
            .flat_map(|sphere| intersect(sphere, ray))
            .collect()
    }
}
