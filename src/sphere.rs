//! Unit sphere primitive.
//!
//! Every sphere sits at the origin of its own object space with radius 1;
//! its transform maps object space to world space. Identity is carried by a
//! [`SphereId`], so two spheres are equal iff their ids match, whatever their
//! transforms. Ids are only unique within the [`SphereIds`] allocator that
//! handed them out, usually the one owned by a [`crate::scene::Scene`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::matrix::Matrix;

/// Opaque handle naming one sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SphereId(u64);

impl SphereId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sphere#{}", self.0)
    }
}

/// Thread-safe, monotonically increasing id source. The first id handed out is 1.
///
/// Two allocators know nothing of each other and both start at 1.
#[derive(Debug, Default)]
pub struct SphereIds {
    last: AtomicU64,
}

impl SphereIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics once all `u64::MAX` ids have been handed out, rather than reusing one.
    pub fn next(&self) -> SphereId {
        match self
            .last
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| last.checked_add(1))
        {
            Ok(previous) => SphereId(previous + 1),
            Err(_) => panic!("sphere ids exhausted"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sphere {
    id: SphereId,
    transform: Matrix<f64>,
}

impl Sphere {
    /// Sphere with the identity transform. Use [`SphereIds::next`] or
    /// [`crate::scene::Scene::make_sphere`] to obtain a fresh id.
    pub fn with_id(id: SphereId) -> Self {
        Self {
            id,
            transform: Matrix::identity(4),
        }
    }

    pub fn id(&self) -> SphereId {
        self.id
    }

    pub fn transform(&self) -> &Matrix<f64> {
        &self.transform
    }

    /// Replaces the transform wholesale. Invertibility is not checked here;
    /// a singular transform makes the sphere invisible to [`crate::intersection::intersect`].
    pub fn set_transform(&mut self, transform: Matrix<f64>) {
        self.transform = transform;
    }
}

/// Spheres are equal when their ids are. Spheres from different allocators
/// can share an id, so comparing them is meaningless.
impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sphere {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{scale, translation};

    #[test]
    fn ids_are_unique_and_increasing() {
        let ids = SphereIds::new();
        let a = ids.next();
        let b = ids.next();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert!(a < b);
        assert_eq!(a.to_string(), "sphere#1");
    }

    #[test]
    fn default_transform_is_identity() {
        let s = Sphere::with_id(SphereIds::new().next());
        assert_eq!(s.transform(), &Matrix::identity(4));
    }

    #[test]
    fn changing_the_transform() {
        let mut s = Sphere::with_id(SphereIds::new().next());
        s.set_transform(translation(2.0, 3.0, 4.0));
        assert_eq!(s.transform(), &translation(2.0, 3.0, 4.0));
        s.set_transform(scale(2.0, 2.0, 2.0));
        assert_eq!(s.transform(), &scale(2.0, 2.0, 2.0));
    }

    #[test]
    fn equality_follows_identity_not_transform() {
        let ids = SphereIds::new();
        let a = Sphere::with_id(ids.next());
        let mut a_moved = a.clone();
        a_moved.set_transform(translation(1.0, 0.0, 0.0));
        let b = Sphere::with_id(ids.next());

        assert_eq!(a, a_moved);
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_unique_across_threads() {
        let ids = SphereIds::new();
        let mut all: Vec<u64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (0..100).map(|_| ids.next().get()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
    }

    #[test]
    #[should_panic(expected = "sphere ids exhausted")]
    fn the_last_id_is_handed_out_once() {
        let ids = SphereIds {
            last: AtomicU64::new(u64::MAX - 1),
        };
        assert_eq!(ids.next().get(), u64::MAX);
        ids.next();
    }

    #[test]
    fn separate_allocators_both_start_at_one() {
        let first = Sphere::with_id(SphereIds::new().next());
        let second = Sphere::with_id(SphereIds::new().next());
        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 1);
    }
}
