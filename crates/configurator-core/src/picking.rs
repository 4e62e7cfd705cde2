use crate::camera::Ray;
use glam::Vec3;

/// A pickable area of the scene. Implementors only answer whether, and how
/// far along, a ray hits them.
pub trait InteractionRegion {
    /// Nearest non-negative hit distance along `ray`, if any.
    fn intersect(&self, ray: &Ray) -> Option<f32>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereRegion {
    pub center: Vec3,
    pub radius: f32,
}

impl InteractionRegion for SphereRegion {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray_sphere(ray.origin, ray.direction, self.center, self.radius)
    }
}

/// Axis-aligned box described by its center and half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxRegion {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BoxRegion {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// The eight corners, bottom face first.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min(), self.max());
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }
}

impl InteractionRegion for BoxRegion {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        ray_aabb(ray.origin, ray.direction, self.min(), self.max())
    }
}

/// Several regions picked as one, e.g. a cluster of clickable decals.
#[derive(Default)]
pub struct RegionGroup {
    regions: Vec<Box<dyn InteractionRegion>>,
}

impl RegionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: impl InteractionRegion + 'static) {
        self.regions.push(Box::new(region));
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Index and distance of the closest member hit by `ray`.
    pub fn nearest(&self, ray: &Ray) -> Option<(usize, f32)> {
        let mut best = None::<(usize, f32)>;
        for (i, region) in self.regions.iter().enumerate() {
            if let Some(t) = region.intersect(ray) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best
    }
}

impl InteractionRegion for RegionGroup {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.nearest(ray).map(|(_, t)| t)
    }
}

/// Ray/sphere test for a unit-length `ray_dir`. A ray starting inside the
/// sphere reports the exit distance.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    let far = -b + sq;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Slab test against an axis-aligned box. A ray starting inside reports `0`.
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = 0.0_f32;
    let mut t_exit = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        if d.abs() < 1e-8 {
            // parallel to this slab
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_exit < t_enter {
            return None;
        }
    }
    Some(t_enter)
}
