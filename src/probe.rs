//! Casts the rays of a [`ProbeConfig`] at its sphere.
//!
//! This is the call pattern a renderer uses on the core: transform the ray, intersect, then
//! evaluate the hit point and the surface normal there.

use crate::config::ProbeConfig;
use crate::prelude::*;
use crate::profile::Profile;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProbeHit {
    /// the ray after the config's transform was applied
    pub ray: Ray,
    pub intersection: RayIntersection,
    pub started_inside: bool,
    pub point: Option<Vector3>,
    pub normal: Option<Vector3>,
}

pub fn probe(config: &ProbeConfig) -> (Vec<ProbeHit>, Profile) {
    let mut profile = Profile::default();
    let hits: Vec<ProbeHit> = config
        .rays
        .iter()
        .map(|r| {
            let ray = r.transformed(&config.transform);
            let intersection = config.sphere.intersect(&ray);
            let started_inside = intersection.hit
                && config
                    .sphere
                    .roots(&ray)
                    .is_some_and(|(entry, _)| entry < 0.0);
            profile.record(&intersection, started_inside);

            let point = intersection.nearest().map(|t| ray.at(t));
            let normal = point.map(|p| config.sphere.normal_at(p));
            trace!("{:?} -> {:?}", ray, intersection);
            ProbeHit {
                ray,
                intersection,
                started_inside,
                point,
                normal,
            }
        })
        .collect();
    (hits, profile)
}
