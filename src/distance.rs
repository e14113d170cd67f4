/// Surface distance between trackpoints.
///
/// The metric builders only need "meters between two coordinates"; which
/// earth model answers that is a choice of the caller.
use geo::{point, GeodesicDistance, HaversineDistance};

use crate::trackpoint::Coordinate;

pub trait DistanceModel {
    /// Non-negative surface distance in meters.
    fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMethod {
    /// Ellipsoidal (WGS84) distance, Karney's algorithm.
    #[default]
    Geodesic,
    /// Great-circle distance on a mean-radius sphere.
    Haversine,
}

impl DistanceModel for DistanceMethod {
    fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        let point_a = point!(x: a.longitude, y: a.latitude);
        let point_b = point!(x: b.longitude, y: b.latitude);

        match self {
            DistanceMethod::Geodesic => point_a.geodesic_distance(&point_b),
            DistanceMethod::Haversine => point_a.haversine_distance(&point_b),
        }
    }
}

impl<F> DistanceModel for F
where
    F: Fn(Coordinate, Coordinate) -> f64,
{
    fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        self(a, b)
    }
}
