/// Derived Series Builder - velocity, climb rate and elevation over time
///
/// Rates come from consecutive trackpoint pairs. A pair whose time delta is
/// zero or negative produces no sample; the next pair is still measured
/// against its own immediate predecessor. Every time axis is minutes since
/// the first trackpoint of the input.
use log::debug;

use crate::distance::DistanceModel;
use crate::time_series::TimeSeries;
use crate::trackpoint::Trackpoint;

/// Horizontal speed in m/s, one sample per pair with a positive time delta.
pub fn derive_velocity<D>(points: &[Trackpoint], distance: &D) -> TimeSeries
where
    D: DistanceModel + ?Sized,
{
    derive_pairwise_rate(points, "velocity", |prev, curr| {
        distance.distance_m(prev.coordinate(), curr.coordinate())
    })
}

/// Vertical speed in m/s (positive while climbing).
pub fn derive_climb_rate(points: &[Trackpoint]) -> TimeSeries {
    derive_pairwise_rate(points, "climb rate", |prev, curr| curr.elevation - prev.elevation)
}

/// Elevation of every point, no skipping: length equals the input length.
pub fn derive_raw_elevation(points: &[Trackpoint]) -> TimeSeries {
    let Some(start) = points.first() else {
        return TimeSeries::new();
    };

    TimeSeries::from_pairs(points.iter().map(|pt| (pt.minutes_since(start), pt.elevation)))
}

fn derive_pairwise_rate<F>(points: &[Trackpoint], label: &str, delta: F) -> TimeSeries
where
    F: Fn(&Trackpoint, &Trackpoint) -> f64,
{
    let Some(start) = points.first() else {
        return TimeSeries::new();
    };

    let mut series = TimeSeries::with_capacity(points.len().saturating_sub(1));

    for (i, pair) in points.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        let dt = curr.seconds_since(prev);

        if dt > 0.0 {
            series.push(curr.minutes_since(start), delta(prev, curr) / dt);
        } else {
            debug!("{}: skipping pair {}->{} with time delta {:.3}s", label, i, i + 1, dt);
        }
    }

    series
}
