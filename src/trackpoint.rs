/// Trackpoint model shared by the GPX reader and the metric builders.
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single geodetic sample. Elevation in meters, timestamp in UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct Trackpoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timestamp: DateTime<Utc>,
}

impl Trackpoint {
    pub fn new(latitude: f64, longitude: f64, elevation: f64, timestamp: DateTime<Utc>) -> Self {
        Trackpoint {
            latitude,
            longitude,
            elevation,
            timestamp,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Signed seconds from `earlier` to this point, keeping the sub-second part.
    pub fn seconds_since(&self, earlier: &Trackpoint) -> f64 {
        let elapsed = self.timestamp.signed_duration_since(earlier.timestamp);
        match elapsed.num_nanoseconds() {
            Some(nanos) => nanos as f64 / 1e9,
            // Spans beyond ~292 years overflow i64 nanoseconds
            None => elapsed.num_milliseconds() as f64 / 1000.0,
        }
    }

    /// Elapsed minutes since `start`, the unit of every time axis.
    pub fn minutes_since(&self, start: &Trackpoint) -> f64 {
        self.seconds_since(start) / 60.0
    }
}

/// Labels the presentation layer needs; none of it feeds the numeric core.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackInfo {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct Track {
    pub info: TrackInfo,
    pub points: Vec<Trackpoint>,
}
