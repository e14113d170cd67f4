//! Motion metrics from GPX tracks.
//!
//! Turns an ordered list of trackpoints into velocity, climb rate and
//! elevation series over elapsed minutes, smooths each with a fixed-window
//! moving average and aligns the smoothed curves back onto the raw time axis.

pub mod batch;
pub mod config;
pub mod derived_series;
pub mod distance;
pub mod error;
pub mod gpx_source;
pub mod motion_analysis;
pub mod report;
pub mod smoothing;
pub mod time_series;
pub mod trackpoint;

pub use config::AnalysisConfig;
pub use derived_series::{derive_climb_rate, derive_raw_elevation, derive_velocity};
pub use distance::{DistanceMethod, DistanceModel};
pub use error::{MotionError, Result};
pub use motion_analysis::{analyze_track, Metric, MetricPanel, MotionReport};
pub use smoothing::{align_smoothed, smooth, Window};
pub use time_series::TimeSeries;
pub use trackpoint::{Coordinate, Track, TrackInfo, Trackpoint};
