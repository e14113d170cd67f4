/// Motion Analysis - load-independent pipeline from trackpoints to plot panels
use log::info;

use crate::config::AnalysisConfig;
use crate::derived_series::{derive_climb_rate, derive_raw_elevation, derive_velocity};
use crate::error::Result;
use crate::smoothing::smooth_series;
use crate::time_series::TimeSeries;
use crate::trackpoint::{Track, TrackInfo};

pub const TIME_AXIS_LABEL: &str = "Time (minutes)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Elevation,
    ClimbRate,
    Velocity,
}

impl Metric {
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Elevation => "elevation",
            Metric::ClimbRate => "climb_rate",
            Metric::Velocity => "velocity",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Metric::Elevation => "Elevation Profile",
            Metric::ClimbRate => "Climb Rate",
            Metric::Velocity => "Velocity",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::Elevation => "Elevation (m)",
            Metric::ClimbRate => "Climb Rate (m/s)",
            Metric::Velocity => "Velocity (m/s)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Elevation => "m",
            Metric::ClimbRate | Metric::Velocity => "m/s",
        }
    }
}

/// One metric's raw curve plus its smoothed curve on the raw time axis.
#[derive(Debug, Clone)]
pub struct MetricPanel {
    pub metric: Metric,
    pub raw: TimeSeries,
    pub smoothed: TimeSeries,
}

#[derive(Debug, Clone)]
pub struct MotionReport {
    pub info: TrackInfo,
    pub window: usize,
    pub elevation: MetricPanel,
    pub climb_rate: MetricPanel,
    pub velocity: MetricPanel,
}

impl MotionReport {
    /// Panels in plotting order, top to bottom.
    pub fn panels(&self) -> [&MetricPanel; 3] {
        [&self.elevation, &self.climb_rate, &self.velocity]
    }

    pub fn panel_title(&self, metric: Metric) -> String {
        let name = self.info.name.as_deref().unwrap_or("Unnamed track");
        let kind = self.info.kind.as_deref().unwrap_or("unknown");
        match self.info.date {
            Some(date) => format!("{} for {} ({}) on {}", metric.title(), name, kind, date),
            None => format!("{} for {} ({})", metric.title(), name, kind),
        }
    }
}

pub fn analyze_track(track: &Track, config: &AnalysisConfig) -> Result<MotionReport> {
    let window = config.validate()?;
    let points = &track.points;

    // The three derivations share nothing but the read-only input
    let (velocity, (climb_rate, elevation)) = rayon::join(
        || derive_velocity(points, &config.distance),
        || rayon::join(|| derive_climb_rate(points), || derive_raw_elevation(points)),
    );

    info!(
        "{} points -> {} elevation, {} climb rate, {} velocity samples (window {})",
        points.len(),
        elevation.len(),
        climb_rate.len(),
        velocity.len(),
        window.size()
    );

    let panel = |metric: Metric, raw: TimeSeries| MetricPanel {
        metric,
        smoothed: smooth_series(&raw, window),
        raw,
    };

    Ok(MotionReport {
        info: track.info.clone(),
        window: window.size(),
        elevation: panel(Metric::Elevation, elevation),
        climb_rate: panel(Metric::ClimbRate, climb_rate),
        velocity: panel(Metric::Velocity, velocity),
    })
}
