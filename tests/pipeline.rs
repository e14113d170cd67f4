use std::path::Path;

use approx::assert_abs_diff_eq;
use gpx_motion_metrics::gpx_source::read_track_from;
use gpx_motion_metrics::report::write_plot_csv;
use gpx_motion_metrics::{analyze_track, smooth, AnalysisConfig, DistanceMethod, MotionError};

// Stationary rider: elevation changes, position doesn't. Third point repeats
// the second timestamp and must not contribute a rate sample.
const STATIONARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
<trk><name>Stans</name><type>cycling</type><trkseg>
  <trkpt lat="47.2" lon="11.7"><ele>100.0</ele><time>2021-09-26T08:00:00Z</time></trkpt>
  <trkpt lat="47.2" lon="11.7"><ele>105.0</ele><time>2021-09-26T08:00:10Z</time></trkpt>
  <trkpt lat="47.2" lon="11.7"><ele>108.0</ele><time>2021-09-26T08:00:10Z</time></trkpt>
  <trkpt lat="47.2" lon="11.7"><ele>95.0</ele><time>2021-09-26T08:01:10Z</time></trkpt>
</trkseg></trk>
</gpx>"#;

fn track_with_speed() -> String {
    let mut body = String::new();
    for i in 0..10 {
        body.push_str(&format!(
            "  <trkpt lat=\"{:.4}\" lon=\"11.0\"><ele>{:.1}</ele><time>2021-09-26T08:00:{:02}Z</time></trkpt>\n",
            47.0 + i as f64 * 0.0001,
            600.0 + i as f64 * 2.0,
            i * 5
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
<trk><name>Climb</name><trkseg>
{}</trkseg></trk>
</gpx>"#,
        body
    )
}

#[test]
fn stationary_track_rates_and_axis() {
    let track = read_track_from(STATIONARY.as_bytes()).unwrap();
    let config = AnalysisConfig { window: 2, ..AnalysisConfig::default() };
    let report = analyze_track(&track, &config).unwrap();

    assert_eq!(report.elevation.raw.len(), 4);
    assert_eq!(report.elevation.raw.values(), &[100.0, 105.0, 108.0, 95.0]);

    let climb = &report.climb_rate.raw;
    assert_eq!(climb.len(), 2);
    assert_abs_diff_eq!(climb.time()[0], 10.0 / 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(climb.time()[1], 70.0 / 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(climb.values()[0], 0.5, epsilon = 1e-9);
    // 108 -> 95 over 60s, against the immediate predecessor
    assert_abs_diff_eq!(climb.values()[1], -13.0 / 60.0, epsilon = 1e-9);

    assert_eq!(report.velocity.raw.values(), &[0.0, 0.0]);

    let smoothed = &report.climb_rate.smoothed;
    assert_eq!(smoothed.len(), 1);
    assert_eq!(smoothed.time()[0], climb.time()[0]);
}

#[test]
fn moving_track_velocity_and_smoothing() {
    let track = read_track_from(track_with_speed().as_bytes()).unwrap();
    let report = analyze_track(&track, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.velocity.raw.len(), 9);
    assert_eq!(report.velocity.smoothed.len(), 5);
    assert_eq!(report.elevation.smoothed.len(), 6);

    // ~11.1m every 5s
    for &v in report.velocity.raw.values() {
        assert!(v > 2.1 && v < 2.3, "velocity {}", v);
    }
    for &c in report.climb_rate.raw.values() {
        assert_abs_diff_eq!(c, 0.4, epsilon = 1e-9);
    }

    let haversine = AnalysisConfig { distance: DistanceMethod::Haversine, ..AnalysisConfig::default() };
    let spherical = analyze_track(&track, &haversine).unwrap();
    let a = report.velocity.raw.values()[0];
    let b = spherical.velocity.raw.values()[0];
    assert!((a - b).abs() / a < 0.01);
}

#[test]
fn plot_table_covers_every_panel() {
    let track = read_track_from(track_with_speed().as_bytes()).unwrap();
    let report = analyze_track(&track, &AnalysisConfig::default()).unwrap();

    let mut out = Vec::new();
    write_plot_csv(&mut out, &[(Path::new("climb.gpx"), &report)]).unwrap();
    let text = String::from_utf8(out).unwrap();

    // header + (10 + 6) elevation + (9 + 5) climb rate + (9 + 5) velocity
    assert_eq!(text.lines().count(), 1 + 16 + 14 + 14);
    assert!(text.lines().skip(1).all(|line| line.starts_with("climb.gpx,Climb,")));
}

#[test]
fn configuration_errors_are_reported() {
    assert!(matches!(smooth(&[1.0, 2.0], 0), Err(MotionError::InvalidWindow(0))));
    assert!(matches!(smooth(&[1.0, 2.0], -1), Err(MotionError::InvalidWindow(-1))));
    assert!(smooth(&[1.0, 2.0], 3).unwrap().is_empty());
}
