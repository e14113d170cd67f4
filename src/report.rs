/// Report output: console summary and a long-format plot table.
///
/// Plot rows put every smoothed sample at the raw time it was aligned to, so
/// an external plotter can overlay both series without further slicing.
use std::io::Write;
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::error::Result;
use crate::motion_analysis::{MetricPanel, MotionReport, TIME_AXIS_LABEL};
use crate::time_series::TimeSeries;

#[derive(Debug, Serialize)]
struct PlotRow<'a> {
    source: &'a str,
    track: &'a str,
    metric: &'static str,
    series: &'static str,
    time_min: f64,
    value: f64,
}

/// One table for any number of reports. Rows carry the source file, since
/// track names are optional and need not be unique.
pub fn write_plot_csv<W: Write>(writer: W, reports: &[(&Path, &MotionReport)]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    for (path, report) in reports {
        let source = path.to_string_lossy();
        let track = report.info.name.as_deref().unwrap_or("");
        for panel in report.panels() {
            for (series, data) in [("raw", &panel.raw), ("smoothed", &panel.smoothed)] {
                for (time_min, value) in data.iter() {
                    wtr.serialize(PlotRow {
                        source: &source,
                        track,
                        metric: panel.metric.key(),
                        series,
                        time_min,
                        value,
                    })?;
                }
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn print_report(report: &MotionReport) {
    println!("\n📈 MOTION METRICS (moving average over {} samples)", report.window);
    println!("==================================================");

    for panel in report.panels() {
        print_panel(report, panel);
    }
}

fn print_panel(report: &MotionReport, panel: &MetricPanel) {
    let unit = panel.metric.unit();

    println!("\n{}", report.panel_title(panel.metric));
    println!("  x: {}  y: {}", TIME_AXIS_LABEL, panel.metric.axis_label());
    println!("  Original: {}", describe(&panel.raw, unit));
    println!("  Smoothed: {}", describe(&panel.smoothed, unit));
}

fn describe(series: &TimeSeries, unit: &str) -> String {
    match series.stats() {
        Some((min, mean, max)) => {
            let span = series.time().last().copied().unwrap_or(0.0);
            format!(
                "{} samples over {:.1} min, min {:.2}{u}, mean {:.2}{u}, max {:.2}{u}",
                series.len(),
                span,
                min,
                mean,
                max,
                u = unit
            )
        }
        None => "no data".to_string(),
    }
}
