/// Moving Average Smoother - fixed-window mean without boundary padding
///
/// The output is `window - 1` samples shorter than the input and is not
/// re-centered: `smoothed[k]` averages `values[k..k + window]` and belongs at
/// `time[k]` of the unsmoothed axis. Curves drawn this way lag the raw data by
/// about half a window; `align_smoothed` is the one place that pairing happens.
use crate::error::{MotionError, Result};
use crate::time_series::TimeSeries;

/// Validated window size, at least one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window(usize);

impl Window {
    pub fn new(size: i64) -> Result<Self> {
        if size < 1 {
            return Err(MotionError::InvalidWindow(size));
        }
        let size = usize::try_from(size).map_err(|_| MotionError::InvalidWindow(size))?;
        Ok(Window(size))
    }

    pub fn size(&self) -> usize {
        self.0
    }

    /// Mean of every full window; empty when the window is longer than the input.
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        let n = self.0 as f64;
        values
            .windows(self.0)
            .map(|w| w.iter().sum::<f64>() / n)
            .collect()
    }
}

/// Smooth `values` with a moving average of `window` samples.
///
/// A window below one is a configuration error; a window longer than the
/// series is not, it simply yields nothing.
pub fn smooth(values: &[f64], window: i64) -> Result<Vec<f64>> {
    Ok(Window::new(window)?.apply(values))
}

/// Pair `smoothed[k]` with `time[k]`, cutting the axis to the smoothed length.
pub fn align_smoothed(time: &[f64], smoothed: &[f64]) -> TimeSeries {
    TimeSeries::from_pairs(time.iter().copied().zip(smoothed.iter().copied()))
}

/// Smooth a derived series and put the result back on its own time axis.
pub fn smooth_series(series: &TimeSeries, window: Window) -> TimeSeries {
    let smoothed = window.apply(series.values());
    align_smoothed(series.time(), &smoothed)
}
