/// Values paired with an elapsed-minutes time axis.
///
/// Both vectors always have the same length; the only way in is through
/// `push` or `from_pairs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    time: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new() -> Self {
        TimeSeries::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TimeSeries {
            time: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (time, values) = pairs.into_iter().unzip();
        TimeSeries { time, values }
    }

    pub fn push(&mut self, time_min: f64, value: f64) {
        self.time.push(time_min);
        self.values.push(value);
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.values.iter().copied())
    }

    /// (min, mean, max) of the values, `None` for an empty series.
    pub fn stats(&self) -> Option<(f64, f64, f64)> {
        if self.values.is_empty() {
            return None;
        }

        let min = self.values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = self.values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let mean = self.values.iter().sum::<f64>() / self.values.len() as f64;

        Some((min, mean, max))
    }
}
