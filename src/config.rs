use crate::distance::DistanceMethod;
use crate::error::Result;
use crate::smoothing::Window;

pub const DEFAULT_WINDOW: i64 = 5;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Moving-average window in samples. Kept signed so bad input reaches validation.
    pub window: i64,
    pub distance: DistanceMethod,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            window: DEFAULT_WINDOW,
            distance: DistanceMethod::Geodesic,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<Window> {
        Window::new(self.window)
    }
}
