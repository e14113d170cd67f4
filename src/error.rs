use thiserror::Error;

/// Errors raised while loading tracks or configuring the metric pipeline.
///
/// Degenerate data (short tracks, duplicate timestamps, windows longer than a
/// series) is NOT an error: those cases produce empty series instead.
#[derive(Error, Debug)]
pub enum MotionError {
    #[error("Invalid smoothing window: {0}. Window must be at least 1 sample")]
    InvalidWindow(i64),

    #[error("GPX file contains no tracks")]
    NoTrack,

    #[error("First track contains no segments")]
    NoSegment,

    #[error("Trackpoint {index} has no elevation")]
    MissingElevation { index: usize },

    #[error("Trackpoint {index} has no timestamp")]
    MissingTimestamp { index: usize },

    #[error("Trackpoint {index} has an unreadable timestamp: {reason}")]
    InvalidTimestamp { index: usize, reason: String },

    #[error("Failed to parse GPX: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Folder walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, MotionError>;
