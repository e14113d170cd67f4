/// Batch mode: every GPX file under a folder gets its own independent report.
use std::path::{Path, PathBuf};

use log::warn;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::gpx_source::read_track;
use crate::motion_analysis::{analyze_track, MotionReport};

pub struct FileOutcome {
    pub path: PathBuf,
    pub report: Result<MotionReport>,
}

pub fn collect_gpx_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut gpx_files = Vec::new();

    for entry in WalkDir::new(folder) {
        let entry = entry?;
        if entry.file_type().is_file() && is_gpx(entry.path()) {
            gpx_files.push(entry.path().to_path_buf());
        }
    }

    gpx_files.sort();
    Ok(gpx_files)
}

fn is_gpx(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("gpx"))
        .unwrap_or(false)
}

/// Analyze all files in parallel. One failing file never stops the others.
pub fn analyze_folder(folder: &Path, config: &AnalysisConfig) -> Result<Vec<FileOutcome>> {
    // Bad configuration would fail every file the same way
    config.validate()?;

    let gpx_files = collect_gpx_files(folder)?;

    let outcomes = gpx_files
        .par_iter()
        .map(|path| {
            let report = read_track(path).and_then(|track| analyze_track(&track, config));
            if let Err(e) = &report {
                warn!("{}: {}", path.display(), e);
            }
            FileOutcome {
                path: path.clone(),
                report,
            }
        })
        .collect();

    Ok(outcomes)
}
