/// GPX Source - turns a GPX document into ordered trackpoints
///
/// Only the first segment of the first track is used. Points must carry both
/// elevation and timestamp; a missing field is reported with the point index
/// instead of silently dropping the point, since dropping it would shift every
/// time delta after it.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use gpx::{read, Gpx, Waypoint};
use log::info;

use crate::error::{MotionError, Result};
use crate::trackpoint::{Track, TrackInfo, Trackpoint};

pub fn read_track(path: &Path) -> Result<Track> {
    let file = File::open(path)?;
    let track = read_track_from(BufReader::new(file))?;

    info!("{}: loaded {} trackpoints", path.display(), track.points.len());
    Ok(track)
}

pub fn read_track_from<R: Read>(reader: R) -> Result<Track> {
    let gpx = read(reader)?;
    track_from_gpx(gpx)
}

fn track_from_gpx(gpx: Gpx) -> Result<Track> {
    let track = gpx.tracks.into_iter().next().ok_or(MotionError::NoTrack)?;
    let name = track.name.clone();
    let kind = track.type_.clone();

    let segment = track.segments.into_iter().next().ok_or(MotionError::NoSegment)?;

    let points = segment
        .points
        .iter()
        .enumerate()
        .map(|(index, waypoint)| to_trackpoint(index, waypoint))
        .collect::<Result<Vec<_>>>()?;

    let date = points.first().map(|pt| pt.timestamp.date_naive());

    Ok(Track {
        info: TrackInfo { name, kind, date },
        points,
    })
}

fn to_trackpoint(index: usize, waypoint: &Waypoint) -> Result<Trackpoint> {
    let elevation = waypoint
        .elevation
        .ok_or(MotionError::MissingElevation { index })?;
    let time = waypoint.time.ok_or(MotionError::MissingTimestamp { index })?;

    let text = time
        .format()
        .map_err(|e| MotionError::InvalidTimestamp { index, reason: e.to_string() })?;
    let timestamp = parse_timestamp(index, &text)?;

    Ok(Trackpoint::new(
        waypoint.point().y(),
        waypoint.point().x(),
        elevation,
        timestamp,
    ))
}

fn parse_timestamp(index: usize, text: &str) -> Result<DateTime<Utc>> {
    text.parse::<DateTime<Utc>>()
        .map_err(|e| MotionError::InvalidTimestamp {
            index,
            reason: format!("{} ({})", e, text),
        })
}
