//! Track point file development kit
//!
//! Read and write cone point files made of `RIGHT_POINTS` and `LEFT_POINTS` sections
//!
//! Or generate the reference tracks and export them to file

#[macro_use]
pub mod pts_error;
pub mod pts_model;
mod pts_gen;
mod pts_parser;
mod pts_reader;
mod pts_record;
mod pts_writer;

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

use pts_model::{ParseReport, Point, Track};

pub use pts_parser::parse_points;
pub use pts_writer::{point_to_line, write_midpoints, write_points};

/// read point file, append right and left points to the given vectors
///
/// best effort, never fails:
/// a file that can not be opened reads like an empty file,
/// lines that are not a header or a valid point are skipped,
/// points already in `right_points` and `left_points` are kept
///
/// ```no_run
/// let mut right = Vec::new();
/// let mut left = Vec::new();
/// ptsdk::deserialize_points("map.dat", &mut right, &mut left);
/// ```
pub fn deserialize_points<T: AsRef<Path>>(
    points_file: T,
    right_points: &mut Vec<Point>,
    left_points: &mut Vec<Point>,
) {
    let file = match File::open(points_file) {
        Ok(file) => file,
        Err(_) => return,
    };
    // a read failure ends the file early, points before it are kept
    let _ = parse_points(BufReader::new(file), right_points, left_points);
}

/// same as [`deserialize_points`], return new vectors
pub fn read_points<T: AsRef<Path>>(points_file: T) -> Track {
    let mut track = Track::new();
    deserialize_points(points_file, &mut track.right, &mut track.left);
    track
}

/// read point file, fail when it can not be read
///
/// malformed lines are still skipped, the report tells which
pub fn read_track<T: AsRef<Path>>(
    points_file: T,
) -> Result<(Track, ParseReport), Box<dyn Error>> {
    let path = points_file.as_ref();
    let file = File::open(path).map_err(|err| {
        pts_err!(&format!("open point file {} failed: {}", path.display(), err))
    })?;

    let mut track = Track::new();
    let report = parse_points(BufReader::new(file), &mut track.right, &mut track.left)?;
    debug!(
        "read {} lines from {}: {} right, {} left points, {} skipped",
        report.lines,
        path.display(),
        report.right_points,
        report.left_points,
        report.skipped_lines.len() + report.untargeted_lines
    );
    Ok((track, report))
}

/// write right and left points to `points_file`, replace it if exists
pub fn serialize_points<T: AsRef<Path>>(
    points_file: T,
    right_points: &[Point],
    left_points: &[Point],
) -> Result<(), Box<dyn Error>> {
    let path = points_file.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_points(&mut writer, right_points, left_points)?;
    writer.flush()?;
    debug!(
        "wrote {} right and {} left points to {}",
        right_points.len(),
        left_points.len(),
        path.display()
    );
    Ok(())
}

/// write points to `<logs_dir>/<name>_<YYYYmmddHHMMSS>.log`, return the file path
///
/// `logs_dir` is created if missing
pub fn serialize_points_to_logs<T: AsRef<Path>>(
    right_points: &[Point],
    left_points: &[Point],
    name: &str,
    logs_dir: T,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(logs_dir.as_ref())?;
    let path = pts_writer::log_file_path(logs_dir.as_ref(), name, &Local::now());
    serialize_points(&path, right_points, left_points)?;
    Ok(path)
}

/// write a single `MID_POINTS` section to `points_file`
pub fn serialize_midpoints<T: AsRef<Path>>(
    points_file: T,
    mid_points: &[Point],
) -> Result<(), Box<dyn Error>> {
    let path = points_file.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_midpoints(&mut writer, mid_points)?;
    writer.flush()?;
    debug!("wrote {} midpoints to {}", mid_points.len(), path.display());
    Ok(())
}

/// midpoint version of [`serialize_points_to_logs`]
pub fn serialize_midpoints_to_logs<T: AsRef<Path>>(
    mid_points: &[Point],
    name: &str,
    logs_dir: T,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(logs_dir.as_ref())?;
    let path = pts_writer::log_file_path(logs_dir.as_ref(), name, &Local::now());
    serialize_midpoints(&path, mid_points)?;
    Ok(path)
}

/// read a `MID_POINTS` file, unlike point files every line must be valid
pub fn deserialize_midpoints<T: AsRef<Path>>(points_file: T) -> Result<Vec<Point>, Box<dyn Error>> {
    let path = points_file.as_ref();
    let file = File::open(path).map_err(|err| {
        pts_err!(&format!("open midpoint file {} failed: {}", path.display(), err))
    })?;
    pts_reader::read_midpoints(BufReader::new(file))
}

/// competition track: right turn, left turn, then a random slalom seeded by `seed`
pub fn gen_track(seed: u64) -> Track {
    pts_gen::competition_track(seed)
}

/// circular track of `num_cones` cone pairs, left line 3 m outside the right one
pub fn gen_circular_track(radius: f64, num_cones: usize) -> Result<Track, Box<dyn Error>> {
    pts_gen::circular_track(radius, num_cones)
}
