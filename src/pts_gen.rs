//! reference cone tracks
//!
//! competition track starts at (0, 0) heading +x and is made of
//! a 90 degree right turn, a 90 degree left turn and an 80 m straight.
//! Turns have 9 m inner radius and 3 m track width.
//! The straight is a slalom with cone spacing in [7.5, 12) and 3 to 5 m width.

use super::pts_model::*;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;

const FIRST_CURVE_ANGLES: [f64; 5] = [90.0, 67.5, 45.0, 22.5, 0.0];
const SECOND_CURVE_ANGLES: [f64; 4] = [-157.5, -135.0, -112.5, -90.0];
const FIRST_CURVE_CENTER: Point = Point { x: 0.0, y: -10.5 };
const SECOND_CURVE_CENTER: Point = Point { x: 21.0, y: -10.5 };
const INNER_RADIUS: f64 = 9.0;
const OUTER_RADIUS: f64 = 12.0;

const STRAIGHT_START: Point = Point { x: 21.0, y: -21.0 };
const STRAIGHT_END: Point = Point { x: 101.0, y: -21.0 };
const MIN_CONE_SPACING: f64 = 7.5;
const MAX_CONE_SPACING: f64 = 12.0;
const HALF_WIDTH: f64 = 1.5;

/// circular track width, left cones are this much further out
const CIRCLE_TRACK_WIDTH: f64 = 3.0;

fn curve(center: Point, angles: &[f64], right_radius: f64, left_radius: f64) -> Track {
    Track {
        right: angles
            .iter()
            .map(|&a| Point::on_circle(center, right_radius, a))
            .collect(),
        left: angles
            .iter()
            .map(|&a| Point::on_circle(center, left_radius, a))
            .collect(),
    }
}

/// cut [start, end] at random steps in [min_step, max_step)
///
/// result starts with `start` and always ends with `end`,
/// the last step may be shorter than `min_step`
pub(crate) fn random_partition<R: Rng>(
    rng: &mut R,
    start: f64,
    end: f64,
    min_step: f64,
    max_step: f64,
) -> Vec<f64> {
    if start >= end {
        return Vec::new();
    }

    let mut cuts = vec![start];
    let mut last = start;
    while last < end {
        let next = last + rng.gen_range(min_step..max_step);
        if next > end {
            break;
        }
        cuts.push(next);
        last = next;
    }
    if last != end {
        cuts.push(end);
    }
    cuts
}

fn straight<R: Rng>(rng: &mut R) -> Track {
    let cuts = random_partition(
        rng,
        STRAIGHT_START.x,
        STRAIGHT_END.x,
        MIN_CONE_SPACING,
        MAX_CONE_SPACING,
    );

    let mut track = Track::new();
    // no cones at the start, the second curve already ends there
    for &x in cuts.iter().skip(1) {
        let right_y = STRAIGHT_START.y - HALF_WIDTH - rng.gen_range(0.0..1.0);
        let left_y = STRAIGHT_START.y + HALF_WIDTH + rng.gen_range(0.0..1.0);
        track.right.push(Point::new(x, right_y));
        track.left.push(Point::new(x, left_y));
    }
    track
}

/// competition track, same seed gives the same slalom
pub fn competition_track(seed: u64) -> Track {
    let mut rng = StdRng::seed_from_u64(seed);

    // right turn: right cones on the inner radius
    let mut track = curve(
        FIRST_CURVE_CENTER,
        &FIRST_CURVE_ANGLES,
        INNER_RADIUS,
        OUTER_RADIUS,
    );
    // left turn: right cones on the outer radius
    track.extend(curve(
        SECOND_CURVE_CENTER,
        &SECOND_CURVE_ANGLES,
        OUTER_RADIUS,
        INNER_RADIUS,
    ));
    track.extend(straight(&mut rng));

    debug!(
        "generated competition track with seed {}: {} right, {} left cones",
        seed,
        track.right.len(),
        track.left.len()
    );
    track
}

/// `num_cones` cone pairs evenly spaced around the origin, starting at angle 0
pub fn circular_track(radius: f64, num_cones: usize) -> Result<Track, Box<dyn Error>> {
    if num_cones == 0 {
        return Err(Box::new(pts_err!(
            "circular track needs at least one cone"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Box::new(pts_err!(&format!(
            "circular track radius must be positive, got {}",
            radius
        ))));
    }

    let origin = Point::default();
    let step = 360.0 / num_cones as f64;
    let mut track = Track::new();
    for i in 0..num_cones {
        let angle = i as f64 * step;
        track.right.push(Point::on_circle(origin, radius, angle));
        track
            .left
            .push(Point::on_circle(origin, radius + CIRCLE_TRACK_WIDTH, angle));
    }

    debug!(
        "generated circular track, radius {} with {} cone pairs",
        radius, num_cones
    );
    Ok(track)
}
