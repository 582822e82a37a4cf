use ptsdk::pts_model::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // competition track with the usual seed
    let track = ptsdk::gen_track(3);
    ptsdk::serialize_points("map.dat", &track.right, &track.left)?;

    let circle = ptsdk::gen_circular_track(20.0, 20)?;
    ptsdk::serialize_points("circ_map.dat", &circle.right, &circle.left)?;

    // midpoints between facing cones of the competition track
    let mid_points: Vec<Point> = track
        .right
        .iter()
        .zip(&track.left)
        .map(|(r, l)| Point::new((r.x + l.x) / 2.0, (r.y + l.y) / 2.0))
        .collect();
    let mid_file = ptsdk::serialize_midpoints_to_logs(&mid_points, "midpoints", "logs")?;

    // read everything back
    let mut right_points = Vec::new();
    let mut left_points = Vec::new();
    ptsdk::deserialize_points("map.dat", &mut right_points, &mut left_points);
    assert_eq!(right_points, track.right);
    assert_eq!(left_points, track.left);

    let (read_circle, report) = ptsdk::read_track("circ_map.dat")?;
    assert_eq!(read_circle, circle);
    assert!(report.is_clean());

    assert_eq!(ptsdk::deserialize_midpoints(&mid_file)?, mid_points);
    println!(
        "map.dat: {} right, {} left cones, midpoints in {}",
        right_points.len(),
        left_points.len(),
        mid_file.display()
    );
    Ok(())
}
