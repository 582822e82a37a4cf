use super::pts_model::{Point, Side};
use super::pts_record::MID_POINTS;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// `x y` with the shortest text that parses back to the same f64
pub fn point_to_line(point: &Point) -> String {
    format!("{:?} {:?}", point.x, point.y)
}

fn write_section<W: Write>(writer: &mut W, header: &str, points: &[Point]) -> io::Result<()> {
    writeln!(writer, "{}", header)?;
    for point in points {
        writeln!(writer, "{}", point_to_line(point))?;
    }
    Ok(())
}

/// right section first, then left
pub fn write_points<W: Write>(
    writer: &mut W,
    right_points: &[Point],
    left_points: &[Point],
) -> io::Result<()> {
    write_section(writer, Side::Right.header(), right_points)?;
    write_section(writer, Side::Left.header(), left_points)
}

pub fn write_midpoints<W: Write>(writer: &mut W, mid_points: &[Point]) -> io::Result<()> {
    write_section(writer, MID_POINTS, mid_points)
}

/// `<logs_dir>/<name>_<YYYYmmddHHMMSS>.log`
pub fn log_file_path<Tz: TimeZone>(logs_dir: &Path, name: &str, time: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: Display,
{
    logs_dir.join(format!("{}_{}.log", name, time.format("%Y%m%d%H%M%S")))
}

#[cfg(test)]
mod test_pts_writer {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_point_to_line() {
        assert_eq!(point_to_line(&Point::new(1.0, 2.0)), "1.0 2.0");
        assert_eq!(point_to_line(&Point::new(3.5, -4.25)), "3.5 -4.25");
        assert_eq!(point_to_line(&Point::new(0.1, -0.0)), "0.1 -0.0");
    }

    #[test]
    fn test_write_points() {
        let mut data = Vec::<u8>::new();
        write_points(
            &mut data,
            &[Point::new(1.0, 2.0), Point::new(3.5, -4.25)],
            &[Point::new(0.0, 0.0)],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "RIGHT_POINTS\n1.0 2.0\n3.5 -4.25\nLEFT_POINTS\n0.0 0.0\n"
        );

        let mut data = Vec::<u8>::new();
        write_points(&mut data, &[], &[]).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "RIGHT_POINTS\nLEFT_POINTS\n");
    }

    #[test]
    fn test_write_midpoints() {
        let mut data = Vec::<u8>::new();
        write_midpoints(&mut data, &[Point::new(10.5, -21.0)]).unwrap();
        assert_eq!(String::from_utf8(data).unwrap(), "MID_POINTS\n10.5 -21.0\n");
    }

    #[test]
    fn test_log_file_path() {
        let time = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        let path = log_file_path(Path::new("logs"), "points", &time);
        assert_eq!(path, Path::new("logs").join("points_20240307090501.log"));
    }
}
