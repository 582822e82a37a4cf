use super::pts_model::Point;
use super::pts_record::MID_POINTS;
use std::error::Error;
use std::io::BufRead;

/// a midpoint line holds exactly two numbers, blanks around them are free
fn midpoint(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => Some(Point::new(x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

/// read a `MID_POINTS` file, any malformed line fails the whole read
pub(crate) fn read_midpoints<R: BufRead>(reader: R) -> Result<Vec<Point>, Box<dyn Error>> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            let header = header?;
            if header.trim() != MID_POINTS {
                return Err(Box::new(pts_err!(&format!(
                    "not valid midpoint file, expect header {} but found \"{}\"",
                    MID_POINTS,
                    header.trim()
                ))));
            }
        }
        None => {
            return Err(Box::new(pts_err!(
                "not valid midpoint file, file is empty"
            )))
        }
    }

    let mut mid_points = Vec::<Point>::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        match midpoint(&line) {
            Some(point) => mid_points.push(point),
            None => {
                // header is line 1
                return Err(Box::new(pts_err!(&format!(
                    "invalid midpoint at line {}: \"{}\"",
                    idx + 2,
                    line.trim()
                ))));
            }
        }
    }
    Ok(mid_points)
}

#[cfg(test)]
mod test_pts_reader {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_midpoints() {
        let content = "MID_POINTS\n1.0 2.0\n  -3 4.5  \r\n1e1 0\n";
        let mid = read_midpoints(Cursor::new(content)).unwrap();
        assert_eq!(
            mid,
            vec![Point::new(1.0, 2.0), Point::new(-3.0, 4.5), Point::new(10.0, 0.0)]
        );

        let mid = read_midpoints(Cursor::new(" MID_POINTS \r\n")).unwrap();
        assert!(mid.is_empty());
    }

    #[test]
    fn test_read_midpoints_bad_header() {
        assert!(read_midpoints(Cursor::new("")).is_err());
        assert!(read_midpoints(Cursor::new("RIGHT_POINTS\n1 2\n")).is_err());
        let err = read_midpoints(Cursor::new("1 2\nMID_POINTS\n")).unwrap_err();
        assert!(err.to_string().contains("expect header MID_POINTS"));
    }

    #[test]
    fn test_read_midpoints_bad_line() {
        let err = read_midpoints(Cursor::new("MID_POINTS\n1 2\n3\n")).unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(read_midpoints(Cursor::new("MID_POINTS\n1 2 3\n")).is_err());
        assert!(read_midpoints(Cursor::new("MID_POINTS\n1 y\n")).is_err());
        assert!(read_midpoints(Cursor::new("MID_POINTS\n\n1 2\n")).is_err());
    }
}
