use super::*;
use crate::pts_record;

/// which cone line of the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// section header line introducing this side in a point file
    pub fn header(&self) -> &'static str {
        match self {
            Side::Right => pts_record::RIGHT_POINTS,
            Side::Left => pts_record::LEFT_POINTS,
        }
    }
}

/// right and left cone lines of a track, in file order
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Track {
    pub right: Vec<Point>,
    pub left: Vec<Point>,
}

impl Track {
    pub fn new() -> Self {
        Track {
            right: Vec::<Point>::new(),
            left: Vec::<Point>::new(),
        }
    }

    /// cone line of `side`
    pub fn points(&self, side: Side) -> &[Point] {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }

    /// cone line of `side`, for appending
    pub fn points_mut(&mut self, side: Side) -> &mut Vec<Point> {
        match side {
            Side::Right => &mut self.right,
            Side::Left => &mut self.left,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_empty() && self.left.is_empty()
    }

    /// append the points of `other`, side by side
    pub fn extend(&mut self, other: Track) {
        self.right.extend(other.right);
        self.left.extend(other.left);
    }
}

#[cfg(test)]
mod test_track {
    use super::*;

    #[test]
    fn test_track_sides() {
        let mut track = Track::new();
        assert!(track.is_empty());
        track.points_mut(Side::Left).push(Point::new(1.0, 1.0));
        assert!(track.right.is_empty());
        assert_eq!(track.points(Side::Left), &[Point::new(1.0, 1.0)]);
        assert!(!track.is_empty());

        track.extend(Track {
            right: vec![Point::new(2.0, 2.0)],
            left: vec![Point::new(3.0, 3.0)],
        });
        assert_eq!(track.right, vec![Point::new(2.0, 2.0)]);
        assert_eq!(track.left.len(), 2);
        assert_eq!(Side::Right.header(), "RIGHT_POINTS");
    }
}
