use float_cmp::{ApproxEq, F64Margin};

/// cone coord on the track plane, in meter
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// point at `angle_degrees` on the circle of `radius` around `center`
    pub fn on_circle(center: Point, radius: f64, angle_degrees: f64) -> Self {
        let angle = angle_degrees.to_radians();
        Point {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl ApproxEq for Point {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

#[cfg(test)]
mod test_point {
    use super::*;

    #[test]
    fn test_on_circle() {
        // cos(90 deg) is not exactly zero
        let p = Point::on_circle(Point::new(0.0, -10.5), 9.0, 90.0);
        assert!(p.approx_eq(Point::new(0.0, -1.5), (1e-9, 4)));
        assert!(!p.approx_eq(Point::new(0.0, -1.5), (0.0, 0)));

        let p = Point::on_circle(Point::new(21.0, -10.5), 12.0, -90.0);
        assert!(p.approx_eq(Point::new(21.0, -22.5), F64Margin::default()));
    }

    #[test]
    fn test_approx_eq_margin() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0 + 1e-4, 2.0);
        assert!(!a.approx_eq(b, F64Margin::default()));
        assert!(a.approx_eq(b, (1e-3, 0)));
        assert_eq!(Point::from((1.0, 2.0)), a);
    }
}
