use super::pts_model::Side;

pub const RIGHT_POINTS: &str = "RIGHT_POINTS";
pub const LEFT_POINTS: &str = "LEFT_POINTS";
pub const MID_POINTS: &str = "MID_POINTS";

/// one line of a point file, line feed already stripped
#[derive(Debug, PartialEq)]
pub enum Record<'a> {
    Header(Side),
    Data(&'a [u8]),
}

/// classify a raw line, headers must match byte for byte
pub fn record_type(line: &[u8]) -> Record<'_> {
    if line == RIGHT_POINTS.as_bytes() {
        Record::Header(Side::Right)
    } else if line == LEFT_POINTS.as_bytes() {
        Record::Header(Side::Left)
    } else {
        Record::Data(line)
    }
}
