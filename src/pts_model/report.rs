use super::*;

/// what happened to each line of a parsed point file
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ParseReport {
    /// total lines read
    pub lines: usize,
    pub right_points: usize,
    pub left_points: usize,
    /// 1-based numbers of data lines inside a section that held no valid point
    pub skipped_lines: Vec<usize>,
    /// lines seen before any section header
    pub untargeted_lines: usize,
}

impl ParseReport {
    pub(crate) fn count_point(&mut self, side: Side) {
        match side {
            Side::Right => self.right_points += 1,
            Side::Left => self.left_points += 1,
        }
    }

    /// every line was either a header or a valid point
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty() && self.untargeted_lines == 0
    }
}
