use super::pts_model::*;
use super::pts_record::*;
use std::io::{self, BufRead};

// same set as C isspace
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn count_digits(byte: &[u8]) -> usize {
    byte.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// longest decimal float at the start of `byte`
///
/// returns (number length, consumed length), (0, 0) if none
///
/// accepted forms:
/// [+-] digits [. digits] [exponent]
/// [+-] . digits [exponent]
/// [+-] inf | infinity | nan, any case
///
/// like glibc scanf, a dangling "e" or "e+" with no digit is consumed
/// but not part of the number, so "1.5e+ 3" reads 1.5 then 3
fn float_prefix(byte: &[u8]) -> (usize, usize) {
    let mut idx = 0;
    if let Some(b'+') | Some(b'-') = byte.first() {
        idx = 1;
    }

    let rest = &byte[idx..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return (idx + word.len(), idx + word.len());
        }
    }

    let int_digits = count_digits(rest);
    idx += int_digits;
    let mut frac_digits = 0;
    if let Some(b'.') = byte.get(idx) {
        frac_digits = count_digits(&byte[idx + 1..]);
        if int_digits == 0 && frac_digits == 0 {
            return (0, 0);
        }
        idx += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return (0, 0);
    }

    if let Some(b'e') | Some(b'E') = byte.get(idx) {
        let mut exp_idx = idx + 1;
        if let Some(b'+') | Some(b'-') = byte.get(exp_idx) {
            exp_idx += 1;
        }
        let exp_digits = count_digits(&byte[exp_idx..]);
        if exp_digits == 0 {
            return (idx, exp_idx);
        }
        idx = exp_idx + exp_digits;
    }
    (idx, idx)
}

/// read one float after optional leading blanks, return it with the unread tail
pub(crate) fn scan_f64(s: &str) -> Option<(f64, &str)> {
    let s = s.trim_start_matches(is_blank);
    let (len, consumed) = float_prefix(s.as_bytes());
    if len == 0 {
        return None;
    }
    // prefix is pure ascii, slicing is on a char boundary
    let value = s[..len].parse::<f64>().ok()?;
    Some((value, &s[consumed..]))
}

/// first two numbers of a data line as a point, anything after them is ignored
pub(crate) fn parse_point(line: &str) -> Option<Point> {
    let (x, rest) = scan_f64(line)?;
    let (y, _) = scan_f64(rest)?;
    Some(Point::new(x, y))
}

/// parse `RIGHT_POINTS` / `LEFT_POINTS` sections from `reader`
///
/// points are appended to `right_points` and `left_points`, existing content is kept.
/// lines are split on `\n` only, a trailing `\r` stays part of the line.
/// data lines before any header, or without two leading numbers, are skipped.
///
/// only a read failure returns `Err`, points parsed before it stay appended
pub fn parse_points<R: BufRead>(
    reader: R,
    right_points: &mut Vec<Point>,
    left_points: &mut Vec<Point>,
) -> io::Result<ParseReport> {
    let mut report = ParseReport::default();
    let mut target: Option<Side> = None;

    for line in reader.split(b'\n') {
        let line = line?;
        report.lines += 1;
        match record_type(&line) {
            Record::Header(side) => target = Some(side),
            Record::Data(data) => {
                let side = match target {
                    Some(side) => side,
                    None => {
                        report.untargeted_lines += 1;
                        continue;
                    }
                };
                match parse_point(&String::from_utf8_lossy(data)) {
                    Some(point) => {
                        let points = match side {
                            Side::Right => &mut *right_points,
                            Side::Left => &mut *left_points,
                        };
                        points.push(point);
                        report.count_point(side);
                    }
                    None => report.skipped_lines.push(report.lines),
                }
            }
        }
    }

    Ok(report)
}
